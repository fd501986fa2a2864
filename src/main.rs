// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{error, info, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use cliptrans::app_config::{Config, LogLevel};
use cliptrans::detection::GoogleDetector;
use cliptrans::dispatcher::Dispatcher;
use cliptrans::language::{self, Language};
use cliptrans::notify::{
    AnalyticsSink, ConsoleNotifier, GoogleAnalyticsSink, LogNotifier, NoopAnalytics, Notifier,
};
use cliptrans::pipeline::Aggregator;
use cliptrans::providers::google::GoogleTranslator;
use cliptrans::providers::prompt::PromptTranslator;
use cliptrans::providers::seslisozluk::SesliSozlukTranslator;
use cliptrans::providers::tureng::TurengTranslator;
use cliptrans::providers::yandex::YandexTranslator;
use cliptrans::providers::{Translator, TranslatorKind};
use cliptrans::registry::TranslatorRegistry;

/// CLI Wrapper for TranslatorKind to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliTranslator {
    Google,
    Yandex,
    Tureng,
    SesliSozluk,
    Prompt,
}

impl From<CliTranslator> for TranslatorKind {
    fn from(cli: CliTranslator) -> Self {
        match cli {
            CliTranslator::Google => TranslatorKind::Google,
            CliTranslator::Yandex => TranslatorKind::Yandex,
            CliTranslator::Tureng => TranslatorKind::Tureng,
            CliTranslator::SesliSozluk => TranslatorKind::SesliSozluk,
            CliTranslator::Prompt => TranslatorKind::Prompt,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for cliptrans
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// cliptrans - multi-provider clipboard translation
///
/// Translates copied text by querying several translation providers in
/// parallel and merging their answers into a single deduplicated result.
#[derive(Parser, Debug)]
#[command(name = "cliptrans")]
#[command(version)]
#[command(about = "Multi-provider translation pipeline")]
#[command(long_about = "cliptrans detects the language of a piece of text, queries every \
eligible translation provider concurrently, and prints the merged, deduplicated result.

EXAMPLES:
    cliptrans \"hello world\"                    # One-shot translation
    cliptrans -t German \"hello world\"          # Translate into German
    cliptrans -p google -p yandex \"hello\"      # Restrict the provider set
    cliptrans                                  # Watch mode: one line per event on stdin
    cliptrans completions bash > cliptrans.bash

CONFIGURATION:
    Settings live in a JSON file (target language, per-provider toggles,
    endpoints, timeouts). A default file is created on first run.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Text to translate; omit to read events line-by-line from stdin
    #[arg(value_name = "TEXT")]
    text: Option<String>,

    /// Target language name (e.g. 'Turkish', 'German')
    #[arg(short, long)]
    target_language: Option<String>,

    /// Restrict the run to these providers (repeatable)
    #[arg(short, long, value_enum)]
    provider: Vec<CliTranslator>,

    /// Configuration file path
    #[arg(short, long)]
    config_path: Option<PathBuf>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::color_for_level(record.level());
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Default configuration location: the platform config dir when available,
/// otherwise the working directory
fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("cliptrans").join("conf.json"))
        .unwrap_or_else(|| PathBuf::from("conf.json"))
}

/// Build the translator registry from the configuration
fn build_registry(config: &Config, target: Language) -> Result<Arc<TranslatorRegistry>> {
    let registry = Arc::new(TranslatorRegistry::new());

    for entry in &config.translators {
        let kind = entry.kind()?;
        let translator: Arc<dyn Translator> = match kind {
            TranslatorKind::Google => Arc::new(GoogleTranslator::new(
                entry.endpoint.clone(),
                target,
                entry.timeout_secs,
            )),
            TranslatorKind::Yandex => Arc::new(YandexTranslator::new(
                entry.api_key.clone(),
                entry.endpoint.clone(),
                target,
                entry.timeout_secs,
            )),
            TranslatorKind::Tureng => Arc::new(TurengTranslator::new(
                entry.endpoint.clone(),
                entry.timeout_secs,
            )),
            TranslatorKind::SesliSozluk => Arc::new(SesliSozlukTranslator::new(
                entry.endpoint.clone(),
                entry.timeout_secs,
            )),
            TranslatorKind::Prompt => Arc::new(PromptTranslator::new(
                entry.endpoint.clone(),
                target,
                entry.timeout_secs,
            )),
        };
        registry.register(translator, entry.enabled);
    }

    Ok(registry)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default; the level is
    // raised or lowered after the config is loaded
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "cliptrans", &mut std::io::stdout());
        return Ok(());
    }

    let config_path = cli.config_path.unwrap_or_else(default_config_path);
    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
    }
    let mut config = Config::from_file(&config_path)?;

    if let Some(level) = cli.log_level {
        config.log_level = level.into();
    }
    log::set_max_level(config.log_level.to_level_filter());

    if let Some(name) = cli.target_language {
        config.target_language = name;
    }
    let target = language::from_name(&config.target_language)?;

    // Explicit -p flags on the command line override the persisted toggles
    if !cli.provider.is_empty() {
        for entry in &mut config.translators {
            let kind = entry.kind()?;
            entry.enabled = cli.provider.iter().any(|p| TranslatorKind::from(p.clone()) == kind);
        }
    }

    let registry = build_registry(&config, target)?;
    let detector = Arc::new(GoogleDetector::new(
        config.detection.endpoint.clone(),
        config.detection.timeout_secs,
    ));
    let aggregator = Arc::new(Aggregator::new(detector, Arc::clone(&registry), target));

    let analytics: Arc<dyn AnalyticsSink> =
        if config.analytics.enabled && !config.analytics.tracking_id.is_empty() {
            let client_id = format!("{}", chrono::Utc::now().timestamp());
            Arc::new(GoogleAnalyticsSink::new(
                config.analytics.endpoint.clone(),
                config.analytics.tracking_id.clone(),
                client_id,
            ))
        } else {
            Arc::new(NoopAnalytics)
        };

    // One-shot prints the result; watch mode reports through the log so
    // notifications interleave with the event trace
    let notifier: Arc<dyn Notifier> = if cli.text.is_some() {
        Arc::new(ConsoleNotifier)
    } else {
        Arc::new(LogNotifier)
    };
    let dispatcher = Dispatcher::new(aggregator, notifier, analytics);

    let (tx, rx) = mpsc::channel::<String>(32);

    match cli.text {
        Some(text) => {
            // One-shot mode: a single synthetic clipboard event
            tx.send(text).await.ok();
            drop(tx);
        }
        None => {
            info!(
                "Watching stdin for text events, target language: {}",
                target
            );
            tokio::spawn(async move {
                let mut lines = BufReader::new(tokio::io::stdin()).lines();
                loop {
                    match lines.next_line().await {
                        Ok(Some(line)) => {
                            if tx.send(line).await.is_err() {
                                break;
                            }
                        }
                        Ok(None) => break,
                        Err(e) => {
                            error!("Failed to read stdin: {}", e);
                            break;
                        }
                    }
                }
            });
        }
    }

    dispatcher.run(rx).await;
    Ok(())
}
