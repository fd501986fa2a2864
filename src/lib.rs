/*!
 * # cliptrans - multi-provider clipboard translation
 *
 * A Rust library for translating copied text by fanning out to several
 * translation providers concurrently and merging their answers.
 *
 * ## Features
 *
 * - Detect the source language of copied text
 * - Query every eligible provider in parallel:
 *   - Google Translate
 *   - Yandex Translate
 *   - Tureng (Turkish targets)
 *   - SesliSozluk (Turkish targets)
 *   - PROMT / online-translator.com
 * - Deduplicate and merge results in provider-priority order
 * - Isolate individual provider failures into a separate failure channel
 * - At most one pipeline run per distinct input (single-flight guard)
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `language`: Closed target-language table and lookups
 * - `detection`: Source-language detection
 * - `providers`: One adapter per translation backend
 * - `registry`: Active-provider registry with eligibility snapshots
 * - `pipeline`: The aggregator and result organizer
 * - `dispatcher`: Channel-driven event loop, one task per clipboard event
 * - `notify`: Notification and analytics sinks
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod detection;
pub mod dispatcher;
pub mod errors;
pub mod language;
pub mod notify;
pub mod pipeline;
pub mod providers;
pub mod registry;

// Re-export main types for easier usage
pub use app_config::Config;
pub use dispatcher::Dispatcher;
pub use errors::{AppError, DetectionError, PipelineError, ProviderError};
pub use pipeline::{Aggregator, OrganizedResult};
pub use providers::{TranslateRequest, TranslateResult, Translator, TranslatorKind};
pub use registry::TranslatorRegistry;
