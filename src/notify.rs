/*!
 * Notification and analytics sinks.
 *
 * Both sinks sit at the interface boundary of the pipeline: notifications
 * are fire-and-forget and must not block a run; analytics is best-effort
 * and its failures are swallowed into the log, never propagated.
 */

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::Client;

/// Consumes (title, body) notification pairs. Implementations must not
/// block the pipeline; delivery failures are the implementation's problem.
pub trait Notifier: Send + Sync {
    fn notify(&self, title: &str, body: &str);
}

/// Notifier that writes notifications through the log facade.
///
/// Used in watch mode, where results interleave with the event log;
/// stands in for a desktop popup sink, which only requires the `notify`
/// shape.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, title: &str, body: &str) {
        info!("[{}] {}", title, body);
    }
}

/// Best-effort event tracking; errors are ignored by contract
#[async_trait]
pub trait AnalyticsSink: Send + Sync {
    async fn track_event(&self, category: &str, action: &str, label: &str);
}

/// Analytics sink posting Measurement Protocol hits to Google Analytics.
/// Every failure is logged at debug level and dropped.
pub struct GoogleAnalyticsSink {
    client: Client,
    endpoint: String,
    tracking_id: String,
    client_id: String,
}

impl GoogleAnalyticsSink {
    pub const DEFAULT_ENDPOINT: &'static str = "https://www.google-analytics.com";

    /// Create a new analytics sink
    pub fn new(
        endpoint: impl Into<String>,
        tracking_id: impl Into<String>,
        client_id: impl Into<String>,
    ) -> Self {
        let endpoint = endpoint.into();
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(5))
                .build()
                .unwrap_or_default(),
            endpoint: if endpoint.is_empty() {
                Self::DEFAULT_ENDPOINT.to_string()
            } else {
                endpoint
            },
            tracking_id: tracking_id.into(),
            client_id: client_id.into(),
        }
    }
}

#[async_trait]
impl AnalyticsSink for GoogleAnalyticsSink {
    async fn track_event(&self, category: &str, action: &str, label: &str) {
        let collect_url = format!("{}/collect", self.endpoint.trim_end_matches('/'));
        let outcome = self
            .client
            .post(&collect_url)
            .form(&[
                ("v", "1"),
                ("t", "event"),
                ("tid", self.tracking_id.as_str()),
                ("cid", self.client_id.as_str()),
                ("ec", category),
                ("ea", action),
                ("el", label),
            ])
            .send()
            .await;

        match outcome {
            Ok(response) if !response.status().is_success() => {
                debug!("Analytics hit rejected with status {}", response.status());
            }
            Ok(_) => {}
            Err(e) => debug!("Analytics hit failed: {}", e),
        }
    }
}

/// Analytics sink that does nothing; used in tests and when tracking is
/// disabled in the configuration
pub struct NoopAnalytics;

#[async_trait]
impl AnalyticsSink for NoopAnalytics {
    async fn track_event(&self, category: &str, action: &str, _label: &str) {
        let _ = (category, action);
    }
}

/// Notifier printing to stdout; used by the one-shot CLI mode
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, title: &str, body: &str) {
        if body.is_empty() {
            warn!("Empty notification body for {:?}", title);
            return;
        }
        println!("{}\n{}", title, body);
    }
}
