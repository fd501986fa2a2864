/*!
 * Event dispatcher: the single consumer of clipboard text events.
 *
 * The clipboard source (whatever it is) pushes text events into an mpsc
 * channel; the dispatcher spawns one detached task per event, so runs may
 * overlap when events arrive faster than translation latency. The only
 * cross-run guarantee is the aggregator's single-flight guard. No error
 * escapes an event task: everything surfaces as a notification.
 */

use std::sync::Arc;

use log::{debug, error};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::notify::{AnalyticsSink, Notifier};
use crate::pipeline::Aggregator;

/// Notification title used for every failure surfaced to the user
const ERROR_TITLE: &str = "Error";

/// Consumes clipboard text events and drives pipeline runs
pub struct Dispatcher {
    aggregator: Arc<Aggregator>,
    notifier: Arc<dyn Notifier>,
    analytics: Arc<dyn AnalyticsSink>,
}

impl Dispatcher {
    /// Create a new dispatcher
    pub fn new(
        aggregator: Arc<Aggregator>,
        notifier: Arc<dyn Notifier>,
        analytics: Arc<dyn AnalyticsSink>,
    ) -> Self {
        Self {
            aggregator,
            notifier,
            analytics,
        }
    }

    /// Consume events until the channel closes. Each event runs on its own
    /// task; the loop does not wait for a run to finish before taking the
    /// next event. In-flight runs are joined before returning so shutdown
    /// never drops a pending notification.
    pub async fn run(&self, mut events: mpsc::Receiver<String>) {
        let mut in_flight: Vec<JoinHandle<()>> = Vec::new();

        while let Some(text) = events.recv().await {
            in_flight.retain(|handle| !handle.is_finished());

            let aggregator = Arc::clone(&self.aggregator);
            let notifier = Arc::clone(&self.notifier);
            let analytics = Arc::clone(&self.analytics);

            in_flight.push(tokio::spawn(async move {
                handle_event(&text, aggregator, notifier, analytics).await;
            }));
        }

        for handle in in_flight {
            if let Err(e) = handle.await {
                error!("Event task panicked: {}", e);
            }
        }
        debug!("Event channel closed, dispatcher stopping");
    }
}

/// One pipeline run for one clipboard event.
///
/// Adapter failures arrive inside the organized result; a detection or
/// orchestration failure becomes a single "Error" notification. The
/// analytics trace runs after the notifications and cannot affect them.
async fn handle_event(
    text: &str,
    aggregator: Arc<Aggregator>,
    notifier: Arc<dyn Notifier>,
    analytics: Arc<dyn AnalyticsSink>,
) {
    match aggregator.translate(text).await {
        Ok(None) => {}
        Ok(Some(organized)) => {
            if !organized.merged_text.is_empty() {
                notifier.notify(text, &organized.merged_text);
            }
            if organized.has_failures() {
                // All-failed runs are surfaced as a visible error; partial
                // failures ride along under the source text title.
                let title = if organized.is_empty() { ERROR_TITLE } else { text };
                notifier.notify(title, &organized.failure_text);
            }

            let label = format!("{} -> {}", text, aggregator.target());
            let _ = tokio::spawn(async move {
                analytics.track_event("cliptrans", "translate", &label).await;
            });
        }
        Err(e) => {
            notifier.notify(ERROR_TITLE, &e.to_string());
        }
    }
}
