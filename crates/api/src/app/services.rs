//! Infrastructure wiring: catalog provider, notifier, evaluator.

use std::sync::Arc;

use printerp_alerting::{AlertNotifier, EvaluateError, StockAlert, StockAlertEvaluator};
use printerp_catalog::{HttpCatalog, InMemoryCatalog, MaterialCatalogProvider};
use printerp_notify::{InMemoryNotifier, Subscription, TracingNotifier};

/// Notifier used by the API: structured log plus in-memory stream fan-out.
#[derive(Debug)]
struct FanoutNotifier {
    log: TracingNotifier,
    stream: Arc<InMemoryNotifier>,
}

impl AlertNotifier for FanoutNotifier {
    fn notify(&self, alert: &StockAlert) {
        self.log.notify(alert);
        self.stream.notify(alert);
    }
}

/// Application services shared across request handlers.
pub struct AppServices {
    evaluator: StockAlertEvaluator<Arc<dyn MaterialCatalogProvider>, FanoutNotifier>,
    stream: Arc<InMemoryNotifier>,
}

impl AppServices {
    /// Wire services against the given catalog provider.
    pub fn new(provider: Arc<dyn MaterialCatalogProvider>) -> Self {
        let stream = Arc::new(InMemoryNotifier::new());
        let notifier = FanoutNotifier {
            log: TracingNotifier::new(),
            stream: Arc::clone(&stream),
        };

        Self {
            evaluator: StockAlertEvaluator::new(provider, notifier),
            stream,
        }
    }

    /// Wire services from the environment.
    ///
    /// `CATALOG_BASE_URL` selects the upstream HTTP catalog; when unset, the
    /// API serves an empty in-memory catalog (dev default).
    pub fn from_env() -> Self {
        let provider: Arc<dyn MaterialCatalogProvider> = match std::env::var("CATALOG_BASE_URL") {
            Ok(base) if !base.trim().is_empty() => match HttpCatalog::new(base.trim()) {
                Ok(catalog) => {
                    tracing::info!(base_url = catalog.base_url(), "using upstream HTTP catalog");
                    Arc::new(catalog)
                }
                Err(e) => {
                    tracing::warn!(error = %e, "failed to build HTTP catalog; serving an empty in-memory catalog");
                    Arc::new(InMemoryCatalog::new())
                }
            },
            _ => {
                tracing::warn!("CATALOG_BASE_URL not set; serving an empty in-memory catalog");
                Arc::new(InMemoryCatalog::new())
            }
        };

        Self::new(provider)
    }

    /// Run one evaluation over the latest catalog snapshot.
    pub async fn evaluate(&self) -> Result<Vec<StockAlert>, EvaluateError> {
        self.evaluator.evaluate().await
    }

    /// Subscribe to the notification stream fed by evaluations.
    pub fn subscribe(&self) -> Subscription {
        self.stream.subscribe()
    }
}
