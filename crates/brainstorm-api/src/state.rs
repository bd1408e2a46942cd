use std::sync::Arc;

use brainstorm_llm::{ClientFactory, ProviderEnsemble};
use brainstorm_persist::{HistoryStore, RestHistoryClientBuilder};

use crate::config::Config;

/// Shared application state passed to all handlers
///
/// Everything here is read-only after startup; request-scoped data lives on
/// the handler's stack only.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub ensemble: Arc<ProviderEnsemble>,
    pub history: Option<Arc<dyn HistoryStore>>,
}

impl AppState {
    pub fn new(
        config: Config,
        ensemble: ProviderEnsemble,
        history: Option<Arc<dyn HistoryStore>>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            ensemble: Arc::new(ensemble),
            history,
        }
    }

    /// Build provider clients and the optional history client from config
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let timeout = config.llm.request_timeout();
        let ensemble = ClientFactory::create_ensemble(config.providers.clone(), timeout)?;

        let history = match &config.history {
            Some(history) => {
                let client = RestHistoryClientBuilder::new()
                    .base_url(&history.base_url)
                    .api_key(&history.api_key)
                    .table(&history.table)
                    .order_column(&history.order_column)
                    .timeout(timeout)
                    .build()?;
                Some(Arc::new(client) as Arc<dyn HistoryStore>)
            }
            None => None,
        };

        Ok(Self::new(config, ensemble, history))
    }
}
