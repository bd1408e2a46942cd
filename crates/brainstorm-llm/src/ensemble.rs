use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;

use crate::error::ProviderError;
use crate::traits::ProviderClient;
use crate::types::ProviderResult;

/// Ordered set of providers dispatched together.
///
/// Each dispatch spawns one task per provider, bounds it with its own
/// timeout, and joins them in configured order. A slow, failing or panicking
/// provider only affects its own slot.
#[derive(Clone)]
pub struct ProviderEnsemble {
    providers: Vec<Arc<dyn ProviderClient>>,
    timeout: Duration,
}

impl ProviderEnsemble {
    pub fn new(providers: Vec<Arc<dyn ProviderClient>>, timeout: Duration) -> Self {
        Self { providers, timeout }
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn labels(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.label()).collect()
    }

    /// Send `prompt` to every provider and wait for all of them
    pub async fn dispatch(&self, prompt: &str) -> Vec<ProviderResult> {
        let prompt: Arc<str> = Arc::from(prompt);
        let timeout = self.timeout;

        let handles = self.providers.iter().map(|provider| {
            let label = provider.label().to_string();
            let provider = Arc::clone(provider);
            let prompt = Arc::clone(&prompt);

            let handle = tokio::spawn(async move {
                match tokio::time::timeout(timeout, provider.call(&prompt)).await {
                    Ok(result) => result,
                    Err(_) => {
                        let err = ProviderError::Timeout(timeout);
                        tracing::warn!(provider = %provider.label(), error = %err, "Provider call timed out");
                        ProviderResult::failure(provider.label(), err.to_string())
                    }
                }
            });

            (label, handle)
        });

        // join_all keeps input order regardless of completion order
        let (labels, handles): (Vec<_>, Vec<_>) = handles.unzip();
        let joined = join_all(handles).await;

        labels
            .into_iter()
            .zip(joined)
            .map(|(label, joined)| {
                let result = joined.unwrap_or_else(|e| {
                    tracing::error!(provider = %label, error = %e, "Provider task aborted");
                    ProviderResult::failure(&label, "provider task aborted")
                });
                tracing::debug!(provider = %label, success = result.is_success(), "Provider finished");
                result
            })
            .collect()
    }
}
