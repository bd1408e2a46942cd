use crate::error::Result;
use crate::types::ProviderResult;
use async_trait::async_trait;

/// Trait for hosted inference providers
///
/// Implementors only provide the fallible `generate`; `call` is the total
/// entry point used by the ensemble and never fails past its own boundary.
#[async_trait]
pub trait ProviderClient: Send + Sync {
    /// Label used to tag results (provider or model name)
    fn label(&self) -> &str;

    /// Send one prompt and extract the generated text
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Send one prompt, folding any failure into a labeled result
    async fn call(&self, prompt: &str) -> ProviderResult {
        match self.generate(prompt).await {
            Ok(text) => ProviderResult::success(self.label(), text),
            Err(e) => {
                tracing::warn!(provider = %self.label(), error = %e, "Provider call failed");
                ProviderResult::failure(self.label(), e.to_string())
            }
        }
    }
}
