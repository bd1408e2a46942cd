pub mod config;
pub mod ensemble;
pub mod error;
mod http;
pub mod huggingface;
pub mod openai;
pub mod traits;
pub mod types;

pub use config::{
    ChatCompletionsConfig, ClientFactory, HuggingFaceConfig, ProviderConfig, ProviderDetails,
    ProviderType,
};
pub use ensemble::ProviderEnsemble;
pub use error::ProviderError;
pub use huggingface::HuggingFaceClient;
pub use openai::ChatCompletionsClient;
pub use traits::ProviderClient;
pub use types::{Message, Outcome, ProviderResult};
