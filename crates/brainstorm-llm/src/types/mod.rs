pub mod message;
pub mod outcome;

pub use message::Message;
pub use outcome::{Outcome, ProviderResult};
