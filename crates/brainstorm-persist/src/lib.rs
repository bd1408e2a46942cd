pub mod builder;
pub mod error;
pub mod models;
pub mod rest;
pub mod trait_client;

pub use builder::RestHistoryClientBuilder;
pub use error::PersistError;
pub use models::HistoryRecord;
pub use rest::RestHistoryClient;
pub use trait_client::HistoryStore;
