mod client;

pub use client::RestHistoryClient;
