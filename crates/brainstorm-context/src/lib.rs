mod builder;
mod keywords;
mod templates;

pub use builder::build_context;
pub use keywords::{detect_self_reference, extract_keywords, VOCABULARY};
pub use templates::{CONTEXT_HEADER, FALLBACK_TOPIC, HISTORY_HEADER, INSTRUCTIONS};
