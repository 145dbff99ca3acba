pub mod gh;
pub mod payload;

pub use gh::{GhClient, DEFAULT_TIMEOUT, QUERY};
pub use payload::{load_payload, parse_payload};
