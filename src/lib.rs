pub mod cli;
pub mod dashboard;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod model;
pub mod render;
pub mod stats;
