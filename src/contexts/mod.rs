// Configuration and error types shared across the application
pub mod config;
pub mod error;

pub use config::*;
pub use error::*;
