pub mod debounce;
pub mod service;
pub mod state;

pub use debounce::Debouncer;
pub use service::*;
pub use state::*;
