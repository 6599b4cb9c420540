pub mod query;
pub mod store;
pub mod types;

pub use store::*;
pub use types::*;
