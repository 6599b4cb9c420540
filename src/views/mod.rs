//! The views module contains the page-level components of the app.

mod home;
pub use home::Home;
