pub mod auth;
pub mod catalog;
pub mod errors;
pub mod logging;
