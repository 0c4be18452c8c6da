pub mod http;
pub mod services;

pub use http::CatalogApiClient;
