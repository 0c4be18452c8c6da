//! Catalog aggregate: items, filters, pagination and the repository contract.

pub mod entities;
pub mod outcome;
pub mod pagination;
pub mod repositories;
pub mod value_objects;

pub use entities::*;
pub use outcome::*;
pub use pagination::*;
pub use repositories::*;
pub use value_objects::*;
