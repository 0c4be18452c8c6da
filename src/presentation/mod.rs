//! Browser surface: card markup, the DOM-backed view and button wiring.

pub mod bindings;
pub mod card;
pub mod dom_view;

pub use bindings::mount_catalog;
pub use dom_view::DomCatalogView;
