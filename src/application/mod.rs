pub mod controller;
pub mod pipeline;
pub mod view;

pub use controller::*;
pub use pipeline::*;
pub use view::*;
