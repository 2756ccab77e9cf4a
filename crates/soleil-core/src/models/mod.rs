pub mod category;
pub mod request;

pub use category::Category;
pub use request::{Coordinates, Request};
