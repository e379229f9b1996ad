pub mod dtos;
pub mod handlers;
pub mod source;

pub use source::{HttpProductSource, ProductSource};
