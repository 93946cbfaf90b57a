//! Mesh data model and OBJ loading

mod data;
mod loader;

pub use data::*;
pub use loader::*;
