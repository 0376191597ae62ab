pub mod container;
pub mod definition;
pub mod loader;

pub use container::*;
pub use definition::*;
pub use loader::*;
