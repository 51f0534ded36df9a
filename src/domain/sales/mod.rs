//! Sales aggregate containing entities, value objects and the mock generator.

pub mod entities;
pub mod generator;
pub mod value_objects;

pub use entities::*;
pub use generator::*;
pub use value_objects::*;
