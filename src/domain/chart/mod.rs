//! Chart aggregate: series value objects and layout services.

pub mod services;
pub mod value_objects;

pub use services::*;
pub use value_objects::*;
