//! Chart aggregate: line series, value axis fitting and projection.

pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use services::*;
pub use value_objects::*;
