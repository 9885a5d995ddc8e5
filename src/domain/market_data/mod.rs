//! Market data aggregate: quotes, history, news and their constant tables.

pub mod catalog;
pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
