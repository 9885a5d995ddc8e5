pub mod auth_flow;

pub use auth_flow::*;
