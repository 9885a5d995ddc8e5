//! Sign-in wizard: login or signup, then a one-time code, then (for new
//! accounts) a document upload.

pub mod forms;
pub mod validation;
pub mod wizard;

pub use forms::*;
pub use wizard::*;
