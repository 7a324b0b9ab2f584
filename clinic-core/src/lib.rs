pub mod models;
pub mod validate;

pub use models::*;
pub use validate::FieldError;
