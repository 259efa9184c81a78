pub mod error;
pub mod logger;
pub mod names;
pub mod validation;
