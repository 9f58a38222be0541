pub mod error;
pub mod lenient;
pub mod logger;
pub mod validation;
