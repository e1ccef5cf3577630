pub mod api;
pub mod builder;
pub mod error;
pub mod event;
pub mod lexer;
pub mod parser;
pub mod scalar;
pub mod value;
mod serialization;

pub use api::{parse, parse_with_name};
pub use error::AgtypeError;
pub use value::{Agtype, Annotated};
