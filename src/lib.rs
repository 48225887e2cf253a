#[macro_use]
pub mod macros;

pub mod cli;
pub mod codegen;
pub mod document;
pub mod error;
pub mod extract;
pub mod reporter;
pub mod source;

pub use error::{Error, Result};
