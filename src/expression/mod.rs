//! Expression tree split into submodules for clarity

mod ast;
mod display;
mod errors;

pub use ast::{Command, Expression, Literal, Sequence};
pub use errors::ExpressionError;
