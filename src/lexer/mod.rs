//! Functionality for converting a source text into a [`Lexeme`] sequence.
mod char_ext;
mod char_lexer;
mod error;
mod lexer;

pub mod tokens;

pub use error::*;
pub use lexer::*;

#[allow(unused_imports, reason = "Docstring uses this")]
use tokens::Lexeme;
