//! Errors raised while lexing a source.
use std::{
    fmt::{Display, Formatter},
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::{error::PositionalError, ext::PathExt, span::*};

/// A run of characters that no lexeme could be recognised from.
///
/// These are ordinary results of lexing: an [`Error`] lexeme marks the same
/// section in the lexeme sequence, and lexing carries on after it.
///
/// [`Error`]: super::tokens::LexemeKind::Error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub path: PathBuf,
    pub range: Span,
    pub text: String,
}

impl LexError {
    pub fn new(path: &Path, range: Span, text: &str) -> Self {
        Self {
            path: path.to_path_buf(),
            range,
            text: text.to_string(),
        }
    }

    fn noun(&self) -> &'static str {
        if self.text.chars().count() > 1 {
            "these characters"
        } else {
            "this character"
        }
    }

    /// The same error, with its path shown relative to `root`.
    pub fn relative_to(self, root: &Path) -> Self {
        Self {
            path: self.path.beyond(root).to_path_buf(),
            ..self
        }
    }
}

impl Display for LexError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: error: could not recognize {}: '{}'",
            self.path.display(),
            self.noun(),
            self.text
        )
    }
}

impl PositionalError for LexError {
    fn range(&self) -> Span {
        self.range
    }

    fn describe(&self) -> String {
        format!("could not recognize {}", self.noun())
    }
}

/// A failure that stops a source from being lexed at all. Never caused by
/// the contents of the source.
#[derive(Debug, Error)]
pub enum LexFault {
    #[error("{} has already been lexed", .0.display())]
    AlreadyLexed(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error(text: &str) -> LexError {
        let range = Span::new(Bytes::new(0), Bytes::new(text.len()));
        LexError::new(Path::new("Pkg/Main.tr"), range, text)
    }

    #[test]
    fn single_character_message() {
        assert_eq!(
            error("@").to_string(),
            "Pkg/Main.tr: error: could not recognize this character: '@'"
        );
    }

    #[test]
    fn multiple_character_message() {
        assert_eq!(
            error("@#$").to_string(),
            "Pkg/Main.tr: error: could not recognize these characters: '@#$'"
        );
    }

    #[test]
    fn multibyte_character_counts_as_one() {
        assert_eq!(error("é").describe(), "could not recognize this character");
    }

    #[test]
    fn relative_to_shortens_path() {
        let error = error("@").relative_to(Path::new("Pkg"));

        assert_eq!(error.path, PathBuf::from("Main.tr"));
    }
}
