use crate::span::Span;

/// An error that points at a section of a source text.
pub trait PositionalError {
    fn range(&self) -> Span;
    fn describe(&self) -> String;
}
