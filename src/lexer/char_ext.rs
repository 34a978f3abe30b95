//! Character classes used by the lexeme productions.
pub trait CharExt {
    /// Whitespace that separates lexemes: space, tab and line breaks.
    fn is_separating_whitespace(&self) -> bool;

    fn is_linebreak(&self) -> bool;

    fn is_not_linebreak(&self) -> bool {
        !self.is_linebreak()
    }

    /// A digit, or an underscore used to group digits.
    fn is_digit_or_underscore(&self) -> bool;

    fn is_word_start(&self) -> bool;

    fn is_word_continue(&self) -> bool;
}
impl CharExt for char {
    fn is_separating_whitespace(&self) -> bool {
        matches!(self, ' ' | '\t' | '\n' | '\r')
    }

    fn is_linebreak(&self) -> bool {
        *self == '\n' || *self == '\r'
    }

    fn is_digit_or_underscore(&self) -> bool {
        self.is_ascii_digit() || *self == '_'
    }

    fn is_word_start(&self) -> bool {
        self.is_ascii_alphabetic() || *self == '_'
    }

    fn is_word_continue(&self) -> bool {
        self.is_ascii_alphanumeric() || *self == '_'
    }
}
