use crate::span::{Bytes, Span};

/// A cursor over a source string with byte position information.
///
/// The only state is the position, so a tentative match is undone by
/// remembering [`CharLexer::position`] and handing it back to
/// [`CharLexer::rewind`].
#[derive(Clone)]
pub struct CharLexer<'a> {
    source: &'a str,
    byte_position: Bytes,
}

impl<'a> CharLexer<'a> {
    /// Constructs a new [`CharLexer`] for the given source string,
    /// starting at position `0`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            byte_position: Bytes::new(0),
        }
    }

    /// The whole source string, independent of the position.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Retrieves the byte position of the lexer.
    pub fn position(&self) -> Bytes {
        self.byte_position
    }

    /// Moves the lexer back to a position it was at before.
    pub fn rewind(&mut self, position: Bytes) {
        debug_assert!(position <= self.byte_position, "rewind must not move forward");
        self.byte_position = position;
    }

    /// The span from `start` up to the current position.
    pub fn span_from(&self, start: Bytes) -> Span {
        Span::new(start, self.byte_position)
    }

    fn remaining(&self) -> &'a str {
        &self.source[self.byte_position.into()..]
    }

    /// Returns the next character without consuming it.
    /// Returns [`None`] if the lexer cannot advance any further.
    pub fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Tries to advance the lexer by one character.
    /// Returns the character wrapped in an [`Option`] if it was successful,
    /// or [`None`] if the lexer cannot advance any further.
    pub fn try_next(&mut self) -> Option<char> {
        let next = self.peek();
        if let Some(ch) = next {
            self.byte_position += ch.len_utf8();
        }
        next
    }

    /// Peeks at the next character, and consumes it if it matches the provided character.
    /// Returns true if the character was consumed, false otherwise.
    pub fn recognise(&mut self, character: char) -> bool {
        self.recognise_if(|&ch| ch == character)
    }

    /// Consumes the next character if it is any of `characters`.
    pub fn recognise_any(&mut self, characters: &[char]) -> bool {
        self.recognise_if(|ch| characters.contains(ch))
    }

    /// Consumes the next character if it satisfies `predicate`.
    pub fn recognise_if<P>(&mut self, predicate: P) -> bool
    where
        P: FnOnce(&char) -> bool,
    {
        match self.peek() {
            Some(ch) if predicate(&ch) => {
                self.byte_position += ch.len_utf8();
                true
            }
            _ => false,
        }
    }

    /// Consumes `text` if the remaining input starts with it. Nothing is
    /// consumed on a partial match.
    pub fn recognise_str(&mut self, text: &str) -> bool {
        if self.remaining().starts_with(text) {
            self.byte_position += text.len();
            true
        } else {
            false
        }
    }

    /// Consumes a character satisfying `leading`, followed by as many
    /// characters satisfying `trailing` as possible. Returns false, consuming
    /// nothing, if the first character does not fit.
    pub fn recognise_run<L, T>(&mut self, leading: L, trailing: T) -> bool
    where
        L: FnOnce(&char) -> bool,
        T: FnMut(&char) -> bool,
    {
        if !self.recognise_if(leading) {
            return false;
        }
        self.consume_while(trailing);
        true
    }

    /// Consumes characters while `P(char)` evaluates to `true`.
    /// Returns the [`Span`] of the consumed characters.
    pub fn consume_while<P>(&mut self, mut predicate: P) -> Span
    where
        P: FnMut(&char) -> bool,
    {
        let start = self.byte_position;
        while self.recognise_if(&mut predicate) {}
        self.span_from(start)
    }

    /// Checks if the lexer is finished.
    pub fn is_finished(&self) -> bool {
        self.peek().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_next_advances_by_utf8_length() {
        let mut lexer = CharLexer::new("é!");

        assert_eq!(lexer.try_next(), Some('é'));
        assert_eq!(lexer.position(), Bytes::new(2));
        assert_eq!(lexer.try_next(), Some('!'));
        assert_eq!(lexer.try_next(), None);
        assert!(lexer.is_finished());
    }

    #[test]
    fn recognise_str_is_all_or_nothing() {
        let mut lexer = CharLexer::new("<<x");

        assert!(!lexer.recognise_str("<<="));
        assert_eq!(lexer.position(), Bytes::new(0));
        assert!(lexer.recognise_str("<<"));
        assert_eq!(lexer.position(), Bytes::new(2));
    }

    #[test]
    fn recognise_run_requires_leading_character() {
        let mut lexer = CharLexer::new("_12");

        assert!(!lexer.recognise_run(char::is_ascii_digit, |_| true));
        assert_eq!(lexer.position(), Bytes::new(0));
    }

    #[test]
    fn consume_while_returns_span() {
        let mut lexer = CharLexer::new("123abc");

        let span = lexer.consume_while(char::is_ascii_digit);
        assert_eq!(span.lookup(lexer.source()), "123");
        assert_eq!(lexer.peek(), Some('a'));
    }

    #[test]
    fn rewind_restores_position() {
        let mut lexer = CharLexer::new("abc");
        let start = lexer.position();
        lexer.consume_while(|_| true);

        lexer.rewind(start);
        assert_eq!(lexer.peek(), Some('a'));
    }
}
