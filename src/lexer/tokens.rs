//! Lexemes, as produced by the lexer.
use std::fmt::{self, Display};

use crate::span::{Bytes, Span};

/// A classified section of a source text.
///
/// The section is a byte range into the text the lexeme was recognised
/// from; [`Lexeme::text`] borrows it back out of that text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Lexeme {
    pub section: Span,
    pub kind: LexemeKind,
}
impl Lexeme {
    pub fn new(section: Span, kind: LexemeKind) -> Self {
        Self { section, kind }
    }

    /// An empty end-of-file lexeme at the given position.
    pub fn end_of_file(position: Bytes) -> Self {
        Self::new(Span::empty_at(position), LexemeKind::EndOfFile)
    }

    /// The text of the lexeme. `source` must be the text it was lexed from.
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        self.section.lookup(source)
    }
}
impl Display for Lexeme {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self.kind)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LexemeKind {
    Mark(Mark),
    Keyword(Keyword),
    Identifier,
    Decimal,
    /// Appended after the last lexeme of a source. The lexer itself never
    /// produces it.
    EndOfFile,
    /// Characters that could not be recognised.
    Error,
}

/// A punctuation or operator lexeme.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    Comma,
    Colon,
    Semicolon,
    OpeningParenthesis,
    ClosingParenthesis,
    OpeningBrace,
    ClosingBrace,
    StarEqual,
    Star,
    SlashEqual,
    Slash,
    PercentEqual,
    Percent,
    PlusEqual,
    PlusPlus,
    Plus,
    MinusRightArrow,
    MinusEqual,
    MinusMinus,
    Minus,
    AmpersandEqual,
    AmpersandAmpersand,
    Ampersand,
    PipeEqual,
    PipePipe,
    Pipe,
    CaretEqual,
    Caret,
    LeftArrowLeftArrowEqual,
    LeftArrowLeftArrow,
    LeftArrowEqual,
    LeftArrow,
    RightArrowRightArrowEqual,
    RightArrowRightArrow,
    RightArrowEqual,
    RightArrow,
    EqualEqual,
    Equal,
    ExclamationEqual,
    Exclamation,
    Tilde,
}
impl Mark {
    /// Every mark, in matching order. A mark always comes before the marks
    /// that are its prefixes, so the first match is the longest one.
    pub const ALL: [Mark; 41] = [
        Mark::Comma,
        Mark::Colon,
        Mark::Semicolon,
        Mark::OpeningParenthesis,
        Mark::ClosingParenthesis,
        Mark::OpeningBrace,
        Mark::ClosingBrace,
        Mark::StarEqual,
        Mark::Star,
        Mark::SlashEqual,
        Mark::Slash,
        Mark::PercentEqual,
        Mark::Percent,
        Mark::PlusEqual,
        Mark::PlusPlus,
        Mark::Plus,
        Mark::MinusRightArrow,
        Mark::MinusEqual,
        Mark::MinusMinus,
        Mark::Minus,
        Mark::AmpersandEqual,
        Mark::AmpersandAmpersand,
        Mark::Ampersand,
        Mark::PipeEqual,
        Mark::PipePipe,
        Mark::Pipe,
        Mark::CaretEqual,
        Mark::Caret,
        Mark::LeftArrowLeftArrowEqual,
        Mark::LeftArrowLeftArrow,
        Mark::LeftArrowEqual,
        Mark::LeftArrow,
        Mark::RightArrowRightArrowEqual,
        Mark::RightArrowRightArrow,
        Mark::RightArrowEqual,
        Mark::RightArrow,
        Mark::EqualEqual,
        Mark::Equal,
        Mark::ExclamationEqual,
        Mark::Exclamation,
        Mark::Tilde,
    ];

    pub fn text(self) -> &'static str {
        match self {
            Mark::Comma => ",",
            Mark::Colon => ":",
            Mark::Semicolon => ";",
            Mark::OpeningParenthesis => "(",
            Mark::ClosingParenthesis => ")",
            Mark::OpeningBrace => "{",
            Mark::ClosingBrace => "}",
            Mark::StarEqual => "*=",
            Mark::Star => "*",
            Mark::SlashEqual => "/=",
            Mark::Slash => "/",
            Mark::PercentEqual => "%=",
            Mark::Percent => "%",
            Mark::PlusEqual => "+=",
            Mark::PlusPlus => "++",
            Mark::Plus => "+",
            Mark::MinusRightArrow => "->",
            Mark::MinusEqual => "-=",
            Mark::MinusMinus => "--",
            Mark::Minus => "-",
            Mark::AmpersandEqual => "&=",
            Mark::AmpersandAmpersand => "&&",
            Mark::Ampersand => "&",
            Mark::PipeEqual => "|=",
            Mark::PipePipe => "||",
            Mark::Pipe => "|",
            Mark::CaretEqual => "^=",
            Mark::Caret => "^",
            Mark::LeftArrowLeftArrowEqual => "<<=",
            Mark::LeftArrowLeftArrow => "<<",
            Mark::LeftArrowEqual => "<=",
            Mark::LeftArrow => "<",
            Mark::RightArrowRightArrowEqual => ">>=",
            Mark::RightArrowRightArrow => ">>",
            Mark::RightArrowEqual => ">=",
            Mark::RightArrow => ">",
            Mark::EqualEqual => "==",
            Mark::Equal => "=",
            Mark::ExclamationEqual => "!=",
            Mark::Exclamation => "!",
            Mark::Tilde => "~",
        }
    }
}

/// A reserved word.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Keyword {
    Let,
    Var,
    Module,
    Intern,
    Extern,
}
impl Keyword {
    pub const ALL: [Keyword; 5] = [
        Keyword::Let,
        Keyword::Var,
        Keyword::Module,
        Keyword::Intern,
        Keyword::Extern,
    ];

    pub fn text(self) -> &'static str {
        match self {
            Keyword::Let => "let",
            Keyword::Var => "var",
            Keyword::Module => "module",
            Keyword::Intern => "intern",
            Keyword::Extern => "extern",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn no_mark_is_shadowed_by_its_prefix() {
        for (idx, mark) in Mark::ALL.iter().enumerate() {
            for earlier in &Mark::ALL[..idx] {
                assert!(
                    !mark.text().starts_with(earlier.text()),
                    "{:?} ('{}') can never match, {:?} ('{}') is tried first",
                    mark,
                    mark.text(),
                    earlier,
                    earlier.text()
                );
            }
        }
    }

    #[test]
    fn mark_texts_are_unique() {
        let texts: HashSet<_> = Mark::ALL.iter().map(|mark| mark.text()).collect();

        assert_eq!(texts.len(), Mark::ALL.len());
    }

    #[test]
    fn keywords_are_words() {
        for keyword in Keyword::ALL {
            assert!(keyword.text().chars().all(|ch| ch.is_ascii_lowercase()));
        }
    }

    #[test]
    fn end_of_file_is_empty() {
        let lexeme = Lexeme::end_of_file(Bytes::new(7));

        assert_eq!(lexeme.section, Span::empty_at(Bytes::new(7)));
        assert_eq!(lexeme.kind, LexemeKind::EndOfFile);
    }
}
