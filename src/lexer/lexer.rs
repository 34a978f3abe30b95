//! Scans a source text into lexemes.
use std::path::Path;

use log::trace;

use crate::{span::*, tester::Probe};

use super::{char_ext::*, char_lexer::*, error::*, tokens::*};

/// The result of lexing one source.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Lex {
    /// Lexemes in source order, including an [`LexemeKind::Error`] lexeme for
    /// every unrecognised run.
    pub lexemes: Vec<Lexeme>,
    /// One entry per unrecognised run, in source order.
    pub errors: Vec<LexError>,
}

/// Lexes `source`, reporting unrecognised characters against `path`.
///
/// No [`LexemeKind::EndOfFile`] lexeme is appended; callers that need one
/// add it after the last lexeme.
pub fn lex(path: &Path, source: &str) -> Lex {
    Lexer::new(path, source).run()
}

/// A production that either consumes a lexeme and returns `true`, or
/// leaves the lexer untouched and returns `false`.
type Production<'s> = fn(&mut Lexer<'s>) -> bool;

struct Lexer<'s> {
    path: &'s Path,
    lexer: CharLexer<'s>,
    unknown_start: Option<Bytes>,
    lexemes: Vec<Lexeme>,
    errors: Vec<LexError>,
}

impl<'s> Lexer<'s> {
    fn new(path: &'s Path, source: &'s str) -> Self {
        Self {
            path,
            lexer: CharLexer::new(source),
            unknown_start: None,
            lexemes: vec![],
            errors: vec![],
        }
    }

    /// Finishes the lexer and consumes it.
    fn run(mut self) -> Lex {
        while !self.lexer.is_finished() {
            self.step();
        }
        // An unrecognised run may reach the end of the input.
        self.report_unknown(self.lexer.position());

        trace!(
            "Lexed {}: {} lexemes, {} errors",
            self.path.display(),
            self.lexemes.len(),
            self.errors.len()
        );
        Lex {
            lexemes: self.lexemes,
            errors: self.errors,
        }
    }

    /// Consumes at least one character.
    fn step(&mut self) {
        let start = self.lexer.position();

        let candidates: [Production<'s>; 3] = [Self::keyword, Self::decimal, Self::word];
        for candidate in candidates {
            if !candidate(self) {
                continue;
            }
            if self.lexer.is_finished() || self.separator() {
                return;
            }
            // Glued to whatever follows it, so it is not a lexeme after all.
            self.lexer.rewind(start);
            self.lexemes.pop();
        }

        if self.separator() {
            return;
        }

        // Nothing starts here. Skip characters until a separator ends the run.
        self.unknown_start = Some(start);
        while self.lexer.try_next().is_some() && !self.separator() {}
    }

    fn separator(&mut self) -> bool {
        self.whitespace() || self.comment() || self.mark()
    }

    fn whitespace(&mut self) -> bool {
        let start = self.lexer.position();
        if !self.lexer.recognise_run(
            CharExt::is_separating_whitespace,
            CharExt::is_separating_whitespace,
        ) {
            return false;
        }
        self.report_unknown(start);
        true
    }

    /// A line comment, up to but excluding the line break.
    fn comment(&mut self) -> bool {
        let start = self.lexer.position();
        if !self.lexer.recognise_str("//") {
            return false;
        }
        self.lexer.consume_while(CharExt::is_not_linebreak);
        self.report_unknown(start);
        true
    }

    fn mark(&mut self) -> bool {
        let start = self.lexer.position();
        let lexer = &mut self.lexer;
        let Some(mark) = Mark::ALL
            .into_iter()
            .find(|mark| lexer.recognise_str(mark.text()))
        else {
            return false;
        };
        self.push(start, LexemeKind::Mark(mark));
        true
    }

    fn keyword(&mut self) -> bool {
        let start = self.lexer.position();
        let lexer = &mut self.lexer;
        let Some(keyword) = Keyword::ALL
            .into_iter()
            .find(|keyword| lexer.recognise_str(keyword.text()))
        else {
            return false;
        };
        self.push(start, LexemeKind::Keyword(keyword));
        true
    }

    /// A decimal number with an optional sign, fraction and exponent. Digits
    /// may be grouped with underscores. An incomplete fraction or exponent is
    /// left unconsumed while the digits before it still form the number.
    fn decimal(&mut self) -> bool {
        let start = self.lexer.position();

        self.lexer.recognise_any(&['+', '-']);
        if !self.digits() {
            self.lexer.rewind(start);
            return false;
        }

        let fraction_start = self.lexer.position();
        if self.lexer.recognise('.') && !self.digits() {
            self.lexer.rewind(fraction_start);
        }

        let exponent_start = self.lexer.position();
        if self.lexer.recognise_any(&['e', 'E']) {
            self.lexer.recognise_any(&['+', '-']);
            if !self.digits() {
                self.lexer.rewind(exponent_start);
            }
        }

        self.push(start, LexemeKind::Decimal);
        true
    }

    fn digits(&mut self) -> bool {
        self.lexer
            .recognise_run(char::is_ascii_digit, CharExt::is_digit_or_underscore)
    }

    fn word(&mut self) -> bool {
        let start = self.lexer.position();
        if !self
            .lexer
            .recognise_run(CharExt::is_word_start, CharExt::is_word_continue)
        {
            return false;
        }
        self.push(start, LexemeKind::Identifier);
        true
    }

    /// Closes the pending unrecognised run, if any, at `end`.
    fn report_unknown(&mut self, end: Bytes) {
        let Some(start) = self.unknown_start.take() else {
            return;
        };

        let text = Span::new(start, end)
            .lookup(self.lexer.source())
            .trim_end_matches(|ch: char| ch.is_separating_whitespace());
        let range = Span::new(start, start + text.len());

        self.lexemes.push(Lexeme::new(range, LexemeKind::Error));
        self.errors.push(LexError::new(self.path, range, text));
    }

    fn push(&mut self, start: Bytes, kind: LexemeKind) {
        self.report_unknown(start);
        self.lexemes
            .push(Lexeme::new(self.lexer.span_from(start), kind));
    }
}

/// Probes over the lexer, for the self-test harness.
pub fn probes() -> Vec<Probe> {
    fn kinds(source: &str) -> Vec<LexemeKind> {
        lex(Path::new("Probe.tr"), source)
            .lexemes
            .iter()
            .map(|lexeme| lexeme.kind)
            .collect()
    }

    vec![
        Probe {
            name: "empty source has no lexemes",
            check: || kinds("").is_empty(),
        },
        Probe {
            name: "longest mark wins",
            check: || kinds("<<=") == [LexemeKind::Mark(Mark::LeftArrowLeftArrowEqual)],
        },
        Probe {
            name: "keyword alone",
            check: || kinds("let") == [LexemeKind::Keyword(Keyword::Let)],
        },
        Probe {
            name: "keyword prefix of identifier",
            check: || kinds("lets") == [LexemeKind::Identifier],
        },
        Probe {
            name: "signed decimal with fraction and exponent",
            check: || kinds("-1.5e-3") == [LexemeKind::Decimal],
        },
        Probe {
            name: "decimal production stops before bare dot",
            check: || {
                let mut lexer = Lexer::new(Path::new("Probe.tr"), "1.");
                lexer.decimal() && lexer.lexer.position() == Bytes::new(1)
            },
        },
        Probe {
            name: "unrecognised run is one error",
            check: || kinds("@@@ x") == [LexemeKind::Error, LexemeKind::Identifier],
        },
        Probe {
            name: "comment is skipped",
            check: || kinds("// let\nvar") == [LexemeKind::Keyword(Keyword::Var)],
        },
    ]
}
