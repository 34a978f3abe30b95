//! Functionality for looking up the line that contains a source position.
use crate::span::{Bytes, Span};

/// Finds the line of `source` that contains `target_position`.
///
/// A position at the very end of the text belongs to the last line, so
/// empty spans at the end of a source can still be shown. Returns [`None`]
/// for positions past the end.
pub fn find_line(source: &str, target_position: Bytes) -> Option<LineContext> {
    let target: usize = target_position.into();
    if target > source.len() {
        return None;
    }

    let mut start = 0usize;
    for (line_idx, line) in inclusive_split_lines(source).into_iter().enumerate() {
        let end = start + line.len();
        if target < end || end == source.len() {
            return Some(LineContext {
                source: line,
                range: Span::new(Bytes::new(start), Bytes::new(end)),
                line_no: line_idx + 1,
            });
        }
        start = end;
    }

    None
}

/// Splits the source into lines, keeping the line terminators.
/// `\n`, `\r` and `\r\n` all end a line.
fn inclusive_split_lines(source: &str) -> Vec<&str> {
    let mut lines = vec![];
    let mut start = 0;
    let bytes = source.as_bytes();

    for (position, &byte) in bytes.iter().enumerate() {
        let ends_line = byte == b'\n' || (byte == b'\r' && bytes.get(position + 1) != Some(&b'\n'));
        if ends_line {
            lines.push(&source[start..=position]);
            start = position + 1;
        }
    }
    lines.push(&source[start..]);

    lines
}

/// A single line of a source, with its line number and byte range.
pub struct LineContext<'a> {
    source: &'a str,
    range: Span,
    line_no: usize,
}
impl LineContext<'_> {
    pub fn for_display(&self) -> String {
        self.source.replace(['\r', '\n'], "")
    }

    pub fn line_no(&self) -> usize {
        self.line_no
    }

    /// Number of characters between the line start and `position`.
    pub fn column_of(&self, position: Bytes) -> usize {
        let offset = usize::from(position - self.range.start()).min(self.source.len());
        self.source[..offset].chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_only_line_of_empty_source() {
        let context = find_line("", Bytes::new(0)).unwrap();

        assert_eq!(context.line_no(), 1);
        assert_eq!(context.range, Span::empty_at(Bytes::new(0)));
        assert_eq!(context.for_display(), "");
    }

    #[test]
    fn finds_second_line() {
        let context = find_line("let A\nvar B", Bytes::new(8)).unwrap();

        assert_eq!(context.line_no(), 2);
        assert_eq!(context.range, Span::new(Bytes::new(6), Bytes::new(11)));
        assert_eq!(context.for_display(), "var B");
        assert_eq!(context.column_of(Bytes::new(8)), 2);
    }

    #[test]
    fn end_of_text_belongs_to_last_line() {
        let context = find_line("a\nbc", Bytes::new(4)).unwrap();

        assert_eq!(context.line_no(), 2);
    }

    #[test]
    fn position_past_end_has_no_line() {
        assert!(find_line("abc", Bytes::new(4)).is_none());
    }

    #[test]
    fn column_counts_characters() {
        let context = find_line("é@", Bytes::new(2)).unwrap();

        assert_eq!(context.column_of(Bytes::new(2)), 1);
    }

    #[test]
    fn splits_mixed_line_endings() {
        let lines = inclusive_split_lines("abc\r\nd\r\n\ne\rf");

        assert_eq!(vec!["abc\r\n", "d\r\n", "\n", "e\r", "f"], lines)
    }

    #[test]
    fn trailing_line_break_leaves_empty_last_line() {
        assert_eq!(vec!["abc\n", ""], inclusive_split_lines("abc\n"));
    }
}
