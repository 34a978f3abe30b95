//! Contains the [`Bytes`] and [`Span`] types, which describe source code positions.
use std::{
    fmt::{self, Debug, Display},
    ops::{Add, AddAssign, Sub},
};

/// A byte offset into a source text.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Bytes(usize);
impl Bytes {
    pub fn new(pos: usize) -> Self {
        Self(pos)
    }
}
impl Display for Bytes {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl From<Bytes> for usize {
    fn from(bytes: Bytes) -> Self {
        bytes.0
    }
}
impl AddAssign<usize> for Bytes {
    fn add_assign(&mut self, rhs: usize) {
        *self = Self(self.0 + rhs)
    }
}
impl Add<usize> for Bytes {
    type Output = Self;

    fn add(self, rhs: usize) -> Self::Output {
        Self(self.0 + rhs)
    }
}
impl Sub<Bytes> for Bytes {
    type Output = Self;

    fn sub(self, rhs: Bytes) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

/// A half-open byte range `start..end` of a source text.
///
/// Spans never own text; [`Span::lookup`] borrows the covered section from
/// the buffer it was measured against.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    start: Bytes,
    end: Bytes,
}
impl Span {
    pub fn new(start: Bytes, end: Bytes) -> Self {
        debug_assert!(start <= end, "span ends before it starts");
        Self { start, end }
    }

    /// An empty span positioned at `position`.
    pub fn empty_at(position: Bytes) -> Self {
        Self::new(position, position)
    }

    pub fn start(&self) -> Bytes {
        self.start
    }

    pub fn end(&self) -> Bytes {
        self.end
    }

    pub fn lookup<'t>(&self, target: &'t str) -> &'t str {
        &target[self.start().into()..self.end().into()]
    }
}

impl Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_borrows_covered_section() {
        let span = Span::new(Bytes::new(4), Bytes::new(7));

        assert_eq!(span.lookup("let foo = 1"), "foo");
    }

    #[test]
    fn empty_span_looks_up_empty_string() {
        let span = Span::empty_at(Bytes::new(3));

        assert_eq!(span.start(), span.end());
        assert_eq!(span.lookup("abc"), "");
    }

    #[test]
    fn debug_shows_range() {
        assert_eq!(format!("{:?}", Span::new(Bytes::new(1), Bytes::new(5))), "1..5");
    }
}
