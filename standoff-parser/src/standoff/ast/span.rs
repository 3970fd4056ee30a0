//! Character offset spans
//!
//! A [`Span`] is a `start..end` range of character offsets into the reference text the
//! annotation file describes. Spans never carry the text themselves.

use serde::Serialize;
use std::fmt;

/// A contiguous character-offset range, `start <= end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// Build a span, returning `None` when `start > end`.
    pub fn new(start: usize, end: usize) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    /// Number of characters covered by the span.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_rejects_reversed_bounds() {
        assert_eq!(Span::new(5, 3), None);
        assert_eq!(Span::new(3, 3).map(|s| s.is_empty()), Some(true));
    }

    #[test]
    fn test_span_display_uses_wire_form() {
        let span = Span::new(14, 27).unwrap();
        assert_eq!(span.to_string(), "14 27");
        assert_eq!(span.len(), 13);
    }
}
