//! Source location tracking for diagnostics.
//!
//! Provides [`Span`] to track where syntax nodes and operations occur in a
//! source tree, and [`Location`] to pair a span with the tree it belongs to.

use std::cmp::Reverse;
use std::fmt;

use crate::syntax::TreeId;

/// A span of source code.
///
/// Spans run from a start line:column to an end line:column, matching the
/// way hosts report diagnostic positions (`WithSpan(6, 20, 6, 21)` style).
/// The end is exclusive.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Span {
    /// Start line number (1-indexed).
    pub line: u32,
    /// Start column number (1-indexed, byte-based).
    pub col: u32,
    /// End line number (1-indexed).
    pub end_line: u32,
    /// Column one past the last byte covered on `end_line`.
    pub end_col: u32,
}

impl Span {
    /// Create a single-line span from a line, column, and length.
    #[inline]
    pub fn new(line: u32, col: u32, len: u32) -> Self {
        Self::between(line, col, line, col + len)
    }

    /// Create a span between two positions, possibly on different lines.
    #[inline]
    pub fn between(line: u32, col: u32, end_line: u32, end_col: u32) -> Self {
        Self {
            line,
            col,
            end_line,
            end_col,
        }
    }

    /// Create a zero-length span at a position.
    #[inline]
    pub fn point(line: u32, col: u32) -> Self {
        Self::between(line, col, line, col)
    }

    /// Whether this span is empty (zero length).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.line == self.end_line && self.col == self.end_col
    }

    /// The zero-length span at the start of this span.
    #[inline]
    pub fn start(self) -> Span {
        Span::point(self.line, self.col)
    }

    /// The zero-length span at the end of this span.
    #[inline]
    pub fn end(self) -> Span {
        Span::point(self.end_line, self.end_col)
    }

    /// Whether `other` lies entirely within this span.
    pub fn contains(&self, other: Span) -> bool {
        self.head() <= other.head() && other.tail() <= self.tail()
    }

    /// Sort key that orders enclosed spans before the spans enclosing them.
    pub(crate) fn nesting_key(&self) -> (Reverse<(u32, u32)>, (u32, u32)) {
        (Reverse(self.head()), self.tail())
    }

    fn head(&self) -> (u32, u32) {
        (self.line, self.col)
    }

    fn tail(&self) -> (u32, u32) {
        (self.end_line, self.end_col)
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}-{}:{}",
            self.line, self.col, self.end_line, self.end_col
        )
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// Where a diagnostic was reported.
///
/// `tree` is `None` for diagnostics that have no source tree (project level
/// or metadata diagnostics); those can never be mapped back to syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location {
    pub tree: Option<TreeId>,
    pub span: Span,
}

impl Location {
    /// A location inside a source tree.
    pub fn in_tree(tree: TreeId, span: Span) -> Self {
        Self {
            tree: Some(tree),
            span,
        }
    }

    /// A location with no source tree.
    pub fn none() -> Self {
        Self {
            tree: None,
            span: Span::default(),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tree {
            Some(tree) => write!(f, "{}:{}", tree, self.span),
            None => write!(f, "<no location>"),
        }
    }
}
