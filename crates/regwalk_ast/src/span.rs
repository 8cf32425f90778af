//! Source ranges for regex AST nodes.
//!
//! regjsparser reports every node's location as a `range: [start, end]`
//! pair, so [`Span`] serializes to and from that two-element array.

use serde::{Deserialize, Serialize};

/// A span representing a range in the pattern source.
///
/// Uses offsets (0-indexed) into the pattern string.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(from = "[u32; 2]", into = "[u32; 2]")]
pub struct Span {
    /// Start offset (0-indexed, inclusive).
    pub start: u32,
    /// End offset (0-indexed, exclusive).
    pub end: u32,
}

impl Span {
    /// Creates a new span.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }
}

impl From<[u32; 2]> for Span {
    fn from([start, end]: [u32; 2]) -> Self {
        Self { start, end }
    }
}

impl From<Span> for [u32; 2] {
    fn from(span: Span) -> Self {
        [span.start, span.end]
    }
}
