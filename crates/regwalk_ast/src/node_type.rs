//! Node type definitions for the regex AST.
//!
//! These tags match the `type` field emitted by regjsparser.
//! See: https://github.com/jviereck/regjsparser

use serde::{Deserialize, Serialize};

/// Node types for the regex AST.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeType {
    /// Sequence of terms matched one after another (`abc`).
    Alternative,
    /// Assertion such as `^`, `$`, `\b` or `\B`.
    Anchor,
    /// Bracketed set of characters (`[a-c]`).
    CharacterClass,
    /// Shorthand class escape (`\d`, `\w`, `\s` and their negations).
    CharacterClassEscape,
    /// Range inside a character class (`a-c`), stored as `min`/`max`.
    CharacterClassRange,
    /// Alternation between branches (`a|b`).
    Disjunction,
    /// Any character (`.`).
    Dot,
    /// Capturing, non-capturing or lookaround group.
    Group,
    /// Repetition of its single body term (`a*`, `a{2,3}`).
    Quantifier,
    /// Backreference (`\1`).
    Reference,
    /// Unicode property escape (`\p{Letter}`).
    UnicodePropertyEscape,
    /// A single code point.
    Value,
}

impl NodeType {
    /// Returns true if this node type stores its two children in `min`/`max`
    /// slots instead of the generic `body` sequence.
    #[inline]
    pub const fn is_range(&self) -> bool {
        matches!(self, NodeType::CharacterClassRange)
    }

    /// Returns true if this node type carries a `body` child sequence.
    #[inline]
    pub const fn is_parent(&self) -> bool {
        matches!(
            self,
            NodeType::Alternative
                | NodeType::CharacterClass
                | NodeType::Disjunction
                | NodeType::Group
                | NodeType::Quantifier
        )
    }

    /// Returns true if nodes of this type never have children.
    #[inline]
    pub const fn is_leaf(&self) -> bool {
        !self.is_parent() && !self.is_range()
    }

    /// Returns the regjsparser name of this node type.
    pub const fn as_str(&self) -> &'static str {
        match self {
            NodeType::Alternative => "alternative",
            NodeType::Anchor => "anchor",
            NodeType::CharacterClass => "characterClass",
            NodeType::CharacterClassEscape => "characterClassEscape",
            NodeType::CharacterClassRange => "characterClassRange",
            NodeType::Disjunction => "disjunction",
            NodeType::Dot => "dot",
            NodeType::Group => "group",
            NodeType::Quantifier => "quantifier",
            NodeType::Reference => "reference",
            NodeType::UnicodePropertyEscape => "unicodePropertyEscape",
            NodeType::Value => "value",
        }
    }
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
