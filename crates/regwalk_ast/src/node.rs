//! Node definition.
//!
//! The core AST node type walked by regwalk.

use serde::{Deserialize, Serialize};

use crate::raw::{RawIdentifier, RawNode};
use crate::{AstError, NodeType, Span};

/// A node in the regex AST.
///
/// Every node carries its [`NodeType`] tag. List-shaped nodes keep their
/// children in `body`; range-shaped nodes (`characterClassRange`) keep
/// exactly two children in [`NodeData::Range`]. Use [`Node::children`]
/// to read either shape through one interface.
///
/// # Example
///
/// ```rust
/// use regwalk_ast::{Node, NodeType};
///
/// // [a-c]
/// let class = Node::character_class(
///     vec![Node::class_range(Node::value('a'), Node::value('c'))],
///     false,
/// );
///
/// assert_eq!(class.node_type, NodeType::CharacterClass);
/// assert_eq!(class.child_count(), 1);
/// assert_eq!(class.body[0].child_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawNode")]
pub struct Node {
    /// The type of this node.
    pub node_type: NodeType,

    /// Range in the pattern source.
    pub span: Span,

    /// Child nodes (for list-shaped nodes).
    pub body: Vec<Node>,

    /// Additional node-specific data.
    pub data: NodeData,
}

/// Node-specific payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NodeData {
    #[default]
    None,
    Value {
        kind: ValueKind,
        code_point: u32,
    },
    Group {
        behavior: GroupBehavior,
        /// Set for named groups such as `(?<year>..)`.
        name: Option<Identifier>,
    },
    CharacterClass {
        negative: bool,
    },
    /// The two endpoints of a `characterClassRange`.
    Range {
        min: Box<Node>,
        max: Box<Node>,
    },
    Quantifier {
        min: u32,
        max: Option<u32>,
        greedy: bool,
    },
    Anchor(AnchorKind),
    /// Letter of a class escape, e.g. `d` for `\d`.
    Escape(String),
    /// `\1` carries a match index, `\k<year>` a name.
    Reference {
        match_index: Option<u32>,
        name: Option<Identifier>,
    },
    UnicodeProperty {
        negative: bool,
        name: String,
    },
}

/// Name of a group or backreference, e.g. `year` in `(?<year>\d{4})`.
///
/// regjsparser writes it as a nested `{"type": "identifier", ..}` object.
/// It is node data rather than a child, so walks never visit it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawIdentifier")]
pub struct Identifier {
    pub value: String,
    pub span: Span,
}

impl Identifier {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            span: Span::default(),
        }
    }

    /// Sets the source span of this identifier.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}

impl Serialize for Identifier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Identifier", 3)?;
        state.serialize_field("type", "identifier")?;
        state.serialize_field("value", &self.value)?;
        state.serialize_field("range", &self.span)?;
        state.end()
    }
}

/// How a `value` node was written in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Symbol,
    SingleEscape,
    Null,
    Octal,
    HexadecimalEscape,
    UnicodeEscape,
    UnicodeCodePointEscape,
    ControlLetter,
    Identifier,
}

impl ValueKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Symbol => "symbol",
            ValueKind::SingleEscape => "singleEscape",
            ValueKind::Null => "null",
            ValueKind::Octal => "octal",
            ValueKind::HexadecimalEscape => "hexadecimalEscape",
            ValueKind::UnicodeEscape => "unicodeEscape",
            ValueKind::UnicodeCodePointEscape => "unicodeCodePointEscape",
            ValueKind::ControlLetter => "controlLetter",
            ValueKind::Identifier => "identifier",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "symbol" => ValueKind::Symbol,
            "singleEscape" => ValueKind::SingleEscape,
            "null" => ValueKind::Null,
            "octal" => ValueKind::Octal,
            "hexadecimalEscape" => ValueKind::HexadecimalEscape,
            "unicodeEscape" => ValueKind::UnicodeEscape,
            "unicodeCodePointEscape" => ValueKind::UnicodeCodePointEscape,
            "controlLetter" => ValueKind::ControlLetter,
            "identifier" => ValueKind::Identifier,
            _ => return None,
        })
    }
}

/// Group flavor, as reported in the `behavior` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GroupBehavior {
    Normal,
    Ignore,
    Lookahead,
    NegativeLookahead,
    Lookbehind,
    NegativeLookbehind,
}

/// Assertion flavor of an `anchor` node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnchorKind {
    Start,
    End,
    Boundary,
    NotBoundary,
}

impl AnchorKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            AnchorKind::Start => "start",
            AnchorKind::End => "end",
            AnchorKind::Boundary => "boundary",
            AnchorKind::NotBoundary => "not-boundary",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "start" => AnchorKind::Start,
            "end" => AnchorKind::End,
            "boundary" => AnchorKind::Boundary,
            "not-boundary" => AnchorKind::NotBoundary,
            _ => return None,
        })
    }
}

impl Serialize for Node {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut len = 2; // type, range
        if self.node_type.is_parent() {
            len += 1;
        }
        len += self.data.present_field_count();

        let mut state = serializer.serialize_struct("Node", len)?;

        state.serialize_field("type", &self.node_type)?;
        state.serialize_field("range", &self.span)?;

        if self.node_type.is_parent() {
            state.serialize_field("body", &self.body)?;
        }

        self.data.serialize_fields(&mut state)?;

        state.end()
    }
}

impl Node {
    fn new(node_type: NodeType, body: Vec<Node>, data: NodeData) -> Self {
        Self {
            node_type,
            span: Span::default(),
            body,
            data,
        }
    }

    /// Creates a `value` node for a literal character.
    pub fn value(ch: char) -> Self {
        Self::code_point(ValueKind::Symbol, ch as u32)
    }

    /// Creates a `value` node from a raw code point.
    ///
    /// Lone surrogates are accepted, as JavaScript patterns allow them.
    pub fn code_point(kind: ValueKind, code_point: u32) -> Self {
        Self::new(
            NodeType::Value,
            Vec::new(),
            NodeData::Value { kind, code_point },
        )
    }

    /// Creates an `alternative` (concatenation) node.
    pub fn alternative(body: Vec<Node>) -> Self {
        Self::new(NodeType::Alternative, body, NodeData::None)
    }

    /// Creates a `disjunction` (alternation) node.
    pub fn disjunction(body: Vec<Node>) -> Self {
        Self::new(NodeType::Disjunction, body, NodeData::None)
    }

    /// Creates a `characterClass` node.
    pub fn character_class(body: Vec<Node>, negative: bool) -> Self {
        Self::new(
            NodeType::CharacterClass,
            body,
            NodeData::CharacterClass { negative },
        )
    }

    /// Creates a `characterClassRange` node from its endpoints.
    pub fn class_range(min: Node, max: Node) -> Self {
        Self::new(
            NodeType::CharacterClassRange,
            Vec::new(),
            NodeData::Range {
                min: Box::new(min),
                max: Box::new(max),
            },
        )
    }

    /// Creates a `group` node.
    pub fn group(behavior: GroupBehavior, body: Vec<Node>) -> Self {
        Self::new(
            NodeType::Group,
            body,
            NodeData::Group {
                behavior,
                name: None,
            },
        )
    }

    /// Creates a named capturing group, `(?<name>..)`.
    pub fn named_group(name: Identifier, body: Vec<Node>) -> Self {
        Self::new(
            NodeType::Group,
            body,
            NodeData::Group {
                behavior: GroupBehavior::Normal,
                name: Some(name),
            },
        )
    }

    /// Creates a `quantifier` node repeating `term`.
    ///
    /// `max` is `None` for an unbounded repetition such as `*` or `{2,}`.
    pub fn quantifier(min: u32, max: Option<u32>, greedy: bool, term: Node) -> Self {
        Self::new(
            NodeType::Quantifier,
            vec![term],
            NodeData::Quantifier { min, max, greedy },
        )
    }

    /// Creates a `dot` node.
    pub fn dot() -> Self {
        Self::new(NodeType::Dot, Vec::new(), NodeData::None)
    }

    /// Creates an `anchor` node.
    pub fn anchor(kind: AnchorKind) -> Self {
        Self::new(NodeType::Anchor, Vec::new(), NodeData::Anchor(kind))
    }

    /// Creates a `characterClassEscape` node, e.g. `class_escape("d")` for `\d`.
    pub fn class_escape(value: impl Into<String>) -> Self {
        Self::new(
            NodeType::CharacterClassEscape,
            Vec::new(),
            NodeData::Escape(value.into()),
        )
    }

    /// Creates a numbered backreference.
    pub fn reference(match_index: u32) -> Self {
        Self::new(
            NodeType::Reference,
            Vec::new(),
            NodeData::Reference {
                match_index: Some(match_index),
                name: None,
            },
        )
    }

    /// Creates a named backreference, `\k<name>`.
    pub fn named_reference(name: Identifier) -> Self {
        Self::new(
            NodeType::Reference,
            Vec::new(),
            NodeData::Reference {
                match_index: None,
                name: Some(name),
            },
        )
    }

    /// Creates a `unicodePropertyEscape` node (`\p{..}` or `\P{..}`).
    pub fn unicode_property(name: impl Into<String>, negative: bool) -> Self {
        Self::new(
            NodeType::UnicodePropertyEscape,
            Vec::new(),
            NodeData::UnicodeProperty {
                negative,
                name: name.into(),
            },
        )
    }

    /// Sets the source span of this node.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Returns true if this node has the given type.
    #[inline]
    pub fn is(&self, node_type: NodeType) -> bool {
        self.node_type == node_type
    }

    /// Returns the character of a `value` node.
    ///
    /// Returns `None` for other node types and for lone surrogates.
    pub fn as_char(&self) -> Option<char> {
        match self.data {
            NodeData::Value { code_point, .. } => char::from_u32(code_point),
            _ => None,
        }
    }

    /// Parses a node tree from regjsparser JSON output.
    pub fn from_json(json: &str) -> Result<Self, AstError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes this node tree to regjsparser-shaped JSON.
    pub fn to_json(&self) -> Result<String, AstError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl NodeData {
    /// Returns the number of fields written during serialization.
    fn present_field_count(&self) -> usize {
        match self {
            NodeData::None => 0,
            NodeData::CharacterClass { .. } | NodeData::Anchor(_) | NodeData::Escape(_) => 1,
            NodeData::Group { name, .. } => 1 + usize::from(name.is_some()),
            NodeData::Reference { match_index, name } => {
                usize::from(match_index.is_some()) + usize::from(name.is_some())
            }
            NodeData::Value { .. } | NodeData::Range { .. } | NodeData::UnicodeProperty { .. } => 2,
            NodeData::Quantifier { max, .. } => {
                if max.is_some() {
                    3
                } else {
                    2
                }
            }
        }
    }

    /// Serializes present fields into the given struct serializer state.
    fn serialize_fields<S: serde::ser::SerializeStruct>(
        &self,
        state: &mut S,
    ) -> Result<(), S::Error> {
        match self {
            NodeData::None => {}
            NodeData::Value { kind, code_point } => {
                state.serialize_field("kind", kind.as_str())?;
                state.serialize_field("codePoint", code_point)?;
            }
            NodeData::Group { behavior, name } => {
                state.serialize_field("behavior", behavior)?;
                if let Some(name) = name {
                    state.serialize_field("name", name)?;
                }
            }
            NodeData::CharacterClass { negative } => {
                state.serialize_field("negative", negative)?;
            }
            NodeData::Range { min, max } => {
                state.serialize_field("min", min)?;
                state.serialize_field("max", max)?;
            }
            NodeData::Quantifier { min, max, greedy } => {
                state.serialize_field("min", min)?;
                if let Some(max) = max {
                    state.serialize_field("max", max)?;
                }
                state.serialize_field("greedy", greedy)?;
            }
            NodeData::Anchor(kind) => {
                state.serialize_field("kind", kind.as_str())?;
            }
            NodeData::Escape(value) => {
                state.serialize_field("value", value)?;
            }
            NodeData::Reference { match_index, name } => {
                if let Some(index) = match_index {
                    state.serialize_field("matchIndex", index)?;
                }
                if let Some(name) = name {
                    state.serialize_field("name", name)?;
                }
            }
            NodeData::UnicodeProperty { negative, name } => {
                state.serialize_field("negative", negative)?;
                state.serialize_field("value", name)?;
            }
        }
        Ok(())
    }
}
