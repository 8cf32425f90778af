//! Flat deserialization target for regjsparser JSON.
//!
//! regjsparser nodes are plain objects whose extra fields depend on `type`.
//! They are read into [`RawNode`] first and then validated into a [`Node`].

use serde::Deserialize;

use crate::{
    AnchorKind, AstError, GroupBehavior, Identifier, Node, NodeData, NodeType, Span, ValueKind,
};

#[doc(hidden)]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNode {
    #[serde(rename = "type")]
    node_type: NodeType,
    #[serde(default)]
    range: Span,
    #[serde(default)]
    body: Vec<Node>,
    kind: Option<String>,
    code_point: Option<u32>,
    behavior: Option<GroupBehavior>,
    negative: Option<bool>,
    min: Option<Bound>,
    max: Option<Bound>,
    greedy: Option<bool>,
    match_index: Option<u32>,
    value: Option<String>,
    name: Option<Identifier>,
}

/// A nested `identifier` object, as used for group and backreference names.
#[derive(Debug, Deserialize)]
pub(crate) struct RawIdentifier {
    #[serde(rename = "type")]
    _tag: IdentifierTag,
    value: String,
    #[serde(default)]
    range: Span,
}

#[derive(Debug, Deserialize)]
enum IdentifierTag {
    #[serde(rename = "identifier")]
    Identifier,
}

impl From<RawIdentifier> for Identifier {
    fn from(raw: RawIdentifier) -> Self {
        Identifier::new(raw.value).with_span(raw.range)
    }
}

/// `min`/`max` hold counts on quantifiers and nodes on class ranges.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Bound {
    Count(u32),
    Node(Box<Node>),
}

impl TryFrom<RawNode> for Node {
    type Error = AstError;

    fn try_from(raw: RawNode) -> Result<Self, Self::Error> {
        let node_type = raw.node_type;
        if !node_type.is_parent() && !raw.body.is_empty() {
            return Err(AstError::invalid_shape(
                node_type,
                "`body` is only allowed on list-shaped nodes",
            ));
        }

        let data = match node_type {
            NodeType::Value => {
                let name = raw
                    .kind
                    .ok_or_else(|| AstError::missing_field(node_type, "kind"))?;
                let kind = ValueKind::from_name(&name).ok_or_else(|| {
                    AstError::invalid_shape(node_type, format!("unknown value kind `{name}`"))
                })?;
                let code_point = raw
                    .code_point
                    .ok_or_else(|| AstError::missing_field(node_type, "codePoint"))?;
                if code_point > 0x10FFFF {
                    return Err(AstError::InvalidCodePoint(code_point));
                }
                NodeData::Value { kind, code_point }
            }
            NodeType::Group => NodeData::Group {
                behavior: raw.behavior.unwrap_or(GroupBehavior::Normal),
                name: raw.name,
            },
            NodeType::CharacterClass => NodeData::CharacterClass {
                negative: raw.negative.unwrap_or(false),
            },
            NodeType::CharacterClassRange => {
                let min = endpoint(node_type, raw.min, "min")?;
                let max = endpoint(node_type, raw.max, "max")?;
                NodeData::Range { min, max }
            }
            NodeType::Quantifier => {
                let min = match raw.min {
                    Some(Bound::Count(min)) => min,
                    Some(Bound::Node(_)) => {
                        return Err(AstError::invalid_shape(node_type, "`min` must be a count"));
                    }
                    None => return Err(AstError::missing_field(node_type, "min")),
                };
                let max = match raw.max {
                    Some(Bound::Count(max)) => Some(max),
                    Some(Bound::Node(_)) => {
                        return Err(AstError::invalid_shape(node_type, "`max` must be a count"));
                    }
                    None => None,
                };
                NodeData::Quantifier {
                    min,
                    max,
                    greedy: raw.greedy.unwrap_or(true),
                }
            }
            NodeType::Anchor => {
                let name = raw
                    .kind
                    .ok_or_else(|| AstError::missing_field(node_type, "kind"))?;
                let kind = AnchorKind::from_name(&name).ok_or_else(|| {
                    AstError::invalid_shape(node_type, format!("unknown anchor kind `{name}`"))
                })?;
                NodeData::Anchor(kind)
            }
            NodeType::CharacterClassEscape => NodeData::Escape(
                raw.value
                    .ok_or_else(|| AstError::missing_field(node_type, "value"))?,
            ),
            NodeType::Reference => {
                if raw.match_index.is_none() && raw.name.is_none() {
                    return Err(AstError::missing_field(node_type, "matchIndex"));
                }
                NodeData::Reference {
                    match_index: raw.match_index,
                    name: raw.name,
                }
            }
            NodeType::UnicodePropertyEscape => NodeData::UnicodeProperty {
                negative: raw.negative.unwrap_or(false),
                name: raw
                    .value
                    .ok_or_else(|| AstError::missing_field(node_type, "value"))?,
            },
            NodeType::Alternative | NodeType::Disjunction | NodeType::Dot => NodeData::None,
        };

        Ok(Node {
            node_type,
            span: raw.range,
            body: raw.body,
            data,
        })
    }
}

fn endpoint(
    node_type: NodeType,
    bound: Option<Bound>,
    field: &'static str,
) -> Result<Box<Node>, AstError> {
    match bound {
        Some(Bound::Node(node)) => Ok(node),
        Some(Bound::Count(_)) => Err(AstError::invalid_shape(
            node_type,
            format!("`{field}` must be a node"),
        )),
        None => Err(AstError::missing_field(node_type, field)),
    }
}
