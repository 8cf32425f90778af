//! AST loading error types.

use thiserror::Error;

use crate::NodeType;

/// Errors that can occur while loading an AST from its JSON form.
#[derive(Debug, Error)]
pub enum AstError {
    /// The input is not valid JSON or does not match the node layout.
    #[error("Invalid AST JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A field required by the node type is absent.
    #[error("Missing field `{field}` on `{node_type}` node")]
    MissingField {
        /// Type of the incomplete node.
        node_type: NodeType,
        /// Name of the absent field.
        field: &'static str,
    },

    /// A `value` node carries a code point outside the Unicode range.
    #[error("Invalid code point: {0:#x}")]
    InvalidCodePoint(u32),

    /// A field is present but holds the wrong kind of value.
    #[error("Invalid `{node_type}` node: {message}")]
    InvalidShape {
        /// Type of the malformed node.
        node_type: NodeType,
        /// Error message.
        message: String,
    },
}

impl AstError {
    /// Creates a missing field error.
    pub fn missing_field(node_type: NodeType, field: &'static str) -> Self {
        Self::MissingField { node_type, field }
    }

    /// Creates an invalid shape error.
    pub fn invalid_shape(node_type: NodeType, message: impl Into<String>) -> Self {
        Self::InvalidShape {
            node_type,
            message: message.into(),
        }
    }
}
