//! # regwalk_ast
//!
//! Regular expression AST definitions for regwalk.
//!
//! This crate provides the node model walked by `regwalk_traverse`. The
//! layout mirrors the JSON produced by regjsparser: every node has a `type`
//! tag, list-shaped nodes keep their children in `body`, and
//! `characterClassRange` nodes keep their two endpoints in `min`/`max`.
//!
//! ## Example
//!
//! ```rust
//! use regwalk_ast::{Node, NodeType};
//!
//! // a|b|c
//! let ast = Node::disjunction(vec![Node::value('a'), Node::value('b'), Node::value('c')]);
//! assert_eq!(ast.child_count(), 3);
//!
//! let json = r#"{"type":"value","kind":"symbol","codePoint":100,"range":[0,1],"raw":"d"}"#;
//! let value = Node::from_json(json).unwrap();
//! assert!(value.is(NodeType::Value));
//! assert_eq!(value.as_char(), Some('d'));
//! ```

mod children;
mod error;
mod node;
mod node_type;
mod raw;
mod span;

pub use children::Children;
pub use error::AstError;
pub use node::{AnchorKind, GroupBehavior, Identifier, Node, NodeData, ValueKind};
pub use node_type::NodeType;
pub use span::Span;
