//! Replacer trait for structure-mutating traversal.
//!
//! Callbacks only ever see shared references. A node is swapped out by
//! returning [`Action::Replace`] or calling [`ReplaceState::replace`]; the
//! walker writes the new node into the parent's child slot.
//!
//! # Example
//!
//! ```rust
//! use regwalk_ast::{Node, NodeType};
//! use regwalk_traverse::{Action, ReplaceState, Replacer, replace};
//!
//! /// Turns every `.` into `[^\n]`.
//! struct ExpandDot;
//!
//! impl Replacer for ExpandDot {
//!     fn leave(
//!         &mut self,
//!         node: &Node,
//!         _parent: Option<&Node>,
//!         _state: &mut ReplaceState,
//!     ) -> Action {
//!         if node.is(NodeType::Dot) {
//!             return Node::character_class(vec![Node::value('\n')], true).into();
//!         }
//!         Action::Continue
//!     }
//! }
//!
//! let ast = Node::alternative(vec![Node::value('a'), Node::dot()]);
//! let ast = replace(ast, &mut ExpandDot);
//! assert!(ast.body[1].is(NodeType::CharacterClass));
//! ```

use regwalk_ast::Node;

use crate::{Action, ReplaceState};

/// Visitor trait for replacing nodes during a depth-first walk.
///
/// Same protocol as [`Visitor`](crate::Visitor), plus replacement:
///
/// - a replacement made in `enter` takes the node's place at once. Its
///   children and the `leave` call are processed on it; `enter` is not
///   called on it again.
/// - a replacement made in `leave` is written into the parent after the
///   node's subtree has been processed with the original node.
pub trait Replacer {
    /// Called before the children of `node` are visited.
    #[inline]
    fn enter(&mut self, _node: &Node, _parent: Option<&Node>, _state: &mut ReplaceState) -> Action {
        Action::Continue
    }

    /// Called after the children of `node` are visited.
    #[inline]
    fn leave(&mut self, _node: &Node, _parent: Option<&Node>, _state: &mut ReplaceState) -> Action {
        Action::Continue
    }
}

impl<R: Replacer + ?Sized> Replacer for &mut R {
    fn enter(&mut self, node: &Node, parent: Option<&Node>, state: &mut ReplaceState) -> Action {
        (**self).enter(node, parent, state)
    }

    fn leave(&mut self, node: &Node, parent: Option<&Node>, state: &mut ReplaceState) -> Action {
        (**self).leave(node, parent, state)
    }
}
