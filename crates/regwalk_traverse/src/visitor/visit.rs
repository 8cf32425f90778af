//! Visitor trait for read-only traversal.
//!
//! # Example
//!
//! ```rust
//! use regwalk_ast::{Node, NodeType};
//! use regwalk_traverse::{TraverseState, Visitor, VisitorOption, traverse};
//!
//! /// Collects literal characters outside character classes.
//! struct Literals(Vec<char>);
//!
//! impl Visitor for Literals {
//!     fn enter(
//!         &mut self,
//!         node: &Node,
//!         _parent: Option<&Node>,
//!         state: &mut TraverseState,
//!     ) -> VisitorOption {
//!         if node.is(NodeType::CharacterClass) {
//!             state.skip();
//!         }
//!         if let Some(ch) = node.as_char() {
//!             self.0.push(ch);
//!         }
//!         VisitorOption::Continue
//!     }
//! }
//!
//! // ab[c]
//! let ast = Node::alternative(vec![
//!     Node::value('a'),
//!     Node::value('b'),
//!     Node::character_class(vec![Node::value('c')], false),
//! ]);
//!
//! let mut literals = Literals(Vec::new());
//! traverse(&ast, &mut literals);
//! assert_eq!(literals.0, vec!['a', 'b']);
//! ```

use regwalk_ast::Node;

use crate::{TraverseState, VisitorOption};

/// Visitor trait for traversing a regex AST without modification.
///
/// `enter` is called before a node's children, `leave` after them. Both
/// receive the node, its parent (`None` for the root) and the traversal
/// state. The default implementations do nothing.
///
/// # Control Flow
///
/// Return [`VisitorOption::Skip`] from `enter` (or call `state.skip()`) to
/// leave out the node's children. Return [`VisitorOption::Break`] (or call
/// `state.break_traversal()`) to stop the walk; no further callbacks run.
pub trait Visitor {
    /// Called before the children of `node` are visited.
    #[inline]
    fn enter(
        &mut self,
        _node: &Node,
        _parent: Option<&Node>,
        _state: &mut TraverseState,
    ) -> VisitorOption {
        VisitorOption::Continue
    }

    /// Called after the children of `node` are visited.
    #[inline]
    fn leave(
        &mut self,
        _node: &Node,
        _parent: Option<&Node>,
        _state: &mut TraverseState,
    ) -> VisitorOption {
        VisitorOption::Continue
    }
}

impl<V: Visitor + ?Sized> Visitor for &mut V {
    fn enter(
        &mut self,
        node: &Node,
        parent: Option<&Node>,
        state: &mut TraverseState,
    ) -> VisitorOption {
        (**self).enter(node, parent, state)
    }

    fn leave(
        &mut self,
        node: &Node,
        parent: Option<&Node>,
        state: &mut TraverseState,
    ) -> VisitorOption {
        (**self).leave(node, parent, state)
    }
}
