//! Closure-based callback bundles.
//!
//! [`Callbacks`] pairs an optional `enter` hook with an optional `leave`
//! hook. A hook that was never set is not called at all.

use std::fmt;

use regwalk_ast::Node;

use crate::{Action, ReplaceState, Replacer, TraverseState, Visitor, VisitorOption};

type Hook<'f, S, R> = Box<dyn FnMut(&Node, Option<&Node>, &mut S) -> R + 'f>;

/// A pair of optional `enter`/`leave` closures.
///
/// Use [`TraverseCallbacks`] with [`traverse`](crate::traverse) and
/// [`ReplaceCallbacks`] with [`replace`](crate::replace).
///
/// # Example
///
/// ```rust
/// use regwalk_ast::{Node, NodeType};
/// use regwalk_traverse::{TraverseCallbacks, VisitorOption, traverse};
///
/// let ast = Node::disjunction(vec![Node::value('a'), Node::value('b'), Node::value('c')]);
///
/// let mut values = 0;
/// let mut callbacks = TraverseCallbacks::new().on_enter(|node, _parent, _state| {
///     if node.is(NodeType::Value) {
///         values += 1;
///     }
///     VisitorOption::Continue
/// });
/// traverse(&ast, &mut callbacks);
/// drop(callbacks);
///
/// assert_eq!(values, 3);
/// ```
pub struct Callbacks<'f, S, R> {
    enter: Option<Hook<'f, S, R>>,
    leave: Option<Hook<'f, S, R>>,
}

/// Callbacks for read-only traversal.
pub type TraverseCallbacks<'f> = Callbacks<'f, TraverseState, VisitorOption>;

/// Callbacks for replacing traversal.
pub type ReplaceCallbacks<'f> = Callbacks<'f, ReplaceState, Action>;

impl<'f, S, R> Callbacks<'f, S, R> {
    /// Creates a bundle with neither hook set.
    pub fn new() -> Self {
        Self {
            enter: None,
            leave: None,
        }
    }

    /// Sets the hook called before a node's children.
    #[must_use]
    pub fn on_enter<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&Node, Option<&Node>, &mut S) -> R + 'f,
    {
        self.enter = Some(Box::new(hook));
        self
    }

    /// Sets the hook called after a node's children.
    #[must_use]
    pub fn on_leave<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&Node, Option<&Node>, &mut S) -> R + 'f,
    {
        self.leave = Some(Box::new(hook));
        self
    }

    /// Returns true if an `enter` hook is set.
    pub fn has_enter(&self) -> bool {
        self.enter.is_some()
    }

    /// Returns true if a `leave` hook is set.
    pub fn has_leave(&self) -> bool {
        self.leave.is_some()
    }
}

impl<S, R> Default for Callbacks<'_, S, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, R> fmt::Debug for Callbacks<'_, S, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("enter", &self.has_enter())
            .field("leave", &self.has_leave())
            .finish()
    }
}

impl Visitor for TraverseCallbacks<'_> {
    fn enter(
        &mut self,
        node: &Node,
        parent: Option<&Node>,
        state: &mut TraverseState,
    ) -> VisitorOption {
        match &mut self.enter {
            Some(hook) => hook(node, parent, state),
            None => VisitorOption::Continue,
        }
    }

    fn leave(
        &mut self,
        node: &Node,
        parent: Option<&Node>,
        state: &mut TraverseState,
    ) -> VisitorOption {
        match &mut self.leave {
            Some(hook) => hook(node, parent, state),
            None => VisitorOption::Continue,
        }
    }
}

impl Replacer for ReplaceCallbacks<'_> {
    fn enter(&mut self, node: &Node, parent: Option<&Node>, state: &mut ReplaceState) -> Action {
        match &mut self.enter {
            Some(hook) => hook(node, parent, state),
            None => Action::Continue,
        }
    }

    fn leave(&mut self, node: &Node, parent: Option<&Node>, state: &mut ReplaceState) -> Action {
        match &mut self.leave {
            Some(hook) => hook(node, parent, state),
            None => Action::Continue,
        }
    }
}
