//! Node processor for read-only traversal.
//!
//! Also holds the pieces shared with the replacing walker: the halt
//! reason threaded back up the recursion, the depth guard, and the
//! checkpoint that folds a callback's return value into the state flags.

use std::ops::ControlFlow;

use regwalk_ast::{Node, NodeType};
use tracing::trace;

use crate::{ControlState, TraverseState, VisitorOption};

use super::visit::Visitor;

/// Why a walk stopped early.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Halt {
    /// A callback requested break.
    Break,
    /// A node sits deeper than the configured limit.
    DepthLimit { limit: usize, node_type: NodeType },
}

/// `Continue` to keep walking, `Break` to unwind every enclosing frame.
pub(crate) type Flow = ControlFlow<Halt>;

/// Nesting limit applied on node entry. The root is at depth 0.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Limits {
    max_depth: Option<usize>,
}

impl Limits {
    pub(crate) const UNBOUNDED: Limits = Limits { max_depth: None };

    pub(crate) const fn new(max_depth: Option<usize>) -> Self {
        Self { max_depth }
    }

    #[inline]
    pub(crate) fn check(&self, depth: usize, node: &Node) -> Flow {
        match self.max_depth {
            Some(limit) if depth > limit => ControlFlow::Break(Halt::DepthLimit {
                limit,
                node_type: node.node_type,
            }),
            _ => ControlFlow::Continue(()),
        }
    }
}

/// Records a callback's return signal in `state` and reports the combined
/// request. Break takes precedence over skip.
pub(crate) fn settle<S: ControlState>(state: &mut S, option: VisitorOption) -> VisitorOption {
    match option {
        VisitorOption::Break => state.break_traversal(),
        VisitorOption::Skip => state.skip(),
        VisitorOption::Continue => {}
    }

    if state.did_call_break() {
        VisitorOption::Break
    } else if state.did_call_skip() {
        VisitorOption::Skip
    } else {
        VisitorOption::Continue
    }
}

/// Processes `node` and its subtree.
///
/// This function:
/// 1. Calls `enter`, stopping on break and noting a skip request
/// 2. Visits the children in slot order unless skipped
/// 3. Calls `leave`, stopping on break
/// 4. Clears the skip flag so it cannot leak to siblings
pub(crate) fn process_node<V>(
    node: &Node,
    parent: Option<&Node>,
    visitor: &mut V,
    state: &mut TraverseState,
    limits: Limits,
    depth: usize,
) -> Flow
where
    V: Visitor + ?Sized,
{
    limits.check(depth, node)?;

    let option = visitor.enter(node, parent, state);
    let skip_children = match settle(state, option) {
        VisitorOption::Break => {
            trace!(node_type = %node.node_type, depth, "break requested on enter");
            return ControlFlow::Break(Halt::Break);
        }
        VisitorOption::Skip => {
            trace!(node_type = %node.node_type, depth, "skipping children");
            true
        }
        VisitorOption::Continue => false,
    };

    if !skip_children {
        for child in node.children().iter() {
            process_node(child, Some(node), visitor, state, limits, depth + 1)?;
        }
    }

    let option = visitor.leave(node, parent, state);
    if settle(state, option) == VisitorOption::Break {
        trace!(node_type = %node.node_type, depth, "break requested on leave");
        return ControlFlow::Break(Halt::Break);
    }

    state.reset_skip();
    ControlFlow::Continue(())
}
