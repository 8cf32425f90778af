//! Node processor for replacing traversal.
//!
//! The walker owns the tree mutably and addresses the current node by its
//! path of child slot indices from the root. Callbacks get fresh shared
//! borrows of the node and its parent for each call, so a replacement can
//! be written into the tree between calls.

use std::ops::ControlFlow;

use regwalk_ast::Node;
use tracing::trace;

use crate::{Action, ControlState, ReplaceState, VisitorOption};

use super::visit_mut::Replacer;
use super::walk::{Flow, Halt, Limits, settle};

/// Resolves `path` to the node it names and that node's parent.
fn locate<'t>(root: &'t Node, path: &[usize]) -> Option<(&'t Node, Option<&'t Node>)> {
    match path.split_last() {
        None => Some((root, None)),
        Some((&index, parent_path)) => {
            let parent = root.descendant(parent_path)?;
            Some((parent.child(index)?, Some(parent)))
        }
    }
}

/// Moves a returned replacement into the pending slot, then settles the
/// control part like a read-only callback.
fn capture(state: &mut ReplaceState, action: Action) -> VisitorOption {
    let (option, replacement) = action.into_parts();
    state.replace(replacement);
    settle(state, option)
}

/// Processes the node at `path` and its subtree, applying replacements.
///
/// This function:
/// 1. Calls `enter`; a replacement takes the node's slot immediately and
///    stands in for the node from then on
/// 2. Stops on break, or notes a skip request
/// 3. Visits the children of the (possibly new) node, splicing any
///    replacement a child leaves pending into that child's slot
/// 4. Calls `leave`; a replacement stays pending for the caller to splice
/// 5. Clears the skip flag
pub(crate) fn process_node_mut<R>(
    root: &mut Node,
    path: &mut Vec<usize>,
    visitor: &mut R,
    state: &mut ReplaceState,
    limits: Limits,
) -> Flow
where
    R: Replacer + ?Sized,
{
    let Some((node, parent)) = locate(root, path) else {
        return ControlFlow::Continue(());
    };
    limits.check(path.len(), node)?;

    let current_type = node.node_type;
    let action = visitor.enter(node, parent, state);
    let option = capture(state, action);

    // The replacement takes the slot; its children and `leave` run on it.
    if let Some(replacement) = state.take_replacement() {
        trace!(
            from = %current_type,
            to = %replacement.node_type,
            depth = path.len(),
            "replacing node on enter"
        );
        if let Some(slot) = root.descendant_mut(path) {
            *slot = replacement;
        }
    }

    let skip_children = match option {
        VisitorOption::Break => {
            trace!(depth = path.len(), "break requested on enter");
            return ControlFlow::Break(Halt::Break);
        }
        VisitorOption::Skip => true,
        VisitorOption::Continue => false,
    };

    if !skip_children {
        let count = root.descendant(path).map_or(0, Node::child_count);
        for index in 0..count {
            path.push(index);
            let flow = process_node_mut(root, path, visitor, state, limits);
            path.pop();

            if let Some(replacement) = state.take_replacement() {
                trace!(
                    to = %replacement.node_type,
                    index,
                    depth = path.len(),
                    "splicing replacement into parent"
                );
                if let Some(slot) = root
                    .descendant_mut(path)
                    .and_then(|node| node.child_mut(index))
                {
                    *slot = replacement;
                }
            }

            flow?;
        }
    }

    let Some((node, parent)) = locate(root, path) else {
        return ControlFlow::Continue(());
    };
    let node_type = node.node_type;
    let action = visitor.leave(node, parent, state);
    if capture(state, action) == VisitorOption::Break {
        trace!(node_type = %node_type, depth = path.len(), "break requested on leave");
        return ControlFlow::Break(Halt::Break);
    }

    state.reset_skip();
    ControlFlow::Continue(())
}
