//! Traversal entry points.

use std::ops::ControlFlow;

use regwalk_ast::Node;
use tracing::{debug, trace};

use crate::visitor::walk::{Flow, Halt, Limits, process_node};
use crate::visitor::walk_mut::process_node_mut;
use crate::{ReplaceState, Replacer, TraverseState, Visitor, WalkConfig, WalkError};

/// Walks `ast` depth-first, calling `visitor` on every node.
///
/// Returns the final state so callers can inspect `did_call_break()`.
pub fn traverse<V>(ast: &Node, visitor: &mut V) -> TraverseState
where
    V: Visitor + ?Sized,
{
    let mut state = TraverseState::new();
    traverse_with_state(ast, visitor, &mut state);
    state
}

/// Like [`traverse`], but with a caller-supplied state.
///
/// The state is not reset first, so a state that already requested break
/// stops the walk at the first callback.
pub fn traverse_with_state<V>(ast: &Node, visitor: &mut V, state: &mut TraverseState)
where
    V: Visitor + ?Sized,
{
    let _ = run_traverse(ast, visitor, state, Limits::UNBOUNDED);
}

/// Walks `ast` depth-first and returns the possibly replaced tree.
///
/// # Example
///
/// ```rust
/// use regwalk_ast::Node;
/// use regwalk_traverse::{Action, ReplaceCallbacks, replace};
///
/// // a|b  ->  c|d
/// let ast = Node::disjunction(vec![Node::value('a'), Node::value('b')]);
/// let mut callbacks = ReplaceCallbacks::new().on_enter(|node, _, _| match node.as_char() {
///     Some('a') => Action::Replace(Node::value('c')),
///     Some('b') => Action::Replace(Node::value('d')),
///     _ => Action::Continue,
/// });
///
/// let ast = replace(ast, &mut callbacks);
/// assert_eq!(ast, Node::disjunction(vec![Node::value('c'), Node::value('d')]));
/// ```
pub fn replace<R>(ast: Node, visitor: &mut R) -> Node
where
    R: Replacer + ?Sized,
{
    let mut state = ReplaceState::new();
    replace_with_state(ast, visitor, &mut state)
}

/// Like [`replace`], but with a caller-supplied state.
pub fn replace_with_state<R>(ast: Node, visitor: &mut R, state: &mut ReplaceState) -> Node
where
    R: Replacer + ?Sized,
{
    let (ast, _) = run_replace(ast, visitor, state, Limits::UNBOUNDED);
    ast
}

/// Traversal entry points bound to a [`WalkConfig`].
///
/// ```rust
/// use regwalk_ast::{GroupBehavior, Node};
/// use regwalk_traverse::{TraverseCallbacks, WalkConfig, WalkError, Walker};
///
/// // ((a))
/// let ast = Node::group(
///     GroupBehavior::Normal,
///     vec![Node::group(GroupBehavior::Normal, vec![Node::value('a')])],
/// );
///
/// let walker = Walker::new(WalkConfig::new().with_max_depth(1));
/// let result = walker.traverse(&ast, &mut TraverseCallbacks::new());
/// assert!(matches!(result, Err(WalkError::DepthLimitExceeded { limit: 1, .. })));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Walker {
    config: WalkConfig,
}

impl Walker {
    /// Creates a walker with the given configuration.
    pub fn new(config: WalkConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration of this walker.
    pub fn config(&self) -> &WalkConfig {
        &self.config
    }

    fn limits(&self) -> Limits {
        Limits::new(self.config.max_depth)
    }

    /// Configured counterpart of [`traverse`].
    pub fn traverse<V>(&self, ast: &Node, visitor: &mut V) -> Result<TraverseState, WalkError>
    where
        V: Visitor + ?Sized,
    {
        let mut state = TraverseState::new();
        self.traverse_with_state(ast, visitor, &mut state)?;
        Ok(state)
    }

    /// Configured counterpart of [`traverse_with_state`].
    pub fn traverse_with_state<V>(
        &self,
        ast: &Node,
        visitor: &mut V,
        state: &mut TraverseState,
    ) -> Result<(), WalkError>
    where
        V: Visitor + ?Sized,
    {
        into_result(run_traverse(ast, visitor, state, self.limits()))
    }

    /// Configured counterpart of [`replace`].
    ///
    /// On error the partially rewritten tree is dropped.
    pub fn replace<R>(&self, ast: Node, visitor: &mut R) -> Result<Node, WalkError>
    where
        R: Replacer + ?Sized,
    {
        let mut state = ReplaceState::new();
        self.replace_with_state(ast, visitor, &mut state)
    }

    /// Configured counterpart of [`replace_with_state`].
    pub fn replace_with_state<R>(
        &self,
        ast: Node,
        visitor: &mut R,
        state: &mut ReplaceState,
    ) -> Result<Node, WalkError>
    where
        R: Replacer + ?Sized,
    {
        let (ast, flow) = run_replace(ast, visitor, state, self.limits());
        into_result(flow)?;
        Ok(ast)
    }
}

fn run_traverse<V>(ast: &Node, visitor: &mut V, state: &mut TraverseState, limits: Limits) -> Flow
where
    V: Visitor + ?Sized,
{
    debug!(root = %ast.node_type, "Starting traversal");
    let flow = process_node(ast, None, visitor, state, limits, 0);
    debug!(
        root = %ast.node_type,
        stopped = state.did_call_break(),
        "Finished traversal"
    );
    flow
}

fn run_replace<R>(
    mut ast: Node,
    visitor: &mut R,
    state: &mut ReplaceState,
    limits: Limits,
) -> (Node, Flow)
where
    R: Replacer + ?Sized,
{
    debug!(root = %ast.node_type, "Starting replacement");
    let flow = process_node_mut(&mut ast, &mut Vec::new(), visitor, state, limits);

    // A root has no parent slot, so its leave-time replacement ends up here.
    if let Some(root) = state.take_replacement() {
        trace!(from = %ast.node_type, to = %root.node_type, "replacing root");
        ast = root;
    }

    debug!(
        root = %ast.node_type,
        stopped = state.did_call_break(),
        "Finished replacement"
    );
    (ast, flow)
}

fn into_result(flow: Flow) -> Result<(), WalkError> {
    match flow {
        ControlFlow::Break(Halt::DepthLimit { limit, node_type }) => {
            Err(WalkError::DepthLimitExceeded { limit, node_type })
        }
        ControlFlow::Break(Halt::Break) | ControlFlow::Continue(()) => Ok(()),
    }
}
