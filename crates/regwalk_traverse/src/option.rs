//! Callback return signals.

use regwalk_ast::Node;

/// Signal returned from read-only `enter`/`leave` callbacks.
///
/// Returning [`VisitorOption::Skip`] or [`VisitorOption::Break`] is
/// equivalent to calling `state.skip()` or `state.break_traversal()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VisitorOption {
    #[default]
    Continue,
    Skip,
    Break,
}

/// Signal returned from replacing `enter`/`leave` callbacks.
///
/// `Action::Replace(node)` is equivalent to `state.replace(node)`; both
/// may be used in the same callback, and the returned node wins.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Action {
    #[default]
    Continue,
    Skip,
    Break,
    Replace(Node),
}

impl Action {
    /// Splits the action into its control part and its replacement payload.
    pub fn into_parts(self) -> (VisitorOption, Option<Node>) {
        match self {
            Action::Continue => (VisitorOption::Continue, None),
            Action::Skip => (VisitorOption::Skip, None),
            Action::Break => (VisitorOption::Break, None),
            Action::Replace(node) => (VisitorOption::Continue, Some(node)),
        }
    }
}

impl From<VisitorOption> for Action {
    fn from(option: VisitorOption) -> Self {
        match option {
            VisitorOption::Continue => Action::Continue,
            VisitorOption::Skip => Action::Skip,
            VisitorOption::Break => Action::Break,
        }
    }
}

impl From<Node> for Action {
    fn from(node: Node) -> Self {
        Action::Replace(node)
    }
}

/// `None` means "no replacement".
impl From<Option<Node>> for Action {
    fn from(node: Option<Node>) -> Self {
        node.map_or(Action::Continue, Action::Replace)
    }
}
