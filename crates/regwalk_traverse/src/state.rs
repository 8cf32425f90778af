//! Per-traversal control state.
//!
//! Callbacks receive the state as an explicit argument and call its
//! methods to steer the walk. The flags are read by the node processor at
//! fixed checkpoints after each `enter` and `leave` call.

use regwalk_ast::Node;

/// Control methods shared by [`TraverseState`] and [`ReplaceState`].
///
/// Both states expose the same methods inherently, so callbacks can call
/// `state.skip()` without importing this trait. The trait impls forward to
/// them; the node processors are generic over it.
pub trait ControlState {
    /// Requests that the children of the current node are not visited.
    ///
    /// Only effective during `enter`. A call during `leave` is recorded but
    /// has no effect because the children were already processed.
    fn skip(&mut self);

    /// Requests that the whole walk stops. Never cleared once set.
    fn break_traversal(&mut self);

    /// Returns true if skip is currently requested.
    fn did_call_skip(&self) -> bool;

    /// Returns true if break was requested.
    fn did_call_break(&self) -> bool;

    /// Clears the skip request at the end of a node.
    fn reset_skip(&mut self);
}

/// Control state for a read-only traversal.
///
/// # Example
///
/// ```rust
/// use regwalk_traverse::TraverseState;
///
/// let mut state = TraverseState::new();
/// state.break_traversal();
/// assert!(state.did_call_break());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraverseState {
    skip: bool,
    halt: bool,
}

impl TraverseState {
    /// Creates a state with no pending requests.
    pub fn new() -> Self {
        Self::default()
    }

    /// See [`ControlState::skip`].
    #[inline]
    pub fn skip(&mut self) {
        self.skip = true;
    }

    /// See [`ControlState::break_traversal`].
    #[inline]
    pub fn break_traversal(&mut self) {
        self.halt = true;
    }

    /// See [`ControlState::did_call_skip`].
    #[inline]
    pub fn did_call_skip(&self) -> bool {
        self.skip
    }

    /// See [`ControlState::did_call_break`].
    #[inline]
    pub fn did_call_break(&self) -> bool {
        self.halt
    }
}

impl ControlState for TraverseState {
    fn skip(&mut self) {
        TraverseState::skip(self);
    }

    fn break_traversal(&mut self) {
        TraverseState::break_traversal(self);
    }

    fn did_call_skip(&self) -> bool {
        TraverseState::did_call_skip(self)
    }

    fn did_call_break(&self) -> bool {
        TraverseState::did_call_break(self)
    }

    fn reset_skip(&mut self) {
        self.skip = false;
    }
}

/// Control state for a replacing traversal.
///
/// Adds a pending replacement slot on top of the [`TraverseState`] flags.
/// The slot holds at most one node; the node processor consumes it at the
/// next checkpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplaceState {
    visit: TraverseState,
    replacement: Option<Node>,
}

impl ReplaceState {
    /// Creates a state with no pending requests.
    pub fn new() -> Self {
        Self::default()
    }

    /// See [`ControlState::skip`].
    #[inline]
    pub fn skip(&mut self) {
        self.visit.skip();
    }

    /// See [`ControlState::break_traversal`].
    #[inline]
    pub fn break_traversal(&mut self) {
        self.visit.break_traversal();
    }

    /// See [`ControlState::did_call_skip`].
    #[inline]
    pub fn did_call_skip(&self) -> bool {
        self.visit.did_call_skip()
    }

    /// See [`ControlState::did_call_break`].
    #[inline]
    pub fn did_call_break(&self) -> bool {
        self.visit.did_call_break()
    }

    /// Stores `node` as the replacement for the current node.
    ///
    /// Passing `None` does nothing. A later call before the next checkpoint
    /// overwrites an earlier one.
    pub fn replace(&mut self, node: impl Into<Option<Node>>) {
        if let Some(node) = node.into() {
            self.replacement = Some(node);
        }
    }

    /// Returns true if a replacement is waiting to be applied.
    #[inline]
    pub fn has_replacement(&self) -> bool {
        self.replacement.is_some()
    }

    /// Returns the pending replacement, if any.
    #[inline]
    pub fn replacement(&self) -> Option<&Node> {
        self.replacement.as_ref()
    }

    /// Removes and returns the pending replacement.
    #[inline]
    pub fn take_replacement(&mut self) -> Option<Node> {
        self.replacement.take()
    }

    /// Returns the skip/break flags of this state.
    #[inline]
    pub fn visit_state(&self) -> &TraverseState {
        &self.visit
    }
}

impl ControlState for ReplaceState {
    fn skip(&mut self) {
        ReplaceState::skip(self);
    }

    fn break_traversal(&mut self) {
        ReplaceState::break_traversal(self);
    }

    fn did_call_skip(&self) -> bool {
        ReplaceState::did_call_skip(self)
    }

    fn did_call_break(&self) -> bool {
        ReplaceState::did_call_break(self)
    }

    fn reset_skip(&mut self) {
        self.visit.reset_skip();
    }
}

impl From<TraverseState> for ReplaceState {
    fn from(visit: TraverseState) -> Self {
        Self {
            visit,
            replacement: None,
        }
    }
}

/// Drops any pending replacement and keeps the flags.
impl From<ReplaceState> for TraverseState {
    fn from(state: ReplaceState) -> Self {
        state.visit
    }
}
