//! # regwalk_traverse
//!
//! Depth-first traversal and replacement for regex ASTs.
//!
//! A walk calls `enter` on each node before its children and `leave` after
//! them. Callbacks steer the walk through the state they receive:
//!
//! - `skip()` during `enter` leaves out the node's children
//! - `break_traversal()` stops the whole walk at once
//! - `replace(node)` (replace mode) swaps the current node for another
//!   subtree; made during `enter`, the new subtree is walked in its place
//!
//! Returning [`VisitorOption::Skip`], [`VisitorOption::Break`] or
//! [`Action::Replace`] from a callback does the same thing.
//!
//! ## Example
//!
//! ```rust
//! use regwalk_ast::{Node, NodeType};
//! use regwalk_traverse::{TraverseCallbacks, VisitorOption, traverse};
//!
//! // abc[a-c]d
//! let ast = Node::alternative(vec![
//!     Node::value('a'),
//!     Node::value('b'),
//!     Node::value('c'),
//!     Node::character_class(
//!         vec![Node::class_range(Node::value('a'), Node::value('c'))],
//!         false,
//!     ),
//!     Node::value('d'),
//! ]);
//!
//! let mut seen = 0;
//! let mut callbacks = TraverseCallbacks::new().on_enter(|node, _, state| {
//!     if node.is(NodeType::CharacterClass) {
//!         state.break_traversal();
//!     }
//!     if node.is(NodeType::Value) {
//!         seen += 1;
//!     }
//!     VisitorOption::Continue
//! });
//!
//! let state = traverse(&ast, &mut callbacks);
//! drop(callbacks);
//!
//! assert!(state.did_call_break());
//! assert_eq!(seen, 3);
//! ```

mod callbacks;
mod config;
mod error;
mod option;
mod state;
pub mod visitor;
mod walker;

pub use callbacks::{Callbacks, ReplaceCallbacks, TraverseCallbacks};
pub use config::WalkConfig;
pub use error::WalkError;
pub use option::{Action, VisitorOption};
pub use state::{ControlState, ReplaceState, TraverseState};
pub use walker::{Walker, replace, replace_with_state, traverse, traverse_with_state};

// Re-export commonly used visitor items for convenience
pub use visitor::{Replacer, Visitor};
