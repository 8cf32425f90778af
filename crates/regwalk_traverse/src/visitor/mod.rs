//! Visitor protocol for regex AST traversal.
//!
//! # Overview
//!
//! - [`Visitor`] - Read-only traversal trait
//! - [`Replacer`] - Node replacement trait
//!
//! Both traits expose an `enter` hook (pre-order) and a `leave` hook
//! (post-order). The node processors in this module drive them; use the
//! entry points in the crate root to start a walk.

mod visit;
mod visit_mut;
pub(crate) mod walk;
pub(crate) mod walk_mut;

pub use visit::Visitor;
pub use visit_mut::Replacer;
