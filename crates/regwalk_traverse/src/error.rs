//! Walk error types.

use regwalk_ast::NodeType;
use thiserror::Error;

/// Errors that can occur in a configured walk.
///
/// The free functions [`traverse`](crate::traverse) and
/// [`replace`](crate::replace) never fail; only a [`Walker`](crate::Walker)
/// with limits set can produce these.
#[derive(Debug, Error)]
pub enum WalkError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The tree is nested deeper than `max_depth`.
    #[error("Depth limit of {limit} exceeded at `{node_type}` node")]
    DepthLimitExceeded {
        /// Configured limit.
        limit: usize,
        /// Type of the first node found beyond the limit.
        node_type: NodeType,
    },
}

impl WalkError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
