//! Walker configuration.

use serde::{Deserialize, Serialize};

use crate::WalkError;

/// Configuration for a [`Walker`](crate::Walker).
///
/// ```rust
/// use regwalk_traverse::WalkConfig;
///
/// let config = WalkConfig::from_json(r#"{ "maxDepth": 64 }"#).unwrap();
/// assert_eq!(config.max_depth, Some(64));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct WalkConfig {
    /// Deepest nesting level a walk may enter; the root is level 0.
    /// `None` means unbounded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
}

impl WalkConfig {
    /// Creates an unbounded configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum nesting depth.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Loads configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, WalkError> {
        serde_json::from_str(json).map_err(|e| WalkError::config(e.to_string()))
    }
}
