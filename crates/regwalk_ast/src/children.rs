//! Uniform child access over both node shapes.
//!
//! List-shaped nodes keep children in `body`. A `characterClassRange`
//! keeps its endpoints in `min` and `max`, which act as children 0 and 1.
//! The shape is chosen from the node's type tag; callers see ordered
//! child slots either way.

use crate::{Node, NodeData};

/// Read-only view over a node's children.
#[derive(Debug, Clone, Copy)]
pub enum Children<'a> {
    /// Children stored in the generic `body` sequence.
    List(&'a [Node]),
    /// The `min`/`max` pair of a range node.
    Range { min: &'a Node, max: &'a Node },
}

impl<'a> Children<'a> {
    /// Returns the number of child slots.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Children::List(body) => body.len(),
            Children::Range { .. } => 2,
        }
    }

    /// Returns true if there are no children.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the child at `index`.
    pub fn get(&self, index: usize) -> Option<&'a Node> {
        match *self {
            Children::List(body) => body.get(index),
            Children::Range { min, .. } if index == 0 => Some(min),
            Children::Range { max, .. } if index == 1 => Some(max),
            Children::Range { .. } => None,
        }
    }

    /// Iterates over the children in slot order.
    pub fn iter(self) -> impl Iterator<Item = &'a Node> {
        (0..self.len()).filter_map(move |index| self.get(index))
    }
}

impl Node {
    /// Returns the children of this node, resolved by its type tag.
    ///
    /// A range-tagged node without range data is treated as a leaf.
    pub fn children(&self) -> Children<'_> {
        if self.node_type.is_range() {
            return match &self.data {
                NodeData::Range { min, max } => Children::Range {
                    min: min.as_ref(),
                    max: max.as_ref(),
                },
                _ => Children::List(&[]),
            };
        }
        Children::List(&self.body)
    }

    /// Returns the number of child slots.
    #[inline]
    pub fn child_count(&self) -> usize {
        self.children().len()
    }

    /// Returns the child in slot `index`.
    #[inline]
    pub fn child(&self, index: usize) -> Option<&Node> {
        self.children().get(index)
    }

    /// Returns the child in slot `index` for in-place write-back.
    ///
    /// On a range node slot 0 is `min` and slot 1 is `max`.
    pub fn child_mut(&mut self, index: usize) -> Option<&mut Node> {
        if self.node_type.is_range() {
            return match (&mut self.data, index) {
                (NodeData::Range { min, .. }, 0) => Some(min.as_mut()),
                (NodeData::Range { max, .. }, 1) => Some(max.as_mut()),
                _ => None,
            };
        }
        self.body.get_mut(index)
    }

    /// Follows a path of child slot indices from this node.
    ///
    /// An empty path returns `self`.
    pub fn descendant(&self, path: &[usize]) -> Option<&Node> {
        let mut node = self;
        for &index in path {
            node = node.child(index)?;
        }
        Some(node)
    }

    /// Mutable counterpart of [`Node::descendant`].
    pub fn descendant_mut(&mut self, path: &[usize]) -> Option<&mut Node> {
        let mut node = self;
        for &index in path {
            node = node.child_mut(index)?;
        }
        Some(node)
    }
}
