//! Lightweight views into a node's output dimensions.

use crate::node::Node;
use relay_core::ValidateError;
use std::ops::Range;

/// Selection over a node's output dimensions: a single index or a
/// contiguous range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selector {
    /// One output dimension.
    Index(usize),
    /// A half-open run of output dimensions.
    Range(Range<usize>),
}

impl Selector {
    /// The selection as a half-open `(start, end)` pair.
    pub fn bounds(&self) -> (usize, usize) {
        match self {
            Self::Index(i) => (*i, i + 1),
            Self::Range(r) => (r.start, r.end),
        }
    }
}

impl From<usize> for Selector {
    fn from(i: usize) -> Self {
        Self::Index(i)
    }
}

impl From<Range<usize>> for Selector {
    fn from(r: Range<usize>) -> Self {
        Self::Range(r)
    }
}

/// A borrowed slice of a node's output.
///
/// Views carry no data; they record the node and the resolved
/// selection, for downstream consumers (connections, probes) that
/// address a subset of the node's output dimensions.
///
/// # Examples
///
/// ```
/// use relay_node::{Node, NodeConfig, Output};
///
/// let node = Node::new(NodeConfig {
///     output: Output::constant(vec![1.0, 2.0, 3.0, 4.0]),
///     ..NodeConfig::default()
/// })
/// .unwrap();
///
/// let view = node.view(1..3).unwrap();
/// assert_eq!(view.len(), 2);
/// assert!(node.view(7).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct NodeView<'a> {
    node: &'a Node,
    selector: Selector,
    len: usize,
}

impl Node {
    /// A view of the output dimensions chosen by `selector`.
    ///
    /// Fails with [`ValidateError::Unconfigured`] when `size_out` is
    /// unset, and [`ValidateError::BadSelector`] when the selection
    /// falls outside `0..size_out` (an empty in-bounds range is
    /// allowed).
    pub fn view(&self, selector: impl Into<Selector>) -> Result<NodeView<'_>, ValidateError> {
        let size_out = self
            .size_out()
            .ok_or(ValidateError::Unconfigured { what: "view" })?;
        let selector = selector.into();
        let (start, end) = selector.bounds();
        if start > end || end > size_out {
            return Err(ValidateError::BadSelector {
                start,
                end,
                size_out,
            });
        }
        Ok(NodeView {
            node: self,
            selector,
            len: end - start,
        })
    }
}

impl<'a> NodeView<'a> {
    /// The viewed node.
    pub fn node(&self) -> &'a Node {
        self.node
    }

    /// The resolved selection.
    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    /// Number of selected output dimensions.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` for a zero-width selection.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeConfig;
    use crate::output::Output;

    fn four_wide() -> Node {
        Node::new(NodeConfig {
            output: Output::constant(vec![1.0, 2.0, 3.0, 4.0]),
            ..NodeConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn index_view_is_width_one() {
        let node = four_wide();
        let view = node.view(2).unwrap();
        assert_eq!(view.len(), 1);
        assert_eq!(view.selector(), &Selector::Index(2));
        assert!(!view.is_empty());
    }

    #[test]
    fn range_view_width_is_selection_width() {
        let node = four_wide();
        let view = node.view(1..4).unwrap();
        assert_eq!(view.len(), 3);
        assert_eq!(view.node().size_out(), Some(4));
    }

    #[test]
    fn empty_range_in_bounds_is_allowed() {
        let node = four_wide();
        let view = node.view(2..2).unwrap();
        assert!(view.is_empty());
    }

    #[test]
    fn out_of_range_selection_rejected() {
        let node = four_wide();
        assert_eq!(
            node.view(4).unwrap_err(),
            ValidateError::BadSelector {
                start: 4,
                end: 5,
                size_out: 4
            }
        );
        assert_eq!(
            node.view(2..9).unwrap_err(),
            ValidateError::BadSelector {
                start: 2,
                end: 9,
                size_out: 4
            }
        );
    }

    #[test]
    fn view_of_unconfigured_node_rejected() {
        let mut node = four_wide();
        node.set_size_out(None).unwrap();
        assert_eq!(
            node.view(0).unwrap_err(),
            ValidateError::Unconfigured { what: "view" }
        );
    }
}
