//! Relay: configurable signal nodes with validated fields and output
//! shape inference.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Relay sub-crates. For most users, adding `relay` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use relay::prelude::*;
//!
//! // A constant source: the output width is the vector's length.
//! let source = Node::new(NodeConfig {
//!     output: Output::constant(vec![1.0, 2.0, 3.0]),
//!     ..NodeConfig::default()
//! })
//! .unwrap();
//! assert_eq!(source.size_out(), Some(3));
//! assert_eq!(source.len().unwrap(), 3);
//!
//! // A time-driven callable: probed once to discover its width.
//! let wave = Node::new(NodeConfig {
//!     output: Output::time_only(|t| Some(Tensor::vector(vec![t.sin(), t.cos()]))),
//!     ..NodeConfig::default()
//! })
//! .unwrap();
//! assert_eq!(wave.size_out(), Some(2));
//!
//! // A declared width is trusted; the callable is never probed.
//! let external = Node::new(NodeConfig {
//!     output: Output::time_only(|_| unreachable!("declared widths suppress probing")),
//!     size_out: Some(8),
//!     ..NodeConfig::default()
//! })
//! .unwrap();
//! assert_eq!(external.size_out(), Some(8));
//!
//! // Views select a subset of the output dimensions.
//! let view = source.view(0..2).unwrap();
//! assert_eq!(view.len(), 2);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `relay-core` | [`Tensor`](types::Tensor), [`ValidateError`](types::ValidateError), the generic [`Field`](types::Field) |
//! | [`node`] | `relay-node` | [`Node`](node::Node), [`Output`](node::Output), [`Callable`](node::Callable), views |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Tensors, validation errors, and the validated-field mechanism
/// (`relay-core`).
pub use relay_core as types;

/// Nodes, outputs, and views (`relay-node`).
pub use relay_node as node;

/// The common types, for glob import.
pub mod prelude {
    pub use relay_core::{Field, Shape, Tensor, ValidateError};
    pub use relay_node::{Callable, Node, NodeConfig, NodeView, Output, OutputField, Selector};
}
