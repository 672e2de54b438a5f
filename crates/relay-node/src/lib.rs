//! Configurable signal nodes with validated fields and output shape
//! inference.
//!
//! A [`Node`] feeds data into a signal network: a constant vector, a
//! time-driven callable, or a passthrough relay of its own input. Every
//! field assignment is validated, and assigning an output determines
//! the node's output dimensionality — by inspecting a constant tensor
//! or by probing a callable once with synthetic arguments.
//!
//! Construction goes through [`NodeConfig`]:
//!
//! ```
//! use relay_node::{Node, NodeConfig, Output};
//!
//! let node = Node::new(NodeConfig {
//!     output: Output::constant(vec![1.0, 2.0, 3.0]),
//!     ..NodeConfig::default()
//! })
//! .unwrap();
//! assert_eq!(node.size_out(), Some(3));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod node;
mod output;
mod view;

pub use node::{Node, NodeConfig};
pub use output::{Callable, Output, OutputField};
pub use view::{NodeView, Selector};
