//! Core types for the Relay signal-node framework.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the dense [`Tensor`] type exchanged at node boundaries, the
//! [`ValidateError`] taxonomy for caller configuration errors, and the
//! generic [`Field`] mechanism that entities compose into validated,
//! declared attributes.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod error;
mod field;
mod tensor;

pub use error::ValidateError;
pub use field::Field;
pub use tensor::{Shape, Tensor};
