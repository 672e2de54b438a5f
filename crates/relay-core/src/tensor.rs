//! Minimal dense numeric arrays exchanged at node boundaries.
//!
//! [`Tensor`] is deliberately small: a shape vector plus a flat `f64`
//! buffer. Node configuration only needs to construct vectors, query
//! element count and dimensionality, and coerce scalars up to one
//! dimension; anything richer belongs to the caller's own numeric
//! stack.

use smallvec::{smallvec, SmallVec};

/// Shape of a [`Tensor`]: one `usize` extent per dimension.
///
/// Inline capacity of two covers every shape this crate produces
/// (scalars, vectors, and the rejected two-dimensional case).
pub type Shape = SmallVec<[usize; 2]>;

/// A dense array of `f64` values with an explicit shape.
///
/// The element count is always the product of the shape extents. A
/// zero-dimensional tensor holds exactly one element, matching the
/// usual numeric-library convention.
///
/// # Examples
///
/// ```
/// use relay_core::Tensor;
///
/// let v = Tensor::vector(vec![1.0, 2.0, 3.0]);
/// assert_eq!(v.ndim(), 1);
/// assert_eq!(v.len(), 3);
///
/// let s = Tensor::scalar(4.0);
/// assert_eq!(s.ndim(), 0);
/// assert_eq!(s.atleast_1d().shape(), &[1]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Tensor {
    shape: Shape,
    data: Vec<f64>,
}

impl Tensor {
    /// A one-dimensional tensor owning `data`.
    pub fn vector(data: Vec<f64>) -> Self {
        let len = data.len();
        Self {
            shape: smallvec![len],
            data,
        }
    }

    /// A zero-dimensional tensor holding a single value.
    pub fn scalar(value: f64) -> Self {
        Self {
            shape: smallvec![],
            data: vec![value],
        }
    }

    /// A zero-filled vector of length `len`.
    pub fn zeros(len: usize) -> Self {
        Self {
            shape: smallvec![len],
            data: vec![0.0; len],
        }
    }

    /// A two-dimensional tensor from equal-length rows.
    ///
    /// Returns `None` if the rows are ragged. An empty row list yields
    /// a `0 x 0` tensor.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Option<Self> {
        let ncols = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|r| r.len() != ncols) {
            return None;
        }
        let nrows = rows.len();
        let data = rows.into_iter().flatten().collect();
        Some(Self {
            shape: smallvec![nrows, ncols],
            data,
        })
    }

    /// Number of dimensions.
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Total element count (the product of the shape extents).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the tensor holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Extent per dimension.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// The flat element buffer, row-major.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Coerce to at least one dimension.
    ///
    /// A zero-dimensional tensor becomes a length-1 vector; anything
    /// already one-dimensional or higher passes through untouched, with
    /// no reallocation.
    pub fn atleast_1d(mut self) -> Self {
        if self.shape.is_empty() {
            self.shape = smallvec![1];
        }
        self
    }
}

impl From<f64> for Tensor {
    fn from(value: f64) -> Self {
        Self::scalar(value)
    }
}

impl From<Vec<f64>> for Tensor {
    fn from(data: Vec<f64>) -> Self {
        Self::vector(data)
    }
}

impl From<&[f64]> for Tensor {
    fn from(data: &[f64]) -> Self {
        Self::vector(data.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Tensor {
    fn from(data: [f64; N]) -> Self {
        Self::vector(data.to_vec())
    }
}
