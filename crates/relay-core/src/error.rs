//! Validation error types.
//!
//! Every variant is a caller configuration error, surfaced
//! synchronously from the failing set call. Nothing here is retried or
//! recovered internally; the failing field keeps its previous value.

use std::error::Error;
use std::fmt;

/// Errors from validated field assignment and node configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidateError {
    /// A required field was assigned an absent value.
    NotOptional {
        /// Name of the offending field.
        field: &'static str,
    },
    /// A read-only field was assigned a second time.
    ReadOnly {
        /// Name of the offending field.
        field: &'static str,
    },
    /// An output callable's declared arity does not match the node's
    /// input dimensionality.
    BadCallableArity {
        /// Number of arguments the node would pass (1 for time-only,
        /// 2 for time plus input vector).
        expected: usize,
    },
    /// An output tensor (stored or probed) has more than one dimension.
    NonVectorOutput {
        /// The offending shape.
        shape: Vec<usize>,
    },
    /// A constant output was assigned to a node with nonzero input
    /// dimensionality. Constants cannot consume input.
    CallableRequired {
        /// The node's input dimensionality.
        size_in: usize,
    },
    /// A constant output's length contradicts the declared `size_out`.
    SizeMismatch {
        /// Element count of the assigned output.
        actual: usize,
        /// The previously declared `size_out`.
        declared: usize,
    },
    /// An operation that needs `size_out` was invoked before it was
    /// set or inferred.
    Unconfigured {
        /// The operation that failed (e.g. `"len"`).
        what: &'static str,
    },
    /// A view selector falls outside `0..size_out`.
    BadSelector {
        /// First selected element.
        start: usize,
        /// One past the last selected element.
        end: usize,
        /// The node's output dimensionality.
        size_out: usize,
    },
}

impl fmt::Display for ValidateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotOptional { field } => {
                write!(f, "field '{field}' is not optional and requires a value")
            }
            Self::ReadOnly { field } => {
                write!(f, "field '{field}' is read-only and was already assigned")
            }
            Self::BadCallableArity { expected } => {
                if *expected == 1 {
                    write!(
                        f,
                        "output callable must accept exactly 1 argument \
                         (time, as a float)"
                    )
                } else {
                    write!(
                        f,
                        "output callable must accept exactly {expected} arguments \
                         (time, as a float, and input data, as a vector)"
                    )
                }
            }
            Self::NonVectorOutput { shape } => {
                write!(f, "node output must be a vector (got shape {shape:?})")
            }
            Self::CallableRequired { size_in } => {
                write!(f, "output must be a callable if size_in != 0 (size_in = {size_in})")
            }
            Self::SizeMismatch { actual, declared } => {
                write!(
                    f,
                    "size of node output ({actual}) does not match size_out ({declared})"
                )
            }
            Self::Unconfigured { what } => {
                write!(f, "{what} is undefined until size_out is set or inferred")
            }
            Self::BadSelector {
                start,
                end,
                size_out,
            } => {
                write!(
                    f,
                    "selector [{start}, {end}) out of range for size_out {size_out}"
                )
            }
        }
    }
}

impl Error for ValidateError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arity_message_names_argument_semantics() {
        let one = ValidateError::BadCallableArity { expected: 1 }.to_string();
        assert!(one.contains("1 argument"));
        assert!(one.contains("time, as a float"));

        let two = ValidateError::BadCallableArity { expected: 2 }.to_string();
        assert!(two.contains("2 arguments"));
        assert!(two.contains("input data"));
    }

    #[test]
    fn display_covers_all_variants() {
        let cases: Vec<(ValidateError, &str)> = vec![
            (ValidateError::NotOptional { field: "output" }, "not optional"),
            (ValidateError::ReadOnly { field: "label" }, "read-only"),
            (
                ValidateError::NonVectorOutput { shape: vec![2, 2] },
                "[2, 2]",
            ),
            (ValidateError::CallableRequired { size_in: 3 }, "size_in = 3"),
            (
                ValidateError::SizeMismatch {
                    actual: 2,
                    declared: 5,
                },
                "does not match",
            ),
            (ValidateError::Unconfigured { what: "len" }, "len is undefined"),
            (
                ValidateError::BadSelector {
                    start: 4,
                    end: 5,
                    size_out: 3,
                },
                "[4, 5)",
            ),
        ];
        for (err, fragment) in cases {
            assert!(
                err.to_string().contains(fragment),
                "{err} missing {fragment:?}"
            );
        }
    }
}
