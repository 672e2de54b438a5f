//! Node output representations and the shape-inference policy.
//!
//! [`Output`] is the heterogeneous value a node produces: nothing
//! (passthrough), a constant tensor, or a user-supplied callable.
//! [`OutputField`] is the validated field that accepts an `Output`,
//! determines the node's output dimensionality from it, and rejects
//! assignments that contradict the node's declared sizes.

use relay_core::{Field, Tensor, ValidateError};
use std::fmt;

/// A user-supplied output callable with its arity declared up front.
///
/// The node invokes the callable at every timestep with the current
/// simulation time, plus the node's input vector when `size_in > 0`.
/// Declaring the arity as a variant (rather than discovering it by
/// trial invocation) lets assignment validation check it against
/// `size_in` without calling into user code.
///
/// Probing a callable executes user code synchronously and without a
/// timeout. The framework never invokes a callable speculatively when
/// the output width is already declared, but an undeclared callable is
/// probed once at assignment; callers holding untrusted callables must
/// wrap configuration with their own sandboxing.
pub enum Callable {
    /// Invoked as `f(t)`; only valid when the node has no input.
    TimeOnly(Box<dyn Fn(f64) -> Option<Tensor>>),
    /// Invoked as `f(t, x)` with the node's input vector; only valid
    /// when the node has input.
    TimeAndInput(Box<dyn Fn(f64, &[f64]) -> Option<Tensor>>),
}

impl Callable {
    /// Wrap a time-only function.
    pub fn time_only(f: impl Fn(f64) -> Option<Tensor> + 'static) -> Self {
        Self::TimeOnly(Box::new(f))
    }

    /// Wrap a time-and-input function.
    pub fn time_and_input(f: impl Fn(f64, &[f64]) -> Option<Tensor> + 'static) -> Self {
        Self::TimeAndInput(Box::new(f))
    }

    /// Number of arguments this callable accepts (1 or 2).
    pub fn arity(&self) -> usize {
        match self {
            Self::TimeOnly(_) => 1,
            Self::TimeAndInput(_) => 2,
        }
    }

    /// Invoke with a candidate argument list, if the arity matches.
    ///
    /// The outer `Option` reports whether the call was made at all:
    /// `None` means the argument list does not match this callable's
    /// arity and user code was never entered. The inner value is the
    /// callable's own result, which may itself be absent.
    pub fn checked_call(&self, t: f64, x: Option<&[f64]>) -> Option<Option<Tensor>> {
        match (self, x) {
            (Self::TimeOnly(f), None) => Some(f(t)),
            (Self::TimeAndInput(f), Some(x)) => Some(f(t, x)),
            _ => None,
        }
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TimeOnly(_) => f.write_str("TimeOnly(..)"),
            Self::TimeAndInput(_) => f.write_str("TimeAndInput(..)"),
        }
    }
}

/// What a node emits each timestep.
pub enum Output {
    /// Relay the node's input unchanged. The node's output width
    /// equals its input width.
    Passthrough,
    /// A constant vector, independent of time and input.
    Constant(Tensor),
    /// A function of time (and input, for nodes with `size_in > 0`).
    Callable(Callable),
}

impl Output {
    /// A constant output from anything convertible to a tensor.
    pub fn constant(value: impl Into<Tensor>) -> Self {
        Self::Constant(value.into())
    }

    /// A time-only callable output.
    pub fn time_only(f: impl Fn(f64) -> Option<Tensor> + 'static) -> Self {
        Self::Callable(Callable::time_only(f))
    }

    /// A time-and-input callable output.
    pub fn time_and_input(f: impl Fn(f64, &[f64]) -> Option<Tensor> + 'static) -> Self {
        Self::Callable(Callable::time_and_input(f))
    }

    /// Returns `true` for the passthrough output.
    pub fn is_passthrough(&self) -> bool {
        matches!(self, Self::Passthrough)
    }

    /// The constant tensor, if this output is one.
    pub fn as_constant(&self) -> Option<&Tensor> {
        match self {
            Self::Constant(t) => Some(t),
            _ => None,
        }
    }

    /// The callable, if this output is one.
    pub fn as_callable(&self) -> Option<&Callable> {
        match self {
            Self::Callable(c) => Some(c),
            _ => None,
        }
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::Passthrough
    }
}

impl fmt::Debug for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Passthrough => f.write_str("Passthrough"),
            Self::Constant(t) => f.debug_tuple("Constant").field(t).finish(),
            Self::Callable(c) => f.debug_tuple("Callable").field(c).finish(),
        }
    }
}

impl From<Tensor> for Output {
    fn from(t: Tensor) -> Self {
        Self::Constant(t)
    }
}

impl From<Vec<f64>> for Output {
    fn from(v: Vec<f64>) -> Self {
        Self::Constant(Tensor::vector(v))
    }
}

impl From<Callable> for Output {
    fn from(c: Callable) -> Self {
        Self::Callable(c)
    }
}

/// The validated `output` field of a node.
///
/// Wraps a generic [`Field`] and extends its validation with the
/// shape-inference policy: a successful assignment updates both the
/// stored output and the entity's `size_out` field, and a failed one
/// updates neither.
#[derive(Debug)]
pub struct OutputField {
    inner: Field<Output>,
}

impl OutputField {
    /// A fresh output field defaulting to passthrough.
    pub fn new() -> Self {
        Self {
            // Passthrough stands in for an absent value, so the field
            // itself never sees `None`.
            inner: Field::new("output", Some(Output::Passthrough)).optional(),
        }
    }

    /// The current output.
    pub fn get(&self) -> &Output {
        match self.inner.get() {
            Some(output) => output,
            None => &Output::Passthrough,
        }
    }

    /// Validate `value` against the entity's sizes, then store it and
    /// record the determined output width in `size_out`.
    ///
    /// Dispatch:
    /// - **Passthrough** mirrors `size_in` into `size_out`, warning on
    ///   stderr when this replaces a different prior width.
    /// - **Callable with `size_out` already set** is trusted verbatim
    ///   and never invoked — probing may have external side effects.
    /// - **Callable with `size_out` unset** is probed exactly once at
    ///   `t = 0.0` (with a zero input vector when `size_in > 0`).
    /// - **Constant** is coerced to at least one dimension, then
    ///   checked for vector shape, zero `size_in`, and consistency
    ///   with any declared `size_out`.
    pub fn set(
        &mut self,
        size_in: usize,
        size_out: &mut Field<usize>,
        value: Output,
    ) -> Result<(), ValidateError> {
        self.inner.validate(Some(&value))?;

        let value = match value {
            Output::Constant(t) => Output::Constant(t.atleast_1d()),
            other => other,
        };

        let determined = match &value {
            Output::Passthrough => {
                if let Some(&declared) = size_out.get() {
                    if declared != size_in {
                        eprintln!(
                            "relay: node 'size_out' ({declared}) is being overwritten \
                             with 'size_in' ({size_in}) since the output is passthrough"
                        );
                    }
                }
                Some(size_in)
            }
            // Trust a declared size_out: the callable may have side
            // effects the framework must not trigger speculatively.
            Output::Callable(_) if size_out.get().is_some() => None,
            Output::Callable(callable) => Some(probe_callable(callable, size_in)?),
            Output::Constant(tensor) => Some(validate_constant(
                tensor,
                size_in,
                size_out.get().copied(),
            )?),
        };

        if let Some(width) = determined {
            size_out.validate(Some(&width))?;
            size_out.store(Some(width));
        }
        self.inner.store(Some(value));
        Ok(())
    }
}

impl Default for OutputField {
    fn default() -> Self {
        Self::new()
    }
}

/// Probe a callable once to discover its output width.
///
/// Builds the argument list the node would use (`t = 0.0`, plus a zero
/// input vector when `size_in > 0`) and attempts the call through
/// [`Callable::checked_call`]. An arity mismatch is reported without
/// entering user code.
fn probe_callable(callable: &Callable, size_in: usize) -> Result<usize, ValidateError> {
    let input = (size_in > 0).then(|| Tensor::zeros(size_in));
    let result = callable
        .checked_call(0.0, input.as_ref().map(Tensor::as_slice))
        .ok_or(ValidateError::BadCallableArity {
            expected: if size_in == 0 { 1 } else { 2 },
        })?;
    match result {
        None => Ok(0),
        Some(tensor) => {
            let tensor = tensor.atleast_1d();
            if tensor.ndim() > 1 {
                return Err(ValidateError::NonVectorOutput {
                    shape: tensor.shape().to_vec(),
                });
            }
            Ok(tensor.len())
        }
    }
}

/// Check a constant output against the entity's declared sizes.
fn validate_constant(
    tensor: &Tensor,
    size_in: usize,
    declared: Option<usize>,
) -> Result<usize, ValidateError> {
    if tensor.ndim() > 1 {
        return Err(ValidateError::NonVectorOutput {
            shape: tensor.shape().to_vec(),
        });
    }
    if size_in != 0 {
        return Err(ValidateError::CallableRequired { size_in });
    }
    if let Some(declared) = declared {
        if declared != tensor.len() {
            return Err(ValidateError::SizeMismatch {
                actual: tensor.len(),
                declared,
            });
        }
    }
    Ok(tensor.len())
}
