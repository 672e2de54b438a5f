//! The configurable [`Node`] entity.

use crate::output::{Output, OutputField};
use indexmap::IndexSet;
use relay_core::{Field, ValidateError};

/// Construction parameters for a [`Node`].
///
/// Every member is defaultable; `..NodeConfig::default()` fills in a
/// passthrough output with no input, no declared output width, and no
/// label.
///
/// # Examples
///
/// ```
/// use relay_node::{Node, NodeConfig, Output};
///
/// let relay = Node::new(NodeConfig {
///     size_in: 4,
///     label: Some("relay".into()),
///     ..NodeConfig::default()
/// })
/// .unwrap();
/// assert_eq!(relay.size_out(), Some(4));
/// ```
#[derive(Debug, Default)]
pub struct NodeConfig {
    /// What the node emits each timestep.
    pub output: Output,
    /// Input dimensionality.
    pub size_in: usize,
    /// Declared output dimensionality. Leave unset to infer it from
    /// `output` (a declared value is trusted for callables and never
    /// triggers a probe).
    pub size_out: Option<usize>,
    /// Optional name for debugging and display.
    pub label: Option<String>,
}

/// A node that provides data to a signal network.
///
/// Nodes summarize the environment around a model: sensory input,
/// stimuli, or arbitrary transformations of the signals routed into
/// them. Each declared attribute is a validated field; assignments run
/// the field's rules and either update the node consistently or leave
/// it untouched.
///
/// Assigning an output determines `size_out`:
///
/// | output | `size_out` |
/// |--------|------------|
/// | passthrough | `size_in` (replacing any prior value, with a diagnostic) |
/// | constant vector | its element count |
/// | callable, `size_out` declared | the declared value, probe suppressed |
/// | callable, `size_out` unset | width of one probe at `t = 0.0` |
///
/// # Examples
///
/// ```
/// use relay_node::{Node, NodeConfig, Output};
/// use relay_core::Tensor;
///
/// let wave = Node::new(NodeConfig {
///     output: Output::time_only(|t| Some(Tensor::vector(vec![t.sin(), t.cos()]))),
///     ..NodeConfig::default()
/// })
/// .unwrap();
/// assert_eq!(wave.size_out(), Some(2));
/// assert_eq!(wave.len().unwrap(), 2);
/// ```
#[derive(Debug)]
pub struct Node {
    size_in: Field<usize>,
    size_out: Field<usize>,
    output: OutputField,
    label: Field<String>,
    probeable: Field<IndexSet<String>>,
}

fn default_probeable() -> IndexSet<String> {
    IndexSet::from(["output".to_string()])
}

impl Node {
    /// Build a node, assigning fields in dependency order: `size_in`
    /// and `size_out` first, then `output` (whose validation reads
    /// both sizes), then `label` and `probeable`.
    pub fn new(config: NodeConfig) -> Result<Self, ValidateError> {
        let mut node = Self {
            size_in: Field::new("size_in", Some(0)),
            size_out: Field::new("size_out", None).optional(),
            output: OutputField::new(),
            label: Field::new("label", None).optional(),
            probeable: Field::new("probeable", Some(default_probeable())),
        };
        node.size_in.set(Some(config.size_in))?;
        node.size_out.set(config.size_out)?;
        node.output
            .set(config.size_in, &mut node.size_out, config.output)?;
        node.label.set(config.label)?;
        node.probeable.set(Some(default_probeable()))?;
        Ok(node)
    }

    /// Input dimensionality.
    pub fn size_in(&self) -> usize {
        self.size_in.get().copied().unwrap_or(0)
    }

    /// Output dimensionality, if set or inferred.
    pub fn size_out(&self) -> Option<usize> {
        self.size_out.get().copied()
    }

    /// The node's output.
    pub fn output(&self) -> &Output {
        self.output.get()
    }

    /// The node's label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.get().map(String::as_str)
    }

    /// Names of the node attributes that probes may target.
    pub fn probeable(&self) -> &IndexSet<String> {
        self.probeable.get().expect("probeable assigned at construction")
    }

    /// Assign a new input dimensionality.
    pub fn set_size_in(&mut self, size_in: usize) -> Result<(), ValidateError> {
        self.size_in.set(Some(size_in))
    }

    /// Declare (or clear) the output dimensionality.
    pub fn set_size_out(&mut self, size_out: Option<usize>) -> Result<(), ValidateError> {
        self.size_out.set(size_out)
    }

    /// Assign a new output, re-running shape inference against the
    /// current `size_in` and `size_out`.
    pub fn set_output(&mut self, output: Output) -> Result<(), ValidateError> {
        let size_in = self.size_in();
        self.output.set(size_in, &mut self.size_out, output)
    }

    /// Assign or clear the label.
    pub fn set_label(&mut self, label: Option<String>) -> Result<(), ValidateError> {
        self.label.set(label)
    }

    /// Replace the set of probe-target attribute names.
    pub fn set_probeable(&mut self, names: IndexSet<String>) -> Result<(), ValidateError> {
        self.probeable.set(Some(names))
    }

    /// The node's output width.
    ///
    /// Fails with [`ValidateError::Unconfigured`] when `size_out` is
    /// unset — the length of an unconfigured node is undefined.
    pub fn len(&self) -> Result<usize, ValidateError> {
        self.size_out()
            .ok_or(ValidateError::Unconfigured { what: "len" })
    }
}
