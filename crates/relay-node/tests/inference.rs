//! Behavior tests for output shape inference across construction and
//! mutation, including property tests over widths.

use proptest::prelude::*;
use relay_core::{Tensor, ValidateError};
use relay_node::{Node, NodeConfig, Output};
use std::cell::Cell;
use std::rc::Rc;

#[test]
fn constant_vector_sets_width_to_element_count() {
    let node = Node::new(NodeConfig {
        output: Output::constant(vec![1.0, 2.0, 3.0]),
        ..NodeConfig::default()
    })
    .unwrap();
    assert_eq!(node.size_out(), Some(3));
}

#[test]
fn time_only_scalar_result_sets_width_one() {
    let node = Node::new(NodeConfig {
        output: Output::time_only(|t| Some(Tensor::scalar(t))),
        size_in: 0,
        ..NodeConfig::default()
    })
    .unwrap();
    assert_eq!(node.size_out(), Some(1));
}

#[test]
fn sink_callable_sets_width_zero() {
    let node = Node::new(NodeConfig {
        output: Output::time_and_input(|_, _| None),
        size_in: 2,
        ..NodeConfig::default()
    })
    .unwrap();
    assert_eq!(node.size_out(), Some(0));
}

#[test]
fn declared_width_is_kept_verbatim_and_probe_suppressed() {
    let probes = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&probes);
    let node = Node::new(NodeConfig {
        output: Output::time_only(move |t| {
            counter.set(counter.get() + 1);
            Some(Tensor::vector(vec![t, t]))
        }),
        size_in: 0,
        size_out: Some(5),
        ..NodeConfig::default()
    })
    .unwrap();
    assert_eq!(node.size_out(), Some(5));
    assert_eq!(probes.get(), 0);
}

#[test]
fn passthrough_with_input_mirrors_size_in() {
    let node = Node::new(NodeConfig {
        size_in: 4,
        output: Output::Passthrough,
        ..NodeConfig::default()
    })
    .unwrap();
    assert_eq!(node.size_out(), Some(4));
}

#[test]
fn matrix_constant_rejected() {
    let matrix = Tensor::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    let err = Node::new(NodeConfig {
        output: Output::Constant(matrix),
        ..NodeConfig::default()
    })
    .unwrap_err();
    assert_eq!(err, ValidateError::NonVectorOutput { shape: vec![2, 2] });
}

#[test]
fn constant_with_declared_width_mismatch_rejected() {
    let err = Node::new(NodeConfig {
        output: Output::constant(vec![1.0, 2.0, 3.0]),
        size_out: Some(7),
        ..NodeConfig::default()
    })
    .unwrap_err();
    assert_eq!(
        err,
        ValidateError::SizeMismatch {
            actual: 3,
            declared: 7
        }
    );
}

#[test]
fn time_only_callable_with_input_rejected() {
    let err = Node::new(NodeConfig {
        output: Output::time_only(|t| Some(Tensor::scalar(t))),
        size_in: 3,
        ..NodeConfig::default()
    })
    .unwrap_err();
    assert_eq!(err, ValidateError::BadCallableArity { expected: 2 });
}

#[test]
fn callable_matrix_result_rejected_regardless_of_size_in() {
    for size_in in [0usize, 2] {
        let output = if size_in == 0 {
            Output::time_only(|_| Tensor::from_rows(vec![vec![1.0], vec![2.0]]))
        } else {
            Output::time_and_input(|_, _| Tensor::from_rows(vec![vec![1.0], vec![2.0]]))
        };
        let err = Node::new(NodeConfig {
            output,
            size_in,
            ..NodeConfig::default()
        })
        .unwrap_err();
        assert_eq!(err, ValidateError::NonVectorOutput { shape: vec![2, 1] });
    }
}

#[test]
fn passthrough_reassignment_overwrites_declared_width() {
    let mut node = Node::new(NodeConfig {
        output: Output::constant(vec![1.0, 2.0, 3.0]),
        ..NodeConfig::default()
    })
    .unwrap();
    assert_eq!(node.size_out(), Some(3));

    // size_in is 0, so the passthrough overwrite is visible as a
    // width change (a diagnostic is emitted on stderr).
    node.set_output(Output::Passthrough).unwrap();
    assert_eq!(node.size_out(), Some(0));
    assert!(node.output().is_passthrough());
}

#[test]
fn probe_input_is_zero_filled_with_declared_width() {
    let node = Node::new(NodeConfig {
        output: Output::time_and_input(|_, x| {
            assert_eq!(x, &[0.0, 0.0, 0.0]);
            Some(Tensor::vector(x.to_vec()))
        }),
        size_in: 3,
        ..NodeConfig::default()
    })
    .unwrap();
    assert_eq!(node.size_out(), Some(3));
}

#[test]
fn failed_reassignment_keeps_callable_and_width() {
    let mut node = Node::new(NodeConfig {
        output: Output::time_only(|t| Some(Tensor::vector(vec![t, t]))),
        ..NodeConfig::default()
    })
    .unwrap();
    assert_eq!(node.size_out(), Some(2));

    let matrix = Tensor::from_rows(vec![vec![1.0], vec![2.0]]).unwrap();
    assert!(node.set_output(Output::Constant(matrix)).is_err());
    assert_eq!(node.size_out(), Some(2));
    assert!(node.output().as_callable().is_some());
}

proptest! {
    #[test]
    fn constant_width_equals_element_count(
        v in proptest::collection::vec(-1e3f64..1e3, 0..64)
    ) {
        let node = Node::new(NodeConfig {
            output: Output::constant(v.clone()),
            ..NodeConfig::default()
        })
        .unwrap();
        prop_assert_eq!(node.size_out(), Some(v.len()));
    }

    #[test]
    fn passthrough_width_equals_size_in(size_in in 0usize..4096) {
        let node = Node::new(NodeConfig {
            size_in,
            ..NodeConfig::default()
        })
        .unwrap();
        prop_assert_eq!(node.size_out(), Some(size_in));
    }

    #[test]
    fn constant_rejected_for_any_nonzero_size_in(
        size_in in 1usize..256,
        v in proptest::collection::vec(-1e3f64..1e3, 1..8)
    ) {
        let err = Node::new(NodeConfig {
            output: Output::constant(v),
            size_in,
            ..NodeConfig::default()
        })
        .unwrap_err();
        prop_assert_eq!(err, ValidateError::CallableRequired { size_in });
    }

    #[test]
    fn constant_rejected_for_any_conflicting_declared_width(
        v in proptest::collection::vec(-1e3f64..1e3, 0..16),
        declared in 0usize..64
    ) {
        prop_assume!(declared != v.len());
        let actual = v.len();
        let err = Node::new(NodeConfig {
            output: Output::constant(v),
            size_out: Some(declared),
            ..NodeConfig::default()
        })
        .unwrap_err();
        prop_assert_eq!(err, ValidateError::SizeMismatch { actual, declared });
    }

    #[test]
    fn probed_callable_width_equals_result_width(width in 0usize..64) {
        let node = Node::new(NodeConfig {
            output: Output::time_only(move |t| Some(Tensor::vector(vec![t; width]))),
            ..NodeConfig::default()
        })
        .unwrap();
        prop_assert_eq!(node.size_out(), Some(width));
    }
}
