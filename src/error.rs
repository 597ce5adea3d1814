//! Definition of the `NetworkError` and `ShapeMismatch` error types.

use thiserror::Error;


/// Describes which part of a nested structure did not match the expected shape.
///
/// Always reports the most specific granularity that was found to diverge.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ShapeMismatch {
    #[error("mismatch of input count ({found} != {expected})")]
    Input { expected: usize, found: usize },

    #[error("mismatch of layer count ({found} != {expected})")]
    Layers { expected: usize, found: usize },

    #[error("mismatch of neuron count in layer {layer} ({found} != {expected})")]
    Neurons { layer: usize, expected: usize, found: usize },

    #[error("mismatch of weight count in neuron {neuron} of layer {layer} ({found} != {expected})")]
    Weights { layer: usize, neuron: usize, expected: usize, found: usize },
}


/// Error that may occur while building, evaluating or recombining networks.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum NetworkError {
    #[error("too small amount of neurons, {width} must be greater than 0")]
    InvalidTopology { width: usize },

    #[error(transparent)]
    ShapeMismatch(#[from] ShapeMismatch),

    #[error("weights don't exist, network has {layers} layer(s) but needs at least 2")]
    TopologyTooSmall { layers: usize },

    #[error("unknown activation function `{0}`")]
    InvalidActivationKind(String),

    #[error("no network at index {index} in a population of {len}")]
    NoSuchNetwork { index: usize, len: usize },
}
