//! Definition of the `WeightTensor` struct.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::error::ShapeMismatch;


/// All connection weights of a network, indexed `[layer][neuron][incoming connection]`.
///
/// Contains one entry per network layer. The input layer's neurons carry empty weight lists.
/// (De-)serializes as a plain nested array.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(transparent)]
pub struct WeightTensor {
    layers: Vec<Vec<Vec<f64>>>,
}


impl WeightTensor {
    pub fn new(layers: Vec<Vec<Vec<f64>>>) -> Self {
        Self { layers }
    }

    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }

    /// Total number of weights (genes) in the tensor.
    pub fn num_weights(&self) -> usize {
        self.layers.iter().flatten().map(Vec::len).sum()
    }

    pub fn layers(&self) -> &[Vec<Vec<f64>>] {
        &self.layers
    }

    pub fn into_inner(self) -> Vec<Vec<Vec<f64>>> {
        self.layers
    }

    /// Iterates over all weights in layer, neuron, connection order.
    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.layers.iter().flatten().flatten()
    }

    /// Checks that `other` has exactly the same shape as `self`.
    ///
    /// `self` provides the expected counts, `other` the found ones.
    pub fn check_shape(&self, other: &WeightTensor) -> Result<(), ShapeMismatch> {
        if self.layers.len() != other.layers.len() {
            return Err(ShapeMismatch::Layers { expected: self.layers.len(), found: other.layers.len() });
        }
        for (layer, (neurons, other_neurons)) in self.layers.iter().zip(&other.layers).enumerate() {
            if neurons.len() != other_neurons.len() {
                return Err(ShapeMismatch::Neurons { layer, expected: neurons.len(), found: other_neurons.len() });
            }
            for (neuron, (weights, other_weights)) in neurons.iter().zip(other_neurons).enumerate() {
                if weights.len() != other_weights.len() {
                    return Err(ShapeMismatch::Weights {
                        layer,
                        neuron,
                        expected: weights.len(),
                        found: other_weights.len(),
                    });
                }
            }
        }
        Ok(())
    }
}


impl From<Vec<Vec<Vec<f64>>>> for WeightTensor {
    fn from(layers: Vec<Vec<Vec<f64>>>) -> Self {
        Self::new(layers)
    }
}


impl Index<usize> for WeightTensor {
    type Output = Vec<Vec<f64>>;

    fn index(&self, layer: usize) -> &Self::Output {
        &self.layers[layer]
    }
}
