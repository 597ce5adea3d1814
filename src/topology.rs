//! Definition of the `Topology` struct, a serializable description of a network's shape.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::activation::ActivationKind;
use crate::error::NetworkError;
use crate::network::NeuralNetwork;


#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct LayerSpec {
    pub width: usize,
    pub activation: ActivationKind,
}


/// Number of inputs plus the layers appended after the input layer.
///
/// Parses from JSON, e.g.
/// `{"inputs": 2, "layers": [{"width": 3, "activation": "sigmoid"}]}`.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Topology {
    pub inputs: usize,
    #[serde(default)]
    pub layers: Vec<LayerSpec>,
}


impl Topology {
    pub fn new(inputs: usize, layers: Vec<LayerSpec>) -> Self {
        Self { inputs, layers }
    }

    /// Builds a network with all weights set to 0.
    pub fn build(&self) -> Result<NeuralNetwork, NetworkError> {
        let mut network = NeuralNetwork::new(self.inputs)?;
        for spec in &self.layers {
            network.add_layer(spec.width, spec.activation)?;
        }
        Ok(network)
    }
}


/// Shape of the driving agents' networks: three distance sensors and the speed as inputs,
/// two pairs of competing steering and throttle outputs.
impl Default for Topology {
    fn default() -> Self {
        Self::new(4, vec![
            LayerSpec { width: 5, activation: ActivationKind::LeakyRelu },
            LayerSpec { width: 5, activation: ActivationKind::LeakyRelu },
            LayerSpec { width: 4, activation: ActivationKind::Sigmoid },
        ])
    }
}


impl FromStr for Topology {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}
