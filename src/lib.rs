//! Rust library for evaluating small feedforward neural networks and evolving their weights
//! through bit-level crossover.

pub mod activation;
pub mod error;
pub mod evolution;
pub mod layer;
pub mod network;
pub mod neuron;
pub mod population;
pub mod topology;
pub mod weights;

pub use activation::ActivationKind;
pub use error::{NetworkError, ShapeMismatch};
pub use network::NeuralNetwork;
pub use population::Population;
pub use topology::{LayerSpec, Topology};
pub use weights::WeightTensor;
