//! Definitions of the `Neuron` and `Connection` structs.
//!
//! Connections live in an arena owned by the network. Neurons refer to them through
//! [`ConnectionId`] handles, connections refer back to their endpoints through [`NeuronId`].

use crate::activation::ActivationKind;
use crate::layer::Layer;


/// Position of a neuron inside a network.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct NeuronId {
    pub layer: usize,
    pub index: usize,
}


/// Handle of a connection in the network's connection arena.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ConnectionId(pub usize);


/// Directed weighted edge between two neurons of adjacent layers.
#[derive(Clone, Debug, PartialEq)]
pub struct Connection {
    pub weight: f64,
    pub source: NeuronId,
    pub target: NeuronId,
}

impl Connection {
    pub fn new(source: NeuronId, target: NeuronId) -> Self {
        Self { weight: 0., source, target }
    }
}


#[derive(Clone, Debug, PartialEq)]
pub struct Neuron {
    /// Accumulated weighted input, or the injected value for input neurons.
    pub input: f64,
    pub output: f64,
    pub activation: ActivationKind,
    /// Edges whose target is this neuron, in weight tensor order.
    pub incoming: Vec<ConnectionId>,
    /// Edges whose source is this neuron.
    pub outgoing: Vec<ConnectionId>,
}

impl Neuron {
    pub fn new(activation: ActivationKind) -> Self {
        Self {
            input: 0.,
            output: 0.,
            activation,
            incoming: Vec::new(),
            outgoing: Vec::new(),
        }
    }

    /// Recomputes the accumulated input as the weighted sum of the source outputs.
    ///
    /// Neurons without incoming connections keep their injected input.
    ///
    /// # Arguments
    /// * `connections` - the network's connection arena
    /// * `upstream` - every layer before the one holding this neuron
    pub fn collect_impulses(&mut self, connections: &[Connection], upstream: &[Layer]) {
        if self.incoming.is_empty() {
            return;
        }
        self.input = self.incoming.iter().map(|&ConnectionId(idx)| {
            let connection = &connections[idx];
            let source = connection.source;
            upstream[source.layer].neurons[source.index].output * connection.weight
        }).sum();
    }

    /// Sets the output to the activation function applied to the accumulated input.
    pub fn activate(&mut self, derivative: bool) {
        self.output = self.activation.call(self.input, derivative);
    }
}
