//! Definition of the `NeuralNetwork` struct.
//!
//! The network is the centerpiece of the crate: it owns the layers, the connection arena and
//! performs the forward pass as well as weight extraction and injection.

use log::{debug, trace};
use rand::Rng;

use crate::activation::ActivationKind;
use crate::error::{NetworkError, ShapeMismatch};
use crate::evolution::init::{init_weight, rng_from_seed};
use crate::layer::Layer;
use crate::neuron::{Connection, ConnectionId, NeuronId};
use crate::weights::WeightTensor;


/// Fully connected feedforward network evaluated neuron by neuron.
#[derive(Clone, Debug, PartialEq)]
pub struct NeuralNetwork {
    /// Layers ordered from input to output layer.
    layers: Vec<Layer>,

    /// Every connection of the network, referenced by index from both endpoints.
    connections: Vec<Connection>,
}


impl NeuralNetwork {
    /// Constructs a network consisting only of an identity input layer.
    ///
    /// # Arguments
    /// * `input_width` - number of input neurons, must be at least 1
    ///
    /// # Returns
    /// New `NeuralNetwork` or [`NetworkError::InvalidTopology`]
    pub fn new(input_width: usize) -> Result<Self, NetworkError> {
        let input_layer = Layer::new(input_width, ActivationKind::Identity)?;
        debug!("created network with {} inputs", input_width);
        return Ok(Self {
            layers: vec![input_layer],
            connections: Vec::new(),
        });
    }

    /// Appends a layer and fully connects it to the previous one.
    ///
    /// Every new connection starts with weight 0. On failure the network is left unchanged.
    ///
    /// # Arguments
    /// * `width` - number of neurons in the new layer, must be at least 1
    /// * `activation` - activation function shared by the new neurons
    pub fn add_layer(&mut self, width: usize, activation: ActivationKind) -> Result<(), NetworkError> {
        let mut layer = Layer::new(width, activation)?;
        let layer_idx = self.layers.len();
        if let Some(previous) = self.layers.last_mut() {
            for (source_idx, source) in previous.neurons.iter_mut().enumerate() {
                for (target_idx, target) in layer.neurons.iter_mut().enumerate() {
                    let id = ConnectionId(self.connections.len());
                    self.connections.push(Connection::new(
                        NeuronId { layer: layer_idx - 1, index: source_idx },
                        NeuronId { layer: layer_idx, index: target_idx },
                    ));
                    source.outgoing.push(id);
                    target.incoming.push(id);
                }
            }
        }
        debug!("added layer {} with {} {} neurons", layer_idx, width, activation);
        self.layers.push(layer);
        Ok(())
    }

    /// Assigns every connection weight independently and uniformly in `[-1, 1)`.
    pub fn initialize_weights<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for connection in self.connections.iter_mut() {
            connection.weight = init_weight(rng);
        }
        trace!("initialized {} weights", self.connections.len());
    }

    /// Same as [`NeuralNetwork::initialize_weights`] with a generator built from an optional seed.
    ///
    /// Without a seed a fresh entropy-seeded generator is used.
    pub fn initialize_weights_seeded(&mut self, seed: Option<u64>) {
        self.initialize_weights(&mut rng_from_seed(seed));
    }

    /// Primes the input layer with the given values.
    ///
    /// The values become the input layer's outputs on the next [`NeuralNetwork::feed_forward`].
    pub fn set_input(&mut self, values: &[f64]) -> Result<(), NetworkError> {
        let input_layer = &mut self.layers[0];
        if values.len() != input_layer.size() {
            return Err(ShapeMismatch::Input { expected: input_layer.size(), found: values.len() }.into());
        }
        for (neuron, value) in input_layer.neurons.iter_mut().zip(values) {
            neuron.input = *value;
        }
        Ok(())
    }

    /// Performs a full forward pass, layer by layer in construction order.
    pub fn feed_forward(&mut self) {
        for layer_idx in 0..self.layers.len() {
            let (upstream, rest) = self.layers.split_at_mut(layer_idx);
            for neuron in rest[0].neurons.iter_mut() {
                neuron.collect_impulses(&self.connections, upstream);
                neuron.activate(false);
            }
        }
        trace!("output: {:?}", self.layers.last().map(Layer::outputs));
    }

    /// Returns the outputs of the last layer in neuron order.
    pub fn get_output(&self) -> Vec<f64> {
        // The input layer always exists.
        self.layers.last().map(Layer::outputs).unwrap_or_default()
    }

    /// Collects all weights as `[layer][neuron][incoming connection]`.
    ///
    /// # Returns
    /// The weight tensor or [`NetworkError::TopologyTooSmall`] for networks with fewer than 2 layers.
    pub fn get_weights(&self) -> Result<WeightTensor, NetworkError> {
        self.check_has_weights()?;
        let layers = self.layers.iter().map(|layer| {
            layer.neurons.iter().map(|neuron| {
                neuron.incoming.iter().map(|&ConnectionId(idx)| self.connections[idx].weight).collect()
            }).collect()
        }).collect();
        Ok(WeightTensor::new(layers))
    }

    /// Overwrites all weights in place.
    ///
    /// The whole tensor is validated against the topology before any weight is written.
    pub fn set_weights(&mut self, weights: &WeightTensor) -> Result<(), NetworkError> {
        self.check_has_weights()?;
        self.check_weights_shape(weights)?;
        for (layer, layer_weights) in self.layers.iter().zip(weights.layers()) {
            for (neuron, neuron_weights) in layer.neurons.iter().zip(layer_weights) {
                for (&ConnectionId(idx), weight) in neuron.incoming.iter().zip(neuron_weights) {
                    self.connections[idx].weight = *weight;
                }
            }
        }
        Ok(())
    }

    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Widths of all layers, input layer first.
    pub fn widths(&self) -> Vec<usize> {
        self.layers.iter().map(Layer::size).collect()
    }

    fn check_has_weights(&self) -> Result<(), NetworkError> {
        if self.layers.len() < 2 {
            return Err(NetworkError::TopologyTooSmall { layers: self.layers.len() });
        }
        Ok(())
    }

    fn check_weights_shape(&self, weights: &WeightTensor) -> Result<(), ShapeMismatch> {
        if weights.num_layers() != self.layers.len() {
            return Err(ShapeMismatch::Layers { expected: self.layers.len(), found: weights.num_layers() });
        }
        for (layer_idx, (layer, layer_weights)) in self.layers.iter().zip(weights.layers()).enumerate() {
            if layer_weights.len() != layer.size() {
                return Err(ShapeMismatch::Neurons { layer: layer_idx, expected: layer.size(), found: layer_weights.len() });
            }
            for (neuron_idx, (neuron, neuron_weights)) in layer.neurons.iter().zip(layer_weights).enumerate() {
                if neuron_weights.len() != neuron.incoming.len() {
                    return Err(ShapeMismatch::Weights {
                        layer: layer_idx,
                        neuron: neuron_idx,
                        expected: neuron.incoming.len(),
                        found: neuron_weights.len(),
                    });
                }
            }
        }
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn network(widths: &[(usize, ActivationKind)]) -> NeuralNetwork {
        let mut network = NeuralNetwork::new(widths[0].0).unwrap();
        for &(width, activation) in &widths[1..] {
            network.add_layer(width, activation).unwrap();
        }
        network
    }

    #[test]
    fn test_new() {
        let network = NeuralNetwork::new(4).unwrap();
        assert_eq!(network.widths(), vec![4]);
        assert_eq!(network.layers()[0].activation, ActivationKind::Identity);
        assert!(network.connections().is_empty());
        assert_eq!(NeuralNetwork::new(0), Err(NetworkError::InvalidTopology { width: 0 }));
    }

    #[test]
    fn test_add_layer_connects_fully() {
        let network = network(&[
            (3, ActivationKind::Identity),
            (4, ActivationKind::LeakyRelu),
            (2, ActivationKind::Sigmoid),
        ]);
        assert_eq!(network.connections().len(), 3 * 4 + 4 * 2);
        let layers = network.layers();
        assert!(layers[0].neurons.iter().all(|n| n.incoming.is_empty() && n.outgoing.len() == 4));
        assert!(layers[1].neurons.iter().all(|n| n.incoming.len() == 3 && n.outgoing.len() == 2));
        assert!(layers[2].neurons.iter().all(|n| n.incoming.len() == 4 && n.outgoing.is_empty()));
        // incoming order follows the source neuron order
        for (target_idx, neuron) in layers[1].neurons.iter().enumerate() {
            for (source_idx, &ConnectionId(idx)) in neuron.incoming.iter().enumerate() {
                let connection = &network.connections()[idx];
                assert_eq!(connection.source, NeuronId { layer: 0, index: source_idx });
                assert_eq!(connection.target, NeuronId { layer: 1, index: target_idx });
                assert_eq!(connection.weight, 0.);
            }
        }
    }

    #[test]
    fn test_add_layer_empty_leaves_network_unchanged() {
        let mut network = network(&[(2, ActivationKind::Identity), (3, ActivationKind::Sigmoid)]);
        let before = network.clone();
        assert_eq!(
            network.add_layer(0, ActivationKind::LeakyRelu),
            Err(NetworkError::InvalidTopology { width: 0 }),
        );
        assert_eq!(network, before);
    }

    #[test]
    fn test_initialize_weights() {
        let mut network = network(&[(4, ActivationKind::Identity), (5, ActivationKind::LeakyRelu)]);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        network.initialize_weights(&mut rng);
        assert!(network.connections().iter().all(|c| (-1.0..1.0).contains(&c.weight)));
        assert!(network.connections().iter().any(|c| c.weight != 0.));

        let mut same = network.clone();
        same.initialize_weights(&mut ChaCha8Rng::seed_from_u64(7));
        assert_eq!(same, network);

        let mut seeded = network.clone();
        seeded.initialize_weights_seeded(Some(7));
        let mut seeded_again = network.clone();
        seeded_again.initialize_weights_seeded(Some(7));
        assert_eq!(seeded, seeded_again);
    }

    #[test]
    fn test_set_input() {
        let mut network = NeuralNetwork::new(2).unwrap();
        assert_eq!(
            network.set_input(&[1.]),
            Err(ShapeMismatch::Input { expected: 2, found: 1 }.into()),
        );
        network.set_input(&[1., -1.]).unwrap();
        network.feed_forward();
        assert_eq!(network.get_output(), vec![1., -1.]);
    }

    #[test]
    fn test_feed_forward_uniform_weights() {
        let mut network = network(&[(2, ActivationKind::Identity), (3, ActivationKind::Sigmoid)]);
        let weights = WeightTensor::new(vec![
            vec![vec![], vec![]],
            vec![vec![0.5, 0.5]; 3],
        ]);
        network.set_weights(&weights).unwrap();
        network.set_input(&[1., -1.]).unwrap();
        network.feed_forward();
        assert_eq!(network.get_output(), vec![0.5, 0.5, 0.5]);
    }

    #[test]
    fn test_feed_forward_hidden_layer() {
        let mut network = network(&[
            (2, ActivationKind::Identity),
            (2, ActivationKind::LeakyRelu),
            (1, ActivationKind::Identity),
        ]);
        let weights = WeightTensor::new(vec![
            vec![vec![], vec![]],
            vec![vec![1., 2.], vec![-1., -1.]],
            vec![vec![0.5, 100.]],
        ]);
        network.set_weights(&weights).unwrap();
        network.set_input(&[3., 1.]).unwrap();
        network.feed_forward();
        // hidden: [3 + 2, leaky(-4)] = [5, -0.04]
        assert_relative_eq!(network.get_output()[0], -1.5, epsilon = 1e-12);

        let first = network.get_output();
        network.feed_forward();
        assert_eq!(network.get_output(), first);
    }

    #[test]
    fn test_get_weights_round_trip() {
        let mut network = network(&[
            (4, ActivationKind::Identity),
            (5, ActivationKind::LeakyRelu),
            (5, ActivationKind::LeakyRelu),
            (4, ActivationKind::Sigmoid),
        ]);
        network.initialize_weights(&mut ChaCha8Rng::seed_from_u64(3));
        let weights = network.get_weights().unwrap();
        assert_eq!(weights.num_layers(), 4);
        assert!(weights[0].iter().all(Vec::is_empty));
        assert_eq!(weights[1].len(), 5);
        assert_eq!(weights[3][0].len(), 5);
        assert_eq!(weights.num_weights(), network.connections().len());

        let before = network.clone();
        network.set_weights(&weights).unwrap();
        assert_eq!(network, before);
    }

    #[test]
    fn test_weights_need_two_layers() {
        let mut network = NeuralNetwork::new(3).unwrap();
        assert_eq!(network.get_weights(), Err(NetworkError::TopologyTooSmall { layers: 1 }));
        assert_eq!(
            network.set_weights(&WeightTensor::new(vec![vec![vec![]; 3]])),
            Err(NetworkError::TopologyTooSmall { layers: 1 }),
        );
    }

    #[test]
    fn test_set_weights_validates_before_writing() {
        let mut network = network(&[(2, ActivationKind::Identity), (2, ActivationKind::Sigmoid)]);
        network.initialize_weights(&mut ChaCha8Rng::seed_from_u64(11));
        let before = network.clone();

        // first neuron is fine, second has a weight too few
        let weights = WeightTensor::new(vec![
            vec![vec![], vec![]],
            vec![vec![9., 9.], vec![9.]],
        ]);
        assert_eq!(
            network.set_weights(&weights),
            Err(ShapeMismatch::Weights { layer: 1, neuron: 1, expected: 2, found: 1 }.into()),
        );
        assert_eq!(network, before);

        let weights = WeightTensor::new(vec![vec![vec![], vec![]], vec![vec![9., 9.]]]);
        assert_eq!(
            network.set_weights(&weights),
            Err(ShapeMismatch::Neurons { layer: 1, expected: 2, found: 1 }.into()),
        );

        let weights = WeightTensor::new(vec![vec![vec![9., 9.], vec![9., 9.]]]);
        assert_eq!(
            network.set_weights(&weights),
            Err(ShapeMismatch::Layers { expected: 2, found: 1 }.into()),
        );

        let weights = WeightTensor::new(vec![vec![vec![1.], vec![]], vec![vec![9., 9.], vec![9., 9.]]]);
        assert_eq!(
            network.set_weights(&weights),
            Err(ShapeMismatch::Weights { layer: 0, neuron: 0, expected: 0, found: 1 }.into()),
        );
        assert_eq!(network, before);
    }
}
