use crate::activation::ActivationKind;
use crate::error::NetworkError;
use crate::neuron::Neuron;


/// Ordered group of neurons sharing one activation function.
#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
    pub neurons: Vec<Neuron>,
    pub activation: ActivationKind,
}

impl Layer {
    /// Creates `width` unconnected neurons.
    ///
    /// # Returns
    /// The new layer or [`NetworkError::InvalidTopology`] if `width` is zero.
    pub fn new(width: usize, activation: ActivationKind) -> Result<Self, NetworkError> {
        if width < 1 {
            return Err(NetworkError::InvalidTopology { width });
        }
        let neurons = (0..width).map(|_| Neuron::new(activation)).collect();
        return Ok(Self { neurons, activation });
    }

    pub fn size(&self) -> usize {
        self.neurons.len()
    }

    pub fn outputs(&self) -> Vec<f64> {
        self.neurons.iter().map(|neuron| neuron.output).collect()
    }
}
