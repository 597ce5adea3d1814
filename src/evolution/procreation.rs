use rand::Rng;

use crate::error::NetworkError;
use crate::evolution::crossover::mix_genes;
use crate::network::NeuralNetwork;


/// Replaces the weights of `other` with a crossover of `best` and its own weights.
///
/// `best` is the first parent, `other`'s current weights the second.
/// On failure `other` is left unchanged.
pub fn procreate<R: Rng + ?Sized>(
    best: &NeuralNetwork,
    other: &mut NeuralNetwork,
    rng: &mut R,
) -> Result<(), NetworkError> {
    let mixed = mix_genes(&best.get_weights()?, &other.get_weights()?, rng)?;
    other.set_weights(&mixed)
}
