use log::info;
use ordered_float::OrderedFloat;
use rand::Rng;

use crate::error::NetworkError;
use crate::evolution::crossover::mix_genes;
use crate::network::NeuralNetwork;
use crate::topology::Topology;
use crate::weights::WeightTensor;


/// Networks of identical topology evolved together, one generation at a time.
#[derive(Clone, Debug)]
pub struct Population {
    networks: Vec<NeuralNetwork>,
    generation: usize,
}


impl Population {
    pub fn new(networks: Vec<NeuralNetwork>) -> Self {
        return Self { networks, generation: 1 };
    }

    /// Builds `size` networks from `topology` with randomly initialized weights.
    pub fn from_topology<R: Rng + ?Sized>(
        topology: &Topology,
        size: usize,
        rng: &mut R,
    ) -> Result<Self, NetworkError> {
        let networks = (0..size).map(|_| -> Result<NeuralNetwork, NetworkError> {
            let mut network = topology.build()?;
            network.initialize_weights(rng);
            Ok(network)
        }).collect::<Result<Vec<_>, _>>()?;
        return Ok(Self::new(networks));
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn networks(&self) -> &[NeuralNetwork] {
        &self.networks
    }

    pub fn networks_mut(&mut self) -> &mut [NeuralNetwork] {
        &mut self.networks
    }

    pub fn get(&self, index: usize) -> Option<&NeuralNetwork> {
        self.networks.get(index)
    }

    pub fn len(&self) -> usize {
        self.networks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }

    /// Returns the index of the highest fitness score, the first one on ties.
    pub fn fittest(&self, fitness: &[f64]) -> Option<usize> {
        fitness.iter()
               .enumerate()
               .rev()
               .max_by_key(|(_, score)| OrderedFloat(**score))
               .map(|(idx, _)| idx)
    }

    /// Crosses every network with the best one.
    ///
    /// The best network's weights are the first parent, each network's own weights the second.
    /// All offspring weights are computed before any network is overwritten.
    ///
    /// # Arguments
    /// * `best` - index of the best network, `None` if none was selected
    /// * `rng` - source of the crossover draws
    ///
    /// # Returns
    /// `true` if a new generation was bred, `false` if there was no best network.
    pub fn next_generation<R: Rng + ?Sized>(
        &mut self,
        best: Option<usize>,
        rng: &mut R,
    ) -> Result<bool, NetworkError> {
        let Some(best) = best else {
            return Ok(false);
        };
        let best_weights = self.networks
            .get(best)
            .ok_or(NetworkError::NoSuchNetwork { index: best, len: self.networks.len() })?
            .get_weights()?;
        let offspring = self.networks.iter().map(|network| -> Result<WeightTensor, NetworkError> {
            Ok(mix_genes(&best_weights, &network.get_weights()?, rng)?)
        }).collect::<Result<Vec<_>, _>>()?;
        for (network, weights) in self.networks.iter_mut().zip(&offspring) {
            network.set_weights(weights)?;
        }
        self.generation += 1;
        info!("bred generation {} from network {}", self.generation, best);
        return Ok(true);
    }
}
