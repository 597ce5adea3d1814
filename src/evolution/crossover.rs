//! Bit-level crossover of weights.
//!
//! Genes are spliced on their IEEE-754 bit patterns, not on their numeric values. The result is
//! not an interpolation of its parents and may be NaN, infinite or subnormal. Such values are
//! passed on unchanged.

use log::trace;
use rand::Rng;

use crate::error::ShapeMismatch;
use crate::weights::WeightTensor;


/// Returns a mask with the `cut` most significant bits set and all other bits clear.
///
/// A `cut` of 0 yields an empty mask, anything from 64 upwards a full one.
pub fn cut_mask(cut: u32) -> u64 {
    u64::MAX.checked_shl(64u32.saturating_sub(cut)).unwrap_or(0)
}


/// Takes the `cut` high bits from `bits_a` and the remaining low bits from `bits_b`.
pub fn splice_bits(bits_a: u64, bits_b: u64, cut: u32) -> u64 {
    let mask = cut_mask(cut);
    (bits_a & mask) | (bits_b & !mask)
}


/// Mixes two genes by cutting their bit patterns at a random position.
///
/// A fair coin decides whether the parents swap roles. Then a cut position is drawn uniformly
/// from `1..=63` and the high bits of the first parent are joined with the low bits of the second.
///
/// # Arguments
/// * `gene_a` - first parent weight
/// * `gene_b` - second parent weight
/// * `rng` - source of the swap and cut draws
///
/// # Returns
/// The spliced gene.
pub fn mix_two_genes<R: Rng + ?Sized>(gene_a: f64, gene_b: f64, rng: &mut R) -> f64 {
    let (mut bits_a, mut bits_b) = (gene_a.to_bits(), gene_b.to_bits());
    if rng.gen_range(0..2) == 1 {
        (bits_a, bits_b) = (bits_b, bits_a);
    }
    let cut = rng.gen_range(1..64);
    f64::from_bits(splice_bits(bits_a, bits_b, cut))
}


/// Mixes all genes of two weight tensors of identical shape.
///
/// The shapes are compared before anything is mixed. Every weight gets its own swap and cut draw.
///
/// # Returns
/// A new tensor with the shape of both parents or the most specific [`ShapeMismatch`] found,
/// with `weights_a` providing the expected counts.
pub fn mix_genes<R: Rng + ?Sized>(
    weights_a: &WeightTensor,
    weights_b: &WeightTensor,
    rng: &mut R,
) -> Result<WeightTensor, ShapeMismatch> {
    weights_a.check_shape(weights_b)?;
    let mixed = weights_a.layers().iter().zip(weights_b.layers()).map(|(neurons_a, neurons_b)| {
        neurons_a.iter().zip(neurons_b).map(|(genes_a, genes_b)| {
            genes_a.iter().zip(genes_b).map(|(gene_a, gene_b)| mix_two_genes(*gene_a, *gene_b, rng)).collect()
        }).collect()
    }).collect();
    let mixed = WeightTensor::new(mixed);
    trace!("mixed {} genes", mixed.num_weights());
    Ok(mixed)
}
