//! Genetic operators for evolving network weights.

pub mod crossover;
pub mod init;
pub mod procreation;

pub use crossover::{mix_genes, mix_two_genes};
pub use procreation::procreate;
