//! Random array generation for the visualizer

use rand::Rng;

/// Smallest value a bar can hold
pub const MIN_VALUE: u32 = 5;
/// Largest value a bar can hold
pub const MAX_VALUE: u32 = 500;

/// Fewest bars the size control allows
pub const MIN_SIZE: usize = 5;
/// Most bars the size control allows
pub const MAX_SIZE: usize = 244;

/// Clamp a requested array length into the supported range
pub fn clamp_size(size: usize) -> usize {
    size.clamp(MIN_SIZE, MAX_SIZE)
}

/// Generate `len` independent, uniformly distributed values in
/// `[MIN_VALUE, MAX_VALUE]`.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<u32> {
    (0..len)
        .map(|_| rng.random_range(MIN_VALUE..=MAX_VALUE))
        .collect()
}
