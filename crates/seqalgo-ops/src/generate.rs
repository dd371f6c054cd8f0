//! Input generators for tests and benchmarks.
//!
//! Element values come from a caller-supplied closure keyed by the element's
//! linear position, so the same closure drives both sequences and matrices.

use rand::Rng;
use seqalgo_core::{Error, Result};

/// Build a sequence of `size` elements where element `i` is `f(i)`.
pub fn generate_sequence<T, F>(size: usize, f: F) -> Vec<T>
where
    F: FnMut(usize) -> T,
{
    (0..size).map(f).collect()
}

/// Build a `rows x cols` matrix where element `(r, c)` is `f(r * cols + c)`.
pub fn generate_matrix<T, F>(rows: usize, cols: usize, mut f: F) -> Vec<Vec<T>>
where
    F: FnMut(usize) -> T,
{
    (0..rows)
        .map(|r| (0..cols).map(|c| f(r * cols + c)).collect())
        .collect()
}

/// Uniformly random integer in `(min, max]`, drawn from the thread-local RNG.
///
/// When `min == max` the result is `min + 1`.
pub fn random_between(min: usize, max: usize) -> Result<usize> {
    random_between_with(&mut rand::thread_rng(), min, max)
}

/// [`random_between`] with an explicit RNG, for reproducible inputs.
pub fn random_between_with<R: Rng + ?Sized>(rng: &mut R, min: usize, max: usize) -> Result<usize> {
    if min > max {
        return Err(Error::InvalidBounds { min, max });
    }
    if min == max {
        return Ok(min.saturating_add(1));
    }
    Ok(rng.gen_range(min + 1..=max))
}

/// `size` independent draws of [`random_between`].
pub fn random_sequence(size: usize, min: usize, max: usize) -> Result<Vec<usize>> {
    let mut rng = rand::thread_rng();
    (0..size)
        .map(|_| random_between_with(&mut rng, min, max))
        .collect()
}
