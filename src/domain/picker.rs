//! Uniform random selection over a slice.

use rand::Rng;
use rand::seq::SliceRandom;

/// Picks one element of `items` with probability `1 / items.len()`.
///
/// Returns `None` for an empty slice. The caller supplies the generator so
/// tests can seed it; the service passes a thread-local RNG.
pub fn pick_uniform<'a, T, R>(items: &'a [T], rng: &mut R) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    items.choose(rng)
}
