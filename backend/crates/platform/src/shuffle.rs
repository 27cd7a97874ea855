//! Uniform in-place shuffling
//!
//! Fisher-Yates over a caller-owned slice. Callers holding shared data must
//! copy it first; see [`shuffled`].

use rand::Rng;

/// Shuffle `items` in place.
///
/// For every index `i` from the first to the second-to-last, the occupant
/// of `i` is drawn uniformly from the not-yet-placed suffix `[i, n)`. The
/// draw includes `i` itself, so an element may stay where it is.
///
/// Slices of length 0 or 1 are left untouched.
pub fn shuffle<T, R>(items: &mut [T], rng: &mut R)
where
    R: Rng + ?Sized,
{
    let len = items.len();
    for i in 0..len.saturating_sub(1) {
        let j = rng.random_range(i..len);
        items.swap(i, j);
    }
}

/// Clone `items` into a fresh vector and shuffle the copy.
pub fn shuffled<T, R>(items: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut copy = items.to_vec();
    shuffle(&mut copy, rng);
    copy
}
