//! Traversal orders over a [`MagicalContainer`].
//!
//! A [`Traversal`] defines which sequence of the container a
//! [`ContainerIter`](crate::ContainerIter) reads and how its cursor steps through
//! that sequence. The cursor is an index into the sequence; the sequence length is
//! the terminal position shared by every order.
//!
//! # Common Implementations
//!
//! - [`Ascending`] - front-to-back over every element
//! - [`SideCross`] - lowest, highest, second lowest, second highest, ...
//! - [`Primes`] - front-to-back over the prime index
//!
//! # Examples
//!
//! ```
//! use magical_container::traversal::{SideCross, Traversal};
//!
//! let elements = [1, 2, 3, 4, 5];
//! let mut cursor = SideCross::first(&elements);
//! let mut slots = Vec::new();
//! while cursor < elements.len() {
//!     slots.push(cursor);
//!     cursor = SideCross::next(&elements, cursor);
//! }
//! assert_eq!(slots, [0, 4, 1, 3, 2]);
//! ```

use crate::{MagicalContainer, is_prime};

/// Defines the order in which an iterator visits a container.
///
/// Implementors must keep every cursor they return within `0..=sequence.len()`,
/// where `sequence.len()` is the terminal position, and must reach the terminal
/// position after finitely many steps.
pub trait Traversal {
    /// Returns the sequence of the container this order reads.
    fn sequence(container: &MagicalContainer) -> &[i32];

    /// Returns the first cursor position in `sequence`.
    fn first(sequence: &[i32]) -> usize;

    /// Returns the cursor position following `cursor`.
    ///
    /// `cursor` is never the terminal position.
    fn next(sequence: &[i32], cursor: usize) -> usize;

    /// Returns the number of elements still to be visited from `cursor`, inclusive.
    fn remaining(sequence: &[i32], cursor: usize) -> usize;
}

/// Visits every element from smallest to largest.
#[derive(Debug, Clone, Copy)]
pub struct Ascending;

impl Traversal for Ascending {
    fn sequence(container: &MagicalContainer) -> &[i32] {
        container.elements()
    }

    fn first(_sequence: &[i32]) -> usize {
        0
    }

    fn next(_sequence: &[i32], cursor: usize) -> usize {
        cursor + 1
    }

    fn remaining(sequence: &[i32], cursor: usize) -> usize {
        sequence.len().saturating_sub(cursor)
    }
}

/// Alternates between the lowest and highest unvisited elements.
///
/// With `n` elements and `m = n / 2`, the cursor steps as follows:
///
/// - `i < m`: jump to the mirrored high-side slot `n - i - 1`.
/// - `i == m`: the middle has been reported; jump to the terminal position `n`.
/// - `i > m`: jump back to the next low-side slot `n - i`.
///
/// Every slot in `0..n` is visited exactly once.
#[derive(Debug, Clone, Copy)]
pub struct SideCross;

impl Traversal for SideCross {
    fn sequence(container: &MagicalContainer) -> &[i32] {
        container.elements()
    }

    fn first(_sequence: &[i32]) -> usize {
        0
    }

    fn next(sequence: &[i32], cursor: usize) -> usize {
        let n = sequence.len();
        let mid = n / 2;
        match cursor.cmp(&mid) {
            std::cmp::Ordering::Less => n - cursor - 1,
            std::cmp::Ordering::Equal => n,
            std::cmp::Ordering::Greater => n - cursor,
        }
    }

    fn remaining(sequence: &[i32], cursor: usize) -> usize {
        let n = sequence.len();
        if cursor >= n {
            return 0;
        }
        // Low-side slot `i` is visited at step `2 * i`, its mirror at `2 * i + 1`.
        let step = if 2 * cursor < n {
            2 * cursor
        } else {
            2 * (n - 1 - cursor) + 1
        };
        n - step
    }
}

/// Visits the prime index from smallest to largest.
///
/// Entries that are not prime are skipped whenever the cursor moves, so the
/// cursor always rests on a prime entry or on the terminal position.
#[derive(Debug, Clone, Copy)]
pub struct Primes;

impl Primes {
    fn skip_non_prime(sequence: &[i32], mut cursor: usize) -> usize {
        while cursor < sequence.len() && !is_prime(sequence[cursor]) {
            cursor += 1;
        }
        cursor
    }
}

impl Traversal for Primes {
    fn sequence(container: &MagicalContainer) -> &[i32] {
        container.primes()
    }

    fn first(sequence: &[i32]) -> usize {
        Self::skip_non_prime(sequence, 0)
    }

    fn next(sequence: &[i32], cursor: usize) -> usize {
        Self::skip_non_prime(sequence, cursor + 1)
    }

    fn remaining(sequence: &[i32], cursor: usize) -> usize {
        sequence
            .get(cursor..)
            .map_or(0, |rest| rest.iter().filter(|&&v| is_prime(v)).count())
    }
}
