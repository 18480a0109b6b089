//! A sorted integer container with three traversal orders.
//!
//! This crate provides [`MagicalContainer`], which keeps its elements sorted in
//! ascending order and maintains a derived, equally sorted index of the prime
//! elements. Three iterator kinds read through the same container:
//!
//! 1. [`AscendingIterator`] - every element, smallest first.
//! 2. [`SideCrossIterator`] - alternates between the smallest and largest
//!    unvisited elements, converging on the middle.
//! 3. [`PrimeIterator`] - prime elements only, smallest first.
//!
//! All three are instances of the generic [`ContainerIter`], parameterised by a
//! [`Traversal`] order (see the [`traversal`] module). Iterators borrow their
//! container, so the container cannot be mutated or dropped while any iterator
//! over it is alive.
//!
//! # Examples
//!
//! ```
//! use magical_container::{AscendingIterator, MagicalContainer, PrimeIterator, SideCrossIterator};
//!
//! let mut container = MagicalContainer::new();
//! for value in [17, 2, 25, 9, 3] {
//!     container.add(value);
//! }
//!
//! let ascending: Vec<_> = AscendingIterator::new(&container).collect();
//! assert_eq!(ascending, [2, 3, 9, 17, 25]);
//!
//! let side_cross: Vec<_> = SideCrossIterator::new(&container).collect();
//! assert_eq!(side_cross, [2, 25, 3, 17, 9]);
//!
//! let primes: Vec<_> = PrimeIterator::new(&container).collect();
//! assert_eq!(primes, [2, 3, 17]);
//! ```
//!
//! The cursor-style API mirrors a begin/end iterator pair:
//!
//! ```
//! use magical_container::{MagicalContainer, SideCrossIterator};
//!
//! let container: MagicalContainer = [1, 2, 3, 4].into_iter().collect();
//! let mut it = SideCrossIterator::new(&container);
//! let end = it.end();
//!
//! let mut seen = Vec::new();
//! while it != end {
//!     seen.push(it.value()?);
//!     it.advance()?;
//! }
//! assert_eq!(seen, [1, 4, 2, 3]);
//! assert!(it.advance().is_err());
//! # Ok::<(), magical_container::ContainerError>(())
//! ```

pub mod container;
pub mod error;
pub mod iter;
pub mod prime;
mod sorted;
pub mod traversal;

// Re-export commonly used types
pub use self::{
    container::MagicalContainer,
    error::ContainerError,
    iter::{AscendingIterator, ContainerIter, PrimeIterator, SideCrossIterator},
    prime::is_prime,
    traversal::Traversal,
};
