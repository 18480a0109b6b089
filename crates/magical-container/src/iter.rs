//! Cursor-style iterators over a [`MagicalContainer`].
//!
//! [`ContainerIter`] is a cursor into one of the container's sequences, stepped
//! according to a [`Traversal`] order. It supports both the cursor API
//! (`begin`/`end`/`value`/`advance` and comparisons) and the standard
//! [`Iterator`] trait.
//!
//! Iterators borrow their container. Two iterators are only comparable when
//! they are bound to the same container instance:
//!
//! - [`try_eq`](ContainerIter::try_eq), [`try_cmp`](ContainerIter::try_cmp), and
//!   [`assign_from`](ContainerIter::assign_from) fail with
//!   [`ContainerError::CrossContainerIterator`].
//! - `==` is `false`, `!=` is `true`, and `<`/`>` are both `false`.
//!
//! # Examples
//!
//! ```
//! use magical_container::{MagicalContainer, PrimeIterator};
//!
//! let container: MagicalContainer = (1..=7).collect();
//! let it = PrimeIterator::new(&container);
//! assert_eq!(it.value()?, 2);
//! assert_eq!(it.len(), 4);
//! assert_eq!(it.collect::<Vec<_>>(), [2, 3, 5, 7]);
//! # Ok::<(), magical_container::ContainerError>(())
//! ```

use std::{any, cmp::Ordering, fmt, iter::FusedIterator, marker::PhantomData, ptr};

use crate::{
    ContainerError, MagicalContainer,
    traversal::{Ascending, Primes, SideCross, Traversal},
};

/// Iterator over every element in ascending order.
pub type AscendingIterator<'a> = ContainerIter<'a, Ascending>;

/// Iterator alternating between the smallest and largest unvisited elements.
///
/// ```
/// use magical_container::{MagicalContainer, SideCrossIterator};
///
/// let container: MagicalContainer = [1, 2, 3, 4, 5].into_iter().collect();
/// let order: Vec<_> = SideCrossIterator::new(&container).collect();
/// assert_eq!(order, [1, 5, 2, 4, 3]);
/// ```
pub type SideCrossIterator<'a> = ContainerIter<'a, SideCross>;

/// Iterator over the prime elements in ascending order.
pub type PrimeIterator<'a> = ContainerIter<'a, Primes>;

/// A cursor into a [`MagicalContainer`] that moves in the order defined by `T`.
///
/// The cursor rests either on an element or on the terminal position, which is
/// the length of the sequence being traversed.
pub struct ContainerIter<'a, T> {
    container: &'a MagicalContainer,
    cursor: usize,
    _order: PhantomData<fn() -> T>,
}

impl<T> fmt::Debug for ContainerIter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContainerIter")
            .field("order", &any::type_name::<T>())
            .field("container", &ptr::from_ref(self.container))
            .field("cursor", &self.cursor)
            .finish()
    }
}

impl<T> Clone for ContainerIter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            container: self.container,
            cursor: self.cursor,
            _order: PhantomData,
        }
    }
}

impl<'a, T: Traversal> ContainerIter<'a, T> {
    /// Creates an iterator positioned at the first element of the traversal.
    #[must_use]
    pub fn new(container: &'a MagicalContainer) -> Self {
        Self {
            container,
            cursor: T::first(T::sequence(container)),
            _order: PhantomData,
        }
    }

    fn with_cursor(container: &'a MagicalContainer, cursor: usize) -> Self {
        Self {
            container,
            cursor,
            _order: PhantomData,
        }
    }

    fn sequence(&self) -> &'a [i32] {
        T::sequence(self.container)
    }

    /// Returns a new iterator at the first element of the same container.
    ///
    /// This always rewinds, regardless of where `self` currently is.
    #[must_use]
    pub fn begin(&self) -> Self {
        Self::new(self.container)
    }

    /// Returns a new iterator at the terminal position of the same container.
    #[must_use]
    pub fn end(&self) -> Self {
        Self::with_cursor(self.container, self.sequence().len())
    }

    /// Returns the container this iterator is bound to.
    #[must_use]
    pub fn container(&self) -> &'a MagicalContainer {
        self.container
    }

    /// Returns the raw cursor index into the traversed sequence.
    ///
    /// For side-cross iterators this is a slot index, not the number of steps taken.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns `true` if the iterator is at the terminal position.
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.cursor >= self.sequence().len()
    }

    /// Returns the element under the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::IteratorOutOfRange`] if the iterator is at the
    /// terminal position.
    pub fn value(&self) -> Result<i32, ContainerError> {
        self.sequence()
            .get(self.cursor)
            .copied()
            .ok_or(ContainerError::IteratorOutOfRange)
    }

    /// Moves the cursor to the next element of the traversal.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::IteratorOutOfRange`] if the iterator is already
    /// at the terminal position. The iterator is left unchanged.
    pub fn advance(&mut self) -> Result<&mut Self, ContainerError> {
        let sequence = self.sequence();
        if self.cursor >= sequence.len() {
            return Err(ContainerError::IteratorOutOfRange);
        }
        self.cursor = T::next(sequence, self.cursor);
        Ok(self)
    }

    /// Returns `true` if both iterators are bound to the same container instance.
    #[must_use]
    pub fn is_same_container(&self, other: &Self) -> bool {
        ptr::eq(self.container, other.container)
    }

    fn check_same_container(&self, other: &Self) -> Result<(), ContainerError> {
        if self.is_same_container(other) {
            Ok(())
        } else {
            Err(ContainerError::CrossContainerIterator)
        }
    }

    /// Compares the cursor positions of two iterators for equality.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::CrossContainerIterator`] if the iterators are
    /// bound to different containers.
    pub fn try_eq(&self, other: &Self) -> Result<bool, ContainerError> {
        self.check_same_container(other)?;
        Ok(self.cursor == other.cursor)
    }

    /// Orders two iterators by their raw cursor positions.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::CrossContainerIterator`] if the iterators are
    /// bound to different containers.
    pub fn try_cmp(&self, other: &Self) -> Result<Ordering, ContainerError> {
        self.check_same_container(other)?;
        Ok(self.cursor.cmp(&other.cursor))
    }

    /// Moves this iterator to the position of `other`.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::CrossContainerIterator`] if the iterators are
    /// bound to different containers. The iterator is left unchanged.
    pub fn assign_from(&mut self, other: &Self) -> Result<(), ContainerError> {
        self.check_same_container(other)?;
        self.cursor = other.cursor;
        Ok(())
    }
}

impl<T: Traversal> PartialEq for ContainerIter<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.try_eq(other).unwrap_or(false)
    }
}

impl<T: Traversal> PartialOrd for ContainerIter<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.try_cmp(other).ok()
    }
}

impl<T: Traversal> Iterator for ContainerIter<'_, T> {
    type Item = i32;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.value().ok()?;
        self.cursor = T::next(self.sequence(), self.cursor);
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = T::remaining(self.sequence(), self.cursor);
        (remaining, Some(remaining))
    }
}

impl<T: Traversal> FusedIterator for ContainerIter<'_, T> {}
impl<T: Traversal> ExactSizeIterator for ContainerIter<'_, T> {}
