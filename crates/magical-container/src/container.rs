//! The sorted integer container.

use std::fmt::{self, Display};

use crate::{
    AscendingIterator, ContainerError, PrimeIterator, SideCrossIterator, is_prime,
    sorted::SortedVec,
};

/// A sorted multiset of integers with a derived index of its prime elements.
///
/// Elements are kept in ascending order; duplicates are allowed and each copy is
/// counted separately. Every prime element is also stored in a separate ascending
/// prime index, which is updated synchronously by [`add`](Self::add) and
/// [`remove`](Self::remove).
///
/// Cloning produces a fully independent copy of both sequences.
///
/// # Examples
///
/// ```
/// use magical_container::MagicalContainer;
///
/// let mut container = MagicalContainer::new();
/// container.add(10);
/// container.add(3);
/// container.add(7);
/// container.add(3);
///
/// assert_eq!(container.size(), 4);
/// assert_eq!(container.elements(), [3, 3, 7, 10]);
/// assert_eq!(container.primes(), [3, 3, 7]);
///
/// container.remove(3)?;
/// assert_eq!(container.elements(), [3, 7, 10]);
/// assert_eq!(container.primes(), [3, 7]);
/// # Ok::<(), magical_container::ContainerError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MagicalContainer {
    elements: SortedVec,
    primes: SortedVec,
}

impl MagicalContainer {
    /// Creates an empty container.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: SortedVec::new(),
            primes: SortedVec::new(),
        }
    }

    /// Adds `value`, placing it after every existing element that is not greater.
    ///
    /// Prime values are also added to the prime index.
    pub fn add(&mut self, value: i32) {
        self.elements.insert(value);
        let prime = is_prime(value);
        if prime {
            self.primes.insert(value);
        }
        log::trace!("added {value} (prime: {prime}), size is now {}", self.size());
    }

    /// Removes one occurrence of `value`.
    ///
    /// If `value` occurs several times, only one copy is removed.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::NotFound`] if `value` is not in the container.
    /// The container is left unchanged in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use magical_container::{ContainerError, MagicalContainer};
    ///
    /// let mut container = MagicalContainer::new();
    /// container.add(5);
    ///
    /// assert_eq!(container.remove(5), Ok(()));
    /// assert_eq!(container.remove(5), Err(ContainerError::NotFound { value: 5 }));
    /// ```
    pub fn remove(&mut self, value: i32) -> Result<(), ContainerError> {
        if !self.elements.remove(value) {
            log::debug!("cannot remove {value}: not in container");
            return Err(ContainerError::NotFound { value });
        }
        if is_prime(value) {
            let removed = self.primes.remove(value);
            debug_assert!(removed, "prime index is missing {value}");
        }
        log::trace!("removed {value}, size is now {}", self.size());
        Ok(())
    }

    /// Returns the number of elements, counting duplicates.
    #[must_use]
    pub fn size(&self) -> usize {
        self.elements.len()
    }

    /// Returns the number of elements, counting duplicates.
    ///
    /// Same as [`size`](Self::size).
    #[must_use]
    pub fn len(&self) -> usize {
        self.size()
    }

    /// Returns `true` if the container holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns `true` if at least one copy of `value` is in the container.
    #[must_use]
    pub fn contains(&self, value: i32) -> bool {
        self.count(value) > 0
    }

    /// Returns the number of copies of `value` in the container.
    #[must_use]
    pub fn count(&self, value: i32) -> usize {
        self.elements.count(value)
    }

    /// Returns all elements in ascending order.
    #[must_use]
    pub fn elements(&self) -> &[i32] {
        &self.elements
    }

    /// Returns the prime elements in ascending order.
    #[must_use]
    pub fn primes(&self) -> &[i32] {
        &self.primes
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.elements.clear();
        self.primes.clear();
        log::trace!("cleared container");
    }

    /// Returns an iterator over all elements in ascending order.
    #[must_use]
    pub fn ascending(&self) -> AscendingIterator<'_> {
        AscendingIterator::new(self)
    }

    /// Returns an iterator alternating between the smallest and largest remaining elements.
    #[must_use]
    pub fn side_cross(&self) -> SideCrossIterator<'_> {
        SideCrossIterator::new(self)
    }

    /// Returns an iterator over the prime elements in ascending order.
    #[must_use]
    pub fn primes_iter(&self) -> PrimeIterator<'_> {
        PrimeIterator::new(self)
    }
}

impl FromIterator<i32> for MagicalContainer {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut container = Self::new();
        container.extend(iter);
        container
    }
}

impl Extend<i32> for MagicalContainer {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<'a> IntoIterator for &'a MagicalContainer {
    type Item = i32;
    type IntoIter = AscendingIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.ascending()
    }
}

impl Display for MagicalContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.elements.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn expected_primes(elements: &[i32]) -> Vec<i32> {
        elements.iter().copied().filter(|&v| is_prime(v)).collect()
    }

    #[test]
    fn test_new_is_empty() {
        let container = MagicalContainer::new();
        assert_eq!(container.size(), 0);
        assert!(container.is_empty());
        assert!(container.elements().is_empty());
        assert!(container.primes().is_empty());
        assert_eq!(container, MagicalContainer::default());
    }

    #[test]
    fn test_add_keeps_both_sequences_sorted() {
        let mut container = MagicalContainer::new();
        for value in [7, 1, 6, 2, 5, 3, 4] {
            container.add(value);
        }
        assert_eq!(container.elements(), [1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(container.primes(), [2, 3, 5, 7]);
        assert_eq!(container.size(), 7);
    }

    #[test]
    fn test_add_duplicates_and_negatives() {
        let container: MagicalContainer = [3, -3, 3, 0, -7, 1].into_iter().collect();
        assert_eq!(container.elements(), [-7, -3, 0, 1, 3, 3]);
        assert_eq!(container.primes(), [3, 3]);
        assert_eq!(container.count(3), 2);
        assert!(container.contains(-7));
        assert!(!container.contains(2));
    }

    #[test]
    fn test_remove_one_occurrence() {
        let mut container: MagicalContainer = [5, 5, 8].into_iter().collect();
        container.remove(5).unwrap();
        assert_eq!(container.elements(), [5, 8]);
        assert_eq!(container.primes(), [5]);
        container.remove(5).unwrap();
        assert_eq!(container.elements(), [8]);
        assert!(container.primes().is_empty());
    }

    #[test]
    fn test_remove_missing() {
        let mut container = MagicalContainer::new();
        assert_eq!(
            container.remove(1),
            Err(ContainerError::NotFound { value: 1 })
        );

        container.add(2);
        assert_eq!(
            container.remove(3),
            Err(ContainerError::NotFound { value: 3 })
        );
        assert_eq!(container.size(), 1);
        assert_eq!(container.primes(), [2]);
    }

    #[test]
    fn test_prime_index_mirrors_elements_after_mixed_mutations() {
        let mut container = MagicalContainer::new();
        for value in [13, 4, 13, -2, 2, 9, 2, 1] {
            container.add(value);
            let expected = expected_primes(container.elements());
            assert_eq!(container.primes(), expected.as_slice());
        }
        for value in [13, 9, 2, 13] {
            container.remove(value).unwrap();
            assert!(container.elements().is_sorted());
            let expected = expected_primes(container.elements());
            assert_eq!(container.primes(), expected.as_slice());
        }
        assert_eq!(container.elements(), [-2, 1, 2, 4]);
        assert_eq!(container.primes(), [2]);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original: MagicalContainer = [2, 4, 11].into_iter().collect();
        let copy = original.clone();
        original.remove(11).unwrap();
        original.add(13);

        assert_eq!(copy.elements(), [2, 4, 11]);
        assert_eq!(copy.primes(), [2, 11]);
        assert_eq!(original.elements(), [2, 4, 13]);
        assert_eq!(original.primes(), [2, 13]);
    }

    #[test]
    fn test_assign_replaces_contents() {
        let source: MagicalContainer = [1, 2, 3].into_iter().collect();
        let mut target: MagicalContainer = [10, 20].into_iter().collect();
        target.clone_from(&source);
        assert_eq!(target, source);
        assert_eq!(target.primes(), [2, 3]);
    }

    #[test]
    fn test_clear() {
        let mut container: MagicalContainer = [2, 3, 4].into_iter().collect();
        container.clear();
        assert!(container.is_empty());
        assert!(container.primes().is_empty());
    }

    #[test]
    fn test_display() {
        let container: MagicalContainer = [3, 1, 2].into_iter().collect();
        assert_eq!(container.to_string(), "[1, 2, 3]");
        assert_eq!(MagicalContainer::new().to_string(), "[]");
    }

    #[test]
    fn test_into_iterator_is_ascending() {
        let container: MagicalContainer = [9, 8, 7].into_iter().collect();
        let mut seen = Vec::new();
        for value in &container {
            seen.push(value);
        }
        assert_eq!(seen, [7, 8, 9]);
    }

    proptest! {
        #[test]
        fn prop_add_maintains_invariants(values in prop::collection::vec(-100i32..100, 0..48)) {
            let mut container = MagicalContainer::new();
            for (i, &value) in values.iter().enumerate() {
                container.add(value);
                prop_assert_eq!(container.size(), i + 1);
                prop_assert!(container.elements().is_sorted());
                let expected = expected_primes(container.elements());
                prop_assert_eq!(container.primes(), expected.as_slice());
            }
        }

        #[test]
        fn prop_remove_maintains_invariants(
            values in prop::collection::vec(-20i32..20, 0..48),
            removals in prop::collection::vec(-20i32..20, 0..48),
        ) {
            let mut container: MagicalContainer = values.into_iter().collect();
            for value in removals {
                let before = container.size();
                let present = container.contains(value);
                let result = container.remove(value);
                if present {
                    prop_assert_eq!(result, Ok(()));
                    prop_assert_eq!(container.size(), before - 1);
                } else {
                    prop_assert_eq!(result, Err(ContainerError::NotFound { value }));
                    prop_assert_eq!(container.size(), before);
                }
                prop_assert!(container.elements().is_sorted());
                let expected = expected_primes(container.elements());
                prop_assert_eq!(container.primes(), expected.as_slice());
            }
        }

        #[test]
        fn prop_remove_then_add_round_trips(
            values in prop::collection::hash_set(-1_000i32..1_000, 1..32),
            pick in any::<prop::sample::Index>(),
        ) {
            let values: Vec<_> = values.into_iter().collect();
            let original: MagicalContainer = values.iter().copied().collect();
            let value = values[pick.index(values.len())];

            let mut container = original.clone();
            container.remove(value).unwrap();
            prop_assert!(!container.contains(value));
            container.add(value);
            prop_assert_eq!(container, original);
        }
    }
}
