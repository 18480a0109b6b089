//! Ascending integer sequence backing the element store and the prime index.

use std::ops::Deref;

/// An ascending sequence of integers that allows duplicates.
///
/// Backs both the full element store and the prime index of
/// [`MagicalContainer`](crate::MagicalContainer).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct SortedVec {
    data: Vec<i32>,
}

impl SortedVec {
    #[must_use]
    pub(crate) const fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Inserts `value` before the first element strictly greater than it.
    ///
    /// Equal values therefore keep their insertion order.
    pub(crate) fn insert(&mut self, value: i32) {
        let index = self.data.partition_point(|&x| x <= value);
        self.data.insert(index, value);
    }

    /// Removes the first occurrence of `value`, returning whether one was found.
    pub(crate) fn remove(&mut self, value: i32) -> bool {
        let index = self.data.partition_point(|&x| x < value);
        if self.data.get(index) == Some(&value) {
            self.data.remove(index);
            true
        } else {
            false
        }
    }

    #[must_use]
    pub(crate) fn count(&self, value: i32) -> usize {
        let lower = self.data.partition_point(|&x| x < value);
        let upper = self.data.partition_point(|&x| x <= value);
        upper - lower
    }

    pub(crate) fn clear(&mut self) {
        self.data.clear();
    }
}

impl Deref for SortedVec {
    type Target = [i32];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}
