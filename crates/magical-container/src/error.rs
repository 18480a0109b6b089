//! Error type shared by the container and its iterators.

/// Errors reported by [`MagicalContainer`](crate::MagicalContainer) and its iterators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ContainerError {
    /// The value passed to [`remove`](crate::MagicalContainer::remove) is not in the container.
    #[display("element {value} does not exist in the container")]
    NotFound {
        /// The value that was looked up.
        value: i32,
    },
    /// The iterator is already at its terminal position.
    #[display("cannot move iterator beyond the end of the container")]
    IteratorOutOfRange,
    /// The two iterators are bound to different containers.
    #[display("iterators are pointing to different containers")]
    CrossContainerIterator,
}
