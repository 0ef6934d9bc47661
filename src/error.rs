use thiserror::Error;

/// The error returned by positional mutations when the supplied index falls
/// outside the operation's valid range.
///
/// The failing operation leaves the list untouched: bounds are checked before
/// any element is shifted or written.
///
/// # Example
/// ```rust
/// use dyn_array::{DynArray, IndexOutOfBounds};
///
/// let mut list: DynArray<i64> = DynArray::new();
/// list.push(1);
/// list.push(2);
///
/// assert_eq!(list.remove(696), Err(IndexOutOfBounds { index: 696, len: 2 }));
/// assert_eq!(list.len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("index {index} out of bounds for list of length {len}")]
pub struct IndexOutOfBounds {
    /// The index that was supplied.
    pub index: usize,
    /// The number of elements the list held at the time of the call.
    pub len: usize,
}
