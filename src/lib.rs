//! # dyn_array
//!
//! `dyn_array` implements a resizable, array-backed list with an explicit,
//! observable growth policy and an in-place quicksort.
//!
//! ## Features
//! - Ordered sequence with index based element access, positional insertion
//!   and deletion, and linear membership lookups.
//! - A single contiguous backing store with a first-class capacity contract:
//!   the store grows to `capacity * 1.5 + 1` slots whenever the fill count
//!   reaches 75% of capacity, giving amortized O(1) appends.
//! - In-place Hoare-partition quicksort, by natural ordering or by a
//!   caller-supplied comparator.
//!
//! ## Use Cases
//! `dyn_array` is ideal for scenarios where:
//! - You need an ordered collection with random access capabilities.
//! - The reallocation schedule matters and must not be left to the standard
//!   library's unspecified `Vec` growth strategy.
//!
//! ## Note
//! The list is single-threaded and unsynchronized by design: callers
//! coordinate access externally if they share it across threads.
//!
//! ## Example
//! ```rust
//! use dyn_array::DynArray;
//!
//! let mut list: DynArray<i64> = DynArray::new();
//! list.push(2);
//! list.push(0);
//! list.insert(1, 1).unwrap();
//!
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.get(1), Some(&1));
//!
//! list.sort();
//! assert_eq!(list, [0, 1, 2]);
//!
//! assert_eq!(list.remove(1), Ok(1));
//! assert_eq!(list, [0, 2]);
//! ```

mod error;

pub use error::IndexOutOfBounds;

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::mem::{ManuallyDrop, MaybeUninit};
use std::{mem, ptr, slice};

const DEFAULT_CAPACITY: usize = 8;

/// A resizable, array-backed list with an explicit growth policy.
///
/// # Features
/// - **Contiguous Storage**: all elements live in one backing store, in
///   positional order, with no per-element allocation.
/// - **Observable Growth**: the store is reallocated to `capacity * 1.5 + 1`
///   slots whenever the fill count reaches 75% of capacity, never earlier and
///   never later.
/// - **In-place Sorting**: quicksort over the live region, by natural
///   ordering ([`sort`](DynArray::sort)) or by a caller-supplied comparator
///   ([`sort_by`](DynArray::sort_by)).
///
/// # Type Parameters
/// - `T`: The type of elements stored in the list.
///
/// # Example
/// ```rust
/// use dyn_array::DynArray;
///
/// let mut list: DynArray<i64> = DynArray::new();
/// list.push(3);
/// list.push(1);
/// list.insert(1, 2).unwrap();
///
/// assert!(!list.is_empty());
/// assert_eq!(list.len(), 3);
///
/// list.sort();
/// assert_eq!(list, [1, 2, 3]);
/// ```
pub struct DynArray<T> {
    /// Slots `[0, len)` are initialized and hold the elements in positional
    /// order; slots `[len, capacity)` are uninitialized and must not be read.
    store: Box<[MaybeUninit<T>]>,
    len: usize,
    /// Always equal to `store.len()`. Growth decisions read this field.
    capacity: usize,
}

impl<T, const M: usize> From<[T; M]> for DynArray<T> {
    fn from(values: [T; M]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> FromIterator<T> for DynArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut this = Self::new();
        this.extend(iter);
        this
    }
}

impl<T> Extend<T> for DynArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|value| self.push(value));
    }
}

impl<'a, T> Extend<&'a T> for DynArray<T>
where
    T: Clone,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DynArray<T> {
    /// Creates a new, empty `DynArray` with the default capacity of 8 slots.
    ///
    /// # Example
    /// ```rust
    /// use dyn_array::DynArray;
    ///
    /// let list: DynArray<i64> = DynArray::new();
    ///
    /// assert!(list.is_empty());
    /// assert_eq!(list.capacity(), 8);
    /// ```
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a new, empty `DynArray` with exactly `capacity` slots
    /// allocated up front.
    ///
    /// A capacity of zero allocates nothing; the first
    /// [`push`](DynArray::push) grows the store to a single slot.
    ///
    /// # Example
    /// ```rust
    /// use dyn_array::DynArray;
    ///
    /// let list: DynArray<i64> = DynArray::with_capacity(32);
    ///
    /// assert!(list.is_empty());
    /// assert_eq!(list.capacity(), 32);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            store: Box::new_uninit_slice(capacity),
            len: 0,
            capacity,
        }
    }

    /// Appends an element to the end of the `DynArray`.
    ///
    /// Runs the growth check first, so the append itself always has room:
    /// amortized O(1).
    ///
    /// # Example
    /// ```rust
    /// use dyn_array::DynArray;
    ///
    /// let mut list: DynArray<i64> = DynArray::new();
    /// list.push(10);
    /// list.push(20);
    ///
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.get(0), Some(&10));
    /// assert_eq!(list.get(1), Some(&20));
    /// ```
    pub fn push(&mut self, value: T) {
        self.grow_if_required();
        self.store[self.len].write(value);
        self.len += 1;
    }

    /// Inserts an element at the specified index, shifting the elements at
    /// `[index, len)` one slot to the right.
    ///
    /// Inserting at `index == len` is equivalent to [`push`](DynArray::push).
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index > len`, leaving the list
    /// unmodified.
    ///
    /// # Examples
    /// ```
    /// use dyn_array::DynArray;
    ///
    /// let mut list: DynArray<i64> = DynArray::new();
    /// list.push(10);
    /// list.push(30);
    /// list.insert(1, 20).unwrap();
    ///
    /// assert_eq!(list.get(0), Some(&10));
    /// assert_eq!(list.get(1), Some(&20));
    /// assert_eq!(list.get(2), Some(&30));
    ///
    /// assert!(list.insert(4, 40).is_err());
    /// assert_eq!(list.len(), 3);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        if index > self.len {
            return Err(IndexOutOfBounds {
                index,
                len: self.len,
            });
        }

        self.grow_if_required();

        // Overlapping move of [index, len) to [index + 1, len + 1).
        unsafe {
            let base = self.store.as_mut_ptr();
            ptr::copy(base.add(index), base.add(index + 1), self.len - index);
        }

        self.store[index].write(value);
        self.len += 1;
        Ok(())
    }

    /// Returns a reference to the element at the specified index, if any.
    ///
    /// # Examples
    /// ```
    /// use dyn_array::DynArray;
    ///
    /// let mut list: DynArray<i64> = DynArray::new();
    /// list.push(10);
    /// list.push(20);
    ///
    /// assert_eq!(list.get(0), Some(&10));
    /// assert_eq!(list.get(1), Some(&20));
    /// assert_eq!(list.get(2), None); // Out of bounds
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Returns a mutable reference to the element at the specified index,
    /// if any.
    ///
    /// # Examples
    /// ```
    /// use dyn_array::DynArray;
    ///
    /// let mut list: DynArray<i64> = DynArray::new();
    /// list.push(10);
    ///
    /// *list.get_mut(0).unwrap() = 15;
    ///
    /// assert_eq!(list.get(0), Some(&15));
    /// assert_eq!(list.get_mut(1), None); // Out of bounds
    /// ```
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Removes and returns the element at the specified index, shifting the
    /// elements at `[index + 1, len)` one slot to the left.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`, leaving the list
    /// unmodified.
    ///
    /// # Examples
    /// ```
    /// use dyn_array::DynArray;
    ///
    /// let mut list: DynArray<i64> = DynArray::new();
    /// list.push(10);
    /// list.push(20);
    /// list.push(30);
    ///
    /// assert_eq!(list.remove(1), Ok(20));
    /// assert_eq!(list, [10, 30]);
    ///
    /// assert!(list.remove(2).is_err());
    /// assert_eq!(list.len(), 2);
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        if index >= self.len {
            return Err(IndexOutOfBounds {
                index,
                len: self.len,
            });
        }

        // The slot is initialized, and the overlapping move below makes the
        // stale duplicate left behind by the read unreachable.
        let value = unsafe { self.store[index].assume_init_read() };
        unsafe {
            let base = self.store.as_mut_ptr();
            ptr::copy(base.add(index + 1), base.add(index), self.len - index - 1);
        }

        self.len -= 1;
        Ok(value)
    }

    /// Removes all elements from the `DynArray`, dropping them in place.
    ///
    /// The capacity is unchanged: the store is not shrunk.
    ///
    /// # Example
    /// ```rust
    /// use dyn_array::DynArray;
    ///
    /// let mut list: DynArray<i32> = DynArray::new();
    /// list.push(1);
    /// list.push(2);
    /// list.push(3);
    ///
    /// list.clear();
    ///
    /// assert!(list.is_empty());
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.capacity(), 8);
    /// ```
    pub fn clear(&mut self) {
        let live: *mut [T] = self.as_mut_slice();

        // Zero the fill count before dropping so a panicking `Drop` impl
        // cannot cause the same slots to be dropped again.
        self.len = 0;
        unsafe { ptr::drop_in_place(live) };
    }

    /// Overwrites the slot at the specified index, returning the displaced
    /// element. The length does not change.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`, leaving the list
    /// unmodified. Writing at `len` or beyond is rejected even though the
    /// store may physically have room there.
    ///
    /// # Examples
    /// ```
    /// use dyn_array::DynArray;
    ///
    /// let mut list: DynArray<i64> = DynArray::new();
    /// list.push(10);
    /// list.push(20);
    ///
    /// assert_eq!(list.replace(1, 25), Ok(20));
    /// assert_eq!(list, [10, 25]);
    /// assert_eq!(list.len(), 2);
    ///
    /// assert!(list.replace(2, 30).is_err());
    /// ```
    pub fn replace(&mut self, index: usize, value: T) -> Result<T, IndexOutOfBounds> {
        let len = self.len;
        match self.as_mut_slice().get_mut(index) {
            Some(slot) => Ok(mem::replace(slot, value)),
            None => Err(IndexOutOfBounds { index, len }),
        }
    }

    /// Returns the number of elements currently stored in the `DynArray`.
    ///
    /// # Example
    /// ```rust
    /// use dyn_array::DynArray;
    ///
    /// let mut list: DynArray<i64> = DynArray::new();
    /// list.push(1);
    /// list.push(2);
    ///
    /// assert_eq!(list.len(), 2);
    /// ```
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Checks if the `DynArray` is empty.
    ///
    /// # Example
    /// ```rust
    /// use dyn_array::DynArray;
    ///
    /// let mut list: DynArray<i64> = DynArray::new();
    /// assert!(list.is_empty());
    ///
    /// list.push(1);
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots currently allocated in the backing store.
    ///
    /// # Example
    /// ```rust
    /// use dyn_array::DynArray;
    ///
    /// let list: DynArray<i64> = DynArray::with_capacity(4);
    ///
    /// assert_eq!(list.capacity(), 4);
    /// ```
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the index of the first element equal to `value`, scanning the
    /// live region in ascending order, or `None` if no element matches.
    ///
    /// # Examples
    /// ```
    /// use dyn_array::DynArray;
    ///
    /// let mut list: DynArray<i64> = DynArray::new();
    /// list.push(10);
    /// list.push(20);
    /// list.push(10);
    ///
    /// assert_eq!(list.index_of(&10), Some(0));
    /// assert_eq!(list.index_of(&20), Some(1));
    /// assert_eq!(list.index_of(&30), None);
    /// ```
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.as_slice().iter().position(|element| element == value)
    }

    /// Checks if any element of the `DynArray` equals `value`.
    ///
    /// # Examples
    /// ```
    /// use dyn_array::DynArray;
    ///
    /// let mut list: DynArray<i64> = DynArray::new();
    /// list.push(10);
    ///
    /// assert!(list.contains(&10));
    /// assert!(!list.contains(&20));
    /// ```
    #[inline]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(value).is_some()
    }

    /// Sorts the `DynArray` in place by the natural ordering of `T`.
    ///
    /// The sort is an in-place quicksort and is not stable: equal elements
    /// may be reordered. Average O(n log n), worst case O(n²).
    ///
    /// # Example
    /// ```rust
    /// use dyn_array::DynArray;
    ///
    /// let mut list = DynArray::from([3, 1, 2]);
    /// list.sort();
    ///
    /// assert_eq!(list, [1, 2, 3]);
    /// ```
    #[inline]
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_by(T::cmp);
    }

    /// Sorts the `DynArray` in place with a comparator function.
    ///
    /// The comparator must define a total order, otherwise the resulting
    /// order is unspecified (though all elements are retained).
    /// The sort is not stable: equal elements may be reordered.
    ///
    /// # Example
    /// ```rust
    /// use dyn_array::DynArray;
    ///
    /// let mut list = DynArray::from([3, 1, 2]);
    /// list.sort_by(|a, b| b.cmp(a));
    ///
    /// assert_eq!(list, [3, 2, 1]);
    /// ```
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let data = self.as_mut_slice();
        if data.len() > 1 {
            quick_sort(data, 0, data.len() as isize - 1, &mut compare);
        }
    }

    /// Returns a slice over the live region of the `DynArray`.
    ///
    /// # Example
    /// ```rust
    /// use dyn_array::DynArray;
    ///
    /// let list = DynArray::from([1, 2, 3]);
    ///
    /// assert_eq!(list.as_slice(), &[1, 2, 3]);
    /// ```
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // Slots [0, len) are always initialized.
        unsafe { slice::from_raw_parts(self.store.as_ptr().cast::<T>(), self.len) }
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        // Slots [0, len) are always initialized.
        unsafe { slice::from_raw_parts_mut(self.store.as_mut_ptr().cast::<T>(), self.len) }
    }

    /// Reallocates the backing store when the fill count has reached 75% of
    /// capacity: the new store has `capacity * 1.5 + 1` slots and the live
    /// elements are moved across in order.
    ///
    /// A zero capacity grows to a single slot, so an append always makes
    /// forward progress.
    fn grow_if_required(&mut self) {
        debug_assert_eq!(self.capacity, self.store.len());

        // len >= capacity * 0.75, in integer arithmetic.
        if self.len * 4 < self.capacity * 3 {
            return;
        }

        // floor(capacity * 1.5) + 1.
        let capacity = self.capacity + self.capacity / 2 + 1;
        let mut store = Box::new_uninit_slice(capacity);

        // The old store is freed without dropping its slots: the live
        // elements now belong to the new store.
        unsafe {
            ptr::copy_nonoverlapping(self.store.as_ptr(), store.as_mut_ptr(), self.len);
        }

        self.store = store;
        self.capacity = capacity;
    }
}

fn quick_sort<T, F>(data: &mut [T], left: isize, right: isize, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if left < right {
        let split = partition(data, left, right, compare);

        quick_sort(data, left, split - 1, compare);
        quick_sort(data, split, right, compare);
    }
}

/// Hoare partition of `data[from..=to]` around the middle element, returning
/// the split point. Cursors are `isize` because the right cursor may step
/// below `from` on its final retreat.
fn partition<T, F>(data: &mut [T], from: isize, to: isize, compare: &mut F) -> isize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut left = from;
    let mut right = to;

    // The pivot's own slot may move while partitioning, so its value is read
    // out up front. The copy is only ever compared against and never dropped:
    // ownership of the element stays with the slice.
    let pivot = ManuallyDrop::new(unsafe { ptr::read(&data[(from + (to - from) / 2) as usize]) });

    while left <= right {
        while compare(&data[left as usize], &*pivot) == Ordering::Less {
            left += 1;
        }
        while compare(&data[right as usize], &*pivot) == Ordering::Greater {
            right -= 1;
        }

        if left <= right {
            data.swap(left as usize, right as usize);
            left += 1;
            right -= 1;
        }
    }

    left
}

impl<T> Drop for DynArray<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for DynArray<T> {
    fn clone(&self) -> Self {
        let mut this = Self::with_capacity(self.capacity);
        this.extend(self.as_slice());
        this
    }
}

impl<T, const M: usize> PartialEq<[T; M]> for DynArray<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &[T; M]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T> PartialEq<&[T]> for DynArray<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &&[T]) -> bool {
        self.as_slice() == *other
    }
}

impl<T> PartialEq<[T]> for DynArray<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T> PartialEq for DynArray<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T> Eq for DynArray<T> where T: Eq {}

impl<T> PartialOrd for DynArray<T>
where
    T: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T> Ord for DynArray<T>
where
    T: Ord,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T> Hash for DynArray<T>
where
    T: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        self.as_slice().iter().for_each(|v| v.hash(state));
    }
}

impl<T> std::fmt::Debug for DynArray<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}
