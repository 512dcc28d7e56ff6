mod into_iter;
mod iter;

pub use into_iter::IntoIter;
pub use iter::Iter;

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::mem::MaybeUninit;
use std::{ptr, slice};

use crate::List;

pub(crate) const DEFAULT_CAPACITY: usize = 10;

/// An index-addressable sequence backed by one flat growable buffer.
///
/// Elements live contiguously in slots `[0, len)` of an exactly-sized
/// buffer; appending is amortized O(1), positional insertion and removal
/// are O(n) because of shifting. The buffer grows to `len * 2` whenever an
/// insertion finds it full, and never shrinks except on [`clear`].
///
/// [`clear`]: ArrayList::clear
///
/// # Example
/// ```rust
/// use dual_list::ArrayList;
///
/// let mut list: ArrayList<i64> = ArrayList::new();
/// list.push(1);
/// list.push(3);
/// list.insert(1, 2);
///
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.as_slice(), [1, 2, 3]);
///
/// assert_eq!(list.remove(1), Some(2));
/// assert_eq!(list.as_slice(), [1, 3]);
/// ```
pub struct ArrayList<T> {
    buf: Box<[MaybeUninit<T>]>,
    len: usize,
}

impl<T> ArrayList<T> {
    /// Creates a new, empty `ArrayList` with the default capacity of 10.
    ///
    /// # Example
    /// ```rust
    /// use dual_list::ArrayList;
    ///
    /// let list: ArrayList<i64> = ArrayList::new();
    ///
    /// assert!(list.is_empty());
    /// assert_eq!(list.capacity(), 10);
    /// ```
    pub fn new() -> Self {
        Self {
            buf: Box::new_uninit_slice(DEFAULT_CAPACITY),
            len: 0,
        }
    }

    /// Creates a new, empty `ArrayList` with the requested capacity.
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    ///
    /// # Example
    /// ```rust
    /// use dual_list::ArrayList;
    ///
    /// let list: ArrayList<i64> = ArrayList::with_capacity(4);
    ///
    /// assert!(list.is_empty());
    /// assert_eq!(list.capacity(), 4);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be greater than zero");

        Self {
            buf: Box::new_uninit_slice(capacity),
            len: 0,
        }
    }

    /// Returns the number of elements the buffer can hold before growing.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns the number of elements currently stored in the `ArrayList`.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Checks if the `ArrayList` is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends a value to the end of the `ArrayList`, growing the buffer
    /// if it is full.
    ///
    /// # Example
    /// ```rust
    /// use dual_list::ArrayList;
    ///
    /// let mut list: ArrayList<i64> = ArrayList::new();
    /// list.push(10);
    /// list.push(20);
    ///
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.get(1), Some(&20));
    /// ```
    pub fn push(&mut self, value: T) {
        if self.len == self.capacity() {
            self.grow();
        }

        self.buf[self.len].write(value);
        self.len += 1;
    }

    /// Inserts a value before the element currently at `index`, shifting
    /// that element and everything after it one position to the right.
    /// Grows the buffer if it is full.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`. Appending must use
    /// [`push`](ArrayList::push).
    ///
    /// # Example
    /// ```rust
    /// use dual_list::ArrayList;
    ///
    /// let mut list: ArrayList<i64> = ArrayList::new();
    /// list.push(10);
    /// list.push(30);
    /// list.insert(1, 20);
    ///
    /// assert_eq!(list.as_slice(), [10, 20, 30]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) {
        assert!(
            index < self.len,
            "insertion index (is {index}) must be less than len (is {})",
            self.len
        );

        if self.len == self.capacity() {
            self.grow();
        }

        unsafe {
            let ptr = self.buf.as_mut_ptr();
            ptr::copy(ptr.add(index), ptr.add(index + 1), self.len - index);
        }

        self.buf[index].write(value);
        self.len += 1;
    }

    /// Returns a reference to the element at `index`, if any.
    ///
    /// # Example
    /// ```rust
    /// use dual_list::ArrayList;
    ///
    /// let mut list: ArrayList<i64> = ArrayList::new();
    /// list.push(10);
    ///
    /// assert_eq!(list.get(0), Some(&10));
    /// assert_eq!(list.get(1), None);
    /// ```
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Returns a mutable reference to the element at `index`, if any.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Returns a reference to the first element, if any.
    pub fn front(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns a mutable reference to the first element, if any.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    /// Returns a reference to the last element, if any.
    pub fn back(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns a mutable reference to the last element, if any.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    /// Removes and returns the element at `index`, shifting everything
    /// after it one position to the left. Returns `None` without mutating
    /// the list if the index is out of bounds.
    ///
    /// # Example
    /// ```rust
    /// use dual_list::ArrayList;
    ///
    /// let mut list: ArrayList<i64> = ArrayList::new();
    /// list.push(10);
    /// list.push(20);
    /// list.push(30);
    ///
    /// assert_eq!(list.remove(1), Some(20));
    /// assert_eq!(list.as_slice(), [10, 30]);
    /// assert_eq!(list.remove(5), None);
    /// ```
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }

        let value = unsafe { self.buf[index].assume_init_read() };

        unsafe {
            let ptr = self.buf.as_mut_ptr();
            ptr::copy(ptr.add(index + 1), ptr.add(index), self.len - index - 1);
        }

        self.len -= 1;
        Some(value)
    }

    /// Removes all elements and resets the buffer to the default capacity.
    ///
    /// Capacity is not preserved: a list grown to thousands of slots goes
    /// back to holding 10 after a clear.
    ///
    /// # Example
    /// ```rust
    /// use dual_list::ArrayList;
    ///
    /// let mut list: ArrayList<i64> = ArrayList::with_capacity(1);
    /// (0..100).for_each(|value| list.push(value));
    /// assert!(list.capacity() >= 100);
    ///
    /// list.clear();
    ///
    /// assert!(list.is_empty());
    /// assert_eq!(list.capacity(), 10);
    /// assert_eq!(list.get(0), None);
    /// ```
    pub fn clear(&mut self) {
        let len = self.len;
        self.len = 0;

        unsafe {
            let live = slice::from_raw_parts_mut(self.buf.as_mut_ptr().cast::<T>(), len);
            ptr::drop_in_place(live);
        }

        self.buf = Box::new_uninit_slice(DEFAULT_CAPACITY);
    }

    /// Sorts the list in place according to the supplied comparator.
    ///
    /// The sort is stable and allocates like [`slice::sort_by`].
    ///
    /// # Example
    /// ```rust
    /// use dual_list::ArrayList;
    ///
    /// let mut list: ArrayList<i64> = ArrayList::new();
    /// list.push(3);
    /// list.push(1);
    /// list.push(2);
    ///
    /// list.sort_by(|a, b| b.cmp(a));
    ///
    /// assert_eq!(list.as_slice(), [3, 2, 1]);
    /// ```
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.as_mut_slice().sort_by(compare);
    }

    /// Returns a snapshot of the list's elements in their current order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.as_slice().to_vec()
    }

    /// Returns a view over the live slots `[0, len)`.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.buf.as_ptr().cast::<T>(), self.len) }
    }

    /// Returns a mutable view over the live slots `[0, len)`.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.buf.as_mut_ptr().cast::<T>(), self.len) }
    }

    /// Provides an iterator over the list's elements.
    ///
    /// # Example
    /// ```rust
    /// use dual_list::ArrayList;
    ///
    /// let mut list: ArrayList<i64> = ArrayList::new();
    /// list.push(0);
    /// list.push(1);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::from_list(self)
    }

    // New capacity is derived from len, not from the old capacity.
    // The floor keeps the policy free of a zero fixpoint, even though the
    // public API never lets capacity reach zero.
    fn grow(&mut self) {
        let capacity = match self.len {
            0 => DEFAULT_CAPACITY,
            len => len * 2,
        };

        let mut buf = Box::new_uninit_slice(capacity);
        unsafe {
            ptr::copy_nonoverlapping(self.buf.as_ptr(), buf.as_mut_ptr(), self.len);
        }

        // The old allocation is released without dropping any element:
        // everything in [0, len) now lives in the new buffer.
        self.buf = buf;
    }
}

impl<T> Drop for ArrayList<T> {
    fn drop(&mut self) {
        unsafe { ptr::drop_in_place(self.as_mut_slice() as *mut [T]) }
    }
}

impl<T> List<T> for ArrayList<T> {
    #[inline]
    fn push(&mut self, value: T) {
        ArrayList::push(self, value);
    }

    #[inline]
    fn insert(&mut self, index: usize, value: T) {
        ArrayList::insert(self, index, value);
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        ArrayList::get(self, index)
    }

    #[inline]
    fn remove(&mut self, index: usize) -> Option<T> {
        ArrayList::remove(self, index)
    }

    #[inline]
    fn clear(&mut self) {
        ArrayList::clear(self);
    }

    #[inline]
    fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        ArrayList::sort_by(self, compare);
    }

    #[inline]
    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        ArrayList::to_vec(self)
    }

    #[inline]
    fn len(&self) -> usize {
        ArrayList::len(self)
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const M: usize> From<[T; M]> for ArrayList<T> {
    fn from(values: [T; M]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut this = Self::new();
        this.extend(iter);
        this
    }
}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|value| self.push(value));
    }
}

impl<'a, T: Clone> Extend<&'a T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T: Clone> Clone for ArrayList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T, const M: usize> PartialEq<[T; M]> for ArrayList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &[T; M]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq> PartialEq<&[T]> for ArrayList<T> {
    fn eq(&self, other: &&[T]) -> bool {
        self.as_slice() == *other
    }
}

impl<T: PartialEq> PartialEq<[T]> for ArrayList<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq> PartialEq for ArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for ArrayList<T> {}

impl<T: PartialOrd> PartialOrd for ArrayList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for ArrayList<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for ArrayList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        self.iter().for_each(|value| value.hash(state));
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for ArrayList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> IntoIterator for ArrayList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::from_list(self)
    }
}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::from_list(self)
    }
}
