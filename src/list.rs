use std::cmp::Ordering;

/// The contract shared by both list variants.
///
/// An index-addressable sequence supporting appends, positional insertion
/// and removal, comparator-driven sorting and snapshot extraction. Both
/// [`ArrayList`](crate::ArrayList) and [`LinkedList`](crate::LinkedList)
/// implement every operation with identical observable semantics; they
/// differ only in storage layout and the cost of individual operations.
///
/// # Index contract
///
/// `insert` places a value strictly *before* an existing element, so it
/// requires `index < len()`. Appending past the end must go through
/// [`push`](List::push). This is stricter than [`Vec::insert`], which also
/// accepts `index == len()`.
///
/// # Example
/// ```rust
/// use dual_list::{ArrayList, LinkedList, List};
///
/// fn fill(list: &mut impl List<i32>) {
///     list.push(3);
///     list.push(1);
///     list.insert(1, 2);
///     list.sort_by(i32::cmp);
/// }
///
/// let mut array: ArrayList<i32> = ArrayList::new();
/// let mut linked: LinkedList<i32> = LinkedList::new();
/// fill(&mut array);
/// fill(&mut linked);
///
/// assert_eq!(array.to_vec(), vec![1, 2, 3]);
/// assert_eq!(linked.to_vec(), vec![1, 2, 3]);
/// ```
pub trait List<T> {
    /// Appends a value to the end of the list.
    fn push(&mut self, value: T);

    /// Inserts a value before the element currently at `index`, shifting
    /// that element and everything after it one position to the right.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`. Use [`push`](List::push) to append.
    fn insert(&mut self, index: usize, value: T);

    /// Returns a reference to the element at `index`, or `None` if the
    /// index is out of bounds.
    fn get(&self, index: usize) -> Option<&T>;

    /// Removes and returns the element at `index`, shifting everything
    /// after it one position to the left. Returns `None` without mutating
    /// the list if the index is out of bounds.
    fn remove(&mut self, index: usize) -> Option<T>;

    /// Removes all elements from the list.
    fn clear(&mut self);

    /// Sorts the list in place according to the supplied comparator.
    ///
    /// The comparator must define a total order. The sort is stable:
    /// elements that compare equal keep their relative order.
    fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;

    /// Returns a snapshot of the list's elements in their current order.
    fn to_vec(&self) -> Vec<T>
    where
        T: Clone;

    /// Returns the number of elements currently stored in the list.
    fn len(&self) -> usize;

    /// Checks if the list holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
