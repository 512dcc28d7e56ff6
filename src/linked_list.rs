mod into_iter;
mod iter;

pub use into_iter::IntoIter;
pub use iter::Iter;

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::mem;

use crate::List;

/// Key marking the absence of a node.
pub(crate) const NONE: usize = usize::MAX;

pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) prev: usize,
    pub(crate) next: usize,
}

pub(crate) enum Slot<T> {
    Occupied(Node<T>),
    Vacant { next_free: usize },
}

/// An index-addressable sequence backed by a doubly-linked node chain.
///
/// Nodes live in an internal arena and address each other through stable
/// keys, so the chain never forms ownership cycles; vacated slots are
/// recycled through a free-list. Appending is O(1); positional access is
/// O(n) but walks from whichever end is closer to the target index, and
/// removal is O(1) once the node is located.
///
/// # Example
/// ```rust
/// use dual_list::LinkedList;
///
/// let mut list: LinkedList<i64> = LinkedList::new();
/// list.push(1);
/// list.push(3);
/// list.insert(1, 2);
///
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.to_vec(), vec![1, 2, 3]);
///
/// assert_eq!(list.remove(1), Some(2));
/// assert_eq!(list.to_vec(), vec![1, 3]);
/// ```
pub struct LinkedList<T> {
    pub(crate) slots: Vec<Slot<T>>,
    pub(crate) head: usize,
    pub(crate) tail: usize,
    free: usize,
    pub(crate) len: usize,
}

impl<T> LinkedList<T> {
    /// Creates a new, empty `LinkedList` with no allocated nodes.
    ///
    /// # Example
    /// ```rust
    /// use dual_list::LinkedList;
    ///
    /// let list: LinkedList<i64> = LinkedList::new();
    ///
    /// assert!(list.is_empty());
    /// ```
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            head: NONE,
            tail: NONE,
            free: NONE,
            len: 0,
        }
    }

    /// Returns the number of elements currently stored in the `LinkedList`.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Checks if the `LinkedList` is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends a value to the end of the `LinkedList`.
    ///
    /// # Example
    /// ```rust
    /// use dual_list::LinkedList;
    ///
    /// let mut list: LinkedList<i64> = LinkedList::new();
    /// list.push(10);
    /// list.push(20);
    ///
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.back(), Some(&20));
    /// ```
    pub fn push(&mut self, value: T) {
        let key = self.alloc(Node {
            value,
            prev: self.tail,
            next: NONE,
        });

        if self.tail == NONE {
            self.head = key;
        } else {
            self.node_mut(self.tail).next = key;
        }

        self.tail = key;
        self.len += 1;
    }

    /// Inserts a value before the element currently at `index`, splicing a
    /// new node between that node and its predecessor.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`. Appending must use
    /// [`push`](LinkedList::push).
    ///
    /// # Example
    /// ```rust
    /// use dual_list::LinkedList;
    ///
    /// let mut list: LinkedList<i64> = LinkedList::new();
    /// list.push(10);
    /// list.push(30);
    /// list.insert(1, 20);
    ///
    /// assert_eq!(list.to_vec(), vec![10, 20, 30]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) {
        assert!(
            index < self.len,
            "insertion index (is {index}) must be less than len (is {})",
            self.len
        );

        let target = self.find(index);
        let prev = self.node(target).prev;
        let key = self.alloc(Node {
            value,
            prev,
            next: target,
        });

        self.node_mut(target).prev = key;
        if prev == NONE {
            self.head = key;
        } else {
            self.node_mut(prev).next = key;
        }

        self.len += 1;
    }

    /// Returns a reference to the element at `index`, if any.
    ///
    /// # Example
    /// ```rust
    /// use dual_list::LinkedList;
    ///
    /// let mut list: LinkedList<i64> = LinkedList::new();
    /// list.push(10);
    ///
    /// assert_eq!(list.get(0), Some(&10));
    /// assert_eq!(list.get(1), None);
    /// ```
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }

        Some(&self.node(self.find(index)).value)
    }

    /// Returns a mutable reference to the element at `index`, if any.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }

        let key = self.find(index);
        Some(&mut self.node_mut(key).value)
    }

    /// Returns a reference to the first element, if any.
    pub fn front(&self) -> Option<&T> {
        (self.head != NONE).then(|| &self.node(self.head).value)
    }

    /// Returns a mutable reference to the first element, if any.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        if self.head == NONE {
            return None;
        }

        let head = self.head;
        Some(&mut self.node_mut(head).value)
    }

    /// Returns a reference to the last element, if any.
    pub fn back(&self) -> Option<&T> {
        (self.tail != NONE).then(|| &self.node(self.tail).value)
    }

    /// Returns a mutable reference to the last element, if any.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.tail == NONE {
            return None;
        }

        let tail = self.tail;
        Some(&mut self.node_mut(tail).value)
    }

    /// Removes and returns the element at `index`, relinking its
    /// neighbors around it. Returns `None` without mutating the list if
    /// the index is out of bounds.
    ///
    /// # Example
    /// ```rust
    /// use dual_list::LinkedList;
    ///
    /// let mut list: LinkedList<i64> = LinkedList::new();
    /// list.push(10);
    /// list.push(20);
    /// list.push(30);
    ///
    /// assert_eq!(list.remove(1), Some(20));
    /// assert_eq!(list.to_vec(), vec![10, 30]);
    /// assert_eq!(list.remove(5), None);
    /// ```
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }

        let key = self.find(index);
        Some(self.unlink(key))
    }

    /// Removes all elements, releasing the node arena.
    ///
    /// # Example
    /// ```rust
    /// use dual_list::LinkedList;
    ///
    /// let mut list: LinkedList<i64> = LinkedList::new();
    /// list.push(1);
    /// list.push(2);
    ///
    /// list.clear();
    ///
    /// assert!(list.is_empty());
    /// assert_eq!(list.get(0), None);
    /// ```
    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = NONE;
        self.tail = NONE;
        self.free = NONE;
        self.len = 0;
    }

    /// Sorts the list in place according to the supplied comparator.
    ///
    /// The chain order is snapshotted, stable-sorted by value, and the
    /// links are rewired in one pass; no element is moved or copied.
    ///
    /// # Example
    /// ```rust
    /// use dual_list::LinkedList;
    ///
    /// let mut list: LinkedList<i64> = LinkedList::new();
    /// list.push(3);
    /// list.push(1);
    /// list.push(2);
    ///
    /// list.sort_by(|a, b| a.cmp(b));
    ///
    /// assert_eq!(list.to_vec(), vec![1, 2, 3]);
    /// ```
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        if self.len < 2 {
            return;
        }

        let mut order = Vec::with_capacity(self.len);
        let mut key = self.head;
        while key != NONE {
            order.push(key);
            key = self.node(key).next;
        }

        order.sort_by(|&a, &b| compare(&self.node(a).value, &self.node(b).value));

        self.head = order[0];
        self.tail = order[order.len() - 1];
        for (position, &key) in order.iter().enumerate() {
            let node = self.node_mut(key);
            node.prev = if position == 0 { NONE } else { order[position - 1] };
            node.next = order.get(position + 1).copied().unwrap_or(NONE);
        }
    }

    /// Returns a snapshot of the list's elements in their current order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Provides an iterator over the list's elements, walking the chain
    /// from the first node.
    ///
    /// # Example
    /// ```rust
    /// use dual_list::LinkedList;
    ///
    /// let mut list: LinkedList<i64> = LinkedList::new();
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

    // Walks from whichever end is closer to the target index.
    fn find(&self, index: usize) -> usize {
        debug_assert!(index < self.len);

        if index < self.len / 2 {
            let mut key = self.head;
            for _ in 0..index {
                key = self.node(key).next;
            }
            key
        } else {
            let mut key = self.tail;
            for _ in index..self.len - 1 {
                key = self.node(key).prev;
            }
            key
        }
    }

    // Detaches the node at `key` from the chain and recycles its slot.
    pub(crate) fn unlink(&mut self, key: usize) -> T {
        let (prev, next) = {
            let node = self.node(key);
            (node.prev, node.next)
        };

        if prev == NONE {
            self.head = next;
        } else {
            self.node_mut(prev).next = next;
        }

        if next == NONE {
            self.tail = prev;
        } else {
            self.node_mut(next).prev = prev;
        }

        self.len -= 1;

        let slot = mem::replace(&mut self.slots[key], Slot::Vacant { next_free: self.free });
        self.free = key;

        match slot {
            Slot::Occupied(node) => node.value,
            Slot::Vacant { .. } => unreachable!("chain key points at a vacant slot"),
        }
    }

    fn alloc(&mut self, node: Node<T>) -> usize {
        if self.free == NONE {
            self.slots.push(Slot::Occupied(node));
            return self.slots.len() - 1;
        }

        let key = self.free;
        match mem::replace(&mut self.slots[key], Slot::Occupied(node)) {
            Slot::Vacant { next_free } => self.free = next_free,
            Slot::Occupied(_) => unreachable!("free-list key points at an occupied slot"),
        }

        key
    }

    pub(crate) fn node(&self, key: usize) -> &Node<T> {
        match &self.slots[key] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("chain key points at a vacant slot"),
        }
    }

    fn node_mut(&mut self, key: usize) -> &mut Node<T> {
        match &mut self.slots[key] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("chain key points at a vacant slot"),
        }
    }
}

impl<T> List<T> for LinkedList<T> {
    #[inline]
    fn push(&mut self, value: T) {
        LinkedList::push(self, value);
    }

    #[inline]
    fn insert(&mut self, index: usize, value: T) {
        LinkedList::insert(self, index, value);
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        LinkedList::get(self, index)
    }

    #[inline]
    fn remove(&mut self, index: usize) -> Option<T> {
        LinkedList::remove(self, index)
    }

    #[inline]
    fn clear(&mut self) {
        LinkedList::clear(self);
    }

    #[inline]
    fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        LinkedList::sort_by(self, compare);
    }

    #[inline]
    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        LinkedList::to_vec(self)
    }

    #[inline]
    fn len(&self) -> usize {
        LinkedList::len(self)
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const M: usize> From<[T; M]> for LinkedList<T> {
    fn from(values: [T; M]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut this = Self::new();
        this.extend(iter);
        this
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|value| self.push(value));
    }
}

impl<'a, T: Clone> Extend<&'a T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T, const M: usize> PartialEq<[T; M]> for LinkedList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &[T; M]) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: PartialEq> PartialEq<&[T]> for LinkedList<T> {
    fn eq(&self, other: &&[T]) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: PartialEq> PartialEq<[T]> for LinkedList<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: PartialOrd> PartialOrd for LinkedList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for LinkedList<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        self.iter().for_each(|value| value.hash(state));
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::from_list(self)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::from_list(self)
    }
}
