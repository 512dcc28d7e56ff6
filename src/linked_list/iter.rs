use core::iter::FusedIterator;

use crate::LinkedList;
use crate::linked_list::NONE;

/// An iterator over the elements of a LinkedList.
///
/// This struct is created by LinkedList::iter().
pub struct Iter<'a, T> {
    list: Option<&'a LinkedList<T>>,
    front: usize,
    back: usize,
    len: usize,
}

impl<T> Default for Iter<'_, T> {
    fn default() -> Self {
        Self {
            list: None,
            front: NONE,
            back: NONE,
            len: 0,
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn from_list(list: &'a LinkedList<T>) -> Self {
        Self {
            list: Some(list),
            front: list.head,
            back: list.tail,
            len: list.len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        let node = self.list?.node(self.front);
        self.front = node.next;
        self.len -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        let node = self.list?.node(self.back);
        self.back = node.prev;
        self.len -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<T> FusedIterator for Iter<'_, T> {}
