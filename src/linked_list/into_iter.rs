use core::iter::FusedIterator;

use crate::LinkedList;
use crate::linked_list::NONE;

/// An iterator over the elements of a LinkedList.
///
/// This struct is created by LinkedList::into_iter().
pub struct IntoIter<T> {
    list: LinkedList<T>,
}

impl<T> Default for IntoIter<T> {
    fn default() -> Self {
        Self {
            list: LinkedList::new(),
        }
    }
}

impl<T> IntoIter<T> {
    pub(crate) fn from_list(list: LinkedList<T>) -> Self {
        Self { list }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.list.head == NONE {
            return None;
        }

        let head = self.list.head;
        Some(self.list.unlink(head))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.list.tail == NONE {
            return None;
        }

        let tail = self.list.tail;
        Some(self.list.unlink(tail))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.list.len
    }
}

impl<T> FusedIterator for IntoIter<T> {}
