use core::iter::FusedIterator;
use core::slice;

use crate::ArrayList;

/// An iterator over the elements of an ArrayList.
///
/// This struct is created by ArrayList::iter().
#[derive(Debug)]
pub struct Iter<'a, T> {
    delegate: slice::Iter<'a, T>,
}

impl<T> Default for Iter<'_, T> {
    fn default() -> Self {
        Self {
            delegate: Default::default(),
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            delegate: self.delegate.clone(),
        }
    }
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn from_list(list: &'a ArrayList<T>) -> Self {
        Self {
            delegate: list.as_slice().iter(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.delegate.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.delegate.size_hint()
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.delegate.nth(n)
    }

    fn last(self) -> Option<Self::Item> {
        self.delegate.last()
    }

    fn count(self) -> usize {
        self.delegate.count()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.delegate.next_back()
    }

    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        self.delegate.nth_back(n)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.delegate.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}
