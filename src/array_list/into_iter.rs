use core::iter::FusedIterator;
use core::mem::{self, ManuallyDrop, MaybeUninit};
use core::ptr;

use crate::ArrayList;

/// An iterator over the elements of an ArrayList.
///
/// This struct is created by ArrayList::into_iter().
pub struct IntoIter<T> {
    buf: Box<[MaybeUninit<T>]>,
    front: usize,
    back: usize,
}

impl<T> Default for IntoIter<T> {
    fn default() -> Self {
        Self {
            buf: Box::new([]),
            front: 0,
            back: 0,
        }
    }
}

impl<T> IntoIter<T> {
    pub(crate) fn from_list(list: ArrayList<T>) -> Self {
        // The buffer changes owner; the list must not drop its elements.
        let mut list = ManuallyDrop::new(list);

        Self {
            buf: mem::take(&mut list.buf),
            front: 0,
            back: list.len,
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        let value = unsafe { self.buf[self.front].assume_init_read() };
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        self.back -= 1;
        Some(unsafe { self.buf[self.back].assume_init_read() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.back - self.front
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // Slots [front, back) still hold live elements.
        unsafe {
            let live = ptr::slice_from_raw_parts_mut(
                self.buf.as_mut_ptr().add(self.front).cast::<T>(),
                self.back - self.front,
            );
            ptr::drop_in_place(live);
        }
    }
}
