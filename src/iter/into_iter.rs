use crate::{raw::Buffer, SimpleVec};
use core::{
    fmt,
    iter::{ExactSizeIterator, FusedIterator},
    ptr, slice,
};

/// This struct is created by [`SimpleVec::into_iter`](crate::SimpleVec::into_iter).
/// See its documentation for more.
pub struct IntoIter<T> {
    index: usize,
    len: usize,
    buffer: Buffer<T>,
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // Safety
        //
        // the elements in `index..len` have not been yielded yet, the buffer
        // releases the allocation after they are dropped
        unsafe { ptr::drop_in_place(self.as_mut_slice()) }
    }
}

impl<T> IntoIterator for SimpleVec<T> {
    type IntoIter = IntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        let (len, buffer) = self.into_raw_parts();
        IntoIter { index: 0, len, buffer }
    }
}

impl<'a, T> IntoIterator for &'a mut SimpleVec<T> {
    type IntoIter = slice::IterMut<'a, T>;
    type Item = &'a mut T;

    fn into_iter(self) -> Self::IntoIter { self.iter_mut() }
}

impl<'a, T> IntoIterator for &'a SimpleVec<T> {
    type IntoIter = slice::Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl<T> FusedIterator for IntoIter<T> {}
impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIter<T> {
    /// Get a slice to the remaining elements in the iterator
    pub fn as_slice(&self) -> &[T] {
        let ptr = self.buffer.as_ptr();
        unsafe { slice::from_raw_parts(ptr.add(self.index), self.len - self.index) }
    }

    /// Get a mutable slice to the remaining elements in the iterator
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let ptr = self.buffer.as_mut_ptr();
        unsafe { slice::from_raw_parts_mut(ptr.add(self.index), self.len - self.index) }
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.debug_tuple("IntoIter").field(&self.as_slice()).finish() }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index == self.len {
            None
        } else {
            unsafe {
                let value = ptr::read(self.buffer.as_ptr().add(self.index));
                self.index += 1;
                Some(value)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len - self.index;
        (len, Some(len))
    }

    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.len()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.index == self.len {
            None
        } else {
            self.len -= 1;
            unsafe { Some(ptr::read(self.buffer.as_ptr().add(self.len))) }
        }
    }
}
