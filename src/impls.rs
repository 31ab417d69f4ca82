use crate::{raw::Buffer, CapacityRequest, SimpleVec};

use alloc::vec::Vec;
use core::{
    borrow::{Borrow, BorrowMut},
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    mem::ManuallyDrop,
    ops::{Index, IndexMut},
    ptr::NonNull,
    slice::SliceIndex,
};

impl<T: Clone> Clone for SimpleVec<T> {
    /// Copies exactly `len` elements into a buffer of capacity `len`
    fn clone(&self) -> Self {
        let mut vec = Self::with_capacity(self.len());
        vec.extend_from_slice(self);
        vec
    }

    /// An empty `source` only clears `self`, keeping its capacity. Otherwise
    /// `source` is cloned in full before being swapped in, so if `T::clone`
    /// panics `self` is left unchanged.
    fn clone_from(&mut self, source: &Self) {
        if source.is_empty() {
            self.clear();
        } else {
            let mut copy = source.clone();
            self.swap_with(&mut copy);
        }
    }
}

impl<T> Default for SimpleVec<T> {
    fn default() -> Self { Self::new() }
}

impl<T> From<CapacityRequest> for SimpleVec<T> {
    fn from(request: CapacityRequest) -> Self {
        let mut vec = Self::new();
        vec.reserve(request.capacity());
        vec
    }
}

impl<O: ?Sized + AsRef<[T]>, T: PartialEq> PartialEq<O> for SimpleVec<T> {
    fn eq(&self, other: &O) -> bool { self.as_slice() == other.as_ref() }
}

impl<T: Eq> Eq for SimpleVec<T> {}

// `<`, `<=`, `>` and `>=` all come from this single lexicographic comparison
impl<O: ?Sized + AsRef<[T]>, T: PartialOrd> PartialOrd<O> for SimpleVec<T> {
    fn partial_cmp(&self, other: &O) -> Option<Ordering> { self.as_slice().partial_cmp(other.as_ref()) }
}

impl<T: Ord> Ord for SimpleVec<T> {
    fn cmp(&self, other: &Self) -> Ordering { self.as_slice().cmp(other.as_slice()) }
}

impl<T: Hash> Hash for SimpleVec<T> {
    fn hash<H: Hasher>(&self, state: &mut H) { self.as_slice().hash(state) }
}

impl<T: fmt::Debug> fmt::Debug for SimpleVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { self.as_slice().fmt(f) }
}

impl<T> AsRef<[T]> for SimpleVec<T> {
    fn as_ref(&self) -> &[T] { self }
}

impl<T> AsMut<[T]> for SimpleVec<T> {
    fn as_mut(&mut self) -> &mut [T] { self }
}

impl<T> Borrow<[T]> for SimpleVec<T> {
    fn borrow(&self) -> &[T] { self }
}

impl<T> BorrowMut<[T]> for SimpleVec<T> {
    fn borrow_mut(&mut self) -> &mut [T] { self }
}

impl<T, I: SliceIndex<[T]>> Index<I> for SimpleVec<T> {
    type Output = I::Output;

    fn index(&self, index: I) -> &Self::Output { self.as_slice().index(index) }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for SimpleVec<T> {
    fn index_mut(&mut self, index: I) -> &mut Self::Output { self.as_mut_slice().index_mut(index) }
}

impl<T, const N: usize> From<[T; N]> for SimpleVec<T> {
    fn from(array: [T; N]) -> Self {
        let mut vec = Self::with_capacity(N);
        vec.extend(array);
        vec
    }
}

impl<T: Clone> From<&[T]> for SimpleVec<T> {
    fn from(slice: &[T]) -> Self {
        let mut vec = Self::with_capacity(slice.len());
        vec.extend_from_slice(slice);
        vec
    }
}

impl<T> From<Vec<T>> for SimpleVec<T> {
    fn from(vec: Vec<T>) -> Self {
        let mut vec = ManuallyDrop::new(vec);

        let len = vec.len();
        let cap = vec.capacity();
        // Safety
        //
        // a `Vec` never hands out a null pointer
        let ptr = unsafe { NonNull::new_unchecked(vec.as_mut_ptr()) };

        // Safety
        //
        // * the `Vec` allocated `cap` slots of `T` from the global allocator
        // * the first `len` of them are initialized
        // * the `Vec` is forgotten, so the allocation is only owned by the buffer
        unsafe { SimpleVec::from_raw_parts(len, Buffer::from_raw_parts(ptr, cap)) }
    }
}

impl<T> From<SimpleVec<T>> for Vec<T> {
    fn from(vec: SimpleVec<T>) -> Self {
        let (length, buffer) = vec.into_raw_parts();
        let (ptr, capacity) = buffer.into_raw_parts();

        // Safety
        //
        // the buffer was allocated from the global allocator with the layout of `[T; capacity]`
        unsafe { Vec::from_raw_parts(ptr.as_ptr(), length, capacity) }
    }
}
