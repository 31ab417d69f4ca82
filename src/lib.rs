#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(missing_docs, clippy::missing_safety_doc)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate, clippy::module_name_repetitions)]

//! A contiguous growable vector that owns exactly one heap buffer.
//!
//! [`SimpleVec`] keeps a logical length separate from the capacity of its
//! [`Buffer`](raw::Buffer). Whenever it needs more room it allocates a brand
//! new buffer, moves the live elements over and swaps the new buffer into
//! place, so a failed allocation never disturbs the existing elements.
//!
//! # Basic Usage
//!
//! ```rust
//! use simple_vec::{svec, SimpleVec};
//!
//! let mut vec = SimpleVec::new();
//! vec.push(1);
//! vec.push(2);
//! vec.push(3);
//! assert_eq!(vec.capacity(), 4);
//!
//! vec.insert(1, 99);
//! assert_eq!(vec, [1, 99, 2, 3]);
//!
//! vec.erase(2);
//! assert_eq!(vec, svec![1, 99, 3]);
//!
//! assert!(vec.at(10).is_err());
//! ```
//!
//! # Growth
//!
//! A full vector grows to `max(2 * len, 1)` slots on [`push`](SimpleVec::push)
//! and [`insert`](SimpleVec::insert), which makes appending amortized O(1).
//! [`reserve`](SimpleVec::reserve) and [`resize`](SimpleVec::resize) grow to
//! exactly the requested capacity. Capacity never shrinks.
//!
//! # Invalidation
//!
//! Any operation that grows the capacity moves every element to a new
//! allocation, so raw pointers obtained from [`as_ptr`](SimpleVec::as_ptr)
//! and positions remembered from before the call no longer refer to the same
//! elements. [`insert`](SimpleVec::insert), [`erase`](SimpleVec::erase) and
//! [`remove`](SimpleVec::remove) shift every element at or after the given
//! index. Borrowed iterators can't observe either, the borrow checker rejects
//! the mutation while they are alive.
//!
//! # Features
//!
//! * `std` (default) - implements [`core::error::Error`] for the error types.
//!   Without it the crate is `no_std` and only needs `alloc`.
//!
//! # Logging
//!
//! Reallocations are reported through the [`log`] facade at `trace` level,
//! failed allocations at `debug` level.

extern crate alloc;

use core::{
    iter::repeat_with,
    ops::{Deref, DerefMut},
    ptr, slice,
};

use log::{debug, trace};

mod capacity;
mod error;
mod impls;

pub mod iter;
pub mod raw;

pub use capacity::{reserve, CapacityRequest};
pub use error::OutOfRange;
use raw::Buffer;
pub use raw::{AllocError, AllocResult};

/// Create a new [`SimpleVec`]
///
/// The capacity of the new vector is exactly the number of elements.
///
/// ```rust
/// # use simple_vec::{svec, SimpleVec};
/// let x: SimpleVec<i32> = svec![0, 1];
/// assert_eq!(x, [0, 1]);
/// assert_eq!(x.capacity(), 2);
///
/// let y = svec![7; 3];
/// assert_eq!(y, [7, 7, 7]);
/// ```
#[macro_export]
macro_rules! svec {
    () => {
        $crate::SimpleVec::new()
    };
    ($expr:expr; $n:expr) => {
        $crate::SimpleVec::from_elem($n, $expr)
    };
    ($($expr:expr),+ $(,)?) => {
        $crate::SimpleVec::from([$($expr),+])
    };
}

/// A contiguous growable vector backed by a single [`Buffer`](raw::Buffer)
pub struct SimpleVec<T> {
    len: usize,
    buffer: Buffer<T>,
}

impl<T> Deref for SimpleVec<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // The first `len` elements are guaranteed to be initialized
        unsafe { slice::from_raw_parts(self.buffer.as_ptr(), self.len) }
    }
}

impl<T> DerefMut for SimpleVec<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // The first `len` elements are guaranteed to be initialized
        unsafe { slice::from_raw_parts_mut(self.buffer.as_mut_ptr(), self.len) }
    }
}

impl<T> Drop for SimpleVec<T> {
    fn drop(&mut self) {
        // The buffer only releases the allocation, the live elements are ours to drop
        unsafe { ptr::drop_in_place(self.as_mut_slice()) }
    }
}

// Set the length of the vector when the `SetLenOnDrop` goes out of scope,
// so elements written before a panic are still owned by the vector.
struct SetLenOnDrop<'a> {
    len: &'a mut usize,
    local_len: usize,
}

impl<'a> SetLenOnDrop<'a> {
    fn new(len: &'a mut usize) -> Self {
        let local_len = *len;
        Self { len, local_len }
    }

    fn current(&self) -> usize { self.local_len }

    fn increment_len(&mut self, increment: usize) { self.local_len += increment; }
}

impl Drop for SetLenOnDrop<'_> {
    fn drop(&mut self) { *self.len = self.local_len; }
}

impl<T> SimpleVec<T> {
    /// Create a new empty `SimpleVec`, this never allocates
    pub fn new() -> Self { Self::with_buffer(Buffer::empty()) }

    /// Create a new empty `SimpleVec` with exactly the given capacity
    ///
    /// # Panics
    ///
    /// Panics or aborts if the allocation fails
    pub fn with_capacity(capacity: usize) -> Self { Self::with_buffer(Buffer::new(capacity)) }

    /// Create a new empty `SimpleVec` with exactly the given capacity
    ///
    /// # Errors
    ///
    /// If the buffer can't be allocated
    pub fn try_with_capacity(capacity: usize) -> AllocResult<Self> {
        Buffer::try_new(capacity).map(Self::with_buffer)
    }

    /// Create a new empty `SimpleVec` around an existing buffer
    pub fn with_buffer(buffer: Buffer<T>) -> Self { Self { len: 0, buffer } }

    /// Create a `SimpleVec` holding `len` default values, with capacity `len`
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        let mut vec = Self::with_capacity(len);
        vec.extend_with(len, repeat_with(T::default));
        vec
    }

    /// Create a `SimpleVec` holding `len` clones of `value`, with capacity `len`
    pub fn from_elem(len: usize, value: T) -> Self
    where
        T: Clone,
    {
        let mut vec = Self::with_capacity(len);
        if len != 0 {
            vec.extend_with(len - 1, repeat_with(|| value.clone()));
            // Safety
            //
            // the capacity is `len`, and we only wrote `len - 1` elements
            unsafe { vec.push_unchecked(value) };
        }
        vec
    }

    /// Convert a `SimpleVec` into a length-buffer pair
    pub fn into_raw_parts(self) -> (usize, Buffer<T>) {
        let this = core::mem::ManuallyDrop::new(self);
        unsafe { (this.len, ptr::read(&this.buffer)) }
    }

    /// Create a `SimpleVec` from a length-buffer pair
    ///
    /// # Safety
    ///
    /// the length must be less than or equal to `buffer.capacity()` and
    /// all elements in the range `0..length`, must be initialized
    pub unsafe fn from_raw_parts(len: usize, buffer: Buffer<T>) -> Self {
        debug_assert!(len <= buffer.capacity());
        Self { len, buffer }
    }

    /// Returns the number of elements in the vector.
    pub fn len(&self) -> usize { self.len }

    /// Returns the number of elements the vector can hold without reallocating.
    pub fn capacity(&self) -> usize { self.buffer.capacity() }

    /// Returns true if and only if the vector contains no elements.
    pub fn is_empty(&self) -> bool { self.len == 0 }

    /// Returns true if and only if the vector's length is equal to it's capacity.
    pub fn is_full(&self) -> bool { self.len == self.capacity() }

    /// Returns the length of the spare capacity of the `SimpleVec`
    pub fn remaining_capacity(&self) -> usize { self.capacity() - self.len }

    /// Extracts a slice containing the entire vector.
    ///
    /// Equivalent to &s[..].
    pub fn as_slice(&self) -> &[T] { self }

    /// Extracts a mutable slice containing the entire vector.
    ///
    /// Equivalent to &mut s[..].
    pub fn as_mut_slice(&mut self) -> &mut [T] { self }

    /// A pointer to the first element.
    ///
    /// The pointer is invalidated by anything that grows the capacity.
    pub fn as_ptr(&self) -> *const T { self.buffer.as_ptr() }

    /// A mutable pointer to the first element.
    ///
    /// The pointer is invalidated by anything that grows the capacity.
    pub fn as_mut_ptr(&mut self) -> *mut T { self.buffer.as_mut_ptr() }

    /// Returns a reference to the element at `index`
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if `index >= len()`
    pub fn at(&self, index: usize) -> Result<&T, OutOfRange> {
        let len = self.len;
        self.as_slice().get(index).ok_or(OutOfRange { index, len })
    }

    /// Returns a mutable reference to the element at `index`
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if `index >= len()`
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, OutOfRange> {
        let len = self.len;
        self.as_mut_slice().get_mut(index).ok_or(OutOfRange { index, len })
    }

    /// Exchange the contents of two vectors.
    ///
    /// Guaranteed to not panic/abort/allocate
    pub fn swap_with(&mut self, other: &mut Self) {
        self.buffer.swap(&mut other.buffer);
        core::mem::swap(&mut self.len, &mut other.len);
    }

    /// Move the contents out of this vector, leaving it empty with no capacity.
    ///
    /// Equivalent to [`core::mem::take`]
    pub fn take(&mut self) -> Self { core::mem::take(self) }

    /// Move the live elements into a new buffer of exactly `new_capacity` slots
    /// and swap it into place. The old buffer is untouched until the allocation
    /// has succeeded.
    fn try_recapacity(&mut self, new_capacity: usize) -> AllocResult {
        debug_assert!(new_capacity >= self.len);

        let mut new_buffer = match Buffer::try_new(new_capacity) {
            Ok(buffer) => buffer,
            Err(error) => {
                debug!("failed to grow from {} to {} slots: {}", self.capacity(), new_capacity, error);
                return Err(error)
            }
        };

        trace!(
            "reallocating from {} to {} slots, moving {} elements",
            self.capacity(),
            new_capacity,
            self.len
        );

        // Safety
        //
        // * the first `len` slots of the old buffer are initialized
        // * the new buffer has at least `len` slots, and doesn't overlap the old one
        // * after the swap the old buffer only releases its allocation,
        //   so the moved-out values are not dropped twice
        unsafe {
            ptr::copy_nonoverlapping(self.buffer.as_ptr(), new_buffer.as_mut_ptr(), self.len);
        }
        self.buffer.swap(&mut new_buffer);

        Ok(())
    }

    /// Grow by the doubling policy if there is no room for one more element
    fn try_grow_for_one(&mut self) -> AllocResult {
        if self.is_full() {
            self.try_recapacity(capacity::grown_capacity(self.len)?)
        } else {
            Ok(())
        }
    }

    /// Make room for `additional` more elements, growing by at least the doubling policy
    fn try_grow_for(&mut self, additional: usize) -> AllocResult {
        if self.remaining_capacity() >= additional {
            return Ok(())
        }

        let required = match self.len.checked_add(additional) {
            Some(required) => required,
            None => return Err(AllocError::CapacityOverflow { requested: usize::MAX }),
        };
        let doubled = capacity::grown_capacity(self.len).unwrap_or(required);
        self.try_recapacity(required.max(doubled))
    }

    /// Grow the capacity to exactly `new_capacity`, if it is larger than the
    /// current capacity. This never shrinks the capacity and never changes the
    /// length.
    ///
    /// Note that unlike [`Vec::reserve`](alloc::vec::Vec::reserve) the argument is the total capacity,
    /// not the number of additional elements.
    ///
    /// # Panics
    ///
    /// Panics or aborts if the allocation fails
    pub fn reserve(&mut self, new_capacity: usize) {
        if let Err(error) = self.try_reserve(new_capacity) {
            error.handle()
        }
    }

    /// Grow the capacity to exactly `new_capacity`, if it is larger than the
    /// current capacity.
    ///
    /// # Errors
    ///
    /// If the allocation fails, in which case the vector is unchanged
    pub fn try_reserve(&mut self, new_capacity: usize) -> AllocResult {
        if new_capacity > self.capacity() {
            self.try_recapacity(new_capacity)
        } else {
            Ok(())
        }
    }

    /// Shortens the vector, keeping the first len elements and dropping the rest.
    ///
    /// If len is greater than the vector's current length, this has no effect.
    ///
    /// Note that this method has no effect on the allocated capacity of the vector.
    pub fn truncate(&mut self, len: usize) {
        if let Some(diff) = self.len.checked_sub(len) {
            // # Safety
            //
            // * the given length is smaller than the current length, so
            //   all the elements must be initialized
            // * the elements from `len..self.len()` are valid,
            //   and should be dropped
            unsafe {
                self.len = len;
                let ptr = self.as_mut_ptr().add(len);
                ptr::drop_in_place(ptr::slice_from_raw_parts_mut(ptr, diff));
            }
        }
    }

    /// Clears the vector, removing all values.
    ///
    /// Note that this method has no effect on the allocated capacity of the vector.
    pub fn clear(&mut self) { self.truncate(0); }

    /// Write the first `additional` items of `values` after the last element.
    ///
    /// The capacity must already have room for them.
    fn extend_with<I: IntoIterator<Item = T>>(&mut self, additional: usize, values: I) {
        assert!(
            additional <= self.remaining_capacity(),
            "Tried to extend past the capacity"
        );

        let ptr = self.buffer.as_mut_ptr();
        let mut local_len = SetLenOnDrop::new(&mut self.len);

        for value in values.into_iter().take(additional) {
            // Safety
            //
            // there is room for `additional` elements after the initial length
            unsafe { ptr.add(local_len.current()).write(value) };
            local_len.increment_len(1);
        }
    }

    /// Resizes the `SimpleVec` in-place so that `len` is equal to `new_len`.
    ///
    /// If `new_len` is greater than `len`, the capacity grows to exactly
    /// `new_len` if needed and each additional slot is filled with
    /// [`Default::default`]. If `new_len` is less than `len`, the `SimpleVec`
    /// is simply truncated.
    ///
    /// # Panics
    ///
    /// Panics or aborts if the allocation fails
    pub fn resize(&mut self, new_len: usize)
    where
        T: Default,
    {
        self.resize_with(new_len, T::default);
    }

    /// Resizes the `SimpleVec` in-place so that `len` is equal to `new_len`,
    /// see [`SimpleVec::resize`]
    ///
    /// # Errors
    ///
    /// If the allocation fails, in which case the vector is unchanged
    pub fn try_resize(&mut self, new_len: usize) -> AllocResult
    where
        T: Default,
    {
        self.try_resize_with(new_len, T::default)
    }

    /// Resizes the `SimpleVec` in-place so that len is equal to `new_len`.
    ///
    /// If `new_len` is greater than `len`, the `SimpleVec` is extended by the
    /// difference, with each additional slot filled with the result of calling
    /// the closure `value`.
    ///
    /// # Panics
    ///
    /// Panics or aborts if the allocation fails
    ///
    /// # Panic behavior
    ///
    /// If `value` panics, all values it produced so far stay in the vector
    pub fn resize_with<F: FnMut() -> T>(&mut self, new_len: usize, value: F) {
        if let Err(error) = self.try_resize_with(new_len, value) {
            error.handle()
        }
    }

    /// Resizes the `SimpleVec` in-place so that len is equal to `new_len`,
    /// see [`SimpleVec::resize_with`]
    ///
    /// # Errors
    ///
    /// If the allocation fails, in which case the vector is unchanged
    pub fn try_resize_with<F: FnMut() -> T>(&mut self, new_len: usize, value: F) -> AllocResult {
        match new_len.checked_sub(self.len) {
            Some(0) => (),
            Some(additional) => {
                self.try_reserve(new_len)?;
                self.extend_with(additional, repeat_with(value));
            }
            None => self.truncate(new_len),
        }
        Ok(())
    }

    /// Appends an element to the back of a collection, doubling the capacity
    /// if the collection is full.
    ///
    /// # Panics
    ///
    /// Panics or aborts if the allocation fails
    pub fn push(&mut self, value: T) -> &mut T {
        if let Err(error) = self.try_grow_for_one() {
            error.handle()
        }

        // Safety
        //
        // * we reserved enough space for 1 more element
        unsafe { self.push_unchecked(value) }
    }

    /// Appends an element to the back of a collection, doubling the capacity
    /// if the collection is full.
    ///
    /// # Errors
    ///
    /// If the allocation fails, in which case the vector is unchanged and
    /// `value` is dropped
    pub fn try_push(&mut self, value: T) -> AllocResult<&mut T> {
        self.try_grow_for_one()?;

        // Safety
        //
        // * we reserved enough space for 1 more element
        Ok(unsafe { self.push_unchecked(value) })
    }

    /// Appends an element to the back of a collection.
    ///
    /// # Safety
    ///
    /// the collection must not be full
    pub unsafe fn push_unchecked(&mut self, value: T) -> &mut T {
        debug_assert_ne!(
            self.len,
            self.capacity(),
            "Tried to `push_unchecked` past capacity! This is UB in release mode"
        );

        // Safety
        //
        // the collection isn't full, so `ptr.add(len)` is valid to write
        unsafe {
            let len = self.len;
            let ptr = self.as_mut_ptr().add(len);
            ptr.write(value);
            self.len = len + 1;
            &mut *ptr
        }
    }

    /// Inserts an element at position index within the vector,
    /// shifting all elements after it to the right.
    ///
    /// The capacity doubles if the collection is full. Returns a reference
    /// to the inserted element, which lives at `index`.
    ///
    /// # Panics
    ///
    /// * Panics or aborts if the allocation fails
    /// * Panics if index > len.
    pub fn insert(&mut self, index: usize, value: T) -> &mut T {
        if let Err(error) = self.try_insert_prepare(index) {
            error.handle()
        }

        // Safety
        //
        // * we reserved enough space for 1 more element
        // * we verified that index is in bounds
        unsafe { self.insert_unchecked(index, value) }
    }

    /// Inserts an element at position index within the vector,
    /// shifting all elements after it to the right.
    ///
    /// # Errors
    ///
    /// If the allocation fails, in which case the vector is unchanged and
    /// `value` is dropped
    ///
    /// # Panics
    ///
    /// Panics if index > len.
    pub fn try_insert(&mut self, index: usize, value: T) -> AllocResult<&mut T> {
        self.try_insert_prepare(index)?;

        // Safety
        //
        // * we reserved enough space for 1 more element
        // * we verified that index is in bounds
        Ok(unsafe { self.insert_unchecked(index, value) })
    }

    fn try_insert_prepare(&mut self, index: usize) -> AllocResult {
        #[cold]
        #[inline(never)]
        fn insert_fail(index: usize, len: usize) -> ! {
            panic!("Tried to insert at {}, but length is {}", index, len);
        }

        if index > self.len {
            insert_fail(index, self.len)
        }

        self.try_grow_for_one()
    }

    /// Inserts an element at position index within the vector,
    /// shifting all elements after it to the right.
    ///
    /// # Safety
    ///
    /// * the collection must not be full
    /// * the index must be in bounds
    pub unsafe fn insert_unchecked(&mut self, index: usize, value: T) -> &mut T {
        let len = self.len;

        debug_assert_ne!(
            len,
            self.capacity(),
            "Tried to `insert_unchecked` past capacity! This is UB in release mode"
        );
        debug_assert!(
            index <= len,
            "Tried to insert at {} into a {} length vector! This is UB in release mode",
            index,
            len,
        );

        // Safety
        //
        // * the index is in bounds
        // * the collection isn't full so `ptr.add(len)` is valid to write 1 element
        // * `copy` handles the overlap, shifting the tail back-to-front
        unsafe {
            let ptr = self.as_mut_ptr().add(index);
            ptr.add(1).copy_from(ptr, len - index);
            ptr.write(value);
            self.len = len + 1;
            &mut *ptr
        }
    }

    /// Removes the last element from a vector and returns it
    ///
    /// # Panics
    ///
    /// Panics if the collection is empty
    pub fn pop(&mut self) -> T {
        #[cold]
        #[inline(never)]
        fn pop_fail() -> ! {
            panic!("Tried to pop an element from an empty vector");
        }

        if self.is_empty() {
            pop_fail()
        }

        // Safety
        //
        // * we verify we are not empty
        unsafe { self.pop_unchecked() }
    }

    /// Removes the last element from a vector and returns it,
    /// or `None` if it is empty
    pub fn try_pop(&mut self) -> Option<T> {
        if self.is_empty() {
            None
        } else {
            // Safety
            //
            // * we verify we are not empty
            unsafe { Some(self.pop_unchecked()) }
        }
    }

    /// Removes the last element from a vector and returns it
    ///
    /// # Safety
    ///
    /// the collection must not be empty
    pub unsafe fn pop_unchecked(&mut self) -> T {
        let len = self.len;
        debug_assert_ne!(
            len, 0,
            "Tried to `pop_unchecked` an empty vector! This is UB in release mode"
        );

        // Safety
        //
        // * the collection isn't empty, so `ptr.add(len - 1)` is valid to read
        unsafe {
            let len = len - 1;
            self.len = len;
            self.as_mut_ptr().add(len).read()
        }
    }

    /// Removes and returns the element at position index within the vector,
    /// shifting all elements after it to the left.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> T {
        #[cold]
        #[inline(never)]
        fn remove_fail(index: usize, len: usize) -> ! {
            panic!("Tried to remove an element at {}, but length is {}", index, len);
        }

        if index >= self.len {
            remove_fail(index, self.len)
        }

        // Safety
        //
        // * we verify that the index is in bounds
        unsafe { self.remove_unchecked(index) }
    }

    /// Drops the element at position index within the vector,
    /// shifting all elements after it to the left.
    ///
    /// Returns the index of the element that followed the erased one,
    /// which is `len()` if the last element was erased.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn erase(&mut self, index: usize) -> usize {
        drop(self.remove(index));
        index
    }

    /// Removes and returns the element at position index within the vector,
    /// shifting all elements after it to the left.
    ///
    /// # Safety
    ///
    /// the collection must not be empty, and
    /// index must be in bounds
    pub unsafe fn remove_unchecked(&mut self, index: usize) -> T {
        let len = self.len;

        debug_assert!(
            index < len,
            "Tried to remove an element at index {} from a {} length vector! This is UB in release mode",
            index,
            len,
        );

        // Safety
        //
        // * the index is in bounds
        // * the collection isn't empty, so `ptr.add(len - index - 1)` is valid to read
        unsafe {
            self.len = len - 1;
            let ptr = self.as_mut_ptr().add(index);
            let value = ptr.read();
            ptr.copy_from(ptr.add(1), len - index - 1);
            value
        }
    }

    /// Clones and appends all elements in a slice to the `SimpleVec`.
    ///
    /// # Panics
    ///
    /// Panics or aborts if the allocation fails
    pub fn extend_from_slice(&mut self, slice: &[T])
    where
        T: Clone,
    {
        if let Err(error) = self.try_grow_for(slice.len()) {
            error.handle()
        }

        self.extend_with(slice.len(), slice.iter().cloned());
    }
}
