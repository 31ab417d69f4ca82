use crate::raw::{capacity::array_layout, AllocError, AllocResult};

use alloc::{alloc::alloc, boxed::Box};
use core::{
    mem::{size_of, MaybeUninit},
    ptr::NonNull,
};

/// An exclusively owned heap allocation of `capacity` uninitialized slots.
///
/// A `Buffer` never tracks which slots hold live values, and it never drops
/// them: dropping a `Buffer` only releases the allocation. The owner (usually
/// a [`SimpleVec`](crate::SimpleVec)) is responsible for the values.
///
/// A zero-capacity buffer, or a buffer of zero-sized items, does not allocate
/// and holds a dangling pointer that must never be dereferenced.
///
/// `Buffer` is deliberately not [`Clone`]: every transfer of ownership goes
/// through a move or [`Buffer::swap`].
pub struct Buffer<T>(Box<[MaybeUninit<T>]>);

impl<T> Buffer<T> {
    /// Create a new zero-capacity buffer, this never allocates
    pub fn empty() -> Self {
        // Safety
        //
        // a zero length slice may use a dangling pointer
        unsafe { Self::from_raw_parts(NonNull::dangling(), 0) }
    }

    /// Allocate a buffer with exactly `capacity` slots
    ///
    /// # Panics
    ///
    /// Panics if `capacity` slots overflow the maximum allocation size, and
    /// calls [`handle_alloc_error`](alloc::alloc::handle_alloc_error) if the
    /// allocator fails
    pub fn new(capacity: usize) -> Self {
        match Self::try_new(capacity) {
            Ok(buffer) => buffer,
            Err(error) => error.handle(),
        }
    }

    /// Allocate a buffer with exactly `capacity` slots
    ///
    /// # Errors
    ///
    /// Returns [`AllocError::CapacityOverflow`] if the slots can't be
    /// described by a layout, or [`AllocError::AllocFailed`] if the allocator
    /// refuses the request.
    pub fn try_new(capacity: usize) -> AllocResult<Self> {
        if capacity == 0 || size_of::<T>() == 0 {
            // Safety
            //
            // nothing is allocated for an empty layout, so a dangling pointer is valid
            return Ok(unsafe { Self::from_raw_parts(NonNull::dangling(), capacity) });
        }

        let layout = array_layout::<T>(capacity)?;

        // Safety
        //
        // the layout has a non-zero size
        let ptr = unsafe { alloc(layout) };

        match NonNull::new(ptr) {
            // Safety
            //
            // we have allocated a pointer in global that has `capacity` slots available
            Some(ptr) => Ok(unsafe { Self::from_raw_parts(ptr.cast(), capacity) }),
            None => Err(AllocError::AllocFailed { layout }),
        }
    }

    /// Create a new `Buffer` from the given pointer and capacity
    ///
    /// # Safety
    ///
    /// If the capacity is non-zero and `T` is not zero-sized
    /// * You must have allocated the pointer from the global allocator
    ///   with the layout of `[T; capacity]`
    /// * The pointer must be valid to read-write for the range `ptr..ptr.add(capacity)`
    /// * Nothing else may own the allocation
    pub unsafe fn from_raw_parts(ptr: NonNull<T>, capacity: usize) -> Self {
        let ptr = core::ptr::slice_from_raw_parts_mut(ptr.as_ptr().cast::<MaybeUninit<T>>(), capacity);
        Self(unsafe { Box::from_raw(ptr) })
    }

    /// Convert a `Buffer` into a pointer and capacity, without
    /// deallocating the storage
    pub fn into_raw_parts(self) -> (NonNull<T>, usize) {
        let ptr = Box::into_raw(self.0);
        let capacity = ptr.len();
        // Safety
        //
        // `Box::into_raw` never returns null
        unsafe { (NonNull::new_unchecked(ptr.cast()), capacity) }
    }

    /// The number of slots in this buffer
    #[inline]
    pub fn capacity(&self) -> usize { self.0.len() }

    /// A pointer to the first slot, dangling if nothing was allocated
    #[inline]
    pub fn as_ptr(&self) -> *const T { self.0.as_ptr().cast() }

    /// A mutable pointer to the first slot, dangling if nothing was allocated
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T { self.0.as_mut_ptr().cast() }

    /// Access the slot at `index` without a bounds check
    ///
    /// # Safety
    ///
    /// `index` must be less than `capacity()`
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &MaybeUninit<T> {
        debug_assert!(
            index < self.capacity(),
            "Tried to access slot {} of a buffer with capacity {}! This is UB in release mode",
            index,
            self.capacity(),
        );
        unsafe { self.0.get_unchecked(index) }
    }

    /// Mutably access the slot at `index` without a bounds check
    ///
    /// # Safety
    ///
    /// `index` must be less than `capacity()`
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut MaybeUninit<T> {
        debug_assert!(
            index < self.capacity(),
            "Tried to access slot {} of a buffer with capacity {}! This is UB in release mode",
            index,
            self.capacity(),
        );
        unsafe { self.0.get_unchecked_mut(index) }
    }

    /// Exchange the allocations of two buffers.
    ///
    /// Guaranteed to not panic/abort/allocate
    #[inline]
    pub fn swap(&mut self, other: &mut Self) { core::mem::swap(&mut self.0, &mut other.0) }
}

impl<T> Default for Buffer<T> {
    fn default() -> Self { Self::empty() }
}

impl<T> AsRef<[MaybeUninit<T>]> for Buffer<T> {
    fn as_ref(&self) -> &[MaybeUninit<T>] { &self.0 }
}

impl<T> AsMut<[MaybeUninit<T>]> for Buffer<T> {
    fn as_mut(&mut self) -> &mut [MaybeUninit<T>] { &mut self.0 }
}

impl<T> core::fmt::Debug for Buffer<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Buffer")
            .field("ptr", &self.as_ptr())
            .field("capacity", &self.capacity())
            .finish()
    }
}
