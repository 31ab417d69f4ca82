use core::alloc::Layout;

use super::{AllocError, AllocResult};

/// The layout of `capacity` contiguous `T`s
pub(in crate::raw) fn array_layout<T>(capacity: usize) -> AllocResult<Layout> {
    Layout::array::<T>(capacity).map_err(|_| AllocError::CapacityOverflow { requested: capacity })
}

#[cold]
#[inline(never)]
pub(in crate::raw) fn capacity_overflow(requested: usize) -> ! {
    panic!("Tried to allocate {} slots, but that overflows the maximum allocation size", requested)
}
