//! Capacity requests and the growth policy of [`SimpleVec`](crate::SimpleVec)

use crate::raw::{AllocError, AllocResult};

/// The capacity a full, non-empty vector multiplies its length by when it grows
pub(crate) const GROWTH_FACTOR: usize = 2;

/// The capacity an empty, zero-capacity vector grows to
pub(crate) const MIN_NON_ZERO_CAP: usize = 1;

/// The capacity a full vector of length `len` grows to: `max(2 * len, 1)`
pub(crate) fn grown_capacity(len: usize) -> AllocResult<usize> {
    match len.checked_mul(GROWTH_FACTOR) {
        Some(capacity) => Ok(capacity.max(MIN_NON_ZERO_CAP)),
        None => Err(AllocError::CapacityOverflow { requested: usize::MAX }),
    }
}

/// A request to create a [`SimpleVec`](crate::SimpleVec) with room for a
/// number of elements, created by [`reserve`].
///
/// ```rust
/// use simple_vec::{reserve, SimpleVec};
///
/// let vec = SimpleVec::<u8>::from(reserve(8));
/// assert!(vec.is_empty());
/// assert_eq!(vec.capacity(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CapacityRequest {
    capacity: usize,
}

impl CapacityRequest {
    /// Request room for `capacity` elements
    pub const fn new(capacity: usize) -> Self { Self { capacity } }

    /// The requested capacity
    pub const fn capacity(self) -> usize { self.capacity }
}

/// Request room for `capacity` elements, see [`CapacityRequest`]
pub const fn reserve(capacity: usize) -> CapacityRequest { CapacityRequest::new(capacity) }
