use thiserror::Error;

/// Error returned by [`SimpleVec::at`](crate::SimpleVec::at) and
/// [`SimpleVec::at_mut`](crate::SimpleVec::at_mut) when the index is not
/// less than the length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("index {index} is out of range for a vector of length {len}")]
pub struct OutOfRange {
    /// The index that was accessed
    pub index: usize,
    /// The length of the vector at the time of the access
    pub len: usize,
}
