//! The raw buffer type that backs up the [`SimpleVec`](crate::SimpleVec)

use core::alloc::Layout;

use alloc::alloc::handle_alloc_error;
use thiserror::Error;

mod buffer;
mod capacity;

pub use buffer::Buffer;

/// Error on failure to allocate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AllocError {
    /// The requested number of slots cannot be described by a [`Layout`]
    #[error("capacity overflow: {requested} slots do not fit in a single allocation")]
    CapacityOverflow {
        /// The number of slots that was asked for
        requested: usize,
    },
    /// The global allocator refused the request
    #[error("memory allocation of {} bytes failed", .layout.size())]
    AllocFailed {
        /// The layout that could not be allocated
        layout: Layout,
    },
}

/// Result of an allocation
pub type AllocResult<T = ()> = Result<T, AllocError>;

impl AllocError {
    /// Reports the error the way the standard collections do: capacity overflow
    /// panics, and allocator failure goes through [`handle_alloc_error`].
    #[cold]
    #[inline(never)]
    pub(crate) fn handle(self) -> ! {
        match self {
            Self::CapacityOverflow { requested } => capacity::capacity_overflow(requested),
            Self::AllocFailed { layout } => handle_alloc_error(layout),
        }
    }
}
