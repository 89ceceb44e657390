// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for growbuf.
use core::alloc::Layout;

use thiserror::Error;

/// Errors from storage allocation.
///
/// Every operation that may allocate returns `Result<_, AllocError>`.
/// On failure the buffer keeps its prior size, capacity and contents.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum AllocError {
    /// The requested element count overflows the maximum allocation size.
    #[error("requested capacity overflows the maximum allocation size")]
    CapacityOverflow,

    /// The allocator returned no memory for the request.
    #[error("allocation of {bytes} bytes failed")]
    OutOfMemory {
        /// Size of the failed request in bytes.
        bytes: usize,
    },
}

impl AllocError {
    /// Aborts through the global allocation-error hook.
    ///
    /// Used where an infallible API (such as `Clone`) has no channel to
    /// surface the error to the caller.
    pub fn handle(self) -> ! {
        let layout = match self {
            Self::CapacityOverflow => Layout::new::<u8>(),
            Self::OutOfMemory { bytes } => {
                Layout::from_size_align(bytes, 1).unwrap_or(Layout::new::<u8>())
            }
        };

        alloc::alloc::handle_alloc_error(layout)
    }
}
