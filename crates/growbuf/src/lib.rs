// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable contiguous typed buffer with explicit capacity control.
//!
//! This crate provides [`GrowBuffer`], a low-level storage primitive
//! for numeric element types that tracks logical size and allocated
//! capacity independently and makes every capacity change explicit. It
//! is a building block for higher-level array abstractions that need
//! deterministic memory-growth behavior instead of a general-purpose
//! dynamic array.
//!
//! # Core Operations
//!
//! - **Preserving resize**: [`GrowBuffer::resize`] and
//!   [`GrowBuffer::resize_fill`] keep existing elements at their
//!   indices and reallocate only when the request exceeds capacity.
//! - **Non-preserving resize**: [`GrowBuffer::resize_discard`] and
//!   [`GrowBuffer::resize_discard_fill`] always reallocate to exactly
//!   the requested capacity, discarding prior contents.
//! - **Amortized append**: [`GrowBuffer::push`] doubles capacity when
//!   full; [`GrowBuffer::pop`] never shrinks it;
//!   [`GrowBuffer::shrink_to_fit`] reclaims the slack.
//! - **Element-wise arithmetic**: `+=`, `-=`, `*=`, `/=` against a
//!   scalar, and `+=` / `-=` against an equal-length buffer.
//! - **O(1) exchange**: [`GrowBuffer::swap`] transfers storage
//!   ownership without copying elements.
//!
//! Allocation failure is surfaced as [`AllocError`] and leaves the
//! buffer in its prior valid state. Out-of-range indexing and
//! empty-buffer access are caller contract violations, asserted in
//! debug builds only.
//!
//! # Example
//!
//! ```rust
//! use growbuf::{AllocError, GrowBuffer};
//!
//! fn example() -> Result<(), AllocError> {
//!     let mut buffer = GrowBuffer::filled(10, 22)?;
//!
//!     buffer += 2;
//!     assert_eq!(buffer, GrowBuffer::filled(10, 24)?);
//!
//!     buffer.reserve(12)?;
//!     buffer.push(33)?;
//!     assert_eq!(buffer.len(), 11);
//!     assert_eq!(buffer.capacity(), 12);
//!
//!     buffer.shrink_to_fit()?;
//!     assert_eq!(buffer.capacity(), 11);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Example: Cross-Type Copy
//!
//! ```rust
//! use growbuf::{AllocError, GrowBuffer};
//!
//! fn example() -> Result<(), AllocError> {
//!     let ints = GrowBuffer::filled(4, 7i32)?;
//!     let floats = GrowBuffer::<f32>::converted_from(&ints)?;
//!
//!     assert_eq!(floats, GrowBuffer::filled(4, 7.0f32)?);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod buffer;
mod column;
mod error;
mod raw;

pub use buffer::GrowBuffer;
pub use column::{ColumnFormat, Columns};
pub use error::AllocError;
