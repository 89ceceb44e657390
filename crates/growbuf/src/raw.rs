// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Raw storage handle: an exclusively owned region of element slots.
//!
//! Holds no length information and never touches slot contents. Callers
//! track which slots are live; the handle only allocates and releases.

use core::alloc::Layout;
use core::mem;
use core::ptr::NonNull;

use alloc::alloc as heap;

use crate::error::AllocError;

/// An owning handle to `cap` contiguous slots of `T`.
///
/// `cap == 0` and zero-sized `T` hold a dangling pointer and own no
/// allocation. Dropping the handle releases the region without running
/// element destructors; the buffer on top restricts itself to `T: Copy`.
pub(crate) struct RawStorage<T> {
    ptr: NonNull<T>,
    cap: usize,
}

impl<T> RawStorage<T> {
    /// A handle with no allocation.
    pub(crate) const fn empty() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
        }
    }

    /// Allocates `cap` slots with unspecified contents.
    pub(crate) fn allocate(cap: usize) -> Result<Self, AllocError> {
        if cap == 0 || mem::size_of::<T>() == 0 {
            return Ok(Self {
                ptr: NonNull::dangling(),
                cap,
            });
        }

        let layout = Layout::array::<T>(cap).map_err(|_| AllocError::CapacityOverflow)?;

        // SAFETY: layout has non-zero size (cap > 0 and T is not zero-sized).
        let raw = unsafe { heap::alloc(layout) };

        match NonNull::new(raw.cast::<T>()) {
            Some(ptr) => Ok(Self { ptr, cap }),
            None => Err(AllocError::OutOfMemory {
                bytes: layout.size(),
            }),
        }
    }

    #[inline]
    pub(crate) fn cap(&self) -> usize {
        self.cap
    }

    #[inline]
    pub(crate) fn as_ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }
}

impl<T> Drop for RawStorage<T> {
    fn drop(&mut self) {
        if self.cap == 0 || mem::size_of::<T>() == 0 {
            return;
        }

        // Cannot fail here: the same layout computation succeeded at
        // allocation time.
        let layout = match Layout::array::<T>(self.cap) {
            Ok(layout) => layout,
            Err(_) => return,
        };

        // SAFETY: ptr came from heap::alloc with this exact layout and
        // has not been released before.
        unsafe { heap::dealloc(self.ptr.as_ptr().cast(), layout) };
    }
}

// Safety: the handle owns its region exclusively; sending it transfers
// that ownership.
unsafe impl<T: Send> Send for RawStorage<T> {}
unsafe impl<T: Sync> Sync for RawStorage<T> {}
