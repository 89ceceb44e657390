// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! GrowBuffer - growable contiguous typed buffer.
//!
//! Size and capacity are tracked independently; the resize family gives
//! callers explicit control over when storage is preserved, discarded,
//! grown or shrunk.

use core::fmt;
use core::mem;
use core::ops::{AddAssign, DivAssign, Index, IndexMut, MulAssign, SubAssign};
use core::ptr;
use core::slice;

use num_traits::AsPrimitive;

use crate::column::Columns;
use crate::error::AllocError;
use crate::raw::RawStorage;

/// A growable, contiguous, homogeneously typed buffer.
///
/// Logical size and allocated capacity are independent: `len()` counts
/// the live elements, `capacity()` the slots storage exists for, and
/// `capacity() >= len()` always holds. Slots in `[len, capacity)` and
/// slots exposed by the no-fill resize variants hold unspecified values;
/// read only slots you have written or that an operation documents as
/// preserved or filled.
///
/// Elements are restricted to `T: Copy`, so no destructors run when the
/// size shrinks and storage exchange is a plain ownership transfer.
pub struct GrowBuffer<T: Copy> {
    storage: RawStorage<T>,
    len: usize,
}

impl<T: Copy> GrowBuffer<T> {
    /// An empty buffer: size 0, capacity 0, no allocation.
    pub const fn new() -> Self {
        Self {
            storage: RawStorage::empty(),
            len: 0,
        }
    }

    /// A buffer of `len` elements with unspecified values.
    ///
    /// Capacity equals `len` exactly.
    pub fn with_len(len: usize) -> Result<Self, AllocError> {
        Ok(Self {
            storage: RawStorage::allocate(len)?,
            len,
        })
    }

    /// A buffer of `len` elements, every one set to `value`.
    ///
    /// Capacity equals `len` exactly.
    pub fn filled(len: usize, value: T) -> Result<Self, AllocError> {
        let mut buffer = Self::with_len(len)?;
        buffer.write_range(0, len, value);

        Ok(buffer)
    }

    /// A copy of this buffer, sized to its live elements.
    ///
    /// The copy's capacity equals `self.len()`; slack capacity does not
    /// carry over.
    pub fn try_clone(&self) -> Result<Self, AllocError> {
        let storage = RawStorage::allocate(self.len)?;

        // SAFETY: both regions are valid for len elements and disjoint.
        unsafe { ptr::copy_nonoverlapping(self.ptr(), storage.as_ptr(), self.len) };

        Ok(Self {
            storage,
            len: self.len,
        })
    }

    /// A buffer converted element-by-element from a buffer of another
    /// numeric type.
    ///
    /// Each element is `src[i].as_()`, the `as`-cast conversion, so the
    /// usual numeric narrowing and widening rules apply. The result's
    /// size and capacity equal `src.len()`.
    pub fn converted_from<U>(src: &GrowBuffer<U>) -> Result<Self, AllocError>
    where
        U: Copy + AsPrimitive<T>,
        T: 'static,
    {
        let mut buffer = Self::with_len(src.len())?;
        for (i, value) in src.as_slice().iter().enumerate() {
            // SAFETY: i < capacity; the slot is being initialized.
            unsafe { buffer.ptr().add(i).write(value.as_()) };
        }

        Ok(buffer)
    }

    /// Replaces this buffer's contents with the converted elements of
    /// `src`, reallocating to exactly `src.len()` slots.
    pub fn convert_from<U>(&mut self, src: &GrowBuffer<U>) -> Result<(), AllocError>
    where
        U: Copy + AsPrimitive<T>,
        T: 'static,
    {
        self.resize_discard(src.len())?;
        for (i, value) in src.as_slice().iter().enumerate() {
            // SAFETY: i < capacity; the slot is being initialized.
            unsafe { self.ptr().add(i).write(value.as_()) };
        }

        Ok(())
    }

    /// Number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the buffer has no live elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots storage is currently allocated for.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.cap()
    }

    /// The live elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: the first len slots belong to this buffer's region.
        unsafe { slice::from_raw_parts(self.ptr(), self.len) }
    }

    /// The live elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: the first len slots belong to this buffer's region,
        // and &mut self guarantees exclusive access.
        unsafe { slice::from_raw_parts_mut(self.ptr(), self.len) }
    }

    /// Reference to the first element.
    ///
    /// Caller contract: `len() > 0`. Debug builds assert.
    pub fn front(&self) -> &T {
        debug_assert!(!self.is_empty(), "front() on empty buffer");

        // SAFETY: caller contract: slot 0 is live.
        unsafe { &*self.ptr() }
    }

    /// Mutable reference to the first element.
    ///
    /// Caller contract: `len() > 0`. Debug builds assert.
    pub fn front_mut(&mut self) -> &mut T {
        debug_assert!(!self.is_empty(), "front_mut() on empty buffer");

        // SAFETY: caller contract: slot 0 is live.
        unsafe { &mut *self.ptr() }
    }

    /// Reference to the last element.
    ///
    /// Caller contract: `len() > 0`. Debug builds assert.
    pub fn back(&self) -> &T {
        debug_assert!(!self.is_empty(), "back() on empty buffer");

        // SAFETY: caller contract: slot len - 1 is live.
        unsafe { &*self.ptr().add(self.len - 1) }
    }

    /// Mutable reference to the last element.
    ///
    /// Caller contract: `len() > 0`. Debug builds assert.
    pub fn back_mut(&mut self) -> &mut T {
        debug_assert!(!self.is_empty(), "back_mut() on empty buffer");

        // SAFETY: caller contract: slot len - 1 is live.
        unsafe { &mut *self.ptr().add(self.len - 1) }
    }

    /// Sets every live element to `value`.
    ///
    /// Size and capacity are unchanged. This is the broadcast
    /// counterpart of [`filled`](Self::filled).
    pub fn fill(&mut self, value: T) {
        self.write_range(0, self.len, value);
    }

    /// Resets the buffer to exactly `len` elements, every one set to
    /// `value`.
    ///
    /// Existing capacity is reused when `len` fits; otherwise storage is
    /// reallocated. Post-condition: `len() == len`, `capacity() >= len`.
    pub fn assign(&mut self, len: usize, value: T) -> Result<(), AllocError> {
        if len > self.capacity() {
            self.storage = RawStorage::allocate(len)?;
        }
        self.len = len;
        self.write_range(0, len, value);

        Ok(())
    }

    /// Preserving resize without fill.
    ///
    /// Sets the size to `len`. Within current capacity no reallocation
    /// occurs. Elements at `[0, min(old len, len))` keep their values;
    /// slots newly exposed by growth hold unspecified values. When `len`
    /// exceeds capacity, storage is reallocated to exactly `len` slots
    /// and the surviving prefix is copied over.
    pub fn resize(&mut self, len: usize) -> Result<(), AllocError> {
        if len > self.capacity() {
            self.reallocate_preserving(len, self.len.min(len))?;
        }
        self.len = len;

        Ok(())
    }

    /// Preserving resize with fill.
    ///
    /// Like [`resize`](Self::resize), except slots newly exposed by
    /// growth (`[old len, len)`) are set to `value`, whether or not a
    /// reallocation happened.
    pub fn resize_fill(&mut self, len: usize, value: T) -> Result<(), AllocError> {
        let old_len = self.len;
        self.resize(len)?;
        if len > old_len {
            self.write_range(old_len, len, value);
        }

        Ok(())
    }

    /// Non-preserving resize: discards prior contents and reallocates.
    ///
    /// Always allocates fresh storage of exactly `len` slots, even when
    /// the previous capacity already covered `len` — the observable
    /// post-condition is `capacity() == len`. All values are
    /// unspecified. Used when the caller will overwrite every element
    /// and wants excess capacity dropped.
    pub fn resize_discard(&mut self, len: usize) -> Result<(), AllocError> {
        self.storage = RawStorage::allocate(len)?;
        self.len = len;

        Ok(())
    }

    /// Non-preserving resize with fill.
    ///
    /// Same reallocation guarantee as
    /// [`resize_discard`](Self::resize_discard), with all `len` slots
    /// set to `value`.
    pub fn resize_discard_fill(&mut self, len: usize, value: T) -> Result<(), AllocError> {
        self.resize_discard(len)?;
        self.write_range(0, len, value);

        Ok(())
    }

    /// Grows capacity to exactly `cap` if it is larger than the current
    /// capacity; otherwise does nothing.
    ///
    /// Size and live element values never change.
    pub fn reserve(&mut self, cap: usize) -> Result<(), AllocError> {
        if cap <= self.capacity() {
            return Ok(());
        }

        self.reallocate_preserving(cap, self.len)
    }

    /// Appends `value`, growing capacity by doubling when full.
    ///
    /// A full buffer grows to `max(1, capacity * 2)` before the write,
    /// so a sequence of pushes is amortized O(1) per element.
    pub fn push(&mut self, value: T) -> Result<(), AllocError> {
        if self.len == self.capacity() {
            let grown = self
                .capacity()
                .checked_mul(2)
                .ok_or(AllocError::CapacityOverflow)?
                .max(1);
            self.reallocate_preserving(grown, self.len)?;
        }

        // SAFETY: len < capacity after the growth check.
        unsafe { self.ptr().add(self.len).write(value) };
        self.len += 1;

        Ok(())
    }

    /// Removes and returns the last element, or `None` when empty.
    ///
    /// Capacity is never reduced by this operation.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;

        // SAFETY: the slot at the old last index was live.
        Some(unsafe { self.ptr().add(self.len).read() })
    }

    /// Reallocates so that `capacity() == len()` exactly.
    ///
    /// A no-op when already equal; an empty buffer releases its
    /// allocation entirely. Reclaims slack after pushes and pops.
    pub fn shrink_to_fit(&mut self) -> Result<(), AllocError> {
        if self.capacity() == self.len {
            return Ok(());
        }

        self.reallocate_preserving(self.len, self.len)
    }

    /// Exchanges size, capacity and storage ownership with `other`.
    ///
    /// O(1), no element copies, no reallocation. Equivalent to
    /// `core::mem::swap` on the two values.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Returns a display adapter that renders the live elements as
    /// right-justified, space-separated columns.
    pub fn columns(&self) -> Columns<'_, T> {
        Columns::new(self)
    }

    #[inline]
    fn ptr(&self) -> *mut T {
        self.storage.as_ptr()
    }

    /// Writes `value` into the slots `[start, end)`.
    ///
    /// Caller contract: `end <= capacity()`.
    fn write_range(&mut self, start: usize, end: usize, value: T) {
        for i in start..end {
            // SAFETY: i < capacity; the slot belongs to this buffer.
            unsafe { self.ptr().add(i).write(value) };
        }
    }

    /// Moves to fresh storage of exactly `new_cap` slots, carrying the
    /// first `keep` elements over. The old region is released only after
    /// the new one is populated, so a failed allocation leaves the
    /// buffer untouched.
    fn reallocate_preserving(&mut self, new_cap: usize, keep: usize) -> Result<(), AllocError> {
        debug_assert!(keep <= new_cap);

        let storage = RawStorage::allocate(new_cap)?;

        // SAFETY: both regions are valid for keep elements and disjoint.
        unsafe { ptr::copy_nonoverlapping(self.ptr(), storage.as_ptr(), keep) };

        self.storage = storage;

        Ok(())
    }
}

impl<T: Copy> Default for GrowBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy> Clone for GrowBuffer<T> {
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(buffer) => buffer,
            Err(error) => error.handle(),
        }
    }
}

impl<T: Copy> fmt::Debug for GrowBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowBuffer")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .finish_non_exhaustive()
    }
}

impl<T: Copy + PartialEq> PartialEq for GrowBuffer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Copy + Eq> Eq for GrowBuffer<T> {}

impl<T: Copy> Index<usize> for GrowBuffer<T> {
    type Output = T;

    /// Caller contract: `index < len()`. No bounds check in release
    /// builds; debug builds assert.
    #[inline]
    fn index(&self, index: usize) -> &T {
        debug_assert!(
            index < self.len,
            "index {index} out of range for buffer of len {}",
            self.len
        );

        // SAFETY: caller contract: index < len.
        unsafe { &*self.ptr().add(index) }
    }
}

impl<T: Copy> IndexMut<usize> for GrowBuffer<T> {
    /// Caller contract: `index < len()`. No bounds check in release
    /// builds; debug builds assert.
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(
            index < self.len,
            "index {index} out of range for buffer of len {}",
            self.len
        );

        // SAFETY: caller contract: index < len.
        unsafe { &mut *self.ptr().add(index) }
    }
}

impl<T: Copy + AddAssign> AddAssign<T> for GrowBuffer<T> {
    fn add_assign(&mut self, rhs: T) {
        for value in self.as_mut_slice() {
            *value += rhs;
        }
    }
}

impl<T: Copy + SubAssign> SubAssign<T> for GrowBuffer<T> {
    fn sub_assign(&mut self, rhs: T) {
        for value in self.as_mut_slice() {
            *value -= rhs;
        }
    }
}

impl<T: Copy + MulAssign> MulAssign<T> for GrowBuffer<T> {
    fn mul_assign(&mut self, rhs: T) {
        for value in self.as_mut_slice() {
            *value *= rhs;
        }
    }
}

impl<T: Copy + DivAssign> DivAssign<T> for GrowBuffer<T> {
    /// Division by zero follows the element type's own arithmetic
    /// contract; the buffer does not guard against it.
    fn div_assign(&mut self, rhs: T) {
        for value in self.as_mut_slice() {
            *value /= rhs;
        }
    }
}

impl<T: Copy + AddAssign> AddAssign<&GrowBuffer<T>> for GrowBuffer<T> {
    /// Element-wise addition. Sizes must match.
    fn add_assign(&mut self, rhs: &GrowBuffer<T>) {
        assert_eq!(
            self.len, rhs.len,
            "element-wise add requires equal buffer lengths"
        );

        for (value, addend) in self.as_mut_slice().iter_mut().zip(rhs.as_slice()) {
            *value += *addend;
        }
    }
}

impl<T: Copy + SubAssign> SubAssign<&GrowBuffer<T>> for GrowBuffer<T> {
    /// Element-wise subtraction. Sizes must match.
    fn sub_assign(&mut self, rhs: &GrowBuffer<T>) {
        assert_eq!(
            self.len, rhs.len,
            "element-wise subtract requires equal buffer lengths"
        );

        for (value, subtrahend) in self.as_mut_slice().iter_mut().zip(rhs.as_slice()) {
            *value -= *subtrahend;
        }
    }
}
