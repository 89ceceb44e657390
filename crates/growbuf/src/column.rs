// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Right-justified column rendering for element listings.
//!
//! The buffer itself performs no formatting; [`Columns`] is a read-only
//! collaborator that consumes the public slice view and per-type display
//! geometry from [`ColumnFormat`].

use core::fmt::{self, Display};

use crate::buffer::GrowBuffer;

/// Per-type display geometry for column-aligned listings.
pub trait ColumnFormat {
    /// Field width each element is right-justified to.
    const WIDTH: usize;

    /// Digits after the decimal point, for types that carry a fraction.
    const PRECISION: Option<usize>;
}

macro_rules! integer_column_format {
    ($($ty:ty => $width:expr),* $(,)?) => {
        $(
            impl ColumnFormat for $ty {
                const WIDTH: usize = $width;
                const PRECISION: Option<usize> = None;
            }
        )*
    };
}

// Widths cover the type's full decimal range including sign.
integer_column_format! {
    i8    => 5,
    u8    => 4,
    i16   => 7,
    u16   => 6,
    i32   => 12,
    u32   => 11,
    i64   => 21,
    u64   => 21,
    isize => 21,
    usize => 21,
}

impl ColumnFormat for f32 {
    const WIDTH: usize = 14;
    const PRECISION: Option<usize> = Some(6);
}

impl ColumnFormat for f64 {
    const WIDTH: usize = 23;
    const PRECISION: Option<usize> = Some(15);
}

/// Display adapter over a buffer's live elements.
///
/// Produced by [`GrowBuffer::columns`]. Prints nothing for an empty
/// buffer; otherwise each element is right-justified to the type's
/// column width, with single-space separators and no trailing
/// separator.
pub struct Columns<'a, T: Copy> {
    buffer: &'a GrowBuffer<T>,
}

impl<'a, T: Copy> Columns<'a, T> {
    pub(crate) fn new(buffer: &'a GrowBuffer<T>) -> Self {
        Self { buffer }
    }
}

impl<T> Display for Columns<'_, T>
where
    T: Copy + Display + ColumnFormat,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = T::WIDTH;

        for (i, value) in self.buffer.as_slice().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }

            match T::PRECISION {
                Some(precision) => write!(f, "{value:>width$.precision$}")?,
                None => write!(f, "{value:>width$}")?,
            }
        }

        Ok(())
    }
}
