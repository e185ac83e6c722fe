//! Offset + stride views over sample buffers.
//!
//! Kernels address their input and output through these views instead of raw
//! pointers. The public constructors check that every element of the view lies
//! inside the borrowed slice; the views the kernels derive from them (even/odd
//! decimation, splitting into halves) stay in bounds by construction.
use num_complex::Complex64;

use crate::error::FftError;

fn check_bounds(available: usize, offset: usize, stride: usize, len: usize) -> Result<(), FftError> {
    let err = FftError::StrideOutOfBounds {
        offset,
        stride,
        len,
        available,
    };
    if stride == 0 {
        return Err(err);
    }
    if len == 0 {
        return if offset <= available { Ok(()) } else { Err(err) };
    }

    let last = (len - 1)
        .checked_mul(stride)
        .and_then(|span| span.checked_add(offset));
    match last {
        Some(last) if last < available => Ok(()),
        _ => Err(err),
    }
}

/// A read-only view of `len` samples, starting at `offset` and `stride` apart.
#[derive(Debug, Clone, Copy)]
pub struct Strided<'a> {
    data: &'a [Complex64],
    offset: usize,
    stride: usize,
    len: usize,
}

impl<'a> Strided<'a> {
    /// Create a view over `data`.
    ///
    /// # Errors
    ///
    /// Returns [`FftError::StrideOutOfBounds`] if `stride` is zero or the view
    /// would reach past the end of `data`.
    pub fn new(
        data: &'a [Complex64],
        offset: usize,
        stride: usize,
        len: usize,
    ) -> Result<Self, FftError> {
        check_bounds(data.len(), offset, stride, len)?;
        Ok(Self {
            data,
            offset,
            stride,
            len,
        })
    }

    /// View every element of `data`, in order.
    pub fn contiguous(data: &'a [Complex64]) -> Self {
        Self {
            data,
            offset: 0,
            stride: 1,
            len: data.len(),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    /// The `i`-th sample of the view.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`
    #[inline]
    pub fn get(&self, i: usize) -> Complex64 {
        assert!(i < self.len);
        self.data[self.offset + i * self.stride]
    }

    pub fn iter(&self) -> impl Iterator<Item = Complex64> + 'a {
        let data: &'a [Complex64] = self.data;
        data[self.offset.min(data.len())..]
            .iter()
            .step_by(self.stride)
            .take(self.len)
            .copied()
    }

    /// Keep only the first `len` samples of the view.
    pub fn truncate(self, len: usize) -> Self {
        Self {
            len: len.min(self.len),
            ..self
        }
    }

    /// Split into the even- and odd-indexed samples, each viewed at twice the stride.
    ///
    /// # Panics
    ///
    /// Panics if the view has an odd number of samples
    pub(crate) fn decimate(self) -> (Self, Self) {
        assert_eq!(self.len % 2, 0);
        let half = self.len / 2;
        let stride = self.stride * 2;
        let even = Self {
            data: self.data,
            offset: self.offset,
            stride,
            len: half,
        };
        let odd = Self {
            data: self.data,
            offset: self.offset + self.stride,
            stride,
            len: half,
        };
        (even, odd)
    }

    pub(crate) fn parts(&self) -> (&'a [Complex64], usize, usize) {
        (self.data, self.offset, self.stride)
    }
}

/// A writable view of `len` samples, starting at `offset` and `stride` apart.
#[derive(Debug)]
pub struct StridedMut<'a> {
    data: &'a mut [Complex64],
    offset: usize,
    stride: usize,
    len: usize,
}

impl<'a> StridedMut<'a> {
    /// Create a writable view over `data`.
    ///
    /// # Errors
    ///
    /// Returns [`FftError::StrideOutOfBounds`] if `stride` is zero or the view
    /// would reach past the end of `data`.
    pub fn new(
        data: &'a mut [Complex64],
        offset: usize,
        stride: usize,
        len: usize,
    ) -> Result<Self, FftError> {
        check_bounds(data.len(), offset, stride, len)?;
        Ok(Self {
            data,
            offset,
            stride,
            len,
        })
    }

    /// View every element of `data`, in order.
    pub fn contiguous(data: &'a mut [Complex64]) -> Self {
        let len = data.len();
        Self {
            data,
            offset: 0,
            stride: 1,
            len,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    /// # Panics
    ///
    /// Panics if `i >= self.len()`
    #[inline]
    pub fn get(&self, i: usize) -> Complex64 {
        assert!(i < self.len);
        self.data[self.offset + i * self.stride]
    }

    /// # Panics
    ///
    /// Panics if `i >= self.len()`
    #[inline]
    pub fn set(&mut self, i: usize, value: Complex64) {
        assert!(i < self.len);
        self.data[self.offset + i * self.stride] = value;
    }

    /// Borrow the same samples for a shorter lifetime.
    pub fn reborrow(&mut self) -> StridedMut<'_> {
        StridedMut {
            data: &mut *self.data,
            offset: self.offset,
            stride: self.stride,
            len: self.len,
        }
    }

    /// Split into the samples `[0, mid)` and `[mid, len)`.
    ///
    /// # Panics
    ///
    /// Panics if `mid > self.len()`
    pub fn split_at(self, mid: usize) -> (StridedMut<'a>, StridedMut<'a>) {
        assert!(mid <= self.len);
        let at = (self.offset + mid * self.stride).min(self.data.len());
        let (head, tail) = self.data.split_at_mut(at);
        let first = StridedMut {
            data: head,
            offset: self.offset,
            stride: self.stride,
            len: mid,
        };
        let second = StridedMut {
            data: tail,
            offset: 0,
            stride: self.stride,
            len: self.len - mid,
        };
        (first, second)
    }

    /// Multiply every sample of the view by `factor`.
    pub fn scale(&mut self, factor: f64) {
        for i in 0..self.len {
            let idx = self.offset + i * self.stride;
            self.data[idx] *= factor;
        }
    }

    pub(crate) fn parts_mut(&mut self) -> (&mut [Complex64], usize, usize) {
        (&mut *self.data, self.offset, self.stride)
    }
}
