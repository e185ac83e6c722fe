//! The contract shared by every transform implementation.
//!
//! Implementations only provide a padding rule and two kernels that work at an
//! exact length through strided views. Zero-padding on the way forward, length
//! checks and truncation on the way back are handled here, once, for all of them.
use std::f64::consts::TAU;

use num_complex::Complex64;
use num_traits::Zero;

use crate::error::FftError;
use crate::strided::{Strided, StridedMut};

/// The primitive `n`-th root of unity, `cos(2pi/n) + i*sin(2pi/n)`.
///
/// This is the `wn` handed to [`FourierTransform::forwards_impl`] and
/// [`FourierTransform::backwards_impl`].
pub fn root_of_unity(n: usize) -> Complex64 {
    let angle = TAU / n as f64;
    Complex64::new(angle.cos(), angle.sin())
}

/// A discrete Fourier transform implementation.
///
/// All implementations compute the same forward transform,
/// `X[k] = sum_j x[j] * exp(-i * 2pi * k * j / n)`, and its inverse scaled by `1/n`.
/// They only differ in speed and in the lengths they are able to work at.
///
/// Instances hold no per-call state, so one instance can serve any number of calls.
pub trait FourierTransform: Send + Sync {
    /// Identifier for this transform.
    fn name(&self) -> &str;

    /// Return true if the algorithm takes quadratic time (rather than n log n)
    fn is_quadratic(&self) -> bool;

    /// The length this transform actually works at for an `n`-sample input.
    /// Must be at least `n`.
    fn padded_size(&self, n: usize) -> usize;

    /// Forward kernel at length `n`, which is always a value returned by
    /// [`Self::padded_size`]. `wn` is [`root_of_unity`]`(n)`.
    /// `input` and `output` both hold exactly `n` samples.
    fn forwards_impl(&self, n: usize, wn: Complex64, input: Strided<'_>, output: StridedMut<'_>);

    /// Backward kernel at length `n`, including the `1/n` scaling.
    /// Same conventions as [`Self::forwards_impl`].
    fn backwards_impl(&self, n: usize, wn: Complex64, input: Strided<'_>, output: StridedMut<'_>);

    /// Does a forward transform.
    ///
    /// If the implementation needs a longer input, `input` is zero-padded on the
    /// right first, and the whole padded spectrum is returned: the output has
    /// `self.padded_size(input.len())` samples.
    ///
    /// # Errors
    ///
    /// Returns [`FftError::EmptyInput`] if `input` is empty, and
    /// [`FftError::InvalidPadding`] if the padding rule shrinks the input.
    fn forwards(&self, input: &[Complex64]) -> Result<Vec<Complex64>, FftError> {
        if input.is_empty() {
            return Err(FftError::EmptyInput);
        }

        let n = self.padded_size(input.len());
        if n < input.len() {
            return Err(FftError::InvalidPadding {
                len: input.len(),
                padded: n,
            });
        }

        let wn = root_of_unity(n);
        let mut result = vec![Complex64::zero(); n];

        if n == input.len() {
            self.forwards_impl(
                n,
                wn,
                Strided::contiguous(input),
                StridedMut::contiguous(&mut result),
            );
        } else {
            let mut buffer = input.to_vec();
            buffer.resize(n, Complex64::zero());
            self.forwards_impl(
                n,
                wn,
                Strided::contiguous(&buffer),
                StridedMut::contiguous(&mut result),
            );
        }

        Ok(result)
    }

    /// Does a backward transform, returning `n` samples.
    ///
    /// `n` defaults to `input.len()`; `Some(0)` means the same. The inverse is
    /// computed at `self.padded_size(n)` from the first that many samples of
    /// `input`, then cut down to `n`. That is exactly `n` whenever `n` already
    /// suits the implementation, and it is what lets
    /// `backwards(&forwards(x)?, Some(x.len()))` give back `x` after padding.
    ///
    /// # Errors
    ///
    /// - [`FftError::EmptyInput`] if `input` is empty
    /// - [`FftError::OutputTooLong`] if `n > input.len()`
    /// - [`FftError::IncompatibleLength`] if `n` pads up to more samples than `input` has
    fn backwards(&self, input: &[Complex64], n: Option<usize>) -> Result<Vec<Complex64>, FftError> {
        if input.is_empty() {
            return Err(FftError::EmptyInput);
        }

        let n = match n {
            None | Some(0) => input.len(),
            Some(n) if n > input.len() => {
                return Err(FftError::OutputTooLong {
                    requested: n,
                    available: input.len(),
                });
            }
            Some(n) => n,
        };

        let padded = self.padded_size(n);
        if padded < n {
            return Err(FftError::InvalidPadding { len: n, padded });
        }
        if padded > input.len() {
            return Err(FftError::IncompatibleLength {
                requested: n,
                padded,
                available: input.len(),
            });
        }

        let wn = root_of_unity(padded);
        let mut result = vec![Complex64::zero(); padded];
        self.backwards_impl(
            padded,
            wn,
            Strided::contiguous(&input[..padded]),
            StridedMut::contiguous(&mut result),
        );

        result.truncate(n);
        Ok(result)
    }
}
