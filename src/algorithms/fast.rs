//! Radix-2 FFT
//!
//! Recursive decimation-in-time Cooley-Tukey transform. Each level transforms
//! the even- and odd-indexed samples (read at twice the stride) into the first
//! and second half of its output, then merges the halves with one pass of
//! butterflies.
//!
//! Only power-of-two lengths are supported, so inputs are zero-padded up to the
//! next power of two. Recursion depth is `log2(n)`.
//!
//! [1] https://en.wikipedia.org/wiki/Cooley%E2%80%93Tukey_FFT_algorithm
//!
use num_complex::Complex64;

use crate::kernels::common::butterfly;
use crate::strided::{Strided, StridedMut};
use crate::transform::FourierTransform;

/// Registry name of the radix-2 transform.
pub const NAME: &str = "fourierkit.fast_fourier_transform";

/// `O(n log n)` radix-2 FFT, padding its input to a power of two.
#[derive(Debug, Default, Clone, Copy)]
pub struct FastFourierTransform;

impl FastFourierTransform {
    pub fn new() -> Self {
        Self
    }
}

/// `output[k] = sum_j input[j] * w^(j * k)` for a power-of-two `n`,
/// where `w` is a primitive `n`-th root of unity.
///
/// # Panics
///
/// Panics if `n` is not a power of two, or if either view is shorter than `n`
fn radix2(n: usize, w: Complex64, input: Strided<'_>, mut output: StridedMut<'_>) {
    assert!(n.is_power_of_two());

    match n {
        1 => output.set(0, input.get(0)),
        2 => {
            let (a, b) = (input.get(0), input.get(1));
            output.set(0, a + b);
            output.set(1, a - b);
        }
        _ => {
            let half = n / 2;
            let (even, odd) = input.truncate(n).decimate();

            let (lo, hi) = output.reborrow().split_at(half);
            radix2(half, w * w, even, lo);
            radix2(half, w * w, odd, hi);

            let (data, offset, stride) = output.parts_mut();
            butterfly(data, offset, stride, half, w);
        }
    }
}

impl FourierTransform for FastFourierTransform {
    fn name(&self) -> &str {
        NAME
    }

    fn is_quadratic(&self) -> bool {
        false
    }

    /// Standard radix-2 FFT only supports binary power lengths
    fn padded_size(&self, n: usize) -> usize {
        n.max(1).next_power_of_two()
    }

    fn forwards_impl(&self, n: usize, wn: Complex64, input: Strided<'_>, output: StridedMut<'_>) {
        // forward transforms rotate clockwise: exp(-2pi i / n)
        radix2(n, wn.inv(), input, output);
    }

    fn backwards_impl(&self, n: usize, wn: Complex64, input: Strided<'_>, mut output: StridedMut<'_>) {
        // the forward kernel again, on the reciprocal of the forward root (`wn` itself)
        radix2(n, wn, input, output.reborrow());
        output.scale(1.0 / n as f64);
    }
}
