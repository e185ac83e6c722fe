//! Common Kernels
//!
//! Inner loops shared by the transform implementations. They work on a raw
//! slice plus an `offset` and `stride` taken from an already validated view.
//!
use std::f64::consts::TAU;

use num_complex::Complex64;
use num_traits::{One, Zero};

/// One output bin of a direct DFT:
/// `sum_{j < n} x[j] * exp(sign * i * 2 * pi * k * j / n)`,
/// where `x[j] = data[offset + j * stride]`.
#[multiversion::multiversion(targets(
    "x86_64+avx512f+avx512bw+avx512cd+avx512dq+avx512vl",
    "x86_64+avx2+fma",
    "x86_64+sse4.2",
    "x86+avx512f+avx512bw+avx512cd+avx512dq+avx512vl",
    "x86+avx2+fma",
    "x86+sse4.2",
    "x86+sse2",
    "aarch64+neon",
))]
#[inline]
pub fn dft_bin(
    data: &[Complex64],
    offset: usize,
    stride: usize,
    n: usize,
    k: usize,
    sign: f64,
) -> Complex64 {
    let step = sign * TAU / n as f64;
    let mut acc = Complex64::zero();

    data[offset..]
        .iter()
        .step_by(stride)
        .take(n)
        .enumerate()
        .for_each(|(j, x)| {
            // k * j wraps around the circle; reducing it keeps the angle small and exact
            let angle = step * ((k * j) % n) as f64;
            acc += x * Complex64::cis(angle);
        });

    acc
}

/// Radix-2 butterfly over `2 * half` samples whose two halves already hold
/// the transforms of the even and odd sub-sequences.
///
/// For `j < half`, with `w = wn^j`:
/// `lo[j], hi[j] = lo[j] + w * hi[j], lo[j] - w * hi[j]`
#[multiversion::multiversion(targets(
    "x86_64+avx512f+avx512bw+avx512cd+avx512dq+avx512vl",
    "x86_64+avx2+fma",
    "x86_64+sse4.2",
    "x86+avx512f+avx512bw+avx512cd+avx512dq+avx512vl",
    "x86+avx2+fma",
    "x86+sse4.2",
    "x86+sse2",
    "aarch64+neon",
))]
#[inline]
pub fn butterfly(data: &mut [Complex64], offset: usize, stride: usize, half: usize, wn: Complex64) {
    let mut w = Complex64::one();

    for j in 0..half {
        let lo = offset + j * stride;
        let hi = offset + (half + j) * stride;

        let t = w * data[hi];
        let u = data[lo];
        data[lo] = u + t;
        data[hi] = u - t;

        w *= wn;
    }
}
