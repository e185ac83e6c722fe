pub extern crate rustfft;

// export rustfft to fourierkit
use rand::{distributions::Uniform, prelude::*};
use rustfft::num_complex::Complex64;
use rustfft::num_traits::Float;

/// Asserts that two fp numbers are approximately equal.
///
/// # Panics
///
/// Panics if `actual` and `expected` are too far from each other
#[allow(dead_code)]
#[track_caller]
pub fn assert_float_closeness<T: Float + std::fmt::Display>(actual: T, expected: T, epsilon: T) {
    if (actual - expected).abs() >= epsilon {
        panic!(
            "Assertion failed: {actual} too far from expected value {expected} (with epsilon {epsilon})",
        );
    }
}

/// Asserts that two complex numbers are approximately equal, component-wise.
///
/// # Panics
///
/// Panics if either component of `actual` is too far from the one in `expected`
#[track_caller]
pub fn assert_complex_closeness(actual: Complex64, expected: Complex64, epsilon: f64) {
    if (actual.re - expected.re).abs() >= epsilon || (actual.im - expected.im).abs() >= epsilon {
        panic!(
            "Assertion failed: {actual} too far from expected value {expected} (with epsilon {epsilon})",
        );
    }
}

/// Generate a random, complex signal of length `len`, with both components
/// drawn uniformly from `[-1, 1)`.
pub fn gen_random_signal(len: usize) -> Vec<Complex64> {
    gen_random_signal_with(&mut thread_rng(), len)
}

/// Same as [`gen_random_signal`], but draws from the provided generator so that
/// runs can be reproduced from a seed.
pub fn gen_random_signal_with<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<Complex64> {
    let uniform_dist = Uniform::new(-1.0, 1.0);
    (0..len)
        .map(|_| Complex64::new(uniform_dist.sample(rng), uniform_dist.sample(rng)))
        .collect()
}

/// Computes the forward transform of `signal` with RustFFT, for use as a reference.
pub fn reference_forward(signal: &[Complex64]) -> Vec<Complex64> {
    let mut buffer = signal.to_vec();
    let mut planner = rustfft::FftPlanner::new();
    let fft = planner.plan_fft_forward(buffer.len());
    fft.process(&mut buffer);
    buffer
}
