//! Direct DFT
//!
//! Evaluates the defining sum for every output bin. Quadratic in the length,
//! but it works for any `n >= 1` without padding, primes included, which makes
//! it the reference the other implementations are checked against.
//!
use num_complex::Complex64;

use crate::kernels::common::dft_bin;
use crate::strided::{Strided, StridedMut};
use crate::transform::FourierTransform;

/// Registry name of the direct transform.
pub const NAME: &str = "fourierkit.direct_fourier_transform";

/// `O(n^2)` DFT, usable at every length.
#[derive(Debug, Default, Clone, Copy)]
pub struct DirectFourierTransform;

impl DirectFourierTransform {
    pub fn new() -> Self {
        Self
    }
}

/// Fill every bin of `output` with the DFT of `input` in the direction given by `sign`.
fn direct_dft(n: usize, sign: f64, input: Strided<'_>, mut output: StridedMut<'_>) {
    assert!(n > 0);
    let (data, offset, stride) = input.parts();

    for k in 0..n {
        output.set(k, dft_bin(data, offset, stride, n, k, sign));
    }
}

impl FourierTransform for DirectFourierTransform {
    fn name(&self) -> &str {
        NAME
    }

    fn is_quadratic(&self) -> bool {
        true
    }

    /// We can do any size transform
    fn padded_size(&self, n: usize) -> usize {
        n
    }

    fn forwards_impl(&self, n: usize, _wn: Complex64, input: Strided<'_>, output: StridedMut<'_>) {
        direct_dft(n, -1.0, input, output);
    }

    fn backwards_impl(&self, n: usize, _wn: Complex64, input: Strided<'_>, mut output: StridedMut<'_>) {
        direct_dft(n, 1.0, input, output.reborrow());
        output.scale(1.0 / n as f64);
    }
}

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use rand::{rngs::StdRng, SeedableRng};
    use utilities::{assert_complex_closeness, gen_random_signal_with, reference_forward};

    use super::*;
    use crate::transform::root_of_unity;

    #[test]
    fn metadata() {
        let t = DirectFourierTransform::new();
        assert_eq!(t.name(), NAME);
        assert!(t.is_quadratic());
        for n in 1..=100 {
            assert_eq!(t.padded_size(n), n);
        }
    }

    #[test]
    fn unit_impulse_is_flat() {
        let input = vec![
            Complex64::new(1.0, 0.0),
            Complex64::zero(),
            Complex64::zero(),
            Complex64::zero(),
        ];
        let out = DirectFourierTransform.forwards(&input).unwrap();
        assert_eq!(out.len(), 4);
        for z in out {
            assert_complex_closeness(z, Complex64::new(1.0, 0.0), 1e-9);
        }
    }

    #[test]
    fn dc_signal() {
        for n in [1, 2, 3, 7, 13, 64, 100] {
            let input = vec![Complex64::new(2.5, 0.0); n];
            let out = DirectFourierTransform.forwards(&input).unwrap();
            assert_eq!(out[0], Complex64::new(2.5 * n as f64, 0.0));
            for z in &out[1..] {
                assert_complex_closeness(*z, Complex64::zero(), 1e-9);
            }
        }
    }

    #[test]
    fn matches_rustfft_at_every_length() {
        let mut rng = StdRng::seed_from_u64(7);
        for n in 1..=40 {
            let signal = gen_random_signal_with(&mut rng, n);
            let expected = reference_forward(&signal);
            let actual = DirectFourierTransform.forwards(&signal).unwrap();
            for (a, e) in actual.iter().zip(expected.iter()) {
                assert_complex_closeness(*a, *e, 1e-9);
            }
        }
    }

    #[test]
    fn round_trip() {
        let mut rng = StdRng::seed_from_u64(11);
        for n in 1..=64 {
            let signal = gen_random_signal_with(&mut rng, n);
            let spectrum = DirectFourierTransform.forwards(&signal).unwrap();
            let back = DirectFourierTransform.backwards(&spectrum, Some(n)).unwrap();
            assert_eq!(back.len(), n);
            for (a, e) in back.iter().zip(signal.iter()) {
                assert_complex_closeness(*a, *e, 1e-9);
            }
        }
    }

    #[test]
    fn backwards_at_a_shorter_length_reads_the_leading_inputs() {
        let mut rng = StdRng::seed_from_u64(3);
        let signal = gen_random_signal_with(&mut rng, 5);
        let spectrum = DirectFourierTransform.forwards(&signal).unwrap();

        let mut longer = spectrum.clone();
        longer.extend(gen_random_signal_with(&mut rng, 3));

        let back = DirectFourierTransform.backwards(&longer, Some(5)).unwrap();
        for (a, e) in back.iter().zip(signal.iter()) {
            assert_complex_closeness(*a, *e, 1e-9);
        }
    }

    #[test]
    fn kernels_accept_strided_views() {
        // transform the odd samples of a 12-sample buffer into the even slots of another
        let mut rng = StdRng::seed_from_u64(5);
        let data = gen_random_signal_with(&mut rng, 12);
        let odd: Vec<Complex64> = data.iter().skip(1).step_by(2).copied().collect();
        let expected = DirectFourierTransform.forwards(&odd).unwrap();

        let mut out = vec![Complex64::zero(); 12];
        let input = Strided::new(&data, 1, 2, 6).unwrap();
        let output = StridedMut::new(&mut out, 0, 2, 6).unwrap();
        DirectFourierTransform.forwards_impl(6, root_of_unity(6), input, output);

        for (k, e) in expected.iter().enumerate() {
            assert_complex_closeness(out[2 * k], *e, 1e-12);
            assert_eq!(out[2 * k + 1], Complex64::zero());
        }
    }
}
