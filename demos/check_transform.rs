//! Conformance checks for a registered transform.
//!
//! Usage: `check_transform <name>`. Without a name, lists the registered
//! transforms on stderr and exits with status 1.
use std::env;
use std::process::ExitCode;

use fourierkit::{Complex64, FftError, FourierTransform, TransformRegistry};
use rand::{rngs::StdRng, Rng, SeedableRng};
use utilities::gen_random_signal_with;

/// Options controlling which checks run, and at which sizes.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// Seed for every random input, so failures reproduce
    pub seed: u64,
    /// DC checks run at `2^1 ..= 2^max_dc_log`; quadratic transforms stop at `quadratic_max_dc_log`
    pub max_dc_log: u32,
    pub quadratic_max_dc_log: u32,
    /// Round trips on random inputs of every length in this range
    pub random_lengths: std::ops::Range<usize>,
    /// Extra round trips on random lengths up to `large_max_len`, skipped for quadratic transforms
    pub large_count: usize,
    pub large_max_len: usize,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            seed: 1,
            max_dc_log: 24,
            quadratic_max_dc_log: 13,
            random_lengths: 2..100,
            large_count: 10,
            large_max_len: 1_000_000,
        }
    }
}

#[derive(Default)]
struct Tally {
    passed: usize,
    failed: usize,
}

impl Tally {
    fn verify_equal<T>(&mut self, test: &str, got: T, want: T, message: &str)
    where
        T: PartialEq + std::fmt::Debug,
    {
        if got != want {
            eprintln!("FAIL: {test} got={got:?}, expected={want:?}, {message}");
            self.failed += 1;
        } else {
            self.passed += 1;
        }
    }

    fn verify_close(
        &mut self,
        test: &str,
        got: Complex64,
        want: Complex64,
        abs_tol: f64,
        message: &str,
    ) {
        let diff = got - want;
        if diff.norm() > abs_tol {
            eprintln!("FAIL: {test} got={got}, expected={want} (difference={diff}), {message}");
            self.failed += 1;
        } else {
            self.passed += 1;
        }
    }
}

fn check_dc(
    transform: &dyn FourierTransform,
    n: usize,
    tally: &mut Tally,
) -> Result<(), FftError> {
    let test = format!("check_dc({},{n})", transform.name());

    let input = vec![Complex64::new(1.0, 0.0); n];
    let forward = transform.forwards(&input)?;

    tally.verify_equal(
        &test,
        forward[0],
        Complex64::new(n as f64, 0.0),
        "DC component is not n.",
    );

    // as long as the input was not padded, every other component is zero
    if forward.len() == n {
        for z in &forward[1..] {
            let zero = Complex64::new(0.0, 0.0);
            tally.verify_close(&test, *z, zero, 1e-9, "AC component is non-zero.");
        }
    }

    let backward = transform.backwards(&forward, Some(n))?;
    tally.verify_equal(&test, backward.len(), n, "Size of output does not match.");
    for (z, x) in backward.iter().zip(input.iter()) {
        tally.verify_close(&test, *z, *x, 1e-9, "backwards(forwards(vec)) != vec.");
    }

    Ok(())
}

fn check_round_trip(
    transform: &dyn FourierTransform,
    n: usize,
    rng: &mut StdRng,
    tally: &mut Tally,
) -> Result<(), FftError> {
    let test = format!("check_round_trip({},{n})", transform.name());

    let input = gen_random_signal_with(rng, n);
    let output = transform.backwards(&transform.forwards(&input)?, Some(n))?;

    for (z, x) in output.iter().zip(input.iter()) {
        tally.verify_close(&test, *z, *x, 1e-9, "Non reversible transform.");
    }

    Ok(())
}

fn run_checks(transform: &dyn FourierTransform, opts: &CheckOptions) -> Result<Tally, FftError> {
    let mut rng = StdRng::seed_from_u64(opts.seed);
    let mut tally = Tally::default();

    let max_dc_log = if transform.is_quadratic() {
        opts.quadratic_max_dc_log
    } else {
        opts.max_dc_log
    };
    for k in 1..=max_dc_log {
        check_dc(transform, 1 << k, &mut tally)?;
    }

    for n in opts.random_lengths.clone() {
        check_round_trip(transform, n, &mut rng, &mut tally)?;
    }
    if !transform.is_quadratic() {
        for _ in 0..opts.large_count {
            let n = rng.gen_range(10..=opts.large_max_len + 10);
            check_round_trip(transform, n, &mut rng, &mut tally)?;
        }
    }

    Ok(tally)
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let registry = TransformRegistry::with_defaults();

    let Some(name) = args.get(1) else {
        eprintln!("Usage {} <name>", args[0]);
        for name in registry.names() {
            eprintln!("{name}");
        }
        return ExitCode::FAILURE;
    };

    let opts = CheckOptions::default();
    let result = registry.create(name).and_then(|transform| {
        let tally = run_checks(transform.as_ref(), &opts)?;
        Ok((transform, tally))
    });

    match result {
        Ok((transform, tally)) => {
            println!(
                "{} : Passed {} out of {} tests.",
                transform.name(),
                tally.passed,
                tally.passed + tally.failed
            );
            if tally.failed > 0 {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(err) => {
            eprintln!("Caught error: {err}");
            ExitCode::FAILURE
        }
    }
}
