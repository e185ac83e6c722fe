//! Times one forward + backward round trip of a registered transform at
//! growing sizes, printing one CSV record per size.
//!
//! Usage: `time_transform <name> [maxTime]`
use std::env;
use std::process::ExitCode;
use std::str::FromStr;
use std::time::Instant;

use fourierkit::{Complex64, FftError, FourierTransform, TransformRegistry};
use rand::{rngs::StdRng, SeedableRng};
use utilities::gen_random_signal_with;

/// Options controlling the size sweep.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct TimingOptions {
    pub seed: u64,
    /// Sizes go from `2^start_log2n` to `2^end_log2n`, `step_log2n` octaves apart
    pub start_log2n: f64,
    pub end_log2n: f64,
    pub step_log2n: f64,
    /// Stop after the first size whose round trip takes at least this many seconds
    pub max_time: f64,
}

impl Default for TimingOptions {
    fn default() -> Self {
        Self {
            seed: 1,
            start_log2n: 4.0,
            // try not to blow up the memory system
            end_log2n: 26.0,
            step_log2n: 0.25,
            max_time: 5.0,
        }
    }
}

fn run_timing(transform: &dyn FourierTransform, opts: &TimingOptions) -> Result<(), FftError> {
    let mut rng = StdRng::seed_from_u64(opts.seed);

    println!("# name, n, [sentinel], time");

    let mut log2n = opts.start_log2n;
    while log2n <= opts.end_log2n {
        let n = 2.0_f64.powf(log2n) as usize;
        let input = gen_random_signal_with(&mut rng, n);

        let now = Instant::now();
        let output = transform.backwards(&transform.forwards(&input)?, Some(n))?;
        let elapsed = now.elapsed().as_secs_f64();

        // summing the output keeps the round trip from being optimised away
        let sentinel: Complex64 = output.iter().sum();
        println!("{}, {n}, {}, {elapsed}", transform.name(), sentinel.norm());

        if elapsed >= opts.max_time {
            break;
        }
        log2n += opts.step_log2n;
    }

    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let registry = TransformRegistry::with_defaults();

    if args.len() < 2 {
        eprintln!("Usage {} <name> [maxTime]", args[0]);
        eprintln!("    Time the named fourier transform at increasing sizes.");
        eprintln!("    maxTime : Maximum time to allow any single size to run for.");
        eprintln!("\n    Implementations:");
        for name in registry.names() {
            eprintln!("        {name}");
        }
        return ExitCode::FAILURE;
    }

    let mut opts = TimingOptions::default();
    if let Some(arg) = args.get(2) {
        match f64::from_str(arg) {
            Ok(max_time) => opts.max_time = max_time,
            Err(err) => {
                eprintln!("invalid value for maxTime: {arg} ({err})");
                return ExitCode::FAILURE;
            }
        }
    }

    let result = registry
        .create(&args[1])
        .and_then(|transform| run_timing(transform.as_ref(), &opts));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Caught error: {err}");
            ExitCode::FAILURE
        }
    }
}
