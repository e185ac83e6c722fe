//! Transform Implementations
//!
//! ## Available Algorithms
//!
//! - **Direct**: evaluates the DFT sum for every bin. `O(n^2)`, any length, no
//!   padding. Use it as the reference, or for short inputs.
//!
//! - **Fast**: recursive radix-2 decimation-in-time FFT. `O(n log n)`, pads the
//!   input to the next power of two.

pub mod direct;
pub mod fast;
