//! Transform Kernels
//!
//! Inner loops of the transform implementations. They are compiled for several
//! CPU feature levels and the best one is selected at runtime.
//!
//! ## Organization
//!
//! - `common`: the strided DFT bin sum used by the direct transform and the
//!   radix-2 butterfly used by the fast transform

pub mod common;
