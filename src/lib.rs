//! Interchangeable discrete Fourier transform implementations, selected by name
//! at run time.
//!
//! ```
//! use fourierkit::{Complex64, FourierTransform, TransformRegistry};
//!
//! let registry = TransformRegistry::with_defaults();
//! let fft = registry.create(fourierkit::algorithms::fast::NAME)?;
//!
//! let signal = vec![Complex64::new(1.0, 0.0); 5];
//! let spectrum = fft.forwards(&signal)?; // padded up to 8 samples
//! assert_eq!(spectrum.len(), 8);
//!
//! let back = fft.backwards(&spectrum, Some(signal.len()))?;
//! assert!((back[4] - signal[4]).norm() < 1e-9);
//! # Ok::<(), fourierkit::FftError>(())
//! ```
pub use num_complex::Complex64;

pub use crate::algorithms::direct::DirectFourierTransform;
pub use crate::algorithms::fast::FastFourierTransform;
pub use crate::error::FftError;
pub use crate::registry::{
    create_transform, register_default_factories, register_transform_factory,
    transform_factory_names, TransformFactory, TransformRegistry,
};
pub use crate::strided::{Strided, StridedMut};
pub use crate::transform::{root_of_unity, FourierTransform};

pub mod algorithms;
pub mod defaults;
pub mod error;
mod kernels;
pub mod registry;
pub mod strided;
pub mod transform;
