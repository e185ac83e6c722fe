//! The transforms every registry knows about.
//!
//! To ship another built-in, add its factory here; [`TransformRegistry::register_defaults`]
//! and [`register_default_factories`] pick it up from this list.
//!
//! [`TransformRegistry::register_defaults`]: crate::registry::TransformRegistry::register_defaults
//! [`register_default_factories`]: crate::registry::register_default_factories
use std::sync::Arc;

use crate::algorithms::direct::{self, DirectFourierTransform};
use crate::algorithms::fast::{self, FastFourierTransform};
use crate::registry::TransformFactory;
use crate::transform::FourierTransform;

pub fn create_direct_fourier_transform() -> Box<dyn FourierTransform> {
    Box::new(DirectFourierTransform::new())
}

pub fn create_fast_fourier_transform() -> Box<dyn FourierTransform> {
    Box::new(FastFourierTransform::new())
}

/// Names and factories of the built-in transforms.
pub fn default_factories() -> Vec<(&'static str, TransformFactory)> {
    vec![
        (fast::NAME, Arc::new(create_fast_fourier_transform) as TransformFactory),
        (
            direct::NAME,
            Arc::new(create_direct_fourier_transform) as TransformFactory,
        ),
    ]
}
