#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]

//! Gaussian curve models that can be specified by width (`stddev` or FWHM) and height
//! (`amplitude` or total flux), and integrated exactly over contiguous bins.

pub mod error;
pub mod numerics;

pub use error::{InvalidParameterization, Result};
pub use numerics::curve::{Curve1D, CurveModel, CurveOptions, CurveParameter, CurveParameters};
pub use numerics::gaussian::{Gaussian1DArgs, GaussianModel1D};

#[cfg(test)]
pub(crate) fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}
