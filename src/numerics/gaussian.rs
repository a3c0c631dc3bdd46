use itertools::Itertools;
use tracing::{debug, trace, warn};

use super::curve::{Curve1D, CurveModel, CurveOptions, CurveParameters};
use super::error_function::{normal_cdf, normal_cdf_many};
use super::{FWHM_FOR_STDDEV, SQRT_2PI};
use crate::error::{InvalidParameterization, Result};

#[derive(Clone, PartialEq, Debug)]
/// Construction arguments for a [`GaussianModel1D`].
///
/// Exactly one of `stddev`/`fwhm` and exactly one of `amplitude`/`flux` must be given.
pub struct Gaussian1DArgs {
    /// Peak height.
    pub amplitude: Option<f64>,
    pub mean: f64,
    pub stddev: Option<f64>,
    /// Full width at half maximum.
    pub fwhm: Option<f64>,
    /// Integral over the whole real line.
    pub flux: Option<f64>,
    /// Handed to the underlying [`CurveModel`] untouched.
    pub options: CurveOptions,
}

#[derive(Clone, PartialEq, Debug)]
/// `f(x) = a exp(-(x - b)² / 2c²)`, which can also be specified and adjusted through its FWHM
/// and its total flux.
///
/// Only `amplitude`, `mean` and `stddev` are stored. `fwhm` and `flux` are derived on every read,
/// and writing one of them overwrites `stddev` or `amplitude` respectively.
pub struct GaussianModel1D {
    curve: CurveModel,
}

#[derive(Clone, Copy, Debug)]
enum Width {
    Stddev(f64),
    Fwhm(f64),
}

#[derive(Clone, Copy, Debug)]
enum Height {
    Amplitude(f64),
    Flux(f64),
}

impl Default for Gaussian1DArgs {
    fn default() -> Self {
        Self {
            amplitude: None,
            mean: 0.,
            stddev: None,
            fwhm: None,
            flux: None,
            options: CurveOptions::default(),
        }
    }
}

impl Gaussian1DArgs {
    fn resolve(&self) -> Result<(Width, Height)> {
        let width = match (self.stddev, self.fwhm) {
            (Some(σ), None) => Width::Stddev(σ),
            (None, Some(fwhm)) => Width::Fwhm(fwhm),
            (stddev, fwhm) => {
                return Err(InvalidParameterization::AmbiguousWidth { stddev, fwhm })
            }
        };
        let height = match (self.amplitude, self.flux) {
            (Some(a), None) => Height::Amplitude(a),
            (None, Some(flux)) => Height::Flux(flux),
            (amplitude, flux) => {
                return Err(InvalidParameterization::AmbiguousHeight { amplitude, flux })
            }
        };
        Ok((width, height))
    }
}

impl GaussianModel1D {
    /// # Errors
    /// [`InvalidParameterization::AmbiguousWidth`] unless exactly one of `stddev` and `fwhm` is
    /// given, and [`InvalidParameterization::AmbiguousHeight`] unless exactly one of `amplitude`
    /// and `flux` is given.
    pub fn new(args: Gaussian1DArgs) -> Result<Self> {
        let (width, height) = args.resolve()?;
        let mut model = Self {
            curve: CurveModel::new(1., args.mean, 1., args.options),
        };

        // Width must be settled first: `set_flux` reads the stored stddev.
        match width {
            Width::Stddev(σ) => model.set_stddev(σ),
            Width::Fwhm(fwhm) => model.set_fwhm(fwhm),
        }
        match height {
            Height::Amplitude(a) => model.set_amplitude(a),
            Height::Flux(flux) => model.set_flux(flux),
        }

        debug!(?width, ?height, parameters = ?model.parameters(), "resolved gaussian");
        Ok(model)
    }

    #[must_use]
    pub fn amplitude(&self) -> f64 {
        self.curve.parameters().amplitude
    }

    pub fn set_amplitude(&mut self, amplitude: f64) {
        self.curve.parameters_mut().amplitude = amplitude;
    }

    #[must_use]
    pub fn mean(&self) -> f64 {
        self.curve.parameters().mean
    }

    pub fn set_mean(&mut self, mean: f64) {
        self.curve.parameters_mut().mean = mean;
    }

    #[must_use]
    pub fn stddev(&self) -> f64 {
        self.curve.parameters().stddev
    }

    /// Leaves `amplitude` alone, so the flux changes with the width.
    pub fn set_stddev(&mut self, stddev: f64) {
        self.curve.parameters_mut().stddev = stddev;
    }

    #[must_use]
    /// Full width at half maximum, `2 sqrt(2 ln 2) σ`.
    pub fn fwhm(&self) -> f64 {
        self.stddev() * FWHM_FOR_STDDEV
    }

    pub fn set_fwhm(&mut self, fwhm: f64) {
        self.set_stddev(fwhm / FWHM_FOR_STDDEV);
    }

    #[must_use]
    /// The integral over the whole real line, `a σ sqrt(2π)`.
    ///
    /// A zero `stddev` gives zero and a negative one flips the sign.
    pub fn flux(&self) -> f64 {
        self.amplitude() * (self.stddev() * SQRT_2PI)
    }

    /// Set `amplitude` so that the model integrates to `flux`.
    ///
    /// The amplitude is derived from the current `stddev`, which must already hold its final,
    /// nonzero value. With a zero `stddev` the amplitude becomes infinite (or `NaN` for zero
    /// flux).
    pub fn set_flux(&mut self, flux: f64) {
        let σ = self.stddev();
        if σ == 0. {
            warn!(flux, "setting flux of a gaussian with zero stddev");
        }
        self.set_amplitude(flux / (σ * SQRT_2PI));
    }

    #[must_use]
    /// Flux contained below `x`.
    pub fn evaluate_cdf(&self, x: f64) -> f64 {
        normal_cdf(x, self.mean(), self.stddev()) * self.flux()
    }

    #[must_use]
    /// The flux in each bin described by consecutive `limits`: `[0, 1, 2]` gives the flux in
    /// `0..1` followed by that in `1..2`.
    ///
    /// `n` limits yield `n - 1` bins; fewer than two limits yield none. Limits are expected to
    /// increase; a decreasing pair gives a negative bin.
    pub fn integrate(&self, limits: &[f64]) -> Vec<f64> {
        let CurveParameters {
            mean: μ,
            stddev: σ,
            ..
        } = *self.parameters();
        let flux = self.flux();
        let binned_flux = normal_cdf_many(limits, μ, σ)
            .tuple_windows()
            .map(|(lower, upper)| (upper - lower) * flux)
            .collect_vec();
        trace!(bins = binned_flux.len(), "integrated gaussian");
        binned_flux
    }

    #[must_use]
    pub fn options(&self) -> &CurveOptions {
        self.curve.options()
    }

    pub fn options_mut(&mut self) -> &mut CurveOptions {
        self.curve.options_mut()
    }
}

impl Curve1D for GaussianModel1D {
    fn parameters(&self) -> &CurveParameters {
        self.curve.parameters()
    }

    #[inline]
    fn evaluate(&self, x: f64) -> f64 {
        self.curve.evaluate(x)
    }
}
