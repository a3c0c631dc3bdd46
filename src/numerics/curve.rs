use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use super::FWHM_FOR_STDDEV;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
/// Names of the stored parameters of a [`CurveModel`].
pub enum CurveParameter {
    Amplitude,
    Mean,
    Stddev,
}

#[derive(Clone, Copy, PartialEq, Debug)]
/// The three stored parameters of `f(x) = a exp(-(x - b)² / 2c²)`.
pub struct CurveParameters {
    /// Peak height `a`.
    pub amplitude: f64,
    /// Center `b`.
    pub mean: f64,
    /// Width `c`.
    pub stddev: f64,
}

#[derive(Clone, PartialEq, Debug, Default)]
/// Options carried alongside a model's parameters for whatever consumes the model (a fitter,
/// a plotter). They are stored and handed back unchanged; nothing here interprets them.
pub struct CurveOptions {
    pub name: Option<String>,
    /// Parameters to be held constant.
    pub fixed: BTreeMap<CurveParameter, bool>,
    /// `(lower, upper)` limits; `None` is unbounded on that side.
    pub bounds: BTreeMap<CurveParameter, (Option<f64>, Option<f64>)>,
    pub meta: BTreeMap<String, String>,
}

#[derive(Clone, PartialEq, Debug)]
/// Parameter storage and evaluation for a one-dimensional Gaussian curve.
pub struct CurveModel {
    parameters: CurveParameters,
    options: CurveOptions,
}

/// A one-dimensional curve described by an amplitude, center and width.
pub trait Curve1D {
    /// Number of standard deviations either side of the mean covered by [`Self::bounding_box`].
    const BOUNDING_BOX_STDDEVS: f64 = 5.5;

    fn parameters(&self) -> &CurveParameters;

    fn evaluate(&self, x: f64) -> f64;

    fn evaluate_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.evaluate(x)).collect()
    }

    /// The interval outside which the curve is negligible.
    fn bounding_box(&self) -> RangeInclusive<f64> {
        let CurveParameters {
            mean: μ,
            stddev: σ,
            ..
        } = *self.parameters();
        let half_width = Self::BOUNDING_BOX_STDDEVS * σ.abs();
        (μ - half_width)..=(μ + half_width)
    }

    /// The interval `n` FWHMs out from the mean.
    fn extent_by_fwhm(&self, n: f64) -> RangeInclusive<f64> {
        let CurveParameters {
            mean: μ,
            stddev: σ,
            ..
        } = *self.parameters();
        let half_width = σ.abs() * FWHM_FOR_STDDEV * n;
        (μ - half_width)..=(μ + half_width)
    }
}

impl CurveParameters {
    #[must_use]
    pub fn get(&self, parameter: CurveParameter) -> f64 {
        match parameter {
            CurveParameter::Amplitude => self.amplitude,
            CurveParameter::Mean => self.mean,
            CurveParameter::Stddev => self.stddev,
        }
    }
}

impl CurveModel {
    #[must_use]
    pub fn new(amplitude: f64, mean: f64, stddev: f64, options: CurveOptions) -> Self {
        Self {
            parameters: CurveParameters {
                amplitude,
                mean,
                stddev,
            },
            options,
        }
    }

    pub fn parameters_mut(&mut self) -> &mut CurveParameters {
        &mut self.parameters
    }

    #[must_use]
    pub fn options(&self) -> &CurveOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut CurveOptions {
        &mut self.options
    }
}

impl Curve1D for CurveModel {
    fn parameters(&self) -> &CurveParameters {
        &self.parameters
    }

    #[inline]
    fn evaluate(&self, x: f64) -> f64 {
        let CurveParameters {
            amplitude,
            mean: μ,
            stddev: σ,
        } = self.parameters;
        let σ_inv = σ.recip();
        amplitude * (-0.5 * σ_inv * σ_inv * (x - μ) * (x - μ)).exp()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use maplit::btreemap;

    use super::{Curve1D, CurveModel, CurveOptions, CurveParameter};

    #[test]
    fn evaluate_peak_and_half_maximum() {
        let curve = CurveModel::new(3., 2., 0.5, CurveOptions::default());
        assert_abs_diff_eq!(curve.evaluate(2.), 3.);
        let half_width = curve.extent_by_fwhm(0.5);
        assert_abs_diff_eq!(curve.evaluate(*half_width.start()), 1.5, epsilon = 1e-12);
        assert_abs_diff_eq!(curve.evaluate(*half_width.end()), 1.5, epsilon = 1e-12);
    }

    #[test]
    fn evaluate_many_matches_pointwise() {
        let curve = CurveModel::new(1., 0., 1., CurveOptions::default());
        let xs = [-2., -1., 0., 1., 2.];
        let ys = curve.evaluate_many(&xs);
        assert_eq!(ys.len(), xs.len());
        for (&x, &y) in xs.iter().zip(&ys) {
            assert_abs_diff_eq!(y, (-0.5 * x * x).exp(), epsilon = 1e-15);
        }
    }

    #[test]
    fn bounding_box_is_symmetric_about_mean() {
        let curve = CurveModel::new(1., 10., 2., CurveOptions::default());
        let bbox = curve.bounding_box();
        assert_abs_diff_eq!(*bbox.start(), -1.);
        assert_abs_diff_eq!(*bbox.end(), 21.);
    }

    #[test]
    fn options_pass_through() {
        let options = CurveOptions {
            name: Some("Hα".to_owned()),
            fixed: btreemap! { CurveParameter::Mean => true },
            bounds: btreemap! { CurveParameter::Stddev => (Some(0.), None) },
            meta: btreemap! { "line".to_owned() => "6563".to_owned() },
        };
        let mut curve = CurveModel::new(1., 0., 1., options.clone());
        assert_eq!(curve.options(), &options);

        curve.options_mut().fixed.insert(CurveParameter::Amplitude, true);
        assert_eq!(curve.options().fixed.len(), 2);
        assert_abs_diff_eq!(curve.parameters().get(CurveParameter::Stddev), 1.);
    }
}
