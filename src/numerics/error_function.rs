use std::f64::consts::FRAC_1_SQRT_2;

use statrs::function::erf::erfc;

#[must_use]
#[inline]
/// Cumulative probability of `N(μ, σ)` at `x`.
///
/// Accurate to about 1e-11 absolute, the precision of `statrs`' `erfc` near `|x - μ| ≈ σ`.
///
/// No validation is done on `σ`: zero gives a step at `μ` (`NaN` exactly at `μ`), and a negative
/// value mirrors the distribution.
pub fn normal_cdf(x: f64, μ: f64, σ: f64) -> f64 {
    0.5 * erfc(-(x - μ) / σ * FRAC_1_SQRT_2)
}

/// [`normal_cdf`] at each of `xs`, in order.
pub fn normal_cdf_many(xs: &[f64], μ: f64, σ: f64) -> impl Iterator<Item = f64> + '_ {
    xs.iter().map(move |&x| normal_cdf(x, μ, σ))
}
