pub mod curve;
pub mod error_function;
pub mod gaussian;

/// 2 sqrt(2 ln 2). <https://mathworld.wolfram.com/GaussianFunction.html>, eqn. 8.
pub const FWHM_FOR_STDDEV: f64 = 2.354_820_045_030_949_3;

/// sqrt(2π), the integral of `exp(-x²/2)` over the real line.
pub const SQRT_2PI: f64 = 2.506_628_274_631_000_2;

#[cfg(test)]
mod tests {
    use std::f64::consts::{LN_2, PI};

    #[test]
    fn constants() {
        approx::assert_abs_diff_eq!(
            super::FWHM_FOR_STDDEV,
            2. * (2. * LN_2).sqrt(),
            epsilon = 1e-15
        );
        approx::assert_abs_diff_eq!(super::SQRT_2PI, (2. * PI).sqrt(), epsilon = 1e-15);
    }
}
