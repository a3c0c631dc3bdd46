use thiserror::Error;

/// A model was given an over- or under-determined set of parameters.
#[derive(Error, Clone, Copy, PartialEq, Debug)]
pub enum InvalidParameterization {
    /// Width must be given as exactly one of `stddev` or `fwhm`.
    #[error("you must set either fwhm OR stddev, not both or neither; got stddev={stddev:?} fwhm={fwhm:?}")]
    AmbiguousWidth {
        stddev: Option<f64>,
        fwhm: Option<f64>,
    },

    /// Height must be given as exactly one of `amplitude` or `flux`.
    #[error("you must set either amplitude OR flux, not both or neither; got amplitude={amplitude:?} flux={flux:?}")]
    AmbiguousHeight {
        amplitude: Option<f64>,
        flux: Option<f64>,
    },
}

pub type Result<T> = std::result::Result<T, InvalidParameterization>;

#[cfg(test)]
mod tests {
    use super::InvalidParameterization;

    #[test]
    fn messages_carry_both_candidates() {
        let width = InvalidParameterization::AmbiguousWidth {
            stddev: Some(1.5),
            fwhm: Some(3.0),
        };
        let message = width.to_string();
        assert!(message.contains("stddev=Some(1.5)"), "{message}");
        assert!(message.contains("fwhm=Some(3.0)"), "{message}");

        let height = InvalidParameterization::AmbiguousHeight {
            amplitude: None,
            flux: None,
        };
        let message = height.to_string();
        assert!(message.contains("amplitude=None"), "{message}");
        assert!(message.contains("flux=None"), "{message}");
    }
}
