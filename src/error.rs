//! Errors reported by transforms and the transform registry.

use thiserror::Error;

/// Everything that can go wrong when calling into a transform or the registry.
///
/// Every variant is a deterministic function of the arguments; nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FftError {
    /// A transform was asked to work on a sequence with no samples.
    #[error("cannot transform an empty sequence")]
    EmptyInput,

    /// `backwards` was asked for more outputs than it was given inputs.
    #[error("output size {requested} must be less than or equal to input size {available}")]
    OutputTooLong { requested: usize, available: usize },

    /// `backwards` would need to run the inverse at a padded length the input can't cover.
    #[error(
        "an output of size {requested} is computed at padded size {padded}, but only {available} inputs were given"
    )]
    IncompatibleLength {
        requested: usize,
        padded: usize,
        available: usize,
    },

    /// An implementation's padding rule shrank its input.
    #[error("padded size {padded} is smaller than the input size {len}")]
    InvalidPadding { len: usize, padded: usize },

    /// A strided view would reach outside of the slice it borrows.
    #[error("strided view (offset {offset}, stride {stride}, len {len}) does not fit in {available} elements")]
    StrideOutOfBounds {
        offset: usize,
        stride: usize,
        len: usize,
        available: usize,
    },

    /// A factory is already registered under that name.
    #[error("a transform factory is already registered under '{0}'")]
    DuplicateName(String),

    /// No factory is registered under that name.
    #[error("no transform factory registered under '{0}'")]
    UnknownName(String),
}

impl FftError {
    /// Returns `true` for errors caused by a bad argument to a transform call,
    /// as opposed to registry lookups and registrations.
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(self, Self::DuplicateName(_) | Self::UnknownName(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_errors_are_not_invalid_arguments() {
        assert!(!FftError::DuplicateName("x".into()).is_invalid_argument());
        assert!(!FftError::UnknownName("x".into()).is_invalid_argument());
        assert!(FftError::EmptyInput.is_invalid_argument());
        assert!(FftError::OutputTooLong {
            requested: 4,
            available: 2
        }
        .is_invalid_argument());
    }

    #[test]
    fn messages_name_the_offending_values() {
        let err = FftError::OutputTooLong {
            requested: 9,
            available: 8,
        };
        assert_eq!(
            err.to_string(),
            "output size 9 must be less than or equal to input size 8"
        );
        assert_eq!(
            FftError::UnknownName("nope".into()).to_string(),
            "no transform factory registered under 'nope'"
        );
    }
}
