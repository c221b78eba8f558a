//! Error type for the sorting entry points.

use thiserror::Error;

/// Errors raised by the top-level sort, merge and concatenate functions.
///
/// Every check happens before any element is read or moved, so a returned
/// error means the inputs are untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// A required sequence argument was `None`.
    #[error("argument `{name}` is absent")]
    InvalidArgument { name: &'static str },
}

pub type Result<T> = std::result::Result<T, SortError>;

/// Unwraps an optional argument, naming it in the error when it is absent.
#[inline]
pub(crate) fn require<T>(value: Option<T>, name: &'static str) -> Result<T> {
    value.ok_or(SortError::InvalidArgument { name })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_the_argument() {
        let err = require::<&[u8]>(None, "second").unwrap_err();
        assert_eq!(err.to_string(), "argument `second` is absent");
    }
}
