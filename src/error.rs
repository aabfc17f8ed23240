// model = "claude-opus-4-5"
// created = 2026-10-16
// modified = 2026-10-16
// driver = "Isaac Clayton"

//! Error type shared by every reducer.

/// Errors raised by a reduction before any element is consumed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ReduceError {
    /// A caller contract violation, such as an absent source.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

pub type Result<T> = std::result::Result<T, ReduceError>;

/// Unwrap an optional source, rejecting `None` up front.
pub(crate) fn require_source<'a, T>(
    source: Option<&'a [T]>,
    strategy: &'static str,
) -> Result<&'a [T]> {
    match source {
        Some(source) => return Ok(source),
        None => {
            tracing::warn!(strategy, "rejected absent source");
            return Err(ReduceError::InvalidArgument("source is absent"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_source_is_invalid_argument() {
        let err = require_source::<u8>(None, "test").unwrap_err();
        assert_eq!(err, ReduceError::InvalidArgument("source is absent"));
        assert_eq!(err.to_string(), "invalid argument: source is absent");
    }

    #[test]
    fn present_source_passes_through() {
        let data = [1, 2, 3];
        let source = require_source(Some(&data[..]), "test").unwrap();
        assert_eq!(source, &[1, 2, 3]);
    }
}
