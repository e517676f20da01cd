//! Error types for single-focus searches.
//!
//! Capability mismatches never reach runtime: they are rejected by the type
//! checker. The only runtime outcomes an optic can report are the ones
//! produced when a multi-focus optic is asked for exactly one focus.

/// Why a single-focus search through a multi-focus optic produced no result.
///
/// # Examples
///
/// ```rust
/// use focal::optics::OpticError;
///
/// let error = OpticError::IndexOutOfRange { index: 4, length: 3 };
/// assert_eq!(
///     format!("{error}"),
///     "no element at index 4: the optic has 3 foci"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpticError {
    /// The requested position is past the last focus.
    IndexOutOfRange {
        /// The requested position.
        index: usize,
        /// How many foci the optic visited.
        length: usize,
    },
    /// No focus satisfied the search predicate.
    NoMatch {
        /// How many foci the optic visited.
        visited: usize,
    },
    /// More than one focus satisfied a search expecting exactly one.
    MultipleResults,
}

impl std::fmt::Display for OpticError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfRange { index, length } => write!(
                formatter,
                "no element at index {index}: the optic has {length} foci"
            ),
            Self::NoMatch { visited } => write!(
                formatter,
                "no focus matched the predicate among {visited} visited"
            ),
            Self::MultipleResults => {
                write!(formatter, "multiple results where exactly one was expected")
            }
        }
    }
}

impl std::error::Error for OpticError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(OpticError::IndexOutOfRange { index: 4, length: 3 }, "no element at index 4: the optic has 3 foci")]
    #[case(OpticError::NoMatch { visited: 2 }, "no focus matched the predicate among 2 visited")]
    #[case(OpticError::MultipleResults, "multiple results where exactly one was expected")]
    fn display_describes_the_failure(#[case] error: OpticError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    fn is_a_standard_error() {
        let error: Box<dyn std::error::Error> = Box::new(OpticError::MultipleResults);
        assert!(error.source().is_none());
    }
}
