//! Query operator errors.

use thiserror::Error;

/// Result type for query operators.
pub type QueryResult<T> = Result<T, QueryError>;

/// Query operator errors.
///
/// "No match" is never an error; operators that can come up empty return
/// `Option`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// A seedless reduction, average, min or max was applied to no elements.
    #[error("{operator}: sequence contains no elements")]
    EmptySequence { operator: &'static str },

    /// `single_match` found more than one satisfying element.
    #[error("{operator}: sequence contains more than one matching element")]
    AmbiguousResult { operator: &'static str },
}

impl QueryError {
    /// Name of the operator that raised the error.
    pub fn operator(&self) -> &'static str {
        match self {
            QueryError::EmptySequence { operator } | QueryError::AmbiguousResult { operator } => {
                operator
            }
        }
    }

    /// check if the error came from an empty input
    pub fn is_empty_sequence(&self) -> bool {
        matches!(self, QueryError::EmptySequence { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        let empty = QueryError::EmptySequence { operator: "average" };
        assert!(empty.is_empty_sequence());
        assert_eq!(empty.operator(), "average");
        assert_eq!(empty.to_string(), "average: sequence contains no elements");

        let ambiguous = QueryError::AmbiguousResult { operator: "single_match" };
        assert!(!ambiguous.is_empty_sequence());
        assert_eq!(ambiguous.operator(), "single_match");
    }
}
