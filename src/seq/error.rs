//! The error type for sequence operations.

use crate::value::ValueKind;

/// Reports that a sequence operation received an input representation it
/// does not operate on.
///
/// This is the checked replacement for a silent "no result" return: instead
/// of an absent value, a refused input is a first-class error carrying the
/// operation name and the offending representation, so call sites can match
/// on it or propagate it with `?`.
///
/// # Examples
///
/// ```
/// use polyseq::seq::UnsupportedError;
/// use polyseq::value::ValueKind;
///
/// let error = UnsupportedError {
///     operation: "take",
///     kind: ValueKind::Number,
/// };
/// assert_eq!(
///     error.to_string(),
///     "take: unsupported sequence representation: number"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsupportedError {
    /// The name of the refusing operation.
    pub operation: &'static str,
    /// The representation that was refused.
    pub kind: ValueKind,
}

impl std::fmt::Display for UnsupportedError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}: unsupported sequence representation: {}",
            self.operation, self.kind
        )
    }
}

impl std::error::Error for UnsupportedError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_operation_and_kind() {
        let error = UnsupportedError {
            operation: "drop_while",
            kind: ValueKind::Map,
        };
        assert_eq!(
            format!("{error}"),
            "drop_while: unsupported sequence representation: mapping"
        );
    }
}
