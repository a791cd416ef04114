use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors produced when parsing semantic style keys from text.
pub enum TokenParseError {
    /// The value is not one of the key's declared tokens.
    #[error("unknown {kind} `{value}`; expected one of: {expected}")]
    Unknown {
        /// Key family being parsed, e.g. `size`.
        kind: &'static str,
        /// Rejected input.
        value: String,
        /// Comma-separated accepted tokens.
        expected: String,
    },
}

impl TokenParseError {
    pub(crate) fn unknown(kind: &'static str, value: &str, accepted: &[&str]) -> Self {
        Self::Unknown {
            kind,
            value: value.to_string(),
            expected: accepted.join(", "),
        }
    }
}
