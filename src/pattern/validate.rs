//! Input checks run before a pattern is explained.

/// Longest pattern accepted, in characters.
pub const MAX_PATTERN_LEN: usize = 1000;

/// Reasons a pattern cannot be explained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExplainError {
    EmptyPattern,
    PatternTooLong { length: usize },
    /// Rejected by the regex compiler; carries its message.
    InvalidSyntax(String),
}

impl ExplainError {
    /// Short machine-readable tag for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptyPattern => "empty_pattern",
            Self::PatternTooLong { .. } => "pattern_too_long",
            Self::InvalidSyntax(_) => "invalid_syntax",
        }
    }
}

impl std::fmt::Display for ExplainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyPattern => write!(f, "Pattern is empty"),
            Self::PatternTooLong { length } => write!(
                f,
                "Pattern is too long ({length} characters, limit {MAX_PATTERN_LEN})"
            ),
            Self::InvalidSyntax(msg) => write!(f, "Invalid regular expression: {msg}"),
        }
    }
}

impl std::error::Error for ExplainError {}

/// Check that `pattern` is non-empty, within the length limit, and accepted
/// by the regex compiler.
pub fn validate(pattern: &str) -> Result<(), ExplainError> {
    if pattern.is_empty() {
        return Err(ExplainError::EmptyPattern);
    }
    let length = pattern.chars().count();
    if length > MAX_PATTERN_LEN {
        return Err(ExplainError::PatternTooLong { length });
    }
    fancy_regex::Regex::new(pattern)
        .map_err(|err| ExplainError::InvalidSyntax(err.to_string()))?;
    Ok(())
}
