//! Error types for region gathering.

/// Error from compiling a caller-supplied region pattern.
///
/// Pattern compilation failure is a configuration mistake on the caller's
/// side, never a property of the text being scanned.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PatternError {
    /// The pattern (or the combined delimiter alternation built from a
    /// start/end pattern pair) failed to compile.
    #[error("invalid region pattern")]
    Pattern(#[from] regex::Error),
}
