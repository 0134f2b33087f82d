use thiserror::Error;

/// The only rejection the scoring engine raises; everything else degrades to a
/// neutral result.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AnalyzeError {
    #[error("Input text cannot be empty.")]
    EmptyInput,
}
