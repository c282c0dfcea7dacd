use thiserror::Error;

/// Errors raised while freezing a value into literal text.
///
/// Both variants are terminal: they propagate through every enclosing
/// recursive call and the whole translation fails. No partial literal is
/// ever returned, though an [`crate::imports::ImportSet`] passed in may
/// already hold entries from sibling values processed before the failure;
/// callers must discard the attempt wholesale.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GenerateError {
    #[error("invalid value provided")]
    InvalidValue,

    #[error("function fields are not supported")]
    UnsupportedFunc,
}
