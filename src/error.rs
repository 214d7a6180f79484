//! Error types.

/// The error returned by checked access on an empty [`Optional`](crate::Optional).
///
/// Only the `try_*` accessors produce it; the plain accessors treat empty
/// access as a contract violation and panic instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyAccessError;

impl core::fmt::Display for EmptyAccessError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("value accessed on an empty Optional")
    }
}

impl std::error::Error for EmptyAccessError {}
