use crate::TextFormat;

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All error variants that `flakeid` can emit.
///
/// ID generation itself is infallible apart from lock poisoning; everything
/// else comes from the text codec.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The operation failed because the generator lock was **poisoned**.
    ///
    /// This occurs when a thread panics while holding the lock.
    #[error("generator lock poisoned")]
    LockPoisoned,

    /// A text conversion was requested for a format outside the implemented
    /// set.
    ///
    /// This covers both unrecognized format names and the reserved
    /// [`TextFormat::Base32`] / [`TextFormat::Base58`] variants, which are
    /// declared but intentionally not implemented.
    #[error("unsupported conversion format '{0}'")]
    UnsupportedFormat(String),

    /// There was nothing to convert: an empty input string, or a zero ID
    /// where a real generated ID was required.
    #[error("nothing to convert")]
    EmptyInput,

    /// The input string is not a valid encoding for the stated format.
    #[error("malformed {format} input: {reason}")]
    MalformedText {
        format: TextFormat,
        reason: String,
    },
}

use std::sync::{MutexGuard, PoisonError};

// Convert all poisoned lock errors to a simplified `LockPoisoned`.
impl<T> From<PoisonError<MutexGuard<'_, T>>> for Error {
    fn from(_: PoisonError<MutexGuard<'_, T>>) -> Self {
        Self::LockPoisoned
    }
}
