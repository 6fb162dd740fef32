use std::collections::TryReserveError;

/// Represents recoverable failures of the containers.
///
/// Misuse (zero bucket count, invalid cursors, stale node handles) is not
/// represented here; those conditions panic.
#[derive(Debug)]
pub enum Error {
    /// Reserving storage for a bucket array failed
    Alloc(TryReserveError),

    /// The requested bucket count cannot be represented
    CapacityOverflow,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ChainTableError: {self:?}")
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Alloc(e) => Some(e),
            Self::CapacityOverflow => None,
        }
    }
}

impl From<TryReserveError> for Error {
    fn from(value: TryReserveError) -> Self {
        Self::Alloc(value)
    }
}

/// Container result
pub type Result<T> = std::result::Result<T, Error>;
