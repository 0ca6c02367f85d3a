// crates/shared-kernel/src/error.rs
use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum PrimeCountError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}")]
    Context {
        context: String,
        #[source]
        source: Box<PrimeCountError>,
    },

    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),
}

pub type Result<T> = std::result::Result<T, PrimeCountError>;

/// Range validation failures.
///
/// The messages are part of the console protocol and are printed verbatim
/// after an `Error: ` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Start of the range must be less than or equal to the end of the range.")]
    StartAfterEnd { start: i64, end: i64 },

    #[error("Range values must be non-negative.")]
    NegativeBound { start: i64, end: i64 },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Errors raised while interpreting what the user typed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PresentationError {
    #[error("Invalid input. Please enter integer values.")]
    InvalidInteger { input: String },
}

pub type PresentationResult<T> = std::result::Result<T, PresentationError>;

/// Console I/O failures.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("failed to read from console")]
    ConsoleRead {
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write to console")]
    ConsoleWrite {
        #[source]
        source: std::io::Error,
    },

    #[error("input closed before a valid range was entered")]
    InputClosed,
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<PrimeCountError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| PrimeCountError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }
}
