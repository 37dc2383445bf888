//! Domain-level error types.
//!
//! These errors are transport agnostic. Repositories and the persistence
//! error translator raise them; the HTTP adapter maps each [`ErrorCode`] to a
//! status code and renders the JSON error envelope.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// The storage engine failed for a reason with no narrower code.
    DatabaseError,
    /// The requested resource does not exist.
    NotFound,
    /// The request is malformed or references data that does not exist.
    ValidationError,
    /// The request collides with an existing resource.
    Conflict,
    /// The storage engine is busy or locked.
    DatabaseBusy,
}

impl ErrorCode {
    /// Wire representation of the code.
    ///
    /// # Examples
    /// ```
    /// use storefront::domain::ErrorCode;
    ///
    /// assert_eq!(ErrorCode::DatabaseBusy.as_str(), "DATABASE_BUSY");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DatabaseError => "DATABASE_ERROR",
            Self::NotFound => "NOT_FOUND",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::Conflict => "CONFLICT",
            Self::DatabaseBusy => "DATABASE_BUSY",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const BUSY_MESSAGE: &str = "Database is temporarily unavailable";
const FALLBACK_DATABASE_MESSAGE: &str = "Database error";

/// Typed domain error.
///
/// ## Invariants
/// - `message` is non-empty once trimmed of whitespace.
///
/// # Examples
/// ```
/// use storefront::domain::{Error, ErrorCode};
///
/// let err = Error::not_found("Delivery", 42);
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert_eq!(err.message(), "Delivery with ID 42 not found");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
#[serde(try_from = "ErrorDto", into = "ErrorDto")]
pub struct Error {
    code: ErrorCode,
    message: String,
}

/// Validation errors emitted by the fallible constructor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorValidationError {
    /// The supplied message was empty or whitespace.
    #[error("error message must not be empty")]
    EmptyMessage,
}

impl Error {
    /// Fallible constructor that validates the message content.
    ///
    /// # Errors
    /// Returns [`ErrorValidationError::EmptyMessage`] when `message` is blank.
    pub fn try_new(code: ErrorCode, message: impl Into<String>) -> Result<Self, ErrorValidationError> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(ErrorValidationError::EmptyMessage);
        }
        Ok(Self { code, message })
    }

    /// Stable machine-readable error code.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to adapters.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// `{entity} with ID {id} not found`.
    pub fn not_found(entity: impl fmt::Display, id: impl fmt::Display) -> Self {
        Self {
            code: ErrorCode::NotFound,
            message: format!("{entity} with ID {id} not found"),
        }
    }

    /// `Validation error: {detail}`.
    pub fn validation(detail: impl fmt::Display) -> Self {
        Self {
            code: ErrorCode::ValidationError,
            message: format!("Validation error: {detail}"),
        }
    }

    /// `Conflict: {detail}`.
    pub fn conflict(detail: impl fmt::Display) -> Self {
        Self {
            code: ErrorCode::Conflict,
            message: format!("Conflict: {detail}"),
        }
    }

    /// Generic storage failure carrying `message` verbatim.
    ///
    /// A blank message is replaced with a fixed fallback so the invariant
    /// holds without a panic path.
    pub fn database(message: impl Into<String>) -> Self {
        Self::try_new(ErrorCode::DatabaseError, message).unwrap_or_else(|_| Self {
            code: ErrorCode::DatabaseError,
            message: FALLBACK_DATABASE_MESSAGE.to_owned(),
        })
    }

    /// The storage engine is busy or locked.
    #[must_use]
    pub fn busy() -> Self {
        Self {
            code: ErrorCode::DatabaseBusy,
            message: BUSY_MESSAGE.to_owned(),
        }
    }

    /// Whether this error reports a missing resource.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self.code, ErrorCode::NotFound)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorDto {
    code: ErrorCode,
    message: String,
}

impl From<Error> for ErrorDto {
    fn from(value: Error) -> Self {
        Self {
            code: value.code,
            message: value.message,
        }
    }
}

impl TryFrom<ErrorDto> for Error {
    type Error = ErrorValidationError;

    fn try_from(value: ErrorDto) -> Result<Self, Self::Error> {
        Self::try_new(value.code, value.message)
    }
}
