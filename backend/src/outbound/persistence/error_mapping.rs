//! Translation of storage failures into typed domain errors.
//!
//! Every repository funnels its failures through [`translate`], which applies
//! one ordered decision table:
//!
//! 1. already typed errors pass through unchanged
//! 2. uniqueness violations become a conflict
//! 3. foreign key violations become a validation error
//! 4. other constraint violations become a validation error carrying the
//!    engine message
//! 5. a busy or locked engine becomes [`ErrorCode::DatabaseBusy`]
//! 6. zero rows affected with a known entity becomes a not-found error
//! 7. anything else becomes a generic database error
//!
//! [`ErrorCode::DatabaseBusy`]: crate::domain::ErrorCode::DatabaseBusy

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use super::database::DatabaseClosed;
use crate::domain::Error;

const BUSY_MARKERS: [&str; 3] = [
    "database is locked",
    "database table is locked",
    "database is busy",
];

/// Category of a failure reported by the storage engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineFailureKind {
    UniqueViolation,
    ForeignKeyViolation,
    ConstraintViolation,
    Busy,
    NoRowsAffected,
    Other,
}

/// Failure raised while talking to storage.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageFailure {
    /// A failure that already carries a domain error.
    Typed(Error),
    /// A raw engine failure with its original message.
    Engine {
        kind: EngineFailureKind,
        message: String,
    },
}

impl StorageFailure {
    /// Create an engine failure of `kind`.
    pub fn engine(kind: EngineFailureKind, message: impl Into<String>) -> Self {
        Self::Engine {
            kind,
            message: message.into(),
        }
    }

    /// A statement matched no rows.
    pub fn no_rows_affected() -> Self {
        Self::engine(EngineFailureKind::NoRowsAffected, "no rows affected")
    }
}

impl From<Error> for StorageFailure {
    fn from(value: Error) -> Self {
        Self::Typed(value)
    }
}

impl From<DatabaseClosed> for StorageFailure {
    fn from(value: DatabaseClosed) -> Self {
        Self::engine(EngineFailureKind::Other, value.to_string())
    }
}

impl From<DieselError> for StorageFailure {
    fn from(value: DieselError) -> Self {
        let kind = classify(&value);
        let message = match &value {
            DieselError::DatabaseError(_, info) => info.message().to_owned(),
            other => other.to_string(),
        };
        Self::engine(kind, message)
    }
}

/// Entity and identifier an operation targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FailureContext {
    pub entity: &'static str,
    pub id: i64,
}

impl FailureContext {
    pub const fn new(entity: &'static str, id: i64) -> Self {
        Self { entity, id }
    }
}

/// Convert `failure` into exactly one domain error.
pub fn translate(failure: impl Into<StorageFailure>, context: Option<FailureContext>) -> Error {
    let (kind, message) = match failure.into() {
        StorageFailure::Typed(error) => return error,
        StorageFailure::Engine { kind, message } => (kind, message),
    };
    debug!(
        ?kind,
        %message,
        entity = context.map(|ctx| ctx.entity),
        id = context.map(|ctx| ctx.id),
        "translating storage failure"
    );
    match (kind, context) {
        (EngineFailureKind::UniqueViolation, _) => Error::conflict("Resource already exists"),
        (EngineFailureKind::ForeignKeyViolation, _) => {
            Error::validation("Invalid reference to related entity")
        }
        (EngineFailureKind::ConstraintViolation, _) => Error::validation(message),
        (EngineFailureKind::Busy, _) => Error::busy(),
        (EngineFailureKind::NoRowsAffected, Some(ctx)) => Error::not_found(ctx.entity, ctx.id),
        (EngineFailureKind::NoRowsAffected | EngineFailureKind::Other, _) => {
            Error::database(format!("Database operation failed: {message}"))
        }
    }
}

fn classify(error: &DieselError) -> EngineFailureKind {
    match error {
        DieselError::NotFound => EngineFailureKind::NoRowsAffected,
        DieselError::DatabaseError(kind, info) => match kind {
            DatabaseErrorKind::UniqueViolation => EngineFailureKind::UniqueViolation,
            DatabaseErrorKind::ForeignKeyViolation => EngineFailureKind::ForeignKeyViolation,
            DatabaseErrorKind::NotNullViolation | DatabaseErrorKind::CheckViolation => {
                EngineFailureKind::ConstraintViolation
            }
            _ => classify_message(info.message()),
        },
        other => classify_message(&other.to_string()),
    }
}

fn classify_message(message: &str) -> EngineFailureKind {
    if message.contains("UNIQUE constraint failed") {
        EngineFailureKind::UniqueViolation
    } else if message.contains("FOREIGN KEY constraint failed") {
        EngineFailureKind::ForeignKeyViolation
    } else if message.contains("constraint failed") {
        EngineFailureKind::ConstraintViolation
    } else if BUSY_MARKERS.iter().any(|marker| message.contains(marker)) {
        EngineFailureKind::Busy
    } else {
        EngineFailureKind::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    fn database_error(kind: DatabaseErrorKind, message: &str) -> DieselError {
        DieselError::DatabaseError(kind, Box::new(message.to_owned()))
    }

    #[rstest]
    fn typed_errors_pass_through_unchanged() {
        let typed = Error::validation("name must not be empty");
        assert_eq!(translate(typed.clone(), None), typed);
    }

    #[rstest]
    #[case(
        database_error(DatabaseErrorKind::UniqueViolation, "UNIQUE constraint failed: products.sku"),
        ErrorCode::Conflict,
        "Conflict: Resource already exists"
    )]
    #[case(
        database_error(DatabaseErrorKind::Unknown, "UNIQUE constraint failed: products.sku"),
        ErrorCode::Conflict,
        "Conflict: Resource already exists"
    )]
    #[case(
        database_error(DatabaseErrorKind::ForeignKeyViolation, "FOREIGN KEY constraint failed"),
        ErrorCode::ValidationError,
        "Validation error: Invalid reference to related entity"
    )]
    #[case(
        database_error(DatabaseErrorKind::NotNullViolation, "NOT NULL constraint failed: products.name"),
        ErrorCode::ValidationError,
        "Validation error: NOT NULL constraint failed: products.name"
    )]
    #[case(
        database_error(DatabaseErrorKind::Unknown, "CHECK constraint failed: price >= 0"),
        ErrorCode::ValidationError,
        "Validation error: CHECK constraint failed: price >= 0"
    )]
    #[case(
        database_error(DatabaseErrorKind::Unknown, "database is locked"),
        ErrorCode::DatabaseBusy,
        "Database is temporarily unavailable"
    )]
    #[case(
        database_error(DatabaseErrorKind::Unknown, "database table is locked"),
        ErrorCode::DatabaseBusy,
        "Database is temporarily unavailable"
    )]
    #[case(
        database_error(DatabaseErrorKind::Unknown, "disk I/O error"),
        ErrorCode::DatabaseError,
        "Database operation failed: disk I/O error"
    )]
    fn engine_failures_follow_decision_table(
        #[case] error: DieselError,
        #[case] code: ErrorCode,
        #[case] message: &str,
    ) {
        let translated = translate(error, Some(FailureContext::new("Product", 3)));
        assert_eq!(translated.code(), code);
        assert_eq!(translated.message(), message);
    }

    #[rstest]
    fn zero_rows_with_context_is_not_found() {
        let translated = translate(
            StorageFailure::no_rows_affected(),
            Some(FailureContext::new("Delivery", 42)),
        );
        assert_eq!(translated.code(), ErrorCode::NotFound);
        assert_eq!(translated.message(), "Delivery with ID 42 not found");
    }

    #[rstest]
    fn diesel_not_found_with_context_is_not_found() {
        let translated = translate(DieselError::NotFound, Some(FailureContext::new("Branch", 7)));
        assert_eq!(translated.message(), "Branch with ID 7 not found");
    }

    #[rstest]
    fn zero_rows_without_context_is_a_database_error() {
        let translated = translate(StorageFailure::no_rows_affected(), None);
        assert_eq!(translated.code(), ErrorCode::DatabaseError);
        assert_eq!(
            translated.message(),
            "Database operation failed: no rows affected"
        );
    }

    #[rstest]
    fn uniqueness_wins_over_zero_rows() {
        let translated = translate(
            database_error(DatabaseErrorKind::UniqueViolation, "UNIQUE constraint failed"),
            Some(FailureContext::new("Product", 1)),
        );
        assert_eq!(translated.code(), ErrorCode::Conflict);
    }

    #[rstest]
    fn closed_database_is_a_database_error() {
        let translated = translate(DatabaseClosed, None);
        assert_eq!(translated.code(), ErrorCode::DatabaseError);
        assert_eq!(
            translated.message(),
            "Database operation failed: database connection is closed"
        );
    }
}
