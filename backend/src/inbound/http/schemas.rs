//! OpenAPI schema definitions for the error envelope.
//!
//! The domain [`Error`](crate::domain::Error) serialises through a private
//! DTO and is wrapped by the HTTP adapter, so its wire shape is described
//! here rather than derived.

use utoipa::ToSchema;

/// OpenAPI schema for the codes carried in error responses.
#[derive(ToSchema)]
#[schema(as = ErrorCode)]
pub enum ErrorCodeSchema {
    /// The requested resource does not exist.
    #[schema(rename = "NOT_FOUND")]
    NotFound,
    /// The request is malformed or references missing data.
    #[schema(rename = "VALIDATION_ERROR")]
    ValidationError,
    /// The request collides with an existing resource.
    #[schema(rename = "CONFLICT")]
    Conflict,
    /// The storage engine failed.
    #[schema(rename = "DATABASE_ERROR")]
    DatabaseError,
    /// The storage engine is busy; retry later.
    #[schema(rename = "DATABASE_BUSY")]
    DatabaseBusy,
    /// An unexpected failure outside the domain.
    #[schema(rename = "INTERNAL_ERROR")]
    InternalError,
}

/// OpenAPI schema for the body nested under `error`.
#[derive(ToSchema)]
#[schema(as = ErrorBody)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorBodySchema {
    /// Stable machine-readable error code.
    #[schema(example = "NOT_FOUND")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "Product with ID 42 not found")]
    message: String,
}

/// OpenAPI schema for every JSON error response.
#[derive(ToSchema)]
#[schema(as = ErrorEnvelope)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorEnvelopeSchema {
    error: ErrorBodySchema,
}
