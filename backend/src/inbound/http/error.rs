//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn domain failures into consistent JSON envelopes and status
//! codes. Failures that never became a domain error are caught by
//! [`error_boundary`] and rendered as a generic internal error.

use actix_web::body::EitherBody;
use actix_web::dev::ServiceResponse;
use actix_web::middleware::{ErrorHandlerResponse, ErrorHandlers};
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use tracing::{debug, error};

use crate::domain::{Error, ErrorCode};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Code reported for failures that are not domain errors.
pub const INTERNAL_ERROR_CODE: &str = "INTERNAL_ERROR";
/// Message reported for failures that are not domain errors.
pub const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Wire shape of every JSON error response: `{"error": {...}}`.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope<T> {
    pub error: T,
}

#[derive(Debug, Serialize)]
struct InternalErrorBody {
    code: &'static str,
    message: &'static str,
}

/// Status code for a domain error code.
pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ValidationError => StatusCode::BAD_REQUEST,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,
        ErrorCode::DatabaseBusy => StatusCode::SERVICE_UNAVAILABLE,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!(code = %self.code(), message = self.message(), "request failed");
        } else {
            debug!(code = %self.code(), message = self.message(), "request rejected");
        }
        HttpResponse::build(status).json(ErrorEnvelope { error: self })
    }
}

/// The generic response sent for any failure that is not a domain error.
pub fn internal_error_response() -> HttpResponse {
    HttpResponse::InternalServerError().json(ErrorEnvelope {
        error: InternalErrorBody {
            code: INTERNAL_ERROR_CODE,
            message: INTERNAL_ERROR_MESSAGE,
        },
    })
}

/// Middleware replacing untyped failures with the generic error envelope.
///
/// Responses produced from a domain [`Error`] pass through untouched, as do
/// error statuses with no attached failure (unmatched routes, for example).
///
/// # Examples
/// ```
/// use actix_web::App;
/// use storefront::inbound::http::error::error_boundary;
///
/// let _app = App::new().wrap(error_boundary());
/// ```
pub fn error_boundary<B: 'static>() -> ErrorHandlers<B> {
    ErrorHandlers::new().default_handler(replace_untyped_failure)
}

fn replace_untyped_failure<B>(
    res: ServiceResponse<B>,
) -> actix_web::Result<ErrorHandlerResponse<B>> {
    let Some(failure) = res
        .response()
        .error()
        .filter(|failure| failure.as_error::<Error>().is_none())
    else {
        return Ok(ErrorHandlerResponse::Response(res.map_into_left_body()));
    };
    error!(
        error = %failure,
        method = %res.request().method(),
        path = res.request().path(),
        "unhandled request failure"
    );
    let (req, _) = res.into_parts();
    let replaced: ServiceResponse<EitherBody<B>> =
        ServiceResponse::new(req, internal_error_response()).map_into_right_body();
    Ok(ErrorHandlerResponse::Response(replaced))
}
