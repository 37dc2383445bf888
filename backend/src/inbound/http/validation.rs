//! Extractor configuration turning malformed requests into validation errors.
//!
//! Actix reports body and path extraction failures with its own plain error
//! types. These handlers convert them to domain validation errors so clients
//! always receive the JSON error envelope.

use actix_web::error::{JsonPayloadError, PathError};
use actix_web::{HttpRequest, web};
use tracing::debug;

use crate::domain::Error;

/// Largest accepted JSON body.
const JSON_LIMIT_BYTES: usize = 256 * 1024;

/// JSON body configuration shared by every resource route.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_LIMIT_BYTES)
        .error_handler(json_error)
}

/// Path configuration rejecting non-numeric identifiers.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(path_error)
}

fn json_error(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, path = req.path(), "request body rejected");
    Error::validation(describe_json_error(&err)).into()
}

fn path_error(err: PathError, req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, path = req.path(), "path parameter rejected");
    Error::validation("id must be an integer").into()
}

fn describe_json_error(err: &JsonPayloadError) -> String {
    match err {
        JsonPayloadError::ContentType => "expected a JSON request body".to_owned(),
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            "request body is too large".to_owned()
        }
        JsonPayloadError::Deserialize(inner) => inner.to_string(),
        other => other.to_string(),
    }
}
