//! HTTP rendering of domain errors.
//!
//! Every response this service sends is specific to one signed-in caller, so
//! error bodies are marked `private, no-store` like the dashboard itself.
//! Internal failures are replaced with a generic message, and authentication
//! failures drop their details so a client cannot tell which credential was
//! wrong.

use actix_web::error::JsonPayloadError;
use actix_web::http::{StatusCode, header};
use actix_web::{HttpRequest, HttpResponse, ResponseError, web};
use serde_json::json;
use tracing::{debug, error};

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Cache policy for per-caller responses.
pub const PRIVATE_NO_STORE: &str = "private, no-store";

/// Largest JSON body accepted by the API; login payloads are tiny.
const JSON_LIMIT_BYTES: usize = 4 * 1024;

const fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::Forbidden => StatusCode::FORBIDDEN,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// The part of `error` a client is allowed to see.
fn public_view(error: &Error) -> Error {
    let visible = match error.code() {
        ErrorCode::InternalError => Error::internal("Internal server error"),
        code @ (ErrorCode::Unauthorized | ErrorCode::Forbidden) => {
            Error::new(code, error.message())
        }
        _ => return error.clone(),
    };
    match error.trace_id() {
        Some(id) => visible.with_trace_id(id.to_owned()),
        None => visible,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!(code = ?self.code(), message = self.message(), trace_id = ?self.trace_id(), "request failed");
        } else {
            debug!(code = ?self.code(), message = self.message(), "request rejected");
        }

        let mut builder = HttpResponse::build(status);
        builder.insert_header((header::CACHE_CONTROL, PRIVATE_NO_STORE));
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(public_view(self))
    }
}

/// Turn a rejected JSON body into an `invalid_request` error.
fn json_payload_error(err: &JsonPayloadError) -> Error {
    let reason = match err {
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            "too_large"
        }
        JsonPayloadError::ContentType => "content_type",
        JsonPayloadError::Deserialize(_) => "malformed",
        _ => "unreadable",
    };
    Error::invalid_request("request body is not valid JSON")
        .with_details(json!({ "reason": reason }))
}

/// JSON extractor configuration rendering body errors as [`Error`] payloads.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use doctor_dashboard::inbound::http::error::json_config;
///
/// let _app = App::new().app_data(json_config());
/// ```
#[must_use]
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_LIMIT_BYTES)
        .error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
            json_payload_error(&err).into()
        })
}
