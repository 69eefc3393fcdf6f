use crate::api::context::RequestContext;
use crate::domain::pagination::InvalidPageQuery;
use crate::domain::validation::ValidationErrors;
use crate::service::AppError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};
use std::num::ParseIntError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub messages: Vec<String>,
}

/// Problems with the request itself, found before any service call.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error(transparent)]
    Body(#[from] serde_json::Error),
    #[error("id {value:?} is invalid: {source}")]
    Id {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

pub fn parse_id(value: &str) -> Result<i64, RequestError> {
    value.parse().map_err(|source| RequestError::Id {
        value: value.to_string(),
        source,
    })
}

/// Field rule violations become one message each, any other error its own text.
pub fn parse_error(err: &anyhow::Error) -> ErrorResponse {
    match err.downcast_ref::<ValidationErrors>() {
        Some(errors) => ErrorResponse {
            messages: errors.messages(),
        },
        None => ErrorResponse {
            messages: vec![err.to_string()],
        },
    }
}

pub fn status_code(err: &anyhow::Error) -> StatusCode {
    if err.is::<ValidationErrors>() || err.is::<RequestError>() || err.is::<InvalidPageQuery>() {
        return StatusCode::BAD_REQUEST;
    }
    match err.downcast_ref::<AppError>() {
        Some(AppError::FeatureDisabled) => StatusCode::FORBIDDEN,
        Some(AppError::SpenderNotFound) | Some(AppError::TransactionNotFound) => {
            StatusCode::NOT_FOUND
        }
        None => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Logs the failure against the request and renders it as `{"messages": [...]}`.
pub fn error_response(ctx: &RequestContext, err: anyhow::Error, what: &str) -> HttpResponse {
    let status = status_code(&err);
    if status.is_server_error() {
        log::error!(request_id:% = ctx.request_id, method:% = ctx.method, path:% = ctx.path, status = status.as_u16(), error:% = err; "{what}");
    } else {
        log::warn!(request_id:% = ctx.request_id, method:% = ctx.method, path:% = ctx.path, status = status.as_u16(), error:% = err; "{what}");
    }

    HttpResponse::build(status).json(parse_error(&err))
}
