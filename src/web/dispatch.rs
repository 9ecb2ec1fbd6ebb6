use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::web::format::ResponseFormat;
use crate::web::templates::{render_error, render_result};
use crate::xref::resolver::CrossReferenceResult;
use crate::xref::XrefError;

/// A parsed request for a cross-reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossReferenceRequest {
    pub database: String,
    pub accession: String,
    pub format: ResponseFormat,
}

impl CrossReferenceRequest {
    /// Build a request from raw parameters; a missing format means redirect.
    ///
    /// # Errors
    ///
    /// Returns `XrefError::UnknownFormat` if `format` is not a recognized format.
    pub fn parse(database: &str, accession: &str, format: Option<&str>) -> Result<Self, XrefError> {
        let format = match format {
            Some(f) => f.parse()?,
            None => ResponseFormat::default(),
        };
        Ok(Self {
            database: database.to_string(),
            accession: accession.to_string(),
            format,
        })
    }
}

/// The single response produced for a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// 302 to the external entry
    Redirect(String),
    /// 200 with a rendered body
    Rendered {
        content_type: &'static str,
        body: String,
    },
    /// 400 with a rendered error page
    Error { error: XrefError, body: String },
}

impl Reply {
    fn error(result: &CrossReferenceResult, error: XrefError) -> Self {
        tracing::warn!(
            database = %result.database,
            accession = %result.accession,
            "{error}"
        );
        let body = render_error(result, &error);
        Self::Error { error, body }
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Redirect(_) => StatusCode::FOUND,
            Self::Rendered { .. } => StatusCode::OK,
            Self::Error { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::Redirect(url) => (status, [(header::LOCATION, url)]).into_response(),
            Self::Rendered { content_type, body } => {
                (status, [(header::CONTENT_TYPE, content_type)], body).into_response()
            }
            Self::Error { body, .. } => (
                status,
                [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
                body,
            )
                .into_response(),
        }
    }
}

/// Resolve a request and choose the response shape for its format
#[must_use]
pub fn dispatch(request: &CrossReferenceRequest) -> Reply {
    let result = CrossReferenceResult::lookup(&request.database, &request.accession);

    match request.format {
        ResponseFormat::Redirect => match result.require_url() {
            Ok(url) => Reply::Redirect(url.to_string()),
            Err(e) => Reply::error(&result, e),
        },
        ResponseFormat::Body(format) => Reply::Rendered {
            content_type: format.content_type(),
            body: render_result(format, &result),
        },
    }
}

/// Parse the raw parameters and dispatch, turning a bad format into an error reply
#[must_use]
pub fn handle(database: &str, accession: &str, format: Option<&str>) -> Reply {
    match CrossReferenceRequest::parse(database, accession, format) {
        Ok(request) => dispatch(&request),
        Err(e) => {
            let result = CrossReferenceResult::lookup(database, accession);
            Reply::error(&result, e)
        }
    }
}
