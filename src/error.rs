use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// The one failure signal the fetch gateway hands back. The message is for logs only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("data fetch failed: {0}")]
    Failed(String),
}

impl FetchError {
    pub fn new(detail: impl Into<String>) -> Self {
        Self::Failed(detail.into())
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        Self::Failed(err.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Failed(err.to_string())
    }
}

/// Fatal condition on the page body path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    #[error("failed to fetch data")]
    FetchFailed(#[source] FetchError),
}

impl From<FetchError> for PageError {
    fn from(err: FetchError) -> Self {
        Self::FetchFailed(err)
    }
}

impl ResponseError for PageError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::html())
            .body(crate::view::error::render_error_page().into_string())
    }
}
