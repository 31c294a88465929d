use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{html, Markup};

use crate::{models::SubmissionError, views};

/// Error type returned by handlers. Internal details are logged where the
/// error is created and never sent to the client.
#[derive(Debug)]
pub enum AppError {
    Internal(&'static str),
    Input(String),
    NotFound(&'static str),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Internal(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                error_page("INTERNAL_SERVER_ERROR", message),
            )
                .into_response(),
            AppError::Input(message) => {
                (StatusCode::BAD_REQUEST, error_page("INPUT_ERROR", &message)).into_response()
            }
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message).into_response(),
        }
    }
}

impl From<SubmissionError> for AppError {
    fn from(err: SubmissionError) -> Self {
        tracing::debug!("rejected submission: {err}");
        AppError::Input(err.to_string())
    }
}

pub trait ResultExt<T> {
    /// Log the error and turn it into an [`AppError::Internal`].
    fn reject(self, message: &'static str) -> Result<T, AppError>;
}

impl<T, E: std::fmt::Debug> ResultExt<T> for Result<T, E> {
    fn reject(self, message: &'static str) -> Result<T, AppError> {
        self.map_err(|err| {
            tracing::error!("{message}: {err:?}");
            AppError::Internal(message)
        })
    }
}

fn error_page(code: &str, message: &str) -> Markup {
    views::page(
        "Error",
        html! {
            h1 { (code) }
            p { (message) }
        },
    )
}
