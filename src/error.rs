//! Defines the crate level error type and its mapping to user-facing alerts.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::views::html::error_view;

/// The errors that may occur in the quick-operation, push and service worker components.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A string could not be parsed as an operation type.
    ///
    /// Valid values are "INCOME", "EXPENSE" and "TRANSFER" (case-insensitive).
    #[error("\"{0}\" is not a valid operation type")]
    InvalidOperationType(String),

    /// A category was tagged with something other than "INCOME" or "EXPENSE".
    #[error("\"{0}\" is not a valid category type")]
    InvalidCategoryKind(String),

    /// The platform does not support push messaging or service workers.
    #[error("push notifications are not supported on this platform")]
    PushUnsupported,

    /// The host page did not provide a public key for push encryption.
    #[error("the push public key has not been configured")]
    MissingPublicKey,

    /// The public key could not be decoded into an application server key.
    #[error("invalid push public key: {0}")]
    InvalidPublicKey(String),

    /// A push or service worker platform call failed.
    #[error("platform error: {0}")]
    Platform(String),

    /// A request to the backend could not be completed.
    #[error("backend request failed: {0}")]
    Backend(String),

    /// The backend answered with a non-success status code.
    #[error("backend responded with status {0}")]
    BackendStatus(u16),

    /// Another subscribe/unsubscribe/test action is still running.
    #[error("another push action is already in progress")]
    OperationInFlight,

    /// A service worker host call failed.
    #[error("service worker error: {0}")]
    Worker(String),

    /// The host page data (categories and wallets) could not be loaded.
    #[error("invalid host page data: {0}")]
    InvalidHostPageData(String),
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        match value.status() {
            Some(status) => Error::BackendStatus(status.as_u16()),
            None => Error::Backend(value.to_string()),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::InvalidHostPageData(value.to_string())
    }
}

impl Error {
    /// The message to show the user in a blocking alert, if any.
    ///
    /// Returns `None` for errors that should not be surfaced at all. A denied
    /// notification permission is not an error, it is shown as
    /// [UiState::Denied](crate::UiState::Denied).
    pub fn alert_message(&self) -> Option<String> {
        match self {
            Error::PushUnsupported => {
                Some("Push notifications are not supported by this browser.".to_owned())
            }
            Error::MissingPublicKey | Error::InvalidPublicKey(_) => Some(
                "Push notifications are not configured on the server. \
                Please contact the administrator."
                    .to_owned(),
            ),
            Error::OperationInFlight => None,
            Error::Platform(details) => Some(format!(
                "Could not enable push notifications: {details}"
            )),
            Error::Backend(_) | Error::BackendStatus(_) => Some(
                "Could not reach the server. Check your connection and try again.".to_owned(),
            ),
            error => Some(format!("Something went wrong: {error}")),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        // Errors reaching a handler are never meant to be shown to the client.
        tracing::error!("An unexpected error occurred: {}", self);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            error_view(
                "Internal Server Error",
                "500",
                "Sorry, something went wrong. Check the server logs for more details.",
            ),
        )
            .into_response()
    }
}
