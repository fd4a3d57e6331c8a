use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Ways a relayed completion can fail. The caller sees the same 500 for all of them.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("completion service answered {status}")]
    Upstream { status: reqwest::StatusCode },
    #[error("completion service unreachable: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("completion service sent an unexpected body: {0}")]
    Decode(#[source] reqwest::Error),
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}
