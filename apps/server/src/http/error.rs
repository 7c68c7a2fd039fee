use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

/// Errors the API itself renders.
///
/// The route handlers cannot fail, so this only covers requests that never reach one.
/// A known path hit with the wrong method is answered by the framework (`405`).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Return `404 Not Found`
    #[error("request path not found")]
    NotFound,
}

impl Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }

    fn title(&self) -> String {
        match self {
            Self::NotFound => "Not Found",
        }
        .to_string()
    }
}

#[derive(Debug, serde::Serialize)]
pub struct ErrorBody {
    title: String,
    status: u16,
    message: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();

        (status, Json(ErrorBody::from(self))).into_response()
    }
}

impl From<Error> for ErrorBody {
    fn from(error: Error) -> Self {
        Self {
            title: error.title(),
            message: error.to_string(),
            status: error.status_code().as_u16(),
        }
    }
}
