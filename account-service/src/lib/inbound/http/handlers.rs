use auth::JwtError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use crate::account::errors::AuthError;

pub mod health;
pub mod not_found;
pub mod sign_in;
pub mod sign_up;
pub mod whoami;

/// Successful response: status code plus a JSON body serialized as-is.
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize>(StatusCode, Json<T>);

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    BadRequest(String),
    Conflict(String),
    NotFound(String),
    Unauthorized(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::InternalServerError(msg)
            | ApiError::BadRequest(msg)
            | ApiError::Conflict(msg)
            | ApiError::NotFound(msg)
            | ApiError::Unauthorized(msg) => msg,
        };

        (status, Json(ApiErrorBody { error: message })).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials(_)
            | AuthError::MalformedHeader(_)
            | AuthError::Token(JwtError::Malformed(_))
            | AuthError::Token(JwtError::MalformedHeader(_)) => ApiError::BadRequest(err.to_string()),
            AuthError::InvalidAuthentication
            | AuthError::UnregisteredUser(_)
            | AuthError::Token(JwtError::InvalidSignature)
            | AuthError::Token(JwtError::Expired) => ApiError::Unauthorized(err.to_string()),
            AuthError::UsernameTaken(_) => ApiError::Conflict(err.to_string()),
            AuthError::Store(_) => ApiError::InternalServerError(err.to_string()),
            AuthError::Internal(_) | AuthError::Token(JwtError::EncodingFailed(_)) => {
                ApiError::InternalServerError("internal server error".to_string())
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorBody {
    pub error: String,
}

/// Request body shared by sign-up and sign-in.
#[derive(Deserialize)]
pub struct CredentialsRequestBody {
    username: String,
    password: String,
}

impl From<CredentialsRequestBody> for auth::Credentials {
    fn from(body: CredentialsRequestBody) -> Self {
        auth::Credentials::new(body.username, body.password)
    }
}
