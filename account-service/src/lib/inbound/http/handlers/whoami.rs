use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiSuccess;
use crate::account::models::Identity;

/// Echo the identity the gate attached to this request.
pub async fn whoami(Extension(identity): Extension<Identity>) -> ApiSuccess<WhoAmIResponseData> {
    ApiSuccess::new(
        StatusCode::OK,
        WhoAmIResponseData {
            username: identity.username,
        },
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WhoAmIResponseData {
    pub username: String,
}
