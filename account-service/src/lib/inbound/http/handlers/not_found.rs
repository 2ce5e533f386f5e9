use axum::http::Uri;
use axum::Extension;

use super::ApiError;
use crate::account::models::Identity;

/// Fallback for unknown paths. Runs behind the gate, so only authenticated
/// callers learn that a route does not exist.
pub async fn not_found(Extension(identity): Extension<Identity>, uri: Uri) -> ApiError {
    tracing::debug!(username = %identity.username, uri = %uri, "No route matched");
    ApiError::NotFound(format!("No route for {}", uri.path()))
}
