use axum::extract::Request;
use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

use super::handlers::ApiError;
use crate::account::errors::AuthError;
use crate::inbound::http::router::AppState;

/// Middleware that gates a route on a valid bearer token.
///
/// On success the caller's `Identity` is added to request extensions for
/// downstream handlers; on failure the pipeline is aborted with 400, 401 or
/// 500.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let authorization = req
        .headers()
        .get(AUTHORIZATION)
        .map(|value| {
            value.to_str().map(str::to_owned).map_err(|_| {
                ApiError::from(AuthError::MalformedHeader(
                    "Authorization header is not valid ASCII".to_string(),
                ))
            })
        })
        .transpose()?;

    let identity = state
        .gateway
        .gate(authorization.as_deref())
        .await
        .map_err(|e| {
            tracing::warn!(
                method = %req.method(),
                uri = %req.uri(),
                error = %e,
                "Request rejected by authentication gate"
            );
            ApiError::from(e)
        })?;

    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}
