use super::errors::JwtError;

/// Authentication scheme accepted in the `Authorization` header.
pub const BEARER_SCHEME: &str = "Bearer";

/// Extract the token from an `Authorization` header value.
///
/// The value must be exactly `Bearer <token>`: the scheme, one space, and a
/// single non-empty token. The scheme is case-sensitive.
///
/// # Errors
/// * `MalformedHeader` - Empty value, wrong scheme, missing token, or extra
///   space-delimited parts
pub fn extract_bearer_token(header: &str) -> Result<&str, JwtError> {
    let mut parts = header.split(' ');

    match (parts.next(), parts.next(), parts.next()) {
        (Some(BEARER_SCHEME), Some(token), None) if !token.is_empty() => Ok(token),
        (Some(""), None, None) => Err(JwtError::MalformedHeader(
            "Authorization header is empty".to_string(),
        )),
        _ => Err(JwtError::MalformedHeader(
            "expected format 'Bearer <token>'".to_string(),
        )),
    }
}
