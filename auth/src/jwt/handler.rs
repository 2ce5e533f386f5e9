use chrono::Duration;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::JwtError;

/// Issues and parses signed, time-bounded bearer tokens.
///
/// Tokens are compact JWS strings signed with HS256 using a secret fixed at
/// construction. The handler holds no mutable state and can be shared across
/// tasks behind an `Arc`.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    lifetime: Duration,
    empty_secret: bool,
}

impl JwtHandler {
    /// Default token lifetime: seven days.
    pub const DEFAULT_LIFETIME_HOURS: i64 = 24 * 7;

    /// Create a handler signing with `secret`, issuing tokens valid for `lifetime`.
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Anyone holding the secret can mint tokens for any username
    pub fn new(secret: &[u8], lifetime: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            lifetime,
            empty_secret: secret.is_empty(),
        }
    }

    /// Issue a token for `username`, expiring after the configured lifetime.
    ///
    /// # Errors
    /// * `EncodingFailed` - Secret is empty, expiry overflows, or signing failed
    pub fn issue(&self, username: &str) -> Result<String, JwtError> {
        self.encode(&Claims::for_user(username, self.lifetime)?)
    }

    /// Sign arbitrary claims.
    ///
    /// # Errors
    /// * `EncodingFailed` - Secret is empty or signing failed
    pub fn encode(&self, claims: &Claims) -> Result<String, JwtError> {
        if self.empty_secret {
            return Err(JwtError::EncodingFailed("signing key is empty".to_string()));
        }

        encode(&Header::new(self.algorithm), claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Verify a token's signature and expiry and return its claims.
    ///
    /// Expiry is checked with zero leeway.
    ///
    /// # Errors
    /// * `InvalidSignature` - Signature does not match the payload
    /// * `Expired` - `exp` is in the past
    /// * `Malformed` - Wrong segment count, bad encoding, unexpected algorithm,
    ///   or missing claims
    pub fn parse(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                ErrorKind::ExpiredSignature => JwtError::Expired,
                _ => JwtError::Malformed(e.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    const SECRET: &[u8] = b"my_secret_key_at_least_32_bytes_long!";

    fn handler() -> JwtHandler {
        JwtHandler::new(SECRET, Duration::hours(JwtHandler::DEFAULT_LIFETIME_HOURS))
    }

    /// Replace the first character of the signature segment.
    fn tamper_signature(token: &str) -> String {
        let (head, signature) = token.rsplit_once('.').unwrap();
        let mut chars: Vec<char> = signature.chars().collect();
        chars[0] = if chars[0] == 'A' { 'B' } else { 'A' };
        format!("{}.{}", head, chars.into_iter().collect::<String>())
    }

    #[test]
    fn test_issue_and_parse() {
        let handler = handler();

        let token = handler.issue("alice").expect("Failed to issue token");
        assert_eq!(token.split('.').count(), 3);

        let claims = handler.parse(&token).expect("Failed to parse token");
        assert_eq!(claims.username, "alice");
        assert_eq!(
            claims.exp - claims.iat,
            JwtHandler::DEFAULT_LIFETIME_HOURS * 60 * 60
        );
    }

    #[test]
    fn test_parse_tampered_signature() {
        let handler = handler();
        let token = handler.issue("alice").unwrap();

        assert_eq!(
            handler.parse(&tamper_signature(&token)),
            Err(JwtError::InvalidSignature)
        );
    }

    #[test]
    fn test_parse_tampered_payload() {
        let handler = handler();
        let token = handler.issue("alice").unwrap();
        let forged = handler.issue("mallory").unwrap();

        // alice's header and signature around mallory's payload
        let parts: Vec<&str> = token.split('.').collect();
        let forged_parts: Vec<&str> = forged.split('.').collect();
        let spliced = format!("{}.{}.{}", parts[0], forged_parts[1], parts[2]);

        assert_eq!(handler.parse(&spliced), Err(JwtError::InvalidSignature));
    }

    #[test]
    fn test_parse_with_wrong_secret() {
        let issuer = JwtHandler::new(b"secret1_at_least_32_bytes_long_key!", Duration::hours(1));
        let verifier = JwtHandler::new(b"secret2_at_least_32_bytes_long_key!", Duration::hours(1));

        let token = issuer.issue("alice").unwrap();
        assert_eq!(verifier.parse(&token), Err(JwtError::InvalidSignature));
    }

    #[test]
    fn test_parse_expired_token() {
        let handler = handler();
        let issued = Utc::now() - Duration::days(8);
        let claims = Claims::new("alice", issued, Duration::days(7)).unwrap();
        let token = handler.encode(&claims).unwrap();

        assert_eq!(handler.parse(&token), Err(JwtError::Expired));
    }

    #[test]
    fn test_parse_malformed_tokens() {
        let handler = handler();

        for token in ["", "invalid", "invalid.token", "invalid.token.here", "a.b.c.d"] {
            assert!(
                matches!(handler.parse(token), Err(JwtError::Malformed(_))),
                "token {:?} should be malformed",
                token
            );
        }
    }

    #[test]
    fn test_issue_with_empty_secret() {
        let handler = JwtHandler::new(b"", Duration::hours(1));

        assert!(matches!(
            handler.issue("alice"),
            Err(JwtError::EncodingFailed(_))
        ));
    }

    #[test]
    fn test_issue_with_unrepresentable_lifetime() {
        let handler = JwtHandler::new(SECRET, Duration::MAX);

        assert!(matches!(
            handler.issue("alice"),
            Err(JwtError::EncodingFailed(_))
        ));
    }
}
