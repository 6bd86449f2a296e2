//! Чтение полезной нагрузки JWT на клиенте.
//!
//! Подпись не проверяется: токен выдаёт и проверяет сервер, клиенту нужны
//! только роль, арендатор и срок действия.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use contracts::system::auth::TokenClaims;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("token must have three dot-separated parts")]
    Malformed,
    #[error("token payload is not valid base64url")]
    Encoding,
    #[error("token payload is not valid claims JSON: {0}")]
    Claims(String),
}

pub fn decode_claims(token: &str) -> Result<TokenClaims, JwtError> {
    let mut parts = token.trim().split('.');
    let (Some(_header), Some(payload), Some(_signature), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(JwtError::Malformed);
    };

    // some issuers keep the padding
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|_| JwtError::Encoding)?;
    serde_json::from_slice(&bytes).map_err(|e| JwtError::Claims(e.to_string()))
}

/// `now` in seconds since the epoch
pub fn is_expired(claims: &TokenClaims, now: i64) -> bool {
    claims.exp <= now
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::Role;

    fn token_for(payload: &str) -> String {
        format!(
            "{}.{}.signature",
            URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
            URL_SAFE_NO_PAD.encode(payload)
        )
    }

    #[test]
    fn test_decode_claims() {
        let token = token_for(
            r#"{"sub":"u1","username":"amina","role":"accountant","tenant_id":"t1","exp":2000,"iat":1000}"#,
        );
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.sub, "u1");
        assert_eq!(claims.role, Role::Accountant);
        assert_eq!(claims.tenant_id.as_deref(), Some("t1"));
        assert!(!is_expired(&claims, 1999));
        assert!(is_expired(&claims, 2000));
    }

    #[test]
    fn test_tenant_is_optional() {
        let token = token_for(r#"{"sub":"u1","username":"root","role":"super_admin","exp":1,"iat":0}"#);
        assert_eq!(decode_claims(&token).unwrap().tenant_id, None);
    }

    #[test]
    fn test_malformed_tokens() {
        assert_eq!(decode_claims("abc"), Err(JwtError::Malformed));
        assert_eq!(decode_claims("a.b.c.d"), Err(JwtError::Malformed));
        assert_eq!(decode_claims("a.%%%.c"), Err(JwtError::Encoding));
        assert!(matches!(
            decode_claims(&token_for("not json")),
            Err(JwtError::Claims(_))
        ));
    }
}
