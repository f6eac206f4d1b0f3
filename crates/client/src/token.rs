//! Access-token claims codec.
//!
//! The backend issues compact signed tokens (`header.payload.signature`). Only
//! the payload segment is consumed client-side, and only to read the `exp`
//! claim; signature verification is the backend's job. Decode failure of any
//! kind is treated as "expired", never as "valid".

use base64::Engine;
use base64::engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD};
use serde::Deserialize;
use thiserror::Error;

/// Claims embedded in the token payload. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Claims {
    /// Expiry as epoch seconds.
    pub exp: i64,
}

/// Token decode errors. Callers of [`is_expired_at`] never see these; they
/// all collapse into "expired".
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token has no payload segment")]
    MissingPayload,
    #[error("payload segment is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("payload segment is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("payload is not a valid claims object: {0}")]
    Json(#[from] serde_json::Error),
}

/// Decode the payload segment of a compact token into [`Claims`].
pub fn decode_claims(token: &str) -> Result<Claims, TokenError> {
    let payload = token.split('.').nth(1).ok_or(TokenError::MissingPayload)?;
    // Tokens in the wild carry the URL-safe alphabet with or without padding;
    // some issuers emit the standard alphabet instead.
    let trimmed = payload.trim_end_matches('=');
    let bytes = URL_SAFE_NO_PAD
        .decode(trimmed)
        .or_else(|_| STANDARD_NO_PAD.decode(trimmed))?;
    let json = String::from_utf8(bytes)?;
    Ok(serde_json::from_str(&json)?)
}

/// Whether the token is expired at `now_ms` (epoch milliseconds).
///
/// Never panics and never errors: a malformed token, a missing payload
/// segment, or a missing `exp` claim all report expired.
pub fn is_expired_at(token: &str, now_ms: i64) -> bool {
    match decode_claims(token) {
        Ok(claims) => claims.exp.saturating_mul(1000) < now_ms,
        Err(_) => true,
    }
}

/// Whether the token is expired against the wall clock.
pub fn is_expired(token: &str) -> bool {
    is_expired_at(token, now_ms())
}

/// Current wall-clock time in epoch milliseconds.
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> i64 {
    js_sys::Date::now() as i64
}

/// Current wall-clock time in epoch milliseconds.
#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Result of inspecting the stored access token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// No access token stored.
    Missing,
    /// Token present but expired or undecodable.
    Expired,
    /// Token present and not expired.
    Active,
}

/// Pure core of the session guard's decision: classify the stored access
/// token at `now_ms`.
pub fn session_status(access: Option<&str>, now_ms: i64) -> SessionStatus {
    match access {
        None => SessionStatus::Missing,
        Some(token) if is_expired_at(token, now_ms) => SessionStatus::Expired,
        Some(_) => SessionStatus::Active,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_token(payload_json: &str) -> String {
        format!("abc.{}.sig", URL_SAFE_NO_PAD.encode(payload_json))
    }

    fn token_with_exp(exp: i64) -> String {
        make_token(&format!(r#"{{"exp": {exp}}}"#))
    }

    #[test]
    fn future_exp_is_not_expired() {
        let now = now_ms();
        let token = token_with_exp(now / 1000 + 3600);
        assert!(!is_expired_at(&token, now));
        assert_eq!(session_status(Some(&token), now), SessionStatus::Active);
    }

    #[test]
    fn past_exp_is_expired() {
        let now = now_ms();
        let token = token_with_exp(now / 1000 - 10);
        assert!(is_expired_at(&token, now));
        assert_eq!(session_status(Some(&token), now), SessionStatus::Expired);
    }

    #[test]
    fn single_segment_token_is_expired() {
        assert!(is_expired_at("onlyonepart", now_ms()));
        assert!(matches!(
            decode_claims("onlyonepart"),
            Err(TokenError::MissingPayload)
        ));
    }

    #[test]
    fn garbage_payload_is_expired() {
        assert!(is_expired_at("abc.!!not-base64!!.sig", now_ms()));
        assert!(is_expired_at(&make_token("not json"), now_ms()));
    }

    #[test]
    fn missing_exp_claim_is_expired() {
        assert!(is_expired_at(&make_token(r#"{"sub": "u1"}"#), now_ms()));
    }

    #[test]
    fn padded_payload_decodes() {
        let payload = base64::engine::general_purpose::URL_SAFE.encode(r#"{"exp": 1}"#);
        let token = format!("h.{payload}.s");
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.exp, 1);
    }

    #[test]
    fn standard_alphabet_payload_decodes() {
        use base64::engine::general_purpose::STANDARD;
        let payload = STANDARD.encode(r#"{"exp": 1, "sub": "~~~"}"#);
        // The tildes force a '+' into the standard encoding.
        assert!(payload.contains('+') || payload.contains('/'));
        let token = format!("h.{payload}.s");
        assert_eq!(decode_claims(&token).unwrap().exp, 1);
    }

    #[test]
    fn other_claims_are_ignored() {
        let token = make_token(r#"{"exp": 4102444800, "sub": "u1", "iss": "gateway"}"#);
        assert_eq!(decode_claims(&token).unwrap().exp, 4_102_444_800);
    }

    #[test]
    fn absent_token_is_missing() {
        assert_eq!(session_status(None, now_ms()), SessionStatus::Missing);
    }
}
