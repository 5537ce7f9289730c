//! Access-token inspection.
//!
//! SYSTEM CONTEXT
//! ==============
//! The client never verifies token signatures; the auth service does that.
//! It only reads the JWT payload to learn when the token expires so routing
//! can decide whether the protected view may render.
//!
//! ERROR HANDLING
//! ==============
//! Decoding returns a typed [`TokenError`], but the gate helpers collapse every
//! failure to "not authenticated". A malformed token is never surfaced to the
//! user as an error.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde::Deserialize;
use thiserror::Error;

/// Reasons an access token could not be read.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The token has no second `.`-separated segment.
    #[error("token has no payload segment")]
    MissingPayload,

    /// The payload segment is not valid base64.
    #[error("token payload is not base64: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The decoded payload is not a JSON object with numeric claims.
    #[error("token payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A required timestamp claim is absent, null or zero.
    #[error("token payload is missing {0}")]
    MissingClaim(&'static str),
}

/// Timestamps carried in an access token, in seconds since the Unix epoch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TokenPayload {
    pub issued_at: f64,
    pub expires_at: f64,
}

impl TokenPayload {
    /// Whether the token is still valid at `now_secs`. Expiry is exclusive.
    pub fn is_live_at(&self, now_secs: f64) -> bool {
        self.expires_at > now_secs
    }
}

// Browsers decode JWT segments leniently: padding is optional and unused
// trailing bits are ignored.
const LENIENT: GeneralPurposeConfig = GeneralPurposeConfig::new()
    .with_encode_padding(false)
    .with_decode_padding_mode(DecodePaddingMode::Indifferent)
    .with_decode_allow_trailing_bits(true);
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT);
const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT);

#[derive(Deserialize)]
struct RawClaims {
    iat: Option<f64>,
    exp: Option<f64>,
}

/// Decode the payload segment of a JWT without checking its signature.
///
/// # Errors
///
/// Returns a [`TokenError`] when the token is not three-part shaped, the
/// payload is not base64/JSON, or `iat`/`exp` are missing.
pub fn decode_payload(token: &str) -> Result<TokenPayload, TokenError> {
    let segment = token
        .split('.')
        .nth(1)
        .filter(|segment| !segment.is_empty())
        .ok_or(TokenError::MissingPayload)?;
    let bytes = URL_SAFE_LENIENT
        .decode(segment)
        .or_else(|_| STANDARD_LENIENT.decode(segment))?;
    let raw: RawClaims = serde_json::from_slice(&bytes)?;

    Ok(TokenPayload {
        issued_at: required_claim(raw.iat, "iat")?,
        expires_at: required_claim(raw.exp, "exp")?,
    })
}

fn required_claim(value: Option<f64>, name: &'static str) -> Result<f64, TokenError> {
    value.filter(|v| v.is_normal()).ok_or(TokenError::MissingClaim(name))
}

/// True iff `token` decodes and expires strictly after `now_secs`.
pub fn is_authenticated_at(token: Option<&str>, now_secs: f64) -> bool {
    let Some(token) = token.filter(|t| !t.is_empty()) else {
        return false;
    };
    match decode_payload(token) {
        Ok(payload) => payload.is_live_at(now_secs),
        Err(e) => {
            log::debug!("treating access token as unauthenticated: {e}");
            false
        }
    }
}

/// [`is_authenticated_at`] against the current wall clock.
pub fn is_authenticated(token: Option<&str>) -> bool {
    is_authenticated_at(token, super::clock::now_secs())
}
