//! Client-side reading of the session JWT. The signature is not verified here;
//! the backend remains the authority on token validity.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde::Deserialize;

use crate::common::SessionError;

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Claims {
    #[serde(default)]
    pub exp: Option<f64>,
    #[serde(default)]
    pub iat: Option<f64>,
    #[serde(default)]
    pub role: Option<String>,
}

impl Claims {
    /// Expiry as seconds since the Unix epoch.
    pub fn expires_at(&self) -> Option<i64> {
        self.exp.map(|exp| exp.floor() as i64)
    }
}

pub fn decode_claims(token: &str) -> Result<Claims, SessionError> {
    let payload = token
        .split('.')
        .nth(1)
        .map(|segment| segment.trim().trim_end_matches('='))
        .filter(|segment| !segment.is_empty())
        .ok_or_else(|| SessionError::MalformedToken("missing payload segment".into()))?;

    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|e| SessionError::MalformedToken(e.to_string()))?;

    serde_json::from_slice(&bytes).map_err(|e| SessionError::MalformedToken(e.to_string()))
}

/// Whether the token must no longer be used at `now` (Unix seconds). A token
/// that cannot be read counts as expired; one without `exp` never expires here.
pub fn is_expired(token: &str, now: i64) -> bool {
    match decode_claims(token) {
        Ok(claims) => claims.expires_at().is_some_and(|exp| exp <= now),
        Err(e) => {
            log::warn!("Discarding unreadable session token: {e}");
            true
        }
    }
}
