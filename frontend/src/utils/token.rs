//! Bearer token inspection and the route authorization check.
//!
//! The token is never verified here; the server does that on every call. The
//! client only reads the payload segment to learn when the token stops being
//! worth sending.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;
use thiserror::Error;

use crate::router::LOGIN_PATH;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Claims {
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub exp: Option<serde_json::Number>,
}

impl Claims {
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        let exp = self.exp.as_ref()?;
        let seconds = exp
            .as_i64()
            .or_else(|| exp.as_f64().map(|value| value.trunc() as i64))?;
        Utc.timestamp_opt(seconds, 0).single()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("token is not a three-part JWT")]
    Malformed,
    #[error("token payload is not base64url")]
    Encoding,
    #[error("token payload is not a claims object")]
    Claims,
    #[error("token carries no expiry claim")]
    MissingExpiry,
    #[error("token expired at {0}")]
    Expired(DateTime<Utc>),
}

pub fn decode_claims(token: &str) -> Result<Claims, TokenError> {
    let mut parts = token.trim().split('.');
    let (Some(_header), Some(payload), Some(_signature), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(TokenError::Malformed);
    };
    let decoded = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|_| TokenError::Encoding)?;
    serde_json::from_slice::<Claims>(&decoded).map_err(|_| TokenError::Claims)
}

/// Expiry of a raw token, or why it cannot be trusted.
pub fn valid_until(token: &str) -> Result<DateTime<Utc>, TokenError> {
    decode_claims(token)?
        .expires_at()
        .ok_or(TokenError::MissingExpiry)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthDecision {
    Allow {
        valid_until: DateTime<Utc>,
    },
    /// `reason` is `None` when there was no token at all.
    Redirect {
        to: &'static str,
        reason: Option<TokenError>,
    },
}

impl AuthDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, AuthDecision::Allow { .. })
    }
}

pub fn authorize(token: Option<&str>, now: DateTime<Utc>) -> AuthDecision {
    let Some(token) = token.filter(|t| !t.trim().is_empty()) else {
        return AuthDecision::Redirect {
            to: LOGIN_PATH,
            reason: None,
        };
    };
    match valid_until(token) {
        Ok(expiry) if expiry > now => AuthDecision::Allow {
            valid_until: expiry,
        },
        Ok(expiry) => AuthDecision::Redirect {
            to: LOGIN_PATH,
            reason: Some(TokenError::Expired(expiry)),
        },
        Err(err) => AuthDecision::Redirect {
            to: LOGIN_PATH,
            reason: Some(err),
        },
    }
}
