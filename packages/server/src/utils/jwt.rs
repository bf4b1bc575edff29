use anyhow::Result;
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::storage::UserProfile;

/// Session claims issued by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Identity-provider subject, used as the user id
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub profile_image_url: Option<String>,
    pub exp: usize, // Expiration timestamp
}

impl Claims {
    /// Claims for `sub` that expire in `ttl`.
    pub fn new(sub: impl Into<String>, ttl: Duration) -> Self {
        Self {
            sub: sub.into(),
            email: None,
            first_name: None,
            last_name: None,
            profile_image_url: None,
            exp: (Utc::now() + ttl).timestamp().max(0) as usize,
        }
    }
}

impl From<Claims> for UserProfile {
    fn from(c: Claims) -> Self {
        Self {
            id: c.sub,
            email: c.email,
            first_name: c.first_name,
            last_name: c.last_name,
            profile_image_url: c.profile_image_url,
        }
    }
}

/// Sign session claims with the shared HS256 secret.
pub fn sign(claims: &Claims, secret: &str) -> Result<String> {
    let token = encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;
    Ok(token)
}

/// Verify and decode a session token.
pub fn verify(token: &str, secret: &str) -> Result<Claims> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(token_data.claims)
}
