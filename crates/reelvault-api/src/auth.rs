//! Bearer JWT authentication.

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::RequestPartsExt;
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::Authorization;
use axum_extra::TypedHeader;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use reelvault_models::UserId;

use crate::error::ApiError;
use crate::state::AppState;

/// Issuer stamped into and required from every token.
pub const TOKEN_ISSUER: &str = "reelvault";

/// JWT claims carried by access tokens.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Principal ID
    pub sub: String,
    /// Issuer
    pub iss: String,
    /// Issued-at (unix seconds)
    pub iat: i64,
    /// Expiry (unix seconds)
    pub exp: i64,
}

/// The authenticated principal, extracted from the bearer token.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub id: UserId,
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, ApiError> {
        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| ApiError::unauthorized("Missing bearer token"))?;

        let claims = verify_token(bearer.token(), &state.config.jwt_secret)?;

        let id = claims
            .sub
            .parse::<UserId>()
            .map_err(|_| ApiError::unauthorized("Invalid token subject"))?;

        Ok(AuthUser { id })
    }
}

/// Mint an access token for `user_id`, valid for `ttl`.
pub fn issue_token(
    user_id: &UserId,
    secret: &str,
    ttl: Duration,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id.to_string(),
        iss: TOKEN_ISSUER.to_string(),
        iat: now.timestamp(),
        exp: (now + ttl).timestamp(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Verify a token's signature, expiry and issuer.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, ApiError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[TOKEN_ISSUER]);

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|_| ApiError::unauthorized("Invalid or expired token"))
}
