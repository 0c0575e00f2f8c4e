use chrono::Utc;
use elegance_core::{Claims, Email, Role, TokenService, TokenServiceError, UserId};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

pub const DEFAULT_TOKEN_TTL_SECONDS: i64 = 7200;

/// HS256 bearer tokens signed with a shared secret.
#[derive(Clone)]
pub struct JwtTokenService {
    secret: Secret<String>,
    ttl_seconds: i64,
}

impl JwtTokenService {
    pub fn new(secret: Secret<String>, ttl_seconds: i64) -> Self {
        Self {
            secret,
            ttl_seconds,
        }
    }

    fn secret_bytes(&self) -> &[u8] {
        self.secret.expose_secret().as_bytes()
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct TokenClaims {
    #[serde(rename = "userId")]
    user_id: String,
    email: String,
    #[serde(rename = "type")]
    role: String,
    exp: i64,
}

impl TokenService for JwtTokenService {
    fn issue_token(
        &self,
        user_id: &UserId,
        email: &Email,
        role: Role,
    ) -> Result<String, TokenServiceError> {
        let delta = chrono::Duration::try_seconds(self.ttl_seconds).ok_or_else(|| {
            TokenServiceError::SigningFailed("Failed to create auth token duration".to_string())
        })?;
        let exp = Utc::now()
            .checked_add_signed(delta)
            .ok_or_else(|| TokenServiceError::SigningFailed("Duration out of range".to_string()))?
            .timestamp();

        let claims = TokenClaims {
            user_id: user_id.to_string(),
            email: email.as_str().to_owned(),
            role: role.as_str().to_owned(),
            exp,
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret_bytes()),
        )
        .map_err(|e| TokenServiceError::SigningFailed(e.to_string()))
    }

    fn verify_token(&self, token: &str) -> Result<Claims, TokenServiceError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let claims = decode::<TokenClaims>(
            token,
            &DecodingKey::from_secret(self.secret_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => TokenServiceError::Expired,
            _ => TokenServiceError::InvalidToken(e.to_string()),
        })?;

        let invalid = |e: elegance_core::UserError| TokenServiceError::InvalidToken(e.to_string());
        Ok(Claims {
            user_id: UserId::parse(&claims.user_id).map_err(invalid)?,
            email: Email::try_from(claims.email).map_err(invalid)?,
            role: Role::try_from(claims.role.as_str()).map_err(invalid)?,
            expires_at: claims.exp,
        })
    }
}
