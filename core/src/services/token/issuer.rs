//! JWT signing and verification.
//!
//! Every issued token carries a purpose claim; verification pins issuer,
//! audience and purpose, with zero clock leeway.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::{Claims, TokenPurpose};
use crate::errors::{DomainError, DomainResult, TokenError};

use super::config::TokenConfig;

/// Mints and verifies signed tokens for all four purposes
pub struct TokenIssuer {
    config: TokenConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenIssuer {
    /// Creates an issuer from the given configuration
    pub fn new(config: TokenConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.set_audience(&[&config.audience]);
        validation.validate_exp = true;
        validation.leeway = 0;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Configured lifetimes, exposed for collaborators
    pub fn config(&self) -> &TokenConfig {
        &self.config
    }

    /// Signs a token of the given purpose using its configured lifetime
    pub fn issue(
        &self,
        sub: impl Into<String>,
        email: Option<String>,
        purpose: TokenPurpose,
    ) -> DomainResult<String> {
        let ttl = self.config.ttl_for(purpose);
        let mut claims = Claims::new(sub, email, purpose, ttl);
        claims.iss = self.config.issuer.clone();
        claims.aud = self.config.audience.clone();

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            DomainError::Internal {
                message: format!("Failed to sign token: {}", e),
            }
        })
    }

    /// Verifies a signed token and checks it was minted for `expected`.
    ///
    /// An expired signature maps to `TokenError::Expired`; any other
    /// verification failure maps to `TokenError::InvalidSignature`. The
    /// purpose check runs only after the signature is accepted.
    pub fn parse_and_verify(
        &self,
        raw: &str,
        expected: TokenPurpose,
    ) -> DomainResult<Claims> {
        let data = decode::<Claims>(raw, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::InvalidSignature,
            }
        })?;

        if data.claims.purpose != expected {
            return Err(TokenError::WrongPurpose.into());
        }

        Ok(data.claims)
    }
}
