//! Error type definitions for authentication, token and mail operations.
//!
//! Every variant here is a recoverable, caller-facing outcome. Status-code
//! mapping happens in the presentation layer.

use authkit_shared::types::response::ErrorResponse;
use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("Authentication failed")]
    LoginFailed,

    #[error("Email already registered")]
    EmailAlreadyExists,

    #[error("User not found")]
    UserNotFound,
}

/// Token-related errors.
///
/// `NotFound`/`Revoked`/`Expired` describe the persisted refresh-token
/// record; `InvalidSignature`/`WrongPurpose` come from signed-token parsing.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("Refresh token not found")]
    NotFound,

    #[error("Refresh token has been revoked")]
    Revoked,

    #[error("Token expired")]
    Expired,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Token presented for the wrong purpose")]
    WrongPurpose,
}

/// Outbound mail errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MailError {
    #[error("Mail delivery failed: {message}")]
    Delivery { message: String },
}

/// Convert AuthError to ErrorResponse
impl From<&AuthError> for ErrorResponse {
    fn from(err: &AuthError) -> Self {
        let error_code = match err {
            AuthError::LoginFailed => "LOGIN_FAILED",
            AuthError::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            AuthError::UserNotFound => "USER_NOT_FOUND",
        };
        ErrorResponse::new(error_code, err.to_string())
    }
}

/// Convert TokenError to ErrorResponse
impl From<&TokenError> for ErrorResponse {
    fn from(err: &TokenError) -> Self {
        let error_code = match err {
            TokenError::NotFound => "TOKEN_NOT_FOUND",
            TokenError::Revoked => "TOKEN_REVOKED",
            TokenError::Expired => "TOKEN_EXPIRED",
            TokenError::InvalidSignature => "INVALID_SIGNATURE",
            TokenError::WrongPurpose => "WRONG_PURPOSE",
        };
        ErrorResponse::new(error_code, err.to_string())
    }
}

/// Convert MailError to ErrorResponse
impl From<&MailError> for ErrorResponse {
    fn from(err: &MailError) -> Self {
        let MailError::Delivery { .. } = err;
        ErrorResponse::new("MAIL_DELIVERY_FAILED", err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_error_codes() {
        let response: ErrorResponse = (&TokenError::Revoked).into();
        assert_eq!(response.error, "TOKEN_REVOKED");

        let response: ErrorResponse = (&TokenError::WrongPurpose).into();
        assert_eq!(response.error, "WRONG_PURPOSE");
    }

    #[test]
    fn test_auth_error_codes() {
        let response: ErrorResponse = (&AuthError::EmailAlreadyExists).into();
        assert_eq!(response.error, "EMAIL_ALREADY_EXISTS");
        assert!(response.message.contains("already registered"));
    }
}
