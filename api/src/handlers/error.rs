//! Maps domain errors to HTTP responses.
//!
//! Status codes follow the error taxonomy: validation problems and duplicate
//! registrations are 400, dead or forged credentials are 401, a missing
//! record is 404, and everything the client cannot fix is 500.

use actix_web::HttpResponse;

use authkit_core::errors::{AuthError, DomainError, TokenError};
use authkit_shared::types::response::ErrorResponse;

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    log::warn!("Domain error: {:?}", error);

    match error {
        DomainError::Validation { message } => {
            HttpResponse::BadRequest().json(ErrorResponse::new("VALIDATION_ERROR", message))
        }
        DomainError::Auth(ref auth_error) => {
            let body: ErrorResponse = auth_error.into();
            match auth_error {
                AuthError::EmailAlreadyExists => HttpResponse::BadRequest().json(body),
                AuthError::LoginFailed => HttpResponse::Unauthorized().json(body),
                AuthError::UserNotFound => HttpResponse::NotFound().json(body),
            }
        }
        DomainError::Token(ref token_error) => {
            let body: ErrorResponse = token_error.into();
            match token_error {
                TokenError::NotFound => HttpResponse::NotFound().json(body),
                TokenError::Revoked
                | TokenError::Expired
                | TokenError::InvalidSignature
                | TokenError::WrongPurpose => HttpResponse::Unauthorized().json(body),
            }
        }
        DomainError::Mail(ref mail_error) => {
            HttpResponse::InternalServerError().json(ErrorResponse::from(mail_error))
        }
        DomainError::Internal { message } => {
            log::error!("Internal error: {}", message);
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "INTERNAL_ERROR",
                "An internal error occurred",
            ))
        }
    }
}

/// Convert request-body validation failures to a 400 response
pub fn handle_validation_errors(errors: validator::ValidationErrors) -> HttpResponse {
    let message = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect::<Vec<_>>()
        .join("; ");

    HttpResponse::BadRequest().json(ErrorResponse::new("VALIDATION_ERROR", message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_token_errors_map_to_statuses() {
        let cases = [
            (TokenError::NotFound, StatusCode::NOT_FOUND),
            (TokenError::Revoked, StatusCode::UNAUTHORIZED),
            (TokenError::Expired, StatusCode::UNAUTHORIZED),
            (TokenError::InvalidSignature, StatusCode::UNAUTHORIZED),
            (TokenError::WrongPurpose, StatusCode::UNAUTHORIZED),
        ];
        for (error, status) in cases {
            let response = handle_domain_error(DomainError::Token(error));
            assert_eq!(response.status(), status);
        }
    }

    #[test]
    fn test_auth_errors_map_to_statuses() {
        let cases = [
            (AuthError::EmailAlreadyExists, StatusCode::BAD_REQUEST),
            (AuthError::LoginFailed, StatusCode::UNAUTHORIZED),
            (AuthError::UserNotFound, StatusCode::NOT_FOUND),
        ];
        for (error, status) in cases {
            let response = handle_domain_error(DomainError::Auth(error));
            assert_eq!(response.status(), status);
        }
    }

    #[test]
    fn test_internal_error_hides_details() {
        let response = handle_domain_error(DomainError::Internal {
            message: "connection pool exhausted".to_string(),
        });
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
