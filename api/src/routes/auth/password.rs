//! Handlers for password reset endpoints

use actix_web::{web, HttpResponse};
use validator::Validate;

use authkit_core::repositories::{TokenRepository, UserRepository};
use authkit_core::services::mail::Mailer;

use crate::dto::auth::{EmailRequest, MessageResponse, ResetPasswordRequest};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};

use super::AppState;

/// Handler for POST /api/auth/send-reset-password
///
/// Mails a time-limited reset link for the given account.
pub async fn send_reset_password<U, T, M>(
    state: web::Data<AppState<U, T, M>>,
    request: web::Json<EmailRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    M: Mailer + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    match state.auth_service.send_reset_password(&request.email).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Password reset email sent")),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for POST /api/auth/reset-password
///
/// Replaces the password behind a reset token. Every open session of the
/// account is ended as part of the reset.
pub async fn reset_password<U, T, M>(
    state: web::Data<AppState<U, T, M>>,
    request: web::Json<ResetPasswordRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    M: Mailer + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    match state
        .auth_service
        .reset_password(&request.token, &request.new_password)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Password has been reset")),
        Err(error) => handle_domain_error(error),
    }
}
