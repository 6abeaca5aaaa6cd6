//! Handlers for email confirmation endpoints

use actix_web::{web, HttpResponse};
use validator::Validate;

use authkit_core::repositories::{TokenRepository, UserRepository};
use authkit_core::services::mail::Mailer;

use crate::dto::auth::{ConfirmEmailRequest, EmailRequest, MessageResponse};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};

use super::AppState;

/// Handler for POST /api/auth/confirm-email
///
/// Marks the account behind the confirmation token as verified. Confirming
/// an already-verified account succeeds, so double-clicked links stay quiet.
pub async fn confirm_email<U, T, M>(
    state: web::Data<AppState<U, T, M>>,
    request: web::Json<ConfirmEmailRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    M: Mailer + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    match state.auth_service.confirm_email(&request.token).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Email confirmed")),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for POST /api/auth/send-confirmation
///
/// Resends the confirmation mail for an unverified account.
pub async fn send_confirmation<U, T, M>(
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

    match state
        .auth_service
        .send_email_confirmation(&request.email)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Confirmation email sent")),
        Err(error) => handle_domain_error(error),
    }
}
