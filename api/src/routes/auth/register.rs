//! Handler for POST /api/auth/register

use actix_web::{web, HttpResponse};
use validator::Validate;

use authkit_core::repositories::{TokenRepository, UserRepository};
use authkit_core::services::mail::Mailer;

use crate::dto::auth::{RegisterRequest, RegisterResponse};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};

use super::AppState;

/// Creates a new account and sends the confirmation mail.
///
/// Returns 201 with the public view of the new account. A duplicate email is
/// a 400 EMAIL_ALREADY_EXISTS. If the confirmation mail cannot be delivered
/// the account still exists and the caller sees the mail failure; the user
/// can request a resend later.
pub async fn register<U, T, M>(
    state: web::Data<AppState<U, T, M>>,
    request: web::Json<RegisterRequest>,
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
        .register(&request.email, &request.password)
        .await
    {
        Ok(user) => HttpResponse::Created().json(RegisterResponse::from(user)),
        Err(error) => handle_domain_error(error),
    }
}
