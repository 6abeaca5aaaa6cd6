//! Handler for POST /api/auth/login

use actix_web::{web, HttpResponse};
use validator::Validate;

use authkit_core::repositories::{TokenRepository, UserRepository};
use authkit_core::services::mail::Mailer;

use crate::dto::auth::{AuthResponse, LoginRequest};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};

use super::cookie::build_refresh_cookie;
use super::AppState;

/// Verifies credentials and opens a session.
///
/// The access token is returned in the body; the refresh token is set as an
/// HttpOnly cookie. Bad credentials are a 401 LOGIN_FAILED regardless of
/// whether the email exists.
pub async fn login<U, T, M>(
    state: web::Data<AppState<U, T, M>>,
    request: web::Json<LoginRequest>,
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
        .login(&request.email, &request.password)
        .await
    {
        Ok(pair) => {
            let cookie = build_refresh_cookie(&state.cookie, &pair.refresh_token);
            HttpResponse::Ok().cookie(cookie).json(AuthResponse {
                access_token: pair.access_token,
                expires_in: pair.access_expires_in,
            })
        }
        Err(error) => handle_domain_error(error),
    }
}
