//! Handlers for POST /api/auth/logout and /api/auth/logout-all

use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse};

use authkit_core::errors::TokenError;
use authkit_core::repositories::{TokenRepository, UserRepository};
use authkit_core::services::mail::Mailer;

use crate::dto::auth::MessageResponse;
use crate::handlers::error::handle_domain_error;

use super::cookie::clear_refresh_cookie;
use super::AppState;

/// Ends the current session.
///
/// Revokes whatever refresh token the cookie carries and clears the cookie.
/// Always succeeds: logging out with a missing, unknown or already-revoked
/// token is not an error.
pub async fn logout<U, T, M>(req: HttpRequest, state: web::Data<AppState<U, T, M>>) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    M: Mailer + 'static,
{
    if let Some(cookie) = req.cookie(&state.cookie.name) {
        if let Err(error) = state.auth_service.logout(cookie.value()).await {
            return handle_domain_error(error);
        }
    }

    HttpResponse::Ok()
        .cookie(clear_refresh_cookie(&state.cookie))
        .json(MessageResponse::new("Logged out"))
}

/// Ends every session of the authenticated user.
///
/// Requires a valid access token in the Authorization header; the refresh
/// tokens themselves are deleted, not merely flagged.
pub async fn logout_all<U, T, M>(
    req: HttpRequest,
    state: web::Data<AppState<U, T, M>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    M: Mailer + 'static,
{
    let Some(access_token) = bearer_token(&req) else {
        return handle_domain_error(TokenError::InvalidSignature.into());
    };

    let user_id = match state.auth_service.authenticate(&access_token) {
        Ok(user_id) => user_id,
        Err(error) => return handle_domain_error(error),
    };

    match state.auth_service.logout_all(user_id).await {
        Ok(_) => HttpResponse::Ok()
            .cookie(clear_refresh_cookie(&state.cookie))
            .json(MessageResponse::new("All sessions ended")),
        Err(error) => handle_domain_error(error),
    }
}

fn bearer_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::to_string)
}
