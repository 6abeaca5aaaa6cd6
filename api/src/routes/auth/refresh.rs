//! Handler for POST /api/auth/refresh-token

use actix_web::{web, HttpRequest, HttpResponse};

use authkit_core::errors::TokenError;
use authkit_core::repositories::{TokenRepository, UserRepository};
use authkit_core::services::mail::Mailer;

use crate::dto::auth::AuthResponse;
use crate::handlers::error::handle_domain_error;

use super::cookie::build_refresh_cookie;
use super::AppState;

/// Rotates the refresh token carried in the cookie.
///
/// On success the old token is revoked, the new one replaces it in the
/// cookie and a fresh access token is returned. A missing cookie is treated
/// the same as an unknown token.
pub async fn refresh_token<U, T, M>(
    req: HttpRequest,
    state: web::Data<AppState<U, T, M>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    M: Mailer + 'static,
{
    let Some(cookie) = req.cookie(&state.cookie.name) else {
        return handle_domain_error(TokenError::NotFound.into());
    };

    match state.auth_service.refresh(cookie.value()).await {
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
