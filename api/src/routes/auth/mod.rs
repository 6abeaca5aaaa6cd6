//! Authentication route handlers
//!
//! All endpoints live under `/api/auth`:
//! - Registration and email confirmation
//! - Login, refresh and logout (refresh token rides in an HttpOnly cookie)
//! - Password reset

pub mod cookie;
pub mod email;
pub mod login;
pub mod logout;
pub mod password;
pub mod refresh;
pub mod register;

use std::sync::Arc;

use actix_web::web;

use authkit_core::repositories::{TokenRepository, UserRepository};
use authkit_core::services::auth::AuthService;
use authkit_core::services::mail::Mailer;
use authkit_shared::config::CookieConfig;

/// Application state that holds shared services
pub struct AppState<U, T, M>
where
    U: UserRepository,
    T: TokenRepository,
    M: Mailer,
{
    pub auth_service: Arc<AuthService<U, T, M>>,
    pub cookie: CookieConfig,
}

/// Registers the authentication endpoints on the given service config
pub fn configure<U, T, M>(cfg: &mut web::ServiceConfig)
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    M: Mailer + 'static,
{
    cfg.service(
        web::scope("/api/auth")
            .route("/register", web::post().to(register::register::<U, T, M>))
            .route("/login", web::post().to(login::login::<U, T, M>))
            .route(
                "/refresh-token",
                web::post().to(refresh::refresh_token::<U, T, M>),
            )
            .route("/logout", web::post().to(logout::logout::<U, T, M>))
            .route("/logout-all", web::post().to(logout::logout_all::<U, T, M>))
            .route(
                "/confirm-email",
                web::post().to(email::confirm_email::<U, T, M>),
            )
            .route(
                "/send-confirmation",
                web::post().to(email::send_confirmation::<U, T, M>),
            )
            .route(
                "/send-reset-password",
                web::post().to(password::send_reset_password::<U, T, M>),
            )
            .route(
                "/reset-password",
                web::post().to(password::reset_password::<U, T, M>),
            ),
    );
}
