//! Refresh-token cookie handling.
//!
//! The refresh token never appears in a response body. It travels in an
//! HttpOnly, SameSite=Strict cookie scoped to the refresh endpoint path, so
//! scripts cannot read it and browsers only attach it where it is needed.

use actix_web::cookie::{time::Duration, Cookie, SameSite};

use authkit_shared::config::CookieConfig;

/// Builds the refresh-token cookie for a newly issued token
pub fn build_refresh_cookie(config: &CookieConfig, value: &str) -> Cookie<'static> {
    Cookie::build(config.name.clone(), value.to_string())
        .http_only(true)
        .secure(config.secure)
        .same_site(SameSite::Strict)
        .path(config.path.clone())
        .max_age(Duration::days(config.max_age_days))
        .finish()
}

/// Builds an immediately-expiring cookie that removes the refresh token
pub fn clear_refresh_cookie(config: &CookieConfig) -> Cookie<'static> {
    Cookie::build(config.name.clone(), String::new())
        .http_only(true)
        .secure(config.secure)
        .same_site(SameSite::Strict)
        .path(config.path.clone())
        .max_age(Duration::ZERO)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_cookie_attributes() {
        let config = CookieConfig::default();
        let cookie = build_refresh_cookie(&config, "token-value");

        assert_eq!(cookie.name(), "refreshToken");
        assert_eq!(cookie.value(), "token-value");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
        assert_eq!(cookie.path(), Some("/api/auth/refresh-token"));
        assert_eq!(cookie.max_age(), Some(Duration::days(30)));
    }

    #[test]
    fn test_clear_cookie_expires_immediately() {
        let config = CookieConfig::default();
        let cookie = clear_refresh_cookie(&config);

        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));
        assert_eq!(cookie.path(), Some("/api/auth/refresh-token"));
    }

    #[test]
    fn test_secure_flag_follows_config() {
        let config = CookieConfig {
            secure: false,
            ..CookieConfig::default()
        };
        let cookie = build_refresh_cookie(&config, "token-value");
        assert_eq!(cookie.secure(), Some(false));
    }
}
