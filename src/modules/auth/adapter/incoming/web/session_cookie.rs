use actix_web::cookie::{time::Duration as CookieDuration, Cookie, SameSite};
use chrono::{DateTime, Utc};

pub const SESSION_COOKIE_NAME: &str = "river_pulse_session";

/// Builds the HTTP-only session cookie carrying the JWT.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionCookie {
    secure: bool,
}

impl SessionCookie {
    pub fn new(secure: bool) -> Self {
        Self { secure }
    }

    pub fn issue(&self, token: &str, expires_at: DateTime<Utc>) -> Cookie<'static> {
        let max_age = (expires_at - Utc::now()).num_seconds().max(0);

        Cookie::build(SESSION_COOKIE_NAME, token.to_string())
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure)
            .max_age(CookieDuration::seconds(max_age))
            .finish()
    }

    pub fn clear(&self) -> Cookie<'static> {
        let mut cookie = Cookie::build(SESSION_COOKIE_NAME, "")
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure)
            .finish();
        cookie.make_removal();
        cookie
    }
}
