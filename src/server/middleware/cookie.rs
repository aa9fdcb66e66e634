//! Token cookie management.
//!
//! Wraps the request's `Cookies` jar so handlers read and write the two token cookies
//! through named methods instead of raw cookie names. Both cookies are HttpOnly, scoped to
//! `/`, and expire together with the token they carry.

use tower_cookies::{Cookie, Cookies};

use crate::server::model::auth::TokenPair;

pub const ACCESS_TOKEN_COOKIE: &str = "access_token";
pub const REFRESH_TOKEN_COOKIE: &str = "refresh_token";

pub struct AuthCookies<'a> {
    cookies: &'a Cookies,
}

impl<'a> AuthCookies<'a> {
    pub fn new(cookies: &'a Cookies) -> Self {
        Self { cookies }
    }

    /// Stores a freshly issued token pair.
    ///
    /// # Arguments
    /// - `tokens` - Tokens to store; the refresh cookie is only written when present
    /// - `refresh_max_age` - Lifetime of the refresh cookie in seconds
    pub fn set_tokens(&self, tokens: &TokenPair, refresh_max_age: i64) {
        self.set_access(&tokens.access_token, tokens.expires_in);

        if let Some(refresh_token) = &tokens.refresh_token {
            self.cookies.add(token_cookie(
                REFRESH_TOKEN_COOKIE,
                refresh_token.clone(),
                refresh_max_age,
            ));
        }
    }

    pub fn set_access(&self, access_token: &str, max_age: i64) {
        self.cookies.add(token_cookie(
            ACCESS_TOKEN_COOKIE,
            access_token.to_string(),
            max_age,
        ));
    }

    pub fn access_token(&self) -> Option<String> {
        self.cookies
            .get(ACCESS_TOKEN_COOKIE)
            .map(|c| c.value().to_string())
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.cookies
            .get(REFRESH_TOKEN_COOKIE)
            .map(|c| c.value().to_string())
    }

    /// Removes both token cookies from the client.
    pub fn clear(&self) {
        for name in [ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE] {
            self.cookies
                .remove(Cookie::build((name, "")).path("/").build());
        }
    }
}

fn token_cookie(name: &'static str, value: String, max_age: i64) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .max_age(time::Duration::seconds(max_age))
        .build()
}
