//! Session credentials and the cookie format they live in.
//!
//! Only `token` and `role` are stored. The legacy `password` cookie written
//! by older builds is expired on sign-out and never read.

use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

use crate::LoginResponse;

/// Cookie holding the bearer token.
pub const TOKEN_COOKIE: &str = "token";
/// Cookie holding the role name.
pub const ROLE_COOKIE: &str = "role";
/// Cookie older builds wrote; only ever expired.
pub const LEGACY_PASSWORD_COOKIE: &str = "password";
/// Cookie lifetime after a successful login.
pub const SESSION_DAYS: u32 = 7;

/// Account role as named by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Manages articles and categories.
    Admin,
    /// Reads articles.
    User,
}

impl Role {
    /// Exact, case-sensitive match on the API's role names.
    pub fn parse(raw: &str) -> Option<Role> {
        match raw {
            "Admin" => Some(Role::Admin),
            "User" => Some(Role::User),
            _ => None,
        }
    }

    /// Wire name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::User => "User",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the browser currently holds. The role is kept raw so that an
/// unrecognised value can be told apart from a missing one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
    role: Option<String>,
}

impl Session {
    /// Session holding both values.
    pub fn new(token: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            role: Some(role.into()),
        }
    }

    /// No credentials.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Read the session cookies out of `document.cookie`.
    pub fn from_cookie_header(header: &str) -> Self {
        let mut cookies = parse_cookies(header);
        Self {
            token: cookies.remove(TOKEN_COOKIE),
            role: cookies.remove(ROLE_COOKIE),
        }
    }

    /// Build a session from the login reply; both fields must be present.
    pub fn from_login(response: LoginResponse) -> Option<Self> {
        let token = response.token.filter(|t| !t.trim().is_empty())?;
        let role = response.role.filter(|r| !r.trim().is_empty())?;
        Some(Self::new(token, role))
    }

    /// The token, treating an empty cookie as absent.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }

    /// Parsed role; `None` when missing or unrecognised.
    pub fn role(&self) -> Option<Role> {
        self.role.as_deref().and_then(Role::parse)
    }

    /// Role exactly as stored.
    pub fn raw_role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    /// Whether a non-empty token is present.
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// `document.cookie` assignments that persist this session.
    pub fn to_cookie_assignments(&self, days: u32) -> Vec<String> {
        let mut out = Vec::with_capacity(2);
        if let Some(token) = self.token() {
            out.push(cookie_assignment(TOKEN_COOKIE, token, Some(days)));
        }
        if let Some(role) = self.raw_role() {
            out.push(cookie_assignment(ROLE_COOKIE, role, Some(days)));
        }
        out
    }
}

/// Assignments that expire every session cookie, including the legacy one.
pub fn sign_out_assignments() -> Vec<String> {
    [TOKEN_COOKIE, ROLE_COOKIE, LEGACY_PASSWORD_COOKIE]
        .into_iter()
        .map(|name| format!("{name}=; path=/; max-age=0"))
        .collect()
}

/// Parse a `document.cookie` string. Later duplicates win, values are
/// percent-decoded.
pub fn parse_cookies(header: &str) -> BTreeMap<String, String> {
    header
        .split(';')
        .filter_map(|pair| {
            let (name, value) = pair.split_once('=')?;
            let name = name.trim();
            if name.is_empty() {
                return None;
            }
            let value = value.trim();
            let decoded = urlencoding::decode(value)
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| value.to_string());
            Some((name.to_string(), decoded))
        })
        .collect()
}

/// One `document.cookie` assignment; `None` days writes a session cookie.
pub fn cookie_assignment(name: &str, value: &str, max_age_days: Option<u32>) -> String {
    let mut out = format!("{name}={}; path=/; SameSite=Lax", urlencoding::encode(value));
    if let Some(days) = max_age_days {
        out.push_str(&format!("; max-age={}", u64::from(days) * 24 * 60 * 60));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_token_and_role_from_cookie_header() {
        let session = Session::from_cookie_header("theme=x; token=abc%20def; role=Admin");
        assert_eq!(session.token(), Some("abc def"));
        assert_eq!(session.role(), Some(Role::Admin));
    }

    #[test]
    fn empty_token_is_not_authenticated() {
        let session = Session::from_cookie_header("token=; role=User");
        assert!(!session.is_authenticated());
        assert_eq!(session.role(), Some(Role::User));
    }

    #[test]
    fn unknown_role_is_kept_raw() {
        let session = Session::new("t", "admin");
        assert_eq!(session.role(), None);
        assert_eq!(session.raw_role(), Some("admin"));
    }

    #[test]
    fn login_reply_needs_both_fields() {
        assert!(Session::from_login(LoginResponse {
            token: Some("t".into()),
            role: None,
        })
        .is_none());
        let session = Session::from_login(LoginResponse {
            token: Some("t".into()),
            role: Some("User".into()),
        })
        .expect("complete reply");
        assert_eq!(session.role(), Some(Role::User));
    }

    #[test]
    fn cookie_assignments_round_trip_through_parser() {
        let session = Session::new("a b;c", "User");
        let header = session
            .to_cookie_assignments(SESSION_DAYS)
            .iter()
            .map(|c| c.split(';').next().unwrap_or_default().to_string())
            .collect::<Vec<_>>()
            .join("; ");
        assert_eq!(Session::from_cookie_header(&header), session);
        assert!(session.to_cookie_assignments(7)[0].contains("max-age=604800"));
    }

    #[test]
    fn sign_out_expires_legacy_password_cookie() {
        let cookies = sign_out_assignments();
        assert!(cookies.iter().any(|c| c.starts_with("password=;")));
        assert!(cookies.iter().all(|c| c.ends_with("max-age=0")));
    }
}
