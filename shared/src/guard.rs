//! Route guard evaluated on every navigation before a page renders.

use crate::session::{Role, Session};

const LOGIN_PATH: &str = "/login";
const REGISTER_PATH: &str = "/register";
const ADMIN_PREFIX: &str = "/admin";
const USER_PREFIX: &str = "/user";

/// Paths the guard never touches: API proxies and static assets.
const EXCLUDED_PREFIXES: &[&str] = &["/api", "/static", "/assets"];
const EXCLUDED_EXACT: &[&str] = &["/favicon.ico"];

/// Where a redirect leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// Sign-in screen.
    Login,
    /// Admin article table.
    AdminHome,
    /// Reader article grid.
    UserHome,
}

impl Destination {
    /// Route path of the destination.
    pub const fn path(self) -> &'static str {
        match self {
            Destination::Login => LOGIN_PATH,
            Destination::AdminHome => "/admin/articles",
            Destination::UserHome => "/user/articles",
        }
    }

    /// Landing screen for `role`.
    pub const fn home_for(role: Role) -> Self {
        match role {
            Role::Admin => Destination::AdminHome,
            Role::User => Destination::UserHome,
        }
    }
}

/// Outcome of [`evaluate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the requested page.
    Allow,
    /// Replace the location with the destination.
    Redirect(Destination),
}

/// Decide what to do with a navigation to `path`.
///
/// A token whose role is missing or unrecognised is let through unchanged;
/// only the `Admin` and `User` roles are ever redirected.
pub fn evaluate(path: &str, session: &Session) -> GuardDecision {
    let path = normalize(path);
    if is_excluded(path) {
        return GuardDecision::Allow;
    }

    let decision = if session.is_authenticated() {
        evaluate_signed_in(path, session.role())
    } else if is_protected(path) {
        GuardDecision::Redirect(Destination::Login)
    } else {
        GuardDecision::Allow
    };

    if let GuardDecision::Redirect(to) = decision {
        tracing::debug!(path, to = to.path(), "route guard redirect");
    }
    decision
}

fn evaluate_signed_in(path: &str, role: Option<Role>) -> GuardDecision {
    let Some(role) = role else {
        return GuardDecision::Allow;
    };
    let home = GuardDecision::Redirect(Destination::home_for(role));

    if path == LOGIN_PATH || path == REGISTER_PATH || path == "/" {
        return home;
    }
    match role {
        Role::Admin if under(path, USER_PREFIX) => home,
        Role::User if under(path, ADMIN_PREFIX) => home,
        _ => GuardDecision::Allow,
    }
}

/// Whether `path` needs a session: the root and the admin and user areas.
pub fn is_protected(path: &str) -> bool {
    let path = normalize(path);
    path == "/" || under(path, ADMIN_PREFIX) || under(path, USER_PREFIX)
}

/// Whether `path` is an API or static asset path.
pub fn is_excluded(path: &str) -> bool {
    let path = normalize(path);
    EXCLUDED_EXACT.contains(&path) || EXCLUDED_PREFIXES.iter().any(|prefix| under(path, prefix))
}

fn under(path: &str, prefix: &str) -> bool {
    path == prefix
        || path
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Strip query, fragment and a trailing slash (except on the root).
fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROTECTED: &[&str] = &[
        "/",
        "/admin",
        "/admin/articles",
        "/admin/articles/edit/3",
        "/admin/categories",
        "/admin/profile",
        "/user",
        "/user/articles",
        "/user/articles/9",
        "/user/profile",
    ];

    fn admin() -> Session {
        Session::new("tok", "Admin")
    }

    fn user() -> Session {
        Session::new("tok", "User")
    }

    #[test]
    fn anonymous_requests_to_protected_paths_go_to_login() {
        for path in PROTECTED {
            assert_eq!(
                evaluate(path, &Session::anonymous()),
                GuardDecision::Redirect(Destination::Login),
                "{path}"
            );
        }
    }

    #[test]
    fn anonymous_requests_to_public_paths_pass() {
        for path in ["/login", "/register", "/404", "/administrator"] {
            assert_eq!(evaluate(path, &Session::anonymous()), GuardDecision::Allow, "{path}");
        }
    }

    #[test]
    fn signed_in_users_leave_login_and_register() {
        for path in ["/login", "/register", "/login/", "/"] {
            assert_eq!(
                evaluate(path, &admin()),
                GuardDecision::Redirect(Destination::AdminHome)
            );
            assert_eq!(evaluate(path, &user()), GuardDecision::Redirect(Destination::UserHome));
        }
    }

    #[test]
    fn role_prefix_mismatch_goes_to_role_home() {
        for path in PROTECTED.iter().filter(|p| p.starts_with("/user")) {
            assert_eq!(
                evaluate(path, &admin()),
                GuardDecision::Redirect(Destination::AdminHome),
                "{path}"
            );
        }
        for path in PROTECTED.iter().filter(|p| p.starts_with("/admin")) {
            assert_eq!(
                evaluate(path, &user()),
                GuardDecision::Redirect(Destination::UserHome),
                "{path}"
            );
        }
    }

    #[test]
    fn matching_role_passes() {
        assert_eq!(evaluate("/admin/categories", &admin()), GuardDecision::Allow);
        assert_eq!(evaluate("/user/articles/5?x=1", &user()), GuardDecision::Allow);
    }

    #[test]
    fn unknown_role_with_token_falls_through() {
        let odd = Session::new("tok", "Editor");
        for path in PROTECTED.iter().chain(["/login"].iter()) {
            assert_eq!(evaluate(path, &odd), GuardDecision::Allow, "{path}");
        }
    }

    #[test]
    fn excluded_paths_are_never_redirected() {
        for path in ["/api/articles", "/static/app.css", "/favicon.ico"] {
            assert_eq!(evaluate(path, &Session::anonymous()), GuardDecision::Allow);
            assert_eq!(evaluate(path, &user()), GuardDecision::Allow);
        }
    }
}
