//! Route gating by session presence and role.

use super::session::AuthSession;
use crate::models::Role;

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const EXPIRED_LOGIN_PATH: &str = "/login?tokenExpired=true";
pub const TOURS_PATH: &str = "/tours";
pub const ADMIN_PATH: &str = "/admin";
pub const MANAGER_PATH: &str = "/manager";

const PROTECTED_PREFIXES: &[&str] = &["/bookings", "/profile", ADMIN_PATH, MANAGER_PATH];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Granted,
    LoginRequired,
    Denied { required: Role, actual: Role },
}

/// Roles must match exactly; an administrator is not a manager.
pub fn evaluate(session: Option<&AuthSession>, required: Option<Role>) -> Access {
    match (session, required) {
        (None, _) => Access::LoginRequired,
        (Some(_), None) => Access::Granted,
        (Some(session), Some(required)) if session.role() == required => Access::Granted,
        (Some(session), Some(required)) => Access::Denied {
            required,
            actual: session.role(),
        },
    }
}

pub fn is_protected(path: &str) -> bool {
    let path = path.split(['?', '#']).next().unwrap_or(path);

    PROTECTED_PREFIXES.iter().any(|prefix| {
        path == *prefix
            || path
                .strip_prefix(prefix)
                .is_some_and(|rest| rest.starts_with('/'))
    })
}

pub fn dashboard_for(role: Role) -> Option<&'static str> {
    match role {
        Role::Admin => Some(ADMIN_PATH),
        Role::Manager => Some(MANAGER_PATH),
        Role::Client => None,
    }
}

/// Landing page right after a successful sign-in.
pub fn home_for(role: Role) -> &'static str {
    dashboard_for(role).unwrap_or(TOURS_PATH)
}

/// Administrators may not change the role of, or delete, their own account.
pub fn can_edit_account(acting_id: Option<i64>, account_id: i64) -> bool {
    acting_id != Some(account_id)
}
