//! Route table and access requirements.
//!
//! Each route declares what kind of session may enter it; the guard in
//! [`guard`] consumes these requirements before every transition. The
//! table mirrors the app's navigation surface: auth pages for guests,
//! one dashboard per role.

pub mod guard;

use crate::state::session::{ADMIN_ROLE, DEFAULT_ROLE};

/// Login page path, also the redirect target for unauthenticated access.
pub const LOGIN_PATH: &str = "/login";
/// Registration page path.
pub const REGISTER_PATH: &str = "/register";
/// Regular-user dashboard path.
pub const USER_DASHBOARD_PATH: &str = "/dashboard";
/// Admin dashboard path.
pub const ADMIN_DASHBOARD_PATH: &str = "/admin/dashboard";

/// Static access requirements attached to a route.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteMeta {
    /// Only reachable with an authenticated session.
    pub requires_auth: bool,
    /// Only reachable without a session (login, register).
    pub requires_guest: bool,
    /// With `requires_auth`, the role the session must hold.
    pub role: Option<&'static str>,
}

const GUEST_ONLY: RouteMeta = RouteMeta {
    requires_auth: false,
    requires_guest: true,
    role: None,
};

const ROUTE_TABLE: &[(&str, RouteMeta)] = &[
    (LOGIN_PATH, GUEST_ONLY),
    (REGISTER_PATH, GUEST_ONLY),
    (
        USER_DASHBOARD_PATH,
        RouteMeta {
            requires_auth: true,
            requires_guest: false,
            role: Some(DEFAULT_ROLE),
        },
    ),
    (
        ADMIN_DASHBOARD_PATH,
        RouteMeta {
            requires_auth: true,
            requires_guest: false,
            role: Some(ADMIN_ROLE),
        },
    ),
];

/// Look up the access requirements for `path`. Paths outside the table
/// carry no requirement and are always allowed.
#[must_use]
pub fn meta_for(path: &str) -> RouteMeta {
    ROUTE_TABLE
        .iter()
        .find(|(p, _)| *p == path)
        .map_or_else(RouteMeta::default, |(_, meta)| *meta)
}
