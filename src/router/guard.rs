//! Navigation guard evaluated before every route transition.
//!
//! DESIGN
//! ======
//! The decision itself is a pure function of (route requirements, session
//! state). The full guard wraps it with one documented side effect that
//! always runs first: if the in-memory session reports logged out but a
//! token survives in durable storage, the session is hydrated from it.
//! This covers full-page reloads where in-memory state was reset. The
//! hydration step reads storage synchronously, so the guard never
//! suspends, and the decision completes before the navigation proceeds.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::{ADMIN_DASHBOARD_PATH, LOGIN_PATH, RouteMeta, USER_DASHBOARD_PATH};
use crate::state::session::{ADMIN_ROLE, SessionState, SessionStore};
use crate::util::storage::{BrowserStore, TokenStore};

/// What the guard decided for an attempted transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Let the navigation proceed unchanged.
    Allow,
    /// Send the visitor elsewhere instead.
    Redirect(&'static str),
}

/// The dashboard a session of `role` belongs on: admin has its own
/// dashboard, every other role lands on the user one.
#[must_use]
pub fn dashboard_for(role: Option<&str>) -> &'static str {
    if role == Some(ADMIN_ROLE) {
        ADMIN_DASHBOARD_PATH
    } else {
        USER_DASHBOARD_PATH
    }
}

/// Pure guard decision for a target route given the current session.
#[must_use]
pub fn decide(meta: RouteMeta, session: &SessionState) -> GuardOutcome {
    if meta.requires_auth {
        if !session.is_logged_in {
            return GuardOutcome::Redirect(LOGIN_PATH);
        }
        if let Some(required) = meta.role {
            if session.role.as_deref() != Some(required) {
                return GuardOutcome::Redirect(dashboard_for(session.role.as_deref()));
            }
        }
    }

    if meta.requires_guest && session.is_logged_in {
        return GuardOutcome::Redirect(dashboard_for(session.role.as_deref()));
    }

    GuardOutcome::Allow
}

/// Full guard: ensure the session is hydrated from storage, then decide.
pub fn before_navigate<S: TokenStore>(
    store: &mut SessionStore<S>,
    meta: RouteMeta,
) -> GuardOutcome {
    if !store.state.is_logged_in && store.has_persisted_token() {
        store.initialize_auth();
    }
    decide(meta, &store.state)
}

/// Wraps a routed page and enforces its access requirements.
///
/// Children render once the guard allows the transition; a redirect
/// outcome navigates away instead.
#[component]
pub fn RouteGuard(meta: RouteMeta, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore<BrowserStore>>>();
    let navigate = use_navigate();
    let allowed = RwSignal::new(false);

    Effect::new(move || {
        let mut store = session.get_untracked();
        let outcome = before_navigate(&mut store, meta);
        session.set(store);
        match outcome {
            GuardOutcome::Allow => allowed.set(true),
            GuardOutcome::Redirect(path) => {
                leptos::logging::log!("guard redirect -> {path}");
                navigate(path, NavigateOptions::default());
            }
        }
    });

    view! { <Show when=move || allowed.get()>{children()}</Show> }
}
