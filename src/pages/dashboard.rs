//! Regular-user dashboard.

use leptos::prelude::*;

use crate::state::session::{DEFAULT_ROLE, SessionStore};
use crate::util::storage::BrowserStore;

/// Landing page for `user` sessions: booking overview plus logout.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore<BrowserStore>>>();
    let role = move || {
        session
            .get()
            .state
            .role
            .unwrap_or_else(|| DEFAULT_ROLE.to_owned())
    };

    let on_logout = move |_| {
        session.update(|s| s.logout());
        #[cfg(feature = "hydrate")]
        {
            // Hard navigation so every signal restarts from a clean slate.
            if let Some(w) = web_sys::window() {
                let _ = w.location().set_href(crate::router::LOGIN_PATH);
            }
        }
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"My Parking"</h1>
                <span class="dashboard-page__role">{role}</span>
                <button class="btn dashboard-page__logout" on:click=on_logout>
                    "Logout"
                </button>
            </header>
            <p class="dashboard-page__empty">
                "Available lots and your bookings will appear here."
            </p>
        </div>
    }
}
