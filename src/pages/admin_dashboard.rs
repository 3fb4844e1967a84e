//! Admin dashboard.

use leptos::prelude::*;

use crate::state::session::SessionStore;
use crate::util::storage::BrowserStore;

/// Landing page for `admin` sessions: lot administration plus logout.
#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore<BrowserStore>>>();

    let on_logout = move |_| {
        session.update(|s| s.logout());
        #[cfg(feature = "hydrate")]
        {
            if let Some(w) = web_sys::window() {
                let _ = w.location().set_href(crate::router::LOGIN_PATH);
            }
        }
    };

    view! {
        <div class="admin-page">
            <header class="admin-page__header">
                <h1>"Lot Administration"</h1>
                <span class="admin-page__role">"admin"</span>
                <button class="btn admin-page__logout" on:click=on_logout>
                    "Logout"
                </button>
            </header>
            <p class="admin-page__empty">
                "Parking lots, spots, and registered users will appear here."
            </p>
        </div>
    }
}
