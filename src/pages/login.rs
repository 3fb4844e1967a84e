//! Login page with email/password form.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use crate::net::types::Credentials;
use crate::router::REGISTER_PATH;
#[cfg(feature = "hydrate")]
use crate::router::guard::dashboard_for;
use crate::state::session::SessionStore;
use crate::util::storage::BrowserStore;

/// Login page — exchanges credentials for a session, then forwards the
/// visitor to the dashboard matching their role. API failures are shown
/// verbatim under the form.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore<BrowserStore>>>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let submit = Callback::new(move |_| {
        if email.get().trim().is_empty() || password.get().is_empty() || pending.get() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                pending.set(true);
                error.set(None);
                let credentials = Credentials {
                    email: email.get_untracked().trim().to_owned(),
                    password: password.get_untracked(),
                };
                let mut store = session.get_untracked();
                let result = store.login(&credentials).await;
                session.set(store);
                pending.set(false);
                match result {
                    Ok(_) => {
                        let role = session.get_untracked().state.role;
                        navigate(dashboard_for(role.as_deref()), NavigateOptions::default());
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &session;
        }
    });

    view! {
        <div class="login-page">
            <h1>"ParkSpot"</h1>
            <p>"Find and book parking"</p>
            <div class="login-page__card">
                <h2>"Sign in"</h2>
                <label class="login-page__label">
                    "Email"
                    <input
                        class="login-page__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="login-page__label">
                    "Password"
                    <input
                        class="login-page__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="login-page__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button
                    class="btn btn--primary"
                    prop:disabled=move || pending.get()
                    on:click=move |_| submit.run(())
                >
                    {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                </button>
                <p class="login-page__alt">
                    "No account? "
                    <a href=REGISTER_PATH>"Register"</a>
                </p>
            </div>
        </div>
    }
}
