//! Registration page.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use crate::net::types::RegisterRequest;
use crate::router::LOGIN_PATH;
use crate::state::session::SessionStore;
use crate::util::storage::BrowserStore;

/// Registration page — forwards the form to the auth API and returns to
/// the login page on success. The session itself is untouched; the new
/// account still has to sign in.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore<BrowserStore>>>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let submit = Callback::new(move |_| {
        let incomplete = username.get().trim().is_empty()
            || email.get().trim().is_empty()
            || password.get().is_empty();
        if incomplete || pending.get() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                pending.set(true);
                error.set(None);
                let request = RegisterRequest {
                    username: username.get_untracked().trim().to_owned(),
                    email: email.get_untracked().trim().to_owned(),
                    password: password.get_untracked(),
                };
                let result = session.get_untracked().register(&request).await;
                pending.set(false);
                match result {
                    Ok(_) => navigate(LOGIN_PATH, NavigateOptions::default()),
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
        <div class="register-page">
            <h1>"ParkSpot"</h1>
            <div class="register-page__card">
                <h2>"Create account"</h2>
                <label class="register-page__label">
                    "Username"
                    <input
                        class="register-page__input"
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label class="register-page__label">
                    "Email"
                    <input
                        class="register-page__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="register-page__label">
                    "Password"
                    <input
                        class="register-page__input"
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
                    <p class="register-page__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button
                    class="btn btn--primary"
                    prop:disabled=move || pending.get()
                    on:click=move |_| submit.run(())
                >
                    {move || if pending.get() { "Creating..." } else { "Register" }}
                </button>
                <p class="register-page__alt">
                    "Already registered? "
                    <a href=LOGIN_PATH>"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
