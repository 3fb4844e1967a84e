//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::pages::admin_dashboard::AdminDashboardPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::login::LoginPage;
use crate::pages::register::RegisterPage;
use crate::router;
use crate::router::guard::RouteGuard;
use crate::state::session::SessionStore;
use crate::util::storage::BrowserStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session store context and sets up client-side routing;
/// every routed page sits behind [`RouteGuard`], so its access
/// requirements are re-evaluated on each transition.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionStore::new(BrowserStore));
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/parkspot-client.css"/>
        <Title text="ParkSpot"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route
                    path=StaticSegment("")
                    view=|| view! { <Redirect path=router::LOGIN_PATH/> }
                />
                <Route
                    path=StaticSegment("login")
                    view=|| {
                        view! {
                            <RouteGuard meta=router::meta_for(router::LOGIN_PATH)>
                                <LoginPage/>
                            </RouteGuard>
                        }
                    }
                />
                <Route
                    path=StaticSegment("register")
                    view=|| {
                        view! {
                            <RouteGuard meta=router::meta_for(router::REGISTER_PATH)>
                                <RegisterPage/>
                            </RouteGuard>
                        }
                    }
                />
                <Route
                    path=StaticSegment("dashboard")
                    view=|| {
                        view! {
                            <RouteGuard meta=router::meta_for(router::USER_DASHBOARD_PATH)>
                                <DashboardPage/>
                            </RouteGuard>
                        }
                    }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("dashboard"))
                    view=|| {
                        view! {
                            <RouteGuard meta=router::meta_for(router::ADMIN_DASHBOARD_PATH)>
                                <AdminDashboardPage/>
                            </RouteGuard>
                        }
                    }
                />
            </Routes>
        </Router>
    }
}
