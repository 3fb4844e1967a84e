//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The session store is an owned value provided via Leptos context
//! (`RwSignal<SessionStore<BrowserStore>>`), constructed once in `App`
//! rather than living in a module-level singleton. Components read it
//! with `expect_context`.

pub mod session;
