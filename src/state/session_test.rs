use super::*;
use crate::util::storage::MemoryStore;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

fn token_for(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string().as_bytes());
    format!("{header}.{body}.signature")
}

fn store_with(token: Option<&str>) -> (SessionStore<MemoryStore>, MemoryStore) {
    let mem = MemoryStore::default();
    if let Some(token) = token {
        mem.set_token(token);
    }
    (SessionStore::new(mem.clone()), mem)
}

// =============================================================
// SessionState defaults and getters
// =============================================================

#[test]
fn default_state_is_logged_out() {
    let state = SessionState::default();
    assert!(!state.is_logged_in);
    assert_eq!(state.access_token, None);
    assert_eq!(state.role, None);
}

#[test]
fn role_getters_match_role_field() {
    let mut state = SessionState::default();
    assert!(!state.is_admin());
    assert!(!state.is_user());

    state.role = Some(ADMIN_ROLE.to_owned());
    assert!(state.is_admin());
    assert!(!state.is_user());

    state.role = Some(DEFAULT_ROLE.to_owned());
    assert!(state.is_user());
}

// =============================================================
// initialize_auth
// =============================================================

#[test]
fn initialize_with_no_token_is_a_noop() {
    let (mut store, mem) = store_with(None);
    store.initialize_auth();
    assert_eq!(store.state, SessionState::default());
    assert_eq!(mem.token(), None);
}

#[test]
fn initialize_with_live_token_restores_session() {
    let token = token_for(&serde_json::json!({"exp": u64::MAX, "role": "admin"}));
    let (mut store, mem) = store_with(Some(&token));

    store.initialize_auth();

    assert!(store.state.is_logged_in);
    assert_eq!(store.state.access_token.as_deref(), Some(token.as_str()));
    assert_eq!(store.state.role.as_deref(), Some("admin"));
    assert_eq!(mem.token().as_deref(), Some(token.as_str()));
}

#[test]
fn initialize_defaults_role_when_claim_is_absent() {
    let token = token_for(&serde_json::json!({"exp": u64::MAX}));
    let (mut store, _mem) = store_with(Some(&token));

    store.initialize_auth();

    assert!(store.state.is_logged_in);
    assert_eq!(store.state.role.as_deref(), Some(DEFAULT_ROLE));
}

#[test]
fn initialize_with_expired_token_logs_out_and_clears_storage() {
    let token = token_for(&serde_json::json!({"exp": 1, "role": "admin"}));
    let (mut store, mem) = store_with(Some(&token));

    store.initialize_auth();

    assert_eq!(store.state, SessionState::default());
    assert_eq!(mem.token(), None);
}

#[test]
fn initialize_treats_exp_at_now_as_expired() {
    let token = token_for(&serde_json::json!({"exp": 500}));
    let (mut store, mem) = store_with(Some(&token));

    store.initialize_auth_at(500);

    assert!(!store.state.is_logged_in);
    assert_eq!(mem.token(), None);
}

#[test]
fn initialize_with_malformed_token_logs_out_and_clears_storage() {
    let (mut store, mem) = store_with(Some("garbage"));

    store.initialize_auth();

    assert_eq!(store.state, SessionState::default());
    assert_eq!(mem.token(), None);
}

#[test]
fn initialize_with_token_missing_exp_is_invalid() {
    let token = token_for(&serde_json::json!({"role": "admin"}));
    let (mut store, mem) = store_with(Some(&token));

    store.initialize_auth();

    assert!(!store.state.is_logged_in);
    assert_eq!(mem.token(), None);
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_resets_state_and_clears_storage() {
    let token = token_for(&serde_json::json!({"exp": u64::MAX, "role": "admin"}));
    let (mut store, mem) = store_with(Some(&token));
    store.initialize_auth();
    assert!(store.state.is_logged_in);

    store.logout();

    assert_eq!(store.state, SessionState::default());
    assert_eq!(mem.token(), None);
}

#[test]
fn logout_without_a_session_is_safe() {
    let (mut store, mem) = store_with(None);
    store.logout();
    store.logout();
    assert_eq!(store.state, SessionState::default());
    assert_eq!(mem.token(), None);
}

// =============================================================
// login success path (install_token)
// =============================================================

#[test]
fn install_token_persists_and_opens_session() {
    let token = token_for(&serde_json::json!({"exp": u64::MAX, "role": "admin"}));
    let (mut store, mem) = store_with(None);

    store.install_token(token.clone());

    assert!(store.state.is_logged_in);
    assert_eq!(store.state.access_token.as_deref(), Some(token.as_str()));
    assert_eq!(store.state.role.as_deref(), Some("admin"));
    assert_eq!(mem.token().as_deref(), Some(token.as_str()));
}

#[test]
fn install_token_defaults_role_when_payload_has_none() {
    let token = token_for(&serde_json::json!({"exp": u64::MAX}));
    let (mut store, _mem) = store_with(None);

    store.install_token(token);

    assert_eq!(store.state.role.as_deref(), Some(DEFAULT_ROLE));
}

#[test]
fn install_token_tolerates_undecodable_token() {
    // The decoder is best-effort; an opaque token still opens a session
    // with the default role.
    let (mut store, mem) = store_with(None);

    store.install_token("opaque".to_owned());

    assert!(store.state.is_logged_in);
    assert_eq!(store.state.role.as_deref(), Some(DEFAULT_ROLE));
    assert_eq!(mem.token().as_deref(), Some("opaque"));
}

// =============================================================
// API error propagation (native stubs return Unavailable)
// =============================================================

#[test]
fn failed_login_leaves_store_untouched() {
    let (mut store, mem) = store_with(None);
    let credentials = Credentials {
        email: "a@b.c".to_owned(),
        password: "pw".to_owned(),
    };

    let result = futures::executor::block_on(store.login(&credentials));

    assert!(matches!(result, Err(ApiError::Unavailable)));
    assert_eq!(store.state, SessionState::default());
    assert_eq!(mem.token(), None);
}

#[test]
fn register_never_mutates_the_session() {
    let (store, mem) = store_with(None);
    let request = RegisterRequest {
        username: "alice".to_owned(),
        email: "a@b.c".to_owned(),
        password: "pw".to_owned(),
    };

    let result = futures::executor::block_on(store.register(&request));

    assert!(matches!(result, Err(ApiError::Unavailable)));
    assert_eq!(store.state, SessionState::default());
    assert_eq!(mem.token(), None);
}

// =============================================================
// Storage probe
// =============================================================

#[test]
fn has_persisted_token_reflects_storage_not_memory() {
    let token = token_for(&serde_json::json!({"exp": u64::MAX}));
    let (store, _mem) = store_with(Some(&token));
    assert!(!store.state.is_logged_in);
    assert!(store.has_persisted_token());
}
