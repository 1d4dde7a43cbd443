//! Authentication context
//!
//! Wraps the core `SessionStore` for the component tree. The store itself is
//! not thread-safe, so it sits in a local `StoredValue`; its snapshots are
//! mirrored into a signal that components and the router subscribe to.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use ticketdesk::{ApiClient, ClientConfig, GuardState, SessionSnapshot, SessionStore};
use ticketdesk_shared::User;

use crate::web::{BrowserStorage, FetchHttpClient};

pub type Api = ApiClient<FetchHttpClient, BrowserStorage>;
pub type Session = SessionStore<FetchHttpClient, BrowserStorage>;

/// Session handle plus a reactive mirror of its state.
///
/// `Copy`, so closures and child components can take it by value.
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// The store is `!Send`, hence local storage in the arena
    session: StoredValue<Rc<Session>, LocalStorage>,
    /// Updated by a store listener after every transition
    snapshot: RwSignal<SessionSnapshot>,
}

impl AuthContext {
    /// Build the API client from build-time config and wire the store to a signal.
    ///
    /// Must run inside a reactive owner (the `App` component).
    pub fn new() -> Self {
        let config = ClientConfig::from_env();
        log::info!("backend at {}", config.api_url);
        let api = ApiClient::new(config, FetchHttpClient, BrowserStorage);
        let session = Rc::new(SessionStore::new(Rc::new(api)));

        let snapshot = RwSignal::new(session.snapshot());
        session.subscribe(move |snap| {
            let _ = snapshot.try_set(snap.clone());
        });

        Self {
            session: StoredValue::new_local(session),
            snapshot,
        }
    }

    /// The underlying store, for login/register/refresh calls
    pub fn session(&self) -> Rc<Session> {
        self.session.get_value()
    }

    /// Authenticated API client shared with the store
    pub fn api(&self) -> Rc<Api> {
        self.session().api()
    }

    /// Guard input for the router.
    ///
    /// # Returns
    /// A memoized signal that only changes when the guard state does, so
    /// user-only updates (e.g. a refreshed plan) do not reach the router
    pub fn guard_state_signal(&self) -> Signal<GuardState> {
        let snapshot = self.snapshot;
        Memo::new(move |_| GuardState::from(&snapshot.get())).into()
    }

    /// Reactive; tracks the session snapshot
    pub fn is_authenticated(&self) -> bool {
        self.snapshot.with(|s| s.is_authenticated)
    }

    pub fn user(&self) -> Option<User> {
        self.snapshot.with(|s| s.user.clone())
    }

    /// Synchronous; listeners see the new state before this returns
    pub fn logout(&self) {
        self.session().logout();
    }
}

/// Fetch the auth context provided by `App`
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// Resume a persisted session in the background.
///
/// Call once, right after the context is provided.
///
/// # Arguments
/// * `ctx` - the context whose store should be restored
pub fn init_auth(ctx: &AuthContext) {
    let session = ctx.session();
    spawn_local(async move {
        session.restore_session().await;
    });
}
