//! Session state for the current visitor.
//!
//! SYSTEM CONTEXT
//! ==============
//! One reactive record describes who the visitor is; the route guard, the
//! network gateway, and the nav bar all read it and request mutation through
//! [`SessionStore`]. Nobody holds a private copy. The durable `localStorage`
//! mirror is written and cleared only from here, through `util::storage`.
//!
//! CONCURRENCY
//! ===========
//! Mutation happens in discrete signal-update closures on the single-threaded
//! scheduler, so readers never observe identity without credential mid-write.
//! The `epoch` counter bumps on every reset; an async verification captures
//! the epoch it started under, and a resolution whose epoch has moved on is
//! discarded — a logout always beats a stale "authenticated" write.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::types::Identity;
use crate::util::storage;

/// Snapshot of the visitor's authentication status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Profile of the authenticated visitor, if any.
    pub identity: Option<Identity>,
    /// In-memory mirror of the bearer credential for synchronous access.
    pub credential: Option<String>,
    /// True only after a verification or login confirmed the session.
    pub is_authenticated: bool,
    /// True while an identity check is in flight.
    pub is_loading: bool,
    /// Generation marker, bumped on every reset to the logged-out state.
    pub epoch: u64,
}

impl SessionState {
    pub(crate) fn apply_begin_verify(&mut self) {
        self.is_loading = true;
    }

    /// Replace the whole record with a confirmed-authenticated session.
    pub(crate) fn apply_sign_in(&mut self, identity: Identity, credential: Option<String>) {
        self.identity = Some(identity);
        self.credential = credential;
        self.is_authenticated = true;
        self.is_loading = false;
    }

    /// Reset to logged-out and invalidate any in-flight verification.
    pub(crate) fn apply_clear(&mut self) {
        *self = SessionState {
            epoch: self.epoch + 1,
            ..SessionState::default()
        };
    }

    /// Settle the loading flag after a verification whose caller is gone,
    /// leaving authentication untouched.
    pub(crate) fn apply_settle(&mut self) {
        self.is_loading = false;
    }
}

/// Context handle over the single session record.
///
/// Provided once at the composition root and passed by reference everywhere
/// else, so tests and alternate roots can substitute their own store.
#[derive(Clone, Copy)]
pub struct SessionStore {
    state: RwSignal<SessionState>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(SessionState::default()),
        }
    }

    /// Reactive snapshot; components re-render when the record changes.
    pub fn get(&self) -> SessionState {
        self.state.get()
    }

    /// Non-tracking snapshot for async callbacks and event handlers.
    pub fn get_untracked(&self) -> SessionState {
        self.state.get_untracked()
    }

    /// Mark a verification as in flight.
    pub fn begin_verify(&self) {
        self.state.update(SessionState::apply_begin_verify);
    }

    /// Persist both durable keys and commit the authenticated record in one
    /// atomic replacement.
    ///
    /// A cookie-only session with no bearer credential leaves the durable
    /// mirror cleared rather than writing an identity without a token.
    pub fn complete_sign_in(&self, identity: Identity, credential: Option<String>) {
        match credential.as_deref() {
            Some(token) => storage::save_session(&identity, token),
            None => storage::clear_session(),
        }
        self.state.update(|s| s.apply_sign_in(identity, credential));
    }

    /// Erase both durable keys and reset to logged-out, bumping the epoch.
    pub fn clear(&self) {
        storage::clear_session();
        self.state.update(SessionState::apply_clear);
    }

    /// Flip the loading flag off without touching authentication; used when a
    /// verification resolves after its caller unmounted.
    pub fn settle_stale(&self) {
        self.state.update(SessionState::apply_settle);
    }
}

/// Create the store and provide it as context. Call once, at the root.
pub fn provide_session() -> SessionStore {
    let session = SessionStore::new();
    provide_context(session);
    session
}

/// Fetch the store provided by the composition root.
pub fn use_session() -> SessionStore {
    expect_context::<SessionStore>()
}
