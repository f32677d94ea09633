//! Session verification against the backend's notion of the session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards call [`spawn_verify`] when the session is not yet confirmed
//! for a navigation. Exactly one identity check may be in flight at a time;
//! later guard mounts observe the loading flag and wait for the same
//! resolution instead of issuing duplicate network calls.
//!
//! CANCELLATION
//! ============
//! A guard may unmount while the check is in flight. The [`Liveness`] token
//! captured at invocation is effect-cancellation only: the network call is
//! not aborted, its result is discarded. [`verify_write_action`] decides what
//! a resolution may still write — the session epoch beats the token, so a
//! logout that happened mid-flight always wins over a stale success.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::state::session::{SessionState, SessionStore};

/// Marker for whether the caller of an async verification still wants its
/// result. Guards revoke it from `on_cleanup`.
#[derive(Clone, Debug)]
pub struct Liveness(Arc<AtomicBool>);

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

impl Liveness {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    /// Mark the caller as gone; any in-flight verification it started will
    /// settle instead of committing.
    pub fn revoke(&self) {
        self.0.store(false, Ordering::Relaxed);
    }

    pub fn is_live(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Re-entrancy predicate: start a network call only when no verification is
/// in flight and the session is not already confirmed.
pub(crate) fn should_start_verify(state: &SessionState) -> bool {
    !state.is_loading && !state.is_authenticated
}

/// What a resolved verification may write back to shared state.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum WriteAction {
    /// Caller still live, epoch unchanged: commit the outcome.
    Commit,
    /// Caller gone but epoch unchanged: settle the loading flag only.
    Settle,
    /// Epoch moved on (logout or re-login mid-flight): touch nothing.
    Discard,
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn verify_write_action(
    started_epoch: u64,
    current_epoch: u64,
    caller_live: bool,
) -> WriteAction {
    if started_epoch != current_epoch {
        WriteAction::Discard
    } else if caller_live {
        WriteAction::Commit
    } else {
        WriteAction::Settle
    }
}

/// Reconcile the session record with the backend, once.
///
/// On success the durable credential backfills the in-memory mirror when the
/// mirror is empty (the fresh-page-load window). On any failure the session
/// is cleared: an unreachable or rejecting backend means "not authenticated",
/// never a retry loop.
pub fn spawn_verify(session: SessionStore, liveness: Liveness) {
    if !should_start_verify(&session.get_untracked()) {
        return;
    }

    #[cfg(feature = "hydrate")]
    {
        let started_epoch = session.get_untracked().epoch;
        session.begin_verify();

        leptos::task::spawn_local(async move {
            let identity = crate::net::api::fetch_current_user(session).await;

            let current = session.get_untracked();
            match verify_write_action(started_epoch, current.epoch, liveness.is_live()) {
                WriteAction::Discard => {}
                WriteAction::Settle => session.settle_stale(),
                WriteAction::Commit => match identity {
                    Some(identity) => {
                        let credential = current
                            .credential
                            .clone()
                            .or_else(crate::util::storage::load_token);
                        session.complete_sign_in(identity, credential);
                    }
                    None => session.clear(),
                },
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = liveness;
    }
}
