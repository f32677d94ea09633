//! Route guard gating protected pages on session state and role policy.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route wraps its page in [`RouteGuard`]. The guard runs a
//! small state machine per mount: INIT reads the session and decides
//! synchronously when it can; CHECKING covers the async identity check while
//! a neutral indicator renders (never the protected content, never a
//! redirect, so a legitimate session restore cannot flicker through login);
//! the terminal states render the page or navigate away.
//!
//! The decision itself is the pure [`decide`] function so the whole matrix is
//! unit-testable without a browser.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::net::types::Role;
use crate::policy;
use crate::state::session::{SessionState, use_session};
use crate::util::auth::{Liveness, spawn_verify};

/// What the guard should do for the current (session, path) pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum GuardOutcome {
    /// Authorization confirmed; render the wrapped page.
    Render,
    /// A verification is in flight; show the neutral indicator.
    Pending,
    /// No session and no attempt yet; start the identity check.
    StartVerify,
    /// Denied; navigate to the given target.
    Redirect(String),
}

/// Percent-encode a path for use as a single query-parameter value.
pub(crate) fn percent_encode_component(raw: &str) -> String {
    use std::fmt::Write as _;

    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(char::from(byte));
            }
            _ => {
                let _ = write!(out, "%{byte:02X}");
            }
        }
    }
    out
}

/// Login target carrying the originally requested path, so the visitor lands
/// back where they intended after authenticating.
pub(crate) fn login_redirect_url(requested_path: &str) -> String {
    format!(
        "{}?redirect={}",
        policy::LOGIN_ROUTE,
        percent_encode_component(requested_path)
    )
}

/// The guard's decision table.
///
/// `allowed_roles` narrows the global policy for this guard; empty means no
/// narrowing. `attempted` records whether this mount already ran a
/// verification — only a completed attempt may conclude "unauthenticated,
/// redirect to login".
pub(crate) fn decide(
    state: &SessionState,
    path: &str,
    allowed_roles: &[Role],
    attempted: bool,
) -> GuardOutcome {
    if state.is_loading {
        return GuardOutcome::Pending;
    }

    if state.is_authenticated
        && let Some(identity) = state.identity.as_ref()
    {
        let role = identity.role;
        let narrowed_out = !allowed_roles.is_empty() && !allowed_roles.contains(&role);
        if narrowed_out || !policy::is_allowed(Some(role), path) {
            // Wrong role for this surface: redirect to the role's home, not
            // to login. The session itself is still valid.
            return GuardOutcome::Redirect(policy::default_route_for(role).to_owned());
        }
        return GuardOutcome::Render;
    }

    if policy::is_allowed(None, path) {
        return GuardOutcome::Render;
    }

    if attempted {
        GuardOutcome::Redirect(login_redirect_url(path))
    } else {
        GuardOutcome::StartVerify
    }
}

/// Wraps a protected page and renders it only once authorization is
/// confirmed.
#[component]
pub fn RouteGuard(
    /// Explicit role allow-list narrowing the global policy for this guard.
    #[prop(optional)]
    allowed_roles: Vec<Role>,
    children: ChildrenFn,
) -> impl IntoView {
    let session = use_session();
    let location = use_location();
    let navigate = use_navigate();

    let attempted = RwSignal::new(false);
    let liveness = Liveness::new();
    {
        let liveness = liveness.clone();
        on_cleanup(move || liveness.revoke());
    }

    let path = Memo::new(move |_| location.pathname.get());

    // A fresh path restarts the INIT decision for this mount.
    Effect::new(move |previous: Option<String>| {
        let current = path.get();
        if previous.is_some_and(|p| p != current) {
            attempted.set(false);
        }
        current
    });

    // The decision re-runs only when the path or the session record changes,
    // never on unrelated renders.
    let outcome = Memo::new(move |_| decide(&session.get(), &path.get(), &allowed_roles, attempted.get()));

    Effect::new(move || match outcome.get() {
        GuardOutcome::StartVerify => {
            attempted.set(true);
            spawn_verify(session, liveness.clone());
        }
        GuardOutcome::Redirect(target) => {
            navigate(&target, NavigateOptions::default());
        }
        GuardOutcome::Render | GuardOutcome::Pending => {}
    });

    view! {
        <Show
            when=move || outcome.get() == GuardOutcome::Render
            fallback=|| {
                view! { <div class="route-guard__loading">"Checking access..."</div> }
            }
        >
            {children()}
        </Show>
    }
}
