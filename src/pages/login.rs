//! Login page: the redirect target for every denied navigation.
//!
//! The guard sends visitors here with a `redirect` query parameter carrying
//! the path they originally asked for; a successful sign-in returns them
//! there, or to their role's landing page when no target was given.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::net::types::Role;
use crate::policy;
use crate::state::session::use_session;

/// Only same-origin absolute paths may be used as a return target; anything
/// else falls back to the role's landing page.
pub(crate) fn is_safe_return_target(target: &str) -> bool {
    target.starts_with('/') && !target.starts_with("//")
}

/// Where to land after a successful sign-in.
pub(crate) fn post_login_destination(redirect: Option<&str>, role: Role) -> String {
    match redirect {
        Some(target) if is_safe_return_target(target) => target.to_owned(),
        _ => policy::default_route_for(role).to_owned(),
    }
}

/// Email + password sign-in form.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if email_value.is_empty() || password_value.is_empty() {
            info.set("Enter both email and password.".to_owned());
            return;
        }
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let redirect = query.get_untracked().get("redirect");
            leptos::task::spawn_local(async move {
                match crate::net::api::login(session, &email_value, &password_value).await {
                    Ok(resp) => {
                        let destination =
                            post_login_destination(redirect.as_deref(), resp.user.role);
                        session.complete_sign_in(resp.user, Some(resp.token));
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href(&destination);
                        }
                    }
                    Err(message) => {
                        info.set(message);
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &query;
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Pawmart"</h1>
                <p class="login-card__subtitle">"Sign in to continue"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
