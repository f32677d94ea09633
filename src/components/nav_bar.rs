//! Top navigation bar with role-aware links, theme toggle, and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! The nav bar is the main reader of session state outside the route guard:
//! it shows only links the current role may follow (the same policy table the
//! guard enforces) and owns the explicit logout action.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;

use crate::net::types::Role;
use crate::state::session::use_session;
use crate::util::dark_mode;

/// Links shown for a visitor with the given role, as (href, label) pairs.
/// Every entry passes `policy::is_allowed` for that role.
pub(crate) fn nav_links_for(role: Option<Role>) -> Vec<(&'static str, &'static str)> {
    let mut links = vec![("/pets", "Browse")];
    match role {
        Some(Role::Buyer) => {
            links.push(("/home", "Home"));
            links.push(("/wishlist", "Wishlist"));
        }
        Some(Role::Seller) => links.push(("/seller/dashboard", "My Listings")),
        Some(Role::Admin) => links.push(("/admin/dashboard", "Admin")),
        None => {}
    }
    links
}

/// Top bar shown on every page.
#[component]
pub fn NavBar() -> impl IntoView {
    let session = use_session();

    let dark = RwSignal::new(false);
    Effect::new(move || {
        let initial = dark_mode::read_preference();
        dark_mode::apply(initial);
        dark.set(initial);
    });
    let on_theme_toggle = move |_| {
        dark.set(dark_mode::toggle(dark.get_untracked()));
    };

    let links = move || nav_links_for(session.get().identity.map(|i| i.role));
    let display_name = move || {
        session
            .get()
            .identity
            .map_or_else(String::new, |i| i.display_name)
    };
    let signed_in = move || session.get().is_authenticated;

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                crate::net::api::logout(session).await;
                crate::net::gateway::invalidate_session_and_redirect(session);
            });
        }
    };

    view! {
        <header class="nav-bar">
            <a href="/" class="nav-bar__brand">"Pawmart"</a>
            <nav class="nav-bar__links">
                {move || {
                    links()
                        .into_iter()
                        .map(|(href, label)| view! { <a href=href class="nav-bar__link">{label}</a> })
                        .collect::<Vec<_>>()
                }}
            </nav>
            <span class="nav-bar__spacer"></span>
            <button
                class="nav-bar__theme"
                on:click=on_theme_toggle
                title="Toggle theme"
                aria-label="Toggle theme"
            >
                {move || if dark.get() { "\u{2600}" } else { "\u{263e}" }}
            </button>
            <Show
                when=signed_in
                fallback=|| view! { <a href="/login" class="nav-bar__login">"Sign in"</a> }
            >
                <span class="nav-bar__user">{display_name}</span>
                <button class="nav-bar__logout" on:click=on_logout>
                    "Logout"
                </button>
            </Show>
        </header>
    }
}
