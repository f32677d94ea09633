//! Buyer landing page.

use leptos::prelude::*;

use crate::components::pet_card::PetCard;
use crate::state::session::use_session;

/// How many listings the landing page features.
const FEATURED_LIMIT: usize = 6;

/// Home page — greets the signed-in buyer and features recent listings.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let pets = LocalResource::new(move || crate::net::api::fetch_pets(session));

    let greeting = move || {
        session
            .get()
            .identity
            .map_or_else(|| "Welcome".to_owned(), |i| format!("Welcome, {}", i.display_name))
    };

    view! {
        <div class="home-page">
            <header class="home-page__header">
                <h1>{greeting}</h1>
                <a href="/wishlist" class="home-page__wishlist-link">"Your wishlist"</a>
            </header>
            <h2>"Fresh listings"</h2>
            <Suspense fallback=move || view! { <p>"Loading listings..."</p> }>
                {move || {
                    pets.get()
                        .map(|list| {
                            view! {
                                <div class="home-page__grid">
                                    {list
                                        .into_iter()
                                        .take(FEATURED_LIMIT)
                                        .map(|pet| view! { <PetCard pet=pet/> })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
