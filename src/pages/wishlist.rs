//! Buyer wishlist page.

use leptos::prelude::*;

use crate::components::pet_card::PetCard;
use crate::state::session::use_session;

/// Wishlist page — saved listings with a remove affordance.
#[component]
pub fn WishlistPage() -> impl IntoView {
    let session = use_session();
    let wishlist = LocalResource::new(move || crate::net::api::fetch_wishlist(session));

    let on_remove = Callback::new(move |pet_id: String| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                if crate::net::api::remove_from_wishlist(session, &pet_id).await {
                    wishlist.refetch();
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = pet_id;
        }
    });

    view! {
        <div class="wishlist-page">
            <h1>"Your wishlist"</h1>
            <Suspense fallback=move || view! { <p>"Loading wishlist..."</p> }>
                {move || {
                    wishlist
                        .get()
                        .map(|list| {
                            if list.is_empty() {
                                view! {
                                    <p class="wishlist-page__empty">
                                        "Nothing saved yet. "
                                        <a href="/pets">"Browse pets"</a>
                                    </p>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <div class="wishlist-page__grid">
                                        {list
                                            .into_iter()
                                            .map(|pet| {
                                                view! { <PetCard pet=pet on_remove=on_remove/> }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
