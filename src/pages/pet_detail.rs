//! Pet detail page. Public to view; wishlist actions appear for buyers.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::pet_card::{format_price_cents, species_line};
use crate::net::types::Role;
use crate::state::session::use_session;

/// Detail page for a single listing, keyed by the `:id` route parameter.
#[component]
pub fn PetDetailPage() -> impl IntoView {
    let session = use_session();
    let params = use_params_map();

    let pet = LocalResource::new(move || {
        let id = params.read().get("id").unwrap_or_default();
        async move { crate::net::api::fetch_pet(session, &id).await }
    });

    let saved = RwSignal::new(false);
    let is_buyer = move || {
        session
            .get()
            .identity
            .is_some_and(|i| i.role == Role::Buyer)
    };

    let on_save = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let id = params.get_untracked().get("id").unwrap_or_default();
            leptos::task::spawn_local(async move {
                if crate::net::api::add_to_wishlist(session, &id).await {
                    saved.set(true);
                }
            });
        }
    };

    view! {
        <div class="pet-detail-page">
            <Suspense fallback=move || view! { <p>"Loading..."</p> }>
                {move || {
                    pet.get()
                        .map(|found| match found {
                            Some(pet) => {
                                let price = format_price_cents(pet.price_cents);
                                let subtitle = species_line(&pet);
                                view! {
                                    <article class="pet-detail">
                                        {pet
                                            .photo_url
                                            .map(|url| {
                                                view! { <img class="pet-detail__photo" src=url alt=""/> }
                                            })}
                                        <h1>{pet.name}</h1>
                                        <p class="pet-detail__species">{subtitle}</p>
                                        <p class="pet-detail__price">{price}</p>
                                        <p class="pet-detail__status">{pet.status}</p>
                                        <Show when=is_buyer>
                                            <button
                                                class="pet-detail__save"
                                                disabled=move || saved.get()
                                                on:click=on_save
                                            >
                                                {move || {
                                                    if saved.get() { "Saved to wishlist" } else { "Save to wishlist" }
                                                }}
                                            </button>
                                        </Show>
                                    </article>
                                }
                                    .into_any()
                            }
                            None => {
                                view! { <p class="pet-detail__missing">"This listing is no longer available."</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
