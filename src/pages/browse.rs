//! Public browse page listing every available pet.

#[cfg(test)]
#[path = "browse_test.rs"]
mod browse_test;

use leptos::prelude::*;

use crate::components::pet_card::PetCard;
use crate::net::types::Pet;
use crate::state::session::use_session;

/// Case-insensitive match against name, species, and breed.
pub(crate) fn filter_pets(pets: &[Pet], query: &str) -> Vec<Pet> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return pets.to_vec();
    }
    pets.iter()
        .filter(|pet| {
            pet.name.to_lowercase().contains(&needle)
                || pet.species.to_lowercase().contains(&needle)
                || pet
                    .breed
                    .as_deref()
                    .is_some_and(|b| b.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Browse page — the public storefront grid.
#[component]
pub fn BrowsePage() -> impl IntoView {
    let session = use_session();
    let pets = LocalResource::new(move || crate::net::api::fetch_pets(session));
    let query = RwSignal::new(String::new());

    view! {
        <div class="browse-page">
            <header class="browse-page__header">
                <h1>"Find your next companion"</h1>
                <input
                    class="browse-page__search"
                    type="search"
                    placeholder="Search by name, species, or breed"
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
            </header>
            <Suspense fallback=move || view! { <p>"Loading pets..."</p> }>
                {move || {
                    pets.get()
                        .map(|list| {
                            let visible = filter_pets(&list, &query.get());
                            if visible.is_empty() {
                                view! { <p class="browse-page__empty">"No pets match."</p> }
                                    .into_any()
                            } else {
                                view! {
                                    <div class="browse-page__grid">
                                        {visible
                                            .into_iter()
                                            .map(|pet| view! { <PetCard pet=pet/> })
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
