//! Reusable card component for pet listings.
//!
//! DESIGN
//! ======
//! Keeps listing presentation consistent between the browse grid, the buyer
//! home page, and the wishlist while centralizing the detail-page link.

#[cfg(test)]
#[path = "pet_card_test.rs"]
mod pet_card_test;

use leptos::prelude::*;

use crate::net::types::Pet;

/// Format a cent amount as a dollar price string.
pub(crate) fn format_price_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    format!("{sign}${}.{:02}", cents / 100, cents % 100)
}

/// Species plus breed line, omitting the breed when the seller gave none.
pub(crate) fn species_line(pet: &Pet) -> String {
    match pet.breed.as_deref() {
        Some(breed) => format!("{} · {breed}", pet.species),
        None => pet.species.clone(),
    }
}

/// A clickable card linking to a pet's detail page.
#[component]
pub fn PetCard(
    pet: Pet,
    #[prop(optional)] on_remove: Option<Callback<String>>,
) -> impl IntoView {
    let href = format!("/pets/{}", pet.id);
    let price = format_price_cents(pet.price_cents);
    let subtitle = species_line(&pet);
    let sold = pet.status == "sold";

    let on_remove_click = Callback::new({
        let id = pet.id.clone();
        move |()| {
            if let Some(on_remove) = on_remove.as_ref() {
                on_remove.run(id.clone());
            }
        }
    });
    let removable = on_remove.is_some();

    view! {
        <a class="pet-card" class:pet-card--sold=sold href=href>
            {pet.photo_url.map(|url| view! { <img class="pet-card__photo" src=url alt=""/> })}
            <span class="pet-card__name">{pet.name}</span>
            <span class="pet-card__species">{subtitle}</span>
            <span class="pet-card__price">{price}</span>
            <Show when=move || removable>
                <button
                    class="pet-card__remove"
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.prevent_default();
                        ev.stop_propagation();
                        on_remove_click.run(());
                    }
                    title="Remove from wishlist"
                    aria-label="Remove from wishlist"
                >
                    "✕"
                </button>
            </Show>
        </a>
    }
}
