//! Seller dashboard listing the signed-in seller's own pets.

#[cfg(test)]
#[path = "seller_dashboard_test.rs"]
mod seller_dashboard_test;

use leptos::prelude::*;

use crate::components::pet_card::{PetCard, format_price_cents};
use crate::net::types::Pet;
use crate::state::session::use_session;

/// (available, sold) listing counts for the dashboard summary strip.
pub(crate) fn listing_counts(listings: &[Pet]) -> (usize, usize) {
    let sold = listings.iter().filter(|pet| pet.status == "sold").count();
    (listings.len() - sold, sold)
}

/// Total asking price of unsold listings, in cents.
pub(crate) fn open_inventory_cents(listings: &[Pet]) -> i64 {
    listings
        .iter()
        .filter(|pet| pet.status != "sold")
        .map(|pet| pet.price_cents)
        .sum()
}

/// Seller dashboard page.
#[component]
pub fn SellerDashboardPage() -> impl IntoView {
    let session = use_session();
    let listings = LocalResource::new(move || crate::net::api::fetch_seller_listings(session));

    view! {
        <div class="seller-page">
            <h1>"My listings"</h1>
            <Suspense fallback=move || view! { <p>"Loading listings..."</p> }>
                {move || {
                    listings
                        .get()
                        .map(|list| {
                            let (available, sold) = listing_counts(&list);
                            let open_value = format_price_cents(open_inventory_cents(&list));
                            view! {
                                <div class="seller-page__summary">
                                    <span>{format!("{available} available")}</span>
                                    <span>{format!("{sold} sold")}</span>
                                    <span>{format!("{open_value} open inventory")}</span>
                                </div>
                                <div class="seller-page__grid">
                                    {list
                                        .into_iter()
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
