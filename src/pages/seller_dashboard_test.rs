use super::*;

fn listing(status: &str, price_cents: i64) -> Pet {
    Pet {
        id: "p-1".to_owned(),
        name: "Biscuit".to_owned(),
        species: "dog".to_owned(),
        breed: None,
        price_cents,
        photo_url: None,
        seller_id: "u-1".to_owned(),
        status: status.to_owned(),
    }
}

#[test]
fn counts_split_sold_from_everything_else() {
    let listings = [
        listing("available", 100),
        listing("pending", 200),
        listing("sold", 300),
    ];
    assert_eq!(listing_counts(&listings), (2, 1));
}

#[test]
fn open_inventory_excludes_sold_listings() {
    let listings = [
        listing("available", 10_000),
        listing("pending", 5_000),
        listing("sold", 99_000),
    ];
    assert_eq!(open_inventory_cents(&listings), 15_000);
}

#[test]
fn empty_dashboard_is_all_zeroes() {
    assert_eq!(listing_counts(&[]), (0, 0));
    assert_eq!(open_inventory_cents(&[]), 0);
}
