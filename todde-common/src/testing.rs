//! Listing fixtures for unit tests

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::models::{
    BodyType, CarModel, ListingImage, ListingType, Listing, Manufacturer, Transmission,
};

fn slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

/// Active automatic sedan priced at 10,000,000, registered
pub fn listing(id: i64, manufacturer: &str, model: &str, year: i64) -> Listing {
    Listing {
        id,
        year,
        trim: String::new(),
        price: Decimal::from(10_000_000),
        currency: "NGN".to_string(),
        transmission: Transmission::Automatic,
        listing_type: ListingType::Registered,
        is_active: true,
        updated_at: NaiveDateTime::default(),
        model: CarModel {
            id: id * 100,
            manufacturer_id: id * 1000,
            name: model.to_string(),
            slug: slug(model),
            body_type: BodyType::Sedan,
            is_active: true,
        },
        manufacturer: Manufacturer {
            id: id * 1000,
            name: manufacturer.to_string(),
            slug: slug(manufacturer),
            is_active: true,
        },
        images: Vec::new(),
    }
}

pub fn image(id: i64, order: i64, source_url: &str, alt_text: &str) -> ListingImage {
    ListingImage {
        id,
        order,
        source_url: source_url.to_string(),
        alt_text: alt_text.to_string(),
        is_active: true,
    }
}
