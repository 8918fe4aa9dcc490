//! Catalog models
//!
//! Manufacturers own models, models own listings (a specific year/trim of a
//! model), listings own images and an optional financing detail. Everything
//! here is read-only input to the inventory, financing and detail code.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Closed enumeration stored as a short string value with a display label
pub trait Choice: Sized + Copy + 'static {
    /// Every variant, in display order
    const ALL: &'static [Self];

    /// Stored/query-string value
    fn value(&self) -> &'static str;

    /// Human-readable label
    fn label(&self) -> &'static str;

    /// Parse a stored or query-string value; unknown values yield `None`
    fn from_value(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|choice| choice.value() == value)
    }
}

/// Body category of a model; listings inherit it from their model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BodyType {
    Sedan,
    Suv,
    Coupe,
    Hatchback,
    Truck,
    Van,
    Other,
}

impl Choice for BodyType {
    const ALL: &'static [Self] = &[
        BodyType::Sedan,
        BodyType::Suv,
        BodyType::Coupe,
        BodyType::Hatchback,
        BodyType::Truck,
        BodyType::Van,
        BodyType::Other,
    ];

    fn value(&self) -> &'static str {
        match self {
            BodyType::Sedan => "sedan",
            BodyType::Suv => "suv",
            BodyType::Coupe => "coupe",
            BodyType::Hatchback => "hatchback",
            BodyType::Truck => "truck",
            BodyType::Van => "van",
            BodyType::Other => "other",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            BodyType::Sedan => "Sedan",
            BodyType::Suv => "SUV",
            BodyType::Coupe => "Coupe",
            BodyType::Hatchback => "Hatchback",
            BodyType::Truck => "Truck",
            BodyType::Van => "Van",
            BodyType::Other => "Other",
        }
    }
}

/// Gearbox type of a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Transmission {
    Automatic,
    Manual,
    Cvt,
    DualClutch,
    Other,
}

impl Choice for Transmission {
    const ALL: &'static [Self] = &[
        Transmission::Automatic,
        Transmission::Manual,
        Transmission::Cvt,
        Transmission::DualClutch,
        Transmission::Other,
    ];

    fn value(&self) -> &'static str {
        match self {
            Transmission::Automatic => "automatic",
            Transmission::Manual => "manual",
            Transmission::Cvt => "cvt",
            Transmission::DualClutch => "dual-clutch",
            Transmission::Other => "other",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Transmission::Automatic => "Automatic",
            Transmission::Manual => "Manual",
            Transmission::Cvt => "CVT",
            Transmission::DualClutch => "Dual Clutch",
            Transmission::Other => "Other",
        }
    }
}

/// Whether a listing is locally registered or imported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListingType {
    Registered,
    ForeignUsed,
}

impl Choice for ListingType {
    const ALL: &'static [Self] = &[ListingType::Registered, ListingType::ForeignUsed];

    fn value(&self) -> &'static str {
        match self {
            ListingType::Registered => "registered",
            ListingType::ForeignUsed => "foreign-used",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ListingType::Registered => "Registered",
            ListingType::ForeignUsed => "Foreign Used",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manufacturer {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarModel {
    pub id: i64,
    pub manufacturer_id: i64,
    pub name: String,
    pub slug: String,
    pub body_type: BodyType,
    pub is_active: bool,
}

/// Gallery image attached to a listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingImage {
    pub id: i64,
    /// Display sequence; not guaranteed contiguous
    pub order: i64,
    pub source_url: String,
    pub alt_text: String,
    pub is_active: bool,
}

/// A year/trim instance of a model, joined with its ancestors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: i64,
    pub year: i64,
    pub trim: String,
    pub price: Decimal,
    pub currency: String,
    pub transmission: Transmission,
    pub listing_type: ListingType,
    pub is_active: bool,
    pub updated_at: NaiveDateTime,
    pub model: CarModel,
    pub manufacturer: Manufacturer,
    pub images: Vec<ListingImage>,
}

impl Listing {
    /// Body category inherited from the model
    pub fn body_type(&self) -> BodyType {
        self.model.body_type
    }

    /// True when the listing, its model and its manufacturer are all active
    pub fn is_visible(&self) -> bool {
        self.is_active && self.model.is_active && self.manufacturer.is_active
    }

    /// "Toyota Corolla 2023"
    pub fn display_name(&self) -> String {
        format!("{} {} {}", self.manufacturer.name, self.model.name, self.year)
    }

    /// Active images in display order
    pub fn active_images(&self) -> Vec<&ListingImage> {
        let mut images: Vec<&ListingImage> = self.images.iter().filter(|i| i.is_active).collect();
        images.sort_by_key(|image| (image.order, image.id));
        images
    }

    pub fn formatted_price(&self) -> String {
        format_price(self.price, &self.currency)
    }
}

/// Per-listing financing and descriptive content
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FinancingDetail {
    pub headline: String,
    pub subheadline: String,
    pub description: String,
    pub mileage_km: i64,
    pub location: String,
    pub finance_intro: String,
    /// Annual interest rate percentage
    pub loan_rate: Option<Decimal>,
    /// Deposit percentage, e.g. 30
    pub loan_deposit_percent: Option<Decimal>,
    pub loan_period_months: Option<i64>,
    /// Comma separated list of applicant types
    pub applicant_types: String,
    pub is_active: bool,
}

impl FinancingDetail {
    pub fn applicant_type_choices(&self) -> Vec<String> {
        self.applicant_types
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// "123,456 km", or an em dash when mileage is unknown
    pub fn mileage_display(&self) -> String {
        if self.mileage_km > 0 {
            format!("{} km", group_thousands(&self.mileage_km.to_string()))
        } else {
            "—".to_string()
        }
    }
}

/// Format a price for display: `₦17,800,000` or `USD 1,250.50`
pub fn format_price(price: Decimal, currency: &str) -> String {
    let value = if price.fract().is_zero() {
        price.trunc().to_string()
    } else {
        price.round_dp(2).to_string()
    };
    let value = match value.split_once('.') {
        Some((whole, fraction)) => format!("{}.{:0<2}", group_thousands(whole), fraction),
        None => group_thousands(&value),
    };

    if currency.eq_ignore_ascii_case("NGN") {
        format!("₦{}", value)
    } else {
        format!("{} {}", currency, value)
    }
}

/// Insert comma separators into a run of integer digits (sign preserved)
fn group_thousands(digits: &str) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{}{}", sign, grouped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_choice_round_trip_values() {
        assert_eq!(BodyType::from_value("suv"), Some(BodyType::Suv));
        assert_eq!(Transmission::from_value("dual-clutch"), Some(Transmission::DualClutch));
        assert_eq!(ListingType::from_value("foreign-used"), Some(ListingType::ForeignUsed));
        assert_eq!(BodyType::from_value("SUV"), None);
        assert_eq!(Transmission::from_value(""), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(BodyType::Suv.label(), "SUV");
        assert_eq!(Transmission::Cvt.label(), "CVT");
        assert_eq!(Transmission::DualClutch.label(), "Dual Clutch");
        assert_eq!(ListingType::ForeignUsed.label(), "Foreign Used");
    }

    #[test]
    fn test_serde_uses_stored_values() {
        let json = serde_json::to_string(&Transmission::DualClutch).unwrap();
        assert_eq!(json, "\"dual-clutch\"");
        let json = serde_json::to_string(&ListingType::ForeignUsed).unwrap();
        assert_eq!(json, "\"foreign-used\"");
    }

    #[test]
    fn test_format_price_integral_naira() {
        let price = Decimal::from_str("17800000.00").unwrap();
        assert_eq!(format_price(price, "NGN"), "₦17,800,000");
        assert_eq!(format_price(price, "ngn"), "₦17,800,000");
    }

    #[test]
    fn test_format_price_fractional_other_currency() {
        let price = Decimal::from_str("1250.5").unwrap();
        assert_eq!(format_price(price, "USD"), "USD 1,250.50");
    }

    #[test]
    fn test_format_price_small_values() {
        assert_eq!(format_price(Decimal::ZERO, "NGN"), "₦0");
        assert_eq!(format_price(Decimal::from(999), "NGN"), "₦999");
        assert_eq!(format_price(Decimal::from(1000), "NGN"), "₦1,000");
    }

    #[test]
    fn test_applicant_types_and_mileage() {
        let detail = FinancingDetail {
            applicant_types: "Salary earner, , Ride-hailing partner ".to_string(),
            mileage_km: 123456,
            ..Default::default()
        };
        assert_eq!(
            detail.applicant_type_choices(),
            vec!["Salary earner".to_string(), "Ride-hailing partner".to_string()]
        );
        assert_eq!(detail.mileage_display(), "123,456 km");
        assert_eq!(FinancingDetail::default().mileage_display(), "—");
    }
}
