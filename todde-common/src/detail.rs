//! Vehicle detail page assembly

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, EntityRef};
use crate::content::PageMeta;
use crate::financing::{estimate, LoanSummary, LoanTerms};
use crate::images::{build_gallery, Gallery};
use crate::inventory::ListingCard;
use crate::models::{BodyType, Choice, FinancingDetail, Listing};

const RELATED_LIMIT: usize = 3;
const RECENT_LIMIT: usize = 3;
const SIDEBAR_MANUFACTURER_LIMIT: usize = 10;
const META_DESCRIPTION_CHARS: usize = 155;

const DEFAULT_FEATURES: &[&str] = &["Alloy wheels", "Airbags", "Steering control", "Navigation system"];
const DEFAULT_APPLICANT_TYPES: &[&str] = &["Salary Earner", "Business Owner", "Ride-Hailing Partner"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specification {
    pub label: String,
    pub value: String,
}

/// Stored extras for one listing; each list already filtered to active rows
/// and ordered
#[derive(Debug, Clone, Default)]
pub struct ListingExtras {
    pub detail: Option<FinancingDetail>,
    pub features: Vec<String>,
    pub specifications: Vec<Specification>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryLink {
    pub label: &'static str,
    pub value: &'static str,
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct VehicleDetail {
    pub listing: ListingCard,
    pub detail: Option<FinancingDetail>,
    pub gallery: Gallery,
    pub features: Vec<String>,
    pub specifications: Vec<Specification>,
    pub loan_summary: LoanSummary,
    pub applicant_types: Vec<String>,
    pub related: Vec<ListingCard>,
    pub recent: Vec<ListingCard>,
    pub categories: Vec<CategoryLink>,
    pub manufacturers: Vec<EntityRef>,
    pub meta: PageMeta,
}

fn default_specifications(listing: &Listing, detail: Option<&FinancingDetail>) -> Vec<Specification> {
    let spec = |label: &str, value: String| Specification {
        label: label.to_string(),
        value,
    };
    vec![
        spec("Engine Type", "Cylinder V6".to_string()),
        spec("Fuel Type", "Petrol".to_string()),
        spec("Transmission", listing.transmission.label().to_string()),
        spec(
            "Mileage",
            detail.map_or_else(|| "—".to_string(), FinancingDetail::mileage_display),
        ),
    ]
}

fn meta_for(listing: &Listing, detail: Option<&FinancingDetail>) -> PageMeta {
    let name = listing.display_name();
    let description = match detail {
        Some(d) if !d.description.is_empty() => {
            d.description.chars().take(META_DESCRIPTION_CHARS).collect()
        }
        _ => format!("Explore the {name} available from Todde."),
    };
    PageMeta {
        title: format!("{name} | Todde"),
        description,
    }
}

/// Build the detail context for `listing_id`
///
/// Returns `None` unless the listing exists and is visible. `listings` is the
/// full loaded set used for the related and recent sidebars.
pub fn build_vehicle_detail(
    listing_id: i64,
    listings: &[Listing],
    extras: ListingExtras,
    catalog: &Catalog,
    placeholder_url: &str,
) -> Option<VehicleDetail> {
    let listing = listings.iter().find(|l| l.id == listing_id && l.is_visible())?;
    let detail = extras.detail.filter(|d| d.is_active);

    let features = if extras.features.is_empty() {
        DEFAULT_FEATURES.iter().map(|f| f.to_string()).collect()
    } else {
        extras.features
    };
    let specifications = if extras.specifications.is_empty() {
        default_specifications(listing, detail.as_ref())
    } else {
        extras.specifications
    };

    let terms = LoanTerms::for_detail(detail.as_ref());
    let loan_summary = estimate(Some(listing.price), &terms);

    let applicant_types = match detail.as_ref().map(FinancingDetail::applicant_type_choices) {
        Some(types) if !types.is_empty() => types,
        _ => DEFAULT_APPLICANT_TYPES.iter().map(|t| t.to_string()).collect(),
    };

    let mut related: Vec<&Listing> = listings
        .iter()
        .filter(|l| l.is_visible() && l.id != listing.id && l.manufacturer.id == listing.manufacturer.id)
        .collect();
    related.sort_by(|a, b| b.year.cmp(&a.year).then(a.id.cmp(&b.id)));

    let mut recent: Vec<&Listing> = listings.iter().filter(|l| l.is_visible()).collect();
    recent.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then(b.id.cmp(&a.id)));

    let categories = BodyType::ALL
        .iter()
        .map(|body_type| CategoryLink {
            label: body_type.label(),
            value: body_type.value(),
            url: format!("/cars/?category={}", body_type.value()),
        })
        .collect();

    Some(VehicleDetail {
        listing: ListingCard::new(listing, placeholder_url),
        gallery: build_gallery(listing, placeholder_url),
        features,
        specifications,
        loan_summary,
        applicant_types,
        related: related
            .into_iter()
            .take(RELATED_LIMIT)
            .map(|l| ListingCard::new(l, placeholder_url))
            .collect(),
        recent: recent
            .into_iter()
            .take(RECENT_LIMIT)
            .map(|l| ListingCard::new(l, placeholder_url))
            .collect(),
        categories,
        manufacturers: catalog
            .active_manufacturers()
            .into_iter()
            .take(SIDEBAR_MANUFACTURER_LIMIT)
            .map(EntityRef::from)
            .collect(),
        meta: meta_for(listing, detail.as_ref()),
        detail,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::listing;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn catalog_of(listings: &[Listing]) -> Catalog {
        Catalog::new(
            listings.iter().map(|l| l.manufacturer.clone()).collect(),
            listings.iter().map(|l| l.model.clone()).collect(),
        )
    }

    fn at(day: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, day)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .unwrap()
    }

    #[test]
    fn test_hidden_or_missing_listing_is_none() {
        let mut hidden = listing(1, "Toyota", "Corolla", 2020);
        hidden.model.is_active = false;
        let listings = vec![hidden];
        let catalog = catalog_of(&listings);
        assert!(build_vehicle_detail(1, &listings, ListingExtras::default(), &catalog, "/ph.svg").is_none());
        assert!(build_vehicle_detail(9, &listings, ListingExtras::default(), &catalog, "/ph.svg").is_none());
    }

    #[test]
    fn test_defaults_without_extras() {
        let mut l = listing(1, "Toyota", "Corolla", 2023);
        l.price = Decimal::from(17_800_000);
        let listings = vec![l];
        let catalog = catalog_of(&listings);
        let page = build_vehicle_detail(1, &listings, ListingExtras::default(), &catalog, "/ph.svg").unwrap();

        assert_eq!(page.features.len(), 4);
        assert_eq!(page.specifications[2].value, "Automatic");
        assert_eq!(page.specifications[3].value, "—");
        assert_eq!(page.loan_summary.monthly_payment, Decimal::from(619_048));
        assert_eq!(page.applicant_types[2], "Ride-Hailing Partner");
        assert_eq!(page.meta.title, "Toyota Corolla 2023 | Todde");
        assert_eq!(page.meta.description, "Explore the Toyota Corolla 2023 available from Todde.");
        assert!(page.gallery.items[0].is_placeholder);
        assert_eq!(page.categories.len(), BodyType::ALL.len());
        assert_eq!(page.categories[1].url, "/cars/?category=suv");
    }

    #[test]
    fn test_active_detail_drives_terms_and_meta() {
        let mut l = listing(1, "Toyota", "Corolla", 2023);
        l.price = Decimal::from(25_000_000);
        let listings = vec![l];
        let catalog = catalog_of(&listings);
        let extras = ListingExtras {
            detail: Some(FinancingDetail {
                description: "x".repeat(200),
                mileage_km: 45_000,
                loan_rate: Some(Decimal::from(18)),
                loan_period_months: Some(30),
                applicant_types: "Civil Servant, ".to_string(),
                is_active: true,
                ..Default::default()
            }),
            features: Vec::new(),
            specifications: Vec::new(),
        };
        let page = build_vehicle_detail(1, &listings, extras, &catalog, "/ph.svg").unwrap();
        assert_eq!(page.loan_summary.monthly_payment, Decimal::from(728_686));
        assert_eq!(page.loan_summary.period_months, 30);
        assert_eq!(page.specifications[3].value, "45,000 km");
        assert_eq!(page.applicant_types, vec!["Civil Servant".to_string()]);
        assert_eq!(page.meta.description.chars().count(), 155);
    }

    #[test]
    fn test_inactive_detail_is_ignored() {
        let listings = vec![listing(1, "Toyota", "Corolla", 2023)];
        let catalog = catalog_of(&listings);
        let extras = ListingExtras {
            detail: Some(FinancingDetail {
                loan_period_months: Some(6),
                is_active: false,
                ..Default::default()
            }),
            features: vec!["Sunroof".to_string()],
            specifications: Vec::new(),
        };
        let page = build_vehicle_detail(1, &listings, extras, &catalog, "/ph.svg").unwrap();
        assert!(page.detail.is_none());
        assert_eq!(page.loan_summary.period_months, 24);
        assert_eq!(page.features, vec!["Sunroof".to_string()]);
    }

    #[test]
    fn test_related_and_recent() {
        let mut listings: Vec<Listing> = (1..=5)
            .map(|i| {
                let mut l = listing(i, "Toyota", "Corolla", 2015 + i);
                l.manufacturer.id = 1;
                l.model.manufacturer_id = 1;
                l.updated_at = at(i as u32);
                l
            })
            .collect();
        let mut other = listing(6, "Honda", "Civic", 2024);
        other.updated_at = at(20);
        listings.push(other);
        let catalog = catalog_of(&listings);

        let page = build_vehicle_detail(1, &listings, ListingExtras::default(), &catalog, "/ph.svg").unwrap();
        let related: Vec<i64> = page.related.iter().map(|c| c.id).collect();
        assert_eq!(related, vec![5, 4, 3]);
        let recent: Vec<i64> = page.recent.iter().map(|c| c.id).collect();
        assert_eq!(recent, vec![6, 5, 4]);
    }
}
