//! Facet counts and range statistics over the scoped base set
//!
//! Both are computed before visitor filters apply, so they describe what the
//! current page scope offers rather than what matches right now.

use std::collections::HashMap;
use std::hash::Hash;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Choice, Listing};

/// One selectable filter value with its listing count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetOption {
    pub value: &'static str,
    pub label: &'static str,
    pub count: usize,
}

/// Min/max price and year across the base set; `None` when it is empty
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InventoryStats {
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub min_year: Option<i64>,
    pub max_year: Option<i64>,
}

/// Count listings per choice, reporting non-empty buckets in choice order
pub fn facet_counts<C, F>(listings: &[&Listing], key: F) -> Vec<FacetOption>
where
    C: Choice + Eq + Hash,
    F: Fn(&Listing) -> C,
{
    let mut counts: HashMap<C, usize> = HashMap::new();
    for &listing in listings {
        *counts.entry(key(listing)).or_default() += 1;
    }

    C::ALL
        .iter()
        .filter_map(|choice| {
            counts.get(choice).map(|&count| FacetOption {
                value: choice.value(),
                label: choice.label(),
                count,
            })
        })
        .collect()
}

pub fn compute_stats(listings: &[&Listing]) -> InventoryStats {
    InventoryStats {
        min_price: listings.iter().map(|l| l.price).min(),
        max_price: listings.iter().map(|l| l.price).max(),
        min_year: listings.iter().map(|l| l.year).min(),
        max_year: listings.iter().map(|l| l.year).max(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BodyType, Transmission};
    use crate::testing::listing;

    #[test]
    fn test_only_non_empty_buckets_in_choice_order() {
        let mut a = listing(1, "Toyota", "RAV4", 2020);
        a.model.body_type = BodyType::Suv;
        let b = listing(2, "Toyota", "Corolla", 2021);
        let mut c = listing(3, "Ford", "F-150", 2019);
        c.model.body_type = BodyType::Truck;
        c.transmission = Transmission::Manual;
        let mut d = listing(4, "Honda", "CR-V", 2022);
        d.model.body_type = BodyType::Suv;

        let base = vec![&a, &b, &c, &d];
        let categories = facet_counts(&base, Listing::body_type);
        let values: Vec<(&str, usize)> = categories.iter().map(|f| (f.value, f.count)).collect();
        assert_eq!(values, vec![("sedan", 1), ("suv", 2), ("truck", 1)]);
        assert_eq!(categories[1].label, "SUV");

        let transmissions = facet_counts(&base, |l| l.transmission);
        let total: usize = transmissions.iter().map(|f| f.count).sum();
        assert_eq!(total, base.len());
    }

    #[test]
    fn test_stats_over_base_set() {
        let mut a = listing(1, "Toyota", "Corolla", 2018);
        a.price = Decimal::from(9_000_000);
        let mut b = listing(2, "Honda", "Civic", 2023);
        b.price = Decimal::from(21_000_000);

        let stats = compute_stats(&[&a, &b]);
        assert_eq!(stats.min_price, Some(Decimal::from(9_000_000)));
        assert_eq!(stats.max_price, Some(Decimal::from(21_000_000)));
        assert_eq!(stats.min_year, Some(2018));
        assert_eq!(stats.max_year, Some(2023));

        assert_eq!(compute_stats(&[]), InventoryStats::default());
    }
}
