//! Query-string parsing for inventory filters
//!
//! Every recognized parameter either parses into a typed value or is treated
//! as absent. Nothing here returns an error.

use std::cmp::Ordering;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{BodyType, Choice, Listing, Transmission};
use crate::pagination::parse_saturating_int;

/// Raw query-string pairs in arrival order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    /// Parse an `application/x-www-form-urlencoded` query string
    pub fn parse(query: &str) -> Self {
        url::form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect()
    }

    /// Last value given for `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Every value given for `key`, in order
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

fn parse_decimal(raw: Option<&str>) -> Option<Decimal> {
    let value = raw?.trim();
    if value.is_empty() {
        return None;
    }
    Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .ok()
}

fn parse_int(raw: Option<&str>) -> Option<i64> {
    parse_saturating_int(raw?)
}

/// Result ordering; ties always fall back to manufacturer name, then id
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    PriceLowHigh,
    PriceHighLow,
    YearNewOld,
    YearOldNew,
}

impl Choice for SortKey {
    const ALL: &'static [Self] = &[
        SortKey::PriceLowHigh,
        SortKey::PriceHighLow,
        SortKey::YearNewOld,
        SortKey::YearOldNew,
    ];

    fn value(&self) -> &'static str {
        match self {
            SortKey::PriceLowHigh => "price_low_high",
            SortKey::PriceHighLow => "price_high_low",
            SortKey::YearNewOld => "year_new_old",
            SortKey::YearOldNew => "year_old_new",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            SortKey::PriceLowHigh => "Price: Low to High",
            SortKey::PriceHighLow => "Price: High to Low",
            SortKey::YearNewOld => "Year: New to Old",
            SortKey::YearOldNew => "Year: Old to New",
        }
    }
}

impl SortKey {
    pub fn from_params(params: &QueryParams) -> Self {
        params
            .get("sort")
            .and_then(SortKey::from_value)
            .unwrap_or_default()
    }

    pub fn compare(&self, a: &Listing, b: &Listing) -> Ordering {
        let primary = match self {
            SortKey::PriceLowHigh => a.price.cmp(&b.price),
            SortKey::PriceHighLow => b.price.cmp(&a.price),
            SortKey::YearNewOld => b.year.cmp(&a.year),
            SortKey::YearOldNew => a.year.cmp(&b.year),
        };
        primary
            .then_with(|| a.manufacturer.name.cmp(&b.manufacturer.name))
            .then(a.id.cmp(&b.id))
    }
}

/// One filter condition over a listing
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    PriceAtLeast(Decimal),
    PriceAtMost(Decimal),
    YearAtLeast(i64),
    YearAtMost(i64),
    Category(BodyType),
    /// Matches any of the listed transmissions
    TransmissionIn(Vec<Transmission>),
    Manufacturer(i64),
    Model(i64),
    Year(i64),
}

impl Predicate {
    pub fn matches(&self, listing: &Listing) -> bool {
        match self {
            Predicate::PriceAtLeast(min) => listing.price >= *min,
            Predicate::PriceAtMost(max) => listing.price <= *max,
            Predicate::YearAtLeast(min) => listing.year >= *min,
            Predicate::YearAtMost(max) => listing.year <= *max,
            Predicate::Category(body_type) => listing.body_type() == *body_type,
            Predicate::TransmissionIn(values) => values.contains(&listing.transmission),
            Predicate::Manufacturer(id) => listing.manufacturer.id == *id,
            Predicate::Model(id) => listing.model.id == *id,
            Predicate::Year(year) => listing.year == *year,
        }
    }
}

/// Visitor-selected filters that survived parsing
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InventoryFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_min: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_max: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_min: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_max: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<BodyType>,
    #[serde(rename = "transmission", skip_serializing_if = "Vec::is_empty")]
    pub transmissions: Vec<Transmission>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i64>,
}

impl InventoryFilters {
    pub fn from_params(params: &QueryParams) -> Self {
        Self {
            price_min: parse_decimal(params.get("price_min")),
            price_max: parse_decimal(params.get("price_max")),
            year_min: parse_int(params.get("year_min")),
            year_max: parse_int(params.get("year_max")),
            category: params.get("category").and_then(BodyType::from_value),
            transmissions: params
                .get_all("transmission")
                .into_iter()
                .filter_map(Transmission::from_value)
                .collect(),
            manufacturer: parse_int(params.get("manufacturer")),
            model: parse_int(params.get("model")),
            year: parse_int(params.get("year")),
        }
    }

    /// Conjunctive predicate list; empty when no filter is active
    pub fn predicates(&self) -> Vec<Predicate> {
        let mut predicates = Vec::new();
        if let Some(min) = self.price_min {
            predicates.push(Predicate::PriceAtLeast(min));
        }
        if let Some(max) = self.price_max {
            predicates.push(Predicate::PriceAtMost(max));
        }
        if let Some(min) = self.year_min {
            predicates.push(Predicate::YearAtLeast(min));
        }
        if let Some(max) = self.year_max {
            predicates.push(Predicate::YearAtMost(max));
        }
        if let Some(body_type) = self.category {
            predicates.push(Predicate::Category(body_type));
        }
        if !self.transmissions.is_empty() {
            predicates.push(Predicate::TransmissionIn(self.transmissions.clone()));
        }
        if let Some(id) = self.manufacturer {
            predicates.push(Predicate::Manufacturer(id));
        }
        if let Some(id) = self.model {
            predicates.push(Predicate::Model(id));
        }
        if let Some(year) = self.year {
            predicates.push(Predicate::Year(year));
        }
        predicates
    }

    /// Encoded query string reproducing the active filters (never sort or page)
    pub fn to_query_string(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        if let Some(v) = self.price_min {
            serializer.append_pair("price_min", &v.to_string());
        }
        if let Some(v) = self.price_max {
            serializer.append_pair("price_max", &v.to_string());
        }
        if let Some(v) = self.year_min {
            serializer.append_pair("year_min", &v.to_string());
        }
        if let Some(v) = self.year_max {
            serializer.append_pair("year_max", &v.to_string());
        }
        if let Some(v) = self.category {
            serializer.append_pair("category", v.value());
        }
        for transmission in &self.transmissions {
            serializer.append_pair("transmission", transmission.value());
        }
        if let Some(v) = self.manufacturer {
            serializer.append_pair("manufacturer", &v.to_string());
        }
        if let Some(v) = self.model {
            serializer.append_pair("model", &v.to_string());
        }
        if let Some(v) = self.year {
            serializer.append_pair("year", &v.to_string());
        }
        serializer.finish()
    }
}
