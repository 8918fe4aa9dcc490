//! Manufacturer/model catalog snapshot and the lookup API payloads

use serde::Serialize;

use crate::models::{CarModel, Listing, Manufacturer};

/// Every manufacturer and model, active or not
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub manufacturers: Vec<Manufacturer>,
    pub models: Vec<CarModel>,
}

impl Catalog {
    pub fn new(manufacturers: Vec<Manufacturer>, models: Vec<CarModel>) -> Self {
        Self {
            manufacturers,
            models,
        }
    }

    pub fn manufacturer(&self, id: i64) -> Option<&Manufacturer> {
        self.manufacturers.iter().find(|m| m.id == id)
    }

    pub fn active_manufacturer(&self, id: i64) -> Option<&Manufacturer> {
        self.manufacturer(id).filter(|m| m.is_active)
    }

    pub fn active_model(&self, id: i64) -> Option<&CarModel> {
        self.models.iter().find(|m| m.id == id && m.is_active)
    }

    /// Active manufacturers ordered by name
    pub fn active_manufacturers(&self) -> Vec<&Manufacturer> {
        let mut manufacturers: Vec<&Manufacturer> =
            self.manufacturers.iter().filter(|m| m.is_active).collect();
        manufacturers.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        manufacturers
    }

    /// Active models of one manufacturer ordered by name
    pub fn active_models_of(&self, manufacturer_id: i64) -> Vec<&CarModel> {
        let mut models: Vec<&CarModel> = self
            .models
            .iter()
            .filter(|m| m.manufacturer_id == manufacturer_id && m.is_active)
            .collect();
        models.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        models
    }
}

/// Id and/or slug lookup key from the query string
#[derive(Debug, Clone, Default)]
pub struct EntityKey {
    pub id: Option<String>,
    pub slug: Option<String>,
}

impl EntityKey {
    pub fn new(id: Option<&str>, slug: Option<&str>) -> Self {
        let non_empty = |v: Option<&str>| v.filter(|s| !s.is_empty()).map(str::to_string);
        Self {
            id: non_empty(id),
            slug: non_empty(slug),
        }
    }

    pub fn is_missing(&self) -> bool {
        self.id.is_none() && self.slug.is_none()
    }

    /// Both parts must match when both are given; an unparseable id matches nothing
    fn matches(&self, id: i64, slug: &str) -> bool {
        let id_matches = match &self.id {
            Some(raw) => raw.trim().parse::<i64>().map(|v| v == id).unwrap_or(false),
            None => true,
        };
        let slug_matches = self.slug.as_deref().map_or(true, |s| s == slug);
        id_matches && slug_matches
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EntityRef {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

impl From<&Manufacturer> for EntityRef {
    fn from(m: &Manufacturer) -> Self {
        Self {
            id: m.id,
            name: m.name.clone(),
            slug: m.slug.clone(),
        }
    }
}

impl From<&CarModel> for EntityRef {
    fn from(m: &CarModel) -> Self {
        Self {
            id: m.id,
            name: m.name.clone(),
            slug: m.slug.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ManufacturerModels {
    pub manufacturer: EntityRef,
    pub models: Vec<EntityRef>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModelRef {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub manufacturer: EntityRef,
}

#[derive(Debug, Clone, Serialize)]
pub struct VariantSummary {
    pub id: i64,
    pub year: i64,
    pub trim: String,
    /// Decimal rendered as text, e.g. "25000000.00"
    pub price: String,
    pub currency: String,
    pub formatted_price: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModelVariants {
    pub model: ModelRef,
    pub variants: Vec<VariantSummary>,
}

/// Active manufacturer matching the key, with its active models
pub fn models_for_manufacturer(catalog: &Catalog, key: &EntityKey) -> Option<ManufacturerModels> {
    let manufacturer = catalog
        .manufacturers
        .iter()
        .find(|m| m.is_active && key.matches(m.id, &m.slug))?;

    Some(ManufacturerModels {
        manufacturer: manufacturer.into(),
        models: catalog
            .active_models_of(manufacturer.id)
            .into_iter()
            .map(EntityRef::from)
            .collect(),
    })
}

/// Active model (with active manufacturer) matching the key, with its active
/// listings ordered newest year first, then trim
pub fn variants_for_model(
    catalog: &Catalog,
    listings: &[Listing],
    key: &EntityKey,
) -> Option<ModelVariants> {
    let model = catalog.models.iter().find(|m| {
        m.is_active
            && key.matches(m.id, &m.slug)
            && catalog
                .manufacturer(m.manufacturer_id)
                .is_some_and(|mf| mf.is_active)
    })?;
    let manufacturer = catalog.manufacturer(model.manufacturer_id)?;

    let mut variants: Vec<&Listing> = listings
        .iter()
        .filter(|l| l.model.id == model.id && l.is_active)
        .collect();
    variants.sort_by(|a, b| {
        b.year
            .cmp(&a.year)
            .then_with(|| a.trim.cmp(&b.trim))
            .then(a.id.cmp(&b.id))
    });

    Some(ModelVariants {
        model: ModelRef {
            id: model.id,
            name: model.name.clone(),
            slug: model.slug.clone(),
            manufacturer: manufacturer.into(),
        },
        variants: variants
            .into_iter()
            .map(|l| VariantSummary {
                id: l.id,
                year: l.year,
                trim: l.trim.clone(),
                price: l.price.to_string(),
                currency: l.currency.clone(),
                formatted_price: l.formatted_price(),
            })
            .collect(),
    })
}
