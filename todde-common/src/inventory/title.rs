//! Page heading derived from the manufacturer/model/year filters

use crate::catalog::Catalog;

use super::query::InventoryFilters;

/// "Toyota Cars", "Toyota Corolla Cars", "Toyota Corolla 2021 Cars"
///
/// Unknown or inactive manufacturers and models contribute nothing. A model
/// filter without a manufacturer filter also contributes the model's
/// manufacturer name. Falls back to `default_title` when nothing applies.
pub fn dynamic_title(filters: &InventoryFilters, catalog: &Catalog, default_title: &str) -> String {
    let manufacturer_id = filters.manufacturer.filter(|&id| id != 0);
    let model_id = filters.model.filter(|&id| id != 0);
    let year = filters.year.filter(|&year| year != 0);

    let mut parts: Vec<String> = Vec::new();

    if let Some(manufacturer) = manufacturer_id.and_then(|id| catalog.active_manufacturer(id)) {
        parts.push(manufacturer.name.clone());
    }

    if let Some(model) = model_id.and_then(|id| catalog.active_model(id)) {
        if manufacturer_id.is_none() {
            if let Some(manufacturer) = catalog.manufacturer(model.manufacturer_id) {
                parts.push(manufacturer.name.clone());
            }
        }
        parts.push(model.name.clone());
    }

    if let Some(year) = year {
        parts.push(year.to_string());
    }

    if parts.is_empty() {
        default_title.to_string()
    } else {
        format!("{} Cars", parts.join(" "))
    }
}
