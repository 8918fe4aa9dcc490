//! Display image resolution for listing cards and the detail gallery

use serde::Serialize;

use crate::models::Listing;

/// Alt text used when a listing carries no naming information at all
const FALLBACK_ALT_TEXT: &str = "Todde vehicle";

/// An image ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedImage {
    pub source_url: String,
    pub alt_text: String,
    pub is_placeholder: bool,
}

impl ResolvedImage {
    fn placeholder(placeholder_url: &str, alt_text: String) -> Self {
        Self {
            source_url: placeholder_url.to_string(),
            alt_text,
            is_placeholder: true,
        }
    }
}

/// "Manufacturer Model Year", skipping empty parts
pub fn default_alt_text(listing: &Listing) -> String {
    let year = if listing.year != 0 {
        listing.year.to_string()
    } else {
        String::new()
    };
    let parts: Vec<&str> = [
        listing.manufacturer.name.as_str(),
        listing.model.name.as_str(),
        year.as_str(),
    ]
    .into_iter()
    .filter(|part| !part.is_empty())
    .collect();

    if parts.is_empty() {
        FALLBACK_ALT_TEXT.to_string()
    } else {
        parts.join(" ")
    }
}

/// First active image with a non-blank source, else the placeholder
pub fn resolve_primary_image(listing: &Listing, placeholder_url: &str) -> ResolvedImage {
    let default_alt = default_alt_text(listing);

    let first_real = listing.active_images().into_iter().find_map(|image| {
        let source = image.source_url.trim();
        (!source.is_empty()).then(|| (source.to_string(), image.alt_text.clone()))
    });

    match first_real {
        Some((source_url, alt_text)) => ResolvedImage {
            source_url,
            alt_text: if alt_text.is_empty() { default_alt } else { alt_text },
            is_placeholder: false,
        },
        None => ResolvedImage::placeholder(placeholder_url, default_alt),
    }
}

/// Detail page gallery
#[derive(Debug, Clone, Serialize)]
pub struct Gallery {
    /// Real images first, then placeholder entries for blank sources
    pub items: Vec<ResolvedImage>,
    pub primary: Option<ResolvedImage>,
    /// Non-placeholder entries after the primary one
    pub thumbnails: Vec<ResolvedImage>,
}

/// Build the detail gallery for a listing
///
/// Blank sources become placeholder entries bucketed after every real image.
/// A listing without any real image gets a single placeholder entry.
pub fn build_gallery(listing: &Listing, placeholder_url: &str) -> Gallery {
    let default_alt = format!("{} {}", listing.manufacturer.name, listing.model.name);

    let mut real = Vec::new();
    let mut placeholders = Vec::new();
    for image in listing.active_images() {
        let source = image.source_url.trim();
        let resolved_source = if source.is_empty() { placeholder_url } else { source };
        let entry = ResolvedImage {
            source_url: resolved_source.to_string(),
            alt_text: if image.alt_text.is_empty() {
                default_alt.clone()
            } else {
                image.alt_text.clone()
            },
            is_placeholder: resolved_source == placeholder_url,
        };
        if entry.is_placeholder {
            placeholders.push(entry);
        } else {
            real.push(entry);
        }
    }

    let items = if real.is_empty() {
        vec![ResolvedImage::placeholder(placeholder_url, default_alt)]
    } else {
        real.extend(placeholders);
        real
    };

    let primary = items.first().cloned();
    let thumbnails = items
        .iter()
        .skip(1)
        .filter(|item| !item.is_placeholder)
        .cloned()
        .collect();

    Gallery {
        items,
        primary,
        thumbnails,
    }
}
