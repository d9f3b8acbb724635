//! Normalization from raw search hits to [`cardstock_core::ProductRecord`].
//!
//! The upstream feeds are inconsistent: names hide in URL slugs, brands in
//! underscore tokens, features in one semicolon-delimited string. This module
//! owns every fallback chain and truncation rule; transports (HTTP handler or
//! CLI) obtain the raw response and call [`normalize_hit`] — nothing else in
//! the workspace interprets hit fields.

use cardstock_core::ProductRecord;

use crate::error::SearchError;
use crate::types::{BarcodeValue, RawHit};

/// Maximum number of feature bullets kept from the raw bullet string.
const MAX_FEATURES: usize = 4;

/// A first feature strictly shorter than this many characters is promoted to
/// the tagline instead of staying in the feature list.
const TAGLINE_MAX_CHARS: usize = 50;

/// Normalizes the first search hit for `sku` into a [`ProductRecord`].
///
/// `sku` must already be digit-filtered (see [`cardstock_core::clean_sku`]);
/// passing an unfiltered or empty SKU is a caller error. The returned record
/// always carries exactly this `sku` — hit data never overrides it.
///
/// Field-level absences are never errors: every missing or malformed hit
/// field degrades to its documented default.
///
/// # Errors
///
/// Returns [`SearchError::ProductNotFound`] carrying `sku` when `hit` is
/// `None` (the search returned no hits).
pub fn normalize_hit(sku: &str, hit: Option<RawHit>) -> Result<ProductRecord, SearchError> {
    let Some(hit) = hit else {
        return Err(SearchError::ProductNotFound {
            sku: sku.to_owned(),
        });
    };

    let mut features = split_bullets(hit.bullets());
    let tagline = promote_tagline(&mut features);

    Ok(ProductRecord {
        sku: sku.to_owned(),
        name: extract_name(&hit),
        brand: extract_brand(hit.vendor.as_deref().unwrap_or("")),
        price: extract_price(hit.variants_min_price),
        // No upstream field maps to the model number; renderers skip the
        // model line when it is empty.
        model: String::new(),
        upc: extract_upc(hit.barcode.as_ref()),
        tagline,
        features,
        image_url: extract_image_url(&hit),
    })
}

/// Display name: the hit title verbatim, or a name derived from the URL slug
/// when the title is missing or empty.
fn extract_name(hit: &RawHit) -> String {
    match hit.title.as_deref() {
        Some(title) if !title.is_empty() => title.to_owned(),
        _ => name_from_handle(hit.handle.as_deref().unwrap_or("")),
    }
}

/// Derives a display name from a hyphen-delimited slug.
///
/// The first two segments are category prefixes, not part of the product
/// name, so they are dropped. Only the first character of the result is
/// capitalized; the rest keeps the slug's casing.
fn name_from_handle(handle: &str) -> String {
    let name = handle
        .split('-')
        .skip(2)
        .collect::<Vec<_>>()
        .join(" ")
        .replace('-', " ");
    capitalize_first(&name)
}

/// Brand: underscores to spaces, every word title-cased, and a trailing
/// `" Brand"` feed suffix stripped.
fn extract_brand(vendor: &str) -> String {
    let brand = vendor
        .replace('_', " ")
        .split(' ')
        .map(title_case_word)
        .collect::<Vec<_>>()
        .join(" ");
    match brand.strip_suffix(" Brand") {
        Some(stripped) => stripped.to_owned(),
        None => brand,
    }
}

/// Price as a decimal string; a missing or zero price becomes `"0"`.
fn extract_price(min_price: Option<f64>) -> String {
    format!("{}", min_price.unwrap_or(0.0))
}

/// Splits the semicolon-delimited bullet string into trimmed, non-empty
/// features, keeping at most the first [`MAX_FEATURES`] in upstream order.
fn split_bullets(bullets: &str) -> Vec<String> {
    bullets
        .split(';')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .take(MAX_FEATURES)
        .map(str::to_owned)
        .collect()
}

/// Promotes a short first feature to the tagline, removing it from the list.
///
/// Features at [`TAGLINE_MAX_CHARS`] or longer are real feature copy, not a
/// slogan, and stay where they are.
fn promote_tagline(features: &mut Vec<String>) -> String {
    match features.first() {
        Some(first) if first.chars().count() < TAGLINE_MAX_CHARS => features.remove(0),
        _ => String::new(),
    }
}

/// Barcode stringified; absent, empty, or the number 0 all mean "no UPC".
fn extract_upc(barcode: Option<&BarcodeValue>) -> String {
    match barcode {
        Some(BarcodeValue::Text(text)) => text.clone(),
        Some(BarcodeValue::Number(n)) if *n != 0 => n.to_string(),
        _ => String::new(),
    }
}

/// Primary image URL; empty strings are treated as absent so the alternate
/// `product_image` field gets a chance.
fn extract_image_url(hit: &RawHit) -> String {
    [hit.image.as_deref(), hit.product_image.as_deref()]
        .into_iter()
        .flatten()
        .find(|url| !url.is_empty())
        .unwrap_or("")
        .to_owned()
}

/// Uppercases only the first character, leaving the rest untouched.
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Title-cases one word: first character upper, the rest lower.
fn title_case_word(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect()
    })
}
