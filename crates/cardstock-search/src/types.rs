//! Response types for the StockTrack search endpoint.
//!
//! ## Observed shape from live responses
//!
//! The endpoint wraps hits in a double envelope:
//! `{"results": [{"hits": [...]}]}`. Only the first hit of the first result
//! set is used for a SKU lookup; additional hits are fuzzy matches on other
//! products.
//!
//! ### Hit fields
//! Every field can be absent, `null`, or an empty string depending on which
//! retailer feed the hit came from, so everything is `Option` with
//! `#[serde(default)]` and normalization decides the fallbacks.
//!
//! - `title` is the retailer's display name. Some feeds leave it empty and
//!   only populate `handle`, a hyphen-delimited URL slug whose first two
//!   segments are category prefixes (e.g. `"cat-sub-brand-wireless-mouse"`).
//! - `vendor` is an underscore-delimited brand token, frequently suffixed
//!   with a literal `_brand` (e.g. `"acme_audio_brand"`).
//! - `variants_min_price` is a bare JSON number, never a string.
//! - Feature text lives at `meta.props.bullets` as one semicolon-delimited
//!   string, not an array.
//! - Either `image` or `product_image` is populated, sometimes both,
//!   sometimes one of them as `""`.
//! - `barcode` is a UPC/EAN, returned as a **string by some feeds and a bare
//!   number by others** — modeled as an untagged enum.

use serde::Deserialize;

/// Top-level response from `GET <search_url>?q=<sku>`.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<ResultSet>,
}

/// One result set inside the search envelope.
#[derive(Debug, Deserialize)]
pub struct ResultSet {
    #[serde(default)]
    pub hits: Vec<RawHit>,
}

impl SearchResponse {
    /// Consumes the response and returns the first hit of the first result
    /// set, the record a SKU lookup is based on.
    #[must_use]
    pub fn into_first_hit(self) -> Option<RawHit> {
        self.results
            .into_iter()
            .next()
            .and_then(|set| set.hits.into_iter().next())
    }
}

/// A single matching record from the search provider.
#[derive(Debug, Clone, Deserialize)]
pub struct RawHit {
    /// Retailer display name. May be absent or empty.
    #[serde(default)]
    pub title: Option<String>,

    /// Hyphen-delimited URL slug, e.g. `"cat-sub-brand-wireless-mouse"`.
    /// The first two segments are category prefixes, not part of the name.
    #[serde(default)]
    pub handle: Option<String>,

    /// Underscore-delimited brand token, e.g. `"acme_audio_brand"`.
    #[serde(default)]
    pub vendor: Option<String>,

    /// Lowest variant price as a JSON number.
    #[serde(default)]
    pub variants_min_price: Option<f64>,

    /// Retailer metadata blob; feature bullets live at `meta.props.bullets`.
    #[serde(default)]
    pub meta: Option<HitMeta>,

    /// Primary image URL. May be an empty string.
    #[serde(default)]
    pub image: Option<String>,

    /// Alternate image URL populated by some feeds instead of `image`.
    #[serde(default)]
    pub product_image: Option<String>,

    /// UPC/EAN barcode, as a string or a bare number depending on the feed.
    #[serde(default)]
    pub barcode: Option<BarcodeValue>,
}

impl RawHit {
    /// The raw semicolon-delimited feature string, or `""` when any level of
    /// the `meta.props.bullets` nesting is missing.
    #[must_use]
    pub fn bullets(&self) -> &str {
        self.meta
            .as_ref()
            .and_then(|meta| meta.props.as_ref())
            .and_then(|props| props.bullets.as_deref())
            .unwrap_or("")
    }
}

/// Metadata wrapper on a hit.
#[derive(Debug, Clone, Deserialize)]
pub struct HitMeta {
    #[serde(default)]
    pub props: Option<HitProps>,
}

/// Retailer-supplied properties nested under `meta`.
#[derive(Debug, Clone, Deserialize)]
pub struct HitProps {
    /// Semicolon-delimited feature list, e.g.
    /// `"Great sound; Long battery life; Bluetooth 5.0"`.
    #[serde(default)]
    pub bullets: Option<String>,
}

/// Barcode field as returned upstream: some feeds send `"065030834919"`,
/// others send `65030834919` as a bare number.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum BarcodeValue {
    Text(String),
    Number(u64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn into_first_hit_returns_none_for_empty_results() {
        let response: SearchResponse = serde_json::from_str(r#"{"results": []}"#).unwrap();
        assert!(response.into_first_hit().is_none());
    }

    #[test]
    fn into_first_hit_returns_none_for_empty_hits() {
        let response: SearchResponse =
            serde_json::from_str(r#"{"results": [{"hits": []}]}"#).unwrap();
        assert!(response.into_first_hit().is_none());
    }

    #[test]
    fn into_first_hit_returns_first_of_first_set() {
        let json = r#"{"results": [{"hits": [{"title": "First"}, {"title": "Second"}]}]}"#;
        let response: SearchResponse = serde_json::from_str(json).unwrap();
        let hit = response.into_first_hit().expect("expected a hit");
        assert_eq!(hit.title.as_deref(), Some("First"));
    }

    #[test]
    fn missing_results_key_parses_as_empty() {
        let response: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(response.into_first_hit().is_none());
    }

    #[test]
    fn hit_parses_with_all_fields_absent() {
        let hit: RawHit = serde_json::from_str("{}").unwrap();
        assert!(hit.title.is_none());
        assert!(hit.barcode.is_none());
        assert_eq!(hit.bullets(), "");
    }

    #[test]
    fn bullets_reads_through_meta_nesting() {
        let json = r#"{"meta": {"props": {"bullets": "Great sound; Foldable design"}}}"#;
        let hit: RawHit = serde_json::from_str(json).unwrap();
        assert_eq!(hit.bullets(), "Great sound; Foldable design");
    }

    #[test]
    fn bullets_empty_when_props_missing() {
        let hit: RawHit = serde_json::from_str(r#"{"meta": {}}"#).unwrap();
        assert_eq!(hit.bullets(), "");
    }

    #[test]
    fn barcode_parses_as_string() {
        let hit: RawHit = serde_json::from_str(r#"{"barcode": "065030834919"}"#).unwrap();
        assert!(matches!(hit.barcode, Some(BarcodeValue::Text(ref s)) if s == "065030834919"));
    }

    #[test]
    fn barcode_parses_as_number() {
        let hit: RawHit = serde_json::from_str(r#"{"barcode": 65030834919}"#).unwrap();
        assert!(matches!(hit.barcode, Some(BarcodeValue::Number(65_030_834_919))));
    }

    #[test]
    fn null_fields_parse_as_none() {
        let json = r#"{"title": null, "vendor": null, "variants_min_price": null}"#;
        let hit: RawHit = serde_json::from_str(json).unwrap();
        assert!(hit.title.is_none());
        assert!(hit.vendor.is_none());
        assert!(hit.variants_min_price.is_none());
    }
}
