use serde::{Deserialize, Serialize};

/// A product looked up by SKU and normalized from the upstream search
/// response, ready for rendering on a display card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Digits-only stock-keeping unit the lookup was made with. Always the
    /// caller-filtered input; hit data never overrides it.
    pub sku: String,
    /// Display name, from the hit title or derived from its URL slug.
    pub name: String,
    /// Title-cased brand name. Empty when the hit carries no vendor.
    pub brand: String,
    /// Lowest variant price as a decimal string, e.g. `"24.99"`. `"0"` when
    /// the upstream reports no price.
    pub price: String,
    /// Manufacturer model number. The upstream search response has no field
    /// for this, so it is always empty; kept in the wire shape because card
    /// renderers print a model line when one is present.
    pub model: String,
    /// UPC/EAN barcode digits as a string. Empty when the hit has none.
    pub upc: String,
    /// Short promotional phrase promoted from the first feature bullet.
    pub tagline: String,
    /// Feature bullets in upstream order, at most 4 (3 when the tagline
    /// consumed the first one).
    pub features: Vec<String>,
    /// Primary product image URL. Empty when the hit has none.
    pub image_url: String,
}

impl ProductRecord {
    /// Returns the number of feature bullets on this record.
    #[must_use]
    pub fn feature_count(&self) -> usize {
        self.features.len()
    }

    /// Returns the code a card renderer should encode in the barcode:
    /// the UPC when present, falling back to the SKU.
    #[must_use]
    pub fn barcode_value(&self) -> &str {
        if self.upc.is_empty() {
            &self.sku
        } else {
            &self.upc
        }
    }
}
