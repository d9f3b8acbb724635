//! Plain-text card preview of a [`ProductRecord`].
//!
//! Mirrors the content and order of the printable display card — brand,
//! name, tagline, feature bullets, then the model/SKU footer with the
//! barcode digits — so a lookup can be sanity-checked in the terminal
//! before the record goes anywhere near a printer.

use cardstock_core::ProductRecord;

const RULE: &str = "----------------------------------------";

pub(crate) fn render_preview(record: &ProductRecord) -> String {
    let mut lines: Vec<String> = Vec::new();

    if !record.brand.is_empty() {
        lines.push(record.brand.to_uppercase());
    }
    lines.push(record.name.clone());
    lines.push(RULE.to_string());

    if !record.tagline.is_empty() {
        lines.push(record.tagline.clone());
    }
    for feature in &record.features {
        lines.push(format!("\u{2022} {feature}"));
    }
    if !record.tagline.is_empty() || !record.features.is_empty() {
        lines.push(RULE.to_string());
    }

    // The card only prints a model line when there is a model, which today
    // is never — see ProductRecord::model.
    if !record.model.is_empty() {
        lines.push(format!("Model: {}", record.model));
    }
    lines.push(format!("Sku: {}", record.sku));
    lines.push(format!("Barcode: {}", record.barcode_value()));
    lines.push("Please take to an associate for assistance.".to_string());
    lines.push("For display purposes only.".to_string());

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record() -> ProductRecord {
        ProductRecord {
            sku: "24434877".to_string(),
            name: "Acme Wireless Headphones".to_string(),
            brand: "Acme Audio".to_string(),
            price: "24.99".to_string(),
            model: String::new(),
            upc: "065030834919".to_string(),
            tagline: "Great sound".to_string(),
            features: vec![
                "Long battery life".to_string(),
                "Bluetooth 5.0".to_string(),
            ],
            image_url: String::new(),
        }
    }

    #[test]
    fn preview_contains_card_content_in_order() {
        let preview = render_preview(&make_record());
        let brand_pos = preview.find("ACME AUDIO").expect("brand line");
        let name_pos = preview.find("Acme Wireless Headphones").expect("name line");
        let tagline_pos = preview.find("Great sound").expect("tagline line");
        let feature_pos = preview.find("\u{2022} Long battery life").expect("feature line");
        let sku_pos = preview.find("Sku: 24434877").expect("sku line");
        assert!(brand_pos < name_pos);
        assert!(name_pos < tagline_pos);
        assert!(tagline_pos < feature_pos);
        assert!(feature_pos < sku_pos);
    }

    #[test]
    fn preview_shows_upc_as_barcode() {
        let preview = render_preview(&make_record());
        assert!(preview.contains("Barcode: 065030834919"));
    }

    #[test]
    fn preview_barcode_falls_back_to_sku() {
        let mut record = make_record();
        record.upc = String::new();
        let preview = render_preview(&record);
        assert!(preview.contains("Barcode: 24434877"));
    }

    #[test]
    fn preview_omits_empty_brand_and_model_lines() {
        let mut record = make_record();
        record.brand = String::new();
        let preview = render_preview(&record);
        assert!(!preview.contains("Model:"));
        assert!(!preview.lines().next().unwrap().is_empty());
    }

    #[test]
    fn preview_without_tagline_or_features_has_single_rule() {
        let mut record = make_record();
        record.tagline = String::new();
        record.features.clear();
        let preview = render_preview(&record);
        assert_eq!(preview.matches(RULE).count(), 1);
    }
}
