/// Strips every non-digit character from a raw SKU as typed or scanned.
///
/// SKUs arrive with scanner prefixes, hyphens, or surrounding whitespace;
/// the upstream search provider only accepts the bare digits. An empty
/// result means the input held no digits at all — callers must reject the
/// lookup in that case rather than pass the empty string downstream.
#[must_use]
pub fn clean_sku(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_digit_only_input_unchanged() {
        assert_eq!(clean_sku("24434877"), "24434877");
    }

    #[test]
    fn strips_letters_and_punctuation() {
        assert_eq!(clean_sku("ABC-123/45"), "12345");
    }

    #[test]
    fn strips_whitespace() {
        assert_eq!(clean_sku(" 244 348 77 "), "24434877");
    }

    #[test]
    fn empty_for_input_without_digits() {
        assert_eq!(clean_sku("no-digits-here"), "");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(clean_sku(""), "");
    }
}
