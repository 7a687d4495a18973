//! Address normalization for the Los Angeles service area.

/// Appends city/state context to an address that lacks it.
///
/// Short addresses like "123 Main St" are ambiguous to a nationwide
/// geocoder; disambiguate by appending "Los Angeles" and/or "CA" unless
/// the text already references them. "LA" and "California" spellings are
/// recognized as equivalent.
#[must_use]
pub fn normalize_address(address: &str) -> String {
    let lower = address.to_lowercase();
    let has_city = lower.contains("los angeles") || contains_word(&lower, "la");
    let has_state = contains_word(&lower, "ca") || lower.contains("california");

    match (has_city, has_state) {
        (true, true) => address.to_owned(),
        (true, false) => format!("{address}, CA"),
        (false, true) => format!("{address}, Los Angeles"),
        (false, false) => format!("{address}, Los Angeles, CA"),
    }
}

/// Word-boundary match so "LA" does not fire inside "Lankershim"
/// and "CA" does not fire inside "Cahuenga".
fn contains_word(haystack: &str, word: &str) -> bool {
    haystack
        .split(|c: char| !c.is_alphanumeric())
        .any(|token| token == word)
}
