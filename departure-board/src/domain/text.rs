//! Normalization of the free-text departure fields.

/// Stored in place of a missing line or destination.
pub const INVALID: &str = "INVALID";

/// Longest destination kept as-is, in characters.
pub const MAX_DESTINATION_CHARS: usize = 15;

/// Marker ending a destination that had to be shortened.
const TRUNCATION_MARKER: char = '.';

/// Normalize a line code: trimmed and uppercased.
///
/// Missing or blank input becomes [`INVALID`].
pub fn normalize_line(code: Option<&str>) -> String {
    match code.map(str::trim) {
        Some(code) if !code.is_empty() => code.to_uppercase(),
        _ => INVALID.to_string(),
    }
}

/// Normalize a destination name.
///
/// The first letter is uppercased and the rest lowercased. Names longer than
/// [`MAX_DESTINATION_CHARS`] are cut so that, with a trailing `.`, they are
/// exactly that long. Missing or blank input becomes [`INVALID`].
///
/// # Examples
///
/// ```
/// use departure_board::domain::normalize_destination;
///
/// assert_eq!(normalize_destination(Some("oSLO")), "Oslo");
/// assert_eq!(normalize_destination(Some("lillehammer stasjon")), "Lillehammer st.");
/// assert_eq!(normalize_destination(None), "INVALID");
/// ```
pub fn normalize_destination(name: Option<&str>) -> String {
    let name = match name.map(str::trim) {
        Some(name) if !name.is_empty() => name,
        _ => return INVALID.to_string(),
    };

    let mut chars = name.chars();
    let mut capitalized = String::with_capacity(name.len());
    if let Some(first) = chars.next() {
        capitalized.extend(first.to_uppercase());
    }
    capitalized.extend(chars.flat_map(char::to_lowercase));

    if capitalized.chars().count() <= MAX_DESTINATION_CHARS {
        return capitalized;
    }

    let mut truncated: String = capitalized
        .chars()
        .take(MAX_DESTINATION_CHARS - 1)
        .collect();
    truncated.push(TRUNCATION_MARKER);
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_is_uppercased() {
        assert_eq!(normalize_line(Some("l1")), "L1");
        assert_eq!(normalize_line(Some("re10")), "RE10");
        assert_eq!(normalize_line(Some(" f2 ")), "F2");
    }

    #[test]
    fn missing_line_is_invalid() {
        assert_eq!(normalize_line(None), INVALID);
        assert_eq!(normalize_line(Some("")), INVALID);
        assert_eq!(normalize_line(Some("   ")), INVALID);
    }

    #[test]
    fn destination_is_capitalized() {
        assert_eq!(normalize_destination(Some("oslo")), "Oslo");
        assert_eq!(normalize_destination(Some("BERGEN")), "Bergen");
        assert_eq!(normalize_destination(Some("ås")), "Ås");
        assert_eq!(normalize_destination(Some("x")), "X");
    }

    #[test]
    fn destination_at_limit_is_kept() {
        let name = "Abcdefghijklmno";
        assert_eq!(name.chars().count(), MAX_DESTINATION_CHARS);
        assert_eq!(normalize_destination(Some(name)), name);
    }

    #[test]
    fn long_destination_is_truncated_with_marker() {
        let normalized = normalize_destination(Some("Kristiansand sentrum"));
        assert_eq!(normalized, "Kristiansand s.");
        assert_eq!(normalized.chars().count(), MAX_DESTINATION_CHARS);
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let normalized = normalize_destination(Some("ææææææææææææææææææ"));
        assert_eq!(normalized, "Ææææææææææææææ.");
        assert_eq!(normalized.chars().count(), MAX_DESTINATION_CHARS);
    }

    #[test]
    fn missing_destination_is_invalid() {
        assert_eq!(normalize_destination(None), INVALID);
        assert_eq!(normalize_destination(Some("")), INVALID);
    }
}
