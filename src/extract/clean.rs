// src/extract/clean.rs
use once_cell::sync::Lazy;
use regex::Regex;

/// Municipality name: a run starting at a word boundary on a letter, through
/// letters/whitespace/apostrophe/period/hyphen, non-greedily, ending right
/// before a bracketed footnote marker, a digit, a trailing dagger, or end of
/// string. Diacritics survive (`\p{L}` is Unicode-aware).
static NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(\p{L}[\p{L}\s'.-]*?)(?:\[|\d|†|$)").expect("name pattern should be valid")
});

/// Density cells concatenate two units, e.g. "1162/sq mi449/km2"; capture
/// only the digit run in front of the metric unit.
static DENSITY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s*/\s*km2").expect("density pattern should be valid"));

/// Strip footnote markers and annotations from a municipality name cell.
/// No match yields an empty string.
pub fn clean_name(raw: &str) -> String {
    NAME_RE
        .captures(raw)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Pull the metric figure out of a density cell. No "/km2" unit present
/// yields an empty string.
pub fn clean_density(raw: &str) -> String {
    DENSITY_RE
        .captures(raw)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_strips_footnote_marker() {
        assert_eq!(clean_name("Denver[1]"), "Denver");
        assert_eq!(clean_name("Black Hawk[10]"), "Black Hawk");
    }

    #[test]
    fn name_with_diacritics_and_spaces_is_unchanged() {
        assert_eq!(clean_name("Cañon City"), "Cañon City");
        assert_eq!(clean_name("Wheat Ridge"), "Wheat Ridge");
    }

    #[test]
    fn name_stops_before_digits_and_daggers() {
        assert_eq!(clean_name("Denver†"), "Denver");
        assert_eq!(clean_name("Pueblo111876"), "Pueblo");
    }

    #[test]
    fn name_without_letters_is_empty() {
        assert_eq!(clean_name(""), "");
        assert_eq!(clean_name("[2]"), "");
        assert_eq!(clean_name("†"), "");
    }

    #[test]
    fn density_picks_metric_figure_from_dual_unit_cell() {
        assert_eq!(clean_density("1162/sq mi449/km2"), "449");
        assert_eq!(clean_density("449/km2"), "449");
        assert_eq!(clean_density("449 / km2"), "449");
    }

    #[test]
    fn density_without_metric_unit_is_empty() {
        assert_eq!(clean_density("1162/sq mi"), "");
        assert_eq!(clean_density(""), "");
    }
}
