//! Text helpers shared by the mapper.

use std::sync::LazyLock;

use regex::Regex;

use dmp_model::is_standard_heading;

/// Appended to a custom label that would otherwise read back as a standard column.
pub const CUSTOM_HEADING_SUFFIX: &str = " (custom)";

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("Invalid HTML tag regex"));

/// Slug used for option values: lowercase, each whitespace run becomes `-`.
pub fn slugify_value(raw: &str) -> String {
    WHITESPACE_RUN
        .replace_all(&raw.to_lowercase(), "-")
        .into_owned()
}

/// Slug used for field ids: lowercase, each whitespace run becomes `_`.
pub fn slugify_id(raw: &str) -> String {
    WHITESPACE_RUN
        .replace_all(&raw.to_lowercase(), "_")
        .into_owned()
}

/// Remove anything that looks like an HTML tag.
pub fn strip_html(raw: &str) -> String {
    HTML_TAG.replace_all(raw, "").into_owned()
}

/// Keep the first `limit` characters, appending `...` when text was cut.
pub fn truncate_with_ellipsis(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let mut out: String = text.chars().take(limit).collect();
    out.push_str("...");
    out
}

/// Heading for a custom column labelled `label`.
///
/// Standard aliases (`Title`, `researchOutput.licenses`, ...) get
/// [`CUSTOM_HEADING_SUFFIX`]; anything else is returned unchanged.
pub fn unreserved_heading(label: &str) -> String {
    if is_standard_heading(label) {
        format!("{}{CUSTOM_HEADING_SUFFIX}", label.trim())
    } else {
        label.to_string()
    }
}

/// Parse a string-encoded length limit. Blank or invalid input yields `None`.
pub fn parse_max_length(raw: Option<&str>) -> Option<u32> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_collapse_whitespace_runs() {
        assert_eq!(slugify_value("Data  Paper"), "data-paper");
        assert_eq!(slugify_value("Model\trepresentation"), "model-representation");
        assert_eq!(slugify_id("Funding Source"), "funding_source");
    }

    #[test]
    fn slugs_keep_punctuation() {
        assert_eq!(slugify_value("Lab notes (raw)"), "lab-notes-(raw)");
        assert_eq!(slugify_id("Cost, total"), "cost,_total");
    }

    #[test]
    fn strips_tags_only() {
        assert_eq!(strip_html("<p>Soil <b>samples</b></p>"), "Soil samples");
        assert_eq!(strip_html("a < b"), "a < b");
    }

    #[test]
    fn truncates_on_char_boundaries() {
        assert_eq!(truncate_with_ellipsis("abc", 3), "abc");
        assert_eq!(truncate_with_ellipsis("abcd", 3), "abc...");
        assert_eq!(truncate_with_ellipsis("ééééé", 2), "éé...");
    }

    #[test]
    fn standard_aliases_are_suffixed() {
        assert_eq!(unreserved_heading("Repositories"), "Repositories (custom)");
        assert_eq!(unreserved_heading(" title "), "title (custom)");
        assert_eq!(unreserved_heading("Funding Source"), "Funding Source");
        assert!(!is_standard_heading(&unreserved_heading("Byte Size")));
    }

    #[test]
    fn parses_max_length() {
        assert_eq!(parse_max_length(Some(" 300 ")), Some(300));
        assert_eq!(parse_max_length(Some("")), None);
        assert_eq!(parse_max_length(Some("lots")), None);
        assert_eq!(parse_max_length(None), None);
    }
}
