//! Built-in catalogue of supported languages.
//!
//! The catalogue order is the default preference order used before the user
//! has saved anything. Display names are the languages' own names.

use crate::domain::Row;
use std::collections::HashSet;

/// Supported `(code, display name)` pairs in default priority order.
pub const CATALOG: &[(&str, &str)] = &[
    ("en", "English"),
    ("de", "Deutsch"),
    ("fr", "Français"),
    ("es", "Español"),
    ("it", "Italiano"),
    ("pt", "Português"),
    ("nl", "Nederlands"),
    ("pl", "Polski"),
    ("cs", "Čeština"),
    ("sk", "Slovenčina"),
    ("hu", "Magyar"),
    ("ro", "Română"),
    ("fi", "Suomi"),
    ("sv", "Svenska"),
    ("da", "Dansk"),
    ("nb", "Norsk bokmål"),
    ("tr", "Türkçe"),
    ("el", "Ελληνικά"),
    ("ru", "Русский"),
    ("uk", "Українська"),
    ("be", "Беларуская"),
    ("ar", "العربية"),
    ("he", "עברית"),
    ("hi", "हिन्दी"),
    ("th", "ไทย"),
    ("vi", "Tiếng Việt"),
    ("id", "Bahasa Indonesia"),
    ("ja", "日本語"),
    ("ko", "한국어"),
    ("zh-Hans", "简体中文"),
    ("zh-Hant", "繁體中文"),
];

/// Looks up the display name for a language code.
///
/// # Examples
///
/// ```
/// use langorder::languages::display_name;
///
/// assert_eq!(display_name("de"), Some("Deutsch"));
/// assert_eq!(display_name("tlh"), None);
/// ```
#[must_use]
pub fn display_name(code: &str) -> Option<&'static str> {
    CATALOG
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, name)| *name)
}

/// The whole catalogue as rows, in default order.
#[must_use]
pub fn default_rows() -> Vec<Row> {
    CATALOG
        .iter()
        .map(|(code, name)| Row::new(*code, *name))
        .collect()
}

/// Turns stored codes into display rows.
///
/// Stored order wins. A repeated code keeps only its first position, unknown
/// codes are kept with the code as their name, and catalogue languages the
/// stored list does not mention are appended in catalogue order.
///
/// # Examples
///
/// ```
/// use langorder::languages::{resolve, CATALOG};
///
/// let rows = resolve(&["fr".to_string(), "en".to_string()]);
/// assert_eq!(rows[0].code, "fr");
/// assert_eq!(rows[1].code, "en");
/// assert_eq!(rows.len(), CATALOG.len());
/// ```
#[must_use]
pub fn resolve(codes: &[String]) -> Vec<Row> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(codes.len());
    let mut rows = Vec::with_capacity(CATALOG.len().max(codes.len()));

    for code in codes {
        if !seen.insert(code.as_str()) {
            tracing::debug!(code = %code, "dropping repeated language code");
            continue;
        }
        let name = display_name(code).map_or_else(
            || {
                tracing::debug!(code = %code, "unknown language code, keeping as is");
                code.clone()
            },
            ToString::to_string,
        );
        rows.push(Row::new(code.clone(), name));
    }

    for (code, name) in CATALOG {
        if !seen.contains(code) {
            rows.push(Row::new(*code, *name));
        }
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(rows: &[Row]) -> Vec<&str> {
        rows.iter().map(|row| row.code.as_str()).collect()
    }

    #[test]
    fn catalogue_codes_are_unique() {
        let unique: HashSet<&str> = CATALOG.iter().map(|(code, _)| *code).collect();
        assert_eq!(unique.len(), CATALOG.len());
    }

    #[test]
    fn resolve_empty_yields_default_order() {
        assert_eq!(resolve(&[]), default_rows());
    }

    #[test]
    fn resolve_keeps_stored_order_and_appends_the_rest() {
        let rows = resolve(&["ja".to_string(), "en".to_string()]);
        assert_eq!(&codes(&rows)[..3], &["ja", "en", "de"]);
        assert_eq!(rows[0].name, "日本語");
        assert_eq!(rows.len(), CATALOG.len());
    }

    #[test]
    fn resolve_keeps_unknown_codes_and_drops_repeats() {
        let rows = resolve(&["xx".to_string(), "de".to_string(), "xx".to_string()]);
        assert_eq!(rows[0], Row::new("xx", "xx"));
        assert_eq!(rows[1].code, "de");
        assert_eq!(rows.iter().filter(|row| row.code == "xx").count(), 1);
        assert_eq!(rows.len(), CATALOG.len() + 1);
    }
}
