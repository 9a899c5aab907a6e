//! Search query builder
//!
//! The remote store only supports lookups through its search DSL. A query is
//! a list of clause fragments joined by single spaces (implicit AND); empty
//! fragments are dropped. The one exception is [`on_date_or`], which builds an
//! explicit OR of per-day equality terms so several days can be fetched in a
//! single round trip.

use crate::category::{CategoryKey, CATEGORY_ROOT};

/// `category:<name>` filter, or an empty fragment for empty input
pub fn category_clause(name: &str) -> String {
    if name.is_empty() {
        return String::new();
    }
    format!("category:{}", name)
}

/// One `tag:<name>` term per tag, space-joined into a single fragment
///
/// Empty tag names are skipped.
pub fn tags_clause<S: AsRef<str>>(names: &[S]) -> String {
    names
        .iter()
        .map(|s| s.as_ref())
        .filter(|name| !name.is_empty())
        .map(|name| format!("tag:{}", name))
        .collect::<Vec<_>>()
        .join(" ")
}

/// `title:<text>` filter, or an empty fragment for empty input
pub fn title_clause(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    format!("title:{}", text)
}

/// `in:journal/YYYY/MM` filter matching every category of one month
pub fn category_month_clause(year: i32, month: u32) -> String {
    format!("in:{}/{:04}/{:02}", CATEGORY_ROOT, year, month)
}

/// Join non-empty fragments with a single space
pub fn combine<S: AsRef<str>>(fragments: &[S]) -> String {
    fragments
        .iter()
        .map(|s| s.as_ref())
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// `on:<key>` equality terms joined by ` OR `
pub fn on_date_or(keys: &[CategoryKey]) -> String {
    keys.iter()
        .map(|key| format!("on:{}", key))
        .collect::<Vec<_>>()
        .join(" OR ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_inputs_yield_empty_fragments() {
        assert_eq!(category_clause(""), "");
        assert_eq!(title_clause(""), "");
        assert_eq!(tags_clause::<&str>(&[]), "");
        assert_eq!(tags_clause(&["", ""]), "");
    }

    #[test]
    fn test_tags_clause_multiple_terms() {
        assert_eq!(tags_clause(&["rust", "", "design"]), "tag:rust tag:design");
    }

    #[test]
    fn test_combine_drops_empty_fragments() {
        let query = combine(&[
            category_clause("journal/2024/06/20"),
            tags_clause::<String>(&[]),
            title_clause("standup"),
        ]);
        assert_eq!(query, "category:journal/2024/06/20 title:standup");
        assert_eq!(combine::<&str>(&[]), "");
        assert_eq!(combine(&["", ""]), "");
    }

    #[test]
    fn test_on_date_or() {
        let keys = vec![
            CategoryKey::parse("journal/2024/06/20").unwrap(),
            CategoryKey::parse("journal/2024/06/19").unwrap(),
        ];
        assert_eq!(
            on_date_or(&keys),
            "on:journal/2024/06/20 OR on:journal/2024/06/19"
        );
        assert_eq!(on_date_or(&[]), "");
    }

    #[test]
    fn test_category_month_clause_pads_month() {
        assert_eq!(category_month_clause(2024, 6), "in:journal/2024/06");
    }
}
