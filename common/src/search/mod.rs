//! Locale-aware substring search over the training roster.
//!
//! Roster cells mix ASCII, full-width forms, hiragana and katakana, and the
//! people typing queries do not care which of those the upstream CSV used.
//! Everything is folded through [`normalize`] before comparison so that
//! `"アイウエオ"` matches `"あいうえお研修"` and `"ｶﾞ"` matches `"ガ"`.

use unicode_normalization::UnicodeNormalization;

use crate::model::training::RosterRow;

/// Canonical form for substring matching: lowercase, NFKC width/compatibility
/// folding, then hiragana folded onto the katakana block.
///
/// Idempotent: NFKC can surface new uppercase letters (compatibility
/// decompositions of modifier letters), so lowercasing runs again after it.
pub fn normalize(s: &str) -> String {
    let compat: String = s.to_lowercase().nfkc().collect();
    compat
        .to_lowercase()
        .chars()
        .map(hiragana_to_katakana)
        .collect()
}

// Hiragana block U+3041..=U+3096 sits a fixed 0x60 below its katakana
// counterparts.
fn hiragana_to_katakana(c: char) -> char {
    match c {
        '\u{3041}'..='\u{3096}' => char::from_u32(c as u32 + 0x60).unwrap_or(c),
        _ => c,
    }
}

/// Applies a per-column filter set to the roster, preserving load order.
///
/// A row is visible when every filter's normalized query is a normalized
/// substring of that row's cell for the filter's column. Filters combine
/// with AND; a missing cell counts as the empty string, so any non-empty
/// query on a missing column excludes the row, while an empty query (and an
/// empty filter set) matches everything.
pub fn visible_rows<'a>(
    rows: &'a [RosterRow],
    filters: &std::collections::HashMap<String, String>,
) -> Vec<&'a RosterRow> {
    rows.iter()
        .filter(|row| {
            filters.iter().all(|(column, query)| {
                let cell = row.get(column).map(String::as_str).unwrap_or("");
                normalize(cell).contains(&normalize(query))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn row(pairs: &[(&str, &str)]) -> RosterRow {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn filters(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn normalize_is_idempotent() {
        for s in [
            "あいうえお研修",
            "ｶﾞｷﾞｸﾞ",
            "ＡＢＣ１２３",
            "Tanaka Taro",
            "ﬁℓᴷ",
            "",
        ] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn half_width_hiragana_and_katakana_share_a_canonical_form() {
        // Half-width katakana with a dakuten, hiragana, and katakana.
        assert_eq!(normalize("ｶﾞ"), normalize("が"));
        assert_eq!(normalize("が"), normalize("ガ"));
        assert_eq!(normalize("ガ"), "ガ");
    }

    #[test]
    fn normalize_folds_case_and_width() {
        assert_eq!(normalize("ＺＯＯＭ"), "zoom");
        assert_eq!(normalize("Room101"), "room101");
    }

    #[test]
    fn empty_filter_set_returns_all_rows_in_order() {
        let rows = vec![row(&[("研修名", "b")]), row(&[("研修名", "a")])];
        let visible = visible_rows(&rows, &HashMap::new());
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].get("研修名").unwrap(), "b");
        assert_eq!(visible[1].get("研修名").unwrap(), "a");
    }

    #[test]
    fn katakana_query_matches_hiragana_cell() {
        let rows = vec![row(&[("Web連携ID", "440661"), ("研修名", "あいうえお研修")])];
        let visible = visible_rows(&rows, &filters(&[("研修名", "アイウエオ")]));
        assert_eq!(visible.len(), 1);
    }

    #[test]
    fn filters_combine_with_and() {
        let rows = vec![
            row(&[("研修名", "新人研修"), ("会場名", "東京")]),
            row(&[("研修名", "新人研修"), ("会場名", "大阪")]),
        ];
        let visible = visible_rows(&rows, &filters(&[("研修名", "新人"), ("会場名", "大阪")]));
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].get("会場名").unwrap(), "大阪");
    }

    #[test]
    fn non_empty_filter_on_missing_column_excludes_the_row() {
        let rows = vec![row(&[("研修名", "新人研修")])];
        assert!(visible_rows(&rows, &filters(&[("講師", "x")])).is_empty());
        // An empty query on the same missing column still matches.
        assert_eq!(visible_rows(&rows, &filters(&[("講師", "")])).len(), 1);
    }

    #[test]
    fn adding_a_non_matching_filter_shrinks_and_removing_restores() {
        let rows: Vec<RosterRow> = (0..4)
            .map(|i| row(&[("研修名", if i % 2 == 0 { "新人研修" } else { "管理職研修" })]))
            .collect();
        let mut f = filters(&[("研修名", "新人")]);
        assert_eq!(visible_rows(&rows, &f).len(), 2);
        f.insert("研修名".into(), "存在しない".into());
        assert!(visible_rows(&rows, &f).is_empty());
        f.remove("研修名");
        assert_eq!(visible_rows(&rows, &f).len(), 4);
    }
}
