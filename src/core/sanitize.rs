// src/core/sanitize.rs

use crate::config::consts::SPINLINE_MARKERS;

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Series option values are numeric ids; anything else is a placeholder.
pub fn is_numeric_id(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// `BOOSTER PACK <br class="spInline">-ROMANCE DAWN- [OP01]` → `ROMANCE DAWN- [OP01]`,
/// then every `"` dropped.
pub fn clean_series_name(raw: &str) -> String {
    let mut text = raw;
    for marker in SPINLINE_MARKERS {
        if let Some(i) = text.find(marker) {
            text = &text[i + marker.len()..];
            break;
        }
    }
    text.replace('"', "")
}

/// Drop literal parentheses, keep what's inside.
pub fn strip_parens(s: &str) -> String {
    s.chars().filter(|&c| c != '(' && c != ')').collect()
}

/// `TypeSupernovas` / `Type Supernovas` → `Supernovas`. Only a leading label is removed.
pub fn strip_label(s: &str, label: &str) -> String {
    let t = s.trim_start();
    t.strip_prefix(label).unwrap_or(t).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_ids_only() {
        assert!(is_numeric_id("569101"));
        assert!(!is_numeric_id(""));
        assert!(!is_numeric_id("all"));
        assert!(!is_numeric_id("56a"));
        assert!(!is_numeric_id("-1"));
    }

    #[test]
    fn series_name_cut_at_marker() {
        assert_eq!(
            clean_series_name(r#"BOOSTER PACK <br class="spInline">-ROMANCE DAWN- [OP01]"#),
            "ROMANCE DAWN- [OP01]"
        );
        assert_eq!(
            clean_series_name(r#"PACK <br class='spInline'>-Kingdoms"#),
            "Kingdoms"
        );
        assert_eq!(clean_series_name(r#"Promotion "card""#), "Promotion card");
    }

    #[test]
    fn labels_only_stripped_in_front() {
        assert_eq!(strip_label("TypeSupernovas/Straw Hat Crew", "Type"), "Supernovas/Straw Hat Crew");
        assert_eq!(strip_label("Effect [On Play] Type check", "Effect"), "[On Play] Type check");
        assert_eq!(strip_label("Nothing here", "Effect"), "Nothing here");
    }

    #[test]
    fn parens_removed() {
        assert_eq!(strip_parens("Nami (Alt)"), "Nami Alt");
    }

    #[test]
    fn ws_collapsed() {
        assert_eq!(normalize_ws("  a \n b  "), "a b");
    }
}
