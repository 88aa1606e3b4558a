//! Soft tag equality.

/// Lower-cases, maps `_` and `-` to spaces, and collapses whitespace.
pub fn normalize_tag(tag: &str) -> String {
    tag.to_lowercase()
        .replace(['_', '-'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// True iff both tags are non-empty after normalization and one contains the other.
///
/// `"stakeholder_management"` overlaps `"stakeholder"` and `"python"` overlaps
/// `"python3"`. Symmetric.
pub fn tags_overlap(a: &str, b: &str) -> bool {
    normalized_overlap(&normalize_tag(a), &normalize_tag(b))
}

/// Same as `tags_overlap` for inputs already passed through `normalize_tag`.
pub(crate) fn normalized_overlap(a: &str, b: &str) -> bool {
    !a.is_empty() && !b.is_empty() && (a.contains(b) || b.contains(a))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_tag() {
        assert_eq!(normalize_tag("Stakeholder_Management"), "stakeholder management");
        assert_eq!(normalize_tag("  go-to-market  "), "go to market");
        assert_eq!(normalize_tag("a__b"), "a b");
        assert_eq!(normalize_tag("___"), "");
    }

    #[test]
    fn test_exact_and_case_insensitive() {
        assert!(tags_overlap("python", "python"));
        assert!(tags_overlap("Python", "PYTHON"));
    }

    #[test]
    fn test_substring_either_direction() {
        assert!(tags_overlap("stakeholder_management", "stakeholder"));
        assert!(tags_overlap("stakeholder", "stakeholder management"));
        assert!(tags_overlap("python", "python3"));
    }

    #[test]
    fn test_separator_insensitive() {
        assert!(tags_overlap("ab-testing", "ab_testing"));
        assert!(tags_overlap("data_analysis", "data analysis"));
    }

    #[test]
    fn test_empty_never_overlaps() {
        assert!(!tags_overlap("", ""));
        assert!(!tags_overlap("", "python"));
        assert!(!tags_overlap("python", "  "));
        assert!(!tags_overlap("_", "python"));
    }

    #[test]
    fn test_unrelated_tags() {
        assert!(!tags_overlap("python", "excel"));
        assert!(!tags_overlap("seo", "crm"));
    }

    #[test]
    fn test_symmetric() {
        for (a, b) in [("sql", "postgresql"), ("crm", "hubspot"), ("", "x")] {
            assert_eq!(tags_overlap(a, b), tags_overlap(b, a));
        }
    }
}
