use similar::{ChangeTag, TextDiff};

/// Unified diff of a file before and after rewriting. Empty when nothing changed.
pub fn unified_diff(before: &str, after: &str) -> String {
    let diff = TextDiff::from_lines(before, after);
    diff.unified_diff()
        .context_radius(1)
        .header("original", "rewritten")
        .to_string()
}

/// Number of lines touched by a rewrite.
pub fn changed_lines(before: &str, after: &str) -> usize {
    TextDiff::from_lines(before, after)
        .iter_all_changes()
        .filter(|change| change.tag() == ChangeTag::Delete)
        .count()
}

#[cfg(test)]
mod tests {
    use super::{changed_lines, unified_diff};

    #[test]
    fn identical_text_has_no_diff() {
        let text = "<div className=\"prose\" />\n";
        assert!(unified_diff(text, text).is_empty());
        assert_eq!(changed_lines(text, text), 0);
    }

    #[test]
    fn rewritten_lines_are_reported() {
        let before = "<a>\n<div className=\"w-full\" />\n</a>\n";
        let after = "<a>\n<div sx={{ width: \"100%\" }} />\n</a>\n";
        let diff = unified_diff(before, after);
        assert!(diff.starts_with("--- original\n+++ rewritten\n"));
        assert!(diff.contains("-<div className=\"w-full\" />"));
        assert!(diff.contains("+<div sx={{ width: \"100%\" }} />"));
        assert_eq!(changed_lines(before, after), 1);
    }
}
