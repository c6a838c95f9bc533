//! Text segmentation for labels.
//!
//! Purely textual helpers used when turning configuration strings into
//! label lines; no geometry lives here.

use crate::layout::defaults::LINE_SEPARATOR;

/// Split a label into lines on `&`, trimming each part.
///
/// A blank label yields no lines at all.
pub fn split_label_lines(label: &str) -> Vec<String> {
    if label.trim().is_empty() {
        return Vec::new();
    }
    label
        .split(LINE_SEPARATOR)
        .map(|part| part.trim().to_string())
        .collect()
}

/// Character count of the longest line.
pub fn longest_line_len<S: AsRef<str>>(lines: &[S]) -> usize {
    lines
        .iter()
        .map(|line| line.as_ref().chars().count())
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_trims() {
        assert_eq!(
            split_label_lines("Digital & Maturity &Index"),
            vec!["Digital", "Maturity", "Index"]
        );
    }

    #[test]
    fn single_line() {
        assert_eq!(split_label_lines("  Core  "), vec!["Core"]);
    }

    #[test]
    fn blank_label_has_no_lines() {
        assert!(split_label_lines("").is_empty());
        assert!(split_label_lines("   ").is_empty());
    }

    #[test]
    fn longest_counts_chars_not_bytes() {
        let lines = split_label_lines("Größe & ab");
        assert_eq!(longest_line_len(&lines), 5);
        assert_eq!(longest_line_len::<&str>(&[]), 0);
    }
}
