//! Presentation of projected lots: terminal dashboard and exported document

pub mod dashboard;
pub mod document;
pub mod sanitize;

pub use dashboard::{ChartBar, Dashboard, Metric, Style};
pub use document::LotDocument;
pub use sanitize::sanitize_latin1;

/// Greedy word wrap; a word longer than `width` gets a line of its own
pub(crate) fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current_len > 0 && current_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap() {
        assert_eq!(wrap("one two three four", 9), vec!["one two", "three", "four"]);
        assert_eq!(wrap("  spaced   out  ", 80), vec!["spaced out"]);
        assert_eq!(wrap("tiny enormousword", 5), vec!["tiny", "enormousword"]);
        assert!(wrap("", 10).is_empty());
    }
}
