use std::sync::OnceLock;

use regex::Regex;

/// Centered text wrapper: `> THE END <`.
pub struct Centered;

impl Centered {
    pub const OPEN: char = '>';
    pub const CLOSE: char = '<';

    fn regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(r"^\s*>\s*(.*?)\s*<\s*$").expect("Invalid centered regex"))
    }

    /// The wrapped content, trimmed, if `line` is a centered line.
    pub fn content(line: &str) -> Option<&str> {
        Self::regex()
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_wrapped_content() {
        assert_eq!(Centered::content("> THE END <"), Some("THE END"));
        assert_eq!(Centered::content("  >Intermission<  "), Some("Intermission"));
    }

    #[test]
    fn empty_wrapper_is_centered_blank() {
        assert_eq!(Centered::content("><"), Some(""));
    }

    #[test]
    fn needs_both_ends() {
        assert_eq!(Centered::content("> FADE OUT"), None);
        assert_eq!(Centered::content("FADE OUT <"), None);
        assert_eq!(Centered::content("> x < y"), None);
    }
}
