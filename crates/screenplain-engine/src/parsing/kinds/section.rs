use std::sync::OnceLock;

use regex::Regex;

/// Outline section heading: `## Act Two`.
pub struct SectionHeading;

impl SectionHeading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: usize = 6;

    fn regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(r"^(#{1,6})\s*([^#].*)$").expect("Invalid section regex"))
    }

    /// Returns `(level, text)`. More than six markers is not a section.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let caps = Self::regex().captures(line)?;
        let level = caps.get(1)?.as_str().len();
        debug_assert!(level <= Self::MAX_LEVEL);
        Some((level as u8, caps.get(2)?.as_str()))
    }
}
