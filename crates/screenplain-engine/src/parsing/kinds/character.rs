use std::sync::OnceLock;

use regex::Regex;

use super::is_upper;

/// Character cue heading a dialogue block.
pub struct CharacterCue;

impl CharacterCue {
    /// Two trailing spaces mark an all-caps line as *not* a cue.
    pub const ESCAPE_SUFFIX: &'static str = "  ";
    pub const DUAL_MARKER: char = '^';

    fn dual_regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(r"^(.+?)(\s*\^)$").expect("Invalid dual dialogue regex"))
    }

    pub fn is_cue(line: &str) -> bool {
        is_upper(line) && !line.ends_with(Self::ESCAPE_SUFFIX)
    }

    /// The character name with the dual dialogue marker stripped, if present.
    pub fn dual_name(line: &str) -> Option<&str> {
        Self::dual_regex()
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}
