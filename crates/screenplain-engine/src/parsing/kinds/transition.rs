use std::sync::OnceLock;

use regex::Regex;

use super::is_upper;

/// Transition grammar: `CUT TO:` or a forced `> Fade out.`
pub struct TransitionLine;

impl TransitionLine {
    pub const FORCE: char = '>';
    pub const SUFFIX: &'static str = "TO:";

    fn regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(r"^(>?)\s*(.+?)(TO:)?$").expect("Invalid transition regex"))
    }

    /// The transition text, if `line` is a transition.
    ///
    /// Forced transitions are upper-cased; unforced ones must already be
    /// upper case and end with `TO:`.
    pub fn parse(line: &str) -> Option<String> {
        let caps = Self::regex().captures(line)?;
        let forced = caps.get(1).is_some_and(|m| !m.as_str().is_empty());
        let text = caps.get(2)?.as_str();
        let suffix = caps.get(3).map(|m| m.as_str());

        if forced {
            return Some(format!("{}{}", text.to_uppercase(), suffix.unwrap_or("")));
        }

        match suffix {
            Some(suffix) if is_upper(text) => Some(format!("{text}{suffix}")),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("CUT TO:", "CUT TO:")]
    #[case("SMASH CUT TO:", "SMASH CUT TO:")]
    #[case("   DISSOLVE TO:", "DISSOLVE TO:")]
    #[case(">Burn to white.", "BURN TO WHITE.")]
    #[case("> fade out", "FADE OUT")]
    #[case("> jump TO:", "JUMP TO:")]
    fn recognizes(#[case] line: &str, #[case] expected: &str) {
        assert_eq!(TransitionLine::parse(line).as_deref(), Some(expected));
    }

    #[rstest]
    #[case("Cut to:")]
    #[case("CUT TO")]
    #[case("FADE OUT.")]
    #[case("TO:")]
    #[case("He walks TO:")]
    fn rejects(#[case] line: &str) {
        assert_eq!(TransitionLine::parse(line), None);
    }
}
