use std::sync::OnceLock;

use regex::Regex;

/// Scene heading (slug) grammar.
///
/// A line is a heading when, upper-cased, it starts with a known location
/// prefix, or when it is forced with a leading `.`. A trailing `#1A#` tag is
/// the scene number.
pub struct SceneHeading;

/// The pieces of a recognized scene heading, already upper-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneHeadingMatch {
    pub heading: String,
    pub scene_number: Option<String>,
}

impl SceneHeading {
    pub const FORCE: char = '.';

    fn line_regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(r"^(?:(\.)\s*)?(\S.*?)\s*$").expect("Invalid slug regex"))
    }

    fn prefix_regexes() -> &'static [Regex] {
        static RES: OnceLock<Vec<Regex>> = OnceLock::new();
        RES.get_or_init(|| {
            [
                r"^(INT|EXT|EST)[ .]",
                r"^(INT\.?/EXT\.?)[ .]",
                r"^I/E[ .]",
            ]
            .iter()
            .map(|p| Regex::new(p).expect("Invalid slug prefix regex"))
            .collect()
        })
    }

    fn scene_number_regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| {
            Regex::new(r"^(.*?)\s*(?:#([\w\-.]+)#)\s*$").expect("Invalid scene number regex")
        })
    }

    pub fn has_location_prefix(upper: &str) -> bool {
        Self::prefix_regexes().iter().any(|re| re.is_match(upper))
    }

    pub fn parse(line: &str) -> Option<SceneHeadingMatch> {
        let caps = Self::line_regex().captures(line)?;
        let forced = caps.get(1).is_some();
        let text = caps.get(2)?.as_str().to_uppercase();

        if !forced && !Self::has_location_prefix(&text) {
            return None;
        }

        if let Some(numbered) = Self::scene_number_regex().captures(&text)
            && let (Some(heading), Some(number)) = (numbered.get(1), numbered.get(2))
        {
            return Some(SceneHeadingMatch {
                heading: heading.as_str().to_string(),
                scene_number: Some(number.as_str().to_string()),
            });
        }

        Some(SceneHeadingMatch {
            heading: text,
            scene_number: None,
        })
    }
}
