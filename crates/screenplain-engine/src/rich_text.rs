//! # Rich Text
//!
//! Styled text runs attached to screenplay elements, and the seam through
//! which an inline-emphasis parser is plugged into the engine.
//!
//! The engine never interprets emphasis markup itself. It hands each raw
//! line to an [`EmphasisParser`] and stores whatever [`RichText`] comes back.

use std::fmt;

use serde::Serialize;

/// An inline style applied to a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Style {
    Italic,
    Bold,
    Underline,
}

/// A run of text sharing one set of styles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub text: String,
    pub styles: Vec<Style>,
}

impl Segment {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            styles: Vec::new(),
        }
    }

    pub fn styled(text: impl Into<String>, styles: Vec<Style>) -> Self {
        Self {
            text: text.into(),
            styles,
        }
    }
}

/// An ordered sequence of styled text runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RichText {
    segments: Vec<Segment>,
}

impl RichText {
    /// Unstyled text as a single segment. Empty input yields no segments.
    pub fn plain(text: &str) -> Self {
        if text.is_empty() {
            return Self::default();
        }
        Self {
            segments: vec![Segment::plain(text)],
        }
    }

    pub fn from_segments(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Concatenated text of all segments with styling dropped.
    pub fn to_plain_string(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.iter().all(|s| s.text.is_empty())
    }
}

impl fmt::Display for RichText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            f.write_str(&segment.text)?;
        }
        Ok(())
    }
}

impl From<&str> for RichText {
    fn from(text: &str) -> Self {
        Self::plain(text)
    }
}

/// Turns a raw line into styled text.
///
/// `plain` is used for text that must never be interpreted as markup
/// (scene numbers, synopses).
pub trait EmphasisParser {
    fn parse_emphasis(&self, line: &str) -> RichText;

    fn plain(&self, text: &str) -> RichText {
        RichText::plain(text)
    }
}

/// Treats every line as unstyled text.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainEmphasis;

impl EmphasisParser for PlainEmphasis {
    fn parse_emphasis(&self, line: &str) -> RichText {
        RichText::plain(line)
    }
}

impl<F> EmphasisParser for F
where
    F: Fn(&str) -> RichText,
{
    fn parse_emphasis(&self, line: &str) -> RichText {
        self(line)
    }
}
