//! Title page detection and parsing.
//!
//! The title page is the leading block of `Key: value` lines before the first
//! blank line. A key with an empty value takes its values from the indented
//! lines that follow:
//!
//! ```text
//! Title: Brick & Steel
//! Author:
//!     Stu Maschwitz
//!     Martin Vilcans
//! ```

use std::sync::OnceLock;

use regex::Regex;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Title page metadata: keys in order of first appearance, each with one or
/// more value lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitlePage {
    entries: Vec<(String, Vec<String>)>,
}

impl TitlePage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a value to `key`, creating the key at the end if it is new.
    pub fn push(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, values)) => values.push(value),
            None => self.entries.push((key.to_string(), vec![value])),
        }
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_slice())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Every `(key, value)` pair, keys in order, values in order within a key.
    pub fn flatten(&self) -> Vec<(&str, &str)> {
        self.entries
            .iter()
            .flat_map(|(k, values)| values.iter().map(move |v| (k.as_str(), v.as_str())))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for TitlePage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, values) in &self.entries {
            map.serialize_entry(key, values)?;
        }
        map.end()
    }
}

fn key_line_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([^:]+):\s*(.*)").expect("Invalid title page key regex"))
}

fn continuation_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?:\s{3,}|\t)(.+)").expect("Invalid title page continuation regex")
    })
}

/// Splits a `Key: value` line. `None` if the line has no key.
fn key_line(line: &str) -> Option<(&str, &str)> {
    let caps = key_line_re().captures(line)?;
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}

fn continuation_value(line: &str) -> Option<&str> {
    continuation_re()
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Parses the leading block of a document as a title page.
///
/// `lines` must not contain the blank line that ends the block. Returns
/// `None` when some line is neither a key line nor a continuation, which
/// means the block is not a title page at all. An empty block parses to an
/// empty title page.
pub fn parse_title_page<S: AsRef<str>>(lines: &[S]) -> Option<TitlePage> {
    let mut page = TitlePage::new();
    let mut rest = lines.iter().map(|l| AsRef::<str>::as_ref(l)).peekable();

    while let Some(line) = rest.next() {
        let (key, value) = key_line(line)?;
        if !value.is_empty() {
            page.push(key, value);
            continue;
        }
        while let Some(value) = rest.peek().and_then(|l| continuation_value(*l)) {
            page.push(key, value);
            rest.next();
        }
    }

    Some(page)
}
