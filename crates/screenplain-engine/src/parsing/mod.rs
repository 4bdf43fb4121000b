//! # Screenplay Parsing
//!
//! Turns lines of screenplay source into a [`Screenplay`].
//!
//! ## Parsing Phases
//!
//! 1. **Preprocessing** (`lines`): tabs expanded, line endings stripped
//! 2. **Title page** (`title_page`): the block before the first blank line is
//!    tried as `Key: value` metadata. If it does not parse, it is body text
//! 3. **Grouping** (`paragraphs`): blank lines split the body into paragraphs
//! 4. **Classification** (`classify`): each paragraph is matched against the
//!    element rules in precedence order
//! 5. **Building** (`builder`): an `ElementBuilder` applies each result to the
//!    output list, merging dual dialogue and attaching synopses
//!
//! ## Key Invariants
//!
//! - Every paragraph classifies; action is the catch-all
//! - Output order follows input order, except for the two merges above, which
//!   only ever touch the last element

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod lines;
pub mod paragraphs;
pub mod title_page;

pub use builder::ElementBuilder;
pub use classify::{Classification, ParagraphClassifier};
pub use paragraphs::{InputParagraph, Paragraphs, group_paragraphs};
pub use title_page::{TitlePage, parse_title_page};

use serde::Serialize;

use crate::elements::Element;
use crate::rich_text::{EmphasisParser, PlainEmphasis};

use lines::{TAB_WIDTH, is_blank, preprocess_line, split_source};

/// Knobs for the preprocessing phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    pub tab_width: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            tab_width: TAB_WIDTH,
        }
    }
}

/// A parsed screenplay: optional title page metadata plus the body elements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Screenplay {
    pub title_page: Option<TitlePage>,
    pub elements: Vec<Element>,
}

pub struct ScreenplayParser<E: EmphasisParser> {
    emphasis: E,
    options: ParseOptions,
}

impl<E: EmphasisParser> ScreenplayParser<E> {
    pub fn new(emphasis: E) -> Self {
        Self {
            emphasis,
            options: ParseOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> ParseOptions {
        self.options
    }

    /// Parses a whole document, title page included.
    pub fn parse<I, S>(&self, source: I) -> Screenplay
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines: Vec<String> = source
            .into_iter()
            .map(|raw| preprocess_line(raw.as_ref(), self.options.tab_width))
            .collect();

        let split = lines.iter().position(|l| is_blank(l)).unwrap_or(lines.len());
        let (head, tail) = lines.split_at(split);

        match parse_title_page(head) {
            Some(title_page) if !title_page.is_empty() => {
                // `tail` still starts with the blank line that ended the title page.
                let elements = self.build(group_paragraphs(tail.iter().cloned()));
                Screenplay {
                    title_page: Some(title_page),
                    elements,
                }
            }
            _ => {
                if !head.is_empty() {
                    log::debug!(
                        "leading {}-line block is not a title page, parsing it as body",
                        head.len()
                    );
                }
                Screenplay {
                    title_page: None,
                    elements: self.build(group_paragraphs(lines)),
                }
            }
        }
    }

    /// Parses lines as screenplay body only, with no title page detection.
    ///
    /// Lines are consumed lazily, so the source may be a stream.
    pub fn parse_body<I, S>(&self, source: I) -> Vec<Element>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tab_width = self.options.tab_width;
        self.build(group_paragraphs(
            source
                .into_iter()
                .map(move |raw| preprocess_line(raw.as_ref(), tab_width)),
        ))
    }

    fn build(&self, paragraphs: impl Iterator<Item = InputParagraph>) -> Vec<Element> {
        let mut builder = ElementBuilder::new(&self.emphasis);
        for paragraph in paragraphs {
            builder.push(&paragraph);
        }
        builder.finish()
    }
}

impl Default for ScreenplayParser<PlainEmphasis> {
    fn default() -> Self {
        Self::new(PlainEmphasis)
    }
}

/// Parses lines with plain emphasis and default options.
pub fn parse<I, S>(source: I) -> Screenplay
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    ScreenplayParser::new(PlainEmphasis).parse(source)
}

/// Parses a whole document held in memory.
pub fn parse_str(source: &str) -> Screenplay {
    parse(split_source(source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_input_is_empty_screenplay() {
        assert_eq!(parse_str(""), Screenplay::default());
    }

    #[test]
    fn title_page_is_split_from_body() {
        let play = parse_str("Title: My Play\nAuthor: Me\n\nINT. HOUSE - DAY\n");
        let page = play.title_page.unwrap();
        assert_eq!(page.flatten(), [("Title", "My Play"), ("Author", "Me")]);
        assert_eq!(play.elements.len(), 1);
        assert_eq!(play.elements[0].kind_name(), "Slug");
    }

    #[test]
    fn failed_title_page_is_reparsed_as_body() {
        let play = parse_str("Title: My Play\nWrong line\n\nINT. HOUSE - DAY\n");
        assert_eq!(play.title_page, None);
        let kinds: Vec<_> = play.elements.iter().map(Element::kind_name).collect();
        assert_eq!(kinds, ["Action", "Slug"]);
    }

    #[test]
    fn leading_blank_line_means_no_title_page() {
        let play = parse_str("\nTitle: Not metadata\n");
        assert_eq!(play.title_page, None);
        assert_eq!(play.elements.len(), 1);
    }

    #[test]
    fn title_page_without_body() {
        let play = parse_str("Title: Only metadata");
        assert!(play.title_page.is_some());
        assert!(play.elements.is_empty());
    }

    #[test]
    fn parse_body_skips_title_page_detection() {
        let parser = ScreenplayParser::new(PlainEmphasis);
        let elements = parser.parse_body(["Title: Not metadata"]);
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].kind_name(), "Action");
    }

    #[test]
    fn tab_width_option_applies() {
        let parser =
            ScreenplayParser::new(PlainEmphasis).with_options(ParseOptions { tab_width: 2 });
        let elements = parser.parse_body(["\tIndented."]);
        let Element::Action(action) = &elements[0] else {
            panic!("expected action");
        };
        assert_eq!(action.lines[0].to_plain_string(), "  Indented.");
    }
}
