pub mod elements;
pub mod parsing;
pub mod rich_text;

// Re-export key types for easier usage
pub use elements::{
    Action, Dialog, DialogBlock, DualDialog, Element, Section, Slug, Synopsis, Transition,
};
pub use parsing::{ParseOptions, Screenplay, ScreenplayParser, TitlePage, parse, parse_str};
pub use rich_text::{EmphasisParser, PlainEmphasis, RichText, Segment, Style};
