//! Line-level grammar for each element kind.
//!
//! Each kind owns its delimiters and patterns and answers one question about
//! raw text ("is this line a centered line, and what is inside it?"). Building
//! elements and deciding precedence happens in the classifier.

pub mod centered;
pub mod character;
pub mod scene_heading;
pub mod section;
pub mod synopsis;
pub mod transition;

pub use centered::Centered;
pub use character::CharacterCue;
pub use scene_heading::{SceneHeading, SceneHeadingMatch};
pub use section::SectionHeading;
pub use synopsis::SynopsisMarker;
pub use transition::TransitionLine;

/// True if `s` has at least one cased character and no lowercase ones.
pub fn is_upper(s: &str) -> bool {
    let mut cased = false;
    for c in s.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            cased = true;
        }
    }
    cased
}
