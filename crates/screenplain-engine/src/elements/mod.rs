//! # Screenplay Elements
//!
//! The typed paragraphs produced by the parser.
//!
//! Every element except [`DualDialog`] can carry a synopsis, exposed through
//! the [`Synopsis`] trait. [`Element::synopsis_target_mut`] is the single
//! place that decides which variants accept one.

mod dialog;

pub use dialog::{Dialog, DialogBlock, DualDialog};

use serde::Serialize;

use crate::rich_text::RichText;

/// Capability of holding a synopsis annotation.
pub trait Synopsis {
    fn synopsis(&self) -> Option<&str>;
    fn set_synopsis(&mut self, synopsis: String);
}

macro_rules! impl_synopsis {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Synopsis for $ty {
                fn synopsis(&self) -> Option<&str> {
                    self.synopsis.as_deref()
                }

                fn set_synopsis(&mut self, synopsis: String) {
                    self.synopsis = Some(synopsis);
                }
            }
        )*
    };
}

impl_synopsis!(Slug, Action, Section, Transition, Dialog);

/// A scene heading, e.g. `INT. HOUSE - DAY`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slug {
    pub heading: RichText,
    pub scene_number: Option<RichText>,
    pub synopsis: Option<String>,
}

impl Slug {
    pub fn new(heading: RichText, scene_number: Option<RichText>) -> Self {
        Self {
            heading,
            scene_number,
            synopsis: None,
        }
    }
}

/// Narrative description. Centered action comes from `> text <` lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Action {
    pub lines: Vec<RichText>,
    pub centered: bool,
    pub synopsis: Option<String>,
}

impl Action {
    pub fn new(lines: Vec<RichText>, centered: bool) -> Self {
        Self {
            lines,
            centered,
            synopsis: None,
        }
    }
}

/// An outline heading, level 1 to 6.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub text: RichText,
    pub level: u8,
    pub synopsis: Option<String>,
}

impl Section {
    pub fn new(text: RichText, level: u8) -> Self {
        Self {
            text,
            level,
            synopsis: None,
        }
    }
}

/// An editing direction such as `CUT TO:`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transition {
    pub text: RichText,
    pub synopsis: Option<String>,
}

impl Transition {
    pub fn new(text: RichText) -> Self {
        Self {
            text,
            synopsis: None,
        }
    }
}

/// One typed paragraph of a screenplay body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Element {
    Slug(Slug),
    Action(Action),
    Section(Section),
    Transition(Transition),
    Dialog(Dialog),
    DualDialog(DualDialog),
}

impl Element {
    /// Stable short name of the variant.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Element::Slug(_) => "Slug",
            Element::Action(_) => "Action",
            Element::Section(_) => "Section",
            Element::Transition(_) => "Transition",
            Element::Dialog(_) => "Dialog",
            Element::DualDialog(_) => "DualDialog",
        }
    }

    /// The element as a synopsis holder, if its variant supports one.
    pub fn synopsis_target_mut(&mut self) -> Option<&mut dyn Synopsis> {
        match self {
            Element::Slug(e) => Some(e),
            Element::Action(e) => Some(e),
            Element::Section(e) => Some(e),
            Element::Transition(e) => Some(e),
            Element::Dialog(e) => Some(e),
            Element::DualDialog(_) => None,
        }
    }

    pub fn synopsis_target(&self) -> Option<&dyn Synopsis> {
        match self {
            Element::Slug(e) => Some(e),
            Element::Action(e) => Some(e),
            Element::Section(e) => Some(e),
            Element::Transition(e) => Some(e),
            Element::Dialog(e) => Some(e),
            Element::DualDialog(_) => None,
        }
    }

    pub fn supports_synopsis(&self) -> bool {
        self.synopsis_target().is_some()
    }

    pub fn synopsis(&self) -> Option<&str> {
        self.synopsis_target().and_then(|s| s.synopsis())
    }

    pub fn as_dialog(&self) -> Option<&Dialog> {
        match self {
            Element::Dialog(d) => Some(d),
            _ => None,
        }
    }
}
