use crate::elements::{Action, Dialog, DualDialog, Element, Section, Slug, Transition};
use crate::rich_text::EmphasisParser;

use super::kinds::{
    Centered, CharacterCue, SceneHeading, SectionHeading, SynopsisMarker, TransitionLine,
};
use super::paragraphs::InputParagraph;

/// What to do with the output list for one input paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Append a new element.
    Append(Element),
    /// Replace the last element (dual dialogue absorbs the dialogue before it).
    ReplaceLast(Element),
    /// Set the synopsis of the last element; nothing new is appended.
    AttachToLast(String),
}

impl Classification {
    fn name(&self) -> &'static str {
        match self {
            Classification::Append(e) | Classification::ReplaceLast(e) => e.kind_name(),
            Classification::AttachToLast(_) => "Synopsis",
        }
    }
}

/// Decides the element type of each input paragraph.
///
/// Rules are tried in a fixed order and the first match wins:
/// 1. Synopsis (attaches to the previous element)
/// 2. Section
/// 3. Scene heading
/// 4. Centered action
/// 5. Dialogue, including dual dialogue
/// 6. Transition
/// 7. Action, which always matches
pub struct ParagraphClassifier<'e, E: EmphasisParser> {
    emphasis: &'e E,
}

impl<'e, E: EmphasisParser> ParagraphClassifier<'e, E> {
    pub fn new(emphasis: &'e E) -> Self {
        Self { emphasis }
    }

    /// Classifies `paragraph` given the elements emitted before it.
    pub fn classify(&self, paragraph: &InputParagraph, prior: &[Element]) -> Classification {
        let result = self
            .as_synopsis(paragraph, prior)
            .or_else(|| self.as_section(paragraph))
            .or_else(|| self.as_slug(paragraph))
            .or_else(|| self.as_centered_action(paragraph))
            .or_else(|| self.as_dialog(paragraph, prior))
            .or_else(|| self.as_transition(paragraph))
            .unwrap_or_else(|| self.as_action(paragraph));
        log::trace!(
            "classified {}-line paragraph as {}",
            paragraph.len(),
            result.name()
        );
        result
    }

    fn as_synopsis(&self, paragraph: &InputParagraph, prior: &[Element]) -> Option<Classification> {
        let text = SynopsisMarker::text(paragraph.single_line()?)?;
        if !prior.last()?.supports_synopsis() {
            return None;
        }
        Some(Classification::AttachToLast(text.to_string()))
    }

    fn as_section(&self, paragraph: &InputParagraph) -> Option<Classification> {
        let (level, text) = SectionHeading::parse(paragraph.single_line()?)?;
        Some(Classification::Append(Element::Section(Section::new(
            self.emphasis.parse_emphasis(text),
            level,
        ))))
    }

    fn as_slug(&self, paragraph: &InputParagraph) -> Option<Classification> {
        let found = SceneHeading::parse(paragraph.single_line()?)?;
        let scene_number = found.scene_number.map(|n| self.emphasis.plain(&n));
        Some(Classification::Append(Element::Slug(Slug::new(
            self.emphasis.parse_emphasis(&found.heading),
            scene_number,
        ))))
    }

    fn as_centered_action(&self, paragraph: &InputParagraph) -> Option<Classification> {
        let lines = paragraph
            .lines()
            .iter()
            .map(|line| Centered::content(line).map(|c| self.emphasis.parse_emphasis(c)))
            .collect::<Option<Vec<_>>>()?;
        Some(Classification::Append(Element::Action(Action::new(
            lines, true,
        ))))
    }

    fn create_dialog(&self, character: &str, paragraph: &InputParagraph) -> Dialog {
        Dialog::new(
            self.emphasis.parse_emphasis(character),
            paragraph.lines()[1..]
                .iter()
                .map(|line| self.emphasis.parse_emphasis(line.trim()))
                .collect(),
        )
    }

    fn as_dialog(&self, paragraph: &InputParagraph, prior: &[Element]) -> Option<Classification> {
        if paragraph.len() < 2 {
            return None;
        }
        let character = paragraph.first_line();
        if !CharacterCue::is_cue(character) {
            return None;
        }

        if let Some(previous) = prior.last().and_then(Element::as_dialog)
            && let Some(name) = CharacterCue::dual_name(character)
        {
            let dual = DualDialog::new(previous.clone(), self.create_dialog(name, paragraph));
            return Some(Classification::ReplaceLast(Element::DualDialog(dual)));
        }

        Some(Classification::Append(Element::Dialog(
            self.create_dialog(character, paragraph),
        )))
    }

    fn as_transition(&self, paragraph: &InputParagraph) -> Option<Classification> {
        let text = TransitionLine::parse(paragraph.single_line()?)?;
        Some(Classification::Append(Element::Transition(Transition::new(
            self.emphasis.parse_emphasis(&text),
        ))))
    }

    fn as_action(&self, paragraph: &InputParagraph) -> Classification {
        let lines = paragraph
            .lines()
            .iter()
            .map(|line| self.emphasis.parse_emphasis(line.trim_end()))
            .collect();
        Classification::Append(Element::Action(Action::new(lines, false)))
    }
}
