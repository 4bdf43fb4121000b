use crate::elements::Element;
use crate::rich_text::EmphasisParser;

use super::classify::{Classification, ParagraphClassifier};
use super::paragraphs::InputParagraph;

/// Owns the growing element list and applies each classification to it.
///
/// The list is only ever appended to or changed at its last position.
pub struct ElementBuilder<'e, E: EmphasisParser> {
    classifier: ParagraphClassifier<'e, E>,
    out: Vec<Element>,
}

impl<'e, E: EmphasisParser> ElementBuilder<'e, E> {
    pub fn new(emphasis: &'e E) -> Self {
        Self {
            classifier: ParagraphClassifier::new(emphasis),
            out: vec![],
        }
    }

    pub fn push(&mut self, paragraph: &InputParagraph) {
        let classification = self.classifier.classify(paragraph, &self.out);
        self.apply(classification);
    }

    pub fn elements(&self) -> &[Element] {
        &self.out
    }

    pub fn finish(self) -> Vec<Element> {
        self.out
    }

    fn apply(&mut self, classification: Classification) {
        match classification {
            Classification::Append(element) => self.out.push(element),
            Classification::ReplaceLast(element) => {
                self.out.pop();
                self.out.push(element);
            }
            Classification::AttachToLast(synopsis) => {
                match self.out.last_mut().and_then(Element::synopsis_target_mut) {
                    Some(target) => target.set_synopsis(synopsis),
                    // The classifier only attaches to elements that accept it.
                    None => log::warn!("dropping synopsis with no element to attach to"),
                }
            }
        }
    }
}
