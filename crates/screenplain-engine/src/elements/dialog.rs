use serde::Serialize;

use crate::rich_text::RichText;

/// A character's spoken lines, headed by the character name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dialog {
    pub character: RichText,
    pub lines: Vec<RichText>,
    pub synopsis: Option<String>,
}

/// A run of dialogue as it should be laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogBlock<'a> {
    Speech(&'a RichText),
    Parenthetical(&'a RichText),
}

impl Dialog {
    pub fn new(character: RichText, lines: Vec<RichText>) -> Self {
        Self {
            character,
            lines,
            synopsis: None,
        }
    }

    /// Splits the lines into speech and parentheticals.
    ///
    /// A line starting with `(` opens a parenthetical, which runs up to and
    /// including the next line ending with `)`.
    pub fn blocks(&self) -> Vec<DialogBlock<'_>> {
        let mut inside = false;
        let mut out = Vec::with_capacity(self.lines.len());
        for line in &self.lines {
            let text = line.to_plain_string();
            if text.starts_with('(') {
                inside = true;
            }
            out.push(if inside {
                DialogBlock::Parenthetical(line)
            } else {
                DialogBlock::Speech(line)
            });
            if text.ends_with(')') {
                inside = false;
            }
        }
        out
    }
}

/// Two dialogue blocks spoken at the same time, shown side by side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DualDialog {
    pub left: Dialog,
    pub right: Dialog,
}

impl DualDialog {
    pub fn new(left: Dialog, right: Dialog) -> Self {
        Self { left, right }
    }
}
