use std::io::{self, Write};

use screenplain_engine::{Dialog, DialogBlock, Element, RichText, Screenplay};

const INDENT: &str = "  ";

/// Writes a human-readable outline: one header line per element, its text
/// indented below.
pub fn write_outline<W: Write>(out: &mut W, play: &Screenplay) -> io::Result<()> {
    if let Some(page) = &play.title_page {
        writeln!(out, "TitlePage")?;
        for (key, value) in page.flatten() {
            writeln!(out, "{INDENT}{key}: {value}")?;
        }
    }

    for element in &play.elements {
        write_header(out, element)?;
        match element {
            Element::Slug(slug) => write_text(out, 1, &slug.heading)?,
            Element::Action(action) => {
                for line in &action.lines {
                    write_text(out, 1, line)?;
                }
            }
            Element::Section(section) => write_text(out, 1, &section.text)?,
            Element::Transition(transition) => write_text(out, 1, &transition.text)?,
            Element::Dialog(dialog) => write_dialog(out, 1, dialog)?,
            Element::DualDialog(dual) => {
                writeln!(out, "{INDENT}[left]")?;
                write_dialog(out, 2, &dual.left)?;
                writeln!(out, "{INDENT}[right]")?;
                write_dialog(out, 2, &dual.right)?;
            }
        }
        if let Some(synopsis) = element.synopsis() {
            writeln!(out, "{INDENT}[synopsis: {synopsis}]")?;
        }
    }
    Ok(())
}

fn write_header<W: Write>(out: &mut W, element: &Element) -> io::Result<()> {
    write!(out, "{}", element.kind_name())?;
    match element {
        Element::Slug(slug) => {
            if let Some(number) = &slug.scene_number {
                write!(out, " [#{number}]")?;
            }
        }
        Element::Section(section) => write!(out, " [level {}]", section.level)?,
        Element::Action(action) if action.centered => write!(out, " [centered]")?,
        _ => {}
    }
    writeln!(out)
}

fn write_dialog<W: Write>(out: &mut W, depth: usize, dialog: &Dialog) -> io::Result<()> {
    write_text(out, depth, &dialog.character)?;
    for block in dialog.blocks() {
        match block {
            DialogBlock::Speech(line) => write_text(out, depth + 1, line)?,
            DialogBlock::Parenthetical(line) => write_text(out, depth + 2, line)?,
        }
    }
    Ok(())
}

fn write_text<W: Write>(out: &mut W, depth: usize, text: &RichText) -> io::Result<()> {
    writeln!(out, "{}{}", INDENT.repeat(depth), text)
}
