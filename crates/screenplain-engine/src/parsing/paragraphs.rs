use std::iter::Peekable;

use super::lines::is_blank;

/// A maximal run of consecutive non-blank lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputParagraph {
    lines: Vec<String>,
}

impl InputParagraph {
    /// Returns `None` for an empty line list; paragraphs are never empty.
    pub fn new(lines: Vec<String>) -> Option<Self> {
        if lines.is_empty() {
            None
        } else {
            Some(Self { lines })
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The only line, if the paragraph has exactly one.
    pub fn single_line(&self) -> Option<&str> {
        match self.lines.as_slice() {
            [line] => Some(line),
            _ => None,
        }
    }

    pub fn first_line(&self) -> &str {
        &self.lines[0]
    }
}

/// Lazily groups preprocessed lines into [`InputParagraph`]s.
///
/// Runs of blank lines are consumed as separators and yield nothing.
pub struct Paragraphs<I: Iterator<Item = String>> {
    lines: Peekable<I>,
}

impl<I: Iterator<Item = String>> Paragraphs<I> {
    pub fn new(lines: I) -> Self {
        Self {
            lines: lines.peekable(),
        }
    }
}

impl<I: Iterator<Item = String>> Iterator for Paragraphs<I> {
    type Item = InputParagraph;

    fn next(&mut self) -> Option<InputParagraph> {
        while self.lines.next_if(|l| is_blank(l)).is_some() {}

        let mut run = Vec::new();
        while let Some(line) = self.lines.next_if(|l| !is_blank(l)) {
            run.push(line);
        }
        InputParagraph::new(run)
    }
}

/// Groups an iterator of preprocessed lines into paragraphs.
pub fn group_paragraphs<I>(lines: I) -> Paragraphs<I::IntoIter>
where
    I: IntoIterator<Item = String>,
{
    Paragraphs::new(lines.into_iter())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn group(lines: &[&str]) -> Vec<Vec<String>> {
        group_paragraphs(lines.iter().map(|l| l.to_string()))
            .map(|p| p.lines().to_vec())
            .collect()
    }

    #[test]
    fn empty_input_has_no_paragraphs() {
        assert!(group(&[]).is_empty());
    }

    #[test]
    fn blank_runs_separate_paragraphs() {
        assert_eq!(
            group(&["", "", "a", "b", "", "", "", "c", ""]),
            vec![vec!["a", "b"], vec!["c"]]
        );
    }

    #[test]
    fn whitespace_lines_stay_inside_paragraph() {
        assert_eq!(group(&["a", "  ", "b"]), vec![vec!["a", "  ", "b"]]);
    }

    #[test]
    fn single_line_accessor() {
        let p = InputParagraph::new(vec!["x".into()]).unwrap();
        assert_eq!(p.single_line(), Some("x"));

        let p = InputParagraph::new(vec!["x".into(), "y".into()]).unwrap();
        assert_eq!(p.single_line(), None);
        assert_eq!(p.first_line(), "x");
    }

    #[test]
    fn empty_paragraph_is_rejected() {
        assert!(InputParagraph::new(vec![]).is_none());
    }
}
