/// Default tab stop width used when expanding tabs.
pub const TAB_WIDTH: usize = 4;

/// Expands tabs to the next tab stop and strips trailing `\r`/`\n` markers.
pub fn preprocess_line(raw: &str, tab_width: usize) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut column = 0usize;
    for ch in raw.chars() {
        match ch {
            '\t' => {
                if tab_width > 0 {
                    let pad = tab_width - column % tab_width;
                    out.extend(std::iter::repeat_n(' ', pad));
                    column += pad;
                }
            }
            '\r' | '\n' => {
                out.push(ch);
                column = 0;
            }
            _ => {
                out.push(ch);
                column += 1;
            }
        }
    }
    let kept = out.trim_end_matches(['\r', '\n']).len();
    out.truncate(kept);
    out
}

/// Only a completely empty line separates paragraphs; whitespace is content.
pub fn is_blank(line: &str) -> bool {
    line.is_empty()
}

/// Splits a document into lines, keeping each terminator for the preprocessor.
pub fn split_source(source: &str) -> impl Iterator<Item = &str> {
    source.split_inclusive('\n')
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn strips_line_endings() {
        assert_eq!(preprocess_line("foo \r\n\n", TAB_WIDTH), "foo ");
    }

    #[test]
    fn expands_tabs_to_tab_stops() {
        assert_eq!(preprocess_line("\tx", TAB_WIDTH), "    x");
        assert_eq!(preprocess_line("ab\tx", TAB_WIDTH), "ab  x");
        assert_eq!(preprocess_line("abcd\tx", TAB_WIDTH), "abcd    x");
    }

    #[test]
    fn zero_tab_width_removes_tabs() {
        assert_eq!(preprocess_line("a\tb", 0), "ab");
    }

    #[test]
    fn whitespace_only_line_is_not_blank() {
        assert!(is_blank(""));
        assert!(!is_blank("   "));
    }

    #[test]
    fn split_keeps_terminators() {
        let lines: Vec<_> = split_source("a\r\nb\n\nc").collect();
        assert_eq!(lines, ["a\r\n", "b\n", "\n", "c"]);
    }
}
