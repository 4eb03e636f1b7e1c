//! Annotator Service
//!
//! Splits a document into lines and pairs each with its position.
//!
//! Line breaks follow text-mode rules: `\n`, `\r\n` and a lone `\r` each
//! end a line. A trailing line without terminator still counts, and an
//! empty document has no lines.

use crate::domain::entities::LineRecord;

/// Iterator over the lines of a document, terminators stripped.
#[derive(Debug, Clone)]
pub struct TextLines<'a> {
    rest: &'a str,
}

impl<'a> TextLines<'a> {
    pub fn new(content: &'a str) -> Self {
        Self { rest: content }
    }
}

impl<'a> Iterator for TextLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }

        match self.rest.find(|c: char| c == '\n' || c == '\r') {
            Some(pos) => {
                let line = &self.rest[..pos];
                let terminator_len = if self.rest[pos..].starts_with("\r\n") {
                    2
                } else {
                    1
                };
                self.rest = &self.rest[pos + terminator_len..];
                Some(line)
            }
            None => {
                let line = self.rest;
                self.rest = "";
                Some(line)
            }
        }
    }
}

/// Split `content` into lines.
pub fn split_lines(content: &str) -> TextLines<'_> {
    TextLines::new(content)
}

/// Annotate every line of `content`, in order.
pub fn annotate(content: &str) -> impl Iterator<Item = LineRecord<'_>> {
    split_lines(content)
        .enumerate()
        .map(|(index, raw)| LineRecord::new(index, raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(content: &str) -> Vec<&str> {
        split_lines(content).collect()
    }

    #[test]
    fn empty_document_has_no_lines() {
        assert!(lines("").is_empty());
    }

    #[test]
    fn trailing_newline_does_not_add_a_line() {
        assert_eq!(lines("a\nb\n"), vec!["a", "b"]);
    }

    #[test]
    fn last_line_without_terminator_counts() {
        assert_eq!(lines("a\nb"), vec!["a", "b"]);
    }

    #[test]
    fn lone_newline_is_one_empty_line() {
        assert_eq!(lines("\n"), vec![""]);
    }

    #[test]
    fn blank_lines_are_kept() {
        assert_eq!(lines("a\n\n\nb\n"), vec!["a", "", "", "b"]);
    }

    #[test]
    fn crlf_and_cr_terminate_lines() {
        assert_eq!(lines("a\r\nb\rc\n"), vec!["a", "b", "c"]);
        assert_eq!(lines("\r\n\r\n"), vec!["", ""]);
    }

    #[test]
    fn annotate_single_instruction() {
        let out: Vec<String> = annotate("NOP").map(|r| r.to_string()).collect();
        assert_eq!(out, vec!["00000000: NOP"]);
    }

    #[test]
    fn annotate_trims_and_numbers() {
        let out: Vec<String> = annotate("  MOV R0, R1  \nADD R0, R0, #1\n")
            .map(|r| r.to_string())
            .collect();
        assert_eq!(out, vec!["00000000: MOV R0, R1", "00000004: ADD R0, R0, #1"]);
    }

    #[test]
    fn annotate_strips_separator_characters() {
        let out: Vec<String> = annotate(" \u{1c}NOP\u{1f} \n\u{1e}\n")
            .map(|r| r.to_string())
            .collect();
        assert_eq!(out, vec!["00000000: NOP", "00000004: "]);
    }

    #[test]
    fn annotate_keeps_whitespace_only_lines() {
        let out: Vec<String> = annotate("00000013\n   \n00000093\n")
            .map(|r| r.to_string())
            .collect();
        assert_eq!(
            out,
            vec!["00000000: 00000013", "00000004: ", "00000008: 00000093"]
        );
    }
}
