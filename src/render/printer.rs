//! Block-aware line printer for generated Python.
//!
//! Lines are written one statement at a time. A statement ending in `:` that
//! opens a block (`with ...:`, `if ...:`) indents what follows; a blank line
//! closes the innermost block. Multi-line statements are indented on their
//! first line only, continuation lines are written as given.

use crate::constants::BODY_INDENT;

const BLOCK_OPENERS: &[&str] = &[
    "if", "try", "elif", "while", "for", "with", "def", "class", "else", "except", "finally",
];
const UNINDENTORS: &[&str] = &["else", "elif", "except", "finally"];

#[derive(Debug, Default)]
pub struct ScriptPrinter {
    buf: String,
    indent: usize,
}

impl ScriptPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writeline(&mut self, line: &str) {
        let has_text = !line.trim().is_empty() && !line.trim_start().starts_with('#');
        let is_comment = line.starts_with('#');

        if !is_comment && (!has_text || is_unindentor(line)) && self.indent > 0 {
            self.indent -= 1;
        }

        for _ in 0..self.indent {
            self.buf.push_str(BODY_INDENT);
        }
        self.buf.push_str(line);
        self.buf.push('\n');

        if opens_block(line) {
            self.indent += 1;
        }
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

fn first_word(line: &str) -> &str {
    let line = line.trim_start();
    let end = line
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(line.len());
    &line[..end]
}

/// True when the text ends with `:`, optionally followed by a comment.
fn ends_with_colon(line: &str) -> bool {
    let last = line.rsplit('\n').next().unwrap_or(line);
    last.match_indices(':').any(|(pos, _)| {
        let rest = last[pos + 1..].trim_start_matches([' ', '\t']);
        rest.is_empty() || rest.starts_with('#')
    })
}

fn opens_block(line: &str) -> bool {
    ends_with_colon(line) && BLOCK_OPENERS.contains(&first_word(line))
}

fn is_unindentor(line: &str) -> bool {
    ends_with_colon(line) && UNINDENTORS.contains(&first_word(line))
}

/// Indent a rendered body by one level for placement inside a function
/// definition. The first line is left bare since the template already
/// indents it; trailing whitespace is removed from every line.
pub fn indent_body(text: &str) -> String {
    let indented = text
        .split('\n')
        .map(|line| format!("{}{}", BODY_INDENT, line))
        .collect::<Vec<_>>()
        .join("\n");

    indented
        .trim()
        .split('\n')
        .map(|line| line.trim_end_matches(' '))
        .collect::<Vec<_>>()
        .join("\n")
}
