//! Whitespace and comment skipping.
//!
//! CPL comments are `/* ... */` confined to a single line. A `/*` with no
//! closing `*/` before the end of the line is not a comment at all; the
//! slash falls through to the operator path.

use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips whitespace and comments before the next token.
    ///
    /// Spaces, tabs, and carriage returns are skipped; newlines are
    /// skipped and counted by the cursor.
    pub(crate) fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.cursor.current_char() {
                ' ' | '\t' | '\r' | '\n' => {
                    self.cursor.advance();
                },
                '/' if self.cursor.peek_char(1) == '*' => {
                    if !self.skip_line_comment() {
                        return;
                    }
                },
                _ => return,
            }
        }
    }

    /// Skips one `/* ... */` comment closed on the current line.
    ///
    /// Returns false without consuming anything when no `*/` exists before
    /// the next newline.
    fn skip_line_comment(&mut self) -> bool {
        let rest = self.cursor.remaining();
        let line_end = rest.find('\n').unwrap_or(rest.len());

        match rest[2..line_end].find("*/") {
            Some(idx) => {
                // "/*" + body + "*/"
                self.cursor.advance_bytes(2 + idx + 2);
                true
            },
            None => false,
        }
    }
}
