//! Identifier, keyword, and cast lexing.

use cpqc_util::ScalarType;

use crate::token::{keyword_from_ident, TokenKind};
use crate::Lexer;

/// The two cast forms are fixed strings; the target type sits at a fixed
/// offset inside them.
const CAST_INT: &str = "static_cast<int>";
const CAST_FLOAT: &str = "static_cast<float>";

impl<'a> Lexer<'a> {
    /// Lexes an identifier, a keyword, or one of the two cast forms.
    ///
    /// `static_cast<int>` and `static_cast<float>` are matched before
    /// identifier lexing; a CPL identifier cannot contain `_` or `<`, so
    /// any other `static...` prefix falls back to ordinary identifier
    /// rules (and the stray characters become lexical errors downstream).
    pub(crate) fn lex_identifier_or_cast(&mut self) -> TokenKind {
        let rest = self.cursor.remaining();
        if rest.starts_with(CAST_INT) {
            self.cursor.advance_bytes(CAST_INT.len());
            return TokenKind::Cast(ScalarType::Int);
        }
        if rest.starts_with(CAST_FLOAT) {
            self.cursor.advance_bytes(CAST_FLOAT.len());
            return TokenKind::Cast(ScalarType::Float);
        }

        self.lex_identifier()
    }

    /// Lexes an identifier or keyword.
    ///
    /// Identifiers are a letter followed by letters or digits. After
    /// reading the identifier, checks the keyword table.
    fn lex_identifier(&mut self) -> TokenKind {
        while self.cursor.current_char().is_ascii_alphanumeric() {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(self.token_start);

        keyword_from_ident(text).unwrap_or_else(|| TokenKind::Ident(text.to_string()))
    }
}
