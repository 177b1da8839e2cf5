//! One- and two-character operator lexing.
//!
//! Longest match: `==`, `!=`, `<=`, `>=`, `||`, `&&` are tried before
//! their one-character prefixes. A lone `&` or `|` is not a CPL token.

use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes `=` or `==`.
    pub(crate) fn lex_equals(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            TokenKind::EqEq
        } else {
            TokenKind::Eq
        }
    }

    /// Lexes `!` or `!=`.
    pub(crate) fn lex_bang(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            TokenKind::NotEq
        } else {
            TokenKind::Not
        }
    }

    /// Lexes `<` or `<=`.
    pub(crate) fn lex_less(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            TokenKind::LtEq
        } else {
            TokenKind::Lt
        }
    }

    /// Lexes `>` or `>=`.
    pub(crate) fn lex_greater(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            TokenKind::GtEq
        } else {
            TokenKind::Gt
        }
    }

    /// Lexes `&&`; a lone `&` is a lexical error.
    pub(crate) fn lex_ampersand(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('&') {
            TokenKind::AndAnd
        } else {
            self.report_error("lexical error - bad character &".to_string());
            TokenKind::Invalid('&')
        }
    }

    /// Lexes `||`; a lone `|` is a lexical error.
    pub(crate) fn lex_pipe(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_char('|') {
            TokenKind::OrOr
        } else {
            self.report_error("lexical error - bad character |".to_string());
            TokenKind::Invalid('|')
        }
    }
}
