//! Core lexer implementation.
//!
//! This module contains the main `Lexer` struct, the dispatch on the first
//! character of each token, and lexical-error recovery.

use cpqc_util::Handler;

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// Lexer for the CPL source language.
///
/// The lexer yields one token per call to [`next_token`](Lexer::next_token);
/// the parser drives it synchronously, one token at a time. All errors are
/// recorded on the shared diagnostic handler and the scan continues past
/// them.
pub struct Lexer<'a> {
    /// Character cursor over the source text.
    pub(crate) cursor: Cursor<'a>,

    /// Shared diagnostic sink.
    handler: &'a Handler,

    /// Starting byte position of the current token.
    pub(crate) token_start: usize,

    /// Line the current token started on (1-based).
    token_start_line: u32,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer over the given source code.
    pub fn new(source: &'a str, handler: &'a Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            token_start: 0,
            token_start_line: 1,
        }
    }

    /// Returns the next token from the source code.
    ///
    /// Skips whitespace and comments, then dispatches on the first
    /// character. At end of input this returns [`TokenKind::Eof`] forever.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace_and_comments();

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();

        if self.cursor.is_at_end() {
            return Token::new(TokenKind::Eof, self.token_start_line);
        }

        let kind = match self.cursor.current_char() {
            '(' => {
                self.cursor.advance();
                TokenKind::LParen
            },
            ')' => {
                self.cursor.advance();
                TokenKind::RParen
            },
            '{' => {
                self.cursor.advance();
                TokenKind::LBrace
            },
            '}' => {
                self.cursor.advance();
                TokenKind::RBrace
            },
            ',' => {
                self.cursor.advance();
                TokenKind::Comma
            },
            ':' => {
                self.cursor.advance();
                TokenKind::Colon
            },
            ';' => {
                self.cursor.advance();
                TokenKind::Semicolon
            },
            '+' => {
                self.cursor.advance();
                TokenKind::Plus
            },
            '-' => {
                self.cursor.advance();
                TokenKind::Minus
            },
            '*' => {
                self.cursor.advance();
                TokenKind::Star
            },
            // Comment starts were consumed above, so a slash here is MULOP.
            '/' => {
                self.cursor.advance();
                TokenKind::Slash
            },
            '=' => self.lex_equals(),
            '!' => self.lex_bang(),
            '<' => self.lex_less(),
            '>' => self.lex_greater(),
            '&' => self.lex_ampersand(),
            '|' => self.lex_pipe(),

            c if c.is_ascii_alphabetic() => self.lex_identifier_or_cast(),

            c if c.is_ascii_digit() => self.lex_number(),

            c => {
                self.report_error(format!("lexical error - bad character {}", c));
                self.cursor.advance();
                TokenKind::Invalid(c)
            },
        };

        Token::new(kind, self.token_start_line)
    }

    /// Records a lexical error at the current source line.
    pub(crate) fn report_error(&self, message: String) {
        self.handler.error(message, Some(self.cursor.line()));
    }
}

/// The lexer is an iterator over tokens, fused at end of input.
impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.kind == TokenKind::Eof {
            None
        } else {
            Some(token)
        }
    }
}
