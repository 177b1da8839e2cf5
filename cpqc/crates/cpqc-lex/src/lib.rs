//! cpqc-lex - Lexical analyzer for the CPL source language.
//!
//! The scanner turns a CPL source string into a stream of [`Token`]s, each
//! tagged with the source line it started on. Whitespace and single-line
//! `/* ... */` comments are stripped; newlines advance the line counter.
//!
//! CPL's lexical vocabulary is small: seven keywords, six relational
//! operators, the four arithmetic operators, `||` / `&&` / `!`, the two
//! fixed `static_cast<...>` forms, identifiers (a letter followed by
//! letters and digits - no underscore), unsigned numeric literals, and
//! eight punctuation characters.
//!
//! Errors never stop the scan: an unrecognized character is reported on the
//! shared diagnostic handler, skipped, and surfaced as
//! [`TokenKind::Invalid`] so the parser sees that something was there.
//!
//! # Example
//!
//! ```
//! use cpqc_lex::{Lexer, TokenKind};
//! use cpqc_util::Handler;
//!
//! let handler = Handler::new();
//! let mut lexer = Lexer::new("a: int;", &handler);
//!
//! assert_eq!(lexer.next_token().kind, TokenKind::Ident("a".into()));
//! assert_eq!(lexer.next_token().kind, TokenKind::Colon);
//! assert_eq!(lexer.next_token().kind, TokenKind::Int);
//! assert_eq!(lexer.next_token().kind, TokenKind::Semicolon);
//! assert_eq!(lexer.next_token().kind, TokenKind::Eof);
//! ```

pub mod cursor;
mod edge_cases;
mod lexer;
pub mod token;

pub use lexer::Lexer;
pub use token::{keyword_from_ident, Token, TokenKind};
