//! Declaration parsing.
//!
//! Declarations come first in a CPL program and are the only thing that
//! populates the symbol table.

use cpqc_lex::TokenKind;
use cpqc_util::ScalarType;

use crate::Parser;

impl<'a> Parser<'a> {
    /// `declarations -> declarations declaration | ε`
    ///
    /// Declarations always start with an identifier; the statement block
    /// that follows starts with `{`, so one token decides.
    pub(crate) fn parse_declarations(&mut self) {
        while matches!(self.current.kind, TokenKind::Ident(_)) {
            self.parse_declaration();
        }
    }

    /// `declaration -> idlist ':' type ';'`
    ///
    /// Every identifier in the list is entered into the symbol table with
    /// the declared type. A duplicate is reported and the first
    /// declaration stays in effect.
    fn parse_declaration(&mut self) {
        let line = self.current.line;

        let ids = match self.parse_idlist() {
            Some(ids) => ids,
            None => {
                self.recover_to_sync_point();
                return;
            },
        };

        if self.expect(TokenKind::Colon).is_none() {
            self.recover_to_sync_point();
            return;
        }

        let ty = match self.parse_type() {
            Some(ty) => ty,
            None => {
                self.recover_to_sync_point();
                return;
            },
        };

        if self.expect(TokenKind::Semicolon).is_none() {
            self.recover_to_sync_point();
            return;
        }

        for id in ids {
            if let Err(err) = self.symbols.declare(&id, ty) {
                self.semantic_error(err.to_string(), line);
            }
        }
    }

    /// `idlist -> idlist ',' ID | ID`
    fn parse_idlist(&mut self) -> Option<Vec<String>> {
        let mut ids = vec![self.parse_ident()?];
        while self.match_token(TokenKind::Comma) {
            ids.push(self.parse_ident()?);
        }
        Some(ids)
    }

    /// `type -> 'int' | 'float'`
    fn parse_type(&mut self) -> Option<ScalarType> {
        match self.current.kind {
            TokenKind::Int => {
                self.advance();
                Some(ScalarType::Int)
            },
            TokenKind::Float => {
                self.advance();
                Some(ScalarType::Float)
            },
            _ => {
                self.error_unexpected();
                None
            },
        }
    }
}
