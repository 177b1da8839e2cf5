//! Statement parsing and code emission.
//!
//! The control-flow statements emit their jumps in a single pass: the
//! target label is allocated (and the jump to it emitted) before the
//! guarded code is parsed, and the label's definition site is emitted
//! afterwards. No already-emitted line is ever touched.

use cpqc_lex::TokenKind;
use cpqc_util::ScalarType;

use crate::Parser;

impl<'a> Parser<'a> {
    /// `stmt_block -> '{' stmtlist '}'`
    pub(crate) fn parse_stmt_block(&mut self) -> Option<()> {
        self.expect(TokenKind::LBrace)?;

        // stmtlist -> stmtlist stmt | ε
        while !self.check(&TokenKind::RBrace) && !self.check(&TokenKind::Eof) {
            self.parse_stmt();
        }

        self.expect(TokenKind::RBrace)
    }

    /// `stmt -> assignment_stmt | input_stmt | output_stmt
    ///        | if_stmt | while_stmt | stmt_block`
    fn parse_stmt(&mut self) {
        let parsed = match &self.current.kind {
            TokenKind::Ident(_) => self.parse_assignment_stmt(),
            TokenKind::Input => self.parse_input_stmt(),
            TokenKind::Output => self.parse_output_stmt(),
            TokenKind::If => self.parse_if_stmt(),
            TokenKind::While => self.parse_while_stmt(),
            TokenKind::LBrace => self.parse_stmt_block(),
            _ => {
                self.error_unexpected();
                None
            },
        };

        if parsed.is_none() {
            self.recover_to_sync_point();
        }
    }

    /// `assignment_stmt -> ID '=' expression ';'`
    ///
    /// Widening (`float` variable, integer expression) converts the value
    /// implicitly. Narrowing is a semantic error; the assignment is still
    /// emitted so the listing stays readable, and the error flag keeps it
    /// from ever reaching a `.qud` file.
    fn parse_assignment_stmt(&mut self) -> Option<()> {
        let line = self.current.line;
        let id = self.parse_ident()?;
        self.expect(TokenKind::Eq)?;
        let value = self.parse_expression()?;
        self.expect(TokenKind::Semicolon)?;

        let id_ty = self.lookup_symbol(&id, line);
        let value = match (id_ty, value.ty) {
            (ScalarType::Int, ScalarType::Float) => {
                self.semantic_error(
                    format!(
                        "can't assign {} of type {} into {} of type {}",
                        value.name, value.ty, id, id_ty
                    ),
                    line,
                );
                value
            },
            (ScalarType::Float, ScalarType::Int) => self.convert(ScalarType::Float, &value),
            _ => value,
        };

        self.program.emit_assign(id_ty, &id, &value.name);
        Some(())
    }

    /// `input_stmt -> 'input' '(' ID ')' ';'`
    fn parse_input_stmt(&mut self) -> Option<()> {
        let line = self.current.line;
        self.advance(); // 'input'
        self.expect(TokenKind::LParen)?;
        let id = self.parse_ident()?;
        self.expect(TokenKind::RParen)?;
        self.expect(TokenKind::Semicolon)?;

        let ty = self.lookup_symbol(&id, line);
        self.program.emit_input(ty, &id);
        Some(())
    }

    /// `output_stmt -> 'output' '(' expression ')' ';'`
    fn parse_output_stmt(&mut self) -> Option<()> {
        self.advance(); // 'output'
        self.expect(TokenKind::LParen)?;
        let value = self.parse_expression()?;
        self.expect(TokenKind::RParen)?;
        self.expect(TokenKind::Semicolon)?;

        self.program.emit_print(value.ty, &value.name);
        Some(())
    }

    /// `if_stmt -> 'if' '(' boolexpr ')' stmt 'else' stmt`
    ///
    /// The else branch is mandatory. Emitted flow:
    ///
    /// ```text
    ///   <code for B producing b>
    ///   JMPZ L_false b
    ///   <then branch>
    ///   JUMP L_end
    ///   L_false:
    ///   <else branch>
    ///   L_end:
    /// ```
    fn parse_if_stmt(&mut self) -> Option<()> {
        self.advance(); // 'if'
        self.expect(TokenKind::LParen)?;
        let cond = self.parse_boolexpr()?;
        self.expect(TokenKind::RParen)?;

        let false_label = self.program.fresh_label();
        self.program.emit_jump_zero(&false_label, &cond.name);

        self.parse_stmt();

        let end_label = self.program.fresh_label();
        self.program.emit_jump(&end_label);

        self.expect(TokenKind::Else)?;
        self.program.emit_label(&false_label);

        self.parse_stmt();

        self.program.emit_label(&end_label);
        Some(())
    }

    /// `while_stmt -> 'while' '(' boolexpr ')' stmt`
    ///
    /// Emitted flow:
    ///
    /// ```text
    ///   L_top:
    ///   <code for B producing b>
    ///   JMPZ L_out b
    ///   <body>
    ///   JUMP L_top
    ///   L_out:
    /// ```
    fn parse_while_stmt(&mut self) -> Option<()> {
        self.advance(); // 'while'

        let top_label = self.program.fresh_label();
        self.program.emit_label(&top_label);

        self.expect(TokenKind::LParen)?;
        let cond = self.parse_boolexpr()?;
        self.expect(TokenKind::RParen)?;

        let out_label = self.program.fresh_label();
        self.program.emit_jump_zero(&out_label, &cond.name);

        self.parse_stmt();

        self.program.emit_jump(&top_label);
        self.program.emit_label(&out_label);
        Some(())
    }
}
