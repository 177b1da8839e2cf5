//! Expression parsing and code emission.
//!
//! Two layers share this file: the boolean connective layer
//! (`boolexpr` / `boolterm` / `boolfactor`) and the arithmetic layer
//! (`expression` / `term` / `factor`). Every level is left-associative
//! and parses with a plain loop; the grammar has no precedence conflicts
//! beyond the layering itself.
//!
//! Boolean values are ordinary integers: relational instructions produce
//! 0 or 1, `X || Y` is `X + Y > 0`, `X && Y` is `X + Y == 2`, and
//! `!(B)` is `B != 1`. There is no short-circuit evaluation.

use cpqc_lex::TokenKind;
use cpqc_qud::{ArithOp, Operand, RelOp};
use cpqc_util::ScalarType;

use crate::Parser;

impl<'a> Parser<'a> {
    // =========================================================================
    // BOOLEAN LAYER
    // =========================================================================

    /// `boolexpr -> boolexpr OR boolterm | boolterm`
    pub(crate) fn parse_boolexpr(&mut self) -> Option<Operand> {
        let mut lhs = self.parse_boolterm()?;
        while self.match_token(TokenKind::OrOr) {
            let rhs = self.parse_boolterm()?;
            lhs = self.connective(lhs, rhs, "GRT", "0");
        }
        Some(lhs)
    }

    /// `boolterm -> boolterm AND boolfactor | boolfactor`
    fn parse_boolterm(&mut self) -> Option<Operand> {
        let mut lhs = self.parse_boolfactor()?;
        while self.match_token(TokenKind::AndAnd) {
            let rhs = self.parse_boolfactor()?;
            lhs = self.connective(lhs, rhs, "EQL", "2");
        }
        Some(lhs)
    }

    /// `boolfactor -> NOT '(' boolexpr ')' | expression RELOP expression`
    fn parse_boolfactor(&mut self) -> Option<Operand> {
        if self.match_token(TokenKind::Not) {
            self.expect(TokenKind::LParen)?;
            let value = self.parse_boolexpr()?;
            self.expect(TokenKind::RParen)?;
            // Negation on the 0/1 encoding: b != 1.
            return Some(self.three_address("NQL", value, Operand::literal("1")));
        }

        let lhs = self.parse_expression()?;
        let op = self.parse_relop()?;
        let rhs = self.parse_expression()?;
        Some(self.relational(op, lhs, rhs))
    }

    /// Maps the current token to a relational operator.
    fn parse_relop(&mut self) -> Option<RelOp> {
        let op = match self.current.kind {
            TokenKind::EqEq => RelOp::Eq,
            TokenKind::NotEq => RelOp::Ne,
            TokenKind::Lt => RelOp::Lt,
            TokenKind::Gt => RelOp::Gt,
            TokenKind::LtEq => RelOp::Le,
            TokenKind::GtEq => RelOp::Ge,
            _ => {
                self.error_unexpected();
                return None;
            },
        };
        self.advance();
        Some(op)
    }

    /// Emits a relational comparison; the result is an integer 0/1.
    ///
    /// The four direct operators are one instruction. `<=` and `>=` have
    /// no instruction, so both halves are compared against the same
    /// promoted operands and their results summed: the sum is non-zero
    /// exactly when either comparison held.
    fn relational(&mut self, op: RelOp, lhs: Operand, rhs: Operand) -> Operand {
        let temp = self.program.fresh_temp(&self.symbols);
        let ty = ScalarType::unify(lhs.ty, rhs.ty);
        let lhs = self.promote(ty, lhs);
        let rhs = self.promote(ty, rhs);

        if let Some(mnemonic) = op.mnemonic() {
            self.program
                .emit_binary(ty, mnemonic, &temp, &lhs.name, &rhs.name);
        } else if let Some((first, second)) = op.halves() {
            let temp2 = self.program.fresh_temp(&self.symbols);
            self.program
                .emit_binary(ty, first, &temp, &lhs.name, &rhs.name);
            self.program
                .emit_binary(ty, second, &temp2, &lhs.name, &rhs.name);
            self.program.emit_binary(ty, "ADD", &temp, &temp, &temp2);
        }

        Operand::new(temp, ScalarType::Int)
    }

    /// Emits a boolean connective over 0/1 operands.
    ///
    /// The operands are summed, then the sum is tested: `GRT 0` for OR,
    /// `EQL 2` for AND.
    fn connective(
        &mut self,
        lhs: Operand,
        rhs: Operand,
        test_mnemonic: &str,
        test_literal: &str,
    ) -> Operand {
        let temp = self.program.fresh_temp(&self.symbols);
        let ty = ScalarType::unify(lhs.ty, rhs.ty);
        let lhs = self.promote(ty, lhs);
        let rhs = self.promote(ty, rhs);

        self.program
            .emit_binary(ty, "ADD", &temp, &lhs.name, &rhs.name);
        self.program
            .emit_binary(ty, test_mnemonic, &temp, &temp, test_literal);

        Operand::new(temp, ty)
    }

    // =========================================================================
    // ARITHMETIC LAYER
    // =========================================================================

    /// `expression -> expression ADDOP term | term`
    pub(crate) fn parse_expression(&mut self) -> Option<Operand> {
        let mut lhs = self.parse_term()?;
        loop {
            let op = match self.current.kind {
                TokenKind::Plus => ArithOp::Add,
                TokenKind::Minus => ArithOp::Sub,
                _ => break,
            };
            self.advance();
            let rhs = self.parse_term()?;
            lhs = self.three_address(op.mnemonic(), lhs, rhs);
        }
        Some(lhs)
    }

    /// `term -> term MULOP factor | factor`
    fn parse_term(&mut self) -> Option<Operand> {
        let mut lhs = self.parse_factor()?;
        loop {
            let op = match self.current.kind {
                TokenKind::Star => ArithOp::Mul,
                TokenKind::Slash => ArithOp::Div,
                _ => break,
            };
            self.advance();
            let rhs = self.parse_factor()?;
            lhs = self.three_address(op.mnemonic(), lhs, rhs);
        }
        Some(lhs)
    }

    /// `factor -> '(' expression ')' | CAST '(' expression ')' | ID | NUM`
    fn parse_factor(&mut self) -> Option<Operand> {
        match self.current.kind.clone() {
            TokenKind::LParen => {
                self.advance();
                let value = self.parse_expression()?;
                self.expect(TokenKind::RParen)?;
                Some(value)
            },
            TokenKind::Cast(target) => {
                let line = self.current.line;
                self.advance();
                self.expect(TokenKind::LParen)?;
                let value = self.parse_expression()?;
                self.expect(TokenKind::RParen)?;
                Some(self.cast(target, value, line))
            },
            TokenKind::Ident(name) => {
                let line = self.current.line;
                self.advance();
                let ty = self.lookup_symbol(&name, line);
                Some(Operand::new(name, ty))
            },
            TokenKind::Num(lexeme) => {
                self.advance();
                Some(Operand::literal(lexeme))
            },
            _ => {
                self.error_unexpected();
                None
            },
        }
    }

    /// `factor -> CAST '(' expression ')'`
    ///
    /// A cast to the type the expression already has emits nothing but a
    /// warning; otherwise the conversion goes through a fresh temporary.
    fn cast(&mut self, target: ScalarType, value: Operand, line: u32) -> Operand {
        if value.ty == target {
            self.handler
                .warning(format!("redundant cast to {}", target), Some(line));
            value
        } else {
            self.convert(target, &value)
        }
    }
}
