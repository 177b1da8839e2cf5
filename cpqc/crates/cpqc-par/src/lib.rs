//! cpqc-par - Parser and code generator for CPL.
//!
//! This is a syntax-directed translator: the parser recognizes the CPL
//! grammar by recursive descent and emits QUAD instructions as it reduces,
//! with no syntax tree in between. The parser owns the scanner and pulls
//! one token at a time; it also owns the symbol table and the program
//! listing, so all compilation state lives in one place.
//!
//! Grammar layering (lowest to highest binding):
//!
//! | Level | Construct |
//! |-------|----------------------------------|
//! | 1 | `boolexpr` - `\|\|` |
//! | 2 | `boolterm` - `&&` |
//! | 3 | `boolfactor` - relational operators, `!(...)` |
//! | 4 | `expression` - `+`, `-` |
//! | 5 | `term` - `*`, `/` |
//! | 6 | `factor` - parentheses, casts, identifiers, literals |
//!
//! Forward jumps for `if` and `while` are emitted in a single pass by
//! allocating the target label before the branch body and emitting the
//! label's definition site afterwards; the labels are plain local
//! variables in the statement parsers.
//!
//! Errors never abort the parse. Syntax errors skip ahead to a statement
//! boundary; semantic fallbacks (undeclared identifiers read as `float`,
//! duplicate declarations keep the first entry) let one mistake produce
//! one diagnostic instead of a cascade.
//!
//! # Example
//!
//! ```
//! use cpqc_par::Parser;
//! use cpqc_util::Handler;
//!
//! let handler = Handler::new();
//! let program = Parser::new("x: int; { x = 2 + 3; }", &handler).parse_program();
//!
//! assert!(!handler.has_errors());
//! assert_eq!(program.code(), ["IADD t1 2 3", "IASN x t1", "HALT"]);
//! ```

mod decl;
mod edge_cases;
mod expr;
mod stmt;

use cpqc_lex::{Lexer, Token, TokenKind};
use cpqc_qud::{Operand, QuadProgram, SymbolTable};
use cpqc_util::{Handler, ScalarType};

/// The CPL parser with its embedded code generator.
pub struct Parser<'a> {
    /// Token source, driven synchronously one token at a time.
    lexer: Lexer<'a>,

    /// One-token lookahead.
    current: Token,

    /// Shared diagnostic sink.
    handler: &'a Handler,

    /// Declared identifiers and their types.
    symbols: SymbolTable,

    /// The QUAD listing under construction.
    program: QuadProgram,
}

impl<'a> Parser<'a> {
    /// Creates a parser over the given source code.
    pub fn new(source: &'a str, handler: &'a Handler) -> Self {
        let mut lexer = Lexer::new(source, handler);
        let current = lexer.next_token();
        Self {
            lexer,
            current,
            handler,
            symbols: SymbolTable::new(),
            program: QuadProgram::new(),
        }
    }

    /// Parses a complete CPL program and returns the finished listing.
    ///
    /// `program -> declarations stmt_block`
    ///
    /// The listing always ends in `HALT`, even when errors were reported;
    /// the driver checks the handler before deciding whether anything gets
    /// written.
    pub fn parse_program(mut self) -> QuadProgram {
        self.parse_declarations();
        let _ = self.parse_stmt_block();

        if self.current.kind != TokenKind::Eof {
            self.error_unexpected();
        }

        self.program.emit_halt();
        self.program
    }

    // =========================================================================
    // TOKEN STREAM HELPERS
    // =========================================================================

    /// Advances to the next token.
    fn advance(&mut self) {
        self.current = self.lexer.next_token();
    }

    /// Returns true if the current token has the given kind.
    fn check(&self, kind: &TokenKind) -> bool {
        self.current.kind == *kind
    }

    /// Consumes the current token if it has the given kind.
    fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.current.kind == kind {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Expects a specific token, reporting a syntax error otherwise.
    fn expect(&mut self, kind: TokenKind) -> Option<()> {
        if self.match_token(kind) {
            Some(())
        } else {
            self.error_unexpected();
            None
        }
    }

    /// Parses one identifier, returning its name.
    fn parse_ident(&mut self) -> Option<String> {
        if let TokenKind::Ident(name) = &self.current.kind {
            let name = name.clone();
            self.advance();
            Some(name)
        } else {
            self.error_unexpected();
            None
        }
    }

    // =========================================================================
    // ERROR REPORTING AND RECOVERY
    // =========================================================================

    /// Reports a syntax error at the current token.
    fn error_unexpected(&mut self) {
        self.handler.error(
            format!("unrecognized token {}", self.current.kind),
            Some(self.current.line),
        );
    }

    /// Reports a semantic error at the given source line.
    fn semantic_error(&self, message: String, line: u32) {
        self.handler.error(message, Some(line));
    }

    /// Skips ahead to a statement boundary after a syntax error.
    ///
    /// A semicolon is consumed; a closing brace or end of input is left
    /// for the enclosing construct.
    fn recover_to_sync_point(&mut self) {
        loop {
            match self.current.kind {
                TokenKind::Semicolon => {
                    self.advance();
                    return;
                },
                TokenKind::RBrace | TokenKind::Eof => return,
                _ => self.advance(),
            }
        }
    }

    // =========================================================================
    // SHARED SEMANTIC ACTIONS
    // =========================================================================

    /// Looks up a declared identifier's type.
    ///
    /// An undeclared identifier is reported once and read as `float`, so
    /// the checks downstream stay quiet about it.
    fn lookup_symbol(&self, name: &str, line: u32) -> ScalarType {
        match self.symbols.lookup(name) {
            Some(ty) => ty,
            None => {
                self.semantic_error(format!("{} not in symbol table", name), line);
                ScalarType::Float
            },
        }
    }

    /// Converts `operand` to `target` through a fresh temporary.
    fn convert(&mut self, target: ScalarType, operand: &Operand) -> Operand {
        let temp = self.program.fresh_temp(&self.symbols);
        self.program.emit_convert(target, &temp, &operand.name);
        Operand::new(temp, target)
    }

    /// Returns `operand` as-is if it already has type `target`, otherwise
    /// emits the conversion.
    fn promote(&mut self, target: ScalarType, operand: Operand) -> Operand {
        if operand.ty == target {
            operand
        } else {
            self.convert(target, &operand)
        }
    }

    /// The common three-address pattern.
    ///
    /// Allocates the destination temporary, unifies the operand types,
    /// promotes whichever side needs it, and emits
    /// `{I|R}{mnemonic} dest lhs rhs`. The destination is allocated before
    /// any promotion temporaries, which fixes the numbering.
    fn three_address(&mut self, mnemonic: &str, lhs: Operand, rhs: Operand) -> Operand {
        let temp = self.program.fresh_temp(&self.symbols);
        let ty = ScalarType::unify(lhs.ty, rhs.ty);
        let lhs = self.promote(ty, lhs);
        let rhs = self.promote(ty, rhs);
        self.program.emit_binary(ty, mnemonic, &temp, &lhs.name, &rhs.name);
        Operand::new(temp, ty)
    }
}
