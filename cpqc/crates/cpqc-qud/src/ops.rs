//! QUAD opcode mnemonics for the CPL operators.

/// An arithmetic operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArithOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl ArithOp {
    /// Returns the QUAD mnemonic, without the `I`/`R` type prefix.
    #[inline]
    pub const fn mnemonic(self) -> &'static str {
        match self {
            ArithOp::Add => "ADD",
            ArithOp::Sub => "SUB",
            ArithOp::Mul => "MLT",
            ArithOp::Div => "DIV",
        }
    }
}

/// A relational operator.
///
/// QUAD has comparison instructions only for `==`, `!=`, `<`, and `>`.
/// `<=` and `>=` have no instruction of their own; they decompose into the
/// two comparisons of [`halves`](RelOp::halves) whose 0/1 results are
/// summed, making the sum non-zero exactly when either comparison held.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RelOp {
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `<=`
    Le,
    /// `>=`
    Ge,
}

impl RelOp {
    /// Returns the direct QUAD mnemonic, or `None` for the two composite
    /// operators.
    #[inline]
    pub const fn mnemonic(self) -> Option<&'static str> {
        match self {
            RelOp::Eq => Some("EQL"),
            RelOp::Ne => Some("NQL"),
            RelOp::Lt => Some("LSS"),
            RelOp::Gt => Some("GRT"),
            RelOp::Le | RelOp::Ge => None,
        }
    }

    /// Decomposes a composite operator into the mnemonics of its halves.
    ///
    /// `<=` is `<` plus `==`, `>=` is `>` plus `==`. Returns `None` for
    /// operators that map to a single instruction.
    #[inline]
    pub const fn halves(self) -> Option<(&'static str, &'static str)> {
        match self {
            RelOp::Le => Some(("LSS", "EQL")),
            RelOp::Ge => Some(("GRT", "EQL")),
            _ => None,
        }
    }
}
