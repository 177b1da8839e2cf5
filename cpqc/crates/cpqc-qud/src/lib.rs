//! cpqc-qud - The QUAD intermediate representation.
//!
//! QUAD is a linear three-address code. A program is an ordered listing of
//! instruction lines ending in `HALT`; operands are declared identifiers,
//! compiler temporaries (`t1`, `t2`, ...), or numeric literal lexemes, and
//! control flow is expressed with labels (`L1`, `L2`, ...) targeted by
//! `JUMP` and `JMPZ`.
//!
//! This crate holds the IR vocabulary ([`ArithOp`], [`RelOp`],
//! [`Operand`]) and the shared state the parser mutates while emitting
//! code: the [`SymbolTable`] and the [`QuadProgram`] listing with its
//! temporary and label allocators. There is no builder pass and no
//! back-patching - the listing is append-only, and forward jumps work by
//! allocating a label name first and emitting its definition site later.

mod operand;
mod ops;
mod program;
mod symtab;

pub use operand::Operand;
pub use ops::{ArithOp, RelOp};
pub use program::QuadProgram;
pub use symtab::{SymbolError, SymbolTable};
