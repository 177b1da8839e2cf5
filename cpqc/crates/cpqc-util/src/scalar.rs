//! Scalar types of the CPL source language.
//!
//! CPL has exactly two numeric types, `int` and `float`. Every declared
//! variable, literal, and expression result is one of the two, and the
//! only implicit conversion is the widening promotion `int` -> `float`.

use std::fmt;

/// A CPL scalar type.
///
/// Used both for declared identifiers (via the symbol table) and for
/// expression results carried up the parse.
///
/// # Examples
///
/// ```
/// use cpqc_util::ScalarType;
///
/// assert_eq!(ScalarType::Int.prefix(), 'I');
/// assert_eq!(ScalarType::Float.prefix(), 'R');
/// assert_eq!(ScalarType::unify(ScalarType::Int, ScalarType::Float), ScalarType::Float);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScalarType {
    /// `int` - integer scalar
    Int,
    /// `float` - real scalar
    Float,
}

impl ScalarType {
    /// Returns the opcode prefix used for this type in QUAD instructions.
    ///
    /// Integer instructions are prefixed `I`, real instructions `R`
    /// (e.g. `IADD` vs `RADD`).
    #[inline]
    pub const fn prefix(self) -> char {
        match self {
            ScalarType::Int => 'I',
            ScalarType::Float => 'R',
        }
    }

    /// Returns the CPL surface name of this type.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            ScalarType::Int => "int",
            ScalarType::Float => "float",
        }
    }

    /// Unifies two operand types for a binary operation.
    ///
    /// Equal types unify to themselves; differing types unify to `Float`,
    /// which is what drives the implicit `int` -> `float` promotion.
    #[inline]
    pub const fn unify(a: ScalarType, b: ScalarType) -> ScalarType {
        match (a, b) {
            (ScalarType::Int, ScalarType::Int) => ScalarType::Int,
            _ => ScalarType::Float,
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
