//! Operands of QUAD instructions.

use cpqc_util::ScalarType;

/// A value carried up the parse: a textual name plus its scalar type.
///
/// The name is a declared identifier, a temporary (`t1`, `t2`, ...), or a
/// numeric literal lexeme. An operand never owns storage; it is a plain
/// value record.
#[derive(Clone, Debug, PartialEq)]
pub struct Operand {
    /// The textual name as it appears in emitted instructions.
    pub name: String,
    /// The scalar type of the value.
    pub ty: ScalarType,
}

impl Operand {
    /// Creates an operand.
    pub fn new(name: impl Into<String>, ty: ScalarType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }

    /// Creates an operand for a numeric literal lexeme.
    ///
    /// A lexeme containing `.` is a real; anything else is an integer.
    pub fn literal(lexeme: impl Into<String>) -> Self {
        let name = lexeme.into();
        let ty = if name.contains('.') {
            ScalarType::Float
        } else {
            ScalarType::Int
        };
        Self { name, ty }
    }
}
