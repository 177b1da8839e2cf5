//! Token definitions for the CPL language.

use cpqc_util::ScalarType;
use std::fmt;

/// A lexical token: its kind plus the source line it started on.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// What the token is.
    pub kind: TokenKind,
    /// Source line the token started on (1-based).
    pub line: u32,
}

impl Token {
    /// Creates a new token.
    pub fn new(kind: TokenKind, line: u32) -> Self {
        Self { kind, line }
    }
}

/// The lexical categories of CPL.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    // =========================================================================
    // KEYWORDS
    // =========================================================================
    /// "else"
    Else,
    /// "float" - the real scalar type
    Float,
    /// "if"
    If,
    /// "input"
    Input,
    /// "int" - the integer scalar type
    Int,
    /// "output"
    Output,
    /// "while"
    While,

    // =========================================================================
    // RELATIONAL OPERATORS
    // =========================================================================
    /// "=="
    EqEq,
    /// "!="
    NotEq,
    /// "<"
    Lt,
    /// ">"
    Gt,
    /// "<="
    LtEq,
    /// ">="
    GtEq,

    // =========================================================================
    // ARITHMETIC OPERATORS
    // =========================================================================
    /// "+"
    Plus,
    /// "-"
    Minus,
    /// "*"
    Star,
    /// "/"
    Slash,

    // =========================================================================
    // LOGICAL OPERATORS
    // =========================================================================
    /// "||"
    OrOr,
    /// "&&"
    AndAnd,
    /// "!"
    Not,

    // =========================================================================
    // CAST
    // =========================================================================
    /// `static_cast<int>` or `static_cast<float>`.
    ///
    /// The target type is part of the token; the source forms are fixed
    /// strings with no interior whitespace.
    Cast(ScalarType),

    // =========================================================================
    // IDENTIFIERS AND LITERALS
    // =========================================================================
    /// Identifier: a letter followed by letters or digits.
    Ident(String),

    /// Numeric literal, lexeme preserved verbatim.
    ///
    /// A lexeme containing `.` denotes a real, otherwise an integer. The
    /// lexeme is emitted into QUAD instructions unchanged, so it is never
    /// parsed into a machine number here.
    Num(String),

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    /// "("
    LParen,
    /// ")"
    RParen,
    /// "{"
    LBrace,
    /// "}"
    RBrace,
    /// ","
    Comma,
    /// ":"
    Colon,
    /// ";"
    Semicolon,
    /// "=" - assignment
    Eq,

    // =========================================================================
    // SPECIAL
    // =========================================================================
    /// End of input.
    Eof,

    /// An unrecognized character, kept so the parser knows the scanner
    /// skipped something here.
    Invalid(char),
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Else => write!(f, "else"),
            TokenKind::Float => write!(f, "float"),
            TokenKind::If => write!(f, "if"),
            TokenKind::Input => write!(f, "input"),
            TokenKind::Int => write!(f, "int"),
            TokenKind::Output => write!(f, "output"),
            TokenKind::While => write!(f, "while"),
            TokenKind::EqEq => write!(f, "=="),
            TokenKind::NotEq => write!(f, "!="),
            TokenKind::Lt => write!(f, "<"),
            TokenKind::Gt => write!(f, ">"),
            TokenKind::LtEq => write!(f, "<="),
            TokenKind::GtEq => write!(f, ">="),
            TokenKind::Plus => write!(f, "+"),
            TokenKind::Minus => write!(f, "-"),
            TokenKind::Star => write!(f, "*"),
            TokenKind::Slash => write!(f, "/"),
            TokenKind::OrOr => write!(f, "||"),
            TokenKind::AndAnd => write!(f, "&&"),
            TokenKind::Not => write!(f, "!"),
            TokenKind::Cast(ty) => write!(f, "static_cast<{}>", ty),
            TokenKind::Ident(name) => write!(f, "{}", name),
            TokenKind::Num(lexeme) => write!(f, "{}", lexeme),
            TokenKind::LParen => write!(f, "("),
            TokenKind::RParen => write!(f, ")"),
            TokenKind::LBrace => write!(f, "{{"),
            TokenKind::RBrace => write!(f, "}}"),
            TokenKind::Comma => write!(f, ","),
            TokenKind::Colon => write!(f, ":"),
            TokenKind::Semicolon => write!(f, ";"),
            TokenKind::Eq => write!(f, "="),
            TokenKind::Eof => write!(f, "end of input"),
            TokenKind::Invalid(c) => write!(f, "{}", c),
        }
    }
}

/// Looks an identifier up in the keyword table.
///
/// Returns the keyword token if `text` is reserved, `None` if it is an
/// ordinary identifier.
pub fn keyword_from_ident(text: &str) -> Option<TokenKind> {
    match text {
        "else" => Some(TokenKind::Else),
        "float" => Some(TokenKind::Float),
        "if" => Some(TokenKind::If),
        "input" => Some(TokenKind::Input),
        "int" => Some(TokenKind::Int),
        "output" => Some(TokenKind::Output),
        "while" => Some(TokenKind::While),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_table() {
        assert_eq!(keyword_from_ident("if"), Some(TokenKind::If));
        assert_eq!(keyword_from_ident("else"), Some(TokenKind::Else));
        assert_eq!(keyword_from_ident("while"), Some(TokenKind::While));
        assert_eq!(keyword_from_ident("int"), Some(TokenKind::Int));
        assert_eq!(keyword_from_ident("float"), Some(TokenKind::Float));
        assert_eq!(keyword_from_ident("input"), Some(TokenKind::Input));
        assert_eq!(keyword_from_ident("output"), Some(TokenKind::Output));
    }

    #[test]
    fn test_non_keywords_are_identifiers() {
        assert_eq!(keyword_from_ident("iff"), None);
        assert_eq!(keyword_from_ident("Int"), None);
        assert_eq!(keyword_from_ident("x"), None);
    }

    #[test]
    fn test_display_surface_forms() {
        assert_eq!(format!("{}", TokenKind::LtEq), "<=");
        assert_eq!(format!("{}", TokenKind::OrOr), "||");
        assert_eq!(
            format!("{}", TokenKind::Cast(cpqc_util::ScalarType::Float)),
            "static_cast<float>"
        );
        assert_eq!(format!("{}", TokenKind::Ident("abc".into())), "abc");
        assert_eq!(format!("{}", TokenKind::Num("3.5".into())), "3.5");
        assert_eq!(format!("{}", TokenKind::Invalid('@')), "@");
    }
}
