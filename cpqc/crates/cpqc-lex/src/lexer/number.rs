//! Numeric literal lexing.

use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a numeric literal.
    ///
    /// The form is one or more digits, optionally followed by `.` and zero
    /// or more digits (`5`, `5.`, `5.25`). A leading `.` is not a number,
    /// and exponents do not exist in CPL. The lexeme is preserved verbatim;
    /// whether it is an integer or a real is decided later by the presence
    /// of the `.`.
    pub(crate) fn lex_number(&mut self) -> TokenKind {
        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }

        if self.cursor.current_char() == '.' {
            self.cursor.advance();
            while self.cursor.current_char().is_ascii_digit() {
                self.cursor.advance();
            }
        }

        TokenKind::Num(self.cursor.slice_from(self.token_start).to_string())
    }
}

#[cfg(test)]
mod tests {
    use crate::token::TokenKind;
    use crate::Lexer;
    use cpqc_util::Handler;

    fn kinds(source: &str) -> Vec<TokenKind> {
        let handler = Handler::new();
        Lexer::new(source, &handler).map(|t| t.kind).collect()
    }

    #[test]
    fn test_integer_literal() {
        assert_eq!(kinds("42"), vec![TokenKind::Num("42".into())]);
    }

    #[test]
    fn test_real_literal() {
        assert_eq!(kinds("3.25"), vec![TokenKind::Num("3.25".into())]);
    }

    #[test]
    fn test_trailing_dot_is_one_literal() {
        assert_eq!(kinds("5."), vec![TokenKind::Num("5.".into())]);
    }

    #[test]
    fn test_leading_dot_is_not_a_number() {
        let handler = Handler::new();
        let toks: Vec<_> = Lexer::new(".5", &handler).collect();
        assert_eq!(toks[0].kind, TokenKind::Invalid('.'));
        assert_eq!(toks[1].kind, TokenKind::Num("5".into()));
        assert!(handler.has_errors());
    }

    #[test]
    fn test_second_dot_ends_literal() {
        let handler = Handler::new();
        let toks: Vec<_> = Lexer::new("1.2.3", &handler).collect();
        assert_eq!(toks[0].kind, TokenKind::Num("1.2".into()));
        assert_eq!(toks[1].kind, TokenKind::Invalid('.'));
        assert_eq!(toks[2].kind, TokenKind::Num("3".into()));
    }

    #[test]
    fn test_number_then_identifier() {
        assert_eq!(
            kinds("10x"),
            vec![TokenKind::Num("10".into()), TokenKind::Ident("x".into())]
        );
    }
}
