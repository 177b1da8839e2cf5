//! Edge case tests for cpqc-lex.

#[cfg(test)]
mod tests {
    use crate::{Lexer, Token, TokenKind};
    use cpqc_util::Handler;

    fn lex_all(source: &str) -> Vec<Token> {
        let handler = Handler::new();
        Lexer::new(source, &handler).collect()
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex_all(source).into_iter().map(|t| t.kind).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_whitespace_only() {
        assert!(lex_all(" \t\r\n  \n").is_empty());
    }

    #[test]
    fn test_edge_single_char_ident() {
        assert_eq!(kinds("x"), vec![TokenKind::Ident("x".into())]);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        assert_eq!(kinds(&name), vec![TokenKind::Ident(name.clone())]);
    }

    #[test]
    fn test_edge_declaration_line() {
        assert_eq!(
            kinds("a, b: float;"),
            vec![
                TokenKind::Ident("a".into()),
                TokenKind::Comma,
                TokenKind::Ident("b".into()),
                TokenKind::Colon,
                TokenKind::Float,
                TokenKind::Semicolon,
            ]
        );
    }

    #[test]
    fn test_edge_no_spaces_between_tokens() {
        assert_eq!(
            kinds("if(a<b)x=1;"),
            vec![
                TokenKind::If,
                TokenKind::LParen,
                TokenKind::Ident("a".into()),
                TokenKind::Lt,
                TokenKind::Ident("b".into()),
                TokenKind::RParen,
                TokenKind::Ident("x".into()),
                TokenKind::Eq,
                TokenKind::Num("1".into()),
                TokenKind::Semicolon,
            ]
        );
    }

    #[test]
    fn test_edge_cast_inside_expression() {
        assert_eq!(
            kinds("x=static_cast<float>(y);"),
            vec![
                TokenKind::Ident("x".into()),
                TokenKind::Eq,
                TokenKind::Cast(cpqc_util::ScalarType::Float),
                TokenKind::LParen,
                TokenKind::Ident("y".into()),
                TokenKind::RParen,
                TokenKind::Semicolon,
            ]
        );
    }

    #[test]
    fn test_edge_keyword_adjacent_to_paren() {
        assert_eq!(
            kinds("while(k<=10)"),
            vec![
                TokenKind::While,
                TokenKind::LParen,
                TokenKind::Ident("k".into()),
                TokenKind::LtEq,
                TokenKind::Num("10".into()),
                TokenKind::RParen,
            ]
        );
    }

    #[test]
    fn test_edge_multiple_errors_keep_scanning() {
        let handler = Handler::new();
        let toks: Vec<_> = Lexer::new("a # b $ c", &handler).collect();
        assert_eq!(toks.len(), 5);
        assert_eq!(handler.diagnostics().len(), 2);
    }

    #[test]
    fn test_edge_error_line_numbers() {
        let handler = Handler::new();
        let _ = Lexer::new("ok;\n@", &handler).count();
        let diags = handler.diagnostics();
        assert_eq!(diags[0].line, Some(2));
    }

    #[test]
    fn test_edge_determinism() {
        let source = "x: int; { x = static_cast<int>(2.5) * 3; output(x); }";
        assert_eq!(kinds(source), kinds(source));
    }

    // ==================== PROPERTY-BASED TESTS ====================

    #[test]
    fn prop_identifiers_lex_to_one_token() {
        use proptest::prelude::*;

        proptest!(|(input in "[a-zA-Z][a-zA-Z0-9]{0,40}")| {
            let handler = Handler::new();
            let toks: Vec<_> = Lexer::new(&input, &handler).collect();
            prop_assert_eq!(toks.len(), 1);
            prop_assert!(!handler.has_errors());
            match &toks[0].kind {
                TokenKind::Ident(name) => prop_assert_eq!(name, &input),
                kind => prop_assert!(
                    keyword_matches(kind, &input),
                    "expected keyword for {}", input
                ),
            }
        });
    }

    #[test]
    fn prop_numbers_keep_their_lexeme() {
        use proptest::prelude::*;

        proptest!(|(input in "[0-9]{1,12}(\\.[0-9]{0,6})?")| {
            let handler = Handler::new();
            let toks: Vec<_> = Lexer::new(&input, &handler).collect();
            prop_assert_eq!(toks.len(), 1);
            prop_assert_eq!(&toks[0].kind, &TokenKind::Num(input.clone()));
        });
    }

    fn keyword_matches(kind: &TokenKind, text: &str) -> bool {
        crate::keyword_from_ident(text).as_ref() == Some(kind)
    }
}
