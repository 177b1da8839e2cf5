//! End-to-end translation tests for cpqc-par.
//!
//! These drive whole CPL programs through the parser and check the exact
//! QUAD listing, covering the interplay of declarations, control flow,
//! promotion, and recovery that the per-module tests exercise in
//! isolation.

#[cfg(test)]
mod tests {
    use crate::Parser;
    use cpqc_util::Handler;

    fn compile(source: &str) -> (Vec<String>, Handler) {
        let handler = Handler::new();
        let code = Parser::new(source, &handler).parse_program().into_code();
        (code, handler)
    }

    #[test]
    fn test_min_of_two_reals() {
        let source = "\
a, b: float;
{ input(a); input(b); if (a < b) output(a); else output(b); }
";
        let (code, handler) = compile(source);
        assert!(!handler.has_errors());
        assert_eq!(
            code,
            [
                "RINP a",
                "RINP b",
                "RLSS t1 a b",
                "JMPZ L1 t1",
                "RPRT a",
                "JUMP L2",
                "L1: ",
                "RPRT b",
                "L2: ",
                "HALT",
            ]
        );
    }

    #[test]
    fn test_while_with_nested_if() {
        let source = "\
k, j: int;
{ while (k <= 10) if (j > 5) k = k + 2; else k = 20; }
";
        let (code, handler) = compile(source);
        assert!(!handler.has_errors());
        assert_eq!(
            code,
            [
                "L1: ",
                "ILSS t1 k 10",
                "IEQL t2 k 10",
                "IADD t1 t1 t2",
                "JMPZ L2 t1",
                "IGRT t3 j 5",
                "JMPZ L3 t3",
                "IADD t4 k 2",
                "IASN k t4",
                "JUMP L4",
                "L3: ",
                "IASN k 20",
                "L4: ",
                "JUMP L1",
                "L2: ",
                "HALT",
            ]
        );
    }

    #[test]
    fn test_implicit_promotion_in_assignment() {
        let (code, handler) = compile("x: float; y: int;\n{ x = y; }");
        assert!(!handler.has_errors());
        assert_eq!(code, ["ITOR t1 y", "RASN x t1", "HALT"]);
    }

    #[test]
    fn test_narrowing_sets_error_flag() {
        let (_, handler) = compile("x: int; y: float;\n{ x = y; }");
        assert!(handler.has_errors());
        assert_eq!(handler.count(cpqc_util::Level::Error), 1);
    }

    #[test]
    fn test_undeclared_identifier_reported_at_use_line() {
        let (_, handler) = compile("{\noutput(z);\n}");
        assert!(handler.has_errors());
        let diags = handler.diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(
            format!("{}", diags[0]),
            "ERROR: z not in symbol table at line 2"
        );
    }

    #[test]
    fn test_redundant_cast_emits_no_conversion() {
        let (code, handler) = compile("a: int;\n{ output(static_cast<int>(a)); }");
        assert_eq!(handler.count(cpqc_util::Level::Warning), 1);
        assert!(!handler.has_errors());
        assert!(code.iter().all(|line| !line.starts_with("ITOR") && !line.starts_with("RTOI")));
        assert!(code.contains(&"IPRT a".to_string()));
    }

    #[test]
    fn test_halt_is_final_instruction() {
        for source in [
            "{ }",
            "a: int; { a = 1; }",
            "{ output(z); }",
            "k: int; { while (k < 3) k = k + 1; }",
        ] {
            let (code, _) = compile(source);
            assert_eq!(code.last().map(String::as_str), Some("HALT"), "{}", source);
        }
    }

    #[test]
    fn test_same_input_same_listing() {
        let source = "\
k, j: int; acc: float;
{
    while (k <= 10) {
        acc = acc + static_cast<float>(j) * 1.5;
        k = k + 1;
    }
    output(acc);
}
";
        let (first, _) = compile(source);
        let (second, _) = compile(source);
        assert_eq!(first, second);
    }

    #[test]
    fn test_temporaries_skip_declared_names() {
        // `t1` is a user variable, so the allocator starts at t2.
        let (code, handler) = compile("t1, r: int; { r = t1 + 1; }");
        assert!(!handler.has_errors());
        assert_eq!(code, ["IADD t2 t1 1", "IASN r t2", "HALT"]);
    }

    #[test]
    fn test_labels_referenced_are_defined_once() {
        let source = "\
a, b: int;
{
    while (a < 10) {
        if (b > 0 && a != b) a = a + 1; else a = a + 2;
    }
}
";
        let (code, handler) = compile(source);
        assert!(!handler.has_errors());

        let mut referenced = Vec::new();
        let mut defined = Vec::new();
        for line in &code {
            if let Some(rest) = line.strip_prefix("JUMP ") {
                referenced.push(rest.split(' ').next().unwrap().to_string());
            } else if let Some(rest) = line.strip_prefix("JMPZ ") {
                referenced.push(rest.split(' ').next().unwrap().to_string());
            } else if let Some(label) = line.strip_suffix(": ") {
                defined.push(label.to_string());
            }
        }

        for label in &referenced {
            assert_eq!(
                defined.iter().filter(|d| *d == label).count(),
                1,
                "label {} in {:?}",
                label,
                code
            );
        }
    }

    #[test]
    fn test_typed_opcode_prefix_matches_operand_types() {
        let (code, handler) = compile(
            "i: int; f: float;\n{ i = i * 2; f = f / 2.0; f = i; input(i); output(f); }",
        );
        assert!(!handler.has_errors());
        assert_eq!(
            code,
            [
                "IMLT t1 i 2",
                "IASN i t1",
                "RDIV t2 f 2.0",
                "RASN f t2",
                "ITOR t3 i",
                "RASN f t3",
                "IINP i",
                "RPRT f",
                "HALT",
            ]
        );
    }

    #[test]
    fn test_errors_do_not_stop_later_diagnostics() {
        // One lexical error, one semantic error, one syntax error; all
        // three are reported from a single run.
        let source = "\
a: int;
{
    a = a @ 1;
    b = 2;
    output(;
}
";
        let (_, handler) = compile(source);
        let diags = handler.diagnostics();
        assert!(diags.len() >= 3, "{:?}", diags);
        assert!(handler.has_errors());
    }

    #[test]
    fn test_bool_connectives_chain() {
        let source =
            "a, b, c: int;\n{ if (a < 1 || b < 2 && c < 3) a = 1; else a = 2; }";
        let (code, handler) = compile(source);
        assert!(!handler.has_errors());
        // AND binds tighter: (a<1) || ((b<2) && (c<3))
        assert_eq!(
            &code[..7],
            [
                "ILSS t1 a 1",
                "ILSS t2 b 2",
                "ILSS t3 c 3",
                "IADD t4 t2 t3",
                "IEQL t4 t4 2",
                "IADD t5 t1 t4",
                "IGRT t5 t5 0",
            ]
        );
    }

    #[test]
    fn test_cast_of_expression_result() {
        let (code, handler) = compile("x: int; y: float;\n{ x = static_cast<int>(y * 2.0); }");
        assert!(!handler.has_errors());
        assert_eq!(
            code,
            ["RMLT t1 y 2.0", "RTOI t2 t1", "IASN x t2", "HALT"]
        );
    }
}
