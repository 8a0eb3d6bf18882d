//! Statement and block grammar integration tests
//!
//! Exercises whole-module parsing through [`genero::parse_module`]:
//! block structure, declaration registration, error recovery, and the
//! guarantee that every input yields a tree.

use rstest::rstest;

use genero::parser::{ErrorCode, Parse, parse_module};
use genero::syntax::{DeclareSource, StmtKind, TypeExpr};

// ============================================================================
// Helper Functions
// ============================================================================

fn assert_clean(input: &str) -> Parse {
    let parse = parse_module(input);
    assert!(parse.ok(), "unexpected errors for {input:?}: {:?}", parse.errors);
    parse
}

fn error_codes(parse: &Parse) -> Vec<ErrorCode> {
    parse.errors.iter().map(|e| e.code).collect()
}

fn wrap_in_main(body: &str) -> String {
    format!("MAIN\n{body}\nEND MAIN\n")
}

// ============================================================================
// LET
// ============================================================================

#[test]
fn let_has_target_and_value() {
    let parse = assert_clean(&wrap_in_main("  LET total = price * qty"));
    let main = parse.module.main().unwrap();
    let StmtKind::Let { target, value } = &main.body.statements[0].kind else {
        panic!("expected LET, got {:?}", main.body.statements[0].kind);
    };
    assert_eq!(target.as_ref().unwrap().to_text(), "total");
    assert_eq!(value.as_ref().unwrap().to_text(), "price * qty");
}

#[test]
fn let_missing_value_reports_expression_required() {
    let parse = parse_module(&wrap_in_main("  LET x ="));
    assert_eq!(error_codes(&parse), vec![ErrorCode::E0401]);
    let main = parse.module.main().unwrap();
    assert!(matches!(
        main.body.statements[0].kind,
        StmtKind::Let { value: None, .. }
    ));
}

// ============================================================================
// IF / ELSE
// ============================================================================

#[test]
fn if_else_structure() {
    let source = wrap_in_main(
        "  IF x > 0 THEN\n    LET y = 1\n  ELSE\n    LET y = 2\n  END IF",
    );
    let parse = assert_clean(&source);
    let main = parse.module.main().unwrap();
    let StmtKind::If(if_stmt) = &main.body.statements[0].kind else {
        panic!("expected IF");
    };
    assert_eq!(if_stmt.condition.as_ref().unwrap().to_text(), "x > 0");
    assert_eq!(if_stmt.then_block.statements.len(), 1);
    assert_eq!(if_stmt.else_block.as_ref().unwrap().statements.len(), 1);
}

#[test]
fn if_missing_then_still_parses_body() {
    let parse = parse_module(&wrap_in_main("  IF x > 0\n    LET y = 1\n  END IF"));
    assert!(error_codes(&parse).contains(&ErrorCode::E0501), "{:?}", parse.errors);
    let main = parse.module.main().unwrap();
    let StmtKind::If(if_stmt) = &main.body.statements[0].kind else {
        panic!("expected IF");
    };
    assert_eq!(if_stmt.then_block.statements.len(), 1);
}

#[test]
fn unterminated_if_reports_at_eof() {
    let parse = parse_module("MAIN\n  IF x THEN\n    LET y = 1\n");
    assert!(error_codes(&parse).contains(&ErrorCode::E0504), "{:?}", parse.errors);
    // the tree still holds the IF with its body
    let main = parse.module.main().unwrap();
    assert!(matches!(main.body.statements[0].kind, StmtKind::If(_)));
}

// ============================================================================
// DEFINE / TYPE / CONSTANT and scope registration
// ============================================================================

#[test]
fn define_registers_all_names_with_type() {
    let parse = assert_clean(&wrap_in_main("  DEFINE a, b, c INTEGER"));
    let scope = &parse.module.main().unwrap().scope;
    for name in ["a", "B", "C"] {
        let var = scope.variable(name).unwrap_or_else(|| panic!("missing {name}"));
        assert_eq!(var.ty.as_deref(), Some("INTEGER"));
    }
}

#[test]
fn define_like_table_column() {
    let parse = assert_clean(&wrap_in_main("  DEFINE cname LIKE customer.name"));
    let main = parse.module.main().unwrap();
    let StmtKind::Define { ty, .. } = &main.body.statements[0].kind else {
        panic!("expected DEFINE");
    };
    assert_eq!(
        ty,
        &Some(TypeExpr::Like {
            table: "customer".into(),
            column: "name".into()
        })
    );
    assert_eq!(
        main.scope.variable("cname").unwrap().ty.as_deref(),
        Some("LIKE customer.name")
    );
}

#[test]
fn duplicate_define_reports_once_keeps_first() {
    let parse = parse_module(&wrap_in_main("  DEFINE x INTEGER\n  DEFINE x CHAR(10)"));
    assert_eq!(error_codes(&parse), vec![ErrorCode::E0302]);
    let main = parse.module.main().unwrap();
    // both statements stay in the tree, only one table entry survives
    assert_eq!(main.body.statements.len(), 2);
    assert_eq!(main.scope.variables().count(), 1);
    assert_eq!(main.scope.variable("X").unwrap().ty.as_deref(), Some("INTEGER"));
}

#[test]
fn define_missing_type_reports() {
    let parse = parse_module(&wrap_in_main("  DEFINE x"));
    assert_eq!(error_codes(&parse), vec![ErrorCode::E0303]);
}

#[test]
fn module_level_type_and_constant() {
    let parse = assert_clean("TYPE money DECIMAL(10,2)\nCONSTANT max_rows = 500\n");
    let scope = &parse.module.scope;
    assert_eq!(scope.type_def("MONEY").unwrap().ty.as_deref(), Some("DECIMAL(10,2)"));
    assert_eq!(scope.constant("max_rows").unwrap().value.as_deref(), Some("500"));
}

// ============================================================================
// VALIDATE
// ============================================================================

#[rstest]
#[case("  VALIDATE f1, f2 LIKE customer.name", 0)]
#[case("  VALIDATE f1 LIKE customer", 1)]
fn validate_forms(#[case] body: &str, #[case] expected_errors: usize) {
    let parse = parse_module(&wrap_in_main(body));
    assert_eq!(parse.errors.len(), expected_errors, "{body:?}: {:?}", parse.errors);
    for err in &parse.errors {
        assert_eq!(err.code, ErrorCode::E0503);
    }
}

#[test]
fn validate_missing_like_keeps_targets() {
    let parse = parse_module(&wrap_in_main("  VALIDATE f1 customer.name"));
    assert_eq!(parse.errors[0].code, ErrorCode::E0503, "{:?}", parse.errors);
    let main = parse.module.main().unwrap();
    let StmtKind::Validate { targets, table, .. } = &main.body.statements[0].kind else {
        panic!("expected VALIDATE");
    };
    assert_eq!(targets[0].name, "f1");
    assert!(table.is_none());
}

#[test]
fn validate_star_column() {
    let parse = assert_clean(&wrap_in_main("  VALIDATE f1 LIKE customer.*"));
    let main = parse.module.main().unwrap();
    let StmtKind::Validate { targets, table, column } = &main.body.statements[0].kind else {
        panic!("expected VALIDATE");
    };
    assert_eq!(targets.len(), 1);
    assert_eq!(table.as_deref(), Some("customer"));
    assert_eq!(column.as_deref(), Some("*"));
}

// ============================================================================
// SQL passthrough, DECLARE, PREPARE
// ============================================================================

#[test]
fn sql_block_is_opaque() {
    let parse = assert_clean(&wrap_in_main(
        "  SQL\n    UPDATE orders SET qty = qty + 1 WHERE id = ?\n  END SQL",
    ));
    let main = parse.module.main().unwrap();
    let StmtKind::Sql { tokens } = &main.body.statements[0].kind else {
        panic!("expected SQL");
    };
    assert_eq!(tokens[0], "UPDATE");
    assert!(tokens.contains(&"?".into()));
}

#[test]
fn unterminated_sql_reports_at_eof() {
    let parse = parse_module("MAIN\n  SQL\n    DELETE FROM t\n");
    assert!(error_codes(&parse).contains(&ErrorCode::E0504), "{:?}", parse.errors);
}

#[test]
fn declare_with_inline_select() {
    let parse = assert_clean(&wrap_in_main(
        "  DECLARE c_orders CURSOR FOR SELECT * FROM orders WHERE qty > 0",
    ));
    let main = parse.module.main().unwrap();
    let StmtKind::Declare { cursor, source } = &main.body.statements[0].kind else {
        panic!("expected DECLARE");
    };
    assert_eq!(cursor.as_ref().unwrap().name, "c_orders");
    let Some(DeclareSource::Select(tokens)) = source else {
        panic!("expected SELECT source, got {source:?}");
    };
    assert_eq!(tokens[0], "SELECT");
}

#[test]
fn declare_from_prepared_statement() {
    let parse = assert_clean(&wrap_in_main(
        "  PREPARE stmt1 FROM sql_text\n  DECLARE c1 CURSOR FOR stmt1",
    ));
    let main = parse.module.main().unwrap();
    let StmtKind::Declare { source, .. } = &main.body.statements[1].kind else {
        panic!("expected DECLARE");
    };
    assert_eq!(source, &Some(DeclareSource::Prepared("stmt1".into())));
}

// ============================================================================
// CALL / RETURN / DISPLAY / DEFER
// ============================================================================

#[test]
fn call_with_returning_list() {
    let parse = assert_clean(&wrap_in_main("  CALL get_totals(id) RETURNING a, b"));
    let main = parse.module.main().unwrap();
    let StmtKind::Call { invocation, returning } = &main.body.statements[0].kind else {
        panic!("expected CALL");
    };
    assert_eq!(invocation.as_ref().unwrap().call_name(), Some("get_totals"));
    assert_eq!(returning.len(), 2);
    assert_eq!(returning[1].name, "b");
}

#[test]
fn return_multiple_values() {
    let parse = assert_clean("FUNCTION pair()\n  RETURN 1, 2\nEND FUNCTION\n");
    let func = parse.module.functions().next().unwrap();
    let StmtKind::Return { values } = &func.body.statements[0].kind else {
        panic!("expected RETURN");
    };
    assert_eq!(values.len(), 2);
}

#[test]
fn defer_interrupt() {
    let parse = assert_clean(&wrap_in_main("  DEFER INTERRUPT"));
    let main = parse.module.main().unwrap();
    let StmtKind::Defer { action } = &main.body.statements[0].kind else {
        panic!("expected DEFER");
    };
    assert!(action.as_ref().unwrap().name.eq_ignore_ascii_case("interrupt"));
}

// ============================================================================
// Blocks and module shape
// ============================================================================

#[test]
fn function_signature_registered_at_module_scope() {
    let parse = assert_clean(
        "FUNCTION add(a, b)\n  DEFINE a, b INTEGER\n  RETURN a + b\nEND FUNCTION\n",
    );
    let sig = parse.module.scope.function("ADD").unwrap();
    assert_eq!(sig.params, vec!["a", "b"]);
    // parameter DEFINEs land in the function's own scope without duplicates
    let func = parse.module.functions().next().unwrap();
    assert_eq!(func.scope.variables().count(), 2);
}

#[test]
fn main_decorator_covers_keyword() {
    let parse = assert_clean("MAIN\n  LET x = 1\nEND MAIN\n");
    let stmt = &parse.module.body[0];
    let decorator = stmt.decorator.unwrap();
    assert_eq!(u32::from(decorator.start()), 0);
    assert_eq!(u32::from(decorator.end()), 4);
}

#[rstest]
#[case(") ) (")]
#[case("END END END")]
#[case("IF IF IF")]
#[case("LET = = =")]
#[case("MAIN MAIN")]
fn junk_always_yields_a_tree(#[case] input: &str) {
    let parse = parse_module(input);
    assert!(!parse.ok(), "junk input should report errors");
    assert_eq!(u32::from(parse.module.range.end()) as usize, input.len());
}
