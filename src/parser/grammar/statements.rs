//! Statement grammar
//!
//! Dispatch is a direct mapping from the leading keyword to a parser
//! function; no match means "not a statement" and the caller decides how to
//! recover. Every statement's range is advanced to the last consumed token
//! even on error, so the tree stays well-formed for position queries.

use smol_str::SmolStr;
use text_size::TextRange;

use crate::parser::cursor::TokenCursor;
use crate::parser::errors::ErrorCode;
use crate::parser::parser::Parser;
use crate::parser::token_kind::TokenKind;
use crate::syntax::{
    Block, DeclareSource, Expression, IfStatement, NameRef, Statement, StmtKind, TypeExpr,
};

use super::expressions::{ExprOptions, parse_expression};

/// Token kinds that start a statement (or end a block) and therefore
/// terminate any trailing expression.
pub(crate) const EXPR_STOPPERS: &[TokenKind] = &[
    TokenKind::LetKw,
    TokenKind::DeclareKw,
    TokenKind::DeferKw,
    TokenKind::PrepareKw,
    TokenKind::SqlKw,
    TokenKind::IfKw,
    TokenKind::ValidateKw,
    TokenKind::CallKw,
    TokenKind::ReturnKw,
    TokenKind::DisplayKw,
    TokenKind::DefineKw,
    TokenKind::TypeKw,
    TokenKind::ConstantKw,
    TokenKind::EndKw,
    TokenKind::ElseKw,
    TokenKind::MainKw,
    TokenKind::FunctionKw,
    TokenKind::Semicolon,
];

/// Recognize the statement starting at the cursor, or return `None` without
/// consuming anything.
pub fn parse_statement(p: &mut Parser<'_>) -> Option<Statement> {
    p.cursor.skip_trivia();
    match p.cursor.current_kind() {
        TokenKind::LetKw => Some(parse_let(p)),
        TokenKind::DeclareKw => Some(parse_declare(p)),
        TokenKind::DeferKw => Some(parse_defer(p)),
        TokenKind::PrepareKw => Some(parse_prepare(p)),
        TokenKind::SqlKw => Some(parse_sql(p)),
        TokenKind::IfKw => Some(parse_if(p)),
        TokenKind::ValidateKw => Some(parse_validate(p)),
        TokenKind::CallKw => Some(parse_call_stmt(p)),
        TokenKind::ReturnKw => Some(parse_return(p)),
        TokenKind::DisplayKw => Some(parse_display(p)),
        TokenKind::DefineKw => Some(parse_define(p)),
        TokenKind::TypeKw => Some(parse_typedef(p)),
        TokenKind::ConstantKw => Some(parse_constant(p)),
        _ => None,
    }
}

/// Consume `kind` or report "expected NAME" without consuming.
pub(crate) fn expect_kw(p: &mut Parser<'_>, kind: TokenKind, name: &str) -> bool {
    p.cursor.skip_trivia();
    if p.cursor.eat(kind) {
        true
    } else {
        p.error(format!("expected {name}"), ErrorCode::E0501);
        false
    }
}

/// Consume an identifier as a [`NameRef`], or report a missing name.
pub(crate) fn expect_name(p: &mut Parser<'_>) -> Option<NameRef> {
    p.cursor.skip_trivia();
    if p.cursor.at(TokenKind::Ident) {
        let token = p.cursor.bump()?;
        Some(NameRef {
            name: token.text.into(),
            range: token.range(),
        })
    } else {
        p.error(ErrorCode::E0301.default_message(), ErrorCode::E0301);
        None
    }
}

fn stmt_range(start: text_size::TextSize, p: &Parser<'_>) -> TextRange {
    TextRange::new(start, p.cursor.last_end().max(start))
}

// =============================================================================
// Individual statement parsers
// =============================================================================

fn parse_let(p: &mut Parser<'_>) -> Statement {
    let start = p.cursor.current_range().start();
    p.cursor.bump(); // LET

    let mut target_breaks = vec![TokenKind::Eq];
    target_breaks.extend_from_slice(EXPR_STOPPERS);
    let target = parse_expression(p, &target_breaks, &ExprOptions::default());
    if target.is_none() {
        p.error("expected a target after LET", ErrorCode::E0401);
    }

    expect_kw(p, TokenKind::Eq, "'='");
    let value = parse_expression(p, EXPR_STOPPERS, &ExprOptions::default());
    if value.is_none() {
        p.error(ErrorCode::E0401.default_message(), ErrorCode::E0401);
    }

    Statement::new(StmtKind::Let { target, value }, stmt_range(start, p))
}

fn parse_declare(p: &mut Parser<'_>) -> Statement {
    let start = p.cursor.current_range().start();
    p.cursor.bump(); // DECLARE

    let cursor_name = expect_name(p);
    expect_kw(p, TokenKind::CursorKw, "CURSOR");
    expect_kw(p, TokenKind::ForKw, "FOR");

    p.cursor.skip_trivia();
    let source = match p.cursor.current_kind() {
        TokenKind::SelectKw => Some(DeclareSource::Select(capture_until_stoppers(p))),
        TokenKind::Ident => p
            .cursor
            .bump()
            .map(|t| DeclareSource::Prepared(t.text.into())),
        _ => {
            p.error(
                "expected SELECT or a prepared statement name",
                ErrorCode::E0501,
            );
            None
        }
    };

    Statement::new(
        StmtKind::Declare {
            cursor: cursor_name,
            source,
        },
        stmt_range(start, p),
    )
}

fn parse_defer(p: &mut Parser<'_>) -> Statement {
    let start = p.cursor.current_range().start();
    p.cursor.bump(); // DEFER

    p.cursor.skip_trivia();
    let action = if p.cursor.at(TokenKind::Ident) {
        p.cursor.bump().map(|t| NameRef {
            name: t.text.into(),
            range: t.range(),
        })
    } else {
        p.error("expected INTERRUPT or QUIT", ErrorCode::E0501);
        None
    };

    Statement::new(StmtKind::Defer { action }, stmt_range(start, p))
}

fn parse_prepare(p: &mut Parser<'_>) -> Statement {
    let start = p.cursor.current_range().start();
    p.cursor.bump(); // PREPARE

    let name = expect_name(p);
    expect_kw(p, TokenKind::FromKw, "FROM");
    let source = parse_expression(p, EXPR_STOPPERS, &ExprOptions::default());
    if source.is_none() {
        p.error(ErrorCode::E0401.default_message(), ErrorCode::E0401);
    }

    Statement::new(StmtKind::Prepare { name, source }, stmt_range(start, p))
}

/// `SQL ... END SQL` passthrough; contents are captured raw.
fn parse_sql(p: &mut Parser<'_>) -> Statement {
    let start = p.cursor.current_range().start();
    p.cursor.bump(); // SQL

    let mut tokens = Vec::new();
    loop {
        p.cursor.skip_trivia();
        if p.cursor.at_eof() {
            p.error_at(
                "SQL block not terminated",
                TextRange::empty(p.cursor.last_end()),
                ErrorCode::E0504,
            );
            break;
        }
        if p.cursor.at_sequence(TokenKind::EndKw, TokenKind::SqlKw) {
            p.cursor.bump();
            p.cursor.skip_trivia();
            p.cursor.bump();
            break;
        }
        if let Some(token) = p.cursor.bump() {
            tokens.push(SmolStr::from(token.text));
        }
    }

    Statement::new(StmtKind::Sql { tokens }, stmt_range(start, p))
}

fn parse_if(p: &mut Parser<'_>) -> Statement {
    let start = p.cursor.current_range().start();
    p.cursor.bump(); // IF

    let mut cond_breaks = vec![TokenKind::ThenKw];
    cond_breaks.extend_from_slice(EXPR_STOPPERS);
    let condition = parse_expression(p, &cond_breaks, &ExprOptions::default());
    if condition.is_none() {
        p.error(ErrorCode::E0401.default_message(), ErrorCode::E0401);
    }

    expect_kw(p, TokenKind::ThenKw, "THEN");
    // outline header: IF condition THEN
    let decorator = TextRange::new(start, p.cursor.last_end().max(start));

    let stop = |c: &TokenCursor<'_>| c.at(TokenKind::ElseKw) || c.at(TokenKind::EndKw);
    let then_block = parse_block(p, stop);
    let else_block = if p.cursor.eat(TokenKind::ElseKw) {
        Some(parse_block(p, stop))
    } else {
        None
    };

    p.cursor.skip_trivia();
    if p.cursor.at_sequence(TokenKind::EndKw, TokenKind::IfKw) {
        p.cursor.bump();
        p.cursor.skip_trivia();
        p.cursor.bump();
    } else if p.cursor.at_eof() {
        p.error_at(
            "IF not terminated",
            TextRange::empty(p.cursor.last_end()),
            ErrorCode::E0504,
        );
    } else {
        p.error("expected END IF", ErrorCode::E0501);
    }

    Statement::new(
        StmtKind::If(IfStatement {
            condition,
            then_block,
            else_block,
        }),
        stmt_range(start, p),
    )
    .with_decorator(decorator)
}

/// `VALIDATE a, b LIKE table.column` (column may be `*`).
fn parse_validate(p: &mut Parser<'_>) -> Statement {
    let start = p.cursor.current_range().start();
    p.cursor.bump(); // VALIDATE

    let mut targets = Vec::new();
    loop {
        p.cursor.skip_trivia();
        if p.cursor.at(TokenKind::Ident) {
            if let Some(token) = p.cursor.bump() {
                targets.push(NameRef {
                    name: token.text.into(),
                    range: token.range(),
                });
            }
        } else {
            if targets.is_empty() {
                p.error(ErrorCode::E0301.default_message(), ErrorCode::E0301);
            }
            break;
        }
        p.cursor.skip_trivia();
        if !p.cursor.eat(TokenKind::Comma) {
            break;
        }
    }

    let mut table = None;
    let mut column = None;
    p.cursor.skip_trivia();
    if p.cursor.eat(TokenKind::LikeKw) {
        p.cursor.skip_trivia();
        if p.cursor.at(TokenKind::Ident) {
            table = p.cursor.bump().map(|t| SmolStr::from(t.text));
            p.cursor.skip_trivia();
            if p.cursor.eat(TokenKind::Dot) {
                p.cursor.skip_trivia();
                match p.cursor.current_kind() {
                    TokenKind::Ident | TokenKind::Star => {
                        column = p.cursor.bump().map(|t| SmolStr::from(t.text));
                    }
                    _ => p.error(ErrorCode::E0503.default_message(), ErrorCode::E0503),
                }
            } else {
                p.error(ErrorCode::E0503.default_message(), ErrorCode::E0503);
            }
        } else {
            p.error(ErrorCode::E0503.default_message(), ErrorCode::E0503);
        }
    } else {
        p.error(ErrorCode::E0503.default_message(), ErrorCode::E0503);
    }

    Statement::new(
        StmtKind::Validate {
            targets,
            table,
            column,
        },
        stmt_range(start, p),
    )
}

fn parse_call_stmt(p: &mut Parser<'_>) -> Statement {
    let start = p.cursor.current_range().start();
    p.cursor.bump(); // CALL

    let mut breaks = vec![TokenKind::ReturningKw];
    breaks.extend_from_slice(EXPR_STOPPERS);
    let invocation = parse_expression(p, &breaks, &ExprOptions::default());
    if invocation.is_none() {
        p.error(ErrorCode::E0401.default_message(), ErrorCode::E0401);
    }

    let mut returning = Vec::new();
    p.cursor.skip_trivia();
    if p.cursor.eat(TokenKind::ReturningKw) {
        loop {
            match expect_name(p) {
                Some(name) => returning.push(name),
                None => break,
            }
            p.cursor.skip_trivia();
            if !p.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
    }

    Statement::new(
        StmtKind::Call {
            invocation,
            returning,
        },
        stmt_range(start, p),
    )
}

fn parse_return(p: &mut Parser<'_>) -> Statement {
    let start = p.cursor.current_range().start();
    p.cursor.bump(); // RETURN
    let values = parse_expr_list(p);
    Statement::new(StmtKind::Return { values }, stmt_range(start, p))
}

fn parse_display(p: &mut Parser<'_>) -> Statement {
    let start = p.cursor.current_range().start();
    p.cursor.bump(); // DISPLAY
    let values = parse_expr_list(p);
    Statement::new(StmtKind::Display { values }, stmt_range(start, p))
}

/// Comma-separated expressions; an empty list is allowed (`RETURN` with no
/// values is legal).
fn parse_expr_list(p: &mut Parser<'_>) -> Vec<Expression> {
    let mut breaks = vec![TokenKind::Comma];
    breaks.extend_from_slice(EXPR_STOPPERS);
    let mut values = Vec::new();
    loop {
        match parse_expression(p, &breaks, &ExprOptions::default()) {
            Some(value) => values.push(value),
            None => break,
        }
        p.cursor.skip_trivia();
        if !p.cursor.eat(TokenKind::Comma) {
            break;
        }
    }
    values
}

fn parse_define(p: &mut Parser<'_>) -> Statement {
    let start = p.cursor.current_range().start();
    p.cursor.bump(); // DEFINE

    let mut names = Vec::new();
    loop {
        match expect_name(p) {
            Some(name) => names.push(name),
            None => break,
        }
        p.cursor.skip_trivia();
        if !p.cursor.eat(TokenKind::Comma) {
            break;
        }
    }

    let ty = parse_type_expr(p);
    if ty.is_none() {
        p.error(ErrorCode::E0303.default_message(), ErrorCode::E0303);
    }

    Statement::new(StmtKind::Define { names, ty }, stmt_range(start, p))
}

fn parse_typedef(p: &mut Parser<'_>) -> Statement {
    let start = p.cursor.current_range().start();
    p.cursor.bump(); // TYPE

    let name = expect_name(p);
    let ty = parse_type_expr(p);
    if ty.is_none() {
        p.error(ErrorCode::E0303.default_message(), ErrorCode::E0303);
    }

    Statement::new(StmtKind::TypeDef { name, ty }, stmt_range(start, p))
}

fn parse_constant(p: &mut Parser<'_>) -> Statement {
    let start = p.cursor.current_range().start();
    p.cursor.bump(); // CONSTANT

    let name = expect_name(p);
    expect_kw(p, TokenKind::Eq, "'='");
    let value = parse_expression(p, EXPR_STOPPERS, &ExprOptions::default());
    if value.is_none() {
        p.error(ErrorCode::E0401.default_message(), ErrorCode::E0401);
    }

    Statement::new(StmtKind::ConstantDef { name, value }, stmt_range(start, p))
}

/// A declared type: `LIKE table.column`, `RECORD ... END RECORD`, or a plain
/// type name with an optional size suffix (`CHAR(10)`, `DECIMAL(10,2)`).
pub(crate) fn parse_type_expr(p: &mut Parser<'_>) -> Option<TypeExpr> {
    p.cursor.skip_trivia();
    match p.cursor.current_kind() {
        TokenKind::LikeKw => {
            p.cursor.bump();
            p.cursor.skip_trivia();
            let table = match p.cursor.current_kind() {
                TokenKind::Ident => SmolStr::from(p.cursor.bump()?.text),
                _ => {
                    p.error("expected table.column after LIKE", ErrorCode::E0303);
                    return None;
                }
            };
            p.cursor.skip_trivia();
            if !p.cursor.eat(TokenKind::Dot) {
                p.error("expected table.column after LIKE", ErrorCode::E0303);
                return Some(TypeExpr::Like {
                    table,
                    column: SmolStr::default(),
                });
            }
            p.cursor.skip_trivia();
            let column = match p.cursor.current_kind() {
                TokenKind::Ident | TokenKind::Star => SmolStr::from(p.cursor.bump()?.text),
                _ => {
                    p.error("expected table.column after LIKE", ErrorCode::E0303);
                    SmolStr::default()
                }
            };
            Some(TypeExpr::Like { table, column })
        }
        TokenKind::RecordKw => {
            let mut parts = vec![SmolStr::from(p.cursor.bump()?.text)];
            loop {
                p.cursor.skip_trivia();
                if p.cursor.at_eof() {
                    p.error_at(
                        "RECORD not terminated",
                        TextRange::empty(p.cursor.last_end()),
                        ErrorCode::E0504,
                    );
                    break;
                }
                if p.cursor.at_sequence(TokenKind::EndKw, TokenKind::RecordKw) {
                    if let Some(t) = p.cursor.bump() {
                        parts.push(t.text.into());
                    }
                    p.cursor.skip_trivia();
                    if let Some(t) = p.cursor.bump() {
                        parts.push(t.text.into());
                    }
                    break;
                }
                if let Some(t) = p.cursor.bump() {
                    parts.push(t.text.into());
                }
            }
            Some(TypeExpr::Plain {
                text: parts.join(" ").into(),
            })
        }
        TokenKind::Ident => {
            let mut text = String::from(p.cursor.bump()?.text);
            p.cursor.skip_trivia();
            if p.cursor.at(TokenKind::LParen) {
                p.cursor.bump();
                text.push('(');
                loop {
                    p.cursor.skip_trivia();
                    if p.cursor.at_eof() {
                        p.error(ErrorCode::E0201.default_message(), ErrorCode::E0201);
                        break;
                    }
                    if p.cursor.eat(TokenKind::RParen) {
                        break;
                    }
                    if let Some(t) = p.cursor.bump() {
                        text.push_str(t.text);
                    }
                }
                text.push(')');
            }
            Some(TypeExpr::Plain { text: text.into() })
        }
        _ => None,
    }
}

/// Capture raw tokens (paren-depth aware) until a statement start or block
/// end, used for DECLARE's inline SELECT source.
fn capture_until_stoppers(p: &mut Parser<'_>) -> Vec<SmolStr> {
    let mut tokens = Vec::new();
    let mut depth = 0usize;
    loop {
        p.cursor.skip_trivia();
        let kind = p.cursor.current_kind();
        if kind == TokenKind::Eof {
            break;
        }
        if depth == 0 && EXPR_STOPPERS.contains(&kind) {
            break;
        }
        match kind {
            TokenKind::LParen => depth += 1,
            TokenKind::RParen => depth = depth.saturating_sub(1),
            _ => {}
        }
        if let Some(token) = p.cursor.bump() {
            tokens.push(SmolStr::from(token.text));
        }
    }
    tokens
}

/// Greedily parse nested statements until `stop` triggers, end of input, or
/// the caller's terminator. Uninterpretable tokens are skipped with an
/// error rather than halting the block.
pub(crate) fn parse_block(
    p: &mut Parser<'_>,
    stop: impl Fn(&TokenCursor<'_>) -> bool,
) -> Block {
    let mut block = Block::default();
    p.cursor.skip_trivia();
    let start = p.cursor.current_range().start();
    loop {
        p.cursor.skip_trivia();
        if p.cursor.at_eof() || stop(&p.cursor) {
            break;
        }
        if p.cursor.eat(TokenKind::Semicolon) {
            continue;
        }
        let pos = p.cursor.position();
        match parse_statement(p) {
            Some(stmt) => block.statements.push(stmt),
            None => {
                let got = p.cursor.current_kind().display_name();
                p.error(format!("unexpected {got}"), ErrorCode::E0502);
                p.cursor.bump();
            }
        }
        if p.cursor.position() == pos && !p.cursor.at_eof() {
            p.cursor.bump();
        }
    }
    block.range = TextRange::new(start, p.cursor.last_end().max(start));
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::errors::SyntaxError;
    use crate::parser::lexer::tokenize;

    fn parse_one(input: &str) -> (Option<Statement>, Vec<SyntaxError>) {
        let tokens = tokenize(input);
        let mut p = Parser::new(&tokens);
        let stmt = parse_statement(&mut p);
        (stmt, p.finish().into_vec())
    }

    #[test]
    fn test_let_statement() {
        let (stmt, errors) = parse_one("LET x = a + 1");
        assert!(errors.is_empty(), "{errors:?}");
        match stmt.unwrap().kind {
            StmtKind::Let { target, value } => {
                assert_eq!(target.unwrap().to_text(), "x");
                assert_eq!(value.unwrap().to_text(), "a + 1");
            }
            other => panic!("expected LET, got {other:?}"),
        }
    }

    #[test]
    fn test_let_missing_value() {
        let (stmt, errors) = parse_one("LET x =");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, ErrorCode::E0401);
        assert!(stmt.is_some());
    }

    #[test]
    fn test_if_then_end_if() {
        let (stmt, errors) = parse_one("IF x > 0 THEN\n  LET y = 1\nEND IF");
        assert!(errors.is_empty(), "{errors:?}");
        let stmt = stmt.unwrap();
        assert!(stmt.can_outline());
        match &stmt.kind {
            StmtKind::If(if_stmt) => {
                assert_eq!(if_stmt.condition.as_ref().unwrap().to_text(), "x > 0");
                assert_eq!(if_stmt.then_block.statements.len(), 1);
                assert!(if_stmt.else_block.is_none());
            }
            other => panic!("expected IF, got {other:?}"),
        }
    }

    #[test]
    fn test_if_else() {
        let (stmt, errors) =
            parse_one("IF x > 0 THEN\n  LET y = 1\nELSE\n  LET y = 2\nEND IF");
        assert!(errors.is_empty(), "{errors:?}");
        match &stmt.unwrap().kind {
            StmtKind::If(if_stmt) => {
                assert_eq!(if_stmt.then_block.statements.len(), 1);
                assert_eq!(if_stmt.else_block.as_ref().unwrap().statements.len(), 1);
            }
            other => panic!("expected IF, got {other:?}"),
        }
    }

    #[test]
    fn test_if_missing_then() {
        let (stmt, errors) = parse_one("IF x > 0\n  LET y = 1\nEND IF");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, ErrorCode::E0501);
        assert!(stmt.is_some());
    }

    #[test]
    fn test_if_unterminated() {
        let (stmt, errors) = parse_one("IF x > 0 THEN\n  LET y = 1");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, ErrorCode::E0504);
        let stmt = stmt.unwrap();
        assert!(stmt.range.end() > stmt.range.start());
    }

    #[test]
    fn test_validate() {
        let (stmt, errors) = parse_one("VALIDATE a, b LIKE customer.name");
        assert!(errors.is_empty(), "{errors:?}");
        match &stmt.unwrap().kind {
            StmtKind::Validate {
                targets,
                table,
                column,
            } => {
                assert_eq!(targets.len(), 2);
                assert_eq!(table.as_deref(), Some("customer"));
                assert_eq!(column.as_deref(), Some("name"));
            }
            other => panic!("expected VALIDATE, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_missing_column() {
        let (stmt, errors) = parse_one("VALIDATE a LIKE customer");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, ErrorCode::E0503);
        let stmt = stmt.unwrap();
        assert!(stmt.range.end() > stmt.range.start());
    }

    #[test]
    fn test_validate_star_column() {
        let (stmt, errors) = parse_one("VALIDATE a LIKE customer.*");
        assert!(errors.is_empty(), "{errors:?}");
        match &stmt.unwrap().kind {
            StmtKind::Validate { column, .. } => assert_eq!(column.as_deref(), Some("*")),
            other => panic!("expected VALIDATE, got {other:?}"),
        }
    }

    #[test]
    fn test_sql_passthrough() {
        let (stmt, errors) = parse_one("SQL\n  UPDATE t SET a = 1\nEND SQL");
        assert!(errors.is_empty(), "{errors:?}");
        match &stmt.unwrap().kind {
            StmtKind::Sql { tokens } => {
                assert_eq!(tokens.first().map(|t| t.as_str()), Some("UPDATE"));
                assert!(!tokens.contains(&SmolStr::from("END")));
            }
            other => panic!("expected SQL, got {other:?}"),
        }
    }

    #[test]
    fn test_sql_unterminated() {
        let (_, errors) = parse_one("SQL\n  UPDATE t SET a = 1");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, ErrorCode::E0504);
    }

    #[test]
    fn test_declare_with_select() {
        let (stmt, errors) = parse_one("DECLARE c1 CURSOR FOR SELECT * FROM customer");
        assert!(errors.is_empty(), "{errors:?}");
        match &stmt.unwrap().kind {
            StmtKind::Declare { cursor, source } => {
                assert_eq!(cursor.as_ref().unwrap().name, "c1");
                match source {
                    Some(DeclareSource::Select(tokens)) => {
                        assert_eq!(tokens.first().map(|t| t.as_str()), Some("SELECT"));
                    }
                    other => panic!("expected SELECT source, got {other:?}"),
                }
            }
            other => panic!("expected DECLARE, got {other:?}"),
        }
    }

    #[test]
    fn test_declare_with_prepared() {
        let (stmt, errors) = parse_one("DECLARE c1 CURSOR FOR stmt1");
        assert!(errors.is_empty(), "{errors:?}");
        match &stmt.unwrap().kind {
            StmtKind::Declare { source, .. } => {
                assert_eq!(source, &Some(DeclareSource::Prepared("stmt1".into())));
            }
            other => panic!("expected DECLARE, got {other:?}"),
        }
    }

    #[test]
    fn test_defer() {
        let (stmt, errors) = parse_one("DEFER INTERRUPT");
        assert!(errors.is_empty(), "{errors:?}");
        match &stmt.unwrap().kind {
            StmtKind::Defer { action } => {
                assert_eq!(action.as_ref().unwrap().name, "INTERRUPT");
            }
            other => panic!("expected DEFER, got {other:?}"),
        }
    }

    #[test]
    fn test_prepare() {
        let (stmt, errors) = parse_one("PREPARE stmt1 FROM sql_text");
        assert!(errors.is_empty(), "{errors:?}");
        match &stmt.unwrap().kind {
            StmtKind::Prepare { name, source } => {
                assert_eq!(name.as_ref().unwrap().name, "stmt1");
                assert!(source.is_some());
            }
            other => panic!("expected PREPARE, got {other:?}"),
        }
    }

    #[test]
    fn test_call_with_returning() {
        let (stmt, errors) = parse_one("CALL add(a, b) RETURNING total");
        assert!(errors.is_empty(), "{errors:?}");
        match &stmt.unwrap().kind {
            StmtKind::Call {
                invocation,
                returning,
            } => {
                assert_eq!(invocation.as_ref().unwrap().call_name(), Some("add"));
                assert_eq!(returning.len(), 1);
                assert_eq!(returning[0].name, "total");
            }
            other => panic!("expected CALL, got {other:?}"),
        }
    }

    #[test]
    fn test_return_multiple_values() {
        let (stmt, errors) = parse_one("RETURN a, b");
        assert!(errors.is_empty(), "{errors:?}");
        match &stmt.unwrap().kind {
            StmtKind::Return { values } => assert_eq!(values.len(), 2),
            other => panic!("expected RETURN, got {other:?}"),
        }
    }

    #[test]
    fn test_define_multiple_names() {
        let (stmt, errors) = parse_one("DEFINE x, y INT");
        assert!(errors.is_empty(), "{errors:?}");
        match &stmt.unwrap().kind {
            StmtKind::Define { names, ty } => {
                assert_eq!(names.len(), 2);
                assert_eq!(ty, &Some(TypeExpr::Plain { text: "INT".into() }));
            }
            other => panic!("expected DEFINE, got {other:?}"),
        }
    }

    #[test]
    fn test_define_like_type() {
        let (stmt, errors) = parse_one("DEFINE nm LIKE customer.name");
        assert!(errors.is_empty(), "{errors:?}");
        match &stmt.unwrap().kind {
            StmtKind::Define { ty, .. } => {
                assert_eq!(
                    ty,
                    &Some(TypeExpr::Like {
                        table: "customer".into(),
                        column: "name".into(),
                    })
                );
            }
            other => panic!("expected DEFINE, got {other:?}"),
        }
    }

    #[test]
    fn test_define_sized_type() {
        let (stmt, errors) = parse_one("DEFINE d DECIMAL(10,2)");
        assert!(errors.is_empty(), "{errors:?}");
        match &stmt.unwrap().kind {
            StmtKind::Define { ty, .. } => {
                assert_eq!(ty.as_ref().unwrap().to_text(), "DECIMAL(10,2)");
            }
            other => panic!("expected DEFINE, got {other:?}"),
        }
    }

    #[test]
    fn test_define_missing_type() {
        let (_, errors) = parse_one("DEFINE x");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, ErrorCode::E0303);
    }

    #[test]
    fn test_constant() {
        let (stmt, errors) = parse_one("CONSTANT max_rows = 100");
        assert!(errors.is_empty(), "{errors:?}");
        match &stmt.unwrap().kind {
            StmtKind::ConstantDef { name, value } => {
                assert_eq!(name.as_ref().unwrap().name, "max_rows");
                assert_eq!(value.as_ref().unwrap().to_text(), "100");
            }
            other => panic!("expected CONSTANT, got {other:?}"),
        }
    }

    #[test]
    fn test_not_a_statement() {
        let (stmt, errors) = parse_one("42");
        assert!(stmt.is_none());
        assert!(errors.is_empty());
    }
}
