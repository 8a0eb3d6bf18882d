//! MAIN and FUNCTION block parsers
//!
//! Both parse an interleaved sequence of declarations and statements up to
//! their `END` sequence, registering declarations into the block's own
//! scope tables as they appear. The header (`MAIN`, `FUNCTION name(params)`)
//! becomes the statement's decorator range for outlining.

use text_size::TextRange;

use crate::parser::errors::{Diagnostics, ErrorCode};
use crate::parser::parser::Parser;
use crate::parser::token_kind::TokenKind;
use crate::syntax::{
    Block, BlockScope, ConstantDef, FunctionBlock, NameRef, ScopeTables, Statement, StmtKind,
    TypeDef, VariableDef,
};

use super::statements::parse_statement;

/// `MAIN ... END MAIN`.
pub fn parse_main_block(p: &mut Parser<'_>) -> Statement {
    let start = p.cursor.current_range().start();
    p.cursor.bump(); // MAIN
    let decorator = TextRange::new(start, p.cursor.last_end());

    let (scope, body) = parse_scoped_body(p, TokenKind::MainKw, "MAIN");
    eat_end_sequence(p, TokenKind::MainKw);

    let range = TextRange::new(start, p.cursor.last_end().max(start));
    Statement::new(StmtKind::Main(BlockScope { scope, body }), range).with_decorator(decorator)
}

/// `FUNCTION name(params) ... END FUNCTION`.
pub fn parse_function_block(p: &mut Parser<'_>) -> Statement {
    let start = p.cursor.current_range().start();
    p.cursor.bump(); // FUNCTION

    p.cursor.skip_trivia();
    let name = if p.cursor.at(TokenKind::Ident) {
        p.cursor.bump().map(|t| NameRef {
            name: t.text.into(),
            range: t.range(),
        })
    } else {
        p.error(ErrorCode::E0301.default_message(), ErrorCode::E0301);
        None
    };

    let params = parse_param_list(p);
    let decorator = TextRange::new(start, p.cursor.last_end());

    let (scope, body) = parse_scoped_body(p, TokenKind::FunctionKw, "FUNCTION");
    eat_end_sequence(p, TokenKind::FunctionKw);

    let range = TextRange::new(start, p.cursor.last_end().max(start));
    Statement::new(
        StmtKind::Function(FunctionBlock {
            name,
            params,
            scope,
            body,
        }),
        range,
    )
    .with_decorator(decorator)
}

/// `(a, b, c)` after the function name. Parameter types come from the
/// DEFINE declarations in the body, so only names are collected here.
fn parse_param_list(p: &mut Parser<'_>) -> Vec<NameRef> {
    let mut params = Vec::new();
    p.cursor.skip_trivia();
    if !p.cursor.eat(TokenKind::LParen) {
        return params;
    }
    loop {
        p.cursor.skip_trivia();
        if p.cursor.eat(TokenKind::RParen) {
            break;
        }
        if p.cursor.at_eof() {
            p.error(ErrorCode::E0201.default_message(), ErrorCode::E0201);
            break;
        }
        if p.cursor.at(TokenKind::Ident) {
            if let Some(token) = p.cursor.bump() {
                params.push(NameRef {
                    name: token.text.into(),
                    range: token.range(),
                });
            }
            p.cursor.skip_trivia();
            if p.cursor.eat(TokenKind::Comma) {
                continue;
            }
            if p.cursor.eat(TokenKind::RParen) {
                break;
            }
            p.error(ErrorCode::E0201.default_message(), ErrorCode::E0201);
            break;
        }
        p.error(ErrorCode::E0301.default_message(), ErrorCode::E0301);
        p.cursor.bump();
    }
    params
}

/// The interleaved declaration/statement body shared by MAIN and FUNCTION.
/// Stops before the `END <kw>` sequence (the caller consumes it so the
/// statement range covers the terminator).
fn parse_scoped_body(
    p: &mut Parser<'_>,
    end_kw: TokenKind,
    what: &str,
) -> (ScopeTables, Block) {
    let mut scope = ScopeTables::new();
    let mut block = Block::default();
    p.cursor.skip_trivia();
    let start = p.cursor.current_range().start();
    loop {
        p.cursor.skip_trivia();
        if p.cursor.at_eof() {
            p.error_at(
                format!("{what} not terminated"),
                TextRange::empty(p.cursor.last_end()),
                ErrorCode::E0504,
            );
            break;
        }
        if p.cursor.at_sequence(TokenKind::EndKw, end_kw) {
            break;
        }
        if p.cursor.eat(TokenKind::Semicolon) {
            continue;
        }
        let pos = p.cursor.position();
        match parse_statement(p) {
            Some(stmt) => {
                register_declarations(&stmt, &mut scope, &mut p.diags);
                block.statements.push(stmt);
            }
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
    (scope, block)
}

fn eat_end_sequence(p: &mut Parser<'_>, kw: TokenKind) {
    p.cursor.skip_trivia();
    if p.cursor.at_sequence(TokenKind::EndKw, kw) {
        p.cursor.bump();
        p.cursor.skip_trivia();
        p.cursor.bump();
    }
}

/// Register a declaration statement's names into `scope`. Duplicates are
/// reported and skipped by the tables (first write wins); the statement
/// itself stays in the tree either way.
pub fn register_declarations(stmt: &Statement, scope: &mut ScopeTables, diags: &mut Diagnostics) {
    match &stmt.kind {
        StmtKind::Define { names, ty } => {
            let ty_text = ty.as_ref().map(|t| t.to_text());
            for name in names {
                scope.register_variable(
                    VariableDef {
                        name: name.name.clone(),
                        range: name.range,
                        ty: ty_text.clone(),
                    },
                    diags,
                );
            }
        }
        StmtKind::TypeDef {
            name: Some(name),
            ty,
        } => {
            scope.register_type(
                TypeDef {
                    name: name.name.clone(),
                    range: name.range,
                    ty: ty.as_ref().map(|t| t.to_text()),
                },
                diags,
            );
        }
        StmtKind::ConstantDef {
            name: Some(name),
            value,
        } => {
            scope.register_constant(
                ConstantDef {
                    name: name.name.clone(),
                    range: name.range,
                    value: value.as_ref().map(|v| v.to_text().into()),
                },
                diags,
            );
        }
        _ => {}
    }
}
