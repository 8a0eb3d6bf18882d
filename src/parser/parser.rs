//! Parser state and module entry point
//!
//! [`Parser`] couples the token cursor with the diagnostic sink; grammar
//! functions take `&mut Parser` and advance the cursor exactly once per
//! consumed token. [`parse_module`] drives the top-level loop.

use text_size::{TextRange, TextSize};

use crate::syntax::{Module, StmtKind};

use super::cursor::TokenCursor;
use super::errors::{Diagnostics, ErrorCode, SyntaxError};
use super::grammar::blocks::{parse_function_block, parse_main_block, register_declarations};
use super::grammar::statements::parse_statement;
use super::lexer::{Token, tokenize};
use super::token_kind::TokenKind;

/// Parse result: the best-effort module tree plus accumulated diagnostics.
#[derive(Debug)]
pub struct Parse {
    pub module: Module,
    pub errors: Vec<SyntaxError>,
}

impl Parse {
    /// Check if parsing succeeded without errors.
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// The parser state: cursor plus diagnostic sink.
///
/// The cursor is public so statement-specific extension parsers
/// ([`ExprOptions::extra_parsers`](crate::parser::ExprOptions)) can inspect
/// and consume tokens; errors are reported through [`Parser::error`].
pub struct Parser<'a> {
    pub cursor: TokenCursor<'a>,
    pub(crate) diags: Diagnostics,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token<'a>]) -> Self {
        Self {
            cursor: TokenCursor::new(tokens),
            diags: Diagnostics::new(),
        }
    }

    pub fn finish(self) -> Diagnostics {
        self.diags
    }

    // =========================================================================
    // Error reporting (never halts parsing)
    // =========================================================================

    /// Report an error at the current token.
    pub fn error(&mut self, message: impl Into<String>, code: ErrorCode) {
        let range = self.cursor.current_range();
        self.diags.report(message, range, code);
    }

    pub fn error_at(&mut self, message: impl Into<String>, range: TextRange, code: ErrorCode) {
        self.diags.report(message, range, code);
    }
}

/// Parse a whole Genero source module.
///
/// Always returns a tree; syntax errors accumulate in [`Parse::errors`].
pub fn parse_module(input: &str) -> Parse {
    let tokens = tokenize(input);
    let mut p = Parser::new(&tokens);
    let mut module = Module::default();

    loop {
        p.cursor.skip_trivia();
        if p.cursor.at_eof() {
            break;
        }
        let pos_before = p.cursor.position();

        match p.cursor.current_kind() {
            TokenKind::MainKw => {
                let stmt = parse_main_block(&mut p);
                module.body.push(stmt);
            }
            TokenKind::FunctionKw => {
                let stmt = parse_function_block(&mut p);
                if let StmtKind::Function(func) = &stmt.kind {
                    if let Some(name) = &func.name {
                        module.scope.register_function(
                            crate::syntax::FunctionSig {
                                name: name.name.clone(),
                                range: name.range,
                                params: func.params.iter().map(|p| p.name.clone()).collect(),
                            },
                            &mut p.diags,
                        );
                    }
                }
                module.body.push(stmt);
            }
            _ => match parse_statement(&mut p) {
                Some(stmt) => {
                    register_declarations(&stmt, &mut module.scope, &mut p.diags);
                    module.body.push(stmt);
                }
                None => {
                    let got = p.cursor.current_kind().display_name();
                    p.error(format!("unexpected {got} at top level"), ErrorCode::E0502);
                    p.cursor.bump();
                }
            },
        }

        // Safety: if we didn't make progress, force-skip a token
        if p.cursor.position() == pos_before && !p.cursor.at_eof() {
            p.cursor.bump();
        }
    }

    module.range = TextRange::new(TextSize::new(0), TextSize::of(input));
    Parse {
        module,
        errors: p.finish().into_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty() {
        let parse = parse_module("");
        assert!(parse.ok());
        assert!(parse.module.body.is_empty());
    }

    #[test]
    fn test_parse_main_block() {
        let parse = parse_module("MAIN\n  LET x = 1\nEND MAIN\n");
        assert!(parse.ok(), "errors: {:?}", parse.errors);
        assert!(parse.module.main().is_some());
    }

    #[test]
    fn test_parse_function_registers_signature() {
        let parse = parse_module("FUNCTION add(a, b)\n  RETURN a + b\nEND FUNCTION\n");
        assert!(parse.ok(), "errors: {:?}", parse.errors);
        let sig = parse.module.scope.function("ADD").expect("function registered");
        assert_eq!(sig.params.len(), 2);
    }

    #[test]
    fn test_garbage_recovers() {
        let parse = parse_module(") ) MAIN\nEND MAIN");
        assert!(!parse.ok());
        assert!(parse.module.main().is_some());
    }
}
