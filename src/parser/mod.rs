//! Error-tolerant recursive-descent parser for Genero 4GL
//!
//! This module provides:
//! - **logos** lexing into a flat token buffer ([`lexer`])
//! - an explicit token cursor threaded through the grammar ([`cursor`])
//! - the expression and statement grammar ([`grammar`])
//! - accumulated, non-fatal diagnostics ([`errors`])
//! - a standalone quote/comment scanner for ancillary tools ([`scanner`])
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Tokens with TokenKind
//!     ↓
//! TokenCursor → single shared position over the buffer
//!     ↓
//! Statement/Expression grammar (mutually recursive) → AST (syntax module)
//! ```
//!
//! The grammar always returns *some* tree: the dominant caller is an editor
//! analyzing text as it is typed, so every error is recorded and recovered
//! from, and end-of-file unconditionally terminates every loop.

pub mod cursor;
pub mod errors;
pub mod grammar;
pub mod lexer;
#[allow(clippy::module_inception)]
mod parser;
pub mod scanner;
mod token_kind;

pub use cursor::TokenCursor;
pub use errors::{Diagnostics, ErrorCode, Severity, SyntaxError};
pub use grammar::{ExprOptions, ExtraExprParser, parse_expression, parse_statement};
pub use lexer::{Lexer, Token, tokenize};
pub use parser::{Parse, Parser, parse_module};
pub use scanner::{CharClass, classify_offset, is_in_string_or_comment};
pub use token_kind::TokenKind;
