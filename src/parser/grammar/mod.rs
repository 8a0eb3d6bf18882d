//! Grammar for Genero 4GL
//!
//! The grammar is organized by construct family:
//! - `expressions` - the flat primary/operator expression loop
//! - `statements`  - keyword-dispatched statement parsers
//! - `blocks`      - scope-bearing MAIN/FUNCTION block parsers
//!
//! All parsing functions take `&mut Parser` and recover from every error:
//! they report through the diagnostic sink and keep consuming along the
//! best-available path.

pub mod blocks;
pub mod expressions;
pub mod statements;

pub use expressions::{ExprOptions, ExtraExprParser, parse_expression};
pub use statements::parse_statement;
