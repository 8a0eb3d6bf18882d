//! # genero-base
//!
//! Core library for Genero 4GL lexing, parsing, AST, and structural analysis.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → editor queries (completion, hover, goto-def, signatures, outline)
//!   ↓
//! semantic  → scoped name resolution over the AST + builtins registry
//!   ↓
//! builtins  → system variables, constants, and function families
//!   ↓
//! syntax    → AST node model, scope tables, position-indexed lookup
//!   ↓
//! parser    → logos lexer, token cursor, expression/statement grammar
//!   ↓
//! base      → primitives (TextRange/TextSize, line index)
//! ```
//!
//! `project` sits to the side and declares the collaborator contracts
//! (database info, program files, external function signatures) that the
//! hosting editor supplies.

// ============================================================================
// MODULES (dependency order: base → parser → syntax → builtins → semantic → ide)
// ============================================================================

/// Foundation types: TextRange/TextSize, line index
pub mod base;

/// Parser: logos lexer, token cursor, grammar, diagnostics
pub mod parser;

/// Syntax: AST node model, scope tables, position lookup
pub mod syntax;

/// Builtins: system variables, constants, and function families
pub mod builtins;

/// Semantic: scoped name resolution
pub mod semantic;

/// IDE features: completion, hover, goto-definition, signature help, outline
pub mod ide;

/// Collaborator contracts supplied by the hosting editor
pub mod project;

// Re-export foundation types
pub use base::{LineCol, LineIndex, TextRange, TextSize};
pub use parser::{Diagnostics, Parse, SyntaxError, parse_module};
