//! AST node model for Genero 4GL
//!
//! The tree is a pair of closed tagged-variant families, [`ExprKind`] and
//! [`StmtKind`], with exhaustive matching at consumption sites. Every node
//! carries half-open byte offsets; statements additionally carry an optional
//! decorator range marking the outlinable header (e.g. `IF cond THEN`).
//!
//! Children are appended during the single forward parse, so they are
//! naturally ordered by source position; position lookup walks the ordered
//! children top-down (see [`node_path_at_offset`]).

mod expression;
mod node;
mod scope;
mod statement;

pub use expression::{ExprKind, Expression};
pub use node::{NodeRef, node_at_offset, node_path_at_offset};
pub use scope::{ConstantDef, FunctionSig, ScopeTables, TypeDef, VariableDef};
pub use statement::{
    Block, BlockScope, DeclareSource, FunctionBlock, IfStatement, Module, NameRef, Statement,
    StmtKind, TypeExpr,
};
