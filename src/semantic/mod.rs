//! Name resolution
//!
//! Resolves a name at a tree position by walking the enclosing scopes from
//! the innermost outwards, then the module scope, then the builtins
//! registry. Lookup is case-insensitive throughout.

use crate::builtins::{
    BuiltinFunction, BuiltinRegistry, RegisterField, SystemConstant, SystemVariable,
};
use crate::syntax::{
    ConstantDef, FunctionSig, Module, NodeRef, ScopeTables, StmtKind, TypeDef, VariableDef,
};

/// A resolved symbol: either a user declaration borrowed from the tree, or
/// an entry from the static builtin tables.
#[derive(Debug, Clone, Copy)]
pub enum Symbol<'a> {
    Variable(&'a VariableDef),
    Type(&'a TypeDef),
    Constant(&'a ConstantDef),
    Function(&'a FunctionSig),
    BuiltinVariable(&'static SystemVariable),
    BuiltinConstant(&'static SystemConstant),
    BuiltinFunction(&'static BuiltinFunction),
    /// A program-register sub-field (`sqlca.sqlcode`).
    RegisterField(&'static SystemVariable, &'static RegisterField),
}

impl Symbol<'_> {
    /// Canonical spelling of the resolved symbol.
    pub fn name(&self) -> &str {
        match self {
            Symbol::Variable(def) => &def.name,
            Symbol::Type(def) => &def.name,
            Symbol::Constant(def) => &def.name,
            Symbol::Function(sig) => &sig.name,
            Symbol::BuiltinVariable(var) => var.name,
            Symbol::BuiltinConstant(c) => c.name,
            Symbol::BuiltinFunction(f) => f.name,
            Symbol::RegisterField(_, field) => field.name,
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(
            self,
            Symbol::BuiltinVariable(_)
                | Symbol::BuiltinConstant(_)
                | Symbol::BuiltinFunction(_)
                | Symbol::RegisterField(..)
        )
    }
}

/// Resolve `name` as seen from the node path at some position.
///
/// `path` is the chain of enclosing nodes (outermost first) as produced by
/// [`crate::syntax::node_path_at_offset`].
pub fn resolve_name<'a>(
    module: &'a Module,
    path: &[NodeRef<'a>],
    name: &str,
    registry: &BuiltinRegistry,
) -> Option<Symbol<'a>> {
    for node in path.iter().rev() {
        let NodeRef::Statement(stmt) = node else {
            continue;
        };
        let scope = match &stmt.kind {
            StmtKind::Main(block) => &block.scope,
            StmtKind::Function(func) => &func.scope,
            _ => continue,
        };
        if let Some(symbol) = lookup_scope(scope, name) {
            tracing::trace!(name, "resolved in enclosing scope");
            return Some(symbol);
        }
    }
    if let Some(symbol) = lookup_scope(&module.scope, name) {
        tracing::trace!(name, "resolved at module scope");
        return Some(symbol);
    }
    let symbol = lookup_builtins(registry, name);
    if symbol.is_some() {
        tracing::trace!(name, "resolved as builtin");
    }
    symbol
}

fn lookup_scope<'a>(scope: &'a ScopeTables, name: &str) -> Option<Symbol<'a>> {
    if let Some(def) = scope.variable(name) {
        return Some(Symbol::Variable(def));
    }
    if let Some(def) = scope.type_def(name) {
        return Some(Symbol::Type(def));
    }
    if let Some(def) = scope.constant(name) {
        return Some(Symbol::Constant(def));
    }
    scope.function(name).map(Symbol::Function)
}

fn lookup_builtins(registry: &BuiltinRegistry, name: &str) -> Option<Symbol<'static>> {
    // dotted form resolves program-register fields: sqlca.sqlcode
    if let Some((register, field)) = name.split_once('.') {
        let var = registry.variable(register)?;
        let field = var.field(field)?;
        return Some(Symbol::RegisterField(var, field));
    }
    if let Some(var) = registry.variable(name) {
        return Some(Symbol::BuiltinVariable(var));
    }
    if let Some(c) = registry.constant(name) {
        return Some(Symbol::BuiltinConstant(c));
    }
    registry.function(name).map(Symbol::BuiltinFunction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtins::registry;
    use crate::parser::parse_module;
    use crate::syntax::node_path_at_offset;
    use text_size::TextSize;

    #[test]
    fn test_local_shadows_builtin() {
        let source = "MAIN\n  DEFINE status INT\n  LET status = 0\nEND MAIN\n";
        let parse = parse_module(source);
        let offset = TextSize::new(source.find("LET").unwrap() as u32 + 4);
        let path = node_path_at_offset(&parse.module, offset);
        let symbol = resolve_name(&parse.module, &path, "status", registry()).unwrap();
        assert!(matches!(symbol, Symbol::Variable(_)));
    }

    #[test]
    fn test_builtin_fallback() {
        let source = "MAIN\n  LET x = 1\nEND MAIN\n";
        let parse = parse_module(source);
        let path = node_path_at_offset(&parse.module, TextSize::new(10));
        let symbol = resolve_name(&parse.module, &path, "NOTFOUND", registry()).unwrap();
        assert!(matches!(symbol, Symbol::BuiltinConstant(_)));
    }

    #[test]
    fn test_module_function_resolution() {
        let source = "FUNCTION add(a, b)\n  RETURN a + b\nEND FUNCTION\nMAIN\nEND MAIN\n";
        let parse = parse_module(source);
        let offset = TextSize::new(source.find("MAIN").unwrap() as u32 + 1);
        let path = node_path_at_offset(&parse.module, offset);
        let symbol = resolve_name(&parse.module, &path, "ADD", registry()).unwrap();
        assert!(matches!(symbol, Symbol::Function(_)));
    }

    #[test]
    fn test_register_field() {
        let symbol = lookup_builtins(registry(), "sqlca.sqlcode").unwrap();
        assert!(matches!(symbol, Symbol::RegisterField(..)));
        assert_eq!(symbol.name(), "sqlcode");
    }
}
