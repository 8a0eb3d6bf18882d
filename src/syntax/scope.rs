//! Scope symbol tables
//!
//! Each scope-bearing container (`MAIN` block, `FUNCTION` block, the module
//! itself) owns name-keyed tables of variables, types, and constants, with
//! case-insensitive lookup. Registration is first-write-wins: a duplicate
//! name in one scope is reported through the diagnostic sink, the later
//! definition stays attached to the tree for navigation, and only the table
//! insertion is skipped.

use indexmap::IndexMap;
use smol_str::SmolStr;
use text_size::TextRange;

use crate::parser::{Diagnostics, ErrorCode};

/// A declared variable (`DEFINE x INT`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDef {
    /// Original spelling.
    pub name: SmolStr,
    pub range: TextRange,
    /// Declared type, textual form (`INT`, `LIKE customer.name`, ...).
    pub ty: Option<SmolStr>,
}

/// A declared type alias (`TYPE t ...`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDef {
    pub name: SmolStr,
    pub range: TextRange,
    pub ty: Option<SmolStr>,
}

/// A declared constant (`CONSTANT c = 1`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantDef {
    pub name: SmolStr,
    pub range: TextRange,
    /// Textual form of the constant's value.
    pub value: Option<SmolStr>,
}

/// A function signature registered at module scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSig {
    pub name: SmolStr,
    pub range: TextRange,
    pub params: Vec<SmolStr>,
}

/// Per-scope dictionaries of variables, types, constants, and functions.
///
/// Keys are stored lower-cased; the original spelling lives on the entry.
/// Insertion order is preserved (completion lists follow declaration order).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScopeTables {
    variables: IndexMap<SmolStr, VariableDef>,
    types: IndexMap<SmolStr, TypeDef>,
    constants: IndexMap<SmolStr, ConstantDef>,
    functions: IndexMap<SmolStr, FunctionSig>,
}

fn key(name: &str) -> SmolStr {
    SmolStr::from(name.to_ascii_lowercase())
}

impl ScopeTables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a variable; reports and skips on duplicate.
    pub fn register_variable(&mut self, def: VariableDef, diags: &mut Diagnostics) -> bool {
        let k = key(&def.name);
        if self.variables.contains_key(&k) {
            tracing::trace!(name = %def.name, "duplicate variable registration");
            diags.report(
                format!("variable '{}' is defined more than once", def.name),
                def.range,
                ErrorCode::E0302,
            );
            return false;
        }
        tracing::trace!(name = %def.name, "register variable");
        self.variables.insert(k, def);
        true
    }

    /// Register a type; first write wins, duplicate reported once.
    pub fn register_type(&mut self, def: TypeDef, diags: &mut Diagnostics) -> bool {
        let k = key(&def.name);
        if self.types.contains_key(&k) {
            diags.report(
                format!("type '{}' is defined more than once", def.name),
                def.range,
                ErrorCode::E0302,
            );
            return false;
        }
        tracing::trace!(name = %def.name, "register type");
        self.types.insert(k, def);
        true
    }

    /// Register a constant; reports and skips on duplicate.
    pub fn register_constant(&mut self, def: ConstantDef, diags: &mut Diagnostics) -> bool {
        let k = key(&def.name);
        if self.constants.contains_key(&k) {
            diags.report(
                format!("constant '{}' is defined more than once", def.name),
                def.range,
                ErrorCode::E0302,
            );
            return false;
        }
        tracing::trace!(name = %def.name, "register constant");
        self.constants.insert(k, def);
        true
    }

    /// Register a function; reports and skips on duplicate.
    pub fn register_function(&mut self, sig: FunctionSig, diags: &mut Diagnostics) -> bool {
        let k = key(&sig.name);
        if self.functions.contains_key(&k) {
            diags.report(
                format!("function '{}' is defined more than once", sig.name),
                sig.range,
                ErrorCode::E0302,
            );
            return false;
        }
        tracing::trace!(name = %sig.name, "register function");
        self.functions.insert(k, sig);
        true
    }

    // =========================================================================
    // Case-insensitive lookup
    // =========================================================================

    pub fn variable(&self, name: &str) -> Option<&VariableDef> {
        self.variables.get(&key(name))
    }

    pub fn type_def(&self, name: &str) -> Option<&TypeDef> {
        self.types.get(&key(name))
    }

    pub fn constant(&self, name: &str) -> Option<&ConstantDef> {
        self.constants.get(&key(name))
    }

    pub fn function(&self, name: &str) -> Option<&FunctionSig> {
        self.functions.get(&key(name))
    }

    // =========================================================================
    // Enumeration (declaration order)
    // =========================================================================

    pub fn variables(&self) -> impl Iterator<Item = &VariableDef> {
        self.variables.values()
    }

    pub fn types(&self) -> impl Iterator<Item = &TypeDef> {
        self.types.values()
    }

    pub fn constants(&self) -> impl Iterator<Item = &ConstantDef> {
        self.constants.values()
    }

    pub fn functions(&self) -> impl Iterator<Item = &FunctionSig> {
        self.functions.values()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
            && self.types.is_empty()
            && self.constants.is_empty()
            && self.functions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use text_size::TextSize;

    fn range(start: u32, end: u32) -> TextRange {
        TextRange::new(TextSize::new(start), TextSize::new(end))
    }

    fn var(name: &str, start: u32) -> VariableDef {
        VariableDef {
            name: name.into(),
            range: range(start, start + name.len() as u32),
            ty: Some("INT".into()),
        }
    }

    #[test]
    fn test_case_insensitive_lookup() {
        let mut scope = ScopeTables::new();
        let mut diags = Diagnostics::new();
        assert!(scope.register_variable(var("Total", 0), &mut diags));
        assert!(scope.variable("TOTAL").is_some());
        assert!(scope.variable("total").is_some());
        assert_eq!(scope.variable("total").unwrap().name, "Total");
    }

    #[test]
    fn test_duplicate_first_write_wins() {
        let mut scope = ScopeTables::new();
        let mut diags = Diagnostics::new();
        assert!(scope.register_variable(var("x", 0), &mut diags));
        assert!(!scope.register_variable(var("X", 10), &mut diags));
        assert_eq!(scope.variables().count(), 1);
        assert_eq!(scope.variable("x").unwrap().range, range(0, 1));
        assert_eq!(diags.len(), 1);
    }

    #[test]
    fn test_tables_are_independent() {
        let mut scope = ScopeTables::new();
        let mut diags = Diagnostics::new();
        scope.register_variable(var("n", 0), &mut diags);
        scope.register_type(
            TypeDef {
                name: "n".into(),
                range: range(5, 6),
                ty: None,
            },
            &mut diags,
        );
        // Same name in different tables is not a duplicate
        assert!(diags.is_empty());
    }
}
