//! Builtins registry
//!
//! Case-insensitive, constant-time lookup over the static vocabulary
//! tables. The registry is immutable once constructed; the process-wide
//! accessor [`registry`] initializes it exactly once and shares it across
//! concurrent readers without locking.

use std::sync::atomic::{AtomicUsize, Ordering};

use once_cell::sync::OnceCell;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use super::functions::{
    ARRAY_FUNCTIONS, BuiltinFunction, STRING_FUNCTIONS, SYSTEM_CONSTANTS, SYSTEM_FUNCTIONS,
    SYSTEM_VARIABLES, SystemConstant, SystemVariable,
};

/// Immutable lookup tables over the builtin vocabulary.
///
/// Keys are stored lower-cased; entries keep their canonical spelling.
#[derive(Debug)]
pub struct BuiltinRegistry {
    variables: FxHashMap<SmolStr, &'static SystemVariable>,
    constants: FxHashMap<SmolStr, &'static SystemConstant>,
    system_functions: FxHashMap<SmolStr, &'static BuiltinFunction>,
    array_functions: FxHashMap<SmolStr, &'static BuiltinFunction>,
    string_functions: FxHashMap<SmolStr, &'static BuiltinFunction>,
}

fn key(name: &str) -> SmolStr {
    SmolStr::from(name.to_ascii_lowercase())
}

fn index_functions(
    table: &'static [BuiltinFunction],
) -> FxHashMap<SmolStr, &'static BuiltinFunction> {
    table.iter().map(|f| (key(f.name), f)).collect()
}

impl BuiltinRegistry {
    /// Build the registry from the static tables.
    pub fn new() -> Self {
        let registry = Self {
            variables: SYSTEM_VARIABLES.iter().map(|v| (key(v.name), v)).collect(),
            constants: SYSTEM_CONSTANTS.iter().map(|c| (key(c.name), c)).collect(),
            system_functions: index_functions(SYSTEM_FUNCTIONS),
            array_functions: index_functions(ARRAY_FUNCTIONS),
            string_functions: index_functions(STRING_FUNCTIONS),
        };
        tracing::debug!(
            variables = registry.variables.len(),
            constants = registry.constants.len(),
            functions = registry.system_functions.len()
                + registry.array_functions.len()
                + registry.string_functions.len(),
            "builtin registry constructed"
        );
        registry
    }

    // =========================================================================
    // Case-insensitive lookup
    // =========================================================================

    pub fn variable(&self, name: &str) -> Option<&'static SystemVariable> {
        self.variables.get(&key(name)).copied()
    }

    pub fn constant(&self, name: &str) -> Option<&'static SystemConstant> {
        self.constants.get(&key(name)).copied()
    }

    pub fn system_function(&self, name: &str) -> Option<&'static BuiltinFunction> {
        self.system_functions.get(&key(name)).copied()
    }

    pub fn array_function(&self, name: &str) -> Option<&'static BuiltinFunction> {
        self.array_functions.get(&key(name)).copied()
    }

    pub fn string_function(&self, name: &str) -> Option<&'static BuiltinFunction> {
        self.string_functions.get(&key(name)).copied()
    }

    /// Look a function up across all three families: system functions first,
    /// then array methods, then string methods.
    pub fn function(&self, name: &str) -> Option<&'static BuiltinFunction> {
        self.system_function(name)
            .or_else(|| self.array_function(name))
            .or_else(|| self.string_function(name))
    }

    // =========================================================================
    // Enumeration (for completion lists)
    // =========================================================================

    pub fn variables(&self) -> impl Iterator<Item = &'static SystemVariable> + '_ {
        self.variables.values().copied()
    }

    pub fn constants(&self) -> impl Iterator<Item = &'static SystemConstant> + '_ {
        self.constants.values().copied()
    }

    pub fn system_functions(&self) -> impl Iterator<Item = &'static BuiltinFunction> + '_ {
        self.system_functions.values().copied()
    }

    pub fn array_functions(&self) -> impl Iterator<Item = &'static BuiltinFunction> + '_ {
        self.array_functions.values().copied()
    }

    pub fn string_functions(&self) -> impl Iterator<Item = &'static BuiltinFunction> + '_ {
        self.string_functions.values().copied()
    }
}

impl Default for BuiltinRegistry {
    fn default() -> Self {
        Self::new()
    }
}

static REGISTRY: OnceCell<BuiltinRegistry> = OnceCell::new();
static INIT_CALLS: AtomicUsize = AtomicUsize::new(0);

/// The process-wide registry, constructed on first access.
///
/// Concurrent first access from multiple analysis threads runs the
/// initializer exactly once; afterwards the tables are shared read-only.
pub fn registry() -> &'static BuiltinRegistry {
    REGISTRY.get_or_init(|| {
        INIT_CALLS.fetch_add(1, Ordering::SeqCst);
        BuiltinRegistry::new()
    })
}

/// How many times the process-wide initializer has run (at most once).
pub fn init_count() -> usize {
    INIT_CALLS.load(Ordering::SeqCst)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_function_lookup() {
        let registry = BuiltinRegistry::new();
        let upper = registry.system_function("LENGTH").unwrap();
        let lower = registry.system_function("length").unwrap();
        assert!(std::ptr::eq(upper, lower));
    }

    #[test]
    fn test_family_precedence() {
        let registry = BuiltinRegistry::new();
        // getLength exists in both array and string families
        let found = registry.function("getlength").unwrap();
        assert!(std::ptr::eq(found, registry.array_function("getLength").unwrap()));
    }

    #[test]
    fn test_variables_and_constants() {
        let registry = BuiltinRegistry::new();
        assert_eq!(registry.variable("STATUS").unwrap().name, "status");
        assert_eq!(registry.constant("NOTFOUND").unwrap().value, "100");
        assert!(registry.variable("sqlca").unwrap().field("sqlerrd").is_some());
    }

    #[test]
    fn test_global_initializes_once() {
        let threads: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| registry().system_function("length").is_some()))
            .collect();
        for handle in threads {
            assert!(handle.join().unwrap());
        }
        assert_eq!(init_count(), 1);
        registry();
        assert_eq!(init_count(), 1);
    }
}
