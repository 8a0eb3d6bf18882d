//! Collaborator contracts
//!
//! The hosting editor supplies project-level services through these traits:
//! database schema introspection, logical-name-to-file resolution, and
//! externally-defined function signatures. Their internals (wire formats,
//! caching, file watching) are the host's concern; this crate only consumes
//! the narrow surface declared here.

use std::path::PathBuf;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;
use thiserror::Error;

use crate::syntax::FunctionSig;

/// Failure at a provider boundary. The grammar itself never produces these;
/// they exist only where the host's services are consulted.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("unknown table '{0}'")]
    UnknownTable(SmolStr),
    #[error("unknown column '{1}' in table '{0}'")]
    UnknownColumn(SmolStr, SmolStr),
    #[error("no schema loaded for '{0}'")]
    NoSchema(String),
    #[error("unresolved program file '{0}'")]
    UnresolvedFile(String),
}

/// A table known to the schema provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableResult {
    pub name: SmolStr,
    pub columns: Vec<ColumnResult>,
}

/// A column of a table, with its declared database type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnResult {
    pub name: SmolStr,
    pub ty: SmolStr,
}

/// Database schema introspection, consumed while resolving
/// `LIKE table.column` declarations and SQL-adjacent constructs.
pub trait DatabaseInformationProvider {
    /// Select which source file's schema context subsequent queries use.
    fn set_filename(&self, path: &str);

    fn get_tables(&self) -> Vec<TableResult>;

    fn get_table(&self, name: &str) -> Result<TableResult, ProviderError>;

    fn get_columns(&self, table: &str) -> Result<Vec<ColumnResult>, ProviderError>;

    fn get_column(&self, table: &str, column: &str) -> Result<ColumnResult, ProviderError>;

    fn get_column_type(&self, table: &str, column: &str) -> Result<SmolStr, ProviderError> {
        Ok(self.get_column(table, column)?.ty)
    }
}

/// Resolves import/include logical names to file locations.
pub trait ProgramFileProvider {
    fn resolve(&self, logical_name: &str) -> Result<PathBuf, ProviderError>;

    /// Called when a previously resolved location moves; the analyzer
    /// re-resolves affected names afterwards.
    fn on_location_changed(&self, logical_name: &str);
}

/// Supplies externally-defined (non-builtin) function signatures, keyed per
/// source file.
pub trait FunctionInformationProvider {
    fn functions_in(&self, path: &str) -> Vec<FunctionSig>;

    fn function(&self, path: &str, name: &str) -> Option<FunctionSig>;
}

/// In-memory [`FunctionInformationProvider`], used by tests and by hosts
/// that index modules themselves.
#[derive(Debug, Default)]
pub struct StaticFunctionProvider {
    by_file: RwLock<FxHashMap<String, Vec<FunctionSig>>>,
}

impl StaticFunctionProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_functions(&self, path: impl Into<String>, functions: Vec<FunctionSig>) {
        self.by_file.write().insert(path.into(), functions);
    }
}

impl FunctionInformationProvider for StaticFunctionProvider {
    fn functions_in(&self, path: &str) -> Vec<FunctionSig> {
        self.by_file.read().get(path).cloned().unwrap_or_default()
    }

    fn function(&self, path: &str, name: &str) -> Option<FunctionSig> {
        self.by_file
            .read()
            .get(path)?
            .iter()
            .find(|sig| sig.name.eq_ignore_ascii_case(name))
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use text_size::TextRange;

    #[test]
    fn test_static_function_provider() {
        let provider = StaticFunctionProvider::new();
        provider.set_functions(
            "orders.4gl",
            vec![FunctionSig {
                name: "order_total".into(),
                range: TextRange::default(),
                params: vec!["order_id".into()],
            }],
        );
        assert_eq!(provider.functions_in("orders.4gl").len(), 1);
        assert!(provider.function("orders.4gl", "ORDER_TOTAL").is_some());
        assert!(provider.function("other.4gl", "order_total").is_none());
    }

    #[test]
    fn test_column_type_default_impl() {
        struct OneTable;
        impl DatabaseInformationProvider for OneTable {
            fn set_filename(&self, _path: &str) {}
            fn get_tables(&self) -> Vec<TableResult> {
                vec![self.get_table("customer").unwrap()]
            }
            fn get_table(&self, name: &str) -> Result<TableResult, ProviderError> {
                if name == "customer" {
                    Ok(TableResult {
                        name: "customer".into(),
                        columns: vec![ColumnResult {
                            name: "name".into(),
                            ty: "CHAR(40)".into(),
                        }],
                    })
                } else {
                    Err(ProviderError::UnknownTable(name.into()))
                }
            }
            fn get_columns(&self, table: &str) -> Result<Vec<ColumnResult>, ProviderError> {
                Ok(self.get_table(table)?.columns)
            }
            fn get_column(
                &self,
                table: &str,
                column: &str,
            ) -> Result<ColumnResult, ProviderError> {
                self.get_columns(table)?
                    .into_iter()
                    .find(|c| c.name.eq_ignore_ascii_case(column))
                    .ok_or_else(|| ProviderError::UnknownColumn(table.into(), column.into()))
            }
        }
        let provider = OneTable;
        assert_eq!(
            provider.get_column_type("customer", "NAME").unwrap(),
            "CHAR(40)"
        );
        assert!(provider.get_column_type("customer", "zip").is_err());
    }
}
