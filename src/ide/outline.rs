//! Outlining (code folding)
//!
//! Enumerates foldable regions over the tree: every statement with a
//! decorator contributes a region whose header stays visible while the body
//! collapses.

use smol_str::SmolStr;
use text_size::TextRange;

use crate::syntax::{Statement, StmtKind};

use super::analysis::Analysis;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineRegion {
    /// Label shown on the collapsed region, when the construct has a name.
    pub name: Option<SmolStr>,
    /// Header kept visible (`IF cond THEN`, `FUNCTION name(params)`).
    pub header: TextRange,
    /// Full extent of the construct.
    pub range: TextRange,
}

pub fn outline(analysis: &Analysis) -> Vec<OutlineRegion> {
    let mut regions = Vec::new();
    for stmt in &analysis.module().body {
        collect(stmt, &mut regions);
    }
    regions
}

fn collect(stmt: &Statement, regions: &mut Vec<OutlineRegion>) {
    if let Some(header) = stmt.decorator {
        regions.push(OutlineRegion {
            name: region_name(stmt),
            header,
            range: stmt.range,
        });
    }
    match &stmt.kind {
        StmtKind::Main(block) => {
            for nested in &block.body.statements {
                collect(nested, regions);
            }
        }
        StmtKind::Function(func) => {
            for nested in &func.body.statements {
                collect(nested, regions);
            }
        }
        StmtKind::If(if_stmt) => {
            for nested in &if_stmt.then_block.statements {
                collect(nested, regions);
            }
            if let Some(else_block) = &if_stmt.else_block {
                for nested in &else_block.statements {
                    collect(nested, regions);
                }
            }
        }
        _ => {}
    }
}

fn region_name(stmt: &Statement) -> Option<SmolStr> {
    match &stmt.kind {
        StmtKind::Main(_) => Some(SmolStr::new_static("MAIN")),
        StmtKind::Function(func) => func.name.as_ref().map(|n| n.name.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_main_and_function() {
        let source = "FUNCTION add(a, b)\n  RETURN a + b\nEND FUNCTION\nMAIN\nEND MAIN\n";
        let analysis = Analysis::new(source);
        let regions = outline(&analysis);
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].name.as_deref(), Some("add"));
        assert_eq!(regions[1].name.as_deref(), Some("MAIN"));
    }

    #[test]
    fn test_outline_nested_if() {
        let source = "MAIN\n  IF x > 0 THEN\n    LET x = 0\n  END IF\nEND MAIN\n";
        let analysis = Analysis::new(source);
        let regions = outline(&analysis);
        assert_eq!(regions.len(), 2);
        let if_region = &regions[1];
        assert!(if_region.name.is_none());
        // header covers "IF x > 0 THEN"
        let header =
            &source[usize::from(if_region.header.start())..usize::from(if_region.header.end())];
        assert!(header.starts_with("IF"));
        assert!(header.ends_with("THEN"));
        assert!(if_region.range.end() > if_region.header.end());
    }
}
