//! Position-indexed node lookup
//!
//! [`NodeRef`] is a tagged borrow over the tree's node categories, giving
//! every node a uniform `range()`/`children()` surface. The primary query is
//! "smallest node whose span contains offset X", answered by a bounded-depth
//! walk from the module root down through children ordered by source
//! position.

use text_size::{TextRange, TextSize};

use super::expression::{ExprKind, Expression};
use super::statement::{Block, Module, Statement, StmtKind};

/// A borrowed reference to any node category in the tree.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Module(&'a Module),
    Statement(&'a Statement),
    Block(&'a Block),
    Expression(&'a Expression),
}

impl<'a> NodeRef<'a> {
    /// Source range covered by this node.
    pub fn range(&self) -> TextRange {
        match self {
            NodeRef::Module(m) => m.range,
            NodeRef::Statement(s) => s.range,
            NodeRef::Block(b) => b.range,
            NodeRef::Expression(e) => e.range,
        }
    }

    /// Outlinable header region, if this node folds.
    pub fn decorator(&self) -> Option<TextRange> {
        match self {
            NodeRef::Statement(s) => s.decorator,
            _ => None,
        }
    }

    /// Direct children, ordered by source position.
    pub fn children(&self) -> Vec<NodeRef<'a>> {
        let mut out = Vec::new();
        match self {
            NodeRef::Module(m) => {
                out.extend(m.body.iter().map(NodeRef::Statement));
            }
            NodeRef::Block(b) => {
                out.extend(b.statements.iter().map(NodeRef::Statement));
            }
            NodeRef::Statement(s) => collect_statement_children(s, &mut out),
            NodeRef::Expression(e) => collect_expression_children(e, &mut out),
        }
        out
    }
}

fn collect_statement_children<'a>(stmt: &'a Statement, out: &mut Vec<NodeRef<'a>>) {
    match &stmt.kind {
        StmtKind::Let { target, value } => {
            out.extend(target.iter().map(NodeRef::Expression));
            out.extend(value.iter().map(NodeRef::Expression));
        }
        StmtKind::Prepare { source, .. } => {
            out.extend(source.iter().map(NodeRef::Expression));
        }
        StmtKind::If(if_stmt) => {
            out.extend(if_stmt.condition.iter().map(NodeRef::Expression));
            out.push(NodeRef::Block(&if_stmt.then_block));
            out.extend(if_stmt.else_block.iter().map(NodeRef::Block));
        }
        StmtKind::Call { invocation, .. } => {
            out.extend(invocation.iter().map(NodeRef::Expression));
        }
        StmtKind::Return { values } | StmtKind::Display { values } => {
            out.extend(values.iter().map(NodeRef::Expression));
        }
        StmtKind::ConstantDef { value, .. } => {
            out.extend(value.iter().map(NodeRef::Expression));
        }
        StmtKind::Main(block) => out.push(NodeRef::Block(&block.body)),
        StmtKind::Function(func) => out.push(NodeRef::Block(&func.body)),
        StmtKind::Declare { .. }
        | StmtKind::Defer { .. }
        | StmtKind::Sql { .. }
        | StmtKind::Validate { .. }
        | StmtKind::Define { .. }
        | StmtKind::TypeDef { .. } => {}
    }
}

fn collect_expression_children<'a>(expr: &'a Expression, out: &mut Vec<NodeRef<'a>>) {
    match &expr.kind {
        ExprKind::FunctionCall { params, member, .. } => {
            out.extend(params.iter().map(NodeRef::Expression));
            out.extend(member.iter().map(|m| NodeRef::Expression(m)));
        }
        ExprKind::ParenWrapped { inner, .. } => {
            out.extend(inner.iter().map(|i| NodeRef::Expression(i)));
        }
        ExprKind::BracketWrapped { items, .. } => {
            out.extend(items.iter().map(NodeRef::Expression));
        }
        ExprKind::NestedStatement(stmt) => out.push(NodeRef::Statement(stmt)),
        ExprKind::Tokens(_) | ExprKind::StringLit(_) | ExprKind::Name(_) => {}
    }
    out.extend(expr.appended.iter().map(NodeRef::Expression));
}

/// The chain of nodes enclosing `offset`, outermost first, innermost last.
pub fn node_path_at_offset(module: &Module, offset: TextSize) -> Vec<NodeRef<'_>> {
    let mut path = Vec::new();
    let mut current = NodeRef::Module(module);
    loop {
        path.push(current);
        let next = current
            .children()
            .into_iter()
            .find(|child| child.range().contains(offset));
        match next {
            Some(child) => current = child,
            None => break,
        }
    }
    path
}

/// The smallest node whose span contains `offset`.
pub fn node_at_offset(module: &Module, offset: TextSize) -> Option<NodeRef<'_>> {
    let path = node_path_at_offset(module, offset);
    path.last().copied().filter(|n| n.range().contains(offset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_module;

    #[test]
    fn test_path_is_outermost_first() {
        let source = "MAIN\n  LET x = a + 1\nEND MAIN\n";
        let parse = parse_module(source);
        let offset = TextSize::new(source.find('a').unwrap() as u32);
        let path = node_path_at_offset(&parse.module, offset);
        assert!(matches!(path[0], NodeRef::Module(_)));
        assert!(matches!(path[1], NodeRef::Statement(_)));
        assert!(matches!(path.last(), Some(NodeRef::Expression(_))));
    }

    #[test]
    fn test_smallest_node_at_offset() {
        let source = "MAIN\n  LET x = a + 1\nEND MAIN\n";
        let parse = parse_module(source);
        let offset = TextSize::new(source.find('a').unwrap() as u32);
        let node = node_at_offset(&parse.module, offset).unwrap();
        assert!(matches!(node, NodeRef::Expression(_)));
        assert!(node.range().contains(offset));
    }

    #[test]
    fn test_offset_outside_any_node() {
        let source = "MAIN\nEND MAIN\n";
        let parse = parse_module(source);
        let offset = TextSize::new(source.len() as u32 + 10);
        assert!(node_at_offset(&parse.module, offset).is_none());
    }
}
