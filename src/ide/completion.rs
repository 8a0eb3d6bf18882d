//! Completion
//!
//! Candidates are gathered in resolution order: enclosing scopes (innermost
//! first), then module scope, then the builtin tables, then statement
//! keywords. The first entry for a name wins, so scope symbols shadow
//! builtins of the same name.

use rustc_hash::FxHashSet;
use smol_str::SmolStr;
use text_size::TextSize;

use crate::builtins::registry;
use crate::syntax::{NodeRef, ScopeTables, StmtKind, node_path_at_offset};

use super::analysis::Analysis;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionKind {
    Variable,
    Type,
    Constant,
    Function,
    SystemVariable,
    SystemConstant,
    BuiltinFunction,
    Keyword,
}

#[derive(Debug, Clone)]
pub struct CompletionItem {
    pub label: SmolStr,
    pub kind: CompletionKind,
    pub detail: Option<String>,
    pub documentation: Option<String>,
}

impl CompletionItem {
    pub fn new(label: impl Into<SmolStr>, kind: CompletionKind) -> Self {
        Self {
            label: label.into(),
            kind,
            detail: None,
            documentation: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_documentation(mut self, doc: impl Into<String>) -> Self {
        self.documentation = Some(doc.into());
        self
    }
}

const STATEMENT_KEYWORDS: &[&str] = &[
    "CALL", "CONSTANT", "DECLARE", "DEFER", "DEFINE", "DISPLAY", "ELSE", "END", "FUNCTION",
    "IF", "LET", "MAIN", "PREPARE", "RETURN", "SQL", "THEN", "TYPE", "VALIDATE",
];

pub fn completions(analysis: &Analysis, offset: TextSize) -> Vec<CompletionItem> {
    let mut items = Vec::new();
    if analysis.in_string_or_comment(offset) {
        return items;
    }
    let mut seen: FxHashSet<SmolStr> = FxHashSet::default();

    let path = node_path_at_offset(analysis.module(), offset);
    for node in path.iter().rev() {
        let NodeRef::Statement(stmt) = node else {
            continue;
        };
        match &stmt.kind {
            StmtKind::Main(block) => push_scope(&block.scope, &mut items, &mut seen),
            StmtKind::Function(func) => push_scope(&func.scope, &mut items, &mut seen),
            _ => {}
        }
    }
    push_scope(&analysis.module().scope, &mut items, &mut seen);

    let builtins = registry();
    for var in builtins.variables() {
        push(
            &mut items,
            &mut seen,
            CompletionItem::new(var.name, CompletionKind::SystemVariable)
                .with_detail(var.ty)
                .with_documentation(var.doc),
        );
    }
    for c in builtins.constants() {
        push(
            &mut items,
            &mut seen,
            CompletionItem::new(c.name, CompletionKind::SystemConstant)
                .with_detail(c.value)
                .with_documentation(c.doc),
        );
    }
    for f in builtins
        .system_functions()
        .chain(builtins.array_functions())
        .chain(builtins.string_functions())
    {
        push(
            &mut items,
            &mut seen,
            CompletionItem::new(f.name, CompletionKind::BuiltinFunction)
                .with_detail(f.signature())
                .with_documentation(f.doc),
        );
    }

    for kw in STATEMENT_KEYWORDS {
        push(
            &mut items,
            &mut seen,
            CompletionItem::new(*kw, CompletionKind::Keyword),
        );
    }

    items
}

fn push_scope(scope: &ScopeTables, items: &mut Vec<CompletionItem>, seen: &mut FxHashSet<SmolStr>) {
    for def in scope.variables() {
        let mut item = CompletionItem::new(def.name.clone(), CompletionKind::Variable);
        if let Some(ty) = &def.ty {
            item = item.with_detail(ty.as_str());
        }
        push(items, seen, item);
    }
    for def in scope.types() {
        let mut item = CompletionItem::new(def.name.clone(), CompletionKind::Type);
        if let Some(ty) = &def.ty {
            item = item.with_detail(ty.as_str());
        }
        push(items, seen, item);
    }
    for def in scope.constants() {
        let mut item = CompletionItem::new(def.name.clone(), CompletionKind::Constant);
        if let Some(value) = &def.value {
            item = item.with_detail(value.as_str());
        }
        push(items, seen, item);
    }
    for sig in scope.functions() {
        push(
            items,
            seen,
            CompletionItem::new(sig.name.clone(), CompletionKind::Function)
                .with_detail(format!("FUNCTION {}({})", sig.name, sig.params.join(", "))),
        );
    }
}

fn push(items: &mut Vec<CompletionItem>, seen: &mut FxHashSet<SmolStr>, item: CompletionItem) {
    let key = SmolStr::from(item.label.to_ascii_lowercase());
    if seen.insert(key) {
        items.push(item);
    }
}
