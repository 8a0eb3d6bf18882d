//! Signature help
//!
//! Finds the innermost function call enclosing the cursor and reports its
//! signature with the active parameter index. Builtin signatures come from
//! the registry; user functions from the module scope.

use text_size::TextSize;

use crate::builtins::registry;
use crate::syntax::{ExprKind, NodeRef, node_path_at_offset};

use super::analysis::Analysis;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureHelp {
    /// Display form, e.g. `length(source) RETURNS INTEGER`.
    pub label: String,
    pub documentation: Option<String>,
    pub parameters: Vec<String>,
    /// Zero-based index of the parameter under the cursor.
    pub active_parameter: usize,
}

pub fn signature_help(analysis: &Analysis, offset: TextSize) -> Option<SignatureHelp> {
    if analysis.in_string_or_comment(offset) {
        return None;
    }
    let path = node_path_at_offset(analysis.module(), offset);
    for node in path.iter().rev() {
        let NodeRef::Expression(expr) = node else {
            continue;
        };
        let ExprKind::FunctionCall {
            name,
            name_range,
            params,
            ..
        } = &expr.kind
        else {
            continue;
        };
        if offset <= name_range.end() {
            // cursor is on the name, not inside the parameter list
            continue;
        }
        let active = params
            .iter()
            .take_while(|p| p.range.end() < offset)
            .count();
        if let Some(help) = builtin_signature(name, active) {
            return Some(help);
        }
        if let Some(sig) = analysis.module().scope.function(name) {
            let active = active.min(sig.params.len().saturating_sub(1));
            return Some(SignatureHelp {
                label: format!("FUNCTION {}({})", sig.name, sig.params.join(", ")),
                documentation: None,
                parameters: sig.params.iter().map(|p| p.to_string()).collect(),
                active_parameter: active,
            });
        }
    }
    None
}

fn builtin_signature(name: &str, active: usize) -> Option<SignatureHelp> {
    let f = registry().function(name)?;
    Some(SignatureHelp {
        label: f.signature(),
        documentation: Some(f.doc.to_string()),
        parameters: f.params.iter().map(|p| p.name.to_string()).collect(),
        active_parameter: active.min(f.params.len().saturating_sub(1)),
    })
}
