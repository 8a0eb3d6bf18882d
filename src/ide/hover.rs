//! Hover (quick info)
//!
//! Resolves the word under the cursor and renders a short declaration-style
//! description. Builtin entries show their registered documentation
//! verbatim.

use text_size::{TextRange, TextSize};

use crate::builtins::registry;
use crate::semantic::{Symbol, resolve_name};
use crate::syntax::node_path_at_offset;

use super::analysis::Analysis;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoverResult {
    pub contents: String,
    /// Range of the hovered word.
    pub range: TextRange,
}

pub fn hover(analysis: &Analysis, offset: TextSize) -> Option<HoverResult> {
    if analysis.in_string_or_comment(offset) {
        return None;
    }
    let (word, range) = analysis.dotted_word_at(offset)?;
    let path = node_path_at_offset(analysis.module(), offset);
    let symbol = resolve_name(analysis.module(), &path, word, registry())?;
    Some(HoverResult {
        contents: render(&symbol),
        range,
    })
}

fn render(symbol: &Symbol<'_>) -> String {
    match symbol {
        Symbol::Variable(def) => match &def.ty {
            Some(ty) => format!("DEFINE {} {}", def.name, ty),
            None => format!("DEFINE {}", def.name),
        },
        Symbol::Type(def) => match &def.ty {
            Some(ty) => format!("TYPE {} {}", def.name, ty),
            None => format!("TYPE {}", def.name),
        },
        Symbol::Constant(def) => match &def.value {
            Some(value) => format!("CONSTANT {} = {}", def.name, value),
            None => format!("CONSTANT {}", def.name),
        },
        Symbol::Function(sig) => {
            format!("FUNCTION {}({})", sig.name, sig.params.join(", "))
        }
        Symbol::BuiltinVariable(var) => format!("{} {}\n{}", var.name, var.ty, var.doc),
        Symbol::BuiltinConstant(c) => format!("{} = {}\n{}", c.name, c.value, c.doc),
        Symbol::BuiltinFunction(f) => format!("{}\n{}", f.signature(), f.doc),
        Symbol::RegisterField(var, field) => {
            format!("{}.{} {}\n{}", var.name, field.name, field.ty, field.doc)
        }
    }
}
