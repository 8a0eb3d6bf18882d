//! Go to definition
//!
//! Builtins have no source location, so only user declarations produce a
//! target.

use smol_str::SmolStr;
use text_size::{TextRange, TextSize};

use crate::builtins::registry;
use crate::semantic::{Symbol, resolve_name};
use crate::syntax::node_path_at_offset;

use super::analysis::Analysis;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GotoTarget {
    pub name: SmolStr,
    pub range: TextRange,
}

pub fn goto_definition(analysis: &Analysis, offset: TextSize) -> Option<GotoTarget> {
    if analysis.in_string_or_comment(offset) {
        return None;
    }
    let (word, _) = analysis.word_at(offset)?;
    let path = node_path_at_offset(analysis.module(), offset);
    let symbol = resolve_name(analysis.module(), &path, word, registry())?;
    match symbol {
        Symbol::Variable(def) => Some(GotoTarget {
            name: def.name.clone(),
            range: def.range,
        }),
        Symbol::Type(def) => Some(GotoTarget {
            name: def.name.clone(),
            range: def.range,
        }),
        Symbol::Constant(def) => Some(GotoTarget {
            name: def.name.clone(),
            range: def.range,
        }),
        Symbol::Function(sig) => Some(GotoTarget {
            name: sig.name.clone(),
            range: sig.range,
        }),
        _ => None,
    }
}
