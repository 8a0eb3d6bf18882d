//! Editor-facing query surface
//!
//! [`Analysis`] wraps one parsed buffer; the free functions answer the
//! position-based queries an editor issues while the user types: hover,
//! completion, go-to-definition, signature help, and outlining. All queries
//! are read-only over the rebuilt-per-edit parse result.

mod analysis;
mod completion;
mod goto;
mod hover;
mod outline;
mod signature;

pub use analysis::Analysis;
pub use completion::{CompletionItem, CompletionKind, completions};
pub use goto::{GotoTarget, goto_definition};
pub use hover::{HoverResult, hover};
pub use outline::{OutlineRegion, outline};
pub use signature::{SignatureHelp, signature_help};
