//! Builtin vocabulary of the language
//!
//! Static tables of system variables, system constants, and three function
//! families (system, array methods, string methods), behind a
//! case-insensitive registry consulted as the last step of symbol
//! resolution.

mod functions;
mod registry;

pub use functions::{BuiltinFunction, BuiltinParam, RegisterField, SystemConstant, SystemVariable};
pub use registry::{BuiltinRegistry, init_count, registry};
