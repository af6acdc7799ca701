/// Module for managing statement text and turning it into tokens.
pub mod lang;

/// Module for the runtime and the data structures used by the interpreter.  As well as the
/// interpreter itself.
pub mod runtime;

pub use runtime::{
    error::{DefinitionError, ErrorKind, Result, ScriptError},
    interpreter::{evaluate, forth_interpreter::ForthInterpreter},
};
