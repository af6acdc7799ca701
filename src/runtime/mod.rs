/// The data structures kept by an evaluation session.
pub mod data_structures;

/// Module for defining the fixed table of built-in words.
pub mod built_ins;

/// Module for defining the error reporting of the evaluator.
pub mod error;

/// Module for defining the evaluator itself.  This includes the traits for examining and driving
/// the interpreter's state.
pub mod interpreter;
