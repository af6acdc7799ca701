/// Module for walking a statement's text while tracking where in it we are.
pub mod source_buffer;

/// Module for turning a statement into a list of tokens for the evaluator.
pub mod tokenizing;
