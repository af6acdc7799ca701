use crate::{
    lang::{source_buffer::SourceLocation, tokenizing::Token},
    runtime::{
        data_structures::dictionary::{Dictionary, WordInfo},
        error,
    },
};
use std::fmt::{self, Display, Formatter};

pub mod forth_interpreter;

use forth_interpreter::ForthInterpreter;

/// A call stack item is a record of a user word being expanded and the location of the token that
/// invoked it.  These items are read-only and the fields are accessed by member functions.
#[derive(Clone, PartialEq, Eq)]
pub struct CallItem {
    location: SourceLocation,
    word: String,
}

impl CallItem {
    /// Create a new call stack item.
    pub fn new(word: String, location: SourceLocation) -> CallItem {
        CallItem { location, word }
    }

    /// Where the word was invoked from.
    pub fn location(&self) -> &SourceLocation {
        &self.location
    }

    // The name of the word being expanded.
    pub fn word(&self) -> &String {
        &self.word
    }
}

/// Make sure that this item can be nicely displayed to the user in event of an error.
impl Display for CallItem {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.word)
    }
}

/// The user words currently being expanded, outermost first.
pub type CallStack = Vec<CallItem>;

/// The data stack of values managed by the interpreter.
pub type ValueStack = Vec<i64>;

/// Trait for managing the interpreter's data stack.  Intended to be called by the built-in words.
pub trait InterpreterStack {
    /// What is the maximum depth the stack has reached so far?
    fn stack_max_depth(&self) -> usize;

    /// The full data stack, bottom to top.
    fn stack(&self) -> &ValueStack;

    /// Push a value onto the stack.
    fn push(&mut self, value: i64);

    /// Pop a value from the stack.  If the stack is empty a stack underflow error is returned.
    fn pop(&mut self) -> error::Result<i64>;

    /// Read a value without removing it.  A depth of 0 is the top of the stack.  If the stack isn't
    /// deep enough a stack underflow error is returned.
    fn peek(&self, depth: usize) -> error::Result<i64>;
}

/// Trait for feeding statements to the interpreter and running token lists.
pub trait CodeManagement {
    /// Tokenize and run one statement.  A statement starting with `:` defines a word, any other
    /// statement is executed against the data stack.
    fn process_statement(&mut self, source: &str) -> error::Result<()>;

    /// Run a batch of statements in order, stopping at the first one that fails.
    fn process_statements(&mut self, statements: &[&str]) -> error::Result<()> {
        for statement in statements {
            self.process_statement(statement)?;
        }

        Ok(())
    }

    /// Run a list of tokens left to right.  User words found in the list are expanded in place by
    /// running their bodies through this same method.
    fn execute_tokens(&mut self, tokens: &[Token]) -> error::Result<()>;
}

/// Trait for managing and executing words known to the interpreter.
pub trait WordManagement {
    /// If currently set, this represents the location of the token being executed.
    fn current_location(&self) -> &Option<SourceLocation>;

    /// Add a word to the dictionary, replacing any earlier word of the same name.
    fn define_word(&mut self, info: WordInfo) -> error::Result<()>;

    /// Find a user word in the dictionary by name.
    fn find_word(&self, word: &str) -> Option<&WordInfo>;

    /// Find and execute a word by name.  User words are tried before the built-ins.  If the word
    /// is not found an unknown token error is returned.
    fn execute_word_named(&mut self, location: &SourceLocation, word: &str) -> error::Result<()>;

    /// The user words currently being expanded.
    fn call_stack(&self) -> &CallStack;

    /// Push a new name and location onto the call stack.
    fn call_stack_push(&mut self, name: String, location: SourceLocation);

    /// Pop the last name and location from the call stack.
    fn call_stack_pop(&mut self);
}

/// Core interpreter trait.
///
/// Brings together the stack, the statement processing and the word management.  Each instance is
/// one evaluation session with its own stack and dictionary, nothing is shared between sessions.
pub trait Interpreter: InterpreterStack + CodeManagement + WordManagement {
    /// The current word dictionary of user words known to the interpreter.
    fn dictionary(&self) -> &Dictionary;

    /// Clear the stack and forget all user words, as if the session had just started.
    fn reset(&mut self);
}

/// Evaluate a batch of statements in a fresh session and return the final stack, bottom to top.
/// Processing stops at the first statement that fails and that error is returned.
pub fn evaluate<S: AsRef<str>>(statements: &[S]) -> error::Result<Vec<i64>> {
    let mut interpreter = ForthInterpreter::new();

    for statement in statements {
        interpreter.process_statement(statement.as_ref())?;
    }

    Ok(interpreter.stack().clone())
}
