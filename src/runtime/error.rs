
use std::{ error::Error,
           fmt::{ self, Debug, Display, Formatter } };
use crate::{ runtime::interpreter::CallStack,
             lang::source_buffer::SourceLocation };

use super::interpreter::Interpreter;



pub type Result<T> = std::result::Result<T, ScriptError>;



/// The reasons a `: name body... ;` statement can be rejected.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum DefinitionError
{
    /// The statement doesn't have room for both a name and a body.
    TooShort,

    /// The statement doesn't end with `;`.
    MissingTerminator,

    /// The name given is an integer literal.
    NumberName(String),

    /// The name given is one of the built-in operators.
    BuiltInName(String)
}


impl Display for DefinitionError
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result
    {
        match self
        {
            DefinitionError::TooShort => write!(f, "definition too short"),
            DefinitionError::MissingTerminator => write!(f, "definition missing terminator ';'"),
            DefinitionError::NumberName(name) => write!(f, "cannot redefine a number: {}", name),
            DefinitionError::BuiltInName(name) =>
                write!(f, "cannot redefine a built-in word: {}", name)
        }
    }
}


/// The kinds of failure an evaluation can end with.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ErrorKind
{
    /// A word needed more values than the stack held.  The location names the word.
    StackUnderflow { needed: usize, available: usize },

    /// `/` was asked to divide by zero.
    DivideByZero,

    /// A malformed or disallowed word definition.
    InvalidDefinition(DefinitionError),

    /// The token is neither a number, a user word, nor a built-in.
    UnknownToken(String),

    /// Reading the statements themselves failed.
    Io(String)
}


impl Display for ErrorKind
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result
    {
        match self
        {
            ErrorKind::StackUnderflow { needed, available } =>
                write!(f, "empty stack: needed {} value(s), found {}", needed, available),
            ErrorKind::DivideByZero => write!(f, "divide by zero"),
            ErrorKind::InvalidDefinition(reason) => write!(f, "invalid definition, {}", reason),
            ErrorKind::UnknownToken(token) => write!(f, "unknown word {}", token),
            ErrorKind::Io(message) => write!(f, "I/O error: {}", message)
        }
    }
}



/// Any error that occurs while evaluating a batch of statements.
#[derive(Clone)]
pub struct ScriptError
{
    /// The location of the offending token, if available.
    location: Option<SourceLocation>,

    /// What went wrong.
    kind: ErrorKind,

    /// The user words being expanded at the time of the error, if available.
    call_stack: Option<CallStack>
}


impl Error for ScriptError
{
}


/// Pretty print the ScriptError, including the chain of user words that lead to the failure.
impl Display for ScriptError
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result
    {
        match &self.location
        {
            Some(location) => write!(f, "{}: {}", location, self.kind)?,
            None => write!(f, "{}", self.kind)?
        }

        if let Some(call_stack) = &self.call_stack
            && !call_stack.is_empty()
        {
            write!(f, "\n\nCall stack\n")?;

            for item in call_stack.iter().rev()
            {
                writeln!(f, "  {}", item)?;
            }
        }

        Ok(())
    }
}


impl Debug for ScriptError
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result
    {
        write!(f, "{}", self)
    }
}


impl ScriptError
{
    /// Create a new ScriptError.
    pub fn new(location: Option<SourceLocation>,
               kind: ErrorKind,
               call_stack: Option<CallStack>) -> ScriptError
    {
        ScriptError
            {
                location,
                kind,
                call_stack
            }
    }

    /// Create a new Script Error and wrap it in a Result::Err.
    pub fn new_as_result<T>(location: Option<SourceLocation>,
                            kind: ErrorKind,
                            call_stack: Option<CallStack>) -> Result<T>
    {
        Err(ScriptError::new(location, kind, call_stack))
    }

    /// If available, the location of the token that failed.
    pub fn location(&self) -> &Option<SourceLocation>
    {
        &self.location
    }

    /// What kind of failure this was.
    pub fn kind(&self) -> &ErrorKind
    {
        &self.kind
    }

    /// If available, the user words being expanded when the error happened.
    pub fn call_stack(&self) -> &Option<CallStack>
    {
        &self.call_stack
    }
}


/// Allow for the conversion of a std::io::Error into a ScriptError.
impl From<std::io::Error> for ScriptError
{
    fn from(error: std::io::Error) -> ScriptError
    {
        ScriptError::new(None, ErrorKind::Io(error.to_string()), None)
    }
}



/// Create a ScriptError wrapped in a Result::Err using the interpreter's current location and
/// call stack.
pub fn script_error<T>(interpreter: &dyn Interpreter, kind: ErrorKind) -> Result<T>
{
    let location = interpreter.current_location().clone();
    let call_stack = interpreter.call_stack().clone();

    ScriptError::new_as_result(location, kind, Some(call_stack))
}
