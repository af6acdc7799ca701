use iceoryx2_bb_log::{ debug, trace };
use crate::{ lang::{ source_buffer::SourceLocation,
                     tokenizing::{ tokenize_statement,
                                   Token,
                                   TokenList } },
             runtime::{ built_ins::{ find_built_in,
                                     BuiltInWord },
                        data_structures::dictionary::{ Dictionary,
                                                       WordInfo },
                        error::{ self,
                                 script_error,
                                 DefinitionError,
                                 ErrorKind },
                        interpreter::{ CallItem,
                                       CallStack,
                                       CodeManagement,
                                       Interpreter,
                                       InterpreterStack,
                                       ValueStack,
                                       WordManagement } } };



/// The path used to tag statements when the caller doesn't supply one.
pub const DEFAULT_SOURCE_PATH: &str = "<input>";



/// The core interpreter implementation.  One instance is one evaluation session, it owns the data
/// stack and the user word dictionary for as long as the session lives.
pub struct ForthInterpreter
{
    /// The maximum depth of the data stack during execution.
    max_depth: usize,

    /// The data stack used by the interpreter.
    stack: ValueStack,


    /// Tag used in the locations of every token, usually the script path.
    path: String,

    /// How many statements have been processed, used to number them in locations.
    statement_count: usize,

    /// The location of the token currently being executed.
    current_location: Option<SourceLocation>,

    /// The user words currently being expanded.
    call_stack: CallStack,


    /// The dictionary of user words known by the interpreter.
    dictionary: Dictionary
}


impl Default for ForthInterpreter
{
    fn default() -> Self
    {
        Self::new()
    }
}


impl Interpreter for ForthInterpreter
{
    fn dictionary(&self) -> &Dictionary
    {
        &self.dictionary
    }

    fn reset(&mut self)
    {
        self.max_depth = 0;
        self.stack.clear();
        self.statement_count = 0;
        self.current_location = None;
        self.call_stack.clear();
        self.dictionary.clear();
    }
}


impl InterpreterStack for ForthInterpreter
{
    fn stack_max_depth(&self) -> usize
    {
        self.max_depth
    }

    fn stack(&self) -> &ValueStack
    {
        &self.stack
    }

    fn push(&mut self, value: i64)
    {
        self.stack.push(value);

        if self.stack.len() > self.max_depth
        {
            self.max_depth = self.stack.len();
        }
    }

    fn pop(&mut self) -> error::Result<i64>
    {
        match self.stack.pop()
        {
            Some(value) => Ok(value),
            None => script_error(self, ErrorKind::StackUnderflow { needed: 1, available: 0 })
        }
    }

    fn peek(&self, depth: usize) -> error::Result<i64>
    {
        let available = self.stack.len();

        if depth >= available
        {
            return script_error(self, ErrorKind::StackUnderflow { needed: depth + 1, available });
        }

        Ok(self.stack[available - 1 - depth])
    }
}


impl CodeManagement for ForthInterpreter
{
    fn process_statement(&mut self, source: &str) -> error::Result<()>
    {
        self.statement_count += 1;

        let tokens = tokenize_statement(&self.path, self.statement_count, source);

        trace!("Statement {}: {:?}", self.statement_count, tokens);

        match tokens.first()
        {
            Some(first) if first.is_marker(":") => self.define_from_tokens(&tokens),
            _ => self.execute_tokens(&tokens)
        }
    }

    fn execute_tokens(&mut self, tokens: &[Token]) -> error::Result<()>
    {
        let mut index = 0;

        while index < tokens.len()
        {
            self.execute_token(&tokens[index])?;
            index += 1;
        }

        Ok(())
    }
}


impl WordManagement for ForthInterpreter
{
    fn current_location(&self) -> &Option<SourceLocation>
    {
        &self.current_location
    }

    fn define_word(&mut self, info: WordInfo) -> error::Result<()>
    {
        debug!("Defining word {} as {} token(s).", info.name, info.body.len());

        if let Err(reason) = self.dictionary.insert(info)
        {
            return script_error(self, ErrorKind::InvalidDefinition(reason));
        }

        Ok(())
    }

    fn find_word(&self, word: &str) -> Option<&WordInfo>
    {
        self.dictionary.try_get(word)
    }

    fn execute_word_named(&mut self, location: &SourceLocation, word: &str) -> error::Result<()>
    {
        self.current_location = Some(location.clone());

        if let Some(info) = self.dictionary.try_get(word)
        {
            let name = info.name.clone();
            let body = info.body.clone();

            trace!("Expanding {} into {} token(s).", name, body.len());

            self.call_stack_push(name, location.clone());
            let result = self.execute_tokens(&body);
            self.call_stack_pop();

            return result;
        }

        if let Some(built_in) = find_built_in(word)
        {
            return self.execute_built_in(built_in);
        }

        script_error(self, ErrorKind::UnknownToken(word.to_string()))
    }

    fn call_stack(&self) -> &CallStack
    {
        &self.call_stack
    }

    fn call_stack_push(&mut self, name: String, location: SourceLocation)
    {
        self.call_stack.push(CallItem::new(name, location));
    }

    fn call_stack_pop(&mut self)
    {
        let _ = self.call_stack.pop();
    }
}


// Helper methods for the interpreter's statement handling.
impl ForthInterpreter
{
    /// Create a new session, tagging statement locations with the default path.
    pub fn new() -> ForthInterpreter
    {
        ForthInterpreter::new_with_path(DEFAULT_SOURCE_PATH)
    }

    /// Create a new session, tagging statement locations with the given path.  Usually the path of
    /// the script the statements are read from.
    pub fn new_with_path(path: &str) -> ForthInterpreter
    {
        ForthInterpreter
            {
                max_depth: 0,
                stack: ValueStack::new(),

                path: path.to_string(),
                statement_count: 0,
                current_location: None,
                call_stack: CallStack::new(),

                dictionary: Dictionary::new()
            }
    }

    /// Run a single token.  Numbers are pushed, anything else is looked up as a word.
    fn execute_token(&mut self, token: &Token) -> error::Result<()>
    {
        trace!("Executing {:?}", token);

        match token
        {
            Token::Number(location, value) =>
                {
                    self.current_location = Some(location.clone());
                    self.push(*value);
                    Ok(())
                },

            Token::Word(location, name) => self.execute_word_named(location, name)
        }
    }

    /// Run a built-in word after making sure the stack holds enough values for it.  A word that
    /// can't run leaves the stack as it found it.
    fn execute_built_in(&mut self, word: &BuiltInWord) -> error::Result<()>
    {
        let available = self.stack.len();

        if available < word.arity()
        {
            return script_error(self,
                                ErrorKind::StackUnderflow { needed: word.arity(), available });
        }

        (word.handler())(self)
    }

    /// Handle a `: name body... ;` statement.  The body is stored as written, words in it are only
    /// looked up when the new word is used.
    fn define_from_tokens(&mut self, tokens: &TokenList) -> error::Result<()>
    {
        self.current_location = tokens.first().map(|token| token.location().clone());

        if tokens.len() < 4
        {
            return script_error(self, ErrorKind::InvalidDefinition(DefinitionError::TooShort));
        }

        let last = &tokens[tokens.len() - 1];

        if !last.is_marker(";")
        {
            self.current_location = Some(last.location().clone());

            return script_error(self,
                                ErrorKind::InvalidDefinition(DefinitionError::MissingTerminator));
        }

        let name = &tokens[1];
        let body = tokens[2..tokens.len() - 1].to_vec();

        self.current_location = Some(name.location().clone());
        self.define_word(WordInfo::new(name.location().clone(), name.to_string(), body))
    }
}
