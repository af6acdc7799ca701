use crate::runtime::{error, interpreter::Interpreter};
use lazy_static::lazy_static;
use std::collections::HashMap;

/// Simplify adding a built-in word to the table under construction.
///
/// Required parameters are, the table to add to.  The upper case name of the word.  How many stack
/// values the word needs to run.  The function handler for the word.  A simple description of the
/// word.  As well as the word's stack signature.
macro_rules! add_built_in_word {
    (
        $table:expr ,
        $name:literal ,
        $arity:expr ,
        $function:expr ,
        $description:literal ,
        $signature:literal
    ) => {{
        let _ = $table.insert(
            $name,
            $crate::runtime::built_ins::BuiltInWord::new(
                $name,
                $arity,
                $function,
                $description,
                $signature,
            ),
        );
    }};
}

/// The arithmetic words `+ - * /`.
mod arithmetic_words;

/// Words that shuffle the data stack.
mod stack_words;

use self::{arithmetic_words::register_arithmetic_words, stack_words::register_stack_words};

/// The function that implements a built-in word.  The interpreter has already checked that the
/// stack holds at least the word's arity worth of values before calling it.
pub type BuiltInHandler = fn(&mut dyn Interpreter) -> error::Result<()>;

/// One entry of the fixed built-in word table.
#[derive(Clone, Copy)]
pub struct BuiltInWord {
    name: &'static str,
    arity: usize,
    handler: BuiltInHandler,
    description: &'static str,
    signature: &'static str,
}

impl BuiltInWord {
    /// Create a new table entry.
    pub fn new(
        name: &'static str,
        arity: usize,
        handler: BuiltInHandler,
        description: &'static str,
        signature: &'static str,
    ) -> BuiltInWord {
        BuiltInWord {
            name,
            arity,
            handler,
            description,
            signature,
        }
    }

    /// The canonical, upper case, name of the word.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The number of stack values the word consumes.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// The function that runs the word.
    pub fn handler(&self) -> BuiltInHandler {
        self.handler
    }

    /// A simple description of the word.
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// The word's stack signature.
    pub fn signature(&self) -> &'static str {
        self.signature
    }
}

/// The built-in words keyed by their upper case name.
pub type BuiltInTable = HashMap<&'static str, BuiltInWord>;

lazy_static! {
    /// The fixed set of built-in words.  Built once on first use and never changed afterwards.
    static ref BUILT_INS: BuiltInTable = {
        let mut table = BuiltInTable::new();

        register_arithmetic_words(&mut table);
        register_stack_words(&mut table);

        table
    };
}

/// Find a built-in word by name, ignoring case.
pub fn find_built_in(name: &str) -> Option<&'static BuiltInWord> {
    BUILT_INS.get(name.to_uppercase().as_str())
}

/// All of the built-in words sorted by name.
pub fn built_in_words() -> Vec<&'static BuiltInWord> {
    let mut words: Vec<&'static BuiltInWord> = BUILT_INS.values().collect();

    words.sort_by_key(|word| word.name);
    words
}
