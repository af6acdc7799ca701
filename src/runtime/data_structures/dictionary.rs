use crate::{
    lang::{
        source_buffer::SourceLocation,
        tokenizing::{TokenList, to_number},
    },
    runtime::{built_ins::find_built_in, error::DefinitionError},
};
use std::{
    collections::HashMap,
    fmt::{self, Display, Formatter},
    rc::Rc,
};

/// The information stored in the dictionary for each user defined word.
#[derive(Clone, PartialEq, Eq)]
pub struct WordInfo {
    /// The location of the name token in the defining statement.
    pub location: SourceLocation,

    /// The name of the word as it was written.
    pub name: String,

    /// The tokens between the name and the closing `;`, kept exactly as written.  Shared so
    /// expanding the word doesn't copy the list.
    pub body: Rc<TokenList>,
}

impl WordInfo {
    /// Create a new WordInfo.
    pub fn new(location: SourceLocation, name: String, body: TokenList) -> WordInfo {
        WordInfo {
            location,
            name,
            body: Rc::new(body),
        }
    }
}

/// The dictionary of user defined words for one evaluation session.  Names are looked up without
/// regard to case.
pub struct Dictionary {
    words: HashMap<String, WordInfo>,
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

/// List the words sorted by name, each with the body it expands into.
impl Display for Dictionary {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        let max_size = self
            .words
            .values()
            .map(|word| word.name.len())
            .max()
            .unwrap_or(0);

        let mut string_result = format!("{} words defined.\n\n", self.words.len());

        let mut keys: Vec<&String> = self.words.keys().collect();
        keys.sort();

        for key in keys.iter() {
            let word = &self.words[*key];
            let body: Vec<String> = word.body.iter().map(|token| token.to_string()).collect();

            string_result = string_result
                + &format!("{:width$}  --  {}\n", word.name, body.join(" "), width = max_size);
        }

        write!(formatter, "{}", string_result)
    }
}

impl Dictionary {
    /// Create a new empty dictionary.
    pub fn new() -> Dictionary {
        Dictionary {
            words: HashMap::new(),
        }
    }

    /// Insert a word, replacing any earlier word of the same name.  Names that read as integers or
    /// that match a built-in operator are refused.
    pub fn insert(&mut self, info: WordInfo) -> Result<(), DefinitionError> {
        if to_number(&info.name).is_some() {
            return Err(DefinitionError::NumberName(info.name));
        }

        if find_built_in(&info.name).is_some() {
            return Err(DefinitionError::BuiltInName(info.name));
        }

        let _ = self.words.insert(info.name.to_lowercase(), info);
        Ok(())
    }

    /// Try to get a word from the dictionary.
    pub fn try_get(&self, name: &str) -> Option<&WordInfo> {
        self.words.get(&name.to_lowercase())
    }

    /// How many words are defined.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Are there no words defined at all?
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Forget every word.
    pub fn clear(&mut self) {
        self.words.clear();
    }
}
