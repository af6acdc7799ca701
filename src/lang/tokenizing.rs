use crate::lang::source_buffer::{SourceBuffer, SourceLocation};
use std::{
    fmt::{self, Debug, Display, Formatter},
    hash::{Hash, Hasher},
};

/// A token is a simple unit of the language.  Only two kinds exist, a number literal or a word.
/// Everything that is not a valid integer literal is a word, including the definition markers `:`
/// and `;`.
///
/// The token also holds the location in the original statement where it was found.
#[derive(Clone, PartialEq, Eq, PartialOrd)]
pub enum Token {
    /// A signed base 10 integer literal.
    Number(SourceLocation, i64),

    /// A word in the language to be executed, or a definition marker.
    Word(SourceLocation, String),
}

/// A list of tokens found in a statement.
pub type TokenList = Vec<Token>;

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Token::Number(location, value) => {
                location.hash(state);
                value.hash(state);
            }

            Token::Word(location, value) => {
                location.hash(state);
                value.hash(state);
            }
        }
    }
}

/// Make sure that the tokens are nicely printable.
impl Display for Token {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Token::Number(_, num) => write!(f, "{}", num),
            Token::Word(_, string) => write!(f, "{}", string),
        }
    }
}

/// Include the original location and mark numbers for debugging purposes.
impl Debug for Token {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Token::Number(location, num) => write!(f, "{}: {} i", location, num),
            Token::Word(location, string) => write!(f, "{}: {}", location, string),
        }
    }
}

impl Token {
    /// Get the token's location in the original statement.
    pub fn location(&self) -> &SourceLocation {
        match self {
            Token::Number(location, _) => location,
            Token::Word(location, _) => location,
        }
    }

    /// Check if the token is a number.
    pub fn is_number(&self) -> bool {
        matches!(self, Token::Number(_, _))
    }

    /// Get the number value of the token, if it is one.
    pub fn number(&self) -> Option<i64> {
        match self {
            Token::Number(_, number) => Some(*number),
            Token::Word(_, _) => None,
        }
    }

    /// Check if the token is a word.
    pub fn is_word(&self) -> bool {
        matches!(self, Token::Word(_, _))
    }

    /// Get the word text, if the token is a word.
    pub fn word(&self) -> Option<&str> {
        match self {
            Token::Word(_, word) => Some(word),
            Token::Number(_, _) => None,
        }
    }

    /// Is this token exactly the given marker word, such as `:` or `;`?
    pub fn is_marker(&self, marker: &str) -> bool {
        self.word() == Some(marker)
    }
}

/// Check if the given character separates tokens.  Besides the usual space characters this also
/// covers vertical tab, form feed, NUL and the 0x13 control byte.
fn is_whitespace(next: &char) -> bool {
    matches!(
        *next,
        ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r' | '\0' | '\x13'
    )
}

/// Skip over whitespace in the text.  Stopping only at either the end of the buffer or the next
/// non-whitespace character.
fn skip_whitespace(buffer: &mut SourceBuffer) {
    while let Some(next) = buffer.peek_next()
        && is_whitespace(&next)
    {
        let _ = buffer.next_char();
    }
}

/// Pull text out of the buffer until we hit a whitespace character.  Words can contain any
/// character except whitespace.
fn process_until_whitespace(buffer: &mut SourceBuffer) -> (SourceLocation, String) {
    let location = buffer.location().clone();
    let mut text = String::new();

    while let Some(next) = buffer.peek_next()
        && !is_whitespace(&next)
    {
        text.push(next);
        let _ = buffer.next_char();
    }

    (location, text)
}

/// Attempt to read the text as a base 10 integer literal with an optional sign.  Literals that do
/// not fit in an i64 are not numbers.
pub fn to_number(text: &str) -> Option<i64> {
    text.parse::<i64>().ok()
}

/// Split one statement into its tokens.  Any statement is valid input, an all-whitespace statement
/// simply produces an empty list.
///
/// The path and line are only used to tag the tokens' locations.
pub fn tokenize_statement(path: &str, line: usize, source: &str) -> TokenList {
    let mut buffer = SourceBuffer::new(path, line, source);
    let mut token_list = TokenList::new();

    loop {
        skip_whitespace(&mut buffer);

        if buffer.peek_next().is_none() {
            break;
        }

        let (location, text) = process_until_whitespace(&mut buffer);

        let next_token = match to_number(&text) {
            Some(number) => Token::Number(location, number),
            None => Token::Word(location, text),
        };

        token_list.push(next_token);
    }

    token_list
}
