use core::str::Chars;
use std::{ fmt::{ self,
                  Display,
                  Formatter },
           hash::{ Hash,
                   Hasher } };



/// The location in the source text where a token was found.  Statements are numbered from 1 in
/// the order they were supplied, so the line of a location is the statement it belongs to.
///
/// This is a read-only structure.  Use the field accessor methods to get the values.
#[derive(Clone, PartialEq, PartialOrd, Eq)]
pub struct SourceLocation
{
    /// A description of where the text came from, for example a script path or "\<input\>".
    path: String,

    /// The 1 based statement number.
    line: usize,

    /// The 1 based column within the statement.
    column: usize
}


impl Default for SourceLocation
{
    fn default() -> Self
    {
        Self::new()
    }
}


impl Hash for SourceLocation
{
    fn hash<H: Hasher>(&self, state: &mut H)
    {
        self.path.hash(state);
        self.line.hash(state);
        self.column.hash(state);
    }
}


/// Used for error reporting to show which statement and column an error originated from.
impl Display for SourceLocation
{
    fn fmt(&self, formatter: &mut Formatter<'_>) -> Result<(), fmt::Error>
    {
        write!(formatter, "{} ({}, {})", self.path, self.line, self.column)
    }
}


/// Debug output is the same as the user facing output.
impl fmt::Debug for SourceLocation
{
    fn fmt(&self, formatter: &mut Formatter<'_>) -> Result<(), fmt::Error>
    {
        write!(formatter, "{}", self)
    }
}


impl SourceLocation
{
    /// Crate a new SourceLocation with default values.
    pub fn new() -> SourceLocation
    {
        SourceLocation { path: "unspecified".to_string(), line: 1, column: 1 }
    }

    /// Create a new SourceLocation with all of the needed information.
    pub fn new_from_info(path: &str, line: usize, column: usize) -> Self
    {
        SourceLocation { path: path.to_owned(), line, column }
    }

    /// The description of where the source text came from.
    pub fn path(&self) -> &String
    {
        &self.path
    }

    /// The 1 based statement number.
    pub fn line(&self) -> usize
    {
        self.line
    }

    /// The 1 based column number within the statement.
    pub fn column(&self) -> usize
    {
        self.column
    }
}



/// A forward only cursor over a single statement's text.  As characters are consumed the column
/// of the cursor is maintained so the tokenizer can tag every token with where it started.
///
/// The SourceBuffer only holds a reference to the statement, the text is not copied.
pub struct SourceBuffer<'a>
{
    /// An iterator over the statement text being processed.
    chars: Chars<'a>,

    /// The logical location of the cursor.
    location: SourceLocation,

    /// Holds a character that has been peeked at but not yet consumed.
    current: Option<char>
}


impl<'a> SourceBuffer<'a>
{
    /// Create a new SourceBuffer for the given statement.  The path and statement number are only
    /// used to tag the locations of the tokens found.
    pub fn new(path: &str, line: usize, source: &'a str) -> Self
    {
        SourceBuffer
            {
                chars: source.chars(),
                location: SourceLocation::new_from_info(path, line, 1),
                current: None
            }
    }

    /// The location the cursor is at.
    pub fn location(&self) -> &SourceLocation
    {
        &self.location
    }

    /// Take a peek at the next character without consuming it.
    pub fn peek_next(&mut self) -> Option<char>
    {
        match self.current
        {
            Some(_) => self.current,
            None =>
                {
                    let next = self.chars.next();

                    self.current = next;
                    next
                }
        }
    }

    /// Get and consume the next character.
    pub fn next_char(&mut self) -> Option<char>
    {
        let next = match self.current.take()
            {
                Some(current) => Some(current),
                None => self.chars.next()
            };

        if next.is_some()
        {
            self.location.column += 1;
        }

        next
    }
}
