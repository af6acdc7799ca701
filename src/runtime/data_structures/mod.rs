/// The dictionary module holds the user defined words of an evaluation session.
pub mod dictionary;
