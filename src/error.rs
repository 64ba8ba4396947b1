use std::fmt;

/// Errors that can occur while building markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A tag, namespace prefix or attribute name was rejected.
    InvalidArguments(String),
    /// Content contained a character that cannot appear in markup output,
    /// such as a control character.
    UnsupportedContent(char),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Error::*;
        match self {
            InvalidArguments(message) => write!(f, "invalid arguments: {}", message),
            UnsupportedContent(c) => {
                write!(f, "character {:?} cannot be represented in markup output", c)
            }
        }
    }
}

impl std::error::Error for Error {}
