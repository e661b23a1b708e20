use std::error;
use std::fmt;

/// Boundary errors. The core functions are total and cannot fail, so the
/// only job here is rejecting bad input before it reaches them.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Error {
    UnknownNote(String),
    UnknownOperation(String),
    UnknownNaming(String),
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::UnknownNote(ref name) => {
                write!(f, "unknown note name '{}'", name)
            }
            Error::UnknownOperation(ref name) => {
                write!(f, "unknown operation '{}'", name)
            }
            Error::UnknownNaming(ref name) => {
                write!(f, "unknown naming convention '{}'", name)
            }
        }
    }
}
