use core::fmt::{self, Debug, Display, Formatter};

use crate::gcode::Word;

/// Errors from executing a command line.
///
/// # Type Parameters
///
/// - `E`: error type of the status output.
#[derive(Debug, PartialEq)]
pub enum Error<E> {
    /// Writing a status line failed.
    ///
    /// The line was still executed in full.
    Output(E),
    /// The line contained a word the interpreter does not recognize, and the
    /// interpreter is configured to reject such lines. Nothing was executed.
    UnrecognizedCode(Word),
}

impl<E: Debug> Display for Error<E> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Error::Output(err) => write!(f, "Status output failed: {:?}.", err),
            Error::UnrecognizedCode(word) => {
                write!(f, "Unrecognized code \"{}{}\".", word.letter, word.value)
            }
        }
    }
}

impl<E: Debug> core::error::Error for Error<E> {}
