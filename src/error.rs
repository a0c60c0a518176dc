use std::error;
use std::fmt;




/**
 * Error returned by tree operations that take an interval argument, when that
 * interval is malformed. The tree is never modified when this is returned.
 */
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// The interval's minimum endpoint compares greater than its maximum.
    InvertedRange,
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        use Error::*;

        match self {
            InvertedRange => write!(fmt, "inverted range: interval minimum exceeds its maximum"),
        }
    }
}

impl error::Error for Error {}
