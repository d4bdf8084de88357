use crate::util::escape::EscapeError;

/// An error that can occur while constructing an edge or while reading an
/// NFA from its textual form.
///
/// There is not much to do with one of these other than obtaining a human
/// readable message via its `std::fmt::Display` impl. Errors produced by
/// the persistence reader carry the 1-based line number of the offending
/// line.
#[derive(Clone, Debug)]
pub struct Error {
    kind: ErrorKind,
}

#[derive(Clone, Debug)]
enum ErrorKind {
    /// An error that occurs when a range is constructed with its endpoints
    /// reversed.
    InvalidRange {
        /// The lower endpoint given.
        low: char,
        /// The upper endpoint given, which compares below `low`.
        high: char,
    },
    /// An error that occurs when a decimal state index was required but
    /// something else was found.
    ExpectedDigit {
        /// The line on which the problem occurred.
        line: usize,
    },
    /// An error that occurs when a transition line carries something other
    /// than `+` or `-` as its polarity marker.
    InvalidPolarity {
        /// The character found, or `None` if the line ended.
        got: Option<char>,
        /// The line on which the problem occurred.
        line: usize,
    },
    /// An error that occurs when the `-` between two range endpoints, or
    /// the space between two ranges, is missing.
    InvalidSeparator {
        /// The character found, or `None` if the line ended.
        got: Option<char>,
        /// The line on which the problem occurred.
        line: usize,
    },
    /// An error that occurs when a transition line ends in the middle of a
    /// range.
    PrematureEnd {
        /// The line on which the problem occurred.
        line: usize,
    },
    /// An error that occurred while decoding an escape sequence in a range
    /// endpoint.
    Escape {
        /// The underlying escape error.
        err: EscapeError,
        /// The line on which the escape appears.
        line: usize,
    },
}

impl Error {
    fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub(crate) fn invalid_range(low: char, high: char) -> Error {
        Error { kind: ErrorKind::InvalidRange { low, high } }
    }

    pub(crate) fn expected_digit(line: usize) -> Error {
        Error { kind: ErrorKind::ExpectedDigit { line } }
    }

    pub(crate) fn invalid_polarity(got: Option<char>, line: usize) -> Error {
        Error { kind: ErrorKind::InvalidPolarity { got, line } }
    }

    pub(crate) fn invalid_separator(got: Option<char>, line: usize) -> Error {
        Error { kind: ErrorKind::InvalidSeparator { got, line } }
    }

    pub(crate) fn premature_end(line: usize) -> Error {
        Error { kind: ErrorKind::PrematureEnd { line } }
    }

    pub(crate) fn escape(err: EscapeError, line: usize) -> Error {
        Error { kind: ErrorKind::Escape { err, line } }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Escape { ref err, .. } => Some(err),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match *self.kind() {
            ErrorKind::InvalidRange { low, high } => write!(
                f,
                "invalid range: upper endpoint {:?} is below \
                 lower endpoint {:?}",
                high, low,
            ),
            ErrorKind::ExpectedDigit { line } => {
                write!(f, "expected a digit on line {}", line)
            }
            ErrorKind::InvalidPolarity { got: Some(c), line } => write!(
                f,
                "expected '+' or '-' as the transition polarity \
                 on line {}, but got {:?}",
                line, c,
            ),
            ErrorKind::InvalidPolarity { got: None, line } => write!(
                f,
                "expected '+' or '-' as the transition polarity \
                 on line {}, but the line ended",
                line,
            ),
            ErrorKind::InvalidSeparator { got: Some(c), line } => write!(
                f,
                "expected a range separator on line {}, but got {:?}",
                line, c,
            ),
            ErrorKind::InvalidSeparator { got: None, line } => write!(
                f,
                "expected a range separator on line {}, \
                 but the line ended",
                line,
            ),
            ErrorKind::PrematureEnd { line } => {
                write!(f, "line {} ended in the middle of a range", line)
            }
            ErrorKind::Escape { line, .. } => {
                write!(f, "bad escape sequence on line {}", line)
            }
        }
    }
}
