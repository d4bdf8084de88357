use crate::util::escape::EscapeError;

/// An error that can occur while compiling a regular expression.
///
/// Every variant carries the 0-based character offset in the pattern at
/// which the problem was noticed, reported through the `std::fmt::Display`
/// impl.
#[derive(Clone, Debug)]
pub struct Error {
    kind: ErrorKind,
}

#[derive(Clone, Debug)]
enum ErrorKind {
    /// An error that occurred while decoding an escape sequence.
    Escape {
        /// The underlying escape error.
        err: EscapeError,
        /// The offset of the character after the backslash.
        offset: usize,
    },
    /// An error that occurs when a group is still open at the end of the
    /// pattern.
    UnbalancedOpen {
        /// The offset at which the pattern ended.
        offset: usize,
    },
    /// An error that occurs when a `)` appears with no group open.
    UnbalancedClose {
        /// The offset of the stray `)`.
        offset: usize,
    },
    /// An error that occurs when a character class is still open at the
    /// end of the pattern.
    UnclosedClass {
        /// The offset of the `[` that opened the class.
        offset: usize,
    },
    /// An error that occurs when a character class contains nothing.
    EmptyClass {
        /// The offset of the `[` that opened the class.
        offset: usize,
    },
    /// An error that occurs when a class range has its endpoints reversed,
    /// as in `[z-a]`.
    ClassRange {
        /// The lower endpoint given.
        low: char,
        /// The upper endpoint given, which compares below `low`.
        high: char,
        /// The offset just after the range.
        offset: usize,
    },
}

impl Error {
    fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub(crate) fn escape(err: EscapeError, offset: usize) -> Error {
        Error { kind: ErrorKind::Escape { err, offset } }
    }

    pub(crate) fn unbalanced_open(offset: usize) -> Error {
        Error { kind: ErrorKind::UnbalancedOpen { offset } }
    }

    pub(crate) fn unbalanced_close(offset: usize) -> Error {
        Error { kind: ErrorKind::UnbalancedClose { offset } }
    }

    pub(crate) fn unclosed_class(offset: usize) -> Error {
        Error { kind: ErrorKind::UnclosedClass { offset } }
    }

    pub(crate) fn empty_class(offset: usize) -> Error {
        Error { kind: ErrorKind::EmptyClass { offset } }
    }

    pub(crate) fn class_range(
        low: char,
        high: char,
        offset: usize,
    ) -> Error {
        Error { kind: ErrorKind::ClassRange { low, high, offset } }
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
            ErrorKind::Escape { offset, .. } => {
                write!(f, "bad escape sequence at offset {}", offset)
            }
            ErrorKind::UnbalancedOpen { offset } => write!(
                f,
                "pattern ended at offset {} with an unclosed group",
                offset,
            ),
            ErrorKind::UnbalancedClose { offset } => write!(
                f,
                "unmatched ')' at offset {}",
                offset,
            ),
            ErrorKind::UnclosedClass { offset } => write!(
                f,
                "character class opened at offset {} is never closed",
                offset,
            ),
            ErrorKind::EmptyClass { offset } => write!(
                f,
                "character class opened at offset {} is empty",
                offset,
            ),
            ErrorKind::ClassRange { low, high, offset } => write!(
                f,
                "invalid class range ending at offset {}: upper endpoint \
                 {:?} is below lower endpoint {:?}",
                offset, high, low,
            ),
        }
    }
}
