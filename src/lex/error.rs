use crate::regex;

/// An error that can occur while loading a lexer description or adding a
/// rule.
#[derive(Clone, Debug)]
pub struct Error {
    kind: ErrorKind,
}

#[derive(Clone, Debug)]
enum ErrorKind {
    /// An error that occurs when a non-comment description line has no
    /// tab separating the pattern from the token name.
    MissingSeparator {
        /// The 1-based line number of the offending line.
        line: usize,
    },
    /// An error that occurred while compiling a rule's pattern.
    Pattern {
        /// The underlying regex error.
        err: regex::Error,
        /// The 1-based line number, when the rule came from a
        /// description rather than [`Lexer::add`](crate::lex::Lexer::add).
        line: Option<usize>,
    },
}

impl Error {
    fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub(crate) fn missing_separator(line: usize) -> Error {
        Error { kind: ErrorKind::MissingSeparator { line } }
    }

    pub(crate) fn pattern(err: regex::Error, line: Option<usize>) -> Error {
        Error { kind: ErrorKind::Pattern { err, line } }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Pattern { ref err, .. } => Some(err),
            ErrorKind::MissingSeparator { .. } => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match *self.kind() {
            ErrorKind::MissingSeparator { line } => write!(
                f,
                "line {} has no tab between the pattern and the token name",
                line,
            ),
            ErrorKind::Pattern { line: Some(line), .. } => {
                write!(f, "bad pattern on line {}", line)
            }
            ErrorKind::Pattern { line: None, .. } => {
                write!(f, "bad pattern")
            }
        }
    }
}
