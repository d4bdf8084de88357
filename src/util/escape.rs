/*!
Decoding of backslash escape sequences.

Escapes appear in three places: regex patterns, NFA persistence files and
lexer descriptions. All three share this decoder. The caller hands over a
character cursor positioned *after* the backslash and gets back the decoded
character, with the cursor advanced past the whole sequence.
*/

use core::fmt;

/// An error that can occur while decoding an escape sequence.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EscapeError {
    kind: EscapeErrorKind,
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum EscapeErrorKind {
    /// A `\xHH` or `\uHHHH` escape was followed by something other than the
    /// required number of hexadecimal digits. `got` is `None` when the
    /// input ended early.
    InvalidHexDigit { got: Option<char> },
    /// A `\uHHHH` escape named a value that is not a Unicode scalar (a
    /// surrogate code point).
    InvalidScalar { value: u32 },
    /// The input ended immediately after the backslash.
    Truncated,
}

impl EscapeError {
    fn invalid_hex_digit(got: Option<char>) -> EscapeError {
        EscapeError { kind: EscapeErrorKind::InvalidHexDigit { got } }
    }

    fn invalid_scalar(value: u32) -> EscapeError {
        EscapeError { kind: EscapeErrorKind::InvalidScalar { value } }
    }

    fn truncated() -> EscapeError {
        EscapeError { kind: EscapeErrorKind::Truncated }
    }
}

impl std::error::Error for EscapeError {}

impl fmt::Display for EscapeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            EscapeErrorKind::InvalidHexDigit { got: Some(c) } => {
                write!(f, "expected a hexadecimal digit, but got {:?}", c)
            }
            EscapeErrorKind::InvalidHexDigit { got: None } => {
                write!(f, "expected a hexadecimal digit, but input ended")
            }
            EscapeErrorKind::InvalidScalar { value } => write!(
                f,
                "\\u{:04X} is not a valid Unicode scalar value",
                value,
            ),
            EscapeErrorKind::Truncated => {
                write!(f, "input ended immediately after a backslash")
            }
        }
    }
}

/// Return the value of a hexadecimal digit, or `None` if the character is
/// not one.
fn hex_digit(c: char) -> Option<u32> {
    c.to_digit(16)
}

/// Decode one escape sequence from `chars`, which must be positioned just
/// after the backslash. The cursor is left after the sequence.
///
/// The recognized sequences are `\a \b \f \n \r \t \v \\`, `\e` (which
/// yields the given `epsilon` sentinel), `\xHH` and `\uHHHH`. Any other
/// character passes through as itself, so e.g. `\-` is a literal `-`.
pub fn decode_escape<I: Iterator<Item = char>>(
    chars: &mut I,
    epsilon: char,
) -> Result<char, EscapeError> {
    let specifier = match chars.next() {
        Some(c) => c,
        None => return Err(EscapeError::truncated()),
    };
    match specifier {
        'a' => Ok('\u{07}'),
        'b' => Ok('\u{08}'),
        'e' => Ok(epsilon),
        'f' => Ok('\u{0C}'),
        'n' => Ok('\n'),
        'r' => Ok('\r'),
        't' => Ok('\t'),
        'v' => Ok('\u{0B}'),
        '\\' => Ok('\\'),
        'x' => {
            let value = 16 * next_hex_digit(chars)? + next_hex_digit(chars)?;
            // A two digit value is always below 0x100 and thus a valid
            // scalar.
            Ok(char::from_u32(value).unwrap())
        }
        'u' => {
            let mut value = 0;
            for _ in 0..4 {
                value = 16 * value + next_hex_digit(chars)?;
            }
            char::from_u32(value)
                .ok_or_else(|| EscapeError::invalid_scalar(value))
        }
        c => Ok(c),
    }
}

fn next_hex_digit<I: Iterator<Item = char>>(
    chars: &mut I,
) -> Result<u32, EscapeError> {
    let c = chars.next();
    c.and_then(hex_digit)
        .ok_or_else(|| EscapeError::invalid_hex_digit(c))
}
