/*!
Compiling a regular expression into an NFA.

This is a recursive-descent parser driving the Thompson construction: it
keeps a current machine (initially the one accepting only the empty
string), compiles each atom it reads into its own small machine, wraps it
for a postfix `*`, `+` or `?`, and concatenates it in. An `|` hands the
whole remainder to a recursive call and unions the result; parentheses
recurse with the group flag set.

The surface syntax is deliberately small: literals, escapes, `.`,
character classes with ranges and negation, alternation, the three postfix
operators, grouping and the predefined classes `\s \S \w \W \d \D`. No
captures, no repetition counts, no anchors.
*/

use core::str::Chars;

use log::debug;

use crate::{
    nfa::{Edge, Polarity, ALPHABET_MAX, EPSILON, NFA},
    regex::error::Error,
    util::escape::decode_escape,
};

/// The ranges of `\s`: space and the five C whitespace controls, which sit
/// contiguously at U+0009..=U+000D.
const WHITESPACE: &[(char, char)] = &[('\t', '\r'), (' ', ' ')];

/// The ranges of `\w`: letters, underscore and digits.
const WORD: &[(char, char)] =
    &[('a', 'z'), ('A', 'Z'), ('_', '_'), ('0', '9')];

/// The ranges of `\d`.
const DIGIT: &[(char, char)] = &[('0', '9')];

/// Compile `pattern` into an NFA accepting exactly the language of the
/// pattern.
pub fn parse(pattern: &str) -> Result<NFA, Error> {
    let mut cursor = Cursor::new(pattern);
    let nfa = parse_expr(&mut cursor, false)?;
    debug!(
        "compiled pattern {:?} into a machine with {} states",
        pattern,
        nfa.len(),
    );
    Ok(nfa)
}

/// A character cursor over the pattern that tracks how many characters
/// have been consumed, for error offsets.
struct Cursor<'p> {
    chars: Chars<'p>,
    pos: usize,
}

impl<'p> Cursor<'p> {
    fn new(pattern: &'p str) -> Cursor<'p> {
        Cursor { chars: pattern.chars(), pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.chars.clone().next()
    }

    /// The offset of the next unconsumed character.
    fn pos(&self) -> usize {
        self.pos
    }
}

impl<'p> Iterator for Cursor<'p> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let c = self.chars.next();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }
}

/// Parse until the end of the pattern. Inside a group, parse until the
/// matching `)` instead, which is left unconsumed for the caller.
fn parse_expr(cursor: &mut Cursor, in_group: bool) -> Result<NFA, Error> {
    let mut current = NFA::empty_string();
    loop {
        let c = match cursor.peek() {
            Some(c) => c,
            None if in_group => {
                return Err(Error::unbalanced_open(cursor.pos()))
            }
            None => return Ok(current),
        };
        match c {
            ')' if in_group => return Ok(current),
            ')' => return Err(Error::unbalanced_close(cursor.pos())),
            '|' => {
                cursor.next();
                let rest = parse_expr(cursor, in_group)?;
                current.union(&rest);
                return Ok(current);
            }
            '(' => {
                cursor.next();
                let mut group = parse_expr(cursor, true)?;
                // parse_expr only returns from inside a group when it has
                // peeked the ')'.
                cursor.next();
                apply_postfix(cursor, &mut group);
                current.concat(&group);
            }
            '[' => {
                cursor.next();
                let mut class = parse_class(cursor)?;
                apply_postfix(cursor, &mut class);
                current.concat(&class);
            }
            '\\' => {
                cursor.next();
                let mut atom = parse_escape_atom(cursor)?;
                apply_postfix(cursor, &mut atom);
                current.concat(&atom);
            }
            '.' => {
                cursor.next();
                let mut any = ranges_nfa(
                    Polarity::Positive,
                    &[('\u{0}', ALPHABET_MAX)],
                );
                apply_postfix(cursor, &mut any);
                current.concat(&any);
            }
            _ => {
                cursor.next();
                let mut atom = NFA::single_char(c);
                apply_postfix(cursor, &mut atom);
                current.concat(&atom);
            }
        }
    }
}

/// Consume a postfix `*`, `+` or `?` if one follows, wrapping the machine
/// accordingly.
fn apply_postfix(cursor: &mut Cursor, nfa: &mut NFA) {
    match cursor.peek() {
        Some('*') => {
            cursor.next();
            nfa.star();
        }
        Some('+') => {
            cursor.next();
            nfa.plus();
        }
        Some('?') => {
            cursor.next();
            nfa.optional();
        }
        _ => {}
    }
}

/// Parse the atom after a backslash: a predefined class shorthand, or any
/// escape the shared decoder knows (including `\e`, which yields an
/// epsilon-edge atom that accepts the empty string).
fn parse_escape_atom(cursor: &mut Cursor) -> Result<NFA, Error> {
    match cursor.peek() {
        Some('s') => {
            cursor.next();
            Ok(ranges_nfa(Polarity::Positive, WHITESPACE))
        }
        Some('S') => {
            cursor.next();
            Ok(ranges_nfa(Polarity::Negative, WHITESPACE))
        }
        Some('w') => {
            cursor.next();
            Ok(ranges_nfa(Polarity::Positive, WORD))
        }
        Some('W') => {
            cursor.next();
            Ok(ranges_nfa(Polarity::Negative, WORD))
        }
        Some('d') => {
            cursor.next();
            Ok(ranges_nfa(Polarity::Positive, DIGIT))
        }
        Some('D') => {
            cursor.next();
            Ok(ranges_nfa(Polarity::Negative, DIGIT))
        }
        _ => {
            let offset = cursor.pos();
            let c = decode_escape(cursor, EPSILON)
                .map_err(|err| Error::escape(err, offset))?;
            Ok(NFA::single_char(c))
        }
    }
}

/// Parse a character class. The cursor is positioned after the `[`.
///
/// Each character starts a `(c, c)` pair; a `-` promotes the last pair's
/// upper endpoint to whatever character is read next. A leading or
/// trailing `-` is a literal. Escapes are decoded, so `\]` and `\\` are
/// ordinary class members.
fn parse_class(cursor: &mut Cursor) -> Result<NFA, Error> {
    let open_offset = cursor.pos() - 1;
    let polarity = if cursor.peek() == Some('^') {
        cursor.next();
        Polarity::Negative
    } else {
        Polarity::Positive
    };

    let mut ranges: Vec<(char, char)> = Vec::new();
    let mut dash_pending = false;
    loop {
        let c = match cursor.next() {
            None => return Err(Error::unclosed_class(open_offset)),
            Some(c) => c,
        };
        let c = match c {
            ']' => break,
            '-' if !dash_pending && !ranges.is_empty() => {
                dash_pending = true;
                continue;
            }
            '\\' => {
                let offset = cursor.pos();
                decode_escape(cursor, EPSILON)
                    .map_err(|err| Error::escape(err, offset))?
            }
            c => c,
        };
        if dash_pending {
            // The unwrap is fine: dash_pending is only set when a pair
            // exists.
            let last = ranges.last_mut().unwrap();
            if c < last.0 {
                return Err(Error::class_range(last.0, c, cursor.pos()));
            }
            last.1 = c;
            dash_pending = false;
        } else {
            ranges.push((c, c));
        }
    }
    if dash_pending {
        ranges.push(('-', '-'));
    }
    if ranges.is_empty() {
        return Err(Error::empty_class(open_offset));
    }
    Ok(ranges_nfa(polarity, &ranges))
}

/// Build the two-state machine whose single edge carries the given range
/// set.
fn ranges_nfa(polarity: Polarity, ranges: &[(char, char)]) -> NFA {
    let mut nfa = NFA::new();
    let s0 = nfa.add_state(false);
    let s1 = nfa.add_state(true);
    let mut edge = Edge::new(polarity, s1);
    for &(low, high) in ranges {
        // Ranges reaching this function are already ordered.
        edge.push_range(low, high).unwrap();
    }
    nfa.add_edge(s0, edge);
    nfa.set_start(s0);
    nfa
}
