/*!
Reading an NFA from its line-oriented textual form.

The format is a `start:` line, any number of `accept:` lines and then one
transition per line, `X-Y:[+|-]A-B[ A-B...]`, where `X` and `Y` are state
indices and each `A-B` is an inclusive character range whose endpoints may
be escape sequences (`\e` being the only way to write an epsilon edge).
States are materialized lazily: a transition naming a state index beyond
the current state count extends the machine with fresh non-accepting
states.
*/

use core::{iter::Peekable, str::Chars, str::FromStr};

use log::{debug, trace};

use crate::{
    nfa::{
        error::Error,
        nfa::{Edge, Polarity, StateID, EPSILON, NFA},
    },
    util::{escape::decode_escape, lines::split_lines},
};

impl NFA {
    /// Read a machine from its textual form.
    ///
    /// A missing `start:` line leaves the start state at its default of
    /// `0`. `accept:` lines may repeat, in any order; their order is
    /// preserved. After all lines are read, the state list is grown if
    /// necessary so that the start state and every accepting state exist.
    pub fn read(source: &str) -> Result<NFA, Error> {
        let mut nfa = NFA::new();
        for (i, line) in split_lines(source).enumerate() {
            let lineno = i + 1;
            if line.is_empty() {
                continue;
            }
            if let Some(rest) = line.strip_prefix("start:") {
                nfa.set_start(read_state_index(rest, lineno)?);
            } else if let Some(rest) = line.strip_prefix("accept:") {
                let id = read_state_index(rest, lineno)?;
                nfa.accepting.push(id);
            } else {
                let (from, edge) = read_transition(line, lineno)?;
                trace!("read transition {}-{} on line {}", from, edge.dest(), lineno);
                let needed = from.max(edge.dest()) + 1;
                nfa.grow_to(needed);
                nfa.add_edge(from, edge);
            }
        }
        if nfa.start().is_none() {
            nfa.set_start(0);
        }
        // The start and accepting indices must refer to real states, even
        // when no transition line mentioned them.
        let mut needed = nfa.start().unwrap() + 1;
        for &a in nfa.accepting() {
            needed = needed.max(a + 1);
        }
        nfa.grow_to(needed);
        debug!(
            "read an NFA with {} states, {} accepting",
            nfa.len(),
            nfa.accepting().len(),
        );
        Ok(nfa)
    }

    fn grow_to(&mut self, len: usize) {
        while self.len() < len {
            self.add_state(false);
        }
    }
}

impl FromStr for NFA {
    type Err = Error;

    fn from_str(s: &str) -> Result<NFA, Error> {
        NFA::read(s)
    }
}

/// Read the decimal state index from the value part of a `start:` or
/// `accept:` line. Leading whitespace is allowed; everything after the
/// digits is ignored.
fn read_state_index(text: &str, line: usize) -> Result<StateID, Error> {
    let mut chars = text.trim_start().chars().peekable();
    read_digits(&mut chars, line)
}

fn read_digits(
    chars: &mut Peekable<Chars>,
    line: usize,
) -> Result<StateID, Error> {
    let mut value: StateID = 0;
    let mut any = false;
    while let Some(c) = chars.peek().copied() {
        match c.to_digit(10) {
            Some(d) => {
                chars.next();
                value = 10 * value + d as StateID;
                any = true;
            }
            None => break,
        }
    }
    if !any {
        return Err(Error::expected_digit(line));
    }
    Ok(value)
}

/// Read a transition line: source and destination state, polarity marker
/// and one or more space-separated ranges.
fn read_transition(
    line: &str,
    lineno: usize,
) -> Result<(StateID, Edge), Error> {
    let mut chars = line.chars().peekable();

    let from = read_digits(&mut chars, lineno)?;
    match chars.next() {
        Some('-') => {}
        _ => return Err(Error::expected_digit(lineno)),
    }
    let dest = read_digits(&mut chars, lineno)?;
    match chars.next() {
        Some(':') => {}
        _ => return Err(Error::expected_digit(lineno)),
    }
    let polarity = match chars.next() {
        Some('+') => Polarity::Positive,
        Some('-') => Polarity::Negative,
        got => return Err(Error::invalid_polarity(got, lineno)),
    };

    let mut edge = Edge::new(polarity, dest);
    loop {
        let low = read_endpoint(&mut chars, lineno)?;
        match chars.next() {
            Some('-') => {}
            got => return Err(Error::invalid_separator(got, lineno)),
        }
        let high = read_endpoint(&mut chars, lineno)?;
        edge.push_range(low, high)?;
        match chars.next() {
            None => break,
            // A trailing space is fine; anything else after a range must
            // start another one.
            Some(' ') => {
                if chars.peek().is_none() {
                    break;
                }
            }
            got => return Err(Error::invalid_separator(got, lineno)),
        }
    }
    Ok((from, edge))
}

/// Read one range endpoint: a literal character or an escape sequence.
fn read_endpoint(
    chars: &mut Peekable<Chars>,
    lineno: usize,
) -> Result<char, Error> {
    match chars.next() {
        None => Err(Error::premature_end(lineno)),
        Some('\\') => decode_escape(chars, EPSILON)
            .map_err(|err| Error::escape(err, lineno)),
        Some(c) => Ok(c),
    }
}
