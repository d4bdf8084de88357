/*!
Searching a text for matches of a compiled machine.

The search runs one simulation per starting position and keeps, for each,
the longest prefix that was ever in an accepting classification: longest
leftmost matching. Two knobs adjust the walk over starting positions:
`greedy` stops after the first hit, and `overlap` allows hits to share
characters.
*/

use log::debug;

use crate::{
    nfa::{Simulation, Status, NFA},
    regex::{error::Error, parser::parse},
};

/// One match within a searched text.
///
/// Both fields count characters, not bytes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Hit {
    /// The character index at which the match begins.
    pub start: usize,
    /// The length of the match in characters. Never zero: empty matches
    /// are not reported.
    pub length: usize,
}

/// Configuration for a [`search`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SearchConfig {
    greedy: bool,
    overlap: bool,
}

impl SearchConfig {
    /// Return a new default search configuration: all hits,
    /// non-overlapping.
    pub fn new() -> SearchConfig {
        SearchConfig::default()
    }

    /// Return after the first hit. Useful for membership-style queries
    /// over a large text.
    pub fn greedy(mut self, yes: bool) -> SearchConfig {
        self.greedy = yes;
        self
    }

    /// Allow hits to overlap: the next start position is one character
    /// after the previous hit's start, rather than past its end. A search
    /// for `\w+` on `"blah"` then finds `blah`, `lah`, `ah` and `h`,
    /// which is rarely what one wants.
    pub fn overlap(mut self, yes: bool) -> SearchConfig {
        self.overlap = yes;
        self
    }
}

/// Find matches of `nfa` in `haystack`, materialized into a vector. See
/// [`hits`] for the lazy form.
pub fn search(nfa: &NFA, haystack: &str, config: SearchConfig) -> Vec<Hit> {
    hits(nfa, haystack, config).collect()
}

/// Iterate over the matches of `nfa` in `haystack`.
///
/// For each starting position, the machine is simulated over the rest of
/// the text and the longest accepting prefix, if any, becomes a hit. A
/// position with no accepting prefix contributes nothing and the search
/// moves one character over.
pub fn hits<'n, 'h>(
    nfa: &'n NFA,
    haystack: &'h str,
    config: SearchConfig,
) -> Hits<'n, 'h> {
    let offsets = haystack.char_indices().map(|(i, _)| i).collect();
    Hits { nfa, haystack, offsets, start: 0, config, done: false }
}

/// An iterator over the matches of a machine in a text, created by
/// [`hits`].
#[derive(Clone, Debug)]
pub struct Hits<'n, 'h> {
    nfa: &'n NFA,
    haystack: &'h str,
    /// Byte offsets of the character boundaries of the haystack.
    offsets: Vec<usize>,
    /// The character index at which the next probe starts.
    start: usize,
    config: SearchConfig,
    done: bool,
}

impl<'n, 'h> Iterator for Hits<'n, 'h> {
    type Item = Hit;

    fn next(&mut self) -> Option<Hit> {
        if self.done {
            return None;
        }
        while self.start < self.offsets.len() {
            let rest = &self.haystack[self.offsets[self.start]..];
            let mut sim = Simulation::begin(self.nfa, rest);
            let mut length = 0;
            let mut last = None;
            loop {
                match sim.status() {
                    Status::Accepted | Status::Rejected => break,
                    Status::Accepting | Status::NotAccepting => {}
                }
                sim.step();
                length += 1;
                match sim.status() {
                    Status::Accepting | Status::Accepted => {
                        last = Some(length)
                    }
                    Status::NotAccepting | Status::Rejected => {}
                }
            }
            match last {
                Some(length) => {
                    debug!("hit at {} with length {}", self.start, length);
                    let hit = Hit { start: self.start, length };
                    if self.config.greedy {
                        self.done = true;
                    }
                    self.start +=
                        if self.config.overlap { 1 } else { length };
                    return Some(hit);
                }
                None => self.start += 1,
            }
        }
        None
    }
}

/// Compile `pattern` and [`search`] with it.
pub fn search_pattern(
    pattern: &str,
    haystack: &str,
    config: SearchConfig,
) -> Result<Vec<Hit>, Error> {
    let nfa = parse(pattern)?;
    Ok(search(&nfa, haystack, config))
}
