/*!
A table-driven longest-match tokenizer built on parallel NFA simulations.

A [`Lexer`] holds an ordered table of compiled patterns, each with a token
name. [`Lexer::next_token`] runs one simulation per pattern in lockstep
over the input and returns the name and length of the longest accepting
prefix; when two patterns tie on length, the one loaded first wins.

# Description format

Rules can be added one at a time with [`Lexer::add`], or in bulk from a
line-oriented description: each non-blank line is either a comment
starting with `#`, or a pattern and a token name separated by a single
tab.

```
use regex_lex::lex::Lexer;

let mut lexer = Lexer::new();
lexer.load(
    "# a tiny arithmetic tokenizer\n\
     [a-zA-Z_]\\w*\tIDENT\n\
     \\d+\tINT\n\
     \\s+\tWS\n",
)?;

let token = lexer.next_token("count1 + 2").unwrap();
assert_eq!(("IDENT", 6), (token.name, token.length));

# Ok::<(), regex_lex::lex::Error>(())
```
*/

use log::{debug, trace};

use crate::{
    nfa::{any_accepting, start_set, step_set, NFA},
    regex,
    util::{lines::split_lines, sparse_set::SparseSet},
};

pub use self::error::Error;

mod error;

/// An ordered table of patterns for longest-match tokenization.
#[derive(Clone, Debug, Default)]
pub struct Lexer {
    patterns: Vec<Pattern>,
}

#[derive(Clone, Debug)]
struct Pattern {
    nfa: NFA,
    token: String,
}

/// One recognized token: the name of the winning pattern and the length
/// of the match in characters.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Token<'l> {
    /// The token name of the winning pattern.
    pub name: &'l str,
    /// The match length in characters. Never zero.
    pub length: usize,
}

impl Lexer {
    /// Create a lexer with no patterns. A lexer without patterns matches
    /// nothing.
    pub fn new() -> Lexer {
        Lexer::default()
    }

    /// Compile `pattern` and append it to the table under the given token
    /// name. Order matters: earlier patterns win length ties.
    pub fn add(&mut self, pattern: &str, token: &str) -> Result<(), Error> {
        let nfa = regex::parse(pattern)
            .map_err(|err| Error::pattern(err, None))?;
        debug!("added pattern {:?} for token {:?}", pattern, token);
        self.patterns.push(Pattern { nfa, token: token.to_string() });
        Ok(())
    }

    /// Load rules from a description: one `pattern<TAB>token-name` rule
    /// per line, with `#` comment lines and blank lines skipped.
    ///
    /// On an error, the rules added before the offending line remain in
    /// the table; callers that want all-or-nothing behavior should load
    /// into a fresh lexer and discard it on failure.
    pub fn load(&mut self, description: &str) -> Result<(), Error> {
        for (i, line) in split_lines(description).enumerate() {
            let lineno = i + 1;
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let tab = match line.find('\t') {
                Some(tab) => tab,
                None => return Err(Error::missing_separator(lineno)),
            };
            let (pattern, token) = (&line[..tab], &line[tab + 1..]);
            let nfa = regex::parse(pattern)
                .map_err(|err| Error::pattern(err, Some(lineno)))?;
            self.patterns.push(Pattern { nfa, token: token.to_string() });
        }
        debug!("lexer now has {} patterns", self.patterns.len());
        Ok(())
    }

    /// The number of patterns in the table.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Returns true when the table has no patterns.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Find the longest prefix of `input` accepted by any pattern.
    ///
    /// All pattern simulations advance together, one character at a time.
    /// Whenever any simulation is accepting at a new longest length, that
    /// pattern becomes the current winner; at equal length the earlier
    /// pattern keeps the win. The scan stops as soon as a step leaves no
    /// simulation accepting, or the input ends.
    ///
    /// Returns `None` when no pattern accepts any non-empty prefix.
    pub fn next_token(&self, input: &str) -> Option<Token<'_>> {
        let mut sim = self.simulate();
        for c in input.chars() {
            if sim.step(c) {
                break;
            }
        }
        sim.token()
    }

    /// Start a stepwise tokenization fed one character at a time. This is
    /// what [`next_token`](Lexer::next_token) drives internally; use it
    /// directly when characters arrive from somewhere other than an
    /// in-memory string.
    pub fn simulate(&self) -> LexSimulation<'_> {
        let sets =
            self.patterns.iter().map(|p| start_set(&p.nfa)).collect();
        LexSimulation {
            lexer: self,
            sets,
            best: None,
            consumed: 0,
            finished: false,
        }
    }

    /// Iterate over the tokens of `input`, advancing past each match. The
    /// iterator ends at the first position where no pattern matches, so a
    /// complete tokenization needs rules covering everything in the input
    /// (whitespace included).
    pub fn tokens<'l, 'h>(&'l self, input: &'h str) -> Tokens<'l, 'h> {
        Tokens { lexer: self, input }
    }
}

/// A stepwise tokenization, created by [`Lexer::simulate`] and fed one
/// character at a time.
///
/// Every pattern's state set advances over each pushed character. The
/// simulation finishes on the first character that leaves no pattern
/// accepting; that character is never part of the token. Streaming
/// callers should push it back to whatever source they read from.
#[derive(Clone, Debug)]
pub struct LexSimulation<'l> {
    lexer: &'l Lexer,
    sets: Vec<SparseSet>,
    /// The winning pattern index and match length seen so far.
    best: Option<(usize, usize)>,
    consumed: usize,
    finished: bool,
}

impl<'l> LexSimulation<'l> {
    /// Advance every pattern over `c` and return true when the
    /// tokenization is finished. Pushing characters after that is a
    /// no-op.
    pub fn step(&mut self, c: char) -> bool {
        if self.finished {
            return true;
        }
        self.consumed += 1;
        let mut any = false;
        for (i, set) in self.sets.iter_mut().enumerate() {
            if set.is_empty() {
                continue;
            }
            let nfa = &self.lexer.patterns[i].nfa;
            *set = step_set(nfa, set, c);
            if any_accepting(nfa, set) {
                any = true;
                if self.best.map_or(true, |(_, len)| self.consumed > len) {
                    self.best = Some((i, self.consumed));
                }
            }
        }
        trace!(
            "after {} characters the winner is {:?}",
            self.consumed,
            self.best,
        );
        if !any {
            self.finished = true;
        }
        self.finished
    }

    /// True once no further character can extend the match.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// The best token seen so far, or `None` if no pattern has accepted
    /// any prefix.
    pub fn token(&self) -> Option<Token<'l>> {
        self.best.map(|(i, length)| Token {
            name: &self.lexer.patterns[i].token,
            length,
        })
    }
}

/// An iterator over the consecutive tokens of an input, created by
/// [`Lexer::tokens`].
#[derive(Clone, Debug)]
pub struct Tokens<'l, 'h> {
    lexer: &'l Lexer,
    input: &'h str,
}

impl<'l, 'h> Iterator for Tokens<'l, 'h> {
    type Item = Token<'l>;

    fn next(&mut self) -> Option<Token<'l>> {
        if self.input.is_empty() {
            return None;
        }
        let token = self.lexer.next_token(self.input)?;
        let bytes = self
            .input
            .char_indices()
            .nth(token.length)
            .map_or(self.input.len(), |(i, _)| i);
        self.input = &self.input[bytes..];
        Some(token)
    }
}
