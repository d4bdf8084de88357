/*!
Finite automata compiled from regular expressions, usable directly as a
matcher/searcher and as the engine behind a longest-match tokenizer.

Three layers build on each other:

* [`nfa`] is the machine itself: states addressed by index, edges
  labelled with character range sets (positive or negated), epsilon
  transitions, an in-place composition algebra (concatenation, union,
  Kleene star), a stepwise set-of-states simulator, and a line-oriented
  text format for persisting machines (plus a Graphviz export).
* [`regex`] is a small regular expression dialect compiled to NFAs with
  the Thompson construction, and a search driver reporting
  longest-leftmost matches.
* [`lex`] is a tokenizer that runs several named patterns in lockstep and
  picks the longest accepting prefix, breaking ties in favor of the
  earliest-loaded pattern.

Input is processed one `char` at a time throughout; offsets and lengths
count characters, never bytes.

# Example: match and search

```
use regex_lex::{regex, regex::SearchConfig};

let nfa = regex::parse(r"[a-z]+")?;
assert!(nfa.accepts("hello"));
assert!(!nfa.accepts("hello world"));

let hits = regex::search(&nfa, "ab cde f", SearchConfig::new());
let spans: Vec<(usize, usize)> =
    hits.iter().map(|h| (h.start, h.length)).collect();
assert_eq!(vec![(0, 2), (3, 3), (7, 1)], spans);

# Ok::<(), regex_lex::regex::Error>(())
```

# Example: tokenize

```
use regex_lex::lex::Lexer;

let mut lexer = Lexer::new();
lexer.load("\\d+\tINT\n[a-z]+\tWORD\n\\s+\tWS\n")?;

let kinds: Vec<&str> =
    lexer.tokens("12 abc").map(|token| token.name).collect();
assert_eq!(vec!["INT", "WS", "WORD"], kinds);

# Ok::<(), regex_lex::lex::Error>(())
```

# Limitations

No capturing groups, backreferences, lookaround, anchors or repetition
counts; no DFA construction or minimization; machines are single-threaded
(a simulation borrows its machine, nothing is `Sync`-aware beyond what the
borrow checker grants for free).
*/

#![deny(missing_docs)]

pub use crate::{
    lex::{Lexer, Token},
    nfa::{
        CharRange, Edge, Polarity, Simulation, State, StateID, Status,
        ALPHABET_MAX, EPSILON, NFA,
    },
    regex::{Hit, SearchConfig},
};

pub mod lex;
pub mod nfa;
pub mod regex;
pub mod util;
