/*!
Regular expressions: compilation to NFAs and text search.

[`parse`] turns a pattern into an [`NFA`](crate::nfa::NFA) via the
Thompson construction; [`search`] drives a compiled machine over a text
and reports longest-leftmost [`Hit`]s.

# Syntax

| Construct | Meaning |
|-----------|---------|
| `x` | the literal character `x` |
| `\x41`, `\n`, `\\`, ... | escapes (any unknown escape is the literal character) |
| `.` | any single character |
| `[abc]`, `[a-z0-9_]` | character class; `-` makes an inclusive range |
| `[^...]` | negated character class |
| `A\|B` | alternation, binding looser than concatenation |
| `AB` | concatenation |
| `A*`, `A+`, `A?` | zero-or-more, one-or-more, optional |
| `(...)` | grouping |
| `\s \S \w \W \d \D` | predefined classes and their negations |

There are no capturing groups, no repetition counts, no anchors and no
backreferences.

# Example

```
use regex_lex::regex;

let nfa = regex::parse("(ab)+c?")?;
assert!(nfa.accepts("abab"));
assert!(nfa.accepts("abc"));
assert!(!nfa.accepts("ac"));

# Ok::<(), regex::Error>(())
```
*/

pub use self::{
    error::Error,
    parser::parse,
    search::{hits, search, search_pattern, Hit, Hits, SearchConfig},
};

mod error;
mod parser;
mod search;
