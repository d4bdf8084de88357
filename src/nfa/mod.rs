/*!
Nondeterministic finite automata with epsilon transitions and
range-labelled edges.

This module owns the data model and everything that operates on a machine
directly: in-place composition (concatenation, union, Kleene star), the
stepwise set-of-states simulator, and the textual persistence format.

# Building machines

A machine can be built three ways: by hand with [`NFA::add_state`] and
[`NFA::add_edge`], by compiling a pattern with
[`regex::parse`](crate::regex::parse), or by loading a description with
[`NFA::read`]:

```
use regex_lex::nfa::NFA;

// A three-state chain accepting exactly "ab".
let nfa = NFA::read("start:0\naccept:2\n0-1:+a-a\n1-2:+b-b\n")?;
assert!(nfa.accepts("ab"));
assert!(!nfa.accepts("ba"));

# Ok::<(), regex_lex::nfa::Error>(())
```

# Simulation

[`NFA::accepts`] answers whole-string membership. For stepwise control
(the search and lexer drivers are built this way), use [`Simulation`]:

```
use regex_lex::nfa::{Simulation, Status, NFA};

let nfa = NFA::single_char('x');
let mut sim = Simulation::begin(&nfa, "x");
assert_eq!(Status::NotAccepting, sim.status());
sim.step();
assert_eq!(Status::Accepted, sim.status());
```
*/

pub use self::{
    error::Error,
    nfa::{
        CharRange, Edge, Polarity, State, StateID, ALPHABET_MAX, EPSILON,
        NFA,
    },
    simulate::{Simulation, Status},
};

pub(crate) use self::simulate::{any_accepting, start_set, step_set};

mod algebra;
mod error;
mod nfa;
mod read;
mod simulate;
mod write;
