use core::str::Chars;

use log::{trace, warn};

use crate::{
    nfa::nfa::{StateID, NFA},
    util::sparse_set::SparseSet,
};

/// The relationship of a running simulation to its machine's accepting
/// set.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Status {
    /// Some current state is accepting and input remains. The string read
    /// so far is accepted, but the simulation is not finished.
    Accepting,
    /// No current state is accepting, but input remains, so the simulation
    /// may still recover.
    NotAccepting,
    /// Some current state is accepting and the input is exhausted. The
    /// simulation is finished and the string was accepted.
    Accepted,
    /// Either no state remains reachable, or the input is exhausted with
    /// no current state accepting. The simulation is finished and the
    /// string was rejected.
    Rejected,
}

/// A stepwise nondeterministic simulation of an NFA over one input.
///
/// A simulation borrows its machine for its whole lifetime; the machine
/// cannot change underneath it. The "current" position is a deduplicated
/// set of states, kept in the deterministic order in which each state was
/// first reached.
///
/// The driving loop belongs to the caller: check [`status`](Simulation::status),
/// and while it is neither `Accepted` nor `Rejected`, call
/// [`step`](Simulation::step). [`NFA::accepts`] wraps exactly that loop.
#[derive(Clone, Debug)]
pub struct Simulation<'n, 'h> {
    nfa: &'n NFA,
    current: SparseSet,
    input: Chars<'h>,
}

impl<'n, 'h> Simulation<'n, 'h> {
    /// Start a simulation of `nfa` over `input`. The current set begins as
    /// the epsilon closure of the start state.
    ///
    /// Check the status before stepping: the input may already be empty.
    pub fn begin(nfa: &'n NFA, input: &'h str) -> Simulation<'n, 'h> {
        Simulation { nfa, current: start_set(nfa), input: input.chars() }
    }

    /// Advance the simulation over the next input character: collect every
    /// destination of an edge accepting that character out of any current
    /// state, then expand the collection by its epsilon closures.
    ///
    /// Once the input is exhausted this is a no-op.
    pub fn step(&mut self) {
        let c = match self.input.next() {
            Some(c) => c,
            None => return,
        };
        let next = step_set(self.nfa, &self.current, c);
        trace!("stepped over {:?}: {:?} -> {:?}", c, self.current, next);
        self.current = next;
    }

    /// Classify the simulation's current position.
    pub fn status(&self) -> Status {
        if self.current.is_empty() {
            return Status::Rejected;
        }
        let accepting = any_accepting(self.nfa, &self.current);
        let exhausted = self.input.as_str().is_empty();
        match (accepting, exhausted) {
            (true, true) => Status::Accepted,
            (true, false) => Status::Accepting,
            (false, true) => Status::Rejected,
            (false, false) => Status::NotAccepting,
        }
    }
}

/// The starting set of a simulation: the epsilon closure of the start
/// state, or the empty set for a machine with no start state.
pub(crate) fn start_set(nfa: &NFA) -> SparseSet {
    let mut set = SparseSet::new(nfa.len());
    if let Some(start) = nfa.start() {
        for id in nfa.epsilon_closure(start) {
            set.insert(id);
        }
    }
    set
}

/// Advance a state set over one character: every destination of an edge
/// accepting `c` out of any state in `current`, expanded by epsilon
/// closures.
pub(crate) fn step_set(
    nfa: &NFA,
    current: &SparseSet,
    c: char,
) -> SparseSet {
    let mut next = SparseSet::new(nfa.len());
    for id in current.iter() {
        for edge in nfa.state(id).edges() {
            if edge.accepts(c) {
                next.insert(edge.dest());
            }
        }
    }
    // Union in the closure of each state reached above. Closures are
    // transitively complete, so states inserted by this loop need no
    // expansion of their own.
    let reached = next.len();
    for i in 0..reached {
        for id in nfa.epsilon_closure(next.get(i)) {
            next.insert(id);
        }
    }
    next
}

/// Whether any state in the set is accepting.
pub(crate) fn any_accepting(nfa: &NFA, set: &SparseSet) -> bool {
    set.iter().any(|id| nfa.is_accepting(id))
}

impl NFA {
    /// The set of states reachable from `id` by zero or more epsilon
    /// edges, in breadth-first order. The state itself comes first.
    ///
    /// # Panics
    ///
    /// When `id` is not a valid state identifier.
    pub fn epsilon_closure(&self, id: StateID) -> Vec<StateID> {
        let mut closure = Vec::new();
        let mut seen = SparseSet::new(self.len());
        let mut queue = std::collections::VecDeque::new();
        seen.insert(id);
        queue.push_back(id);
        while let Some(id) = queue.pop_front() {
            closure.push(id);
            for edge in self.state(id).edges() {
                if edge.is_epsilon() && seen.insert(edge.dest()) {
                    queue.push_back(edge.dest());
                }
            }
        }
        closure
    }

    /// Run the machine as an NFA over the whole input and report whether
    /// it accepts.
    pub fn accepts(&self, input: &str) -> bool {
        let mut sim = Simulation::begin(self, input);
        loop {
            match sim.status() {
                Status::Accepted => return true,
                Status::Rejected => return false,
                Status::Accepting | Status::NotAccepting => sim.step(),
            }
        }
    }

    /// Run the machine as a DFA over the whole input: walk a single
    /// current state, with no epsilon closure. Useful for machines known
    /// to be deterministic, where the set bookkeeping of
    /// [`accepts`](NFA::accepts) is wasted work.
    ///
    /// A state with no edge accepting the current character rejects
    /// immediately. If several edges accept it, the machine was not
    /// deterministic after all: a diagnostic is logged and the first
    /// matching edge wins.
    pub fn accepts_deterministic(&self, input: &str) -> bool {
        let mut state = match self.start() {
            Some(start) => start,
            None => return false,
        };
        for c in input.chars() {
            let mut next = None;
            for edge in self.state(state).edges() {
                if edge.accepts(c) {
                    if next.is_none() {
                        next = Some(edge.dest());
                    } else {
                        warn!(
                            "state {} has several transitions accepting \
                             {:?}; keeping the first",
                            state, c,
                        );
                    }
                }
            }
            state = match next {
                Some(next) => next,
                None => return false,
            };
        }
        self.is_accepting(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nfa::nfa::{Edge, Polarity};

    /// a(a|b)* as a hand-built machine.
    fn lopsided() -> NFA {
        let mut nfa = NFA::new();
        let s0 = nfa.add_state(false);
        let s1 = nfa.add_state(true);
        nfa.add_single_edge(s0, s1, 'a', 'a', Polarity::Positive).unwrap();
        nfa.add_single_edge(s1, s1, 'a', 'b', Polarity::Positive).unwrap();
        nfa.set_start(s0);
        nfa
    }

    #[test]
    fn closure_is_breadth_first_and_deduplicated() {
        // 0 -e-> 1, 0 -e-> 2, 1 -e-> 3, 2 -e-> 3
        let mut nfa = NFA::new();
        for _ in 0..4 {
            nfa.add_state(false);
        }
        nfa.add_edge(0, Edge::epsilon(1));
        nfa.add_edge(0, Edge::epsilon(2));
        nfa.add_edge(1, Edge::epsilon(3));
        nfa.add_edge(2, Edge::epsilon(3));
        nfa.set_start(0);

        assert_eq!(vec![0, 1, 2, 3], nfa.epsilon_closure(0));
        assert_eq!(vec![1, 3], nfa.epsilon_closure(1));
        assert_eq!(vec![3], nfa.epsilon_closure(3));
    }

    #[test]
    fn closure_tolerates_cycles() {
        let mut nfa = NFA::new();
        nfa.add_state(false);
        nfa.add_state(false);
        nfa.add_edge(0, Edge::epsilon(1));
        nfa.add_edge(1, Edge::epsilon(0));
        assert_eq!(vec![0, 1], nfa.epsilon_closure(0));
    }

    #[test]
    fn closure_ignores_character_edges() {
        let nfa = lopsided();
        assert_eq!(vec![0], nfa.epsilon_closure(0));
    }

    #[test]
    fn status_progression() {
        let nfa = lopsided();
        let mut sim = Simulation::begin(&nfa, "ab");
        assert_eq!(Status::NotAccepting, sim.status());
        sim.step();
        assert_eq!(Status::Accepting, sim.status());
        sim.step();
        assert_eq!(Status::Accepted, sim.status());
    }

    #[test]
    fn dead_end_is_rejected_early() {
        let nfa = lopsided();
        let mut sim = Simulation::begin(&nfa, "ba");
        sim.step();
        assert_eq!(Status::Rejected, sim.status());
    }

    #[test]
    fn empty_input_is_classified_immediately() {
        let nfa = lopsided();
        let sim = Simulation::begin(&nfa, "");
        assert_eq!(Status::Rejected, sim.status());

        let empty = NFA::empty_string();
        let sim = Simulation::begin(&empty, "");
        assert_eq!(Status::Accepted, sim.status());
    }

    #[test]
    fn machine_without_a_start_state_rejects() {
        let nfa = NFA::new();
        assert!(!nfa.accepts(""));
        assert!(!nfa.accepts("a"));
        assert!(!nfa.accepts_deterministic("a"));
    }

    #[test]
    fn deterministic_walk() {
        let nfa = lopsided();
        assert!(nfa.accepts_deterministic("a"));
        assert!(nfa.accepts_deterministic("abba"));
        assert!(!nfa.accepts_deterministic(""));
        assert!(!nfa.accepts_deterministic("ba"));
        assert!(!nfa.accepts_deterministic("ac"));
    }

    #[test]
    fn deterministic_walk_keeps_the_first_of_an_ambiguous_pair() {
        let mut nfa = NFA::new();
        let s0 = nfa.add_state(false);
        let s1 = nfa.add_state(true);
        let s2 = nfa.add_state(false);
        nfa.add_single_edge(s0, s1, 'a', 'a', Polarity::Positive).unwrap();
        nfa.add_single_edge(s0, s2, 'a', 'a', Polarity::Positive).unwrap();
        nfa.set_start(s0);
        assert!(nfa.accepts_deterministic("a"));
    }

    #[test]
    fn negative_edges_match_in_simulation() {
        let mut nfa = NFA::new();
        let s0 = nfa.add_state(false);
        let s1 = nfa.add_state(true);
        nfa.add_single_edge(s0, s1, 'a', 'z', Polarity::Negative).unwrap();
        nfa.set_start(s0);
        assert!(nfa.accepts("A"));
        assert!(nfa.accepts("0"));
        assert!(!nfa.accepts("q"));
    }
}
