/*!
In-place composition of NFAs: concatenation, alternation and Kleene star,
plus the derived one-or-more and optional operators.

All operators mutate `self` and deep-copy the other operand's states in,
rewriting copied destinations by an offset, so the two machines never share
storage and every destination in the result stays in bounds. None of these
can fail on machines whose own invariants hold.
*/

use crate::nfa::nfa::{Edge, NFA};

impl NFA {
    /// Append a copy of every state of `other`, with each copied edge's
    /// destination shifted past the states this machine already had.
    /// Returns that shift. The accepting set and start state of `self` are
    /// left untouched.
    pub(crate) fn merge_states_from(&mut self, other: &NFA) -> usize {
        let offset = self.len();
        for state in other.states() {
            let id = self.add_state(false);
            for edge in state.edges() {
                self.add_edge(id, edge.shifted(offset));
            }
        }
        offset
    }

    /// Replace this machine with the concatenation of itself and `other`,
    /// accepting any string that splits into a prefix this machine accepts
    /// and a suffix `other` accepts.
    ///
    /// Every accepting state of `self` grows an epsilon edge into the copy
    /// of `other`'s start state, and `other`'s accepting set (shifted)
    /// replaces this machine's own.
    pub fn concat(&mut self, other: &NFA) {
        let offset = self.merge_states_from(other);
        if let Some(other_start) = other.start() {
            for i in 0..self.accepting.len() {
                let from = self.accepting[i];
                self.add_edge(from, Edge::epsilon(other_start + offset));
            }
        }
        self.accepting.clear();
        self.accepting.extend(other.accepting().iter().map(|a| a + offset));
    }

    /// Replace this machine with the union of itself and `other`,
    /// accepting any string that either machine accepts.
    ///
    /// A fresh non-accepting state becomes the new start, with epsilon
    /// edges into both old start states.
    pub fn union(&mut self, other: &NFA) {
        let offset = self.merge_states_from(other);
        self.accepting.extend(other.accepting().iter().map(|a| a + offset));

        let new_start = self.add_state(false);
        if let Some(old_start) = self.start() {
            self.add_edge(new_start, Edge::epsilon(old_start));
        }
        if let Some(other_start) = other.start() {
            self.add_edge(new_start, Edge::epsilon(other_start + offset));
        }
        self.set_start(new_start);
    }

    /// Replace this machine with its Kleene star, accepting zero or more
    /// back-to-back occurrences of anything it accepted before.
    ///
    /// A fresh accepting state becomes the new start, with an epsilon edge
    /// into the old start; every previously accepting state grows an
    /// epsilon edge back to it.
    pub fn star(&mut self) {
        let new_start = self.add_state(false);
        if let Some(old_start) = self.start() {
            self.add_edge(new_start, Edge::epsilon(old_start));
        }
        for i in 0..self.accepting.len() {
            let from = self.accepting[i];
            self.add_edge(from, Edge::epsilon(new_start));
        }
        self.accepting.push(new_start);
        self.set_start(new_start);
    }

    /// Replace this machine with one accepting one or more back-to-back
    /// occurrences: the concatenation of itself with its own starred copy.
    pub fn plus(&mut self) {
        let mut starred = self.clone();
        starred.star();
        self.concat(&starred);
    }

    /// Replace this machine with one that also accepts the empty string:
    /// the union of itself with the empty-string machine.
    pub fn optional(&mut self) {
        self.union(&NFA::empty_string());
    }
}
