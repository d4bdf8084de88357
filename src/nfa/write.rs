/*!
Writing an NFA back out: the persistence format via `Display`, and a
one-way Graphviz dot export.

The `Display` form is the exact inverse of [`NFA::read`]: endpoints that
would confuse the reader (the separator characters, backslash, control
characters and the epsilon symbol) are escaped, so a written machine reads
back identically.
*/

use core::fmt;

use crate::nfa::nfa::{EPSILON, NFA};

impl fmt::Display for NFA {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(start) = self.start() {
            writeln!(f, "start:{}", start)?;
        }
        for &a in self.accepting() {
            writeln!(f, "accept:{}", a)?;
        }
        for (i, state) in self.states().enumerate() {
            for edge in state.edges() {
                write!(f, "{}-{}:{}", i, edge.dest(), edge.polarity())?;
                for (k, range) in edge.ranges().iter().enumerate() {
                    if k > 0 {
                        write!(f, " ")?;
                    }
                    write_endpoint(f, range.low)?;
                    write!(f, "-")?;
                    write_endpoint(f, range.high)?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Write one range endpoint, escaping anything the reader would not take
/// verbatim.
fn write_endpoint(f: &mut fmt::Formatter, c: char) -> fmt::Result {
    match c {
        EPSILON => write!(f, "\\e"),
        '\u{07}' => write!(f, "\\a"),
        '\u{08}' => write!(f, "\\b"),
        '\u{0C}' => write!(f, "\\f"),
        '\n' => write!(f, "\\n"),
        '\r' => write!(f, "\\r"),
        '\t' => write!(f, "\\t"),
        '\u{0B}' => write!(f, "\\v"),
        '\\' => write!(f, "\\\\"),
        '-' | ' ' => write!(f, "\\{}", c),
        c if (c as u32) < 0x20 || c as u32 == 0x7F => {
            write!(f, "\\x{:02X}", c as u32)
        }
        c => write!(f, "{}", c),
    }
}

impl NFA {
    /// Render this machine as a Graphviz directed graph: one node per
    /// state (the start state oval, accepting states octagonal, the rest
    /// boxes) and one labelled arrow per edge.
    pub fn to_dot(&self) -> String {
        let mut out = String::new();
        out.push_str("digraph nfa {\n");
        out.push_str("  node [shape=box];\n");
        if let Some(start) = self.start() {
            out.push_str(&format!("  s{} [shape=oval];\n", start));
        }
        for &a in self.accepting() {
            out.push_str(&format!("  s{} [shape=octagon];\n", a));
        }
        for (i, state) in self.states().enumerate() {
            for edge in state.edges() {
                out.push_str(&format!(
                    "  s{} -> s{} [label=\"({})",
                    i,
                    edge.dest(),
                    edge.polarity(),
                ));
                for range in edge.ranges() {
                    out.push(' ');
                    push_dot_char(&mut out, range.low);
                    out.push('-');
                    push_dot_char(&mut out, range.high);
                }
                out.push_str("\"];\n");
            }
        }
        out.push_str("}\n");
        out
    }
}

/// Write a label character for the dot export. The epsilon symbol has no
/// glyph, and a double quote would end the label early.
fn push_dot_char(out: &mut String, c: char) {
    match c {
        EPSILON => out.push_str("eps"),
        '"' => out.push_str("\\\""),
        c => out.push(c),
    }
}
