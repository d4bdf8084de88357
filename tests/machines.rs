use anyhow::Result;

use regex_lex::NFA;

/// A four-state machine over {a, b} accepting strings with an even number
/// of each letter.
const EVEN_A_EVEN_B: &str = "\
start:0
accept:0
0-1:+a-a
0-2:+b-b
1-0:+a-a
1-3:+b-b
2-3:+a-a
2-0:+b-b
3-1:+b-b
3-2:+a-a
";

#[test]
fn even_a_even_b() -> Result<()> {
    let nfa = NFA::read(EVEN_A_EVEN_B)?;
    assert_eq!(4, nfa.len());

    assert!(nfa.accepts(""));
    assert!(nfa.accepts("abab"));
    assert!(nfa.accepts("aabb"));
    assert!(nfa.accepts("abba"));

    assert!(!nfa.accepts("ababa"));
    assert!(!nfa.accepts("aabaa"));
    assert!(!nfa.accepts("aaaabbbba"));
    assert!(!nfa.accepts("ab"));
    Ok(())
}

#[test]
fn even_a_even_b_round_trips() -> Result<()> {
    let nfa = NFA::read(EVEN_A_EVEN_B)?;
    let written = nfa.to_string();
    assert_eq!(EVEN_A_EVEN_B, written);
    let again = NFA::read(&written)?;
    assert!(again.accepts("abab"));
    assert!(!again.accepts("ab"));
    Ok(())
}

/// A chain of thirteen states whose consecutive edges exercise every
/// escape form, with the `\e` edge contributing no input character.
const ESCAPES: &str = "\
start:0
accept:12
0-1:+\\a-\\a
1-2:+\\b-\\b
2-3:+\\e-\\e
3-4:+\\f-\\f
4-5:+\\n-\\n
5-6:+\\r-\\r
6-7:+\\t-\\t
7-8:+\\v-\\v
8-9:+\\\\-\\\\
9-10:+\\+-\\+
10-11:+\\x3A-\\x3A
11-12:+\\u0051-\\u0051
";

#[test]
fn escape_chain() -> Result<()> {
    let nfa = NFA::read(ESCAPES)?;
    assert_eq!(13, nfa.len());

    let accepted = "\u{07}\u{08}\u{0C}\n\r\t\u{0B}\\+:Q";
    assert!(nfa.accepts(accepted));

    // Any input differing in one character is rejected.
    for (i, _) in accepted.char_indices() {
        let mut altered: Vec<char> = accepted.chars().collect();
        altered[accepted[..i].chars().count()] = '#';
        let altered: String = altered.into_iter().collect();
        assert!(!nfa.accepts(&altered), "altered at byte {}", i);
    }
    // So is anything longer or shorter.
    assert!(!nfa.accepts(&accepted[..accepted.len() - 1]));
    assert!(!nfa.accepts(&format!("{}Q", accepted)));
    Ok(())
}

#[test]
fn escape_chain_round_trips() -> Result<()> {
    let nfa = NFA::read(ESCAPES)?;
    let written = nfa.to_string();
    let again = NFA::read(&written)?;
    assert_eq!(written, again.to_string());
    assert!(again.accepts("\u{07}\u{08}\u{0C}\n\r\t\u{0B}\\+:Q"));
    Ok(())
}

#[test]
fn written_machines_accept_the_same_strings() -> Result<()> {
    let samples =
        ["", "a", "b", "ab", "ba", "aa", "abc", "abab", "hello", " "];
    for pattern in ["a", "ab|ba", "(a|b)*", "a+b?", "[a-c]+", r"\w+"] {
        let nfa = regex_lex::regex::parse(pattern)?;
        let back = NFA::read(&nfa.to_string())?;
        for sample in samples {
            assert_eq!(
                nfa.accepts(sample),
                back.accepts(sample),
                "pattern {:?} on {:?}",
                pattern,
                sample,
            );
        }
    }
    Ok(())
}

#[test]
fn deterministic_driver_agrees_on_a_dfa() -> Result<()> {
    // The even/even machine is a DFA, so both drivers must agree.
    let nfa = NFA::read(EVEN_A_EVEN_B)?;
    for sample in ["", "a", "ab", "abab", "aabb", "ababa", "bbaa"] {
        assert_eq!(
            nfa.accepts(sample),
            nfa.accepts_deterministic(sample),
            "{:?}",
            sample,
        );
    }
    Ok(())
}

#[test]
fn dot_export_of_a_loaded_machine() -> Result<()> {
    let nfa = NFA::read(EVEN_A_EVEN_B)?;
    let dot = nfa.to_dot();
    assert!(dot.contains("s0 [shape=oval];"));
    assert!(dot.contains("s0 [shape=octagon];"));
    assert!(dot.contains("s3 -> s1 [label=\"(+) b-b\"];"));
    Ok(())
}
