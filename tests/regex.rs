use anyhow::Result;

use regex_lex::regex::parse;

#[test]
fn single_character_primitives() -> Result<()> {
    let nfa = parse("a")?;
    assert!(nfa.accepts("a"));
    assert!(!nfa.accepts(""));
    assert!(!nfa.accepts("b"));
    assert!(!nfa.accepts("abcd"));
    Ok(())
}

#[test]
fn concatenation_primitives() -> Result<()> {
    let nfa = parse("abcd")?;
    assert!(nfa.accepts("abcd"));
    for no in ["", "a", "abc", "abcde", "abdc"] {
        assert!(!nfa.accepts(no), "{:?}", no);
    }
    Ok(())
}

#[test]
fn class_and_alternation_agree() -> Result<()> {
    let class = parse("[abcd]")?;
    let alts = parse("(a|b|c|d)")?;
    for sample in ["a", "b", "c", "d", "e", "", "uuuu", "ab"] {
        assert_eq!(
            class.accepts(sample),
            alts.accepts(sample),
            "{:?}",
            sample,
        );
    }
    for yes in ["a", "b", "c", "d"] {
        assert!(class.accepts(yes), "{:?}", yes);
    }
    for no in ["e", "", "uuuu"] {
        assert!(!class.accepts(no), "{:?}", no);
    }
    Ok(())
}

#[test]
fn plus_and_star_primitives() -> Result<()> {
    let plus = parse("a+")?;
    assert!(!plus.accepts(""));
    assert!(plus.accepts("a"));
    assert!(plus.accepts("aa"));
    assert!(plus.accepts("aaa"));
    assert!(!plus.accepts("ab"));

    let star = parse("a*")?;
    assert!(star.accepts(""));
    assert!(star.accepts("a"));
    assert!(star.accepts("aaaaaaaa"));
    assert!(!star.accepts("ba"));
    Ok(())
}

#[test]
fn dot_primitive() -> Result<()> {
    let nfa = parse(".")?;
    for yes in ["a", "Z", "0", " ", "\t", "λ", "\u{10FFFE}"] {
        assert!(nfa.accepts(yes), "{:?}", yes);
    }
    assert!(!nfa.accepts(""));
    assert!(!nfa.accepts("ab"));
    assert!(!nfa.accepts("aa"));
    Ok(())
}

#[test]
fn concat_of_two_languages_is_their_product() -> Result<()> {
    // accepts(concat(A, B), xy) iff A accepts x and B accepts y for some
    // split.
    let mut ab = parse("a+")?;
    ab.concat(&parse("b+")?);
    assert!(ab.accepts("ab"));
    assert!(ab.accepts("aaabb"));
    assert!(!ab.accepts("a"));
    assert!(!ab.accepts("b"));
    assert!(!ab.accepts("aba"));
    Ok(())
}

#[test]
fn union_of_two_languages_is_their_sum() -> Result<()> {
    let a = parse("ab")?;
    let b = parse("cd*")?;
    let mut either = a.clone();
    either.union(&b);
    for sample in ["ab", "c", "cd", "cddd", "", "abc", "dc"] {
        assert_eq!(
            a.accepts(sample) || b.accepts(sample),
            either.accepts(sample),
            "{:?}",
            sample,
        );
    }
    Ok(())
}

#[test]
fn star_accepts_concatenated_pieces() -> Result<()> {
    let piece = parse("ab|c")?;
    let mut star = piece.clone();
    star.star();
    assert!(star.accepts(""));
    for yes in ["ab", "c", "abc", "cab", "ababcc"] {
        assert!(star.accepts(yes), "{:?}", yes);
    }
    assert!(!star.accepts("a"));
    assert!(!star.accepts("abca"));
    Ok(())
}

#[test]
fn compiled_machines_have_no_dangling_indices() -> Result<()> {
    for pattern in [
        "",
        "a",
        "abcd",
        "a|b|c|d",
        "(ab)*(cd)+e?",
        "[a-z0-9_]+",
        r"[^x]\w\S*",
        r"\e*",
        "((a|b)*c)+",
    ] {
        let nfa = parse(pattern)?;
        for state in nfa.states() {
            for edge in state.edges() {
                assert!(edge.dest() < nfa.len(), "{:?}", pattern);
            }
        }
        let start = nfa.start().expect("compiled machines have a start");
        assert!(start < nfa.len(), "{:?}", pattern);
        for &a in nfa.accepting() {
            assert!(a < nfa.len(), "{:?}", pattern);
        }
    }
    Ok(())
}

#[test]
fn rejects_malformed_patterns() {
    for bad in ["(a", "a)", "(a|b", "[abc", "[]", "[z-a]", r"\x9§", r"\u00"]
    {
        assert!(parse(bad).is_err(), "{:?}", bad);
    }
}
