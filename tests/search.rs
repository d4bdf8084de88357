use anyhow::Result;

use regex_lex::{
    regex::{search, search_pattern, SearchConfig},
    Hit, NFA,
};

fn spans(hits: Vec<Hit>) -> Vec<(usize, usize)> {
    hits.into_iter().map(|h| (h.start, h.length)).collect()
}

#[test]
fn word_search() -> Result<()> {
    let hits =
        search_pattern(r"\w+", "words words words", SearchConfig::new())?;
    assert_eq!(vec![(0, 5), (6, 5), (12, 5)], spans(hits));
    Ok(())
}

#[test]
fn greedy_search_returns_only_the_first_hit() -> Result<()> {
    let config = SearchConfig::new().greedy(true);
    let hits = search_pattern(r"\w+", "words words words", config)?;
    assert_eq!(vec![(0, 5)], spans(hits));
    Ok(())
}

#[test]
fn overlapping_search() -> Result<()> {
    let config = SearchConfig::new().overlap(true);
    let hits = search_pattern(r"\w+", "blah", config)?;
    assert_eq!(vec![(0, 4), (1, 3), (2, 2), (3, 1)], spans(hits));
    Ok(())
}

#[test]
fn matches_anywhere_in_the_text() -> Result<()> {
    let hits = search_pattern("ab", "xxabxxxab", SearchConfig::new())?;
    assert_eq!(vec![(2, 2), (7, 2)], spans(hits));
    Ok(())
}

#[test]
fn accepted_prefixes_grow_to_the_longest() -> Result<()> {
    // At position 0 the machine accepts "a", "aa" and "aaa"; only the
    // longest is reported, and the next probe starts past it.
    let hits = search_pattern("a+", "aaa aa", SearchConfig::new())?;
    assert_eq!(vec![(0, 3), (4, 2)], spans(hits));
    Ok(())
}

#[test]
fn search_accepts_hand_loaded_machines() -> Result<()> {
    let nfa = NFA::read("accept:1\n0-1:+a-a\n1-1:+b-b\n")?;
    let hits = search(&nfa, "abbb ab a", SearchConfig::new());
    assert_eq!(vec![(0, 4), (5, 2), (8, 1)], spans(hits));
    Ok(())
}

#[test]
fn no_hits_in_an_unmatching_text() -> Result<()> {
    let hits = search_pattern("z", "aaaa", SearchConfig::new())?;
    assert!(hits.is_empty());
    let hits = search_pattern("z", "", SearchConfig::new())?;
    assert!(hits.is_empty());
    Ok(())
}

#[test]
fn membership_via_prefix_searching() -> Result<()> {
    // A hit means some prefix starting there is accepted, which is how
    // searching relates to whole-string acceptance.
    let nfa = regex_lex::regex::parse("ab*")?;
    let hits = search(&nfa, "abbbc", SearchConfig::new());
    assert_eq!(vec![(0, 4)], spans(hits));
    assert!(nfa.accepts("abbb"));
    assert!(!nfa.accepts("abbbc"));
    Ok(())
}
