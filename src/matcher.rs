//! Recursive backtracking engine over (remaining word, remaining pattern).
//!
//! The pattern is re-split on every step; nothing is compiled or cached.

use crate::ast::{Head, Op};
use crate::error::MatchError;
use crate::parser;

/// Decide whether `word` is accepted by `pattern`.
///
/// `pattern` is expected to carry the `$` end anchor appended by the
/// caller. Without it the engine answers whether the pattern matches a
/// *prefix* of the word — a deliberate mode that the repetition search
/// below relies on for its trial matches.
pub fn match_word(word: &[char], pattern: &str) -> Result<bool, MatchError> {
    let split = parser::split(pattern)?;
    match (split.head, split.op) {
        // Exhausted pattern accepts whatever word is left (prefix mode).
        (Head::Empty, _) => Ok(true),
        // The anchor is the only place where full consumption is enforced.
        (Head::Anchor, _) => Ok(word.is_empty()),
        // Repetition binds before union: `(a|b)*` repeats the whole group.
        (_, Op::Star) => match_repeat(word, split.raw, split.tail, 0),
        (_, Op::Plus) => match_repeat(word, split.raw, split.tail, 1),
        (Head::Union(inner), Op::Once) => match_union(word, inner, split.tail),
        (head @ (Head::Literal(_) | Head::Group(_)), Op::Once) => {
            if unit_matches(word, head) {
                match_word(&word[1..], split.tail)
            } else {
                Ok(false)
            }
        }
    }
}

/// Single-symbol test: does the next word symbol satisfy `head`?
///
/// Bracket content is read as a plain character set here, `|` separators
/// excluded; `(ab|c)` admits exactly {a, b, c}, never the two-symbol
/// sequence `ab`. Multi-character alternatives only mean something to
/// [`match_union`].
pub fn unit_matches(word: &[char], head: Head<'_>) -> bool {
    let Some(&symbol) = word.first() else {
        return false;
    };
    match head {
        Head::Literal(c) => symbol == c,
        Head::Group(inner) | Head::Union(inner) => symbol != '|' && inner.contains(symbol),
        Head::Empty | Head::Anchor => false,
    }
}

/// Greedy-then-backoff repetition search for starred and plussed units.
///
/// Phase one grows the repetition count with anchor-free trial patterns:
/// the raw head repeated `k` times must prefix-match the word. Phase two
/// walks the count back down from that maximum, handing the remainder of
/// the word to `tail`. Trying the largest counts first keeps repetition
/// greedy while still letting the tail claim trailing symbols, as in
/// `ab*b` against `abbbb`.
fn match_repeat(
    word: &[char],
    raw_head: &str,
    tail: &str,
    min_reps: usize,
) -> Result<bool, MatchError> {
    // A unit that consumes nothing (an empty union alternative) would grow
    // forever; no useful count exceeds one past the word length.
    let limit = word.len() + 1;
    let mut r_max = 0;
    while r_max < limit && match_word(word, &raw_head.repeat(r_max + 1))? {
        r_max += 1;
    }

    let mut reps = r_max;
    loop {
        if reps < min_reps {
            return Ok(false);
        }
        let attempt = format!("{}{}", raw_head.repeat(reps), tail);
        if match_word(word, &attempt)? {
            return Ok(true);
        }
        if reps == min_reps {
            return Ok(false);
        }
        reps -= 1;
    }
}

/// Try each alternative of a union group, left to right, against the word
/// with `tail` appended. First success wins.
///
/// The content is split on every `|` (not nesting-aware), and an
/// alternative may be empty or several symbols long.
fn match_union(word: &[char], inner: &str, tail: &str) -> Result<bool, MatchError> {
    for alt in inner.split('|') {
        let attempt = format!("{alt}{tail}");
        if match_word(word, &attempt)? {
            return Ok(true);
        }
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(word: &str) -> Vec<char> {
        word.chars().collect()
    }

    fn accepts(word: &str, pattern: &str) -> bool {
        match_word(&chars(word), pattern).expect("pattern should be well-formed")
    }

    // --- Anchor ---

    #[test]
    fn anchor_alone_accepts_empty_word() {
        assert!(accepts("", "$"));
    }

    #[test]
    fn anchor_alone_rejects_leftover_word() {
        assert!(!accepts("a", "$"));
    }

    // --- Concatenation ---

    #[test]
    fn literal_concatenation() {
        assert!(accepts("ab", "ab$"));
        assert!(!accepts("ac", "ab$"));
    }

    #[test]
    fn word_shorter_than_pattern() {
        assert!(!accepts("a", "ab$"));
    }

    #[test]
    fn word_longer_than_pattern() {
        assert!(!accepts("abc", "ab$"));
    }

    // --- Union ---

    #[test]
    fn union_first_alternative() {
        assert!(accepts("a", "(a|b)$"));
    }

    #[test]
    fn union_second_alternative() {
        assert!(accepts("b", "(a|b)$"));
    }

    #[test]
    fn union_no_alternative_fits() {
        assert!(!accepts("c", "(a|b)$"));
    }

    #[test]
    fn union_multi_symbol_alternative() {
        assert!(accepts("ab", "(ab|c)$"));
        assert!(accepts("c", "(ab|c)$"));
        assert!(!accepts("a", "(ab|c)$"));
    }

    #[test]
    fn union_empty_alternative() {
        assert!(accepts("", "(a|)$"));
        assert!(accepts("a", "(a|)$"));
    }

    // --- Star ---

    #[test]
    fn star_accepts_zero_repetitions() {
        assert!(accepts("", "(a)*$"));
    }

    #[test]
    fn star_accepts_many_repetitions() {
        assert!(accepts("aaaa", "(a)*$"));
    }

    #[test]
    fn star_on_bare_literal() {
        assert!(accepts("bbb", "b*$"));
        assert!(accepts("", "b*$"));
    }

    #[test]
    fn star_backoff_leaves_tail_its_share() {
        // The trailing `b` belongs to the tail, not the starred unit.
        assert!(accepts("abbbbbbbbbb", "ab*b$"));
    }

    #[test]
    fn star_over_union_group() {
        assert!(accepts("abba", "(a|b)*$"));
        assert!(!accepts("abc", "(a|b)*$"));
    }

    // --- Plus ---

    #[test]
    fn plus_requires_at_least_one() {
        assert!(!accepts("", "(a)+$"));
    }

    #[test]
    fn plus_accepts_many_repetitions() {
        assert!(accepts("aaa", "(a)+$"));
    }

    #[test]
    fn plus_backoff_leaves_tail_its_share() {
        assert!(accepts("abb", "ab+b$"));
        assert!(!accepts("ab", "ab+b$"));
    }

    // --- Group as character set ---

    #[test]
    fn group_matches_a_single_symbol() {
        // `(ab)` admits one symbol out of {a, b}, not the sequence "ab".
        assert!(accepts("a", "(ab)$"));
        assert!(accepts("b", "(ab)$"));
        assert!(!accepts("ab", "(ab)$"));
    }

    #[test]
    fn starred_group_consumes_one_symbol_per_repetition() {
        assert!(accepts("ba", "(ab)*$"));
    }

    // --- Unit matching ---

    #[test]
    fn unit_rejects_empty_word() {
        assert!(!unit_matches(&[], Head::Literal('a')));
    }

    #[test]
    fn unit_group_membership_ignores_separators() {
        assert!(unit_matches(&chars("c"), Head::Union("ab|c")));
        assert!(!unit_matches(&chars("|"), Head::Union("ab|c")));
    }

    // --- Prefix mode ---

    #[test]
    fn missing_anchor_accepts_prefix() {
        assert!(accepts("abc", "ab"));
    }

    // --- Combined grammar example ---

    #[test]
    fn combined_scenario() {
        assert!(accepts("aabab", "(a|b)*a(ab)*$"));
    }

    // --- Degenerate repetition ---

    #[test]
    fn empty_alternative_star_terminates() {
        assert!(accepts("", "(|)*$"));
        assert!(!accepts("ab", "(|)*$"));
    }

    // --- Determinism ---

    #[test]
    fn repeated_calls_agree() {
        let word = chars("abab");
        let first = match_word(&word, "(a|b)*$").expect("pattern should be well-formed");
        for _ in 0..10 {
            assert_eq!(
                match_word(&word, "(a|b)*$").expect("pattern should be well-formed"),
                first
            );
        }
    }

    // --- Errors ---

    #[test]
    fn malformed_tail_surfaces() {
        assert!(matches!(
            match_word(&chars("a"), "a($"),
            Err(MatchError::MalformedPattern { .. })
        ));
    }

    #[test]
    fn unsupported_construct_surfaces() {
        assert!(matches!(
            match_word(&chars("a"), "a!$"),
            Err(MatchError::UnsupportedGrammar { construct: '!' })
        ));
    }
}
