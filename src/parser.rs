use crate::ast::{Head, Op, Split};
use crate::error::MatchError;

/// End-anchor marker appended by callers to force full consumption of the
/// word.
pub const ANCHOR: char = '$';

/// Decompose `pattern` into its leading unit, an optional repetition
/// operator, and the remaining tail.
///
/// The head is classified here, exactly once; the engine dispatches on the
/// resulting variant without re-inspecting the text.
///
/// Bracket matching is not nesting-aware: a group extends to the *first*
/// `)`, so nested groups like `((a|b)|c)` split incorrectly and are
/// unsupported.
pub fn split(pattern: &str) -> Result<Split<'_>, MatchError> {
    let Some(first) = pattern.chars().next() else {
        return Ok(Split {
            head: Head::Empty,
            raw: "",
            op: Op::Once,
            tail: "",
        });
    };

    if first == ANCHOR {
        // The engine stops at the anchor; nothing after it is ever read.
        return Ok(Split {
            head: Head::Anchor,
            raw: &pattern[..1],
            op: Op::Once,
            tail: &pattern[1..],
        });
    }

    let (head, raw) = match first {
        '(' => {
            let close = pattern.find(')').ok_or(MatchError::MalformedPattern {
                reason: "'(' without a closing ')'",
            })?;
            let raw = &pattern[..close + 1];
            let inner = &pattern[1..close];
            let head = if inner.contains('|') {
                Head::Union(inner)
            } else {
                Head::Group(inner)
            };
            (head, raw)
        }
        ')' => {
            return Err(MatchError::MalformedPattern {
                reason: "')' without a preceding '('",
            });
        }
        '*' | '+' => {
            return Err(MatchError::MalformedPattern {
                reason: "operator with no preceding unit",
            });
        }
        c if c.is_ascii_alphanumeric() => (Head::Literal(c), &pattern[..1]),
        c => return Err(MatchError::UnsupportedGrammar { construct: c }),
    };

    let rest = &pattern[raw.len()..];
    let (op, tail) = match rest.chars().next() {
        Some('*') => (Op::Star, &rest[1..]),
        Some('+') => (Op::Plus, &rest[1..]),
        _ => (Op::Once, rest),
    };

    Ok(Split {
        head,
        raw,
        op,
        tail,
    })
}
