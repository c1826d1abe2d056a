//! The eight concrete scenarios and the invariants/laws pinned down for
//! this tokenizer, kept together in one place rather than scattered
//! across unit test modules so they read as a single checklist.

use crate::flags::RegexFlags;
use crate::lexer::Lexer;
use crate::token::Token;

fn lex_all(source: &[u8]) -> (Vec<Token>, RegexFlags, Option<&'static str>) {
    let mut flags = RegexFlags::empty();
    let mut lexer = Lexer::new(source, &mut flags);
    let mut tokens = Vec::new();
    while let Some(tok) = lexer.next_token(&mut flags) {
        tokens.push(tok);
    }
    let err = lexer.take_error().map(|e| e.message);
    (tokens, flags, err)
}

#[test]
fn scenario_1_both_anchors() {
    let (tokens, flags, err) = lex_all(b"^abc$");
    assert_eq!(tokens, vec![Token::Char(b'a'), Token::Char(b'b'), Token::Char(b'c')]);
    assert!(flags.contains(RegexFlags::START_ANCHORED));
    assert!(flags.contains(RegexFlags::END_ANCHORED));
    assert_eq!(err, None);
}

#[test]
fn scenario_2_bounded_repeat() {
    let (tokens, _flags, err) = lex_all(b"a{2,5}");
    assert_eq!(tokens, vec![Token::Char(b'a'), Token::Range(2, 5)]);
    assert_eq!(err, None);
}

#[test]
fn scenario_3_bad_repeat_interval() {
    let (_tokens, _flags, err) = lex_all(b"a{6,3}");
    assert_eq!(err, Some("bad repeat interval"));
}

#[test]
fn scenario_4_negated_class_with_escaped_bracket() {
    let (tokens, _flags, err) = lex_all(b"[^]abc]");
    assert_eq!(err, None);
    assert_eq!(tokens.len(), 1);
    match &tokens[0] {
        Token::Class(bitmap) => {
            for b in [b']', b'a', b'b', b'c'] {
                assert!(!bitmap.contains(b));
            }
            assert_eq!(bitmap.count(), 256 - 4);
        }
        other => panic!("expected a class token, got {:?}", other),
    }
}

#[test]
fn scenario_5_alnum_underscore_class() {
    let (tokens, _flags, err) = lex_all(b"[a-z0-9_]");
    assert_eq!(err, None);
    match &tokens[0] {
        Token::Class(bitmap) => assert_eq!(bitmap.count(), 37),
        other => panic!("expected a class token, got {:?}", other),
    }
}

#[test]
fn scenario_6_hex_escapes() {
    let (tokens, _flags, err) = lex_all(b"\\x41\\x42");
    assert_eq!(tokens, vec![Token::Char(0x41), Token::Char(0x42)]);
    assert_eq!(err, None);
}

#[test]
fn scenario_7_unterminated_class() {
    let (_tokens, _flags, err) = lex_all(b"[abc");
    assert_eq!(err, Some("missing terminating ] for character class"));
}

#[test]
fn scenario_8_escaped_dollar_does_not_anchor() {
    let (tokens, flags, err) = lex_all(b"a\\$");
    assert_eq!(tokens, vec![Token::Char(b'a'), Token::Char(b'$')]);
    assert!(!flags.contains(RegexFlags::END_ANCHORED));
    assert_eq!(err, None);
}

// --- Invariants and laws from the testable-properties list ---

#[test]
fn law_start_anchored_iff_first_byte_is_caret() {
    assert!(lex_all(b"^a").1.contains(RegexFlags::START_ANCHORED));
    assert!(!lex_all(b"a^").1.contains(RegexFlags::START_ANCHORED));
    assert!(!lex_all(b"a").1.contains(RegexFlags::START_ANCHORED));
}

#[test]
fn law_end_anchored_iff_trailing_unescaped_dollar() {
    assert!(lex_all(b"a$").1.contains(RegexFlags::END_ANCHORED));
    assert!(!lex_all(b"a\\$").1.contains(RegexFlags::END_ANCHORED));
    assert!(!lex_all(b"a$b").1.contains(RegexFlags::END_ANCHORED));
}

#[test]
fn law_escaped_backslash_then_dollar_still_anchors() {
    // Two backslashes decode to one literal backslash; the dollar that
    // follows is unescaped and is scanned and recorded normally.
    assert!(lex_all(b"\\\\$").1.contains(RegexFlags::END_ANCHORED));
}

#[test]
fn law_repeat_bound_forms_cover_all_four_shapes() {
    assert_eq!(lex_all(b"x{3,7}").0[1], Token::Range(3, 7));
    assert_eq!(lex_all(b"x{3,}").0[1], Token::Range(3, 32767));
    assert_eq!(lex_all(b"x{,7}").0[1], Token::Range(0, 7));
    assert_eq!(lex_all(b"x{3}").0[1], Token::Range(3, 3));
}

#[test]
fn law_negated_class_equals_complement_of_positive_construction() {
    let (pos_tokens, _, _) = lex_all(b"[abc]");
    let (neg_tokens, _, _) = lex_all(b"[^abc]");
    let pos = match &pos_tokens[0] {
        Token::Class(bm) => *bm,
        _ => unreachable!(),
    };
    let mut complemented = pos;
    complemented.complement_in_place();
    let neg = match &neg_tokens[0] {
        Token::Class(bm) => *bm,
        _ => unreachable!(),
    };
    assert_eq!(complemented, neg);
}

#[test]
fn law_idempotent_across_fresh_invocations() {
    let first = lex_all(b"^a{2,5}[xyz]\\w$");
    let second = lex_all(b"^a{2,5}[xyz]\\w$");
    assert_eq!(first.0, second.0);
    assert_eq!(first.1, second.1);
    assert_eq!(first.2, second.2);
}

#[test]
fn law_class_bitmap_union_is_order_independent() {
    let (a, _, _) = lex_all(b"[a-c0-2]");
    let (b, _, _) = lex_all(b"[0-2a-c]");
    assert_eq!(a[0], b[0]);
}

// --- Property-based tests over arbitrary inputs ---

#[test]
fn property_bounded_repeat_within_range() {
    use proptest::prelude::*;

    proptest!(|(lo in 0u16..=500, extra in 0u16..=500)| {
        let hi = lo + extra;
        let source = format!("a{{{},{}}}", lo, hi);
        let (tokens, _flags, err) = lex_all(source.as_bytes());
        prop_assert_eq!(err, None);
        prop_assert_eq!(tokens, vec![Token::Char(b'a'), Token::Range(lo, hi)]);
    });
}

#[test]
fn property_upper_below_lower_is_always_an_error() {
    use proptest::prelude::*;

    proptest!(|(hi in 0u16..=500, extra in 1u16..=500)| {
        let lo = hi + extra;
        let source = format!("a{{{},{}}}", lo, hi);
        let (_tokens, _flags, err) = lex_all(source.as_bytes());
        prop_assert_eq!(err, Some("bad repeat interval"));
    });
}

#[test]
fn property_single_letter_class_contains_exactly_that_byte() {
    use proptest::prelude::*;

    proptest!(|(c in b'a'..=b'z')| {
        let source = [b'[', c, b']'];
        let (tokens, _flags, err) = lex_all(&source);
        prop_assert_eq!(err, None);
        match &tokens[0] {
            Token::Class(bitmap) => {
                prop_assert!(bitmap.contains(c));
                prop_assert_eq!(bitmap.count(), 1);
            }
            other => prop_assert!(false, "expected a class token, got {:?}", other),
        }
    });
}

#[test]
fn property_negated_single_letter_class_is_255_wide() {
    use proptest::prelude::*;

    proptest!(|(c in b'a'..=b'z')| {
        let source = [b'[', b'^', c, b']'];
        let (tokens, _flags, err) = lex_all(&source);
        prop_assert_eq!(err, None);
        match &tokens[0] {
            Token::Class(bitmap) => {
                prop_assert!(!bitmap.contains(c));
                prop_assert_eq!(bitmap.count(), 255);
            }
            other => prop_assert!(false, "expected a class token, got {:?}", other),
        }
    });
}
