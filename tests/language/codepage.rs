//! Code page properties.
//!
//! The page's content and ordering are a compatibility surface for every
//! previously-encoded literal, so these tests pin them exactly.

use sigil_language::{CODE_PAGE, CodePage};

#[test]
fn exactly_256_symbols() {
    assert_eq!(CODE_PAGE.chars().count(), 256);
}

#[test]
fn round_trip_all_bytes() {
    let page = CodePage::new().unwrap();
    for b in 0..=255u8 {
        assert_eq!(page.byte_of(page.symbol_of(b)), Some(b));
    }
}

#[test]
fn symbols_are_pairwise_distinct() {
    let mut seen = std::collections::HashSet::new();
    for c in CODE_PAGE.chars() {
        assert!(seen.insert(c), "duplicate symbol {c:?}");
    }
}

#[test]
fn ascii_anchors_match_their_byte_values() {
    // The printable-ASCII region keeps its usual byte values (the page
    // reorders only the `^_ cluster).
    let page = CodePage::new().unwrap();
    assert_eq!(page.byte_of('!'), Some(33));
    assert_eq!(page.byte_of('0'), Some(48));
    assert_eq!(page.byte_of('9'), Some(57));
    assert_eq!(page.byte_of('A'), Some(65));
    assert_eq!(page.byte_of('a'), Some(97));
    assert_eq!(page.byte_of('~'), Some(126));
}

#[test]
fn off_page_symbols_have_no_byte() {
    let page = CodePage::new().unwrap();
    assert_eq!(page.byte_of('☃'), None);
    assert!(!page.contains('é'));
}
