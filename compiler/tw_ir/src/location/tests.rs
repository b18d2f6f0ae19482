use super::*;
use proptest::prelude::*;

#[test]
fn advance_single_line() {
    let loc = SourceLocation::ZERO.advance("class");
    assert_eq!(loc, SourceLocation::new(5, 0, 5));
}

#[test]
fn advance_over_newline_resets_column() {
    let loc = SourceLocation::new(3, 0, 3).advance("a\nbc");
    assert_eq!(loc, SourceLocation::new(7, 1, 2));
}

#[test]
fn crlf_is_one_line_break() {
    let loc = SourceLocation::ZERO.advance("\r\nx");
    assert_eq!(loc, SourceLocation::new(3, 1, 1));
}

#[test]
fn lone_carriage_return_breaks_line() {
    let loc = SourceLocation::ZERO.advance("\rx");
    assert_eq!(loc, SourceLocation::new(2, 1, 1));
}

#[test]
fn advance_counts_chars_not_bytes() {
    let loc = SourceLocation::ZERO.advance("é=");
    assert_eq!(loc.absolute_index, 2);
    assert_eq!(char_len("é="), 2);
}

#[test]
fn display_is_one_based() {
    assert_eq!(SourceLocation::new(12, 2, 4).to_string(), "3:5");
    assert_eq!(format!("{:?}", SourceLocation::new(12, 2, 4)), "(12:2,4)");
}

proptest! {
    #[test]
    fn advance_is_additive(a in "[a-z \n]{0,20}", b in "[a-z \n]{0,20}") {
        let joined = format!("{a}{b}");
        let stepwise = SourceLocation::ZERO.advance(&a).advance(&b);
        prop_assert_eq!(stepwise, SourceLocation::ZERO.advance(&joined));
    }

    #[test]
    fn absolute_index_tracks_char_count(text in "\\PC{0,40}") {
        let loc = SourceLocation::ZERO.advance(&text);
        prop_assert_eq!(loc.absolute_index, char_len(&text));
    }
}
