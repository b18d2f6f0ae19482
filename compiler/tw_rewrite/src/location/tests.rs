use proptest::prelude::*;
use tw_ir::TokenKind;

use super::*;

fn token(kind: TokenKind, content: &str, start: SourceLocation) -> Token {
    Token::new(kind, content, start)
}

#[test]
fn skip_accumulates_content() {
    let mut tracker = ValueStartTracker::new(SourceLocation::new(6, 0, 6));
    tracker.skip(&token(TokenKind::Whitespace, " ", SourceLocation::ZERO));
    tracker.skip(&token(TokenKind::Text, "disabled", SourceLocation::ZERO));
    assert_eq!(tracker.location(), SourceLocation::new(15, 0, 15));
}

#[test]
fn skip_over_newline_moves_to_next_line() {
    let mut tracker = ValueStartTracker::new(SourceLocation::new(6, 0, 6));
    tracker.skip(&token(TokenKind::NewLine, "\n", SourceLocation::ZERO));
    tracker.skip(&token(TokenKind::Whitespace, "    ", SourceLocation::ZERO));
    assert_eq!(tracker.location(), SourceLocation::new(11, 1, 4));
}

#[test]
fn resume_after_uses_token_location() {
    let mut tracker = ValueStartTracker::new(SourceLocation::ZERO);
    tracker.skip(&token(TokenKind::Text, "ignored", SourceLocation::ZERO));
    tracker.resume_after(&token(TokenKind::DoubleQuote, "\"", SourceLocation::new(40, 3, 12)));
    assert_eq!(tracker.location(), SourceLocation::new(41, 3, 13));
}

proptest! {
    #[test]
    fn skipping_tokens_matches_advancing_over_their_text(
        parts in prop::collection::vec("[a-z]{1,5}|[ ]{1,3}|\n", 0..10)
    ) {
        let start = SourceLocation::new(3, 1, 3);
        let mut tracker = ValueStartTracker::new(start);
        for part in &parts {
            tracker.skip(&token(TokenKind::Text, part, SourceLocation::ZERO));
        }
        prop_assert_eq!(tracker.location(), start.advance(&parts.concat()));
    }
}
