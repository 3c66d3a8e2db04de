use super::*;
use crate::tokenize;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

/// Helper: tokenize and return kinds only.
fn kinds(source: &str) -> Vec<TokenKind<'_>> {
    tokenize(source).iter().map(|t| t.kind).collect()
}

#[test]
fn empty_input_is_just_eoi() {
    assert_eq!(kinds(""), vec![TokenKind::Eoi]);
}

#[test]
fn eoi_is_stable_and_repeatable() {
    let mut scanner = Scanner::new("a");
    assert_eq!(scanner.next_token().kind, TokenKind::Ident("a"));
    let first = scanner.next_token();
    let second = scanner.next_token();
    assert_eq!(first.kind, TokenKind::Eoi);
    assert_eq!(second, first);
}

#[test]
fn simple_selector_tokens() {
    assert_eq!(
        kinds("div.note"),
        vec![
            TokenKind::Ident("div"),
            TokenKind::Char('.'),
            TokenKind::Ident("note"),
            TokenKind::Eoi,
        ]
    );
}

#[test]
fn spans_cover_the_source() {
    let tokens = tokenize("div.note");
    assert_eq!(tokens[0].span, sel_ir::Span::new(0, 3));
    assert_eq!(tokens[1].span, sel_ir::Span::new(3, 4));
    assert_eq!(tokens[2].span, sel_ir::Span::new(4, 8));
    assert_eq!(tokens[3].span, sel_ir::Span::new(8, 8));
}

#[test]
fn whitespace_run_collapses_to_one_token() {
    assert_eq!(
        kinds("a  \t b"),
        vec![
            TokenKind::Ident("a"),
            TokenKind::WhiteSpace("  \t "),
            TokenKind::Ident("b"),
            TokenKind::Eoi,
        ]
    );
}

#[test]
fn combinators_absorb_leading_whitespace() {
    assert_eq!(
        kinds("a > b"),
        vec![
            TokenKind::Ident("a"),
            TokenKind::Greater,
            TokenKind::WhiteSpace(" "),
            TokenKind::Ident("b"),
            TokenKind::Eoi,
        ]
    );
    assert_eq!(
        kinds("a + b"),
        vec![
            TokenKind::Ident("a"),
            TokenKind::Plus,
            TokenKind::WhiteSpace(" "),
            TokenKind::Ident("b"),
            TokenKind::Eoi,
        ]
    );
    assert_eq!(
        kinds("a ~ b"),
        vec![
            TokenKind::Ident("a"),
            TokenKind::Tilde,
            TokenKind::WhiteSpace(" "),
            TokenKind::Ident("b"),
            TokenKind::Eoi,
        ]
    );
}

#[test]
fn combinator_token_span_includes_absorbed_whitespace() {
    let tokens = tokenize("a > b");
    assert_eq!(tokens[1].kind, TokenKind::Greater);
    assert_eq!(tokens[1].span, sel_ir::Span::new(1, 3));
}

#[test]
fn whitespace_before_includes_operator_is_not_absorbed() {
    // `~=` is an operator, not the general-sibling combinator.
    assert_eq!(
        kinds("a ~= b"),
        vec![
            TokenKind::Ident("a"),
            TokenKind::WhiteSpace(" "),
            TokenKind::Includes,
            TokenKind::WhiteSpace(" "),
            TokenKind::Ident("b"),
            TokenKind::Eoi,
        ]
    );
}

#[test]
fn attribute_operators() {
    assert_eq!(kinds("~="), vec![TokenKind::Includes, TokenKind::Eoi]);
    assert_eq!(kinds("|="), vec![TokenKind::DashMatch, TokenKind::Eoi]);
    assert_eq!(kinds("^="), vec![TokenKind::PrefixMatch, TokenKind::Eoi]);
    assert_eq!(kinds("$="), vec![TokenKind::SuffixMatch, TokenKind::Eoi]);
    assert_eq!(kinds("*="), vec![TokenKind::SubstringMatch, TokenKind::Eoi]);
}

#[test]
fn bare_operator_heads_degrade() {
    assert_eq!(kinds("*"), vec![TokenKind::Char('*'), TokenKind::Eoi]);
    assert_eq!(kinds("|"), vec![TokenKind::Char('|'), TokenKind::Eoi]);
    assert_eq!(kinds("^"), vec![TokenKind::Char('^'), TokenKind::Eoi]);
    assert_eq!(kinds("$"), vec![TokenKind::Char('$'), TokenKind::Eoi]);
    assert_eq!(kinds("~"), vec![TokenKind::Tilde, TokenKind::Eoi]);
}

#[test]
fn hash_scans_a_name() {
    assert_eq!(kinds("#main"), vec![TokenKind::Hash("main"), TokenKind::Eoi]);
}

#[test]
fn bare_hash_degrades_to_char() {
    assert_eq!(kinds("#"), vec![TokenKind::Char('#'), TokenKind::Eoi]);
}

#[test]
fn function_consumes_the_paren() {
    assert_eq!(
        kinds(":nth-child(2)"),
        vec![
            TokenKind::Char(':'),
            TokenKind::Function("nth-child"),
            TokenKind::Integer("2"),
            TokenKind::Char(')'),
            TokenKind::Eoi,
        ]
    );
}

#[test]
fn not_is_one_token_case_insensitively() {
    for source in [":not(", ":NOT(", ":NoT("] {
        assert_eq!(kinds(source), vec![TokenKind::Not, TokenKind::Eoi], "{source}");
    }
}

#[test]
fn colon_without_not_stays_a_char() {
    assert_eq!(
        kinds(":notx"),
        vec![TokenKind::Char(':'), TokenKind::Ident("notx"), TokenKind::Eoi]
    );
    assert_eq!(
        kinds(":not"),
        vec![TokenKind::Char(':'), TokenKind::Ident("not"), TokenKind::Eoi]
    );
}

#[test]
fn dash_leads_an_identifier_only_before_a_name_start() {
    assert_eq!(kinds("-n"), vec![TokenKind::Ident("-n"), TokenKind::Eoi]);
    assert_eq!(
        kinds("-3"),
        vec![TokenKind::Char('-'), TokenKind::Integer("3"), TokenKind::Eoi]
    );
}

#[test]
fn fused_nth_identifier() {
    assert_eq!(
        kinds("2n-1"),
        vec![TokenKind::Integer("2"), TokenKind::Ident("n-1"), TokenKind::Eoi]
    );
}

#[test]
fn strings_keep_raw_content() {
    assert_eq!(kinds("'v'"), vec![TokenKind::String("v"), TokenKind::Eoi]);
    assert_eq!(kinds("\"v\""), vec![TokenKind::String("v"), TokenKind::Eoi]);
    assert_eq!(kinds("''"), vec![TokenKind::String(""), TokenKind::Eoi]);
}

#[test]
fn string_backslash_escapes_the_quote() {
    assert_eq!(
        kinds(r"'a\'b'"),
        vec![TokenKind::String(r"a\'b"), TokenKind::Eoi]
    );
}

#[test]
fn unterminated_string_takes_the_rest() {
    assert_eq!(kinds("'abc"), vec![TokenKind::String("abc"), TokenKind::Eoi]);
}

#[test]
fn attribute_selector_tokens() {
    assert_eq!(
        kinds("[data-x^=\"v\"]"),
        vec![
            TokenKind::Char('['),
            TokenKind::Ident("data-x"),
            TokenKind::PrefixMatch,
            TokenKind::String("v"),
            TokenKind::Char(']'),
            TokenKind::Eoi,
        ]
    );
}

#[test]
fn unmatched_characters_degrade_to_char_tokens() {
    assert_eq!(
        kinds("a&b"),
        vec![
            TokenKind::Ident("a"),
            TokenKind::Char('&'),
            TokenKind::Ident("b"),
            TokenKind::Eoi,
        ]
    );
    assert_eq!(kinds("é"), vec![TokenKind::Char('é'), TokenKind::Eoi]);
}

/// Re-tokenizing a single token's own textual form yields the same kind.
#[test]
fn single_token_round_trip() {
    let cases: Vec<(&str, TokenKind<'_>)> = vec![
        ("div", TokenKind::Ident("div")),
        ("#nav", TokenKind::Hash("nav")),
        ("~=", TokenKind::Includes),
        ("|=", TokenKind::DashMatch),
        ("^=", TokenKind::PrefixMatch),
        ("$=", TokenKind::SuffixMatch),
        ("*=", TokenKind::SubstringMatch),
        ("'text'", TokenKind::String("text")),
        ("+", TokenKind::Plus),
        (">", TokenKind::Greater),
        (" \t", TokenKind::WhiteSpace(" \t")),
        ("nth-child(", TokenKind::Function("nth-child")),
        (":not(", TokenKind::Not),
        ("7", TokenKind::Integer("7")),
        ("~", TokenKind::Tilde),
        (".", TokenKind::Char('.')),
    ];
    for (source, expected) in cases {
        let tokens = tokenize(source);
        assert_eq!(tokens.len(), 2, "{source}");
        assert_eq!(tokens[0].kind, expected, "{source}");
        assert_eq!(tokens[1].kind, TokenKind::Eoi, "{source}");
    }
}

proptest! {
    /// Any generated identifier comes back as one Ident token.
    #[test]
    fn ident_round_trip(name in "[a-zA-Z_][a-zA-Z0-9_-]{0,15}") {
        let tokens = tokenize(&name);
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind, TokenKind::Ident(&name));
    }

    /// Any digit run comes back as one Integer token.
    #[test]
    fn integer_round_trip(digits in "[0-9]{1,8}") {
        let tokens = tokenize(&digits);
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind, TokenKind::Integer(&digits));
    }

    /// Quoting any delimiter-free content yields one String token with
    /// that exact content.
    #[test]
    fn string_round_trip(content in "[a-zA-Z0-9 .#>+~-]{0,20}") {
        let source = format!("\"{content}\"");
        let tokens = tokenize(&source);
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind, TokenKind::String(&content));
    }

    /// Tokens always tile the input: spans are adjacent, start to end.
    #[test]
    fn spans_tile_the_input(source in "[a-zA-Z0-9 .#:>+~*\\[\\]()'\"=|^$-]{0,40}") {
        let tokens = tokenize(&source);
        let mut offset = 0;
        for token in &tokens {
            prop_assert_eq!(token.span.start, offset, "gap before {:?}", token);
            offset = token.span.end;
        }
        prop_assert_eq!(offset as usize, source.len());
    }
}
