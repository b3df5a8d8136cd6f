//! Whitespace tokenizer for tag queries

use super::token::QueryToken;

/// Split a raw tag query into tokens.
///
/// Fragments are separated by whitespace. A fragment that opens with `(`
/// emits a standalone `LParen` first; one that closes with `)` emits a
/// trailing `RParen`; literal parens are stripped from the tag text in
/// between. Empty remainders are discarded.
///
/// Never fails; malformed nesting is left for the compiler to reject.
pub fn tokenize(input: &str) -> Vec<QueryToken> {
    let mut tokens = Vec::new();

    for fragment in input.split_whitespace() {
        let opens = fragment.starts_with('(');
        let closes = fragment.ends_with(')');
        let term: String = fragment
            .chars()
            .filter(|c| *c != '(' && *c != ')')
            .collect();

        if opens {
            tokens.push(QueryToken::LParen);
        }
        match term.as_str() {
            "" => {}
            "&" => tokens.push(QueryToken::And),
            "|" => tokens.push(QueryToken::Or),
            _ => tokens.push(QueryToken::Term(term)),
        }
        if closes {
            tokens.push(QueryToken::RParen);
        }
    }

    tokens
}
