//! Infix to postfix compilation (shunting-yard)

use super::token::QueryToken;
use super::QueryError;

/// Reorder an infix token stream into postfix for stack evaluation.
///
/// `&` (precedence 2) binds tighter than `|` (precedence 1); both are
/// left-associative, so an operator of equal precedence on the stack is
/// popped before pushing the incoming one.
///
/// Returns `QueryError::MismatchedParentheses` for an unmatched `)` and for
/// a `(` still on the operator stack at end of input.
pub fn to_postfix(tokens: Vec<QueryToken>) -> Result<Vec<QueryToken>, QueryError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut operators: Vec<QueryToken> = Vec::new();

    for token in tokens {
        match token {
            QueryToken::Term(_) => output.push(token),
            QueryToken::And | QueryToken::Or => {
                while let Some(top) = operators.last() {
                    match top.precedence() {
                        // left-associativity: equal precedence pops too
                        Some(top_prec) if top_prec >= token.precedence().unwrap_or(0) => {
                            output.push(operators.pop().unwrap());
                        }
                        _ => break, // lower precedence, or top is '('
                    }
                }
                operators.push(token);
            }
            QueryToken::LParen => operators.push(token),
            QueryToken::RParen => loop {
                match operators.pop() {
                    Some(QueryToken::LParen) => break,
                    Some(op) => output.push(op),
                    None => return Err(QueryError::MismatchedParentheses),
                }
            },
        }
    }

    while let Some(op) = operators.pop() {
        if op == QueryToken::LParen {
            return Err(QueryError::MismatchedParentheses);
        }
        output.push(op);
    }

    Ok(output)
}
