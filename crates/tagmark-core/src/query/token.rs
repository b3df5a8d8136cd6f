//! Token types for the tag query language

use std::fmt;

/// A single token in a boolean tag query.
///
/// A `Term` keeps any leading `!`; negation is interpreted by the evaluator,
/// not the tokenizer or compiler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryToken {
    LParen,
    RParen,
    /// Intersection, binds tighter than `Or`
    And,
    /// Union
    Or,
    /// A tag name, possibly `!`-negated
    Term(String),
}

impl QueryToken {
    /// Operator precedence; `None` for non-operators.
    pub fn precedence(&self) -> Option<u8> {
        match self {
            QueryToken::And => Some(2),
            QueryToken::Or => Some(1),
            _ => None,
        }
    }

    /// Check if this is a binary operator
    pub fn is_operator(&self) -> bool {
        self.precedence().is_some()
    }
}

impl fmt::Display for QueryToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryToken::LParen => write!(f, "'('"),
            QueryToken::RParen => write!(f, "')'"),
            QueryToken::And => write!(f, "'&'"),
            QueryToken::Or => write!(f, "'|'"),
            QueryToken::Term(term) => write!(f, "{term}"),
        }
    }
}
