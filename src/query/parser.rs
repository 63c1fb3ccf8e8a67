use crate::utils::split_words;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Boolean operator combining the running result with a term's units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum BoolOp {
    /// Intersection
    #[default]
    And,
    /// Union
    Or,
    /// Set difference against the accumulated result (binary, not unary)
    Not,
}

impl FromStr for BoolOp {
    type Err = ();

    /// Case-sensitive: only `AND`, `OR` and `NOT` are operators
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AND" => Ok(BoolOp::And),
            "OR" => Ok(BoolOp::Or),
            "NOT" => Ok(BoolOp::Not),
            _ => Err(()),
        }
    }
}

impl fmt::Display for BoolOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BoolOp::And => "AND",
            BoolOp::Or => "OR",
            BoolOp::Not => "NOT",
        };
        f.write_str(s)
    }
}

/// What a query token stands for
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TokenKind {
    Operator(BoolOp),
    /// Search term exactly as written
    Term(String),
}

/// A whitespace-delimited query token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryToken {
    /// Position in the token sequence; operators count too
    pub position: usize,
    pub kind: TokenKind,
}

/// Parsed query: the tokens in textual order, evaluated strictly left to right
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Query {
    pub tokens: Vec<QueryToken>,
}

impl Query {
    /// True when the query has no search terms (operators alone do nothing)
    pub fn is_empty(&self) -> bool {
        self.terms().next().is_none()
    }

    /// Search terms with their positions
    pub fn terms(&self) -> impl Iterator<Item = (usize, &str)> {
        self.tokens.iter().filter_map(|token| match &token.kind {
            TokenKind::Term(term) => Some((token.position, term.as_str())),
            TokenKind::Operator(_) => None,
        })
    }
}

/// Parse a query string into a Query structure
pub fn parse_query(input: &str) -> Query {
    QueryParser::new(input).parse()
}

/// Query parser
struct QueryParser<'a> {
    input: &'a str,
}

impl<'a> QueryParser<'a> {
    fn new(input: &'a str) -> Self {
        Self { input }
    }

    fn parse(&self) -> Query {
        let tokens = split_words(self.input)
            .enumerate()
            .map(|(position, word)| QueryToken {
                position,
                kind: Self::classify(word),
            })
            .collect();
        Query { tokens }
    }

    /// Keywords always win; there is no escaping a term spelled `AND`
    fn classify(word: &str) -> TokenKind {
        match word.parse::<BoolOp>() {
            Ok(op) => TokenKind::Operator(op),
            Err(()) => TokenKind::Term(word.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(q: &Query) -> Vec<TokenKind> {
        q.tokens.iter().map(|t| t.kind.clone()).collect()
    }

    #[test]
    fn test_simple_term() {
        let q = parse_query("machine");
        assert_eq!(kinds(&q), vec![TokenKind::Term("machine".to_string())]);
        assert_eq!(q.tokens[0].position, 0);
    }

    #[test]
    fn test_operators_and_terms() {
        let q = parse_query("cat NOT dog");
        assert_eq!(
            kinds(&q),
            vec![
                TokenKind::Term("cat".to_string()),
                TokenKind::Operator(BoolOp::Not),
                TokenKind::Term("dog".to_string()),
            ]
        );
    }

    #[test]
    fn test_positions_count_operators() {
        let q = parse_query("OR  cat\tAND dog");
        let positions: Vec<_> = q.terms().map(|(pos, _)| pos).collect();
        assert_eq!(positions, vec![1, 3]);
    }

    #[test]
    fn test_operators_case_sensitive() {
        let q = parse_query("cat and dog Or bird");
        assert!(kinds(&q).iter().all(|k| matches!(k, TokenKind::Term(_))));
        assert_eq!(q.tokens.len(), 5);
    }

    #[test]
    fn test_terms_keep_original_case() {
        let q = parse_query("Machine,");
        assert_eq!(q.terms().next(), Some((0, "Machine,")));
    }

    #[test]
    fn test_control_separators_split_tokens() {
        let q = parse_query("cat\u{1f}OR\u{1e}dog");
        assert_eq!(
            kinds(&q),
            vec![
                TokenKind::Term("cat".to_string()),
                TokenKind::Operator(BoolOp::Or),
                TokenKind::Term("dog".to_string()),
            ]
        );
        assert_eq!(q.tokens[2].position, 2);
    }

    #[test]
    fn test_empty_query() {
        assert!(parse_query("").is_empty());
        assert!(parse_query("   ").tokens.is_empty());
    }

    #[test]
    fn test_operator_only_query_is_empty() {
        let q = parse_query("AND OR NOT");
        assert_eq!(q.tokens.len(), 3);
        assert!(q.is_empty());
    }

    #[test]
    fn test_default_operator() {
        assert_eq!(BoolOp::default(), BoolOp::And);
    }

    #[test]
    fn test_op_display_roundtrip() {
        for op in [BoolOp::And, BoolOp::Or, BoolOp::Not] {
            assert_eq!(op.to_string().parse::<BoolOp>(), Ok(op));
        }
    }
}
