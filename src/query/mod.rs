pub mod executor;
pub mod parser;

pub use executor::{Evaluation, QueryExecutor, evaluate};
pub use parser::{BoolOp, Query, QueryToken, TokenKind, parse_query};
