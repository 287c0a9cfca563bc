pub mod apply;
pub mod ast;
pub mod parser;

pub use apply::{match_prompts, rank_prompts};
pub use ast::Query;
pub use parser::parse_query;
