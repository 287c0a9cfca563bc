//! Query parser for the picker's filter input.
//!
//! # Syntax
//!
//! ```text
//! query := words* ("%p" whitespace+ project_token)? words*
//! ```
//!
//! The first `%p <token>` directive selects a project filter. Everything else is the
//! text query.
//!
//! # Examples
//!
//! ```rust
//! # use prompt_finder::filters::parser::parse_query;
//! let query = parse_query("fix bug %p website");
//! assert_eq!(query.text_query, "fix bug");
//! assert_eq!(query.project_query, "website");
//!
//! let query = parse_query("%p regdelete");
//! assert_eq!(query.text_query, "");
//! assert_eq!(query.project_query, "regdelete");
//! ```
//!
//! # Rules
//!
//! - `%p` must be followed by at least one whitespace character and then a token; the
//!   token runs to the next whitespace. A bare `%p` or `%pfoo` is plain text.
//! - Only the first directive counts. Later `%p` occurrences stay in the text query.
//! - When a directive is found, the remaining words are rejoined with single spaces.
//!   Without one, the input is used verbatim as the text query.
//!
//! Parsing never fails: every input produces exactly one [`Query`].

use super::ast::Query;

const PROJECT_MARKER: &str = "%p";

/// Byte offsets of a `%p <token>` directive inside the input
#[derive(Debug, PartialEq, Eq)]
struct ProjectDirective {
    start: usize,
    token_start: usize,
    end: usize,
}

/// Locate the first `%p` followed by whitespace and a non-whitespace token
fn find_project_directive(input: &str) -> Option<ProjectDirective> {
    for (start, _) in input.match_indices(PROJECT_MARKER) {
        let after = &input[start + PROJECT_MARKER.len()..];
        let rest = after.trim_start();
        let gap = after.len() - rest.len();
        if gap == 0 {
            continue;
        }

        let token_len = rest.find(char::is_whitespace).unwrap_or(rest.len());
        if token_len == 0 {
            continue;
        }

        let token_start = start + PROJECT_MARKER.len() + gap;
        return Some(ProjectDirective { start, token_start, end: token_start + token_len });
    }

    None
}

/// Split raw filter text into a text query and a project query
pub fn parse_query(input: &str) -> Query {
    let Some(directive) = find_project_directive(input) else {
        return Query::new(input, "");
    };

    let project_query = &input[directive.token_start..directive.end];
    let text_query = input[..directive.start]
        .split_whitespace()
        .chain(input[directive.end..].split_whitespace())
        .collect::<Vec<_>>()
        .join(" ");

    Query::new(text_query, project_query)
}
