/// A parsed filter query
///
/// Built from the raw filter text on every keystroke by [`super::parse_query`]:
/// - `text_query` is fuzzy-matched against the prompt text
/// - `project_query` is fuzzy-matched against the prompt's project path
///
/// Either part may be empty, in which case that stage is skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub text_query: String,
    pub project_query: String,
}

impl Query {
    pub fn new(text_query: impl Into<String>, project_query: impl Into<String>) -> Self {
        Self { text_query: text_query.into(), project_query: project_query.into() }
    }

    pub fn has_text_filter(&self) -> bool {
        !self.text_query.is_empty()
    }

    pub fn has_project_filter(&self) -> bool {
        !self.project_query.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        !self.has_text_filter() && !self.has_project_filter()
    }
}
