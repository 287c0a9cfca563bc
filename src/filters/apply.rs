use nucleo::pattern::{Atom, AtomKind, CaseMatching, Normalization};
use nucleo::{Config, Matcher, Utf32Str};

use super::ast::Query;
use super::parser::parse_query;
use crate::models::Prompt;
use crate::utils::paths::format_project_path_internal;

/// Single fuzzy needle plus the matcher state needed to score haystacks against it
struct FuzzyScorer {
    atom: Atom,
    matcher: Matcher,
    buf: Vec<char>,
}

impl FuzzyScorer {
    fn new(needle: &str, config: Config) -> Self {
        // Whitespace in the needle is matched literally rather than splitting into atoms
        let atom =
            Atom::new(needle, CaseMatching::Ignore, Normalization::Smart, AtomKind::Fuzzy, false);
        Self { atom, matcher: Matcher::new(config), buf: Vec::new() }
    }

    fn score(&mut self, haystack: &str) -> Option<u16> {
        self.atom.score(Utf32Str::new(haystack, &mut self.buf), &mut self.matcher)
    }
}

fn text_config() -> Config {
    let mut config = Config::DEFAULT;
    config.prefer_prefix = true;
    config
}

/// Filter and rank prompts for a parsed query, returning indices into `prompts`
///
/// 1. A non-empty `project_query` keeps only prompts whose displayed project path
///    fuzzy-matches it, in their input order.
/// 2. A non-empty `text_query` keeps only survivors whose text fuzzy-matches it, ordered
///    by descending score; equal scores keep their input order.
///
/// With both parts empty every index is returned in order.
pub fn rank_prompts(prompts: &[Prompt], query: &Query) -> Vec<usize> {
    let candidates: Vec<usize> = if query.has_project_filter() {
        filter_by_project(prompts, &query.project_query)
    } else {
        (0..prompts.len()).collect()
    };

    if !query.has_text_filter() {
        return candidates;
    }

    let mut scorer = FuzzyScorer::new(&query.text_query, text_config());
    let mut scored: Vec<(usize, u16)> = candidates
        .into_iter()
        .filter_map(|idx| scorer.score(&prompts[idx].display).map(|score| (idx, score)))
        .collect();

    scored.sort_by(|(a_idx, a_score), (b_idx, b_score)| {
        b_score.cmp(a_score).then_with(|| a_idx.cmp(b_idx))
    });
    scored.into_iter().map(|(idx, _)| idx).collect()
}

/// Parse raw filter text and rank prompts against it
///
/// Empty input short-circuits to the identity ordering.
///
/// # Examples
///
/// ```rust
/// use prompt_finder::{Prompt, match_prompts};
///
/// let prompts = vec![
///     Prompt::new("fix login bug", 3, "/srv/website"),
///     Prompt::new("add dark mode", 2, "/srv/website"),
///     Prompt::new("bump version", 1, "/srv/api"),
/// ];
///
/// assert_eq!(match_prompts(&prompts, ""), vec![0, 1, 2]);
/// assert_eq!(match_prompts(&prompts, "login"), vec![0]);
/// assert_eq!(match_prompts(&prompts, "%p api"), vec![2]);
/// ```
pub fn match_prompts(prompts: &[Prompt], raw_query: &str) -> Vec<usize> {
    if raw_query.is_empty() {
        return (0..prompts.len()).collect();
    }
    rank_prompts(prompts, &parse_query(raw_query))
}

/// Indices of prompts whose displayed project path matches, in input order
///
/// Matches against the same form the list shows (`~`-abbreviated, or "no project").
fn filter_by_project(prompts: &[Prompt], project_query: &str) -> Vec<usize> {
    let home = dirs::home_dir();
    let mut scorer = FuzzyScorer::new(project_query, Config::DEFAULT.match_paths());

    prompts
        .iter()
        .enumerate()
        .filter(|(_, prompt)| {
            let path = format_project_path_internal(&prompt.project, home.as_deref());
            scorer.score(&path).is_some()
        })
        .map(|(idx, _)| idx)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_prompts() -> Vec<Prompt> {
        vec![
            Prompt::new("fix bug in auth", 4, "/home/u/website"),
            Prompt::new("add feature", 3, "/home/u/website"),
            Prompt::new("refactor db", 2, "/home/u/api"),
            Prompt::new("write tests", 1, ""),
        ]
    }

    #[test]
    fn test_empty_query_returns_all_in_order() {
        let prompts = sample_prompts();
        assert_eq!(match_prompts(&prompts, ""), vec![0, 1, 2, 3]);
        assert_eq!(rank_prompts(&prompts, &Query::default()), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_text_only() {
        let prompts = sample_prompts();
        assert_eq!(match_prompts(&prompts, "bug"), vec![0]);
        assert_eq!(match_prompts(&prompts, "fix"), vec![0]);
    }

    #[test]
    fn test_project_only_keeps_input_order() {
        let prompts = sample_prompts();
        assert_eq!(match_prompts(&prompts, "%p website"), vec![0, 1]);
        assert_eq!(match_prompts(&prompts, "%p api"), vec![2]);
    }

    #[test]
    fn test_text_and_project() {
        let prompts = sample_prompts();
        assert_eq!(match_prompts(&prompts, "fix %p website"), vec![0]);
        assert!(match_prompts(&prompts, "refactor %p website").is_empty());
    }

    #[test]
    fn test_empty_project_matches_no_project_label() {
        let prompts = sample_prompts();
        assert_eq!(match_prompts(&prompts, "%p noproject"), vec![3]);
    }

    #[test]
    fn test_case_insensitive() {
        let prompts = sample_prompts();
        assert_eq!(match_prompts(&prompts, "FIX BUG"), vec![0]);
        assert_eq!(match_prompts(&prompts, "%p WEBSITE"), vec![0, 1]);
    }

    #[test]
    fn test_subsequence_match() {
        let prompts = sample_prompts();
        assert_eq!(match_prompts(&prompts, "rfdb"), vec![2]);
    }

    #[test]
    fn test_no_match() {
        let prompts = sample_prompts();
        assert!(match_prompts(&prompts, "zzzz").is_empty());
        assert!(match_prompts(&prompts, "%p nowhere-at-all").is_empty());
    }

    #[test]
    fn test_contiguous_match_ranks_first() {
        let prompts = vec![
            Prompt::new("rapid edit done", 2, ""),
            Prompt::new("red apple", 1, ""),
        ];
        assert_eq!(match_prompts(&prompts, "red"), vec![1, 0]);
    }

    #[test]
    fn test_equal_scores_keep_input_order() {
        let prompts = vec![
            Prompt::new("deploy", 3, ""),
            Prompt::new("other", 2, ""),
            Prompt::new("deploy", 1, ""),
        ];
        assert_eq!(match_prompts(&prompts, "deploy"), vec![0, 2]);
    }

    #[test]
    fn test_results_are_valid_unique_indices() {
        let prompts = sample_prompts();
        for raw in ["", "e", "t", "%p u", "a %p home", "%p"] {
            let result = match_prompts(&prompts, raw);
            let mut seen = result.clone();
            seen.sort_unstable();
            seen.dedup();
            assert_eq!(seen.len(), result.len(), "duplicates for {:?}", raw);
            assert!(result.iter().all(|&i| i < prompts.len()));
        }
    }

    #[test]
    fn test_deterministic() {
        let prompts = sample_prompts();
        assert_eq!(match_prompts(&prompts, "e"), match_prompts(&prompts, "e"));
    }

    #[test]
    fn test_extending_query_never_adds_results() {
        let prompts = sample_prompts();
        let broad = match_prompts(&prompts, "f");
        let narrow = match_prompts(&prompts, "fi");
        assert!(narrow.iter().all(|idx| broad.contains(idx)));
    }

    #[test]
    fn test_empty_prompt_set() {
        assert!(match_prompts(&[], "anything").is_empty());
        assert!(match_prompts(&[], "").is_empty());
    }
}
