use fuzzy_matcher::{FuzzyMatcher, skim::SkimMatcherV2};

use crate::list::index::RawIndex;

/// One item that matched a filter pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterMatch {
    pub index: RawIndex,
    pub score: i64,
}

/// Case-insensitive fuzzy subsequence matcher over item titles.
pub struct FuzzyFilter {
    matcher: SkimMatcherV2,
}

impl FuzzyFilter {
    pub fn new() -> Self {
        Self {
            matcher: SkimMatcherV2::default().ignore_case(),
        }
    }

    /// Matches `pattern` against every title.
    ///
    /// Only titles containing the pattern as a subsequence are returned,
    /// best score first. Equal scores keep collection order.
    pub fn find<'a, I>(&self, pattern: &str, titles: I) -> Vec<FilterMatch>
    where
        I: IntoIterator<Item = &'a str>,
    {
        // the matcher only folds ASCII case
        let pattern = pattern.to_lowercase();

        let mut matches: Vec<FilterMatch> = titles
            .into_iter()
            .enumerate()
            .filter_map(|(idx, title)| {
                self.matcher
                    .fuzzy_match(&title.to_lowercase(), &pattern)
                    .map(|score| FilterMatch {
                        index: RawIndex(idx),
                        score,
                    })
            })
            .collect();

        // stable, so ties stay in collection order
        matches.sort_by(|a, b| b.score.cmp(&a.score));
        matches
    }
}

impl Default for FuzzyFilter {
    fn default() -> Self {
        Self::new()
    }
}
