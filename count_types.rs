use std::cmp::Reverse;
use std::collections::HashMap;

use itertools::Itertools;

/// 単語ごとの集計値
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TokenStat {
    count: usize,
    /// Index of the token among distinct tokens, in order of first appearance.
    first_seen: usize,
}

/// Mapping from token to occurrence count, built in one pass over the text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCounts {
    stats: HashMap<String, TokenStat>,
}

impl WordCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `token`.
    pub fn record(&mut self, token: &str) {
        if let Some(stat) = self.stats.get_mut(token) {
            stat.count += 1;
            return;
        }
        let first_seen = self.stats.len();
        self.stats.insert(
            token.to_string(),
            TokenStat {
                count: 1,
                first_seen,
            },
        );
    }

    pub fn get(&self, token: &str) -> Option<usize> {
        self.stats.get(token).map(|stat| stat.count)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.stats.values().map(|stat| stat.count).sum()
    }

    /// Pairs sorted by descending count; equal counts keep first-appearance order.
    pub fn ranked(&self) -> Vec<(&str, usize)> {
        self.stats
            .iter()
            .sorted_by_key(|(_, stat)| (Reverse(stat.count), stat.first_seen))
            .map(|(token, stat)| (token.as_str(), stat.count))
            .collect()
    }
}

impl<'a> Extend<&'a str> for WordCounts {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for token in iter {
            self.record(token);
        }
    }
}

impl<'a> FromIterator<&'a str> for WordCounts {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut counts = WordCounts::new();
        counts.extend(iter);
        counts
    }
}
