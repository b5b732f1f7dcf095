//! Weighted signal scoring shared by the detectors
//!
//! A detector that cannot decide on a single idiom lists partial signals,
//! each worth a small number of points, and accepts the snippet once the
//! total clears a threshold. Every signal counts at most once no matter how
//! often it matches.

use fancy_regex::Regex as FancyRegex;
use regex::{Regex, RegexSet};

/// Point value of a partial signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weight {
    /// 1 pt - mildly suggestive, shared with other languages
    Weak,
    /// 2 pts - indicative, rarely seen elsewhere
    Strong,
    /// 3 pts - enough on its own at the usual threshold
    Decisive,
}

impl Weight {
    pub const fn points(self) -> u32 {
        match self {
            Weight::Weak => 1,
            Weight::Strong => 2,
            Weight::Decisive => 3,
        }
    }
}

/// A single regex signal with its weight
pub struct Signal {
    pub pattern: &'static str,
    pub weight: Weight,
}

impl Signal {
    pub const fn new(pattern: &'static str, weight: Weight) -> Self {
        Self { pattern, weight }
    }
}

/// Pre-compiled signal table for one detector
pub struct Scorecard {
    pub name: &'static str,
    set: RegexSet,
    weights: Vec<u32>,
}

impl Scorecard {
    pub fn compile(name: &'static str, signals: &[Signal]) -> Self {
        let patterns: Vec<&str> = signals.iter().map(|s| s.pattern).collect();
        let weights = signals.iter().map(|s| s.weight.points()).collect();

        Self {
            name,
            set: RegexSet::new(&patterns).expect("Invalid regex patterns in signal table"),
            weights,
        }
    }

    /// Sum of the weights of every signal matching `text`
    pub fn score(&self, text: &str) -> u32 {
        let total: u32 = self
            .set
            .matches(text)
            .iter()
            .map(|i| self.weights[i])
            .sum();
        tracing::trace!(detector = self.name, score = total, "scored signals");
        total
    }

    /// True once the score reaches `threshold`
    pub fn clears(&self, text: &str, threshold: u32) -> bool {
        self.score(text) >= threshold
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

/// Compile a set of alternatives matched in one pass
pub fn pattern_set(patterns: &[&str]) -> RegexSet {
    RegexSet::new(patterns).expect("Invalid regex patterns in pattern set")
}

/// Compile a single pattern
pub fn pattern(pattern: &str) -> Regex {
    Regex::new(pattern).expect("Invalid regex pattern")
}

/// Compile a pattern needing backreferences or lookaround
pub fn fancy_pattern(pattern: &str) -> FancyRegex {
    FancyRegex::new(pattern).expect("Invalid fancy regex pattern")
}

/// Match a fancy pattern, treating a runtime failure as no match.
///
/// Backtracking patterns can hit the backtrack limit on adversarial input;
/// that must never halt the cascade.
pub fn fancy_is_match(re: &FancyRegex, text: &str) -> bool {
    match re.is_match(text) {
        Ok(matched) => matched,
        Err(e) => {
            tracing::trace!("fancy regex gave up, treating as no match: {e}");
            false
        }
    }
}

/// Number of non-overlapping matches of `re` in `text`
pub fn count_matches(re: &Regex, text: &str) -> usize {
    re.find_iter(text).count()
}
