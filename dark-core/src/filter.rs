//! Accept or reject reads by their title.

use std::collections::HashSet;

use regex::{Regex, RegexBuilder};

use crate::config::FilterOptions;
use crate::types::DarkError;

/// Outcome of [`TitleFilter::accept`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleDecision {
    /// The title is whitelisted; no other rule was consulted.
    WhitelistAccept,
    Reject,
    /// No rule rejected the title.
    DefaultAccept,
}

impl TitleDecision {
    pub const fn is_accepted(self) -> bool {
        !matches!(self, Self::Reject)
    }
}

/// Title rules, checked in order:
///
/// 1. whitelisted titles are accepted outright
/// 2. blacklisted titles are rejected
/// 3. titles not matching the positive regex are rejected
/// 4. titles matching the negative regex are rejected
/// 5. with truncation enabled, titles are cut at the first occurrence of
///    the truncation string and a cut title seen before is rejected
///
/// Regexes are case-insensitive and match anywhere in the title.
///
/// The filter is stateful when truncation is enabled, so each filtering
/// pass should build a fresh one.
#[derive(Debug, Clone, Default)]
pub struct TitleFilter {
    whitelist: HashSet<String>,
    blacklist: HashSet<String>,
    positive: Option<Regex>,
    negative: Option<Regex>,
    truncate_after: Option<String>,
    truncated_seen: HashSet<String>,
}

fn case_insensitive(pattern: &str) -> Result<Regex, DarkError> {
    Ok(RegexBuilder::new(pattern).case_insensitive(true).build()?)
}

impl TitleFilter {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_whitelist(mut self, titles: impl IntoIterator<Item = String>) -> Self {
        self.whitelist.extend(titles);
        self
    }

    #[must_use]
    pub fn with_blacklist(mut self, titles: impl IntoIterator<Item = String>) -> Self {
        self.blacklist.extend(titles);
        self
    }

    /// # Errors
    ///
    /// Returns [`DarkError::InvalidRegex`] if `pattern` does not compile.
    pub fn with_positive_regex(mut self, pattern: &str) -> Result<Self, DarkError> {
        self.positive = Some(case_insensitive(pattern)?);
        Ok(self)
    }

    /// # Errors
    ///
    /// Returns [`DarkError::InvalidRegex`] if `pattern` does not compile.
    pub fn with_negative_regex(mut self, pattern: &str) -> Result<Self, DarkError> {
        self.negative = Some(case_insensitive(pattern)?);
        Ok(self)
    }

    #[must_use]
    pub fn with_truncation(mut self, after: impl Into<String>) -> Self {
        self.truncate_after = Some(after.into());
        self
    }

    /// Builds a filter from the title settings in `options`, or `None` when
    /// there are no title rules at all.
    ///
    /// # Errors
    ///
    /// Returns [`DarkError::InvalidRegex`] if either regex does not compile.
    pub fn from_options(options: &FilterOptions) -> Result<Option<Self>, DarkError> {
        if !options.has_title_rules() {
            return Ok(None);
        }
        let mut filter = Self::new();
        if let Some(whitelist) = &options.whitelist {
            filter = filter.with_whitelist(whitelist.iter().cloned());
        }
        if let Some(blacklist) = &options.blacklist {
            filter = filter.with_blacklist(blacklist.iter().cloned());
        }
        if let Some(pattern) = &options.title_regex {
            filter = filter.with_positive_regex(pattern)?;
        }
        if let Some(pattern) = &options.negative_title_regex {
            filter = filter.with_negative_regex(pattern)?;
        }
        if let Some(after) = &options.truncate_titles_after {
            filter = filter.with_truncation(after.clone());
        }
        Ok(Some(filter))
    }

    /// Decides whether `title` passes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dark_core::filter::{TitleDecision, TitleFilter};
    ///
    /// let mut filter = TitleFilter::new().with_positive_regex("^virus")?;
    /// assert_eq!(filter.accept("Virus 1"), TitleDecision::DefaultAccept);
    /// assert_eq!(filter.accept("bacterium"), TitleDecision::Reject);
    /// # Ok::<(), dark_core::types::DarkError>(())
    /// ```
    pub fn accept(&mut self, title: &str) -> TitleDecision {
        if self.whitelist.contains(title) {
            return TitleDecision::WhitelistAccept;
        }
        if self.blacklist.contains(title) {
            return TitleDecision::Reject;
        }
        if let Some(positive) = &self.positive {
            if !positive.is_match(title) {
                return TitleDecision::Reject;
            }
        }
        if let Some(negative) = &self.negative {
            if negative.is_match(title) {
                return TitleDecision::Reject;
            }
        }
        if let Some(after) = &self.truncate_after {
            let truncated = title.split(after.as_str()).next().unwrap_or(title);
            if !self.truncated_seen.insert(truncated.to_string()) {
                return TitleDecision::Reject;
            }
        }
        TitleDecision::DefaultAccept
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_empty_filter_accepts() {
        let mut filter = TitleFilter::new();
        assert_eq!(filter.accept("anything"), TitleDecision::DefaultAccept);
    }

    #[test]
    fn test_whitelist_beats_other_rules() {
        let mut filter = TitleFilter::new()
            .with_whitelist(titles(&["keep me"]))
            .with_blacklist(titles(&["keep me"]))
            .with_negative_regex("keep")
            .unwrap();
        assert_eq!(filter.accept("keep me"), TitleDecision::WhitelistAccept);
        assert_eq!(filter.accept("keep you"), TitleDecision::Reject);
    }

    #[test]
    fn test_blacklist() {
        let mut filter = TitleFilter::new().with_blacklist(titles(&["bad"]));
        assert_eq!(filter.accept("bad"), TitleDecision::Reject);
        assert_eq!(filter.accept("bad "), TitleDecision::DefaultAccept);
    }

    #[test]
    fn test_positive_regex_is_case_insensitive() {
        let mut filter = TitleFilter::new().with_positive_regex("hepatitis").unwrap();
        assert!(filter.accept("Human Hepatitis B").is_accepted());
        assert!(!filter.accept("Influenza").is_accepted());
    }

    #[test]
    fn test_negative_regex() {
        let mut filter = TitleFilter::new().with_negative_regex("phage").unwrap();
        assert_eq!(filter.accept("Enterobacteria PHAGE T4"), TitleDecision::Reject);
        assert_eq!(filter.accept("Measles"), TitleDecision::DefaultAccept);
    }

    #[test]
    fn test_invalid_regex() {
        assert!(matches!(
            TitleFilter::new().with_positive_regex("(unclosed"),
            Err(DarkError::InvalidRegex(_))
        ));
    }

    #[test]
    fn test_truncation_rejects_repeats() {
        let mut filter = TitleFilter::new().with_truncation(" strain");
        assert!(filter.accept("virus A strain 1").is_accepted());
        assert!(!filter.accept("virus A strain 2").is_accepted());
        assert!(filter.accept("virus B strain 1").is_accepted());
        assert!(filter.accept("virus C").is_accepted());
        assert!(!filter.accept("virus C").is_accepted());
    }

    #[test]
    fn test_from_options_without_rules() {
        let options = FilterOptions::default();
        assert!(TitleFilter::from_options(&options).unwrap().is_none());
    }

    #[test]
    fn test_from_options() {
        let options = FilterOptions {
            blacklist: Some(["x".to_string()].into_iter().collect()),
            title_regex: Some("^r".to_string()),
            ..Default::default()
        };
        let mut filter = TitleFilter::from_options(&options).unwrap().unwrap();
        assert_eq!(filter.accept("x"), TitleDecision::Reject);
        assert_eq!(filter.accept("read"), TitleDecision::DefaultAccept);
        assert_eq!(filter.accept("other"), TitleDecision::Reject);
    }
}
