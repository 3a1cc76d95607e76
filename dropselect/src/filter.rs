//! Search-as-you-type filtering over options and groups.
//!
//! Candidates for a match are the option label and each of its tokens,
//! compared case-insensitively. Groups survive only when at least one member
//! matches, and then carry just the matching members. Order is preserved.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};
use serde::Deserialize;

use crate::option::{Entry, OptionGroup, SelectOption};

/// Caller-supplied match function: `(candidate, term) -> matched`.
///
/// Both arguments arrive lowercased (and normalized when enabled).
#[derive(Clone)]
pub struct MatchFn(Arc<dyn Fn(&str, &str) -> bool + Send + Sync>);

impl MatchFn {
    pub fn new(f: impl Fn(&str, &str) -> bool + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    fn call(&self, candidate: &str, term: &str) -> bool {
        (self.0)(candidate, term)
    }
}

impl fmt::Debug for MatchFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MatchFn(..)")
    }
}

/// How a search term is matched against candidates.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchStyle {
    /// Candidate contains the term.
    #[default]
    Contains,
    /// Candidate starts with the term.
    StartsWith,
    /// Fuzzy subsequence match.
    Fuzzy,
    /// Custom predicate.
    #[serde(skip)]
    Predicate(MatchFn),
}

impl SearchStyle {
    pub fn predicate(f: impl Fn(&str, &str) -> bool + Send + Sync + 'static) -> Self {
        SearchStyle::Predicate(MatchFn::new(f))
    }
}

/// Fold `text` to lowercase, optionally stripping diacritics from latin
/// characters first.
pub fn normalize_text(text: &str, strip_diacritics: bool) -> String {
    if strip_diacritics {
        text.chars()
            .map(nucleo_matcher::chars::normalize)
            .collect::<String>()
            .to_lowercase()
    } else {
        text.to_lowercase()
    }
}

struct Fuzzy {
    matcher: Matcher,
    pattern: Pattern,
    buf: Vec<char>,
}

/// A prepared search term.
pub struct Query<'s> {
    style: &'s SearchStyle,
    raw: String,
    term: String,
    normalize: bool,
    fuzzy: Option<Fuzzy>,
}

impl<'s> Query<'s> {
    pub fn new(term: &str, style: &'s SearchStyle) -> Self {
        Self::with_normalization(term, style, false)
    }

    /// Prepare a query that also strips diacritics from term and candidates.
    pub fn with_normalization(term: &str, style: &'s SearchStyle, normalize: bool) -> Self {
        let fuzzy = matches!(style, SearchStyle::Fuzzy).then(|| Fuzzy {
            matcher: Matcher::new(Config::DEFAULT),
            pattern: Pattern::new(
                term,
                CaseMatching::Ignore,
                if normalize {
                    Normalization::Smart
                } else {
                    Normalization::Never
                },
                AtomKind::Fuzzy,
            ),
            buf: Vec::new(),
        });

        Self {
            style,
            raw: term.to_string(),
            term: normalize_text(term, normalize),
            normalize,
            fuzzy,
        }
    }

    /// Whether the term is empty or whitespace only (matches everything).
    pub fn is_empty(&self) -> bool {
        self.raw.trim().is_empty()
    }

    /// Whether `option` matches by label or any token.
    pub fn matches(&mut self, option: &SelectOption) -> bool {
        if self.is_empty() {
            return true;
        }
        std::iter::once(option.label.as_str())
            .chain(option.tokens.iter().map(String::as_str))
            .any(|candidate| self.matches_candidate(candidate))
    }

    fn matches_candidate(&mut self, candidate: &str) -> bool {
        if let Some(fuzzy) = self.fuzzy.as_mut() {
            let haystack = Utf32Str::new(candidate, &mut fuzzy.buf);
            return fuzzy.pattern.score(haystack, &mut fuzzy.matcher).is_some();
        }

        let candidate = normalize_text(candidate, self.normalize);
        match self.style {
            SearchStyle::Contains => candidate.contains(&self.term),
            SearchStyle::StartsWith => candidate.starts_with(&self.term),
            SearchStyle::Predicate(f) => f.call(&candidate, &self.term),
            SearchStyle::Fuzzy => false,
        }
    }

    /// Filter `entries`, borrowing them untouched when the term is empty.
    pub fn apply<'e>(&mut self, entries: &'e [Entry]) -> Cow<'e, [Entry]> {
        if self.is_empty() {
            return Cow::Borrowed(entries);
        }

        let mut filtered = Vec::new();
        for entry in entries {
            match entry {
                Entry::Group(group) => {
                    let options: Vec<SelectOption> = group
                        .options
                        .iter()
                        .filter(|option| self.matches(option))
                        .cloned()
                        .collect();
                    if !options.is_empty() {
                        filtered.push(Entry::Group(OptionGroup {
                            label: group.label.clone(),
                            options,
                            disabled: group.disabled,
                        }));
                    }
                }
                Entry::Option(option) => {
                    if self.matches(option) {
                        filtered.push(entry.clone());
                    }
                }
            }
        }
        Cow::Owned(filtered)
    }
}

/// Filter `entries` by `term` using `style`.
pub fn filter<'e>(entries: &'e [Entry], term: &str, style: &SearchStyle) -> Cow<'e, [Entry]> {
    Query::new(term, style).apply(entries)
}
