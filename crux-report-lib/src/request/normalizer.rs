use super::AnalyzeRequest;
use crate::model::FormFactor;
use core::fmt::{Display, Formatter};
use std::collections::{BTreeMap, HashSet};
use url::Url;

const LOG_TARGET: &str = "   request";

/// The most URLs a single analysis may cover.
pub const MAX_URLS: usize = 10;

/// Why a single input entry was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UrlIssue {
    Required,
    InvalidScheme,
    Duplicate,
}

impl UrlIssue {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Required => "at least one URL is required",
            Self::InvalidScheme => "must include http:// or https://",
            Self::Duplicate => "duplicate URL detected",
        }
    }
}

impl Display for UrlIssue {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}

/// Input entries that failed validation, keyed by their position in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    issues: BTreeMap<usize, UrlIssue>,
}

impl ValidationError {
    #[must_use]
    pub const fn issues(&self) -> &BTreeMap<usize, UrlIssue> {
        &self.issues
    }

    #[must_use]
    pub fn issue_at(&self, index: usize) -> Option<UrlIssue> {
        self.issues.get(&index).copied()
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        for (i, (index, issue)) in self.issues.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "URL {}: {issue}", index + 1)?;
        }
        Ok(())
    }
}

impl core::error::Error for ValidationError {}

/// Whether `candidate` is an absolute `http` or `https` URL.
#[must_use]
pub fn is_valid_url(candidate: &str) -> bool {
    Url::parse(candidate).is_ok_and(|u| matches!(u.scheme(), "http" | "https"))
}

/// Validate and deduplicate user-entered URLs.
///
/// Entries are trimmed. Blank entries are ignored unless they are the only entry.
/// Every problem is reported against its input index; validation does not stop at
/// the first bad entry. On success the first occurrence of each URL is kept, in input
/// order, up to `max_urls`.
pub fn normalize<S: AsRef<str>>(inputs: &[S], form_factor: FormFactor, max_urls: usize) -> Result<AnalyzeRequest, ValidationError> {
    let mut issues = BTreeMap::new();
    let mut seen = HashSet::new();
    let mut urls = Vec::new();

    for (index, raw) in inputs.iter().enumerate() {
        let entry = raw.as_ref().trim();

        if entry.is_empty() {
            if inputs.len() == 1 {
                let _ = issues.insert(index, UrlIssue::Required);
            }
            continue;
        }

        if !is_valid_url(entry) {
            let _ = issues.insert(index, UrlIssue::InvalidScheme);
            continue;
        }

        if seen.insert(entry) {
            urls.push(entry.to_string());
        } else {
            let _ = issues.insert(index, UrlIssue::Duplicate);
        }
    }

    if issues.is_empty() && urls.is_empty() {
        let _ = issues.insert(0, UrlIssue::Required);
    }

    if !issues.is_empty() {
        return Err(ValidationError { issues });
    }

    if urls.len() > max_urls {
        log::warn!(target: LOG_TARGET, "Only the first {max_urls} of {} URLs will be analyzed", urls.len());
        urls.truncate(max_urls);
    }

    Ok(AnalyzeRequest { urls, form_factor })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(inputs: &[&str]) -> Result<AnalyzeRequest, ValidationError> {
        normalize(inputs, FormFactor::Phone, MAX_URLS)
    }

    #[test]
    fn test_trims_and_keeps_order() {
        let request = run(&["  https://b.com ", "http://a.com"]).unwrap();
        assert_eq!(request.urls, vec!["https://b.com", "http://a.com"]);
        assert_eq!(request.form_factor, FormFactor::Phone);
    }

    #[test]
    fn test_single_empty_entry_is_required() {
        let err = run(&["   "]).unwrap_err();
        assert_eq!(err.issue_at(0), Some(UrlIssue::Required));
        assert_eq!(err.issues().len(), 1);
    }

    #[test]
    fn test_no_entries_is_required() {
        let err = run(&[]).unwrap_err();
        assert_eq!(err.issue_at(0), Some(UrlIssue::Required));
    }

    #[test]
    fn test_all_blank_entries_is_required() {
        let err = run(&["", " "]).unwrap_err();
        assert_eq!(err.issue_at(0), Some(UrlIssue::Required));
    }

    #[test]
    fn test_blank_entries_are_dropped_among_others() {
        let request = run(&["https://a.com", "", "https://b.com"]).unwrap();
        assert_eq!(request.urls, vec!["https://a.com", "https://b.com"]);
    }

    #[test]
    fn test_every_bad_entry_is_reported() {
        let err = run(&["example.com", "https://ok.com", "ftp://files.com", "https://ok.com", "not a url"]).unwrap_err();

        assert_eq!(err.issue_at(0), Some(UrlIssue::InvalidScheme));
        assert_eq!(err.issue_at(1), None);
        assert_eq!(err.issue_at(2), Some(UrlIssue::InvalidScheme));
        assert_eq!(err.issue_at(3), Some(UrlIssue::Duplicate));
        assert_eq!(err.issue_at(4), Some(UrlIssue::InvalidScheme));
    }

    #[test]
    fn test_only_later_duplicates_are_flagged() {
        let err = run(&["https://a.com", " https://a.com", "https://a.com "]).unwrap_err();
        assert_eq!(err.issue_at(0), None);
        assert_eq!(err.issue_at(1), Some(UrlIssue::Duplicate));
        assert_eq!(err.issue_at(2), Some(UrlIssue::Duplicate));
    }

    #[test]
    fn test_duplicates_are_exact_matches() {
        let request = run(&["https://a.com", "https://a.com/", "HTTPS://a.com"]);
        assert_eq!(request.unwrap().urls.len(), 3);
    }

    #[test]
    fn test_output_is_capped() {
        let inputs: Vec<String> = (0..12).map(|i| format!("https://site{i}.com")).collect();
        let request = normalize(inputs.as_slice(), FormFactor::Desktop, MAX_URLS).unwrap();
        assert_eq!(request.urls.len(), MAX_URLS);
        assert_eq!(request.urls[0], "https://site0.com");
        assert_eq!(request.urls[9], "https://site9.com");
    }

    #[test]
    fn test_is_valid_url() {
        assert!(is_valid_url("https://example.com/path?q=1"));
        assert!(is_valid_url("http://localhost:8000"));
        assert!(!is_valid_url("example.com"));
        assert!(!is_valid_url("mailto:someone@example.com"));
        assert!(!is_valid_url("javascript:alert(1)"));
    }

    #[test]
    fn test_error_display() {
        let err = run(&["nope", "https://a.com", "https://a.com"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "URL 1: must include http:// or https://; URL 3: duplicate URL detected"
        );
    }
}
