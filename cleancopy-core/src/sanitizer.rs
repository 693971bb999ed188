//! URL sanitizer: the `SanitizationEngine` that strips tracking parameters.
//!
//! A candidate text is first checked against a cheap absolute-URL guard. Only
//! text that passes the guard is handed to the WHATWG parser in the `url`
//! crate, which would otherwise happily percent-encode arbitrary prose or
//! treat multi-line selections as a single URL. Surviving parameters keep
//! their relative order; the query itself is rewritten in form encoding.
//!
//! License: MIT OR APACHE 2.0

use std::sync::Arc;

use anyhow::Result;
use log::{debug, trace};
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use crate::blacklist::Blacklist;
use crate::config::BlacklistConfig;
use crate::engine::SanitizationEngine;
use crate::report::SanitizeReport;

/// Optional leading whitespace, an http/https/ftp scheme, then a single run of
/// non-whitespace up to (optional trailing whitespace and) the end of input.
static ABSOLUTE_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*(?:https?|ftp)://\S+\s*$").expect("absolute URL guard must compile")
});

/// Result of trying to interpret a candidate text as an absolute URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlCandidate {
    Url(Url),
    NotUrl,
}

/// Returns true when `text` looks like a single absolute URL.
pub fn looks_like_absolute_url(text: &str) -> bool {
    ABSOLUTE_URL.is_match(text)
}

/// Applies the guard, then the parser.
pub fn classify(text: &str) -> UrlCandidate {
    if text.is_empty() || !looks_like_absolute_url(text) {
        return UrlCandidate::NotUrl;
    }
    match Url::parse(text) {
        Ok(url) => UrlCandidate::Url(url),
        Err(e) => {
            trace!("Guard matched but URL parse failed: {}", e);
            UrlCandidate::NotUrl
        }
    }
}

/// Removes every query parameter named in `blacklist` from `url`.
///
/// Returns the decoded names of the removed parameters in query order. The
/// query is always re-serialized as `application/x-www-form-urlencoded`, even
/// when nothing is removed, and an empty result drops the `?` entirely.
pub fn strip_params(url: &mut Url, blacklist: &Blacklist) -> Vec<String> {
    let mut kept: Vec<(String, String)> = Vec::new();
    let mut removed = Vec::new();
    for (name, value) in url.query_pairs() {
        if blacklist.contains(&name) {
            removed.push(name.into_owned());
        } else {
            kept.push((name.into_owned(), value.into_owned()));
        }
    }

    if kept.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut().clear().extend_pairs(&kept);
    }
    removed
}

/// Sanitizes `text` against `blacklist`. Never fails; non-URLs are returned unchanged.
pub fn sanitize(text: &str, blacklist: &Blacklist) -> String {
    sanitize_with_report(text, blacklist).output
}

pub fn sanitize_with_report(text: &str, blacklist: &Blacklist) -> SanitizeReport {
    let mut url = match classify(text) {
        UrlCandidate::Url(url) => url,
        UrlCandidate::NotUrl => return SanitizeReport::untouched(text),
    };

    let removed = strip_params(&mut url, blacklist);
    let output: String = url.into();
    debug!("sanitize input -> {}", text);
    debug!("sanitize output -> {}", output);

    SanitizeReport {
        changed: output != text,
        output,
        is_url: true,
        removed,
    }
}

/// The default engine: a shared, immutable blacklist and the functions above.
#[derive(Debug, Clone)]
pub struct UrlSanitizer {
    blacklist: Arc<Blacklist>,
}

impl UrlSanitizer {
    pub fn new(blacklist: Arc<Blacklist>) -> Self {
        Self { blacklist }
    }

    pub fn from_config(config: &BlacklistConfig) -> Self {
        Self::new(Arc::new(Blacklist::from_config(config)))
    }

    /// Engine over the built-in blacklist.
    pub fn with_defaults() -> Result<Self> {
        Ok(Self::from_config(&BlacklistConfig::load_default()?))
    }
}

impl SanitizationEngine for UrlSanitizer {
    fn sanitize_with_report(&self, text: &str) -> SanitizeReport {
        sanitize_with_report(text, &self.blacklist)
    }

    fn blacklist(&self) -> &Blacklist {
        &self.blacklist
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracking() -> Blacklist {
        Blacklist::from_names(["utm_source", "fbclid", "gclid"])
    }

    #[test]
    fn strips_blacklisted_and_keeps_the_rest() {
        let out = sanitize("https://example.com/?utm_source=x&id=5&fbclid=y", &tracking());
        assert_eq!(out, "https://example.com/?id=5");
    }

    #[test]
    fn emptied_query_drops_question_mark() {
        assert_eq!(sanitize("https://example.com/?utm_source=x", &tracking()), "https://example.com/");
    }

    #[test]
    fn guard_rejects_relative_and_prose() {
        assert_eq!(classify("foo/bar?utm_source=x"), UrlCandidate::NotUrl);
        assert_eq!(classify("hello world"), UrlCandidate::NotUrl);
        assert_eq!(classify("see https://example.com/?fbclid=1 now"), UrlCandidate::NotUrl);
        assert_eq!(classify("https://a.example/\nhttps://b.example/"), UrlCandidate::NotUrl);
        assert_eq!(classify(""), UrlCandidate::NotUrl);
    }

    #[test]
    fn guard_accepts_supported_schemes() {
        assert!(looks_like_absolute_url("  HTTPS://example.com"));
        assert!(looks_like_absolute_url("ftp://files.example.com/a"));
        assert!(looks_like_absolute_url("http://example.com/ \n"));
        assert!(!looks_like_absolute_url("mailto:someone@example.com"));
        assert!(!looks_like_absolute_url("https://"));
    }

    #[test]
    fn parse_failure_returns_original() {
        let text = "http://exa mple.com";
        assert!(!looks_like_absolute_url(text));
        let bad_port = "http://example.com:99999/";
        assert_eq!(sanitize(bad_port, &tracking()), bad_port);
    }

    #[test]
    fn encoded_names_are_matched_and_query_is_form_encoded() {
        let out = sanitize(
            "https://example.com/p?q=a%20b+c&%66bclid=1&x=%2F#frag",
            &tracking(),
        );
        assert_eq!(out, "https://example.com/p?q=a+b+c&x=%2F#frag");
    }

    #[test]
    fn query_is_reserialized_even_when_nothing_is_removed() {
        let blacklist = tracking();
        assert_eq!(sanitize("https://example.com/?q=a%20b", &blacklist), "https://example.com/?q=a+b");
        assert_eq!(sanitize("https://example.com/?r=/x", &blacklist), "https://example.com/?r=%2Fx");
        assert_eq!(sanitize("https://example.com/?", &blacklist), "https://example.com/");
        assert_eq!(sanitize("https://example.com/?&&", &blacklist), "https://example.com/");
    }

    #[test]
    fn valueless_params_gain_an_equals_sign() {
        let report = sanitize_with_report("https://example.com/?flag&fbclid=1", &tracking());
        assert_eq!(report.output, "https://example.com/?flag=");
        assert_eq!(report.removed, vec!["fbclid"]);
    }

    #[test]
    fn repeated_params_are_all_removed() {
        let report = sanitize_with_report("https://example.com/?gclid=1&a=1&gclid=2", &tracking());
        assert_eq!(report.output, "https://example.com/?a=1");
        assert_eq!(report.removed, vec!["gclid", "gclid"]);
        assert!(report.changed);
    }

    #[test]
    fn names_are_case_sensitive() {
        let out = sanitize("https://example.com/?UTM_SOURCE=x", &tracking());
        assert_eq!(out, "https://example.com/?UTM_SOURCE=x");
    }

    #[test]
    fn clean_url_is_canonicalised_and_idempotent() {
        let blacklist = tracking();
        let once = sanitize("HTTPS://Example.COM", &blacklist);
        assert_eq!(once, "https://example.com/");
        assert_eq!(sanitize(&once, &blacklist), once);
    }
}
