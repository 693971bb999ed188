// cleancopy-core/tests/sanitizer_tests.rs
//! Behavioural tests for the URL sanitizer against the built-in blacklist.

use anyhow::Result;
use test_log::test;

use cleancopy_core::{
    classify, BlacklistConfig, SanitizationEngine, UrlCandidate, UrlSanitizer,
};

fn engine() -> UrlSanitizer {
    UrlSanitizer::with_defaults().expect("default blacklist loads")
}

#[test]
fn removes_tracking_and_keeps_order_of_the_rest() {
    let out = engine().sanitize("https://example.com/?utm_source=x&id=5&fbclid=y");
    assert_eq!(out, "https://example.com/?id=5");

    let out = engine().sanitize("https://shop.example/item?b=2&gclid=z&a=1&utm_medium=email&c=3");
    assert_eq!(out, "https://shop.example/item?b=2&a=1&c=3");
}

#[test]
fn all_params_blacklisted_drops_the_query() {
    assert_eq!(engine().sanitize("https://example.com/?utm_source=x"), "https://example.com/");
}

#[test]
fn non_url_text_is_untouched() {
    let engine = engine();
    for text in [
        "hello world",
        "",
        "   ",
        "foo/bar?utm_source=x",
        "/absolute/path?fbclid=1",
        "example.com/?fbclid=1",
        "mailto:user@example.com?utm_source=x",
        "line one\nhttps://example.com/?fbclid=1",
        "https://example.com/?fbclid=1 and some words",
    ] {
        assert_eq!(engine.sanitize(text), text, "rewrote {:?}", text);
    }
}

#[test]
fn fragment_and_path_survive() {
    let out = engine().sanitize("https://docs.example.org/a/b/?ref=1&utm_campaign=spring#section-2");
    assert_eq!(out, "https://docs.example.org/a/b/?ref=1#section-2");
}

#[test]
fn ftp_and_uppercase_schemes_are_handled() {
    let engine = engine();
    assert_eq!(
        engine.sanitize("ftp://files.example.com/pub/file.iso?yclid=9"),
        "ftp://files.example.com/pub/file.iso"
    );
    assert_eq!(
        engine.sanitize("HTTP://EXAMPLE.com/?msclkid=1&q=rust"),
        "http://example.com/?q=rust"
    );
}

#[test]
fn surrounding_whitespace_is_trimmed_by_the_parser() {
    assert_eq!(
        engine().sanitize("  https://example.com/?dclid=1&x=y\n"),
        "https://example.com/?x=y"
    );
}

#[test]
fn sanitize_is_idempotent() {
    let engine = engine();
    for url in [
        "https://example.com/?utm_source=x&id=5",
        "https://example.com",
        "https://user:pw@example.com:8443/p?q=%20#f",
        "http://[::1]/?gclid=1",
    ] {
        let once = engine.sanitize(url);
        assert_eq!(engine.sanitize(&once), once, "not idempotent for {}", url);
    }
}

#[test]
fn clean_urls_only_get_canonicalised() {
    let engine = engine();
    match classify("https://Example.com") {
        UrlCandidate::Url(url) => assert_eq!(engine.sanitize("https://Example.com"), url.as_str()),
        UrlCandidate::NotUrl => panic!("expected a URL"),
    }
}

#[test]
fn empty_blacklist_removes_nothing() {
    let engine = UrlSanitizer::from_config(&BlacklistConfig::default());
    assert_eq!(engine.sanitize("https://example.com/?fbclid=1"), "https://example.com/?fbclid=1");
    assert!(engine.blacklist().is_empty());
}

#[test]
fn lines_are_sanitized_independently() -> Result<()> {
    let input = "https://a.example/?fbclid=1\r\nplain text\nhttps://b.example/?x=1&si=2\n";
    let (out, summary) = engine().sanitize_lines_with_report(input);
    assert_eq!(out, "https://a.example/\r\nplain text\nhttps://b.example/?x=1\n");
    assert_eq!(summary.urls_found, 2);
    assert_eq!(summary.urls_modified, 2);
    assert_eq!(summary.params_removed(), 2);
    Ok(())
}

#[test]
fn multi_line_block_is_left_alone_unless_split() {
    let block = "https://a.example/?fbclid=1\nhttps://b.example/?gclid=2";
    assert_eq!(engine().sanitize(block), block);
    assert_eq!(engine().sanitize_lines(block), "https://a.example/\nhttps://b.example/");
}
