// src/extract/links.rs
// =============================================================================
// Finds hyperlink targets in an HTML page and resolves host-relative ones.
//
// We use the `scraper` crate to parse the page and select `a[href]`
// elements. The raw href values are handed back untouched: deciding what a
// link means is the crawler's job, not the parser's.
//
// Resolution is deliberately narrow. Only links starting with a single `/`
// are joined onto `scheme://host` of the page they came from. Protocol-
// relative (`//cdn.example.com/x`) and path-relative (`about.html`) links
// stay as they are, and later fail to fetch for lack of a scheme.
// =============================================================================

use scraper::{Html, Selector};
use std::sync::LazyLock;
use url::Url;

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("anchor selector is valid CSS"));

// Returns the href of every anchor in document order
//
// Duplicates are kept; the crawler deduplicates against everything it has
// already seen anyway.
pub fn extract_anchor_hrefs(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    document
        .select(&ANCHOR_SELECTOR)
        .filter_map(|element| element.value().attr("href"))
        .map(str::to_string)
        .collect()
}

// Derives `scheme://authority` from a page URL
//
// The authority is sliced out of the input exactly as written: host case,
// userinfo and explicit ports (even default ones) survive, so a resolved
// self-link matches the URL it was found on. Url::parse only decides
// whether there is an authority at all; its normalized form is not used.
// Returns None when the URL is not absolute, in which case host-relative
// links on that page can't be resolved.
//
// Example:
//   "https://Example.com:443/about?x=1" -> Some("https://Example.com:443")
pub fn base_url(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    if !parsed.has_authority() {
        return None;
    }

    let (scheme, rest) = url.split_once("://")?;
    let authority_end = rest.find(&['/', '?', '#'][..]).unwrap_or(rest.len());
    Some(format!("{}://{}", scheme, &rest[..authority_end]))
}

// Rewrites a host-relative link against the page's base URL
//
// "/contact" + "https://example.com" -> "https://example.com/contact"
// Anything else comes back unchanged.
pub fn resolve_link(base: Option<&str>, href: &str) -> String {
    match base {
        Some(base) if is_host_relative(href) => format!("{}{}", base, href),
        _ => href.to_string(),
    }
}

fn is_host_relative(href: &str) -> bool {
    href.starts_with('/') && !href.starts_with("//")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_hrefs_in_order() {
        let html = r#"
            <a href="/page2">Two</a>
            <a name="no-href">Skip</a>
            <a href="https://other.test/">Other</a>
            <a href="/page2">Two again</a>
        "#;
        let hrefs = extract_anchor_hrefs(html);
        assert_eq!(hrefs, vec!["/page2", "https://other.test/", "/page2"]);
    }

    #[test]
    fn test_hrefs_are_not_validated() {
        let html = r##"<a href="mailto:x@y.com">m</a><a href="#top">t</a><a href="">e</a>"##;
        let hrefs = extract_anchor_hrefs(html);
        assert_eq!(hrefs, vec!["mailto:x@y.com", "#top", ""]);
    }

    #[test]
    fn test_base_url_drops_path_and_query() {
        assert_eq!(
            base_url("https://example.com/about?x=1#frag").as_deref(),
            Some("https://example.com")
        );
        assert_eq!(
            base_url("http://user@example.com:8080/a/b").as_deref(),
            Some("http://user@example.com:8080")
        );
    }

    #[test]
    fn test_base_url_keeps_authority_as_written() {
        assert_eq!(
            base_url("https://a.test:443/x").as_deref(),
            Some("https://a.test:443")
        );
        assert_eq!(base_url("https://A.Test/x").as_deref(), Some("https://A.Test"));
        assert_eq!(base_url("http://a.test?q=1").as_deref(), Some("http://a.test"));
        assert_eq!(base_url("http://a.test#top").as_deref(), Some("http://a.test"));
    }

    #[test]
    fn test_self_link_resolves_to_same_string() {
        for page in ["https://a.test:443/", "https://A.TEST/"] {
            let base = base_url(page);
            assert_eq!(resolve_link(base.as_deref(), "/"), page);
        }
    }

    #[test]
    fn test_base_url_of_relative_is_none() {
        assert_eq!(base_url("page2"), None);
        assert_eq!(base_url("mailto:someone@example.com"), None);
    }

    #[test]
    fn test_resolve_host_relative_link() {
        let base = base_url("https://example.com/about");
        assert_eq!(
            resolve_link(base.as_deref(), "/contact"),
            "https://example.com/contact"
        );
    }

    #[test]
    fn test_other_links_left_alone() {
        let base = Some("https://example.com");
        assert_eq!(resolve_link(base, "//cdn.example.com/x"), "//cdn.example.com/x");
        assert_eq!(resolve_link(base, "about.html"), "about.html");
        assert_eq!(resolve_link(base, "https://a.test/"), "https://a.test/");
        assert_eq!(resolve_link(None, "/contact"), "/contact");
    }
}
