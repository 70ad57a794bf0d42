//! URL pattern matching.
//!
//! [`UrlMatcher`] is the seam the resolver uses to decide whether a page URL
//! belongs to a record. Any `Fn(&str, &[String]) -> bool` is a matcher, which
//! keeps tests free of pattern semantics:
//!
//! ```rust
//! use umbra_catalogue::UrlMatcher;
//!
//! let exact = |url: &str, patterns: &[String]| patterns.iter().any(|p| p == url);
//! assert!(exact.is_url_in_list("a.com", &["a.com".to_string()]));
//! ```
//!
//! [`GlobMatcher`] is the default implementation.
//!
//! # Pattern Syntax
//!
//! | Pattern | Matches |
//! |---------|---------|
//! | `example.com` | `example.com` and any subdomain, any scheme, any path |
//! | `^example.com` | `example.com` only, no subdomains |
//! | `*.example.com` | exactly one label in front of `example.com` (and deeper subdomains) |
//! | `example.com/docs` | paths starting with `/docs` |
//! | `example.com/docs$` | `/docs` exactly (optional trailing slash and query) |
//! | `*` | everything |

use regex::Regex;
use tracing::warn;

/// Decides whether a URL is covered by a list of patterns.
pub trait UrlMatcher {
    /// Returns `true` if any pattern matches `url`.
    fn is_url_in_list(&self, url: &str, patterns: &[String]) -> bool;
}

impl<F> UrlMatcher for F
where
    F: Fn(&str, &[String]) -> bool,
{
    fn is_url_in_list(&self, url: &str, patterns: &[String]) -> bool {
        self(url, patterns)
    }
}

/// Glob-style host and path matcher.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobMatcher;

impl GlobMatcher {
    /// Creates a matcher.
    pub fn new() -> Self {
        Self
    }

    /// Returns `true` if a single pattern matches `url`.
    pub fn is_url_matched(&self, url: &str, pattern: &str) -> bool {
        match pattern_regex(pattern) {
            Ok(regex) => regex.is_match(url),
            Err(err) => {
                warn!(pattern, error = %err, "unusable URL pattern");
                false
            }
        }
    }
}

impl UrlMatcher for GlobMatcher {
    fn is_url_in_list(&self, url: &str, patterns: &[String]) -> bool {
        patterns.iter().any(|p| self.is_url_matched(url, p))
    }
}

/// Compiles a URL pattern into a case-insensitive regular expression.
pub fn pattern_regex(pattern: &str) -> Result<Regex, regex::Error> {
    let pattern = pattern.trim();
    let exact_beginning = pattern.starts_with('^');
    let exact_ending = pattern.len() > 1 && pattern.ends_with('$');

    let mut rest = pattern.strip_prefix('^').unwrap_or(pattern);
    if exact_ending {
        rest = rest.strip_suffix('$').unwrap_or(rest);
    }
    if let Some(index) = rest.find("//") {
        rest = &rest[index + 2..];
        rest = rest.strip_prefix('/').unwrap_or(rest);
    }
    if let Some(index) = rest.find('?') {
        rest = &rest[..index];
    }
    rest = rest.strip_suffix('/').unwrap_or(rest);

    let (host, path) = match rest.find('/') {
        Some(index) => (&rest[..index], Some(&rest[index..])),
        None => (rest, None),
    };

    let mut source = String::from("(?i)^([^:/?#]*?:/{2,3})?");
    if !exact_beginning {
        source.push_str(r"([^/]*?\.)?");
    }

    let labels: Vec<String> = host
        .split('.')
        .map(|label| {
            if label == "*" {
                r"[^./]+?".to_string()
            } else {
                regex::escape(label)
            }
        })
        .collect();
    source.push('(');
    source.push_str(&labels.join(r"\."));
    source.push(')');

    if let Some(path) = path {
        let parts: Vec<String> = path.split('*').map(regex::escape).collect();
        source.push('(');
        source.push_str(&parts.join(".*?"));
        source.push(')');
    }

    source.push_str(match (exact_ending, path.is_some()) {
        (true, _) => r"(/?(\?[^/]*?)?)$",
        (false, true) => r"(.*)$",
        (false, false) => r"([/?#].*)?$",
    });

    Regex::new(&source)
}
