//! Selecting the records that apply to a page.

use tracing::debug;

use crate::matcher::UrlMatcher;
use crate::record::{Catalogue, ThemeRecord};

/// Returns the common record (index 0).
pub fn resolve_common(catalogue: &Catalogue) -> &ThemeRecord {
    catalogue.common()
}

/// Returns the most specific per-site record matching `url`.
///
/// A record is a candidate when `matcher` accepts `url` for its pattern
/// list. Candidates are ranked by [`ThemeRecord::specificity`]; candidates
/// scoring zero are ignored, and among equal scores the record appearing
/// first in the catalogue wins. The common record never takes part.
pub fn resolve_for_url<'a, M>(
    url: &str,
    catalogue: &'a Catalogue,
    matcher: &M,
) -> Option<&'a ThemeRecord>
where
    M: UrlMatcher + ?Sized,
{
    let mut best: Option<(&ThemeRecord, usize)> = None;
    for record in catalogue.sites() {
        if !matcher.is_url_in_list(url, &record.url) {
            continue;
        }
        let score = record.specificity();
        if score == 0 {
            continue;
        }
        match best {
            Some((_, best_score)) if best_score >= score => {}
            _ => best = Some((record, score)),
        }
    }

    match best {
        Some((record, score)) => {
            debug!(url, pattern = record.primary_url(), score, "resolved site theme");
            Some(record)
        }
        None => {
            debug!(url, "no site theme");
            None
        }
    }
}
