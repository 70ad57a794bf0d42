//! Stylesheet generation.
//!
//! [`StylesheetGenerator`] ties the pieces together:
//!
//! 1. derive the [`ThemePalette`] from the filter settings,
//! 2. resolve the common record and the site record for the page,
//! 3. run the [`RuleTable`] over each,
//! 4. append font overrides when requested.
//!
//! Its three collaborators (URL matching, color filtering, font rules) are
//! injected, so the generator itself is a pure function of its inputs.

use tracing::debug;
use umbra_catalogue::{resolve_common, resolve_for_url, Catalogue, GlobMatcher, UrlMatcher};

use crate::filter::{ColorFilter, ColorMatrixFilter, FilterConfig};
use crate::font::{FontRule, TextRule};
use crate::palette::ThemePalette;
use crate::rules::RuleTable;

/// Builds page stylesheets from a catalogue and filter settings.
///
/// # Example
///
/// ```rust
/// use umbra_render::{Catalogue, FilterConfig, StylesheetGenerator};
///
/// let catalogue = Catalogue::parse("*\n\nNEUTRAL BG\nbody\n").unwrap();
/// let css = StylesheetGenerator::new().generate(
///     &FilterConfig::default(),
///     "https://example.com/",
///     &catalogue,
/// );
///
/// assert_eq!(
///     css,
///     "/* Common theme */\nbody {\n    background-color: rgb(16, 20, 23) !important;\n}"
/// );
/// ```
pub struct StylesheetGenerator {
    matcher: Box<dyn UrlMatcher + Send + Sync>,
    filter: Box<dyn ColorFilter + Send + Sync>,
    text_rule: Box<dyn TextRule + Send + Sync>,
    rules: RuleTable,
}

impl Default for StylesheetGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl StylesheetGenerator {
    /// Creates a generator with the default collaborators and the standard
    /// rule table.
    pub fn new() -> Self {
        Self {
            matcher: Box::new(GlobMatcher),
            filter: Box::new(ColorMatrixFilter),
            text_rule: Box::new(FontRule),
            rules: RuleTable::standard().clone(),
        }
    }

    /// Replaces the URL matcher.
    pub fn with_matcher(mut self, matcher: impl UrlMatcher + Send + Sync + 'static) -> Self {
        self.matcher = Box::new(matcher);
        self
    }

    /// Replaces the color filter.
    pub fn with_filter(mut self, filter: impl ColorFilter + Send + Sync + 'static) -> Self {
        self.filter = Box::new(filter);
        self
    }

    /// Replaces the font rule.
    pub fn with_text_rule(mut self, text_rule: impl TextRule + Send + Sync + 'static) -> Self {
        self.text_rule = Box::new(text_rule);
        self
    }

    /// Replaces the rule table.
    pub fn with_rules(mut self, rules: RuleTable) -> Self {
        self.rules = rules;
        self
    }

    /// Derives the palette used for `config`.
    pub fn palette(&self, config: &FilterConfig) -> ThemePalette {
        ThemePalette::derive(config, self.filter.as_ref())
    }

    /// Generates the stylesheet for a page.
    pub fn generate(&self, config: &FilterConfig, url: &str, catalogue: &Catalogue) -> String {
        self.generate_for_frame(config, url, None, catalogue)
    }

    /// Generates the stylesheet for a frame inside a page.
    ///
    /// Site records are resolved against `frame_url` when present, otherwise
    /// against `url`.
    pub fn generate_for_frame(
        &self,
        config: &FilterConfig,
        url: &str,
        frame_url: Option<&str>,
        catalogue: &Catalogue,
    ) -> String {
        let palette = self.palette(config);
        let common = resolve_common(catalogue);
        let site = resolve_for_url(frame_url.unwrap_or(url), catalogue, self.matcher.as_ref());

        let mut lines = Vec::new();
        if !site.is_some_and(|s| s.no_common) {
            lines.push("/* Common theme */".to_string());
            lines.extend(self.rules.generate(common, &palette));
        }
        if let Some(site) = site {
            lines.push(format!("/* Theme for {} */", site.url.join(" ")));
            lines.extend(self.rules.generate(site, &palette));
        }
        if config.wants_font() {
            lines.push("/* Font */".to_string());
            lines.push(format!("* {}", self.text_rule.create_text_rule(config)));
        }
        lines.retain(|line| !line.is_empty());

        debug!(
            url,
            site = site.map(|s| s.primary_url()),
            lines = lines.len(),
            "generated stylesheet"
        );
        lines.join("\n")
    }
}

/// Generates a stylesheet with the default collaborators.
pub fn generate_stylesheet(config: &FilterConfig, url: &str, catalogue: &Catalogue) -> String {
    StylesheetGenerator::new().generate(config, url, catalogue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use umbra_catalogue::{Property, ThemeRecord};

    fn exact(url: &str, patterns: &[String]) -> bool {
        patterns.iter().any(|p| p == url)
    }

    fn catalogue(site: ThemeRecord) -> Catalogue {
        Catalogue::from_records(vec![
            ThemeRecord::common().with(Property::NeutralBg, ["body"]),
            site,
        ])
        .unwrap()
    }

    fn generator() -> StylesheetGenerator {
        StylesheetGenerator::new().with_matcher(exact)
    }

    #[test]
    fn common_only_when_nothing_matches() {
        let cat = catalogue(ThemeRecord::new(["site"]).with(Property::Invert, ["img"]));
        let css = generator().generate(&FilterConfig::default(), "elsewhere", &cat);

        assert!(css.starts_with("/* Common theme */\nbody {"));
        assert!(!css.contains("Theme for"));
    }

    #[test]
    fn site_block_follows_common_block() {
        let cat = catalogue(ThemeRecord::new(["site", "alias"]).with(Property::Invert, ["img"]));
        let css = generator().generate(&FilterConfig::default(), "alias", &cat);

        let common = css.find("/* Common theme */").unwrap();
        let site = css.find("/* Theme for site alias */").unwrap();
        assert!(common < site);
        assert!(css.ends_with("img {\n    filter: invert(100%) hue-rotate(180deg) !important;\n}"));
    }

    #[test]
    fn no_common_suppresses_common_block() {
        let cat = catalogue(
            ThemeRecord::new(["site"])
                .with_no_common(true)
                .with(Property::Invert, ["img"]),
        );
        let css = generator().generate(&FilterConfig::default(), "site", &cat);

        assert!(!css.contains("/* Common theme */"));
        assert!(css.starts_with("/* Theme for site */\nimg {"));
    }

    #[test]
    fn empty_blocks_leave_only_headers() {
        let cat = Catalogue::from_records(vec![ThemeRecord::common()]).unwrap();
        let css = generator().generate(&FilterConfig::default(), "x", &cat);
        assert_eq!(css, "/* Common theme */");
    }

    #[test]
    fn frame_url_takes_precedence() {
        let cat = catalogue(ThemeRecord::new(["frame"]).with(Property::Invert, ["img"]));
        let css = generator().generate_for_frame(
            &FilterConfig::default(),
            "page",
            Some("frame"),
            &cat,
        );
        assert!(css.contains("/* Theme for frame */"));
    }

    #[test]
    fn font_block_uses_text_rule() {
        let cat = Catalogue::from_records(vec![ThemeRecord::common()]).unwrap();
        let config = FilterConfig {
            text_stroke: 0.5,
            ..FilterConfig::default()
        };
        let css = generator()
            .with_text_rule(|_: &FilterConfig| "{ stub }".to_string())
            .generate(&config, "x", &cat);
        assert_eq!(css, "/* Common theme */\n/* Font */\n* { stub }");
    }

    #[test]
    fn palette_comes_from_injected_filter() {
        let cat = Catalogue::from_records(vec![
            ThemeRecord::common().with(Property::NeutralBg, ["body"])
        ])
        .unwrap();
        let css = generator()
            .with_filter(|c: Color, _: &FilterConfig| c.with_rgb(crate::Rgb(1, 2, 3)))
            .generate(&FilterConfig::default(), "x", &cat);
        assert!(css.contains("background-color: rgb(1, 2, 3) !important;"));
    }

    #[test]
    fn light_mode_uses_light_base() {
        let cat = Catalogue::from_records(vec![
            ThemeRecord::common().with(Property::NeutralBg, ["body"])
        ])
        .unwrap();
        let config = FilterConfig::default().with_mode(crate::FilterMode::Light);
        let css = generate_stylesheet(&config, "x", &cat);
        assert!(css.contains("rgb(255, 242, 228)"));
    }
}
