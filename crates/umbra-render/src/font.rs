//! Font override rules.

use crate::filter::FilterConfig;

/// Produces the brace-enclosed declaration block for font overrides.
///
/// The stylesheet generator prefixes the result with `* `. Any
/// `Fn(&FilterConfig) -> String` is a text rule.
pub trait TextRule {
    fn create_text_rule(&self, config: &FilterConfig) -> String;
}

impl<F> TextRule for F
where
    F: Fn(&FilterConfig) -> String,
{
    fn create_text_rule(&self, config: &FilterConfig) -> String {
        self(config)
    }
}

/// Default text rule: font family and text stroke.
#[derive(Debug, Clone, Copy, Default)]
pub struct FontRule;

impl TextRule for FontRule {
    fn create_text_rule(&self, config: &FilterConfig) -> String {
        let mut lines = vec!["{".to_string()];
        if config.use_font && !config.font_family.is_empty() {
            lines.push(format!("  font-family: {} !important;", config.font_family));
        }
        if config.text_stroke > 0.0 {
            lines.push(format!(
                "  -webkit-text-stroke: {}px !important;",
                config.text_stroke
            ));
            lines.push(format!("  text-stroke: {}px !important;", config.text_stroke));
        }
        lines.push("}".to_string());
        lines.join("\n")
    }
}
