//! The declarative rule table.
//!
//! Each [`Rule`] binds a record property (where the selectors come from), a
//! list of [`Declaration`]s (what to paint, computed from the palette) and a
//! [`State`] (which pseudo-classes to append to every selector). The
//! standard table covers the four color groups (neutral, red, green, blue)
//! with background, text and border roles, their hover and active variants,
//! and the fade, transparency, image and invert overrides.
//!
//! Hover and active variants blend the base role color toward a fixed
//! accent:
//!
//! | Group | Background accent | Text accent |
//! |-------|-------------------|-------------|
//! | neutral | `rgb(255, 255, 255)` | `rgb(255, 255, 255)` |
//! | red | `rgb(255, 0, 64)` | `rgb(255, 255, 0)` |
//! | green | `rgb(128, 255, 182)` | `rgb(182, 255, 224)` |
//! | blue | `rgb(0, 128, 255)` | `rgb(182, 224, 255)` |
//!
//! Backgrounds blend by 7.5% on hover and 10% when active; text by 25% and
//! 50%. Borders are the halfway blend of the group's background and text.
//!
//! A generated block looks like:
//!
//! ```css
//! .button:hover,
//! a:hover {
//!     background-color: rgb(34, 38, 40) !important;
//! }
//! ```

use once_cell::sync::Lazy;
use umbra_catalogue::{Property, ThemeRecord};

use crate::color::Rgb;
use crate::palette::{PaletteRole, ThemePalette};

/// Blend factor toward the accent for hovered backgrounds.
pub const BG_HOVER: f64 = 0.075;
/// Blend factor toward the accent for active backgrounds.
pub const BG_ACTIVE: f64 = 0.1;
/// Blend factor toward the accent for hovered text.
pub const FG_HOVER: f64 = 0.25;
/// Blend factor toward the accent for active text.
pub const FG_ACTIVE: f64 = 0.5;
/// Blend factor between background and text for borders.
pub const BORDER: f64 = 0.5;

/// The interaction state a rule targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum State {
    /// Selectors are used as written.
    #[default]
    Base,
    /// `sel` becomes `sel:hover`.
    Hover,
    /// `sel` becomes `sel:active, sel:focus`.
    Active,
}

impl State {
    /// Rewrites one selector for this state.
    pub fn rewrite(self, selector: &str) -> String {
        match self {
            State::Base => selector.to_string(),
            State::Hover => format!("{selector}:hover"),
            State::Active => format!("{selector}:active, {selector}:focus"),
        }
    }
}

/// One CSS declaration, computed from the palette.
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    /// A role color used as is.
    Role {
        property: &'static str,
        role: PaletteRole,
    },
    /// A role color blended toward a fixed accent.
    Accent {
        property: &'static str,
        role: PaletteRole,
        accent: Rgb,
        t: f64,
    },
    /// One role color blended toward another.
    Blend {
        property: &'static str,
        from: PaletteRole,
        to: PaletteRole,
        t: f64,
    },
    /// A palette-independent declaration.
    Fixed(&'static str),
}

impl Declaration {
    /// Renders `property: value` without the trailing `!important;`.
    pub fn render(&self, palette: &ThemePalette) -> String {
        match self {
            Declaration::Role { property, role } => {
                format!("{}: {}", property, palette.get(*role))
            }
            Declaration::Accent {
                property,
                role,
                accent,
                t,
            } => format!("{}: {}", property, palette.get(*role).mix(*accent, *t)),
            Declaration::Blend {
                property,
                from,
                to,
                t,
            } => {
                let target = palette.get(*to).rgb;
                format!("{}: {}", property, palette.get(*from).mix(target, *t))
            }
            Declaration::Fixed(text) => (*text).to_string(),
        }
    }
}

/// A table entry: selector source, declarations and selector rewrite.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub source: Property,
    pub declarations: Vec<Declaration>,
    pub state: State,
}

impl Rule {
    /// Creates a base-state rule with one declaration.
    pub fn new(source: Property, declaration: Declaration) -> Self {
        Self {
            source,
            declarations: vec![declaration],
            state: State::Base,
        }
    }

    /// Sets the state, returning `self` for chaining.
    pub fn state(mut self, state: State) -> Self {
        self.state = state;
        self
    }

    /// Generates the CSS block for a record, or `None` when the record has no
    /// selectors for this rule's property.
    pub fn generate(&self, record: &ThemeRecord, palette: &ThemePalette) -> Option<String> {
        let selectors = record.selectors(self.source).filter(|s| !s.is_empty())?;

        let mut css = selectors
            .iter()
            .map(|s| self.state.rewrite(s))
            .collect::<Vec<_>>()
            .join(",\n");
        css.push_str(" {\n");
        for declaration in &self.declarations {
            css.push_str("    ");
            css.push_str(&declaration.render(palette));
            css.push_str(" !important;\n");
        }
        css.push('}');
        Some(css)
    }
}

/// Properties and colors of one color group.
struct ColorGroup {
    bg: Property,
    bg_active: Property,
    text: Property,
    text_active: Property,
    border: Property,
    bg_role: PaletteRole,
    text_role: PaletteRole,
    bg_accent: Rgb,
    text_accent: Rgb,
}

const GROUPS: [ColorGroup; 4] = [
    ColorGroup {
        bg: Property::NeutralBg,
        bg_active: Property::NeutralBgActive,
        text: Property::NeutralText,
        text_active: Property::NeutralTextActive,
        border: Property::NeutralBorder,
        bg_role: PaletteRole::NeutralBg,
        text_role: PaletteRole::NeutralText,
        bg_accent: Rgb::WHITE,
        text_accent: Rgb::WHITE,
    },
    ColorGroup {
        bg: Property::RedBg,
        bg_active: Property::RedBgActive,
        text: Property::RedText,
        text_active: Property::RedTextActive,
        border: Property::RedBorder,
        bg_role: PaletteRole::RedBg,
        text_role: PaletteRole::RedText,
        bg_accent: Rgb(255, 0, 64),
        text_accent: Rgb(255, 255, 0),
    },
    ColorGroup {
        bg: Property::GreenBg,
        bg_active: Property::GreenBgActive,
        text: Property::GreenText,
        text_active: Property::GreenTextActive,
        border: Property::GreenBorder,
        bg_role: PaletteRole::GreenBg,
        text_role: PaletteRole::GreenText,
        bg_accent: Rgb(128, 255, 182),
        text_accent: Rgb(182, 255, 224),
    },
    ColorGroup {
        bg: Property::BlueBg,
        bg_active: Property::BlueBgActive,
        text: Property::BlueText,
        text_active: Property::BlueTextActive,
        border: Property::BlueBorder,
        bg_role: PaletteRole::BlueBg,
        text_role: PaletteRole::BlueText,
        bg_accent: Rgb(0, 128, 255),
        text_accent: Rgb(182, 224, 255),
    },
];

const BACKGROUND: &str = "background-color";
const TEXT: &str = "color";

impl ColorGroup {
    fn rules(&self) -> [Rule; 9] {
        let bg = Declaration::Role {
            property: BACKGROUND,
            role: self.bg_role,
        };
        let bg_accent = |t| Declaration::Accent {
            property: BACKGROUND,
            role: self.bg_role,
            accent: self.bg_accent,
            t,
        };
        let text = Declaration::Role {
            property: TEXT,
            role: self.text_role,
        };
        let text_accent = |t| Declaration::Accent {
            property: TEXT,
            role: self.text_role,
            accent: self.text_accent,
            t,
        };

        [
            Rule::new(self.bg, bg.clone()),
            Rule::new(self.bg_active, bg),
            Rule::new(self.bg_active, bg_accent(BG_HOVER)).state(State::Hover),
            Rule::new(self.bg_active, bg_accent(BG_ACTIVE)).state(State::Active),
            Rule::new(self.text, text.clone()),
            Rule::new(self.text_active, text),
            Rule::new(self.text_active, text_accent(FG_HOVER)).state(State::Hover),
            Rule::new(self.text_active, text_accent(FG_ACTIVE)).state(State::Active),
            Rule::new(
                self.border,
                Declaration::Blend {
                    property: "border-color",
                    from: self.bg_role,
                    to: self.text_role,
                    t: BORDER,
                },
            ),
        ]
    }
}

static STANDARD: Lazy<RuleTable> = Lazy::new(|| {
    let mut rules: Vec<Rule> = GROUPS.iter().flat_map(ColorGroup::rules).collect();
    rules.extend([
        Rule::new(
            Property::FadeBg,
            Declaration::Role {
                property: BACKGROUND,
                role: PaletteRole::FadeBg,
            },
        ),
        Rule::new(
            Property::FadeText,
            Declaration::Role {
                property: TEXT,
                role: PaletteRole::FadeText,
            },
        ),
        Rule::new(
            Property::TransparentBg,
            Declaration::Fixed("background-color: transparent"),
        ),
        Rule::new(Property::NoImage, Declaration::Fixed("background-image: none")),
        Rule::new(
            Property::Invert,
            Declaration::Fixed("filter: invert(100%) hue-rotate(180deg)"),
        ),
    ]);
    RuleTable { rules }
});

/// An ordered list of rules.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    /// The standard table.
    pub fn standard() -> &'static RuleTable {
        &STANDARD
    }

    /// Creates a table from rules, in order.
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Appends a rule, returning `self` for chaining.
    pub fn with(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// The rules, in order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Generates every block that applies to `record`, in table order.
    pub fn generate<'a>(
        &'a self,
        record: &'a ThemeRecord,
        palette: &'a ThemePalette,
    ) -> impl Iterator<Item = String> + 'a {
        self.rules
            .iter()
            .filter_map(move |rule| rule.generate(record, palette))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(property: Property, selectors: &[&str]) -> ThemeRecord {
        ThemeRecord::common().with(property, selectors.iter().copied())
    }

    fn blocks(record: &ThemeRecord) -> Vec<String> {
        RuleTable::standard()
            .generate(record, &ThemePalette::DARK)
            .collect()
    }

    #[test]
    fn standard_table_layout() {
        let rules = RuleTable::standard().rules();
        assert_eq!(rules.len(), 41);
        assert_eq!(rules[0].source, Property::NeutralBg);
        assert_eq!(rules[8].source, Property::NeutralBorder);
        assert_eq!(rules[9].source, Property::RedBg);
        assert_eq!(rules[40].source, Property::Invert);
    }

    #[test]
    fn every_property_has_a_rule() {
        let rules = RuleTable::standard().rules();
        for property in Property::ALL {
            assert!(rules.iter().any(|r| r.source == property), "{property}");
        }
    }

    #[test]
    fn state_rewrites() {
        assert_eq!(State::Base.rewrite("a"), "a");
        assert_eq!(State::Hover.rewrite("a.b"), "a.b:hover");
        assert_eq!(State::Active.rewrite("a"), "a:active, a:focus");
    }

    #[test]
    fn base_block_format() {
        assert_eq!(
            blocks(&record(Property::NeutralBg, &["html", "body"])),
            vec!["html,\nbody {\n    background-color: rgb(16, 20, 23) !important;\n}"]
        );
    }

    #[test]
    fn absent_or_empty_selectors_generate_nothing() {
        assert!(blocks(&ThemeRecord::common()).is_empty());
        assert!(blocks(&record(Property::RedBg, &[])).is_empty());
    }

    #[test]
    fn background_active_expands_to_three_states() {
        assert_eq!(
            blocks(&record(Property::NeutralBgActive, &["button"])),
            vec![
                "button {\n    background-color: rgb(16, 20, 23) !important;\n}",
                "button:hover {\n    background-color: rgb(34, 38, 40) !important;\n}",
                "button:active, button:focus {\n    background-color: rgb(40, 44, 46) !important;\n}",
            ]
        );
    }

    #[test]
    fn text_active_uses_text_factors() {
        let out = blocks(&record(Property::NeutralTextActive, &["a"]));
        assert_eq!(out.len(), 3);
        assert!(out[1].contains("color: rgb(189, 182, 168)"));
        assert!(out[2].contains("color: rgb(211, 207, 197)"));
    }

    #[test]
    fn red_background_hover_uses_red_accent() {
        let out = blocks(&record(Property::RedBgActive, &[".danger"]));
        assert!(out[1].contains("rgb(78, 11, 34)"), "{}", out[1]);
    }

    #[test]
    fn border_blends_background_and_text() {
        assert_eq!(
            blocks(&record(Property::NeutralBorder, &["hr"])),
            vec!["hr {\n    border-color: rgb(92, 89, 81) !important;\n}"]
        );
    }

    #[test]
    fn fixed_overrides() {
        let record = ThemeRecord::common()
            .with(Property::FadeText, [".muted"])
            .with(Property::TransparentBg, ["nav"])
            .with(Property::NoImage, ["header"])
            .with(Property::Invert, ["img.logo"]);

        assert_eq!(
            blocks(&record),
            vec![
                ".muted {\n    color: rgba(167, 158, 139, 0.5) !important;\n}",
                "nav {\n    background-color: transparent !important;\n}",
                "header {\n    background-image: none !important;\n}",
                "img.logo {\n    filter: invert(100%) hue-rotate(180deg) !important;\n}",
            ]
        );
    }

    #[test]
    fn custom_tables_append_rules() {
        let table = RuleTable::default().with(
            Rule::new(Property::Invert, Declaration::Fixed("opacity: 0.9")).state(State::Hover),
        );
        let out: Vec<String> = table
            .generate(&record(Property::Invert, &["video"]), &ThemePalette::LIGHT)
            .collect();
        assert_eq!(out, vec!["video:hover {\n    opacity: 0.9 !important;\n}"]);
    }
}
