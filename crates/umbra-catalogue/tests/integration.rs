use umbra_catalogue::{Catalogue, GlobMatcher, Property, SEPARATOR};

const CATALOGUE: &str = r#"
*

NEUTRAL BG
html
body

NEUTRAL TEXT
body

INVERT
.logo

================================

mail.google.com

NO COMMON

NEUTRAL BG
.inbox

=====

google.com
google.de

RED BG ACTIVE
button.danger

BLUE BORDER
input
textarea

=====

docs.rs

FADE TEXT
.sidebar .muted
"#;

#[test]
fn parses_realistic_catalogue() {
    let catalogue = Catalogue::parse(CATALOGUE).unwrap();

    assert_eq!(catalogue.len(), 4);
    assert_eq!(
        catalogue.common().selectors(Property::NeutralBg).unwrap(),
        &["html".to_string(), "body".to_string()]
    );

    let google = &catalogue.sites()[1];
    assert_eq!(google.url, vec!["google.com", "google.de"]);
    assert_eq!(
        google.selectors(Property::BlueBorder).unwrap(),
        &["input".to_string(), "textarea".to_string()]
    );

    let docs = &catalogue.sites()[2];
    assert_eq!(
        docs.selectors(Property::FadeText).unwrap(),
        &[".sidebar .muted".to_string()]
    );
}

#[test]
fn subdomain_record_outranks_domain_record() {
    let catalogue = Catalogue::parse(CATALOGUE).unwrap();

    let mail = catalogue
        .resolve("https://mail.google.com/mail/u/0", &GlobMatcher)
        .unwrap();
    assert_eq!(mail.primary_url(), "mail.google.com");
    assert!(mail.no_common);

    let search = catalogue
        .resolve("https://www.google.com/search?q=rust", &GlobMatcher)
        .unwrap();
    assert_eq!(search.primary_url(), "google.com");

    let german = catalogue.resolve("https://google.de", &GlobMatcher).unwrap();
    assert_eq!(german.primary_url(), "google.com");
}

#[test]
fn unmatched_url_resolves_to_nothing() {
    let catalogue = Catalogue::parse(CATALOGUE).unwrap();
    assert!(catalogue.resolve("https://example.com", &GlobMatcher).is_none());
}

#[test]
fn format_sorts_and_normalizes() {
    let catalogue = Catalogue::parse(CATALOGUE).unwrap();
    let text = catalogue.format();

    let order: Vec<&str> = text
        .split(SEPARATOR)
        .map(|block| block.trim().lines().next().unwrap_or(""))
        .collect();
    assert_eq!(order, vec!["*", "docs.rs", "google.com", "mail.google.com"]);

    assert!(text.ends_with("\n"));
    assert!(text
        .lines()
        .all(|line| !line.starts_with('=') || line == SEPARATOR));
    assert_eq!(Catalogue::parse(&text).unwrap().format(), text);
}

#[test]
fn string_parse_uses_catalogue_codec() {
    let catalogue: Catalogue = "*\n\nINVERT\nimg".parse().unwrap();
    assert_eq!(
        catalogue.common().selectors(Property::Invert).unwrap(),
        &["img".to_string()]
    );
}
