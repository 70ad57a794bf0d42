use insta::assert_snapshot;
use umbra_render::{
    Catalogue, FilterConfig, FilterMode, Property, StylesheetGenerator, ThemeRecord,
};

fn example_catalogue() -> Catalogue {
    Catalogue::from_records(vec![
        ThemeRecord::common().with(Property::NeutralBg, ["body"]),
        ThemeRecord::new(["example.com"]).with(Property::NeutralBg, ["header"]),
    ])
    .unwrap()
}

#[test]
fn common_and_site_blocks() {
    let css = StylesheetGenerator::new().generate(
        &FilterConfig::default(),
        "https://example.com",
        &example_catalogue(),
    );

    assert_snapshot!(css, @r"
    /* Common theme */
    body {
        background-color: rgb(16, 20, 23) !important;
    }
    /* Theme for example.com */
    header {
        background-color: rgb(16, 20, 23) !important;
    }
    ");
}

#[test]
fn parsed_catalogue_matches_programmatic_one() {
    let parsed = Catalogue::parse(
        "*\n\nNEUTRAL BG\nbody\n\n================================\n\nexample.com\n\nNEUTRAL BG\nheader\n",
    )
    .unwrap();
    let generator = StylesheetGenerator::new();
    let config = FilterConfig::default();

    assert_eq!(
        generator.generate(&config, "https://example.com", &parsed),
        generator.generate(&config, "https://example.com", &example_catalogue()),
    );
}

#[test]
fn light_site_theme_with_states_and_font() {
    let catalogue = Catalogue::from_records(vec![
        ThemeRecord::common().with(Property::NeutralBg, ["body"]),
        ThemeRecord::new(["example.com"])
            .with_no_common(true)
            .with(Property::NeutralBgActive, ["button", "a.btn"])
            .with(Property::RedBorder, ["input"])
            .with(Property::FadeBg, [".overlay"]),
    ])
    .unwrap();
    let config = FilterConfig {
        mode: FilterMode::Light,
        use_font: true,
        font_family: "Georgia".into(),
        ..FilterConfig::default()
    };

    let css = StylesheetGenerator::new().generate(&config, "https://www.example.com/a", &catalogue);

    assert_snapshot!(css, @r"
    /* Theme for example.com */
    button,
    a.btn {
        background-color: rgb(255, 242, 228) !important;
    }
    button:hover,
    a.btn:hover {
        background-color: rgb(255, 243, 230) !important;
    }
    button:active, button:focus,
    a.btn:active, a.btn:focus {
        background-color: rgb(255, 243, 231) !important;
    }
    input {
        border-color: rgb(198, 50, 109) !important;
    }
    .overlay {
        background-color: rgba(0, 0, 0, 0.5) !important;
    }
    /* Font */
    * {
      font-family: Georgia !important;
    }
    ");
}

#[test]
fn generation_is_deterministic() {
    let catalogue = example_catalogue();
    let config = FilterConfig {
        brightness: 87.0,
        contrast: 113.0,
        sepia: 12.0,
        grayscale: 5.0,
        ..FilterConfig::default()
    };
    let generator = StylesheetGenerator::new();

    let first = generator.generate(&config, "https://example.com", &catalogue);
    for _ in 0..5 {
        assert_eq!(generator.generate(&config, "https://example.com", &catalogue), first);
    }
}

#[test]
fn generator_is_shareable_across_threads() {
    let generator = std::sync::Arc::new(StylesheetGenerator::new());
    let catalogue = std::sync::Arc::new(example_catalogue());
    let expected = generator.generate(&FilterConfig::default(), "https://example.com", &catalogue);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let generator = generator.clone();
            let catalogue = catalogue.clone();
            std::thread::spawn(move || {
                generator.generate(&FilterConfig::default(), "https://example.com", &catalogue)
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn config_loads_from_yaml() {
    let config: FilterConfig = serde_yaml::from_str(
        "mode: light\nbrightness: 110\nuse_font: true\nfont_family: Open Sans\n",
    )
    .unwrap();

    assert_eq!(config.mode, FilterMode::Light);
    assert_eq!(config.brightness, 110.0);
    assert_eq!(config.contrast, 100.0);
    assert!(config.use_font);
    assert_eq!(config.font_family, "Open Sans");
}
