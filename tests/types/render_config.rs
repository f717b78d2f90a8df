use validation_result::{RenderConfig, Untranslated, ValidationResult};

#[test]
fn default_config_matches_newline_layout() {
    let config = RenderConfig::default();
    assert_eq!(config.separator, "\n");
    assert_eq!(config.section_separator, "\n\n");

    let result = ValidationResult::new().with_error("E1").with_warning("W1");
    assert_eq!(result.render(&config, &Untranslated), result.errors_and_warnings_concatenated());
}

#[test]
fn compact_config_renders_on_one_line() {
    let result = ValidationResult::from_errors(["a", "b"]).with_warning("w");
    let rendered = result.render(&RenderConfig::compact(), &Untranslated);

    assert!(
        rendered == "a; b | w" || rendered == "b; a | w",
        "unexpected rendering: {rendered:?}"
    );
}

#[test]
fn custom_separators_apply_to_both_sections() {
    let config = RenderConfig::default().with_separator(", ").with_section_separator(" / ");
    let result = ValidationResult::new().with_error("e").with_warning("w");

    assert_eq!(result.render(&config, &|m: &str| m.to_uppercase()), "E / W");
}

#[test]
fn section_separator_omitted_without_warnings() {
    let config = RenderConfig::compact();
    let result = ValidationResult::new().with_error("e");

    assert_eq!(result.render(&config, &Untranslated), "e");
}

#[test]
fn try_render_uses_config_separators() {
    let config = RenderConfig::compact();
    let result = ValidationResult::new().with_error("e").with_warning("w");
    let mut identity = |m: &str| Ok::<_, ()>(m.to_string());

    assert_eq!(result.try_render(&config, &mut identity), Ok("e | w".to_string()));
}
