use deepform::config;
use std::env;
use std::io::Write;

#[test]
fn test_sanitize_field_name_trims_whitespace() {
    assert_eq!(config::sanitize_field_name("  payload  "), "payload");
}

#[test]
fn test_sanitize_field_name_empty_string() {
    assert_eq!(config::sanitize_field_name(""), "deepFormData");
}

#[test]
fn test_sanitize_field_name_whitespace_only() {
    assert_eq!(config::sanitize_field_name("   "), "deepFormData");
}

#[test]
fn test_get_field_name_from_env_and_default() {
    env::set_var("DEEPFORM_FIELD_NAME", "nested");
    assert_eq!(config::get_field_name(), "nested");

    env::remove_var("DEEPFORM_FIELD_NAME");
    assert_eq!(config::get_field_name(), config::DEFAULT_FIELD_NAME);
}

#[test]
fn test_get_port_falls_back_on_garbage() {
    env::set_var("DEEPFORM_PORT", "9090");
    assert_eq!(config::get_port(), 9090);

    env::set_var("DEEPFORM_PORT", "not-a-port");
    assert_eq!(config::get_port(), config::DEFAULT_PORT);

    env::remove_var("DEEPFORM_PORT");
    assert_eq!(config::get_port(), config::DEFAULT_PORT);
}

#[test]
fn test_get_body_limit_rejects_zero() {
    env::set_var("DEEPFORM_BODY_LIMIT", "0");
    assert_eq!(config::get_body_limit(), config::DEFAULT_BODY_LIMIT);

    env::set_var("DEEPFORM_BODY_LIMIT", "1024");
    assert_eq!(config::get_body_limit(), 1024);

    env::remove_var("DEEPFORM_BODY_LIMIT");
}

#[test]
fn test_load_env_file_sets_target_url() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "DEEPFORM_TARGET_URL=http://example.test/receive").unwrap();

    config::load_env_file(Some(file.path().to_str().unwrap()));

    assert_eq!(config::get_target_url(), "http://example.test/receive");
    env::remove_var("DEEPFORM_TARGET_URL");
}

#[test]
fn test_settings_default() {
    let settings = config::Settings::default();
    assert_eq!(settings.field_name, "deepFormData");
    assert_eq!(settings.body_limit, 2 * 1024 * 1024);
    assert!(settings.target_url.is_empty());
    assert_eq!(settings.max_depth, 64);
}

#[test]
fn test_get_max_depth_rejects_zero() {
    env::set_var("DEEPFORM_MAX_DEPTH", "0");
    assert_eq!(config::get_max_depth(), config::DEFAULT_KEY_DEPTH);

    env::set_var("DEEPFORM_MAX_DEPTH", "12");
    assert_eq!(config::get_max_depth(), 12);

    env::remove_var("DEEPFORM_MAX_DEPTH");
    assert_eq!(config::get_max_depth(), config::DEFAULT_KEY_DEPTH);
}
