use ai_workshop_mcp::config::{GlobalConfig, DEPLOYMENT_ENV, ENDPOINT_ENV};
use ai_workshop_mcp::AppError;

fn sample_toml() -> &'static str {
    r#"
resources_dir = "/srv/workshop/resources"
http_port = 4100

[model]
endpoint = "https://demo.openai.azure.com"
deployment = "gpt-4o"
model = "gpt-4o"
api_version = "2024-06-01"
timeout_seconds = 30
"#
}

#[test]
fn parses_valid_config() {
    let config = GlobalConfig::from_toml_str(sample_toml()).expect("config parses");

    assert_eq!(config.http_port, 4100);
    assert_eq!(
        config.resources_dir,
        std::path::PathBuf::from("/srv/workshop/resources")
    );
    assert_eq!(config.model.endpoint, "https://demo.openai.azure.com");
    assert_eq!(config.model.deployment, "gpt-4o");
    assert_eq!(config.model.api_version, "2024-06-01");
    assert_eq!(config.model.timeout_seconds, 30);
    assert!(
        config.model.api_key.is_empty(),
        "api_key is never populated from TOML"
    );
}

#[test]
fn empty_config_uses_defaults() {
    let config = GlobalConfig::from_toml_str("").expect("empty config parses");

    assert_eq!(config, GlobalConfig::default());
    assert_eq!(config.http_port, 3000);
    assert_eq!(config.resources_dir, std::path::PathBuf::from("resources"));
    assert_eq!(config.model.deployment, "gpt-4");
    assert_eq!(config.model.model, "gpt-4");
    assert_eq!(config.model.api_version, "2024-02-01");
    assert_eq!(config.model.timeout_seconds, 120);
    assert!(config.model.endpoint.is_empty());
}

#[test]
fn api_key_in_toml_is_ignored() {
    let config = GlobalConfig::from_toml_str(
        r#"
[model]
endpoint = "https://demo.openai.azure.com"
api_key = "should-not-load"
"#,
    )
    .expect("config parses");
    assert!(config.model.api_key.is_empty());
}

#[test]
fn zero_timeout_is_rejected() {
    let result = GlobalConfig::from_toml_str(
        r"
[model]
timeout_seconds = 0
",
    );
    assert!(matches!(result, Err(AppError::Config(msg)) if msg.contains("timeout_seconds")));
}

#[test]
fn blank_deployment_is_rejected() {
    let result = GlobalConfig::from_toml_str(
        r#"
[model]
deployment = "  "
"#,
    );
    assert!(matches!(result, Err(AppError::Config(_))));
}

#[test]
fn invalid_toml_is_config_error() {
    let result = GlobalConfig::from_toml_str("http_port = \"not a number\"");
    match result {
        Err(AppError::Config(msg)) => assert!(msg.starts_with("invalid config")),
        other => panic!("expected config error, got {other:?}"),
    }
}

#[test]
fn load_from_path_resolves_relative_resources_dir() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("config.toml");
    std::fs::write(&path, "resources_dir = \"docs\"\n").expect("write config");

    let config = GlobalConfig::load_from_path(&path).expect("config loads");
    assert_eq!(config.resources_dir, temp.path().join("docs"));
}

#[test]
fn load_from_missing_path_is_config_error() {
    let result = GlobalConfig::load_from_path("/nonexistent/ai-workshop/config.toml");
    assert!(matches!(result, Err(AppError::Config(msg)) if msg.contains("failed to read config")));
}

#[test]
fn overrides_replace_endpoint_and_deployment() {
    let mut config = GlobalConfig::from_toml_str(sample_toml()).expect("config parses");

    config.apply_overrides_from(|key| match key {
        k if k == ENDPOINT_ENV => Some("https://override.openai.azure.com".into()),
        k if k == DEPLOYMENT_ENV => Some("override-deployment".into()),
        _ => None,
    });

    assert_eq!(config.model.endpoint, "https://override.openai.azure.com");
    assert_eq!(config.model.deployment, "override-deployment");
}

#[test]
fn blank_overrides_are_ignored() {
    let mut config = GlobalConfig::from_toml_str(sample_toml()).expect("config parses");

    config.apply_overrides_from(|_| Some("   ".into()));

    assert_eq!(config.model.endpoint, "https://demo.openai.azure.com");
    assert_eq!(config.model.deployment, "gpt-4o");
}

#[test]
fn ensure_model_endpoint_requires_value() {
    let config = GlobalConfig::default();
    let err = config.ensure_model_endpoint().unwrap_err();
    assert!(err.to_string().contains(ENDPOINT_ENV));
}

#[test]
fn ensure_model_endpoint_requires_http_scheme() {
    let mut config = GlobalConfig::default();
    config.model.endpoint = "demo.openai.azure.com".into();
    assert!(config.ensure_model_endpoint().is_err());

    config.model.endpoint = "https://demo.openai.azure.com".into();
    assert!(config.ensure_model_endpoint().is_ok());
}
