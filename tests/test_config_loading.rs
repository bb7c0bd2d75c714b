//! Configuration loading and validation tests
//!
//! Tests focus on BEHAVIOR of configuration loading, validation, and error handling.

use sitechain::config::{ConfigError, ProviderKind, SiteConfig};
use sitechain::pipeline::StageKind;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

#[test]
fn test_config_loads_successfully_from_valid_toml() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(
        temp_file,
        r#"
[llm]
provider = "openai"
model = "gpt-4o-mini"
api_key_env = "SITECHAIN_OPENAI_KEY"
system_prompt = "You build clean, semantic web pages."
temperature = 0.2
max_tokens = 3000

[output]
dir = "build/site"
"#
    )
    .unwrap();

    let config = SiteConfig::load_from_file(temp_file.path()).unwrap();

    assert_eq!(config.llm.provider, ProviderKind::OpenAi);
    assert_eq!(config.llm.model(), "gpt-4o-mini");
    assert_eq!(config.llm.api_key_env(), "SITECHAIN_OPENAI_KEY");
    assert_eq!(
        config.llm.system_prompt.as_deref(),
        Some("You build clean, semantic web pages.")
    );
    assert_eq!(config.llm.temperature, 0.2);
    assert_eq!(config.llm.max_tokens, Some(3000));
    assert_eq!(config.output.dir, PathBuf::from("build/site"));
}

#[test]
fn test_config_loads_prompt_overrides() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(
        temp_file,
        r#"
[prompts]
planner = "Outline a one-page site for {{input}}."
design = "Turn this copy into a single HTML file with inline CSS: {{input}}"
"#
    )
    .unwrap();

    let config = SiteConfig::load_from_file(temp_file.path()).unwrap();

    assert_eq!(
        config.prompts.template_for(StageKind::Planner),
        Some("Outline a one-page site for {input}.")
    );
    assert!(config.prompts.template_for(StageKind::Design).is_some());
    assert!(config.prompts.template_for(StageKind::Content).is_none());
}

#[test]
fn test_config_returns_error_when_file_missing() {
    let result = SiteConfig::load_from_file(std::path::Path::new("/nonexistent/sitechain.toml"));

    match result {
        Err(ConfigError::FileRead { path, .. }) => {
            assert_eq!(path, PathBuf::from("/nonexistent/sitechain.toml"))
        }
        other => panic!("Expected FileRead error, got {other:?}"),
    }
}

#[test]
fn test_config_returns_error_for_malformed_toml() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "[llm\nprovider = ").unwrap();

    let result = SiteConfig::load_from_file(temp_file.path());
    assert!(matches!(result, Err(ConfigError::TomlParse(_))));
}

#[test]
fn test_config_rejects_template_with_two_placeholders() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(
        temp_file,
        r#"
[prompts]
seo = "{{input}} then again {{input}}"
"#
    )
    .unwrap();

    match SiteConfig::load_from_file(temp_file.path()) {
        Err(ConfigError::InvalidTemplate { stage, reason }) => {
            assert_eq!(stage, "SEO");
            assert!(reason.contains("found 2"));
        }
        other => panic!("Expected InvalidTemplate error, got {other:?}"),
    }
}

#[test]
fn test_discover_with_explicit_path() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "[llm]\nprovider = \"anthropic\"").unwrap();

    let (config, source) = SiteConfig::discover(Some(temp_file.path())).unwrap();

    assert_eq!(config.llm.provider, ProviderKind::Anthropic);
    assert_eq!(source.as_deref(), Some(temp_file.path()));
}

#[test]
fn test_api_key_read_from_named_variable() {
    let config =
        SiteConfig::from_toml_str("[llm]\napi_key_env = \"SITECHAIN_TEST_API_KEY_PRESENT\"\n")
            .unwrap();

    std::env::set_var("SITECHAIN_TEST_API_KEY_PRESENT", "sk-test");
    assert_eq!(config.get_llm_api_key().unwrap(), "sk-test");
    std::env::remove_var("SITECHAIN_TEST_API_KEY_PRESENT");
}

#[test]
fn test_empty_api_key_counts_as_missing() {
    let config =
        SiteConfig::from_toml_str("[llm]\napi_key_env = \"SITECHAIN_TEST_API_KEY_EMPTY\"\n")
            .unwrap();

    std::env::set_var("SITECHAIN_TEST_API_KEY_EMPTY", "");
    assert!(matches!(
        config.get_llm_api_key(),
        Err(ConfigError::EnvVarNotFound(_))
    ));
    std::env::remove_var("SITECHAIN_TEST_API_KEY_EMPTY");
}
