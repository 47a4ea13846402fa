//! Integration tests for TOML and environment layering.
//!
//! Uses `figment::Jail` for safe, sandboxed env var and cwd manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use lector_config::LectorConfig;

#[test]
fn loads_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[model]
host = "http://gpu-box:11434"
model = "mistral:7b"
timeout_secs = 30
num_ctx = 4096

[storage]
db_path = "/var/lib/lector/lector.db"

[analysis]
max_questions = 3

[analysis.extra_hints]
"Ad hominem" = ["es un mentiroso"]
"#,
        )?;

        let config: LectorConfig = Figment::from(Serialized::defaults(LectorConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.model.host, "http://gpu-box:11434");
        assert_eq!(config.model.model, "mistral:7b");
        assert_eq!(config.model.timeout_secs, 30);
        assert_eq!(config.model.num_ctx, 4096);
        assert_eq!(config.storage.db_path, "/var/lib/lector/lector.db");
        assert_eq!(config.analysis.max_questions, 3);
        assert_eq!(
            config.analysis.extra_hints.get("Ad hominem"),
            Some(&vec!["es un mentiroso".to_string()])
        );
        Ok(())
    });
}

#[test]
fn project_file_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".lector")?;
        jail.create_file(
            ".lector/config.toml",
            r#"
[model]
model = "qwen2.5:7b"
"#,
        )?;

        let config = LectorConfig::load().expect("config loads");
        assert_eq!(config.model.model, "qwen2.5:7b");
        assert_eq!(config.model.timeout_secs, 120);
        Ok(())
    });
}

#[test]
fn lector_env_overrides_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".lector")?;
        jail.create_file(
            ".lector/config.toml",
            r#"
[storage]
db_path = "from-file.db"
"#,
        )?;
        jail.set_env("LECTOR_STORAGE__DB_PATH", "from-env.db");
        jail.set_env("LECTOR_MODEL__TIMEOUT_SECS", "15");

        let config = LectorConfig::load().expect("config loads");
        assert_eq!(config.storage.db_path, "from-env.db");
        assert_eq!(config.model.timeout_secs, 15);
        Ok(())
    });
}

#[test]
fn ollama_variables_are_fallbacks() {
    Jail::expect_with(|jail| {
        jail.set_env("OLLAMA_HOST", "http://ollama-from-env:11434");
        jail.set_env("OLLAMA_MODEL", "phi3");

        let config = LectorConfig::load().expect("config loads");
        assert_eq!(config.model.host, "http://ollama-from-env:11434");
        assert_eq!(config.model.model, "phi3");

        jail.set_env("LECTOR_MODEL__MODEL", "llama3.1:8b");
        let config = LectorConfig::load().expect("config loads");
        assert_eq!(config.model.model, "llama3.1:8b");
        Ok(())
    });
}

#[test]
fn schemeless_ollama_host_resolves_to_http() {
    Jail::expect_with(|jail| {
        jail.set_env("OLLAMA_HOST", "127.0.0.1:11434");

        let config = LectorConfig::load().expect("config loads");
        assert_eq!(config.model.host, "127.0.0.1:11434");
        assert_eq!(
            config.model.generate_url(),
            "http://127.0.0.1:11434/api/generate"
        );
        Ok(())
    });
}

#[test]
fn too_many_questions_fails_validation() {
    Jail::expect_with(|jail| {
        jail.set_env("LECTOR_ANALYSIS__MAX_QUESTIONS", "8");
        assert!(LectorConfig::load().is_err());
        Ok(())
    });
}

#[test]
fn invalid_env_value_fails_validation() {
    Jail::expect_with(|jail| {
        jail.set_env("LECTOR_ANALYSIS__MAX_QUESTIONS", "0");
        assert!(LectorConfig::load().is_err());
        Ok(())
    });
}
