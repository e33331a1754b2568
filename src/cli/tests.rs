#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use crate::config::LLMProvider;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_args_minimal() {
        let args = Args::parse_from(["casegen-rs", "Acme Robotics"]);

        assert_eq!(args.input, "Acme Robotics");
        assert_eq!(args.output_path, PathBuf::from("./casegen.report"));
        assert!(args.config.is_none());
        assert!(!args.skip_suggestions);
        assert!(!args.no_save);
        assert!(!args.verbose);
    }

    #[test]
    fn test_args_missing_input_fails() {
        assert!(Args::try_parse_from(["casegen-rs"]).is_err());
    }

    #[test]
    fn test_into_config_defaults() {
        let args = Args::parse_from(["casegen-rs", "Acme Robotics"]);
        let config = args.into_config();

        assert_eq!(config.output_path, PathBuf::from("./casegen.report"));
        assert_eq!(config.num_results, 5);
        assert!(!config.skip_suggestions);
        assert!(config.save_report);
    }

    #[test]
    fn test_into_config_overrides() {
        let args = Args::parse_from([
            "casegen-rs",
            "Acme Robotics",
            "--output-path",
            "./out",
            "--num-results",
            "8",
            "--llm-provider",
            "anthropic",
            "--llm-api-key",
            "cli-llm-key",
            "--model",
            "claude-sonnet-4-5",
            "--max-tokens",
            "2048",
            "--temperature",
            "0.9",
            "--search-api-key",
            "cli-search-key",
            "--search-engine-id",
            "cli-engine",
            "--skip-suggestions",
            "--no-save",
            "--verbose",
        ]);
        let config = args.into_config();

        assert_eq!(config.output_path, PathBuf::from("./out"));
        assert_eq!(config.num_results, 8);
        assert_eq!(config.llm.provider, LLMProvider::Anthropic);
        assert_eq!(config.llm.api_key, "cli-llm-key");
        assert_eq!(config.llm.model, "claude-sonnet-4-5");
        assert_eq!(config.llm.max_tokens, 2048);
        assert_eq!(config.llm.temperature, 0.9);
        assert_eq!(config.search.api_key, "cli-search-key");
        assert_eq!(config.search.engine_id, "cli-engine");
        assert!(config.skip_suggestions);
        assert!(!config.save_report);
        assert!(config.verbose);
    }

    #[test]
    fn test_into_config_unknown_provider_keeps_default() {
        let args = Args::parse_from([
            "casegen-rs",
            "Acme Robotics",
            "--llm-provider",
            "not-a-provider",
        ]);
        let config = args.into_config();

        assert_eq!(config.llm.provider, LLMProvider::Gemini);
    }

    #[test]
    fn test_into_config_explicit_config_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("casegen.toml");
        let content = r#"
output_path = "./from-file"
num_results = 2
skip_suggestions = false
save_report = true
verbose = false

[llm]
provider = "deepseek"
api_key = "file-key"
api_base_url = "https://api.deepseek.com"
model = "deepseek-chat"
max_tokens = 1024
temperature = 0.3

[search]
api_key = "file-search"
engine_id = "file-engine"
endpoint = "https://www.googleapis.com/customsearch/v1"
timeout_seconds = 15
"#;
        std::fs::write(&config_path, content).unwrap();

        let args = Args::parse_from([
            "casegen-rs",
            "Acme Robotics",
            "--config",
            config_path.to_str().unwrap(),
            "--model",
            "deepseek-reasoner",
        ]);
        let config = args.into_config();

        // 配置文件生效，CLI参数仍然覆盖文件中的值
        assert_eq!(config.llm.provider, LLMProvider::DeepSeek);
        assert_eq!(config.llm.api_key, "file-key");
        assert_eq!(config.llm.model, "deepseek-reasoner");
        assert_eq!(config.num_results, 2);
    }
}
