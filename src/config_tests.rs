//! Unit tests for environment-sourced configuration.

#[cfg(test)]
mod config_tests {
    use crate::config::AppConfig;
    use crate::constants::{agent, scrape, server};
    use std::env;

    // All env mutations live in a single test to avoid cross-test races:
    // the test harness runs tests in parallel within one process.
    #[test]
    fn test_from_env_defaults_and_overrides() {
        for key in [
            "BIND_ADDR",
            "CAPITOLTRADES_URL",
            "OPENAI_API_KEY",
            "OPENAI_BASE_URL",
            "OPENAI_MODEL",
        ] {
            env::remove_var(key);
        }

        let config = AppConfig::from_env();
        assert_eq!(config.bind_addr, server::DEFAULT_BIND_ADDR);
        assert_eq!(config.profile_url, scrape::PROFILE_URL);
        assert_eq!(config.openai_api_key, None);
        assert_eq!(config.openai_base_url, None);
        assert_eq!(config.model, agent::DEFAULT_MODEL);

        env::set_var("BIND_ADDR", "127.0.0.1:9999");
        env::set_var("CAPITOLTRADES_URL", "http://localhost:8888/profile");
        env::set_var("OPENAI_API_KEY", "sk-test123");
        env::set_var("OPENAI_BASE_URL", "http://localhost:11434/v1");
        env::set_var("OPENAI_MODEL", "gpt-4o");

        let config = AppConfig::from_env();
        assert_eq!(config.bind_addr, "127.0.0.1:9999");
        assert_eq!(config.profile_url, "http://localhost:8888/profile");
        assert_eq!(config.openai_api_key, Some("sk-test123".to_string()));
        assert_eq!(
            config.openai_base_url,
            Some("http://localhost:11434/v1".to_string())
        );
        assert_eq!(config.model, "gpt-4o");

        // Blank credential counts as missing (disables the chat route)
        env::set_var("OPENAI_API_KEY", "   ");
        let config = AppConfig::from_env();
        assert_eq!(config.openai_api_key, None);

        for key in [
            "BIND_ADDR",
            "CAPITOLTRADES_URL",
            "OPENAI_API_KEY",
            "OPENAI_BASE_URL",
            "OPENAI_MODEL",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    fn test_config_clone_and_debug() {
        let config = AppConfig {
            bind_addr: "0.0.0.0:8080".to_string(),
            profile_url: scrape::PROFILE_URL.to_string(),
            openai_api_key: None,
            openai_base_url: None,
            model: agent::DEFAULT_MODEL.to_string(),
        };

        let cloned = config.clone();
        assert_eq!(cloned.bind_addr, config.bind_addr);

        let debug = format!("{:?}", config);
        assert!(debug.contains("AppConfig"));
        assert!(debug.contains("profile_url"));
    }
}
