use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Alternate OpenAI-compatible endpoint; empty means the library default.
    #[serde(default)]
    pub base_url: String,
    /// Filled from the environment after the YAML is parsed.
    #[serde(skip)]
    pub api_key: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_uploads_dir")]
    pub uploads_dir: String,
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            api_key: String::new(),
            model: default_model(),
            max_tokens: default_max_tokens(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            uploads_dir: default_uploads_dir(),
            logs: LogsConfig::default(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_model() -> String {
    "gpt-4o".to_string()
}

fn default_max_tokens() -> u32 {
    1000
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_uploads_dir() -> String {
    "uploads".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_yaml_yields_defaults() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.uploads_dir, "uploads");
        assert_eq!(config.server.logs.level, "info");
        assert_eq!(config.llm.model, "gpt-4o");
        assert_eq!(config.llm.max_tokens, 1000);
        assert_eq!(config.llm.api_key, "");
    }

    #[test]
    fn partial_yaml_overrides_defaults() {
        let yaml = r#"
server:
  port: 8080
  uploads_dir: "/tmp/scratch"
llm:
  model: "gpt-4o-mini"
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.uploads_dir, "/tmp/scratch");
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.llm.model, "gpt-4o-mini");
        assert_eq!(config.llm.max_tokens, 1000);
    }

    #[test]
    fn api_key_is_never_serialized() {
        let mut config = Config::default();
        config.llm.api_key = "secret".to_string();
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(!yaml.contains("secret"));
    }
}
