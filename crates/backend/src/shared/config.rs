use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

/// Base URLs of the clinic profile services this proxy fronts.
#[derive(Debug, Deserialize, Clone)]
pub struct UpstreamConfig {
    pub patients: String,
    pub therapists: String,
    pub legal_guardians: String,
    pub therapy_plans: String,
}

fn default_static_dir() -> String {
    "static".to_string()
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000

[upstream]
patients = "http://localhost:4000/api/profiles/patients"
therapists = "http://localhost:4000/api/profiles/therapists"
legal_guardians = "http://localhost:4000/api/profiles/legal-responsible"
therapy_plans = "http://localhost:4000/api/therapy-plans"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<Config, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.static_dir, "static");
        assert!(config.upstream.therapy_plans.ends_with("/therapy-plans"));
    }

    #[test]
    fn test_static_dir_override() {
        let toml_src = r#"
            static_dir = "public"

            [server]
            port = 8080

            [upstream]
            patients = "http://u/p"
            therapists = "http://u/t"
            legal_guardians = "http://u/g"
            therapy_plans = "http://u/tp"
        "#;
        let config: Config = toml::from_str(toml_src).unwrap();
        assert_eq!(config.static_dir, "public");
        assert_eq!(config.server.port, 8080);
    }
}
