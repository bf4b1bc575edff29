use config::{Config, ConfigError, Environment, File};
use evaluator::EvaluatorConfig;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    pub allow_origins: Vec<String>,
    pub max_age: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Default `EnvFilter` directive when `RUST_LOG` is unset.
    pub log_level: String,
    /// Request bodies larger than this are rejected. Whiteboard images are sent inline.
    pub body_limit_bytes: usize,
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// HS256 secret shared with the identity provider that issues session tokens.
    pub jwt_secret: String,
    pub cookie_name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct InterviewConfig {
    /// Length of an interview session.
    pub duration_secs: i64,
    /// Extra time after `expires_at` during which a submit is still accepted.
    pub grace_secs: i64,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum AnalyzerBackend {
    #[default]
    Canned,
    Remote,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AnalyzerConfig {
    pub backend: AnalyzerBackend,
    /// Endpoint of the remote analyzer. Required for the `remote` backend.
    pub url: Option<String>,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SeedConfig {
    pub enabled: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    #[serde(default)]
    pub evaluator: EvaluatorConfig,
    pub interview: InterviewConfig,
    pub analyzer: AnalyzerConfig,
    pub seed: SeedConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let path =
            std::env::var("PATTERN_GYM_CONFIG").unwrap_or_else(|_| "config/config".to_string());

        let s = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5000)?
            .set_default("server.log_level", "info")?
            .set_default("server.body_limit_bytes", 16 * 1024 * 1024)?
            .set_default("server.cors.allow_origins", Vec::<String>::new())?
            .set_default("server.cors.max_age", 3600)?
            .set_default("database.url", "sqlite://pattern-gym.db?mode=rwc")?
            .set_default("auth.cookie_name", "session")?
            .set_default("interview.duration_secs", 45 * 60)?
            .set_default("interview.grace_secs", 60)?
            .set_default("analyzer.backend", "canned")?
            .set_default("analyzer.timeout_secs", 30)?
            .set_default("seed.enabled", true)?
            // Load from config/config.toml
            .add_source(File::with_name(&path).required(false))
            // Override from environment (e.g., PATTERN_GYM__AUTH__JWT_SECRET)
            .add_source(Environment::with_prefix("PATTERN_GYM").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
