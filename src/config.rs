use clap::Parser;

pub const API_KEY_ENV: &str = "GOOGLE_AI_API_KEY";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com";

// CLI argument structure
#[derive(Parser, Debug, Clone)]
#[command(name = "explain-gateway")]
#[command(about = "AI explanations for wireless network calculations")]
pub struct Args {
    // Address to bind on
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    // Port to run the server on
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    // Generation model name
    #[arg(short, long, env = "EXPLAIN_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    // Generation service base url
    #[arg(long, env = "EXPLAIN_API_BASE_URL", default_value = DEFAULT_API_BASE_URL)]
    pub api_base_url: String,

    // Generation service credential, normally taken from the environment
    #[arg(long, env = API_KEY_ENV, hide_env_values = true, default_value = "")]
    pub api_key: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("generation service key not found, set GOOGLE_AI_API_KEY in the environment or .env file")]
    MissingApiKey,
}

// validated at start-up, read-only afterwards
#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub api_base_url: String,
    pub host: String,
    pub port: u16,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("api_base_url", &self.api_base_url)
            .field("host", &self.host)
            .field("port", &self.port)
            .finish()
    }
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Result<Self, ConfigError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }

        Ok(Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            host: "0.0.0.0".to_string(),
            port: 3000,
        })
    }

    pub fn from_args(args: Args) -> Result<Self, ConfigError> {
        let config = Self::new(args.api_key)?;
        Ok(Self {
            model: args.model,
            api_base_url: args.api_base_url.trim_end_matches('/').to_string(),
            host: args.host,
            port: args.port,
            ..config
        })
    }

    #[cfg(test)]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    #[cfg(test)]
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
