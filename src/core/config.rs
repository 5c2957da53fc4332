use std::env;
use std::time::Duration;

/// Model used when OPENAI_MODEL is not set.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub openai_api_key: String,
    pub openai_org_id: Option<String>,
    pub openai_model: String,
    pub llm_timeout: Duration,
    pub bind_addr: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            openai_api_key: env::var("OPENAI_API_KEY")
                .map_err(|e| format!("OPENAI_API_KEY: {}", e))?,
            openai_org_id: env::var("OPENAI_ORG_ID").ok(),
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            llm_timeout: Self::timeout_from_env()?,
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
        })
    }

    fn timeout_from_env() -> Result<Duration, String> {
        let raw = match env::var("LLM_TIMEOUT_SECS") {
            Ok(raw) => raw,
            Err(_) => return Ok(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        };
        let secs: f64 = raw
            .parse()
            .map_err(|e| format!("LLM_TIMEOUT_SECS: {}", e))?;
        if !secs.is_finite() || secs <= 0.0 {
            return Err(format!("LLM_TIMEOUT_SECS: must be positive, got {}", raw));
        }
        Ok(Duration::from_secs_f64(secs))
    }
}
