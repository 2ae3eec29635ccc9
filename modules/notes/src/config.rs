use std::env;

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const HOST: &str = "NOTES_SERVICE_HOST";
    pub const PORT: &str = "NOTES_SERVICE_PORT";
    /// Set to "false" or "0" to start with an empty store.
    pub const SEED: &str = "NOTES_SEED";
}

/// Default values
pub mod defaults {
    pub const HOST: &str = "127.0.0.1";
    pub const PORT: u16 = 3000;
    pub const SEED: bool = true;
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub seed: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup(env_vars::HOST)
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| defaults::HOST.to_string());

        let port = lookup(env_vars::PORT)
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults::PORT);

        let seed = lookup(env_vars::SEED)
            .map(|v| parse_bool(&v).unwrap_or(defaults::SEED))
            .unwrap_or(defaults::SEED);

        Self { host, port, seed }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
