use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_SESSION_COOKIE_NAME, DEFAULT_SESSION_MAX_AGE_DAYS,
    MAX_SESSION_MAX_AGE_DAYS, MIN_SESSION_MAX_AGE_DAYS,
};

use serde::Deserialize;

const SECONDS_PER_DAY: u64 = 60 * 60 * 24;

/// Transport of the session token between server and client
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub cookie_name: String,
    pub max_age_days: u32,
    /// Add the `Secure` attribute (HTTPS-only deployments)
    pub secure: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: String::from(DEFAULT_SESSION_COOKIE_NAME),
            max_age_days: DEFAULT_SESSION_MAX_AGE_DAYS,
            secure: false,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.cookie_name.is_empty() {
            return Err(ConfigError::invalid("session", "session.cookie_name cannot be empty"));
        }

        // RFC 6265 cookie-name is an RFC 7230 token
        let is_token_char = |c: char| c.is_ascii_alphanumeric() || "!#$%&'*+-.^_`|~".contains(c);
        if !self.cookie_name.chars().all(is_token_char) {
            return Err(ConfigError::invalid("session", format!(
                "session.cookie_name contains invalid characters: {}",
                self.cookie_name
            )));
        }

        if !(MIN_SESSION_MAX_AGE_DAYS..=MAX_SESSION_MAX_AGE_DAYS).contains(&self.max_age_days) {
            return Err(ConfigError::invalid("session", format!(
                "session.max_age_days must be {}-{}, got {}",
                MIN_SESSION_MAX_AGE_DAYS, MAX_SESSION_MAX_AGE_DAYS, self.max_age_days
            )));
        }

        Ok(())
    }

    pub fn max_age_secs(&self) -> u64 {
        u64::from(self.max_age_days) * SECONDS_PER_DAY
    }
}
