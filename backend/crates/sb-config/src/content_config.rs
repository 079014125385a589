use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_SUCCESS_DISPLAY_SECS, MAX_SUCCESS_DISPLAY_SECS,
    MIN_SUCCESS_DISPLAY_SECS,
};

use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Project document to serve instead of the bundled one
    pub projects_path: Option<String>,
    /// Seconds the contact success banner stays visible
    pub success_display_secs: u64,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            projects_path: None,
            success_display_secs: DEFAULT_SUCCESS_DISPLAY_SECS,
        }
    }
}

impl ContentConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.success_display_secs < MIN_SUCCESS_DISPLAY_SECS
            || self.success_display_secs > MAX_SUCCESS_DISPLAY_SECS
        {
            return Err(ConfigError::content(format!(
                "content.success_display_secs must be {}-{}, got {}",
                MIN_SUCCESS_DISPLAY_SECS, MAX_SUCCESS_DISPLAY_SECS, self.success_display_secs
            )));
        }

        if let Some(path) = &self.projects_path
            && path.trim().is_empty()
        {
            return Err(ConfigError::content("content.projects_path cannot be empty"));
        }

        Ok(())
    }

    pub fn success_display(&self) -> Duration {
        Duration::from_secs(self.success_display_secs)
    }
}
