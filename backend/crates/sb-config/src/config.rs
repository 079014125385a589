use crate::{
    ConfigError, ConfigErrorResult, ContentConfig, EmailConfig, LoggingConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub email: EmailConfig,
    pub content: ContentConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for SB_CONFIG_DIR env var, else use ./.sb/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply SB_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: SB_CONFIG_DIR env var > ./.sb/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var("SB_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".sb"))
    }

    /// Validate all configuration.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.email.validate()?;
        self.content.validate()?;
        Ok(())
    }

    /// Absolute path of the project document override, if any.
    /// Relative paths resolve against the config directory.
    pub fn projects_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        let Some(path) = &self.content.projects_path else {
            return Ok(None);
        };

        let path = PathBuf::from(path);
        if path.is_absolute() {
            return Ok(Some(path));
        }

        Ok(Some(Self::config_dir()?.join(path)))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (never logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
        info!(
            "  email: {} (service: {}, template: {}, to: {}, credentials: {})",
            self.email.api_url,
            Self::or_unset(&self.email.service_id),
            Self::or_unset(&self.email.template_id),
            self.email.contact_email,
            if self.email.is_configured() {
                "set"
            } else {
                "missing"
            }
        );
        info!(
            "  content: projects={}, success banner={}s",
            self.content.projects_path.as_deref().unwrap_or("<bundled>"),
            self.content.success_display_secs
        );
    }

    fn or_unset(value: &str) -> &str {
        if value.is_empty() { "<unset>" } else { value }
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("SB_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("SB_SERVER_PORT", &mut self.server.port);

        // Logging
        Self::apply_env_parse("SB_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("SB_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("SB_LOG_FILE", &mut self.logging.file);

        // Email
        Self::apply_env_string("SB_EMAIL_API_URL", &mut self.email.api_url);
        Self::apply_env_string("SB_EMAIL_PUBLIC_KEY", &mut self.email.public_key);
        Self::apply_env_option_string("SB_EMAIL_ACCESS_TOKEN", &mut self.email.access_token);
        Self::apply_env_string("SB_EMAIL_SERVICE_ID", &mut self.email.service_id);
        Self::apply_env_string("SB_EMAIL_TEMPLATE_ID", &mut self.email.template_id);
        Self::apply_env_string("SB_CONTACT_EMAIL", &mut self.email.contact_email);

        // Content
        Self::apply_env_option_string("SB_PROJECTS_PATH", &mut self.content.projects_path);
        Self::apply_env_parse(
            "SB_SUCCESS_DISPLAY_SECS",
            &mut self.content.success_display_secs,
        );
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
