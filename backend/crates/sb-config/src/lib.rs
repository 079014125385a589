mod config;
mod content_config;
mod email_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;


pub use config::Config;
pub use content_config::ContentConfig;
pub use email_config::EmailConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

use sb_core::DEFAULT_SUCCESS_DISPLAY_SECS;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

const DEFAULT_EMAIL_API_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";
const DEFAULT_CONTACT_EMAIL: &str = "info@sanjeevinibuilders.com";

const MIN_SUCCESS_DISPLAY_SECS: u64 = 1;
const MAX_SUCCESS_DISPLAY_SECS: u64 = 60;
