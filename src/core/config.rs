use std::env;

use tracing_subscriber::EnvFilter;

use crate::errors::ServiceError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub format: LogFormat,
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Json,
            level: "info".to_string(),
        }
    }
}

impl LogConfig {
    /// # Errors
    ///
    /// Returns `ServiceError::Config` if `LOG_FORMAT` or `LOG_LEVEL` is invalid.
    pub fn from_env() -> Result<Self, ServiceError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Config` if `LOG_FORMAT` is neither `json` nor `text`,
    /// or if `LOG_LEVEL` is not a valid filter directive.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServiceError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let format = match lookup("LOG_FORMAT").as_deref().map(str::trim) {
            None | Some("") => LogFormat::default(),
            Some(raw) if raw.eq_ignore_ascii_case("json") => LogFormat::Json,
            Some(raw) if raw.eq_ignore_ascii_case("text") => LogFormat::Text,
            Some(other) => {
                return Err(ServiceError::Config(format!(
                    "LOG_FORMAT: unsupported value {other:?}, expected \"json\" or \"text\""
                )));
            }
        };

        let level = lookup("LOG_LEVEL")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| "info".to_string());

        if let Err(e) = EnvFilter::try_new(&level) {
            return Err(ServiceError::Config(format!(
                "LOG_LEVEL: invalid filter directive {level:?}: {e}"
            )));
        }

        Ok(Self { format, level })
    }
}
