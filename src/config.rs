use std::{env, path::PathBuf, str::FromStr, sync::OnceLock};

use tracing::error;

#[derive(Debug, Clone)]
pub struct Config {
    pub logger: LoggerConfig,
}

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub enable: bool,
    pub format: LoggerFormat,
    pub level: String,
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LoggerFormat {
    Pretty,
    Json,
    Compact,
}

impl FromStr for LoggerFormat {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(LoggerFormat::Json),
            "pretty" => Ok(LoggerFormat::Pretty),
            "compact" => Ok(LoggerFormat::Compact),
            _ => Err("invalid logger format"),
        }
    }
}

pub fn config() -> &'static Config {
    static CONFIG: OnceLock<Config> = OnceLock::new();

    CONFIG.get_or_init(|| read_config(|name| env::var(name).ok()))
}

pub(crate) fn read_config(var: impl Fn(&str) -> Option<String>) -> Config {
    let enable = match var("MOZILLA_BROWSER_LOGGER_ENABLE") {
        Some(enable) => bool_env_from_str(&enable).unwrap_or_else(|| {
            error!("Invalid value provided for \"MOZILLA_BROWSER_LOGGER_ENABLE\". Falling back to default value true.");
            true
        }),
        None => true,
    };

    let level = var("MOZILLA_BROWSER_LOGGER_LEVEL").unwrap_or_else(|| "warn".to_string());

    let format = match var("MOZILLA_BROWSER_LOGGER_FORMAT") {
        Some(format) => LoggerFormat::from_str(&format).unwrap_or_else(|_| {
            error!("Invalid value provided for \"MOZILLA_BROWSER_LOGGER_FORMAT\". Falling back to default value \"compact\".");
            LoggerFormat::Compact
        }),
        None => LoggerFormat::Compact,
    };

    let log_file = var("MOZILLA_BROWSER_LOG_FILE")
        .filter(|path| !path.is_empty())
        .map(PathBuf::from);

    Config {
        logger: LoggerConfig {
            enable,
            format,
            level,
            log_file,
        },
    }
}

fn bool_env_from_str(s: &str) -> Option<bool> {
    match s {
        "1" | "true" => Some(true),
        "0" | "false" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn read(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        read_config(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults() {
        let config = read(&[]);
        assert!(config.logger.enable);
        assert_eq!(config.logger.level, "warn");
        assert_eq!(config.logger.format, LoggerFormat::Compact);
        assert_eq!(config.logger.log_file, None);
    }

    #[test]
    fn reads_logger_vars() {
        let config = read(&[
            ("MOZILLA_BROWSER_LOGGER_ENABLE", "0"),
            ("MOZILLA_BROWSER_LOGGER_LEVEL", "debug,mozilla_browser=trace"),
            ("MOZILLA_BROWSER_LOGGER_FORMAT", "json"),
            ("MOZILLA_BROWSER_LOG_FILE", "/tmp/mozilla_browser.log"),
        ]);
        assert!(!config.logger.enable);
        assert_eq!(config.logger.level, "debug,mozilla_browser=trace");
        assert_eq!(config.logger.format, LoggerFormat::Json);
        assert_eq!(
            config.logger.log_file,
            Some(PathBuf::from("/tmp/mozilla_browser.log"))
        );
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = read(&[
            ("MOZILLA_BROWSER_LOGGER_ENABLE", "maybe"),
            ("MOZILLA_BROWSER_LOGGER_FORMAT", "xml"),
            ("MOZILLA_BROWSER_LOG_FILE", ""),
        ]);
        assert!(config.logger.enable);
        assert_eq!(config.logger.format, LoggerFormat::Compact);
        assert_eq!(config.logger.log_file, None);
    }
}
