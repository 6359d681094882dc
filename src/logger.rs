use std::{
    fs::{self, File},
    io,
};

use tracing_subscriber::{
    fmt::{self},
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
    Layer, Registry,
};

use crate::config::{LoggerConfig, LoggerFormat};

#[derive(Debug, thiserror::Error)]
pub enum InitLoggerError {
    #[error("Failed to prepare the log file.")]
    LogFile(#[from] io::Error),

    #[error("A global logger is already installed.")]
    AlreadyInstalled(#[from] TryInitError),
}

/// Installs the global subscriber. Diagnostics go to stderr, optionally
/// mirrored as JSON into `opts.log_file`.
pub fn init_logger(opts: &LoggerConfig) -> Result<(), InitLoggerError> {
    let env_filter = tracing_subscriber::EnvFilter::new(opts.level.clone());

    let stderr_layer = match opts.format {
        LoggerFormat::Pretty => fmt::Layer::default()
            .pretty()
            .with_writer(io::stderr)
            .boxed(),
        LoggerFormat::Json => fmt::Layer::default()
            .json()
            .with_writer(io::stderr)
            .boxed(),
        LoggerFormat::Compact => fmt::Layer::default()
            .compact()
            .with_writer(io::stderr)
            .boxed(),
    };

    let file_layer = match &opts.log_file {
        Some(log_file) => {
            if log_file.exists() {
                fs::remove_file(log_file)?;
            }
            if let Some(parent) = log_file.parent() {
                fs::create_dir_all(parent)?;
            }
            let writer = File::create(log_file)?;
            Some(fmt::Layer::default().json().with_writer(writer))
        }
        None => None,
    };

    match file_layer {
        Some(file_layer) => Registry::default()
            .with(stderr_layer)
            .with(file_layer)
            .with(env_filter)
            .try_init()?,
        None => Registry::default()
            .with(stderr_layer)
            .with(env_filter)
            .try_init()?,
    }

    Ok(())
}
