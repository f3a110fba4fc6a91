use std::{fs::create_dir_all, path::PathBuf};
use tracing_subscriber::layer::SubscriberExt;

#[derive(Clone, Debug)]
pub struct LoggingConfig {
    pub level: tracing::Level,
    pub logging_enabled: bool,
    pub logger_name: String,
    pub log_dir: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: tracing::Level::INFO,
            logging_enabled: true,
            logger_name: "relevance_classifier".to_string(),
            log_dir: PathBuf::from("relevance_classifier_logs"),
        }
    }
}

impl LoggingConfig {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn logging_enabled(mut self, enabled: bool) -> Self {
        self.logging_enabled = enabled;
        self
    }

    pub fn with_level(mut self, level: tracing::Level) -> Self {
        self.level = level;
        self
    }

    /// Installs the global subscriber with a terminal layer and an hourly
    /// rolling file layer. Safe to call more than once; later calls are
    /// no-ops once a subscriber is installed.
    pub fn load_logger(&self) -> crate::Result<()> {
        if !self.logging_enabled {
            return Ok(());
        }

        create_dir_all(&self.log_dir)?;

        let file_appender = tracing_appender::rolling::RollingFileAppender::builder()
            .rotation(tracing_appender::rolling::Rotation::HOURLY)
            .max_log_files(6)
            .filename_prefix(&self.logger_name)
            .filename_suffix("log")
            .build(&self.log_dir)?;

        let filter = tracing_subscriber::EnvFilter::builder()
            .with_default_directive(self.level.into())
            .from_env_lossy();

        let file_layer = tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(file_appender);

        let terminal_layer = tracing_subscriber::fmt::layer()
            .with_ansi(true)
            .with_writer(std::io::stderr);

        let subscriber = tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .with(terminal_layer);

        // A subscriber may already be set when tests build several jobs.
        let _ = tracing::subscriber::set_global_default(subscriber);
        Ok(())
    }
}
