use std::sync::OnceLock;

use super::LogBuffer;

/// Logger configuration.
///
/// `env_filter` uses `env_logger` filter syntax (e.g. "info",
/// "bplot_states=debug,wgpu=warn"). When unset, `RUST_LOG` is consulted and
/// then `info` is used.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
    /// Number of records kept for the overlay console.
    pub console_capacity: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
            console_capacity: 512,
        }
    }
}

static BUFFER: OnceLock<LogBuffer> = OnceLock::new();

/// Installs the global logger and returns the shared console buffer.
///
/// Idempotent: later calls return the buffer created by the first one and
/// ignore their config.
pub fn init_logging(config: LoggingConfig) -> LogBuffer {
    BUFFER
        .get_or_init(|| {
            let buffer = LogBuffer::new(config.console_capacity);

            let mut builder = env_logger::Builder::new();
            match config.env_filter.or_else(|| std::env::var("RUST_LOG").ok()) {
                Some(filter) => {
                    builder.parse_filters(&filter);
                }
                None => {
                    builder.filter_level(log::LevelFilter::Info);
                }
            }
            builder.write_style(config.write_style);

            let terminal = builder.build();
            let max_level = terminal.filter();
            let tee = TeeLogger { terminal, console: buffer.clone() };

            match log::set_boxed_logger(Box::new(tee)) {
                Ok(()) => {
                    log::set_max_level(max_level);
                    log::debug!("logging initialized");
                }
                Err(_) => log::warn!("a global logger was already installed; console capture disabled"),
            }

            buffer
        })
        .clone()
}

/// Writes every accepted record to the terminal and to the console buffer.
struct TeeLogger {
    terminal: env_logger::Logger,
    console: LogBuffer,
}

impl log::Log for TeeLogger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        self.terminal.enabled(metadata)
    }

    fn log(&self, record: &log::Record<'_>) {
        if !self.terminal.matches(record) {
            return;
        }
        self.terminal.log(record);
        self.console.push(record.level(), record.args().to_string());
    }

    fn flush(&self) {
        self.terminal.flush();
    }
}
