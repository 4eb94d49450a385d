//! # Logging Setup / 日志初始化
//!
//! Installs a `tracing-subscriber` formatter writing to stderr, so command
//! output on stdout stays machine-readable. `RUST_LOG` takes precedence over
//! the configured default level.
//!
//! 安装写入 stderr 的 `tracing-subscriber` 格式化器，使 stdout 上的命令输出保持
//! 可被机器读取。`RUST_LOG` 优先于配置的默认级别。

use anyhow::{anyhow, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, registry, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LEVEL: &str = "warn";

#[derive(Debug)]
pub struct LoggerBuilder {
    default_level: String,
    with_target: bool,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    pub fn new() -> Self {
        LoggerBuilder {
            default_level: DEFAULT_LEVEL.into(),
            with_target: false,
        }
    }

    pub fn default_level(mut self, level: impl Into<String>) -> Self {
        self.default_level = level.into();
        self
    }

    pub fn with_target(mut self, enabled: bool) -> Self {
        self.with_target = enabled;
        self
    }

    /// Installs the subscriber. Fails if the level is invalid or a global
    /// subscriber is already set.
    pub fn init(self) -> Result<()> {
        let filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => EnvFilter::try_new(&self.default_level)
                .map_err(|e| anyhow!("invalid log level '{}': {}", self.default_level, e))?,
        };

        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(self.with_target);

        registry()
            .with(filter)
            .with(stderr_layer)
            .try_init()
            .map_err(|e| anyhow!("failed to install logger: {}", e))?;
        Ok(())
    }
}
