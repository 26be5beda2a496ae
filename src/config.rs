//! 全局配置系统
//!
//! 提供线程安全的全局配置单例，目前只承载日志级别。
//! Cursor 本身从不读取全局配置，配置只影响 `logger` 的初始化。
//!
//! # 使用示例
//! ```
//! use textscan::config::{config, init, Config, LogConfig};
//! use tracing::Level;
//!
//! let cfg = Config {
//!     log: LogConfig {
//!         global: Level::DEBUG,
//!         ..Default::default()
//!     },
//! };
//!
//! init(cfg);
//! assert_eq!(config().log.global, Level::DEBUG);
//! ```

use once_cell::sync::OnceCell;
use textscan_config::{LogLevel, LogSettings};
use tracing::Level;

pub use textscan_config::Phase;

static GLOBAL_CONFIG: OnceCell<Config> = OnceCell::new();

/// 初始化全局配置（必须在任何操作前调用一次）
///
/// # Panics
/// 如果配置已经初始化，会 panic
pub fn init(config: Config) {
    GLOBAL_CONFIG
        .set(config)
        .expect("Config already initialized");
}

/// 尝试初始化全局配置
///
/// 已经初始化过时返回 `false`，原配置保持不变
pub fn try_init(config: Config) -> bool {
    GLOBAL_CONFIG.set(config).is_ok()
}

/// 获取全局配置引用
///
/// # Panics
/// 如果配置未初始化，会 panic
pub fn config() -> &'static Config {
    GLOBAL_CONFIG.get().expect("Config not initialized")
}

/// 检查配置是否已初始化
pub fn is_initialized() -> bool {
    GLOBAL_CONFIG.get().is_some()
}

/// 全局配置结构
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// 日志配置
    pub log: LogConfig,
}

/// 日志配置
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// 全局默认日志级别
    pub global: Level,
    /// Source 日志级别（None 表示使用 global）
    pub source: Option<Level>,
    /// Cursor 日志级别
    pub cursor: Option<Level>,
}

impl LogConfig {
    /// 获取指定阶段的实际日志级别
    ///
    /// 如果该阶段有特定配置则返回特定级别，否则返回全局级别
    pub fn level_for(&self, phase: Phase) -> Level {
        let specific = match phase {
            Phase::Source => self.source,
            Phase::Cursor => self.cursor,
        };
        specific.unwrap_or(self.global)
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            global: Level::INFO,
            source: None,
            cursor: None,
        }
    }
}

impl From<&LogSettings> for LogConfig {
    fn from(settings: &LogSettings) -> Self {
        Self {
            global: to_level(settings.global),
            source: settings.source.map(to_level),
            cursor: settings.cursor.map(to_level),
        }
    }
}

fn to_level(level: LogLevel) -> Level {
    match level {
        LogLevel::Trace => Level::TRACE,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Info => Level::INFO,
        LogLevel::Warn => Level::WARN,
        LogLevel::Error => Level::ERROR,
    }
}
