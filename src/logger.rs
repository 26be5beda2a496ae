//! 日志系统初始化
//!
//! 基于 `tracing` 和 `tracing-subscriber` 实现按组件的日志控制。
//!
//! # 使用示例
//! ```no_run
//! use textscan::config::{init, Config};
//! use textscan::logger::init_logger;
//!
//! init(Config::default());
//! init_logger().unwrap();
//! ```

use std::io;
use tracing_subscriber::{
    filter::Targets, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer,
};

use crate::config::{self, Phase};

/// Cursor 操作的日志目标
pub const CURSOR_TARGET: &str = "textscan::cursor";
/// 位置计算的日志目标
pub const SOURCE_TARGET: &str = "textscan::source";

/// 日志输出格式
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// 彩色格式化（开发使用）
    #[default]
    Pretty,
    /// 紧凑格式
    Compact,
    /// JSON 格式（工具集成）
    Json,
}

/// 初始化日志系统
///
/// 必须在 `config::init()` 之后调用。
/// 根据配置中的日志级别设置各组件的过滤。
pub fn init_logger() -> io::Result<()> {
    init_with_format(LogFormat::default())
}

/// 使用指定格式初始化日志系统
pub fn init_with_format(format: LogFormat) -> io::Result<()> {
    init_with_file(format, None::<&str>)
}

/// 使用文件输出初始化日志系统
///
/// # Arguments
/// * `format` - 日志格式
/// * `file` - 日志文件路径，None 表示只输出到控制台
///
/// # Panics
/// 配置未初始化时 panic
pub fn init_with_file<P: AsRef<std::path::Path>>(
    format: LogFormat,
    file: Option<P>,
) -> io::Result<()> {
    if !config::is_initialized() {
        panic!("Config must be initialized before logger");
    }

    let targets = targets_from_config(&config::config().log);

    if let Some(path) = file {
        let file_handle = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;

        let stdout_layer = create_format_layer(format, io::stdout).with_filter(targets.clone());

        // 文件层不带颜色
        let file_layer = fmt::layer()
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(file_handle))
            .with_filter(targets);

        tracing_subscriber::registry()
            .with(stdout_layer)
            .with(file_layer)
            .init();
    } else {
        let stdout_layer = create_format_layer(format, io::stdout).with_filter(targets);
        tracing_subscriber::registry().with(stdout_layer).init();
    }

    Ok(())
}

/// 根据配置构建各组件的目标过滤器
fn targets_from_config(cfg: &config::LogConfig) -> Targets {
    Targets::new()
        .with_default(cfg.global)
        .with_target(SOURCE_TARGET, cfg.level_for(Phase::Source))
        .with_target(CURSOR_TARGET, cfg.level_for(Phase::Cursor))
}

/// 根据格式创建 formatter layer
fn create_format_layer<W, F>(
    format: LogFormat,
    make_writer: F,
) -> Box<dyn Layer<tracing_subscriber::Registry> + Send + Sync>
where
    W: io::Write + 'static,
    F: Fn() -> W + Send + Sync + 'static,
{
    match format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(false)
            .without_time()
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_writer(make_writer)
            .boxed(),
    }
}

/// 为当前测试初始化简单日志（仅打印到控制台）
#[cfg(test)]
pub fn init_test_logger() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

/// 检查指定组件的日志是否启用（TRACE 级别）
#[inline]
pub fn is_enabled(phase: Phase) -> bool {
    match phase {
        Phase::Source => tracing::enabled!(target: "textscan::source", tracing::Level::TRACE),
        Phase::Cursor => tracing::enabled!(target: "textscan::cursor", tracing::Level::TRACE),
    }
}

/// 在作用域内收集日志输出，返回格式化后的文本
#[cfg(test)]
pub(crate) fn capture_logs(level: tracing::Level, f: impl FnOnce()) -> String {
    use std::sync::{Arc, Mutex};

    #[derive(Clone)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if let Ok(mut bytes) = self.0.lock() {
                bytes.extend_from_slice(buf);
            }
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    let capture = Capture(Arc::new(Mutex::new(Vec::new())));
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_target(true)
        .without_time()
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, f);

    let bytes = capture.0.lock().map(|bytes| bytes.clone()).unwrap_or_default();
    String::from_utf8_lossy(&bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogConfig;
    use tracing::Level;

    #[test]
    fn test_log_format_default() {
        assert_eq!(LogFormat::default(), LogFormat::Pretty);
    }

    #[test]
    fn test_targets_match_phase_names() {
        assert_eq!(CURSOR_TARGET, Phase::Cursor.target());
        assert_eq!(SOURCE_TARGET, Phase::Source.target());
    }

    #[test]
    fn test_targets_from_config() {
        let cfg = LogConfig {
            global: Level::WARN,
            source: None,
            cursor: Some(Level::TRACE),
        };
        let targets = targets_from_config(&cfg);

        assert!(targets.would_enable(CURSOR_TARGET, &Level::TRACE));
        assert!(!targets.would_enable(SOURCE_TARGET, &Level::INFO));
        assert!(targets.would_enable(SOURCE_TARGET, &Level::WARN));
    }

    #[test]
    fn test_is_enabled_follows_configured_targets() {
        let cfg = LogConfig {
            global: Level::WARN,
            source: None,
            cursor: Some(Level::TRACE),
        };
        let subscriber = tracing_subscriber::registry().with(targets_from_config(&cfg));

        tracing::subscriber::with_default(subscriber, || {
            assert!(is_enabled(Phase::Cursor));
            assert!(!is_enabled(Phase::Source));
        });
    }

    #[test]
    fn test_is_enabled_silenced_cursor() {
        let cfg = LogConfig {
            global: Level::TRACE,
            source: None,
            cursor: Some(Level::ERROR),
        };
        let subscriber = tracing_subscriber::registry().with(targets_from_config(&cfg));

        tracing::subscriber::with_default(subscriber, || {
            assert!(!is_enabled(Phase::Cursor));
            assert!(is_enabled(Phase::Source));
        });
    }

    #[test]
    fn test_capture_logs_respects_level() {
        let output = capture_logs(Level::INFO, || {
            tracing::debug!(target: "textscan::cursor", "hidden");
            tracing::info!(target: "textscan::cursor", "shown");
        });
        assert!(output.contains("shown"));
        assert!(!output.contains("hidden"));
    }
}
