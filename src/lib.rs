//! textscan - 文本扫描游标
//!
//! 上层解析器的基础原语：在一段内存文本上逐字符前进，
//! 提供前瞻/回看、谓词驱动的消费、平衡感知的定界扫描和空白/换行处理。
//! 不做词法切分，也不解释扫描到的文本。
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cursor/    - Source、Position、Cursor 及其读取操作（纯逻辑，无 IO）
//! ├── config.rs  - 全局配置（日志级别）
//! └── logger.rs  - tracing-subscriber 初始化
//! ```
//!
//! # Quick Start
//!
//! ```
//! use textscan::{Cursor, Until};
//!
//! let mut cursor = Cursor::new("[link](https://example.com) tail");
//! cursor.read('[').unwrap();
//! let text = cursor.read_until(']').unwrap();
//! cursor.read('(').unwrap();
//! let url = cursor.read_until(Until::new(')').balance_against('(')).unwrap();
//!
//! assert_eq!(text, "link");
//! assert_eq!(url, "https://example.com");
//! assert_eq!(cursor.rest(), " tail");
//! ```

// 核心层（纯逻辑，无 IO）
pub mod cursor;

// 配置与日志
pub mod config;
pub mod logger;

// 重导出常用类型
pub use config::{Config, LogConfig, Phase};
pub use cursor::{
    CharClass, Cursor, Grapheme, Position, ScanError, ScanResult, Source, SourceLocation, Until,
};
pub use logger::{init_logger, LogFormat};

/// 初始化配置和日志系统
///
/// # Example
/// ```no_run
/// use textscan::{init_with_logger, Config};
///
/// init_with_logger(Config::default()).unwrap();
/// ```
pub fn init_with_logger(config: Config) -> std::io::Result<()> {
    config::init(config);
    logger::init_logger()
}
