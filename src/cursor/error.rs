//! 扫描错误
//!
//! 只有一种错误：期望的字符或模式不在当前位置。
//! 错误不携带任何信息，需要恢复的调用者应在尝试前自行保存位置。

/// 扫描失败
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, thiserror::Error)]
#[error("scan failure")]
pub struct ScanError;

/// 扫描结果类型
pub type ScanResult<T> = std::result::Result<T, ScanError>;
