//! 文本扫描游标
//!
//! - `source`: 不可变源文本与不透明位置
//! - `grapheme`: 字符（字素簇）与字符分类
//! - `cursor`: 读取/前瞻/跳过操作
//! - `until`: 定界扫描的停止规则
//! - `location`: 行列换算
//! - `error`: 唯一的扫描错误

pub mod cursor;
pub mod error;
pub mod grapheme;
pub mod location;
pub mod source;
pub mod until;

pub use cursor::Cursor;
pub use error::{ScanError, ScanResult};
pub use grapheme::{CharClass, Grapheme};
pub use location::SourceLocation;
pub use source::{Position, Source};
pub use until::Until;
