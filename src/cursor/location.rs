//! 源代码位置追踪
//!
//! 把不透明的 `Position` 换算成多坐标系统：
//! - line/column: 人类可读的错误显示（1-based，按字素计数）
//! - byte_offset: 切片和文件跳转（0-based）
//! - utf16_column: LSP协议通信（0-based，UTF-16单元）

use std::fmt;

use super::grapheme::Grapheme;

/// 源代码位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    /// 行号，1-based
    pub line: usize,
    /// 列号，1-based，字素计数
    pub column: usize,
    /// 字节偏移，0-based，UTF-8编码
    pub byte_offset: usize,
    /// 行内UTF-16偏移，0-based，用于LSP Position.character
    pub utf16_column: usize,
}

impl SourceLocation {
    /// 创建新位置
    pub fn new(line: usize, column: usize, byte_offset: usize, utf16_column: usize) -> Self {
        Self {
            line,
            column,
            byte_offset,
            utf16_column,
        }
    }

    /// 文本起始位置
    pub fn start() -> Self {
        Self::new(1, 1, 0, 0)
    }

    /// 越过一个字符
    ///
    /// 任何换行字素（包括 `"\r\n"`）都只前进一行
    pub fn advance(&mut self, grapheme: Grapheme<'_>) {
        if grapheme.is_newline() {
            self.line += 1;
            self.column = 1;
            self.utf16_column = 0;
        } else {
            self.column += 1;
            self.utf16_column += grapheme.len_utf16();
        }

        self.byte_offset += grapheme.len_utf8();
    }
}

impl Default for SourceLocation {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_start() {
        let loc = SourceLocation::start();
        assert_eq!(loc.line, 1);
        assert_eq!(loc.column, 1);
        assert_eq!(loc.byte_offset, 0);
        assert_eq!(loc.utf16_column, 0);
        assert_eq!(loc, SourceLocation::default());
    }

    #[test]
    fn test_location_advance_ascii() {
        let mut loc = SourceLocation::start();

        loc.advance(Grapheme::new("a"));
        assert_eq!(loc.column, 2);
        assert_eq!(loc.byte_offset, 1);
        assert_eq!(loc.utf16_column, 1);
    }

    #[test]
    fn test_location_advance_newline() {
        let mut loc = SourceLocation::start();

        loc.advance(Grapheme::new("a"));
        loc.advance(Grapheme::new("\n"));

        assert_eq!(loc.line, 2);
        assert_eq!(loc.column, 1);
        assert_eq!(loc.utf16_column, 0);
        assert_eq!(loc.byte_offset, 2);
    }

    #[test]
    fn test_location_advance_crlf() {
        let mut loc = SourceLocation::start();

        loc.advance(Grapheme::new("\r\n"));
        assert_eq!(loc.line, 2);
        assert_eq!(loc.byte_offset, 2);
    }

    #[test]
    fn test_location_advance_emoji() {
        let mut loc = SourceLocation::start();

        // Emoji：4字节UTF-8，2个UTF-16单元（代理对）
        loc.advance(Grapheme::new("🎉"));
        assert_eq!(loc.column, 2);
        assert_eq!(loc.byte_offset, 4);
        assert_eq!(loc.utf16_column, 2);
    }

    #[test]
    fn test_location_display() {
        let loc = SourceLocation::new(3, 7, 50, 6);
        assert_eq!(loc.to_string(), "3:7");
    }
}
