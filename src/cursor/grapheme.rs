//! 字符分类
//!
//! Cursor 的最小单位是一个扩展字素簇（extended grapheme cluster），
//! 例如 `"e\u{301}"` 与 `"\r\n"` 都只算一个字符。

use std::fmt;

/// `char` 上的字符分类扩展
pub trait CharClass {
    /// 换行符：U+000A..=U+000D、U+0085、U+2028、U+2029
    fn is_newline(self) -> bool;

    /// 同行空白：空白但不是换行（空格、制表符等）
    fn is_same_line_whitespace(self) -> bool;
}

impl CharClass for char {
    #[inline]
    fn is_newline(self) -> bool {
        matches!(self, '\n' | '\u{000B}' | '\u{000C}' | '\r' | '\u{0085}' | '\u{2028}' | '\u{2029}')
    }

    #[inline]
    fn is_same_line_whitespace(self) -> bool {
        self.is_whitespace() && !self.is_newline()
    }
}

/// 源文本中的一个字符（字素簇），借用自源文本
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grapheme<'a>(&'a str);

impl<'a> Grapheme<'a> {
    pub(crate) fn new(cluster: &'a str) -> Self {
        debug_assert!(!cluster.is_empty());
        Self(cluster)
    }

    /// 字素簇的原始文本
    pub fn as_str(self) -> &'a str {
        self.0
    }

    /// UTF-8 字节长度
    pub fn len_utf8(self) -> usize {
        self.0.len()
    }

    /// 字素簇只由一个码点构成时返回该码点
    pub fn as_char(self) -> Option<char> {
        let mut chars = self.0.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }

    /// 字素簇是否恰好是字符 `c`
    ///
    /// 逐码点比较，不做 Unicode 规范化：`"e\u{301}"` 不等于 `'\u{e9}'`。
    /// 需要规范等价的调用者应先对输入做 NFC 规范化。
    #[inline]
    pub fn is(self, c: char) -> bool {
        self.as_char() == Some(c)
    }

    /// 字素簇是否属于给定集合
    pub fn is_in(self, set: &[char]) -> bool {
        self.as_char().is_some_and(|c| set.contains(&c))
    }

    /// 所有码点都满足谓词
    pub fn all(self, predicate: impl FnMut(char) -> bool) -> bool {
        self.0.chars().all(predicate)
    }

    /// 换行（`"\r\n"` 也算一个换行）
    pub fn is_newline(self) -> bool {
        self.0.chars().next().is_some_and(|c| c.is_newline())
    }

    /// 任意空白，包括换行（按首个码点判断，`" \u{301}"` 也算空白）
    pub fn is_whitespace(self) -> bool {
        self.0.chars().next().is_some_and(char::is_whitespace)
    }

    /// 同行空白
    pub fn is_same_line_whitespace(self) -> bool {
        self.is_whitespace() && !self.is_newline()
    }

    /// UTF-16 代码单元数
    pub(crate) fn len_utf16(self) -> usize {
        self.0.chars().map(char::len_utf16).sum()
    }
}

impl PartialEq<char> for Grapheme<'_> {
    fn eq(&self, other: &char) -> bool {
        self.is(*other)
    }
}

impl PartialEq<Grapheme<'_>> for char {
    fn eq(&self, other: &Grapheme<'_>) -> bool {
        other.is(*self)
    }
}

impl fmt::Display for Grapheme<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
