//! 文本扫描游标
//!
//! 在一段不可变文本上逐字符前进，提供前瞻/回看、谓词驱动的消费、
//! 平衡感知的定界扫描以及空白/换行处理。
//!
//! 回溯完全由调用者管理：尝试前用 `checkpoint()` 保存位置，失败后 `restore()`。
//! 各操作失败时的位置不尽相同，见各方法文档。

use std::ops::Range;

use tracing::trace;

use super::error::{ScanError, ScanResult};
use super::grapheme::Grapheme;
use super::location::SourceLocation;
use super::source::{Position, Source};
use super::until::Until;

/// 文本扫描游标
///
/// 持有对源文本的只读借用和一个可变的当前位置。
/// `clone()` 只复制位置，两份游标共享同一段文本。
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    source: Source<'a>,
    index: Position,
}

impl<'a> Cursor<'a> {
    /// 在文本起始处创建游标
    pub fn new(text: &'a str) -> Self {
        Self::from_source(Source::new(text))
    }

    pub fn from_source(source: Source<'a>) -> Self {
        Self {
            source,
            index: source.start(),
        }
    }

    pub fn source(&self) -> Source<'a> {
        self.source
    }

    /// 当前位置
    pub fn position(&self) -> Position {
        self.index
    }

    /// 当前位置的行列信息
    pub fn location(&self) -> SourceLocation {
        self.source.location_of(self.index)
    }

    pub fn is_at_end(&self) -> bool {
        self.index == self.source.end()
    }

    /// 当前字符，文本末尾为 `None`
    pub fn current(&self) -> Option<Grapheme<'a>> {
        self.source.grapheme_at(self.index)
    }

    /// 当前字符是否恰好是 `c`
    pub fn current_is(&self, c: char) -> bool {
        self.current().is_some_and(|g| g.is(c))
    }

    /// 当前位置之前的字符，位于起始处时为 `None`
    pub fn previous(&self) -> Option<Grapheme<'a>> {
        if self.index == self.source.start() {
            return None;
        }
        self.source.grapheme_at(self.source.position_before(self.index))
    }

    /// 当前字符之后的字符，后面已没有字符时为 `None`
    pub fn next_character(&self) -> Option<Grapheme<'a>> {
        if self.is_at_end() {
            return None;
        }
        self.source.grapheme_at(self.source.position_after(self.index))
    }

    /// 同一源文本中两个位置之间的子串
    ///
    /// # Panics
    /// `range.start > range.end` 时 panic
    pub fn characters(&self, range: Range<Position>) -> &'a str {
        self.source.slice(range)
    }

    /// 从起始处到当前位置的文本
    pub fn consumed(&self) -> &'a str {
        self.source.slice(self.source.start()..self.index)
    }

    /// 从当前位置到末尾的文本
    pub fn rest(&self) -> &'a str {
        self.source.slice(self.index..self.source.end())
    }

    // ==================== 定位 ====================

    /// 前进 `count` 个字符，越过末尾时停在 `end`
    pub fn advance(&mut self, count: usize) {
        for _ in 0..count {
            if self.is_at_end() {
                break;
            }
            self.index = self.source.position_after(self.index);
        }
    }

    /// 后退一个字符，位于起始处时什么也不做
    pub fn rewind(&mut self) {
        self.index = self.source.position_before(self.index);
    }

    /// 移动到指定位置，超出范围的位置被约束到 `[start, end]`
    pub fn move_to(&mut self, position: Position) {
        self.index = self.source.clamp(position);
    }

    /// 保存当前位置
    pub fn checkpoint(&self) -> Position {
        self.index
    }

    /// 回到保存的位置
    pub fn restore(&mut self, checkpoint: Position) {
        self.move_to(checkpoint);
    }

    /// 尝试一组读取，失败时回到尝试前的位置
    ///
    /// ```
    /// use textscan::Cursor;
    ///
    /// let mut cursor = Cursor::new("ab");
    /// let result = cursor.attempt(|c| {
    ///     c.read('a')?;
    ///     c.read('x')
    /// });
    /// assert!(result.is_err());
    /// assert!(cursor.current_is('a'));
    /// ```
    pub fn attempt<T>(&mut self, f: impl FnOnce(&mut Self) -> ScanResult<T>) -> ScanResult<T> {
        let saved = self.checkpoint();
        let result = f(self);
        if result.is_err() {
            trace!(target: "textscan::cursor", restored = saved.byte_offset(), "Attempt failed, restoring");
            self.restore(saved);
        }
        result
    }

    // ==================== 不消费的检查 ====================

    /// 检查当前字符是否匹配（不消费）
    pub fn check(&self, expected: char) -> bool {
        self.current_is(expected)
    }

    /// 检查当前字符是否在集合中（不消费）
    pub fn check_in(&self, set: &[char]) -> bool {
        self.current().is_some_and(|g| g.is_in(set))
    }

    /// 当前字符匹配时消费它
    ///
    /// Returns true if matched and consumed
    pub fn eat(&mut self, expected: char) -> bool {
        if self.check(expected) {
            self.advance(1);
            true
        } else {
            false
        }
    }

    // ==================== 读取 ====================

    /// 读取一个期望的字符
    ///
    /// 位于末尾或当前字符不是 `expected` 时失败，位置不变。
    pub fn read(&mut self, expected: char) -> ScanResult<()> {
        if self.eat(expected) {
            Ok(())
        } else {
            Err(self.fail("read"))
        }
    }

    /// 读取到定界符为止
    ///
    /// 成功时消费定界符，返回起点到定界符之前的子串。
    /// 提供了平衡字符时，每遇到一个开字符计数加一，每遇到一个未在计数为零时
    /// 出现的定界符计数减一，只有计数为零时的定界符才会结束扫描。
    ///
    /// 被同行空白（不允许空白时）或换行（不允许换行时）挡住、或文本耗尽时：
    /// 必须找到定界符则失败，位置停在被挡住的地方而不是回到起点；
    /// 否则返回已扫描的部分，不消费任何定界符。
    pub fn read_until(&mut self, until: impl Into<Until>) -> ScanResult<&'a str> {
        let until = until.into();
        let start = self.index;
        let mut balance: isize = 0;

        while let Some(current) = self.current() {
            if current.is(until.delimiter()) && balance == 0 {
                let text = self.characters(start..self.index);
                self.advance(1);
                return Ok(text);
            }

            if !until.allows_whitespace() && current.is_same_line_whitespace() {
                break;
            }

            if !until.allows_line_breaks() && current.is_newline() {
                break;
            }

            if let Some(opening) = until.balancing() {
                if current.is(opening) {
                    balance += 1;
                }

                if current.is(until.delimiter()) {
                    balance -= 1;
                }
            }

            self.advance(1);
        }

        if until.is_required() {
            return Err(self.fail("read_until"));
        }

        Ok(self.characters(start..self.index))
    }

    /// 读取连续的 `c`，返回个数（可能为 0），从不失败
    pub fn read_count(&mut self, c: char) -> usize {
        let mut count = 0;
        while self.eat(c) {
            count += 1;
        }
        count
    }

    /// 读取满足谓词的字符，最多 `max` 个（`None` 为不限）
    ///
    /// 一个都没有匹配时失败，位置不变。
    pub fn read_characters(
        &mut self,
        mut predicate: impl FnMut(Grapheme<'a>) -> bool,
        max: Option<usize>,
    ) -> ScanResult<&'a str> {
        let start = self.index;
        let limit = max.unwrap_or(usize::MAX);
        let mut count = 0;

        while count < limit {
            match self.current() {
                Some(current) if predicate(current) => {
                    self.advance(1);
                    count += 1;
                }
                _ => break,
            }
        }

        if start == self.index {
            return Err(self.fail("read_characters"));
        }

        Ok(self.characters(start..self.index))
    }

    /// 读取一个属于集合的字符
    ///
    /// 位于末尾或当前字符不在集合中时失败，位置不变。
    pub fn read_character_in(&mut self, set: &[char]) -> ScanResult<Grapheme<'a>> {
        match self.current() {
            Some(current) if current.is_in(set) => {
                self.advance(1);
                Ok(current)
            }
            _ => Err(self.fail("read_character_in")),
        }
    }

    /// 读取同行空白，一个都没有时失败
    pub fn read_whitespaces(&mut self) -> ScanResult<&'a str> {
        self.read_characters(Grapheme::is_same_line_whitespace, None)
    }

    /// 读取到行尾
    ///
    /// 返回换行之前的内容（可能为空），并消费该换行；没有换行时返回剩余全部文本。
    pub fn read_until_end_of_line(&mut self) -> &'a str {
        let start = self.index;

        while let Some(current) = self.current() {
            if current.is_newline() {
                let text = self.characters(start..self.index);
                self.advance(1);
                return text;
            }
            self.advance(1);
        }

        self.characters(start..self.index)
    }

    /// 跳过同行空白，不跨越换行
    pub fn discard_whitespaces(&mut self) {
        while self.current().is_some_and(Grapheme::is_same_line_whitespace) {
            self.advance(1);
        }
    }

    /// 跳过所有空白，包括换行
    pub fn discard_whitespaces_and_newlines(&mut self) {
        while self.current().is_some_and(Grapheme::is_whitespace) {
            self.advance(1);
        }
    }

    fn fail(&self, operation: &'static str) -> ScanError {
        trace!(
            target: "textscan::cursor",
            operation,
            offset = self.index.byte_offset(),
            "Scan failure"
        );
        ScanError
    }
}
