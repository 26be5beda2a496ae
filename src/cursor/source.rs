//! 源文本与位置
//!
//! `Source` 借用一段不可变文本，`Position` 是文本中的不透明位置。
//! 位置总是落在字素边界上，有效范围是 `[start, end]`，`end` 表示最后一个字符之后。

use std::ops::Range;

use tracing::debug;
use unicode_segmentation::{GraphemeCursor, UnicodeSegmentation};

use super::grapheme::Grapheme;
use super::location::SourceLocation;

/// 源文本中的位置
///
/// 内部保存字节偏移，只能由 `Source` 产生，因此总在字素边界上。
/// 同一 `Source` 的位置可以比较先后。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position(usize);

impl Position {
    /// 字节偏移（0-based）
    pub fn byte_offset(self) -> usize {
        self.0
    }
}

/// 不可变的源文本
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Source<'a> {
    text: &'a str,
}

impl<'a> Source<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// 第一个字符的位置
    pub fn start(&self) -> Position {
        Position(0)
    }

    /// 最后一个字符之后的位置
    pub fn end(&self) -> Position {
        Position(self.text.len())
    }

    pub fn len_bytes(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// 位置上的字符，`end` 处为 `None`
    pub fn grapheme_at(&self, position: Position) -> Option<Grapheme<'a>> {
        self.text
            .get(position.0..)?
            .graphemes(true)
            .next()
            .map(Grapheme::new)
    }

    /// 后继位置，`end` 的后继仍是 `end`
    pub fn position_after(&self, position: Position) -> Position {
        match self.grapheme_at(position) {
            Some(grapheme) => Position(position.0 + grapheme.len_utf8()),
            None => self.end(),
        }
    }

    /// 前驱位置，`start` 的前驱仍是 `start`
    pub fn position_before(&self, position: Position) -> Position {
        self.text
            .get(..position.0)
            .and_then(|head| head.graphemes(true).next_back())
            .map_or(self.start(), |grapheme| Position(position.0 - grapheme.len()))
    }

    /// 第 `index` 个字符（0-based）的位置，超出时为 `end`
    pub fn position_of_index(&self, index: usize) -> Position {
        self.text
            .grapheme_indices(true)
            .nth(index)
            .map_or(self.end(), |(offset, _)| Position(offset))
    }

    /// 位置之前的字符数
    pub fn index_of(&self, position: Position) -> usize {
        self.text
            .get(..position.0)
            .map_or(0, |head| head.graphemes(true).count())
    }

    /// 字节偏移换算为位置，向下取整到最近的字素边界，超出时为 `end`
    pub fn position_at_byte(&self, offset: usize) -> Position {
        if offset >= self.text.len() {
            return self.end();
        }

        if self.text.is_char_boundary(offset) {
            let mut boundary = GraphemeCursor::new(offset, self.text.len(), true);
            if let Ok(true) = boundary.is_boundary(self.text, 0) {
                return Position(offset);
            }
        }

        let start = self
            .text
            .grapheme_indices(true)
            .map(|(start, _)| start)
            .take_while(|&start| start <= offset)
            .last()
            .unwrap_or(0);
        Position(start)
    }

    /// 把位置约束到 `[start, end]` 且落在字素边界上
    pub fn clamp(&self, position: Position) -> Position {
        let clamped = self.position_at_byte(position.0);
        if clamped != position {
            debug!(
                target: "textscan::source",
                requested = position.0,
                clamped = clamped.0,
                "Position clamped"
            );
        }
        clamped
    }

    /// 两个位置之间的子串
    ///
    /// # Panics
    /// `range.start > range.end` 时 panic，位置由调用者保证有序
    pub fn slice(&self, range: Range<Position>) -> &'a str {
        let end = self.clamp(range.end);
        let start = self.clamp(range.start);
        assert!(start <= end, "slice start {} is after end {}", start.0, end.0);
        &self.text[start.0..end.0]
    }

    /// 位置对应的行列信息
    pub fn location_of(&self, position: Position) -> SourceLocation {
        let mut location = SourceLocation::start();
        let end = self.clamp(position);
        for cluster in self.text[..end.0].graphemes(true) {
            location.advance(Grapheme::new(cluster));
        }
        location
    }
}

impl<'a> From<&'a str> for Source<'a> {
    fn from(text: &'a str) -> Self {
        Self::new(text)
    }
}
