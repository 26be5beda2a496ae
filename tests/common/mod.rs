//! 测试辅助工具
//!
//! 一个极小的行内标记识别器，演示"保存位置 / 尝试 / 失败回退"的用法。

#![allow(dead_code)]

use textscan::{Cursor, ScanError, ScanResult, Until};

/// 识别出的片段
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment<'a> {
    Heading { level: usize, text: &'a str },
    Link { text: &'a str, url: &'a str },
    Code(&'a str),
    Text(&'a str),
}

/// `#` 开头的标题，最多 6 级，标记后至少一个空白
pub fn heading<'a>(cursor: &mut Cursor<'a>) -> ScanResult<Fragment<'a>> {
    cursor.attempt(|c| {
        let level = c.read_characters(|g| g.is('#'), Some(6))?.len();
        c.read_whitespaces()?;
        let text = c.read_until_end_of_line();
        Ok(Fragment::Heading { level, text })
    })
}

/// `[text](url)`，url 中的括号需要成对出现
pub fn link<'a>(cursor: &mut Cursor<'a>) -> ScanResult<Fragment<'a>> {
    cursor.attempt(|c| {
        c.read('[')?;
        let text = c.read_until(Until::new(']').balance_against('['))?;
        c.read('(')?;
        let url = c.read_until(Until::new(')').balance_against('(').disallow_whitespace())?;
        Ok(Fragment::Link { text, url })
    })
}

/// 任意数量反引号包围的行内代码
pub fn code<'a>(cursor: &mut Cursor<'a>) -> ScanResult<Fragment<'a>> {
    cursor.attempt(|c| {
        let fence = c.read_count('`');
        if fence == 0 {
            return Err(ScanError);
        }
        let body_start = c.position();
        loop {
            c.read_until('`')?;
            let closing_start = c.position();
            // read_until 已消费一个反引号
            let run = 1 + c.read_count('`');
            if run == fence {
                c.restore(closing_start);
                c.rewind();
                let body = c.characters(body_start..c.position());
                c.advance(fence);
                return Ok(Fragment::Code(body));
            }
        }
    })
}

/// 依次尝试各种行内结构，都不匹配时按普通文本读取到下一个特殊字符
pub fn fragments(input: &str) -> Vec<Fragment<'_>> {
    let mut cursor = Cursor::new(input);
    let mut out = Vec::new();

    while !cursor.is_at_end() {
        if let Ok(fragment) = heading(&mut cursor)
            .or_else(|_| link(&mut cursor))
            .or_else(|_| code(&mut cursor))
        {
            out.push(fragment);
            continue;
        }

        let start = cursor.position();
        cursor.advance(1);
        while !cursor.is_at_end() && !cursor.check_in(&['[', '`', '#']) {
            cursor.advance(1);
        }
        out.push(Fragment::Text(cursor.characters(start..cursor.position())));
    }

    out
}
