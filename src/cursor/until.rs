//! 定界扫描的参数

/// `Cursor::read_until` 的停止规则
///
/// 默认：必须找到定界符、允许同行空白、不允许换行、不做平衡计数。
///
/// ```
/// use textscan::Until;
///
/// let until = Until::new(')').balance_against('(').allow_line_breaks();
/// assert!(until.is_required());
/// assert_eq!(until.balancing(), Some('('));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Until {
    delimiter: char,
    required: bool,
    allow_whitespace: bool,
    allow_line_breaks: bool,
    balance_against: Option<char>,
}

impl Until {
    pub fn new(delimiter: char) -> Self {
        Self {
            delimiter,
            required: true,
            allow_whitespace: true,
            allow_line_breaks: false,
            balance_against: None,
        }
    }

    /// 找不到定界符时返回已扫描的部分而不是失败
    pub fn optional(self) -> Self {
        self.required(false)
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// 遇到同行空白即停止
    pub fn disallow_whitespace(self) -> Self {
        self.allow_whitespace(false)
    }

    pub fn allow_whitespace(mut self, allow: bool) -> Self {
        self.allow_whitespace = allow;
        self
    }

    /// 允许跨越换行
    pub fn allow_line_breaks(self) -> Self {
        self.allow_line_breaks_if(true)
    }

    pub fn allow_line_breaks_if(mut self, allow: bool) -> Self {
        self.allow_line_breaks = allow;
        self
    }

    /// 用开括号平衡定界符（单个整数计数器，只记录嵌套深度）
    pub fn balance_against(mut self, opening: char) -> Self {
        self.balance_against = Some(opening);
        self
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn allows_whitespace(&self) -> bool {
        self.allow_whitespace
    }

    pub fn allows_line_breaks(&self) -> bool {
        self.allow_line_breaks
    }

    pub fn balancing(&self) -> Option<char> {
        self.balance_against
    }
}

impl From<char> for Until {
    fn from(delimiter: char) -> Self {
        Self::new(delimiter)
    }
}
