//! 词法错误定义
//!
//! 任何词法错误都会终止整个扫描过程

use std::fmt;

use crate::i18n::{format_message, messages, Locale};

/// 词法错误种类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorKind {
    /// 字符串在输入结束前没有闭合
    UnterminatedString,
    /// 块注释在输入结束前没有闭合
    UnterminatedBlockComment,
    /// 无法识别的字符
    UnexpectedCharacter(char),
}

/// 词法错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    /// 错误种类
    pub kind: LexErrorKind,
    /// 行号
    pub line: usize,
    /// 列号
    pub column: usize,
}

impl LexError {
    /// 创建新的词法错误
    pub fn new(kind: LexErrorKind, line: usize, column: usize) -> Self {
        Self { kind, line, column }
    }

    /// 按指定语言生成错误描述（不含位置）
    pub fn message(&self, locale: Locale) -> String {
        match self.kind {
            LexErrorKind::UnterminatedString => {
                format_message(messages::ERR_LEX_UNTERMINATED_STRING, locale, &[])
            }
            LexErrorKind::UnterminatedBlockComment => {
                format_message(messages::ERR_LEX_UNTERMINATED_COMMENT, locale, &[])
            }
            LexErrorKind::UnexpectedCharacter(c) => {
                let text = c.to_string();
                format_message(messages::ERR_LEX_UNEXPECTED_CHAR, locale, &[&text])
            }
        }
    }

    /// 生成带位置的诊断文本，格式为 `[行:列] 描述`
    pub fn render(&self, locale: Locale) -> String {
        format!("[{}:{}] {}", self.line, self.column, self.message(locale))
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Locale::default()))
    }
}

impl std::error::Error for LexError {}
