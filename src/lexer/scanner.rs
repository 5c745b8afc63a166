//! 词法扫描器
//!
//! 将源代码字符串转换为 Token 流

use super::error::{LexError, LexErrorKind};
use super::token::{Span, Token, TokenKind};

/// 词法扫描器
///
/// 每个实例只服务于一次扫描：[`Lexer::lex`] 会消费扫描器本身。
pub struct Lexer {
    /// 源代码字符
    source: Vec<char>,
    /// 当前位置
    current: usize,
    /// 当前 token 起始位置
    start: usize,
    /// 当前行号
    line: usize,
    /// 当前列号
    column: usize,
}

impl Lexer {
    /// 创建新的扫描器
    pub fn new(source: &str) -> Self {
        Self {
            source: source.chars().collect(),
            current: 0,
            start: 0,
            line: 1,
            column: 1,
        }
    }

    /// 扫描全部输入
    ///
    /// 成功时序列以唯一的 `Eof` 结尾；遇到第一个错误立即返回，不产生部分结果。
    pub fn lex(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        while !self.is_at_end() {
            self.start = self.current;
            if let Some(token) = self.scan_token()? {
                tokens.push(token);
            }
        }

        self.start = self.current;
        tokens.push(self.make_token(TokenKind::Eof));
        Ok(tokens)
    }

    /// 扫描一步，空白和注释返回 None
    fn scan_token(&mut self) -> Result<Option<Token>, LexError> {
        let c = self.advance();

        let kind = match c {
            // 空白
            ' ' | '\r' | '\t' => return Ok(None),
            '\n' => {
                self.line += 1;
                self.column = 0;
                return Ok(None);
            }

            // / 和注释
            '/' => {
                if self.match_char('/') {
                    self.skip_line_comment();
                    return Ok(None);
                } else if self.match_char('*') {
                    self.skip_block_comment()?;
                    return Ok(None);
                }
                TokenKind::Slash
            }

            // 字符串（两种引号都以双引号结束）
            '"' | '\'' => {
                self.scan_string()?;
                TokenKind::StringLiteral
            }

            // 数字
            c if c.is_ascii_digit() => {
                self.scan_number();
                TokenKind::NumberLiteral
            }

            // 标识符或关键字
            c if Self::is_identifier_start(c) => self.scan_identifier(),

            // + 和 ++
            '+' => {
                if self.match_char('+') {
                    TokenKind::PlusPlus
                } else {
                    TokenKind::Plus
                }
            }

            // - 和 -- 和 ->
            '-' => {
                if self.match_char('-') {
                    TokenKind::MinusMinus
                } else if self.match_char('>') {
                    TokenKind::Arrow
                } else {
                    TokenKind::Minus
                }
            }

            '*' => TokenKind::Star,
            '%' => TokenKind::Percent,

            // = 和 ==
            '=' => {
                if self.match_char('=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                }
            }

            // ! 和 != 目前是同一类型
            '!' => {
                self.match_char('=');
                TokenKind::NotBang
            }

            // & 和 &&
            '&' => {
                if self.match_char('&') {
                    TokenKind::AndAnd
                } else {
                    TokenKind::BitAnd
                }
            }

            // | 和 ||
            '|' => {
                if self.match_char('|') {
                    TokenKind::OrOr
                } else {
                    TokenKind::BitOr
                }
            }

            // > 和 >= 和 >>
            '>' => {
                if self.match_char('=') {
                    TokenKind::GreaterEqual
                } else if self.match_char('>') {
                    TokenKind::ShiftRight
                } else {
                    TokenKind::Greater
                }
            }

            // < 和 <= 和 <<
            '<' => {
                if self.match_char('=') {
                    TokenKind::LessEqual
                } else if self.match_char('<') {
                    TokenKind::ShiftLeft
                } else {
                    TokenKind::Less
                }
            }

            // : 和 ::
            ':' => {
                if self.match_char(':') {
                    TokenKind::ColonColon
                } else {
                    TokenKind::Colon
                }
            }

            '?' => TokenKind::Question,

            // . 和 ...，只匹配到 .. 时仍是 Dot
            '.' => {
                if self.match_char('.') && self.match_char('.') {
                    TokenKind::Ellipsis
                } else {
                    TokenKind::Dot
                }
            }

            // 分隔符
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semicolon,
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            '[' => TokenKind::LeftBracket,
            ']' => TokenKind::RightBracket,
            '$' => TokenKind::Dollar,

            _ => return Err(self.error(LexErrorKind::UnexpectedCharacter(c))),
        };

        Ok(Some(self.make_token(kind)))
    }

    /// 跳过单行注释（不消费换行）
    fn skip_line_comment(&mut self) {
        while !self.is_at_end() && self.peek() != '\n' {
            self.advance();
        }
    }

    /// 跳过块注释，遇到第一个 */ 即结束，不支持嵌套
    fn skip_block_comment(&mut self) -> Result<(), LexError> {
        loop {
            if self.is_at_end() {
                return Err(self.error(LexErrorKind::UnterminatedBlockComment));
            }
            if self.peek() == '*' && self.peek_next() == Some('/') {
                self.advance();
                self.advance();
                return Ok(());
            }
            if self.peek() == '\n' {
                self.line += 1;
                self.column = 0;
            }
            self.advance();
        }
    }

    /// 扫描字符串（不处理转义），开头的引号已被消费
    fn scan_string(&mut self) -> Result<(), LexError> {
        loop {
            if self.is_at_end() {
                return Err(self.error(LexErrorKind::UnterminatedString));
            }
            if self.peek() == '"' {
                self.advance();
                return Ok(());
            }
            if self.peek() == '\n' {
                self.line += 1;
                self.column = 0;
            }
            self.advance();
        }
    }

    /// 扫描数字：整数部分，以及可选的一个小数部分
    fn scan_number(&mut self) {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        let has_fraction = self.peek() == '.'
            && self.peek_next().is_some_and(|c| c.is_ascii_digit());
        if has_fraction {
            self.advance(); // 消费 '.'
            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }
    }

    /// 扫描标识符或关键字
    fn scan_identifier(&mut self) -> TokenKind {
        while Self::is_identifier_continue(self.peek()) {
            self.advance();
        }

        let text: String = self.source[self.start..self.current].iter().collect();
        TokenKind::keyword(&text).unwrap_or(TokenKind::Identifier)
    }

    /// 检查字符是否可以作为标识符开头
    fn is_identifier_start(c: char) -> bool {
        c.is_ascii_alphabetic() || c == '_'
    }

    /// 检查字符是否可以作为标识符的后续字符
    fn is_identifier_continue(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '_'
    }

    /// 判断是否到达源码末尾
    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    /// 前进一个字符并返回
    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        self.column += 1;
        c
    }

    /// 查看当前字符，结束时返回 '\0'
    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.source[self.current]
        }
    }

    /// 查看下一个字符
    fn peek_next(&self) -> Option<char> {
        self.source.get(self.current + 1).copied()
    }

    /// 如果当前字符匹配，则前进
    fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.source[self.current] != expected {
            false
        } else {
            self.current += 1;
            self.column += 1;
            true
        }
    }

    /// 创建 token，位置取游标当前所在的行列
    fn make_token(&self, kind: TokenKind) -> Token {
        let lexeme: String = self.source[self.start..self.current].iter().collect();
        let span = Span::new(self.start, self.current, self.line, self.column);
        Token::new(kind, lexeme, span)
    }

    /// 创建当前位置的错误
    fn error(&self, kind: LexErrorKind) -> LexError {
        LexError::new(kind, self.line, self.column)
    }
}
