//! Token 定义
//!
//! 词法分析器产生的标记类型

use std::fmt;

/// Token 类型
///
/// 字面量和标识符不携带值，原始文本保存在 [`Token::lexeme`] 中。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ============ 特殊 ============
    /// 文件结束
    Eof,

    // ============ 标识符和字面量 ============
    /// 标识符
    Identifier,
    /// 数字字面量（整数或小数）
    NumberLiteral,
    /// 字符串字面量
    StringLiteral,

    // ============ 面向对象和结构关键字 ============
    /// class
    Class,
    /// interface
    Interface,
    /// extends
    Extends,
    /// import
    Import,
    /// export
    Export,
    /// enum
    Enum,
    /// struct
    Struct,
    /// public
    Public,
    /// protected
    Protected,
    /// private
    Private,
    /// override
    Override,
    /// this
    This,
    /// new
    New,
    /// super
    Super,
    /// constructor
    Constructor,
    /// data
    Data,
    /// instanceof
    InstanceOf,

    // ============ 控制流关键字 ============
    /// if
    If,
    /// else
    Else,
    /// elif
    Elif,
    /// while
    While,
    /// for
    For,
    /// break
    Break,
    /// continue
    Continue,

    // ============ 函数关键字 ============
    /// async
    Async,
    /// await
    Await,
    /// fun
    Fun,
    /// return
    Return,

    // ============ 字面量关键字 ============
    /// true
    True,
    /// false
    False,
    /// nil
    Nil,

    // ============ 变量关键字 ============
    /// let
    Let,
    /// val
    Val,
    /// global
    Global,

    // ============ 单词形式的运算符 ============
    /// and
    And,
    /// or
    Or,
    /// not
    Not,
    /// is
    Is,
    /// in
    In,
    /// of
    Of,

    // ============ 异常处理 ============
    /// try
    Try,
    /// catch
    Catch,
    /// finally
    Finally,
    /// throw
    Throw,

    // ============ 分支 ============
    /// turn
    Turn,
    /// case
    Case,
    /// default
    Default,

    // ============ 运算符 ============
    /// +
    Plus,
    /// -
    Minus,
    /// *
    Star,
    /// /
    Slash,
    /// %
    Percent,
    /// &&
    AndAnd,
    /// ||
    OrOr,
    /// ! 和 !=（两者共用同一类型）
    NotBang,
    /// ==
    EqualEqual,
    /// :
    Colon,
    /// >
    Greater,
    /// <
    Less,
    /// >=
    GreaterEqual,
    /// <=
    LessEqual,
    /// --
    MinusMinus,
    /// ++
    PlusPlus,
    /// $
    Dollar,

    // ============ 赋值 ============
    /// =
    Equal,

    // ============ 括号 ============
    /// (
    LeftParen,
    /// )
    RightParen,
    /// {
    LeftBrace,
    /// }
    RightBrace,
    /// [
    LeftBracket,
    /// ]
    RightBracket,

    // ============ Lambda 相关 ============
    /// ->
    Arrow,
    /// =>
    FatArrow,
    /// ::
    ColonColon,
    /// ?
    Question,
    /// ...
    Ellipsis,

    // ============ 位运算符 ============
    /// &
    BitAnd,
    /// |
    BitOr,
    /// ^
    BitXor,
    /// <<
    ShiftLeft,
    /// >>
    ShiftRight,

    // ============ 标点 ============
    /// ,
    Comma,
    /// .
    Dot,
    /// ;
    Semicolon,
}

impl TokenKind {
    /// 查找关键字（精确匹配），不是关键字时返回 None
    pub fn keyword(text: &str) -> Option<TokenKind> {
        let kind = match text {
            // 面向对象和结构
            "class" => TokenKind::Class,
            "interface" => TokenKind::Interface,
            "extends" => TokenKind::Extends,
            "import" => TokenKind::Import,
            "export" => TokenKind::Export,
            "enum" => TokenKind::Enum,
            "struct" => TokenKind::Struct,
            "public" => TokenKind::Public,
            "protected" => TokenKind::Protected,
            "private" => TokenKind::Private,
            "override" => TokenKind::Override,
            "this" => TokenKind::This,
            "new" => TokenKind::New,
            "super" => TokenKind::Super,
            "constructor" => TokenKind::Constructor,
            "data" => TokenKind::Data,
            "instanceof" => TokenKind::InstanceOf,

            // 控制流
            "if" => TokenKind::If,
            "else" => TokenKind::Else,
            "elif" => TokenKind::Elif,
            "while" => TokenKind::While,
            "for" => TokenKind::For,
            "break" => TokenKind::Break,
            "continue" => TokenKind::Continue,

            // 函数
            "async" => TokenKind::Async,
            "await" => TokenKind::Await,
            "fun" => TokenKind::Fun,
            "return" => TokenKind::Return,

            // 字面量
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            "nil" => TokenKind::Nil,

            // 变量
            "let" => TokenKind::Let,
            "val" => TokenKind::Val,
            "global" => TokenKind::Global,

            // 单词运算符
            "and" => TokenKind::And,
            "or" => TokenKind::Or,
            "not" => TokenKind::Not,
            "is" => TokenKind::Is,
            "in" => TokenKind::In,
            "of" => TokenKind::Of,

            // 异常处理
            "try" => TokenKind::Try,
            "catch" => TokenKind::Catch,
            "finally" => TokenKind::Finally,
            "throw" => TokenKind::Throw,

            // 分支
            "turn" => TokenKind::Turn,
            "case" => TokenKind::Case,
            "default" => TokenKind::Default,

            _ => return None,
        };
        Some(kind)
    }

    /// 判断是否是关键字
    pub fn is_keyword(&self) -> bool {
        use TokenKind::*;
        matches!(
            self,
            Class | Interface | Extends | Import | Export | Enum | Struct | Public
                | Protected | Private | Override | This | New | Super | Constructor | Data
                | InstanceOf | If | Else | Elif | While | For | Break | Continue | Async
                | Await | Fun | Return | True | False | Nil | Let | Val | Global | And | Or
                | Not | Is | In | Of | Try | Catch | Finally | Throw | Turn | Case | Default
        )
    }

    /// 诊断信息中使用的类型名称
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Eof => "EOF",

            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::NumberLiteral => "NUMBER_LITERAL",
            TokenKind::StringLiteral => "STRING_LITERAL",

            TokenKind::Class => "CLASS",
            TokenKind::Interface => "INTERFACE",
            TokenKind::Extends => "EXTENDS",
            TokenKind::Import => "IMPORT",
            TokenKind::Export => "EXPORT",
            TokenKind::Enum => "ENUM",
            TokenKind::Struct => "STRUCT",
            TokenKind::Public => "PUBLIC",
            TokenKind::Protected => "PROTECTED",
            TokenKind::Private => "PRIVATE",
            TokenKind::Override => "OVERRIDE",
            TokenKind::This => "THIS",
            TokenKind::New => "NEW",
            TokenKind::Super => "SUPER",
            TokenKind::Constructor => "CONSTRUCTOR",
            TokenKind::Data => "DATA",
            TokenKind::InstanceOf => "INSTANCEOF",

            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Elif => "ELIF",
            TokenKind::While => "WHILE",
            TokenKind::For => "FOR",
            TokenKind::Break => "BREAK",
            TokenKind::Continue => "CONTINUE",

            TokenKind::Async => "ASYNC",
            TokenKind::Await => "AWAIT",
            TokenKind::Fun => "FUN",
            TokenKind::Return => "RETURN",

            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::Nil => "NIL",

            TokenKind::Let => "LET",
            TokenKind::Val => "VAL",
            TokenKind::Global => "GLOBAL",

            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Not => "NOT",
            TokenKind::Is => "IS",
            TokenKind::In => "IN",
            TokenKind::Of => "OF",

            TokenKind::Try => "TRY",
            TokenKind::Catch => "CATCH",
            TokenKind::Finally => "FINALLY",
            TokenKind::Throw => "THROW",

            TokenKind::Turn => "TURN",
            TokenKind::Case => "CASE",
            TokenKind::Default => "DEFAULT",

            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Star => "STAR",
            TokenKind::Slash => "SLASH",
            TokenKind::Percent => "PERCENT",
            TokenKind::AndAnd => "AND_AND",
            TokenKind::OrOr => "OR_OR",
            TokenKind::NotBang => "NOT_BANG",
            TokenKind::EqualEqual => "EQUAL_EQUAL",
            TokenKind::Colon => "COLON",
            TokenKind::Greater => "GREATER",
            TokenKind::Less => "LESS",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::MinusMinus => "MINUS_MINUS",
            TokenKind::PlusPlus => "PLUS_PLUS",
            TokenKind::Dollar => "DOLLAR",

            TokenKind::Equal => "EQUAL",

            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::LeftBrace => "LEFT_BRACE",
            TokenKind::RightBrace => "RIGHT_BRACE",
            TokenKind::LeftBracket => "LEFT_BRACKET",
            TokenKind::RightBracket => "RIGHT_BRACKET",

            TokenKind::Arrow => "ARROW",
            TokenKind::FatArrow => "FAT_ARROW",
            TokenKind::ColonColon => "COLON_COLON",
            TokenKind::Question => "QUESTION",
            TokenKind::Ellipsis => "ELLIPSIS",

            TokenKind::BitAnd => "BIT_AND",
            TokenKind::BitOr => "BIT_OR",
            TokenKind::BitXor => "BIT_XOR",
            TokenKind::ShiftLeft => "SHIFT_LEFT",
            TokenKind::ShiftRight => "SHIFT_RIGHT",

            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::Semicolon => "SEMICOLON",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 源码位置信息
///
/// `line` 和 `column` 记录 token 生成时游标所在的位置（而不是起始位置），
/// 诊断信息依赖这一约定。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// 起始位置（字符偏移）
    pub start: usize,
    /// 结束位置（字符偏移，不含）
    pub end: usize,
    /// 行号（从1开始）
    pub line: usize,
    /// 列号
    pub column: usize,
}

impl Span {
    /// 创建新的位置信息
    pub fn new(start: usize, end: usize, line: usize, column: usize) -> Self {
        Self { start, end, line, column }
    }
}

/// Token 结构
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Token 类型
    pub kind: TokenKind,
    /// 原始文本
    pub lexeme: String,
    /// 位置信息
    pub span: Span,
}

impl Token {
    /// 创建新的 Token
    pub fn new(kind: TokenKind, lexeme: String, span: Span) -> Self {
        Self { kind, lexeme, span }
    }

    /// 行号
    pub fn line(&self) -> usize {
        self.span.line
    }

    /// 列号
    pub fn column(&self) -> usize {
        self.span.column
    }

    /// 判断是否是指定类型
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// 判断是否是文件结束
    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}('{}') at {}:{}", self.kind, self.lexeme, self.span.line, self.span.column)
    }
}
