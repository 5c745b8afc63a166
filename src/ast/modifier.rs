//! 可见性修饰符

use std::fmt;

use crate::lexer::TokenKind;

/// 可见性修饰符，声明上最多只有一个
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Modifier {
    /// 未指定
    #[default]
    None,
    /// public
    Public,
    /// protected
    Protected,
    /// private
    Private,
}

impl Modifier {
    /// 从修饰符文本解析，无法识别的文本视为 None
    pub fn from_keyword(text: &str) -> Self {
        match text {
            "public" => Modifier::Public,
            "protected" => Modifier::Protected,
            "private" => Modifier::Private,
            _ => Modifier::None,
        }
    }

    /// 从 token 类型解析，非可见性关键字视为 None
    pub fn from_token_kind(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Public => Modifier::Public,
            TokenKind::Protected => Modifier::Protected,
            TokenKind::Private => Modifier::Private,
            _ => Modifier::None,
        }
    }

    /// 源码中的关键字，None 没有对应文本
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            Modifier::None => None,
            Modifier::Public => Some("public"),
            Modifier::Protected => Some("protected"),
            Modifier::Private => Some("private"),
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword().unwrap_or("none"))
    }
}
