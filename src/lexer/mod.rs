//! 词法分析模块
//! 
//! 将源代码转换为 Token 流

pub mod token;
pub mod scanner;
pub mod error;
pub mod batch;

pub use token::{Token, TokenKind, Span};
pub use scanner::Lexer;
pub use error::{LexError, LexErrorKind};
pub use batch::{BatchConfig, BatchError, BatchLexer, LexOutcome, SourceUnit};

/// 扫描一段完整的源码
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).lex()
}
