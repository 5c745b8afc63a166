//! Lumen 语言前端数据层
//!
//! 提供词法分析器、类型表示、抽象语法树以及访问者协议。
//! 语法分析器、类型检查器和解释器等后续阶段通过这些类型协作。

pub mod config;
pub mod i18n;
pub mod lexer;
pub mod types;
pub mod ast;

pub use lexer::{tokenize, LexError, LexErrorKind, Lexer, Span, Token, TokenKind};
pub use types::{PrimitiveType, Type};
pub use ast::{AstPrinter, Expr, ExprVisitor, Modifier, Stmt, StmtVisitor};
