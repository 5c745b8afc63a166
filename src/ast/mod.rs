//! 抽象语法树
//!
//! 表达式与语句节点、声明修饰符、访问者协议，以及用于调试的打印器。

pub mod expr;
pub mod modifier;
pub mod printer;
pub mod stmt;
pub mod visitor;

pub use expr::*;
pub use modifier::Modifier;
pub use printer::AstPrinter;
pub use stmt::*;
pub use visitor::{ExprVisitor, StmtVisitor};
