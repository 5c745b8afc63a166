//! 语句节点
//!
//! 与表达式一样，每种语句是一个独立的结构体，[`Stmt`] 组成封闭集合。

use super::expr::Expr;
use super::modifier::Modifier;
use crate::types::Type;

/// 带类型的参数或字段
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub ty: Type,
}

impl Parameter {
    /// 创建参数
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self { name: name.into(), ty }
    }
}

/// 代码块
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlockStmt {
    pub statements: Vec<Stmt>,
}

impl BlockStmt {
    /// 创建代码块
    pub fn new(statements: Vec<Stmt>) -> Self {
        Self { statements }
    }
}

/// break
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BreakStmt;

/// continue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContinueStmt;

/// 表达式语句
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub expression: Expr,
}

/// return，值可省略
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub value: Option<Expr>,
}

/// throw
#[derive(Debug, Clone, PartialEq)]
pub struct ThrowStmt {
    pub value: Expr,
}

/// try / catch / finally
#[derive(Debug, Clone, PartialEq)]
pub struct TryStmt {
    pub try_block: BlockStmt,
    /// catch 绑定的变量名
    pub catch_variable: Option<String>,
    pub catch_block: Option<BlockStmt>,
    pub finally_block: Option<BlockStmt>,
}

/// if / else
#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_block: BlockStmt,
    /// else 分支，可以是另一个 if（构成 else-if 链）
    pub else_branch: Option<Box<Stmt>>,
}

/// while 循环
#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: BlockStmt,
}

/// for 循环，三个子句都可省略
#[derive(Debug, Clone, PartialEq)]
pub struct ForStmt {
    pub init: Option<Box<Stmt>>,
    pub condition: Option<Expr>,
    pub post: Option<Box<Stmt>>,
    pub body: BlockStmt,
}

/// switch 的一个分支
///
/// 至少包含一个 case 表达式，因此字段不公开。
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchCase {
    case_exprs: Vec<Expr>,
    body: BlockStmt,
}

impl SwitchCase {
    /// 创建分支，case 表达式为空时返回 None
    pub fn new(case_exprs: Vec<Expr>, body: BlockStmt) -> Option<Self> {
        if case_exprs.is_empty() {
            None
        } else {
            Some(Self { case_exprs, body })
        }
    }

    /// 只有一个 case 表达式的分支
    pub fn single(case_expr: Expr, body: BlockStmt) -> Self {
        Self {
            case_exprs: vec![case_expr],
            body,
        }
    }

    /// case 表达式（非空）
    pub fn case_exprs(&self) -> &[Expr] {
        &self.case_exprs
    }

    /// 分支体
    pub fn body(&self) -> &BlockStmt {
        &self.body
    }
}

/// switch 语句
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchStmt {
    pub scrutinee: Expr,
    pub cases: Vec<SwitchCase>,
    pub default: Option<BlockStmt>,
}

/// val 声明（不可变）
#[derive(Debug, Clone, PartialEq)]
pub struct ValStmt {
    pub name: String,
    pub declared_type: Option<Type>,
    pub initializer: Option<Expr>,
    pub modifier: Modifier,
}

/// let 声明（可变）
#[derive(Debug, Clone, PartialEq)]
pub struct LetStmt {
    pub name: String,
    pub declared_type: Option<Type>,
    pub initializer: Option<Expr>,
    pub modifier: Modifier,
}

/// global 声明，没有修饰符
#[derive(Debug, Clone, PartialEq)]
pub struct GlobalStmt {
    pub name: String,
    pub declared_type: Option<Type>,
    pub initializer: Option<Expr>,
}

/// 函数声明
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionStmt {
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub return_type: Option<Type>,
    pub body: BlockStmt,
    pub modifier: Modifier,
    pub is_async: bool,
    pub is_override: bool,
}

/// 类声明
#[derive(Debug, Clone, PartialEq)]
pub struct ClassStmt {
    pub name: String,
    pub superclass: Option<String>,
    pub modifier: Modifier,
    pub members: Vec<Stmt>,
}

/// 构造函数
#[derive(Debug, Clone, PartialEq)]
pub struct ConstructorStmt {
    pub parameters: Vec<Parameter>,
    pub body: BlockStmt,
}

/// 接口声明
#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceStmt {
    pub name: String,
    pub modifier: Modifier,
    pub members: Vec<Stmt>,
}

/// 结构体声明
#[derive(Debug, Clone, PartialEq)]
pub struct StructStmt {
    pub name: String,
    pub modifier: Modifier,
    pub members: Vec<Stmt>,
}

/// 枚举声明
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumStmt {
    pub name: String,
    pub modifier: Modifier,
    pub elements: Vec<String>,
}

/// data 声明
#[derive(Debug, Clone, PartialEq)]
pub struct DataStmt {
    pub name: String,
    pub modifier: Modifier,
    pub fields: Vec<Parameter>,
}

/// import
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportStmt {
    pub module: String,
}

/// export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportStmt {
    pub exported_name: String,
}

/// 语句节点
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Block(BlockStmt),
    Break(BreakStmt),
    Continue(ContinueStmt),
    Expression(ExpressionStmt),
    Return(ReturnStmt),
    Throw(ThrowStmt),
    Try(TryStmt),
    If(IfStmt),
    While(WhileStmt),
    For(ForStmt),
    Switch(SwitchStmt),
    Val(ValStmt),
    Let(LetStmt),
    Global(GlobalStmt),
    Function(FunctionStmt),
    Class(ClassStmt),
    Constructor(ConstructorStmt),
    Interface(InterfaceStmt),
    Struct(StructStmt),
    Enum(EnumStmt),
    Data(DataStmt),
    Import(ImportStmt),
    Export(ExportStmt),
}

impl Stmt {
    /// 表达式语句
    pub fn expression(expression: Expr) -> Self {
        Stmt::Expression(ExpressionStmt { expression })
    }

    /// 代码块
    pub fn block(statements: Vec<Stmt>) -> Self {
        Stmt::Block(BlockStmt::new(statements))
    }

    /// 声明的名称，非声明语句返回 None
    pub fn declared_name(&self) -> Option<&str> {
        match self {
            Stmt::Val(s) => Some(&s.name),
            Stmt::Let(s) => Some(&s.name),
            Stmt::Global(s) => Some(&s.name),
            Stmt::Function(s) => Some(&s.name),
            Stmt::Class(s) => Some(&s.name),
            Stmt::Interface(s) => Some(&s.name),
            Stmt::Struct(s) => Some(&s.name),
            Stmt::Enum(s) => Some(&s.name),
            Stmt::Data(s) => Some(&s.name),
            _ => None,
        }
    }

    /// 声明上的修饰符，不带修饰符的语句返回 None
    pub fn modifier(&self) -> Option<Modifier> {
        match self {
            Stmt::Val(s) => Some(s.modifier),
            Stmt::Let(s) => Some(s.modifier),
            Stmt::Function(s) => Some(s.modifier),
            Stmt::Class(s) => Some(s.modifier),
            Stmt::Interface(s) => Some(s.modifier),
            Stmt::Struct(s) => Some(s.modifier),
            Stmt::Enum(s) => Some(s.modifier),
            Stmt::Data(s) => Some(s.modifier),
            _ => None,
        }
    }
}

macro_rules! impl_from_stmt_node {
    ($($node:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$node> for Stmt {
                fn from(node: $node) -> Self {
                    Stmt::$variant(node)
                }
            }
        )*
    };
}

impl_from_stmt_node! {
    BlockStmt => Block,
    BreakStmt => Break,
    ContinueStmt => Continue,
    ExpressionStmt => Expression,
    ReturnStmt => Return,
    ThrowStmt => Throw,
    TryStmt => Try,
    IfStmt => If,
    WhileStmt => While,
    ForStmt => For,
    SwitchStmt => Switch,
    ValStmt => Val,
    LetStmt => Let,
    GlobalStmt => Global,
    FunctionStmt => Function,
    ClassStmt => Class,
    ConstructorStmt => Constructor,
    InterfaceStmt => Interface,
    StructStmt => Struct,
    EnumStmt => Enum,
    DataStmt => Data,
    ImportStmt => Import,
    ExportStmt => Export,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PrimitiveType;

    #[test]
    fn test_switch_case_requires_expression() {
        assert!(SwitchCase::new(Vec::new(), BlockStmt::default()).is_none());

        let case = SwitchCase::new(vec![Expr::int(1), Expr::int(2)], BlockStmt::default())
            .expect("non-empty case");
        assert_eq!(case.case_exprs().len(), 2);
        assert!(case.body().statements.is_empty());

        let case = SwitchCase::single(Expr::string("x"), BlockStmt::new(vec![Stmt::Break(BreakStmt)]));
        assert_eq!(case.case_exprs(), &[Expr::string("x")]);
    }

    #[test]
    fn test_declared_name_and_modifier() {
        let val: Stmt = ValStmt {
            name: "pi".to_string(),
            declared_type: Some(PrimitiveType::Float.into()),
            initializer: Some(Expr::float(1.5)),
            modifier: Modifier::Private,
        }
        .into();
        assert_eq!(val.declared_name(), Some("pi"));
        assert_eq!(val.modifier(), Some(Modifier::Private));

        let global: Stmt = GlobalStmt {
            name: "counter".to_string(),
            declared_type: None,
            initializer: None,
        }
        .into();
        assert_eq!(global.declared_name(), Some("counter"));
        assert_eq!(global.modifier(), None);

        let brk = Stmt::Break(BreakStmt);
        assert_eq!(brk.declared_name(), None);
        assert_eq!(brk.modifier(), None);
    }

    #[test]
    fn test_else_if_chain() {
        let inner = IfStmt {
            condition: Expr::bool(false),
            then_block: BlockStmt::default(),
            else_branch: Some(Box::new(Stmt::block(Vec::new()))),
        };
        let outer = IfStmt {
            condition: Expr::bool(true),
            then_block: BlockStmt::default(),
            else_branch: Some(Box::new(inner.into())),
        };
        assert!(matches!(outer.else_branch.as_deref(), Some(Stmt::If(_))));
    }
}
