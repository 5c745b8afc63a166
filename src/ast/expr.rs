//! 表达式节点
//!
//! 每种表达式是一个独立的结构体，[`Expr`] 把它们组成封闭的集合。
//! 子节点由父节点独占，节点构造后不再修改。

use crate::types::Type;

/// 整数字面量
#[derive(Debug, Clone, PartialEq)]
pub struct IntLiteral {
    pub value: i64,
}

/// 浮点数字面量
#[derive(Debug, Clone, PartialEq)]
pub struct FloatLiteral {
    pub value: f64,
}

/// 字符串字面量
#[derive(Debug, Clone, PartialEq)]
pub struct StringLiteral {
    pub value: String,
}

/// 布尔字面量
#[derive(Debug, Clone, PartialEq)]
pub struct BoolLiteral {
    pub value: bool,
}

/// 数组字面量 [1, 2, 3]
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayLiteral {
    pub elements: Vec<Expr>,
}

/// 赋值表达式 name = value
#[derive(Debug, Clone, PartialEq)]
pub struct AssignExpr {
    /// 赋值目标
    pub name: Identifier,
    pub value: Box<Expr>,
}

/// 二元表达式
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    /// 运算符的源码文本，如 `+`、`==`
    pub operator: String,
    pub right: Box<Expr>,
}

/// 函数调用
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: Box<Expr>,
    pub arguments: Vec<Expr>,
}

/// 分组表达式（括号）
#[derive(Debug, Clone, PartialEq)]
pub struct GroupingExpr {
    pub expression: Box<Expr>,
}

/// 类型检查 object instanceof Type
#[derive(Debug, Clone, PartialEq)]
pub struct InstanceOfExpr {
    pub object: Box<Expr>,
    pub ty: Type,
}

/// Lambda 表达式，参数没有类型注解，函数体是单个表达式
#[derive(Debug, Clone, PartialEq)]
pub struct LambdaExpr {
    pub params: Vec<String>,
    pub body: Box<Expr>,
}

/// 短路逻辑表达式（&&、||、and、or）
#[derive(Debug, Clone, PartialEq)]
pub struct LogicalExpr {
    pub left: Box<Expr>,
    pub operator: String,
    pub right: Box<Expr>,
}

/// new 表达式 new ClassName(args)
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpr {
    pub class_name: String,
    pub args: Vec<Expr>,
}

/// 后缀一元表达式 a++
#[derive(Debug, Clone, PartialEq)]
pub struct PostfixUnaryExpr {
    pub operand: Box<Expr>,
    pub operator: String,
}

/// super 方法引用 super.method
#[derive(Debug, Clone, PartialEq)]
pub struct SuperExpr {
    pub method: Box<Expr>,
}

/// this 关键字
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThisExpr;

/// 前缀一元表达式 -a、!a
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub operator: String,
    pub right: Box<Expr>,
}

/// 变量引用，可带声明类型
#[derive(Debug, Clone, PartialEq)]
pub struct VariableExpr {
    pub name: Identifier,
    pub declared_type: Option<Type>,
}

/// 成员访问 a.b
#[derive(Debug, Clone, PartialEq)]
pub struct MemberExpr {
    pub object: Box<Expr>,
    pub property: Identifier,
}

/// 标识符
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    /// 创建标识符
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// 表达式节点
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    IntLiteral(IntLiteral),
    FloatLiteral(FloatLiteral),
    StringLiteral(StringLiteral),
    BoolLiteral(BoolLiteral),
    ArrayLiteral(ArrayLiteral),
    Assign(AssignExpr),
    Binary(BinaryExpr),
    Call(CallExpr),
    Grouping(GroupingExpr),
    InstanceOf(InstanceOfExpr),
    Lambda(LambdaExpr),
    Logical(LogicalExpr),
    New(NewExpr),
    PostfixUnary(PostfixUnaryExpr),
    Super(SuperExpr),
    This(ThisExpr),
    Unary(UnaryExpr),
    Variable(VariableExpr),
    Member(MemberExpr),
    Identifier(Identifier),
}

impl Expr {
    /// 整数字面量
    pub fn int(value: i64) -> Self {
        Expr::IntLiteral(IntLiteral { value })
    }

    /// 浮点数字面量
    pub fn float(value: f64) -> Self {
        Expr::FloatLiteral(FloatLiteral { value })
    }

    /// 字符串字面量
    pub fn string(value: impl Into<String>) -> Self {
        Expr::StringLiteral(StringLiteral { value: value.into() })
    }

    /// 布尔字面量
    pub fn bool(value: bool) -> Self {
        Expr::BoolLiteral(BoolLiteral { value })
    }

    /// 标识符
    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Identifier(Identifier::new(name))
    }

    /// 二元表达式
    pub fn binary(left: Expr, operator: impl Into<String>, right: Expr) -> Self {
        Expr::Binary(BinaryExpr {
            left: Box::new(left),
            operator: operator.into(),
            right: Box::new(right),
        })
    }

    /// 分组表达式
    pub fn grouping(expression: Expr) -> Self {
        Expr::Grouping(GroupingExpr { expression: Box::new(expression) })
    }
}

macro_rules! impl_from_expr_node {
    ($($node:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$node> for Expr {
                fn from(node: $node) -> Self {
                    Expr::$variant(node)
                }
            }
        )*
    };
}

impl_from_expr_node! {
    IntLiteral => IntLiteral,
    FloatLiteral => FloatLiteral,
    StringLiteral => StringLiteral,
    BoolLiteral => BoolLiteral,
    ArrayLiteral => ArrayLiteral,
    AssignExpr => Assign,
    BinaryExpr => Binary,
    CallExpr => Call,
    GroupingExpr => Grouping,
    InstanceOfExpr => InstanceOf,
    LambdaExpr => Lambda,
    LogicalExpr => Logical,
    NewExpr => New,
    PostfixUnaryExpr => PostfixUnary,
    SuperExpr => Super,
    ThisExpr => This,
    UnaryExpr => Unary,
    VariableExpr => Variable,
    MemberExpr => Member,
    Identifier => Identifier,
}
