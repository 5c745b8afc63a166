//! 访问者协议
//!
//! 每种节点对应访问者上的一个方法，节点的 `accept` 负责双重分派。
//! 新增遍历算法只需要实现访问者；新增语法节点则必须同时扩展节点枚举和
//! 两个 trait，所有已有实现会在编译期被要求补上对应方法。

use super::expr::*;
use super::stmt::*;

/// 表达式访问者
pub trait ExprVisitor {
    /// 每次访问的返回值类型
    type Output;

    fn visit_int_literal(&mut self, expr: &IntLiteral) -> Self::Output;
    fn visit_float_literal(&mut self, expr: &FloatLiteral) -> Self::Output;
    fn visit_string_literal(&mut self, expr: &StringLiteral) -> Self::Output;
    fn visit_bool_literal(&mut self, expr: &BoolLiteral) -> Self::Output;
    fn visit_array_literal(&mut self, expr: &ArrayLiteral) -> Self::Output;
    fn visit_assign_expr(&mut self, expr: &AssignExpr) -> Self::Output;
    fn visit_binary_expr(&mut self, expr: &BinaryExpr) -> Self::Output;
    fn visit_call_expr(&mut self, expr: &CallExpr) -> Self::Output;
    fn visit_grouping_expr(&mut self, expr: &GroupingExpr) -> Self::Output;
    fn visit_instance_of_expr(&mut self, expr: &InstanceOfExpr) -> Self::Output;
    fn visit_lambda_expr(&mut self, expr: &LambdaExpr) -> Self::Output;
    fn visit_logical_expr(&mut self, expr: &LogicalExpr) -> Self::Output;
    fn visit_new_expr(&mut self, expr: &NewExpr) -> Self::Output;
    fn visit_postfix_unary_expr(&mut self, expr: &PostfixUnaryExpr) -> Self::Output;
    fn visit_super_expr(&mut self, expr: &SuperExpr) -> Self::Output;
    fn visit_this_expr(&mut self, expr: &ThisExpr) -> Self::Output;
    fn visit_unary_expr(&mut self, expr: &UnaryExpr) -> Self::Output;
    fn visit_variable_expr(&mut self, expr: &VariableExpr) -> Self::Output;
    fn visit_member_expr(&mut self, expr: &MemberExpr) -> Self::Output;
    fn visit_identifier(&mut self, expr: &Identifier) -> Self::Output;
}

/// 语句访问者
pub trait StmtVisitor {
    /// 每次访问的返回值类型
    type Output;

    fn visit_block_stmt(&mut self, stmt: &BlockStmt) -> Self::Output;
    fn visit_break_stmt(&mut self, stmt: &BreakStmt) -> Self::Output;
    fn visit_continue_stmt(&mut self, stmt: &ContinueStmt) -> Self::Output;
    fn visit_expression_stmt(&mut self, stmt: &ExpressionStmt) -> Self::Output;
    fn visit_return_stmt(&mut self, stmt: &ReturnStmt) -> Self::Output;
    fn visit_throw_stmt(&mut self, stmt: &ThrowStmt) -> Self::Output;
    fn visit_try_stmt(&mut self, stmt: &TryStmt) -> Self::Output;
    fn visit_if_stmt(&mut self, stmt: &IfStmt) -> Self::Output;
    fn visit_while_stmt(&mut self, stmt: &WhileStmt) -> Self::Output;
    fn visit_for_stmt(&mut self, stmt: &ForStmt) -> Self::Output;
    fn visit_switch_case(&mut self, stmt: &SwitchCase) -> Self::Output;
    fn visit_switch_stmt(&mut self, stmt: &SwitchStmt) -> Self::Output;
    fn visit_val_stmt(&mut self, stmt: &ValStmt) -> Self::Output;
    fn visit_let_stmt(&mut self, stmt: &LetStmt) -> Self::Output;
    fn visit_global_stmt(&mut self, stmt: &GlobalStmt) -> Self::Output;
    fn visit_function_stmt(&mut self, stmt: &FunctionStmt) -> Self::Output;
    fn visit_class_stmt(&mut self, stmt: &ClassStmt) -> Self::Output;
    fn visit_constructor_stmt(&mut self, stmt: &ConstructorStmt) -> Self::Output;
    fn visit_interface_stmt(&mut self, stmt: &InterfaceStmt) -> Self::Output;
    fn visit_struct_stmt(&mut self, stmt: &StructStmt) -> Self::Output;
    fn visit_enum_stmt(&mut self, stmt: &EnumStmt) -> Self::Output;
    fn visit_data_stmt(&mut self, stmt: &DataStmt) -> Self::Output;
    fn visit_import_stmt(&mut self, stmt: &ImportStmt) -> Self::Output;
    fn visit_export_stmt(&mut self, stmt: &ExportStmt) -> Self::Output;
}

macro_rules! impl_accept {
    ($visitor:ident: $($node:ident => $method:ident),* $(,)?) => {
        $(
            impl $node {
                /// 分派到访问者上对应的方法
                pub fn accept<V: $visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
                    visitor.$method(self)
                }
            }
        )*
    };
}

impl_accept! { ExprVisitor:
    IntLiteral => visit_int_literal,
    FloatLiteral => visit_float_literal,
    StringLiteral => visit_string_literal,
    BoolLiteral => visit_bool_literal,
    ArrayLiteral => visit_array_literal,
    AssignExpr => visit_assign_expr,
    BinaryExpr => visit_binary_expr,
    CallExpr => visit_call_expr,
    GroupingExpr => visit_grouping_expr,
    InstanceOfExpr => visit_instance_of_expr,
    LambdaExpr => visit_lambda_expr,
    LogicalExpr => visit_logical_expr,
    NewExpr => visit_new_expr,
    PostfixUnaryExpr => visit_postfix_unary_expr,
    SuperExpr => visit_super_expr,
    ThisExpr => visit_this_expr,
    UnaryExpr => visit_unary_expr,
    VariableExpr => visit_variable_expr,
    MemberExpr => visit_member_expr,
    Identifier => visit_identifier,
}

impl_accept! { StmtVisitor:
    BlockStmt => visit_block_stmt,
    BreakStmt => visit_break_stmt,
    ContinueStmt => visit_continue_stmt,
    ExpressionStmt => visit_expression_stmt,
    ReturnStmt => visit_return_stmt,
    ThrowStmt => visit_throw_stmt,
    TryStmt => visit_try_stmt,
    IfStmt => visit_if_stmt,
    WhileStmt => visit_while_stmt,
    ForStmt => visit_for_stmt,
    SwitchCase => visit_switch_case,
    SwitchStmt => visit_switch_stmt,
    ValStmt => visit_val_stmt,
    LetStmt => visit_let_stmt,
    GlobalStmt => visit_global_stmt,
    FunctionStmt => visit_function_stmt,
    ClassStmt => visit_class_stmt,
    ConstructorStmt => visit_constructor_stmt,
    InterfaceStmt => visit_interface_stmt,
    StructStmt => visit_struct_stmt,
    EnumStmt => visit_enum_stmt,
    DataStmt => visit_data_stmt,
    ImportStmt => visit_import_stmt,
    ExportStmt => visit_export_stmt,
}

impl Expr {
    /// 根据节点的具体类型分派到访问者
    pub fn accept<V: ExprVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Expr::IntLiteral(node) => node.accept(visitor),
            Expr::FloatLiteral(node) => node.accept(visitor),
            Expr::StringLiteral(node) => node.accept(visitor),
            Expr::BoolLiteral(node) => node.accept(visitor),
            Expr::ArrayLiteral(node) => node.accept(visitor),
            Expr::Assign(node) => node.accept(visitor),
            Expr::Binary(node) => node.accept(visitor),
            Expr::Call(node) => node.accept(visitor),
            Expr::Grouping(node) => node.accept(visitor),
            Expr::InstanceOf(node) => node.accept(visitor),
            Expr::Lambda(node) => node.accept(visitor),
            Expr::Logical(node) => node.accept(visitor),
            Expr::New(node) => node.accept(visitor),
            Expr::PostfixUnary(node) => node.accept(visitor),
            Expr::Super(node) => node.accept(visitor),
            Expr::This(node) => node.accept(visitor),
            Expr::Unary(node) => node.accept(visitor),
            Expr::Variable(node) => node.accept(visitor),
            Expr::Member(node) => node.accept(visitor),
            Expr::Identifier(node) => node.accept(visitor),
        }
    }
}

impl Stmt {
    /// 根据节点的具体类型分派到访问者
    pub fn accept<V: StmtVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Stmt::Block(node) => node.accept(visitor),
            Stmt::Break(node) => node.accept(visitor),
            Stmt::Continue(node) => node.accept(visitor),
            Stmt::Expression(node) => node.accept(visitor),
            Stmt::Return(node) => node.accept(visitor),
            Stmt::Throw(node) => node.accept(visitor),
            Stmt::Try(node) => node.accept(visitor),
            Stmt::If(node) => node.accept(visitor),
            Stmt::While(node) => node.accept(visitor),
            Stmt::For(node) => node.accept(visitor),
            Stmt::Switch(node) => node.accept(visitor),
            Stmt::Val(node) => node.accept(visitor),
            Stmt::Let(node) => node.accept(visitor),
            Stmt::Global(node) => node.accept(visitor),
            Stmt::Function(node) => node.accept(visitor),
            Stmt::Class(node) => node.accept(visitor),
            Stmt::Constructor(node) => node.accept(visitor),
            Stmt::Interface(node) => node.accept(visitor),
            Stmt::Struct(node) => node.accept(visitor),
            Stmt::Enum(node) => node.accept(visitor),
            Stmt::Data(node) => node.accept(visitor),
            Stmt::Import(node) => node.accept(visitor),
            Stmt::Export(node) => node.accept(visitor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{AstPrinter, Modifier};
    use crate::types::PrimitiveType;

    /// 只记录被调用的方法，不递归
    struct KindName;

    impl ExprVisitor for KindName {
        type Output = &'static str;

        fn visit_int_literal(&mut self, _: &IntLiteral) -> &'static str { "int" }
        fn visit_float_literal(&mut self, _: &FloatLiteral) -> &'static str { "float" }
        fn visit_string_literal(&mut self, _: &StringLiteral) -> &'static str { "string" }
        fn visit_bool_literal(&mut self, _: &BoolLiteral) -> &'static str { "bool" }
        fn visit_array_literal(&mut self, _: &ArrayLiteral) -> &'static str { "array" }
        fn visit_assign_expr(&mut self, _: &AssignExpr) -> &'static str { "assign" }
        fn visit_binary_expr(&mut self, _: &BinaryExpr) -> &'static str { "binary" }
        fn visit_call_expr(&mut self, _: &CallExpr) -> &'static str { "call" }
        fn visit_grouping_expr(&mut self, _: &GroupingExpr) -> &'static str { "grouping" }
        fn visit_instance_of_expr(&mut self, _: &InstanceOfExpr) -> &'static str { "instanceof" }
        fn visit_lambda_expr(&mut self, _: &LambdaExpr) -> &'static str { "lambda" }
        fn visit_logical_expr(&mut self, _: &LogicalExpr) -> &'static str { "logical" }
        fn visit_new_expr(&mut self, _: &NewExpr) -> &'static str { "new" }
        fn visit_postfix_unary_expr(&mut self, _: &PostfixUnaryExpr) -> &'static str { "postfix" }
        fn visit_super_expr(&mut self, _: &SuperExpr) -> &'static str { "super" }
        fn visit_this_expr(&mut self, _: &ThisExpr) -> &'static str { "this" }
        fn visit_unary_expr(&mut self, _: &UnaryExpr) -> &'static str { "unary" }
        fn visit_variable_expr(&mut self, _: &VariableExpr) -> &'static str { "variable" }
        fn visit_member_expr(&mut self, _: &MemberExpr) -> &'static str { "member" }
        fn visit_identifier(&mut self, _: &Identifier) -> &'static str { "identifier" }
    }

    impl StmtVisitor for KindName {
        type Output = &'static str;

        fn visit_block_stmt(&mut self, _: &BlockStmt) -> &'static str { "block" }
        fn visit_break_stmt(&mut self, _: &BreakStmt) -> &'static str { "break" }
        fn visit_continue_stmt(&mut self, _: &ContinueStmt) -> &'static str { "continue" }
        fn visit_expression_stmt(&mut self, _: &ExpressionStmt) -> &'static str { "expression" }
        fn visit_return_stmt(&mut self, _: &ReturnStmt) -> &'static str { "return" }
        fn visit_throw_stmt(&mut self, _: &ThrowStmt) -> &'static str { "throw" }
        fn visit_try_stmt(&mut self, _: &TryStmt) -> &'static str { "try" }
        fn visit_if_stmt(&mut self, _: &IfStmt) -> &'static str { "if" }
        fn visit_while_stmt(&mut self, _: &WhileStmt) -> &'static str { "while" }
        fn visit_for_stmt(&mut self, _: &ForStmt) -> &'static str { "for" }
        fn visit_switch_case(&mut self, _: &SwitchCase) -> &'static str { "case" }
        fn visit_switch_stmt(&mut self, _: &SwitchStmt) -> &'static str { "switch" }
        fn visit_val_stmt(&mut self, _: &ValStmt) -> &'static str { "val" }
        fn visit_let_stmt(&mut self, _: &LetStmt) -> &'static str { "let" }
        fn visit_global_stmt(&mut self, _: &GlobalStmt) -> &'static str { "global" }
        fn visit_function_stmt(&mut self, _: &FunctionStmt) -> &'static str { "function" }
        fn visit_class_stmt(&mut self, _: &ClassStmt) -> &'static str { "class" }
        fn visit_constructor_stmt(&mut self, _: &ConstructorStmt) -> &'static str { "constructor" }
        fn visit_interface_stmt(&mut self, _: &InterfaceStmt) -> &'static str { "interface" }
        fn visit_struct_stmt(&mut self, _: &StructStmt) -> &'static str { "struct" }
        fn visit_enum_stmt(&mut self, _: &EnumStmt) -> &'static str { "enum" }
        fn visit_data_stmt(&mut self, _: &DataStmt) -> &'static str { "data" }
        fn visit_import_stmt(&mut self, _: &ImportStmt) -> &'static str { "import" }
        fn visit_export_stmt(&mut self, _: &ExportStmt) -> &'static str { "export" }
    }

    /// 整数常量求值，遇到不支持的节点返回错误
    struct ConstEval;

    impl ConstEval {
        fn unsupported(&self, what: &str) -> Result<i64, String> {
            Err(format!("cannot evaluate {}", what))
        }
    }

    impl ExprVisitor for ConstEval {
        type Output = Result<i64, String>;

        fn visit_int_literal(&mut self, expr: &IntLiteral) -> Self::Output {
            Ok(expr.value)
        }

        fn visit_float_literal(&mut self, _: &FloatLiteral) -> Self::Output {
            self.unsupported("float")
        }

        fn visit_string_literal(&mut self, _: &StringLiteral) -> Self::Output {
            self.unsupported("string")
        }

        fn visit_bool_literal(&mut self, expr: &BoolLiteral) -> Self::Output {
            Ok(i64::from(expr.value))
        }

        fn visit_array_literal(&mut self, _: &ArrayLiteral) -> Self::Output {
            self.unsupported("array")
        }

        fn visit_assign_expr(&mut self, _: &AssignExpr) -> Self::Output {
            self.unsupported("assignment")
        }

        fn visit_binary_expr(&mut self, expr: &BinaryExpr) -> Self::Output {
            let left = expr.left.accept(self)?;
            let right = expr.right.accept(self)?;
            match expr.operator.as_str() {
                "+" => Ok(left + right),
                "-" => Ok(left - right),
                "*" => Ok(left * right),
                "/" if right == 0 => Err("division by zero".to_string()),
                "/" => Ok(left / right),
                other => Err(format!("unknown operator {}", other)),
            }
        }

        fn visit_call_expr(&mut self, _: &CallExpr) -> Self::Output {
            self.unsupported("call")
        }

        fn visit_grouping_expr(&mut self, expr: &GroupingExpr) -> Self::Output {
            expr.expression.accept(self)
        }

        fn visit_instance_of_expr(&mut self, _: &InstanceOfExpr) -> Self::Output {
            self.unsupported("instanceof")
        }

        fn visit_lambda_expr(&mut self, _: &LambdaExpr) -> Self::Output {
            self.unsupported("lambda")
        }

        fn visit_logical_expr(&mut self, _: &LogicalExpr) -> Self::Output {
            self.unsupported("logical")
        }

        fn visit_new_expr(&mut self, _: &NewExpr) -> Self::Output {
            self.unsupported("new")
        }

        fn visit_postfix_unary_expr(&mut self, _: &PostfixUnaryExpr) -> Self::Output {
            self.unsupported("postfix")
        }

        fn visit_super_expr(&mut self, _: &SuperExpr) -> Self::Output {
            self.unsupported("super")
        }

        fn visit_this_expr(&mut self, _: &ThisExpr) -> Self::Output {
            self.unsupported("this")
        }

        fn visit_unary_expr(&mut self, expr: &UnaryExpr) -> Self::Output {
            let value = expr.right.accept(self)?;
            match expr.operator.as_str() {
                "-" => Ok(-value),
                other => Err(format!("unknown operator {}", other)),
            }
        }

        fn visit_variable_expr(&mut self, expr: &VariableExpr) -> Self::Output {
            self.unsupported(&expr.name.name)
        }

        fn visit_member_expr(&mut self, _: &MemberExpr) -> Self::Output {
            self.unsupported("member")
        }

        fn visit_identifier(&mut self, expr: &Identifier) -> Self::Output {
            self.unsupported(&expr.name)
        }
    }

    fn boxed(expr: Expr) -> Box<Expr> {
        Box::new(expr)
    }

    #[test]
    fn test_expr_dispatch() {
        let cases: Vec<(Expr, &str)> = vec![
            (Expr::int(1), "int"),
            (Expr::float(1.5), "float"),
            (Expr::string("s"), "string"),
            (Expr::bool(true), "bool"),
            (ArrayLiteral { elements: vec![] }.into(), "array"),
            (AssignExpr { name: Identifier::new("a"), value: boxed(Expr::int(1)) }.into(), "assign"),
            (Expr::binary(Expr::int(1), "+", Expr::int(2)), "binary"),
            (CallExpr { callee: boxed(Expr::ident("f")), arguments: vec![] }.into(), "call"),
            (Expr::grouping(Expr::int(1)), "grouping"),
            (
                InstanceOfExpr { object: boxed(Expr::ident("o")), ty: PrimitiveType::Int.into() }.into(),
                "instanceof",
            ),
            (LambdaExpr { params: vec![], body: boxed(Expr::int(0)) }.into(), "lambda"),
            (
                LogicalExpr {
                    left: boxed(Expr::bool(true)),
                    operator: "||".to_string(),
                    right: boxed(Expr::bool(false)),
                }
                .into(),
                "logical",
            ),
            (NewExpr { class_name: "A".to_string(), args: vec![] }.into(), "new"),
            (
                PostfixUnaryExpr { operand: boxed(Expr::ident("i")), operator: "++".to_string() }.into(),
                "postfix",
            ),
            (SuperExpr { method: boxed(Expr::ident("init")) }.into(), "super"),
            (ThisExpr.into(), "this"),
            (UnaryExpr { operator: "!".to_string(), right: boxed(Expr::bool(true)) }.into(), "unary"),
            (VariableExpr { name: Identifier::new("v"), declared_type: None }.into(), "variable"),
            (MemberExpr { object: boxed(Expr::ident("o")), property: Identifier::new("p") }.into(), "member"),
            (Expr::ident("x"), "identifier"),
        ];

        for (expr, expected) in &cases {
            assert_eq!(expr.accept(&mut KindName), *expected);
        }
    }

    #[test]
    fn test_stmt_dispatch() {
        let body = BlockStmt::default;
        let decl = |name: &str| ValStmt {
            name: name.to_string(),
            declared_type: None,
            initializer: None,
            modifier: Modifier::None,
        };
        let cases: Vec<(Stmt, &str)> = vec![
            (Stmt::block(vec![]), "block"),
            (BreakStmt.into(), "break"),
            (ContinueStmt.into(), "continue"),
            (Stmt::expression(Expr::int(1)), "expression"),
            (ReturnStmt { value: None }.into(), "return"),
            (ThrowStmt { value: Expr::string("e") }.into(), "throw"),
            (
                TryStmt { try_block: body(), catch_variable: None, catch_block: None, finally_block: Some(body()) }
                    .into(),
                "try",
            ),
            (IfStmt { condition: Expr::bool(true), then_block: body(), else_branch: None }.into(), "if"),
            (WhileStmt { condition: Expr::bool(false), body: body() }.into(), "while"),
            (ForStmt { init: None, condition: None, post: None, body: body() }.into(), "for"),
            (SwitchStmt { scrutinee: Expr::int(1), cases: vec![], default: None }.into(), "switch"),
            (decl("a").into(), "val"),
            (
                LetStmt { name: "b".to_string(), declared_type: None, initializer: None, modifier: Modifier::None }
                    .into(),
                "let",
            ),
            (GlobalStmt { name: "g".to_string(), declared_type: None, initializer: None }.into(), "global"),
            (
                FunctionStmt {
                    name: "f".to_string(),
                    parameters: vec![],
                    return_type: None,
                    body: body(),
                    modifier: Modifier::None,
                    is_async: false,
                    is_override: false,
                }
                .into(),
                "function",
            ),
            (
                ClassStmt { name: "C".to_string(), superclass: None, modifier: Modifier::None, members: vec![] }
                    .into(),
                "class",
            ),
            (ConstructorStmt { parameters: vec![], body: body() }.into(), "constructor"),
            (
                InterfaceStmt { name: "I".to_string(), modifier: Modifier::None, members: vec![] }.into(),
                "interface",
            ),
            (StructStmt { name: "S".to_string(), modifier: Modifier::None, members: vec![] }.into(), "struct"),
            (EnumStmt { name: "E".to_string(), modifier: Modifier::None, elements: vec![] }.into(), "enum"),
            (DataStmt { name: "D".to_string(), modifier: Modifier::None, fields: vec![] }.into(), "data"),
            (ImportStmt { module: "m".to_string() }.into(), "import"),
            (ExportStmt { exported_name: "f".to_string() }.into(), "export"),
        ];

        for (stmt, expected) in &cases {
            assert_eq!(stmt.accept(&mut KindName), *expected);
        }

        let case = SwitchCase::single(Expr::int(1), body());
        assert_eq!(case.accept(&mut KindName), "case");
    }

    #[test]
    fn test_result_output_propagates_errors() {
        // (2 + 3) * -4
        let expr = Expr::binary(
            Expr::grouping(Expr::binary(Expr::int(2), "+", Expr::int(3))),
            "*",
            UnaryExpr { operator: "-".to_string(), right: boxed(Expr::int(4)) }.into(),
        );
        assert_eq!(expr.accept(&mut ConstEval), Ok(-20));

        let expr = Expr::binary(Expr::int(1), "/", Expr::binary(Expr::int(2), "-", Expr::int(2)));
        assert_eq!(expr.accept(&mut ConstEval), Err("division by zero".to_string()));

        let expr = Expr::binary(Expr::int(1), "+", Expr::ident("x"));
        assert_eq!(expr.accept(&mut ConstEval), Err("cannot evaluate x".to_string()));
    }

    #[test]
    fn test_dynamic_visitor() {
        let mut printer = AstPrinter::new();
        let visitor: &mut dyn ExprVisitor<Output = String> = &mut printer;
        assert_eq!(Expr::binary(Expr::int(1), "+", Expr::int(2)).accept(visitor), "(+ 1 2)");
    }

    #[test]
    fn test_concurrent_traversal() {
        let tree = Stmt::While(WhileStmt {
            condition: Expr::binary(Expr::ident("i"), "<", Expr::int(10)),
            body: BlockStmt::new(vec![Stmt::expression(
                PostfixUnaryExpr { operand: boxed(Expr::ident("i")), operator: "++".to_string() }.into(),
            )]),
        });
        let expected = AstPrinter::new().print_stmt(&tree);

        let outputs = crossbeam_utils::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|_| AstPrinter::new().print_stmt(&tree)))
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().expect("printer thread"))
                .collect::<Vec<_>>()
        })
        .expect("scope");

        assert_eq!(outputs.len(), 4);
        assert!(outputs.iter().all(|out| *out == expected));
        assert_eq!(expected, "(while (< i 10) (block (; (postfix ++ i))))");
    }
}
