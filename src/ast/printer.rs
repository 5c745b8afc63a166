//! AST 打印器
//!
//! 把语法树渲染为带括号的前缀形式，主要用于调试和测试。

use super::expr::*;
use super::modifier::Modifier;
use super::stmt::*;
use super::visitor::{ExprVisitor, StmtVisitor};
use crate::types::Type;

/// 生成 S 表达式形式的文本
#[derive(Debug, Default)]
pub struct AstPrinter;

impl AstPrinter {
    /// 创建打印器
    pub fn new() -> Self {
        Self
    }

    /// 打印表达式
    pub fn print_expr(&mut self, expr: &Expr) -> String {
        expr.accept(self)
    }

    /// 打印语句
    pub fn print_stmt(&mut self, stmt: &Stmt) -> String {
        stmt.accept(self)
    }

    fn parenthesize<I>(&self, head: &str, parts: I) -> String
    where
        I: IntoIterator<Item = String>,
    {
        let mut out = format!("({}", head);
        for part in parts {
            out.push(' ');
            out.push_str(&part);
        }
        out.push(')');
        out
    }

    fn exprs(&mut self, exprs: &[Expr]) -> Vec<String> {
        exprs.iter().map(|e| e.accept(self)).collect()
    }

    fn stmts(&mut self, stmts: &[Stmt]) -> Vec<String> {
        stmts.iter().map(|s| s.accept(self)).collect()
    }

    fn params(&self, params: &[Parameter]) -> String {
        let list: Vec<String> = params.iter().map(|p| format!("{}: {}", p.name, p.ty)).collect();
        format!("({})", list.join(", "))
    }

    /// 修饰符作为声明关键字的前缀，None 不输出
    fn head(&self, modifier: Modifier, keyword: &str) -> String {
        match modifier.keyword() {
            Some(text) => format!("{} {}", text, keyword),
            None => keyword.to_string(),
        }
    }

    fn binding(
        &mut self,
        head: &str,
        name: &str,
        declared_type: Option<&Type>,
        initializer: Option<&Expr>,
    ) -> String {
        let mut out = format!("({} {}", head, name);
        if let Some(ty) = declared_type {
            out.push_str(&format!(": {}", ty));
        }
        if let Some(init) = initializer {
            out.push_str(&format!(" = {}", init.accept(self)));
        }
        out.push(')');
        out
    }

    fn optional_stmt(&mut self, stmt: Option<&Stmt>) -> String {
        stmt.map(|s| s.accept(self)).unwrap_or_else(|| "_".to_string())
    }
}

impl ExprVisitor for AstPrinter {
    type Output = String;

    fn visit_int_literal(&mut self, expr: &IntLiteral) -> String {
        expr.value.to_string()
    }

    fn visit_float_literal(&mut self, expr: &FloatLiteral) -> String {
        format!("{:?}", expr.value)
    }

    fn visit_string_literal(&mut self, expr: &StringLiteral) -> String {
        format!("\"{}\"", expr.value)
    }

    fn visit_bool_literal(&mut self, expr: &BoolLiteral) -> String {
        expr.value.to_string()
    }

    fn visit_array_literal(&mut self, expr: &ArrayLiteral) -> String {
        let elements = self.exprs(&expr.elements);
        self.parenthesize("array", elements)
    }

    fn visit_assign_expr(&mut self, expr: &AssignExpr) -> String {
        let value = expr.value.accept(self);
        self.parenthesize("=", [expr.name.name.clone(), value])
    }

    fn visit_binary_expr(&mut self, expr: &BinaryExpr) -> String {
        let left = expr.left.accept(self);
        let right = expr.right.accept(self);
        self.parenthesize(&expr.operator, [left, right])
    }

    fn visit_call_expr(&mut self, expr: &CallExpr) -> String {
        let mut parts = vec![expr.callee.accept(self)];
        parts.extend(self.exprs(&expr.arguments));
        self.parenthesize("call", parts)
    }

    fn visit_grouping_expr(&mut self, expr: &GroupingExpr) -> String {
        let inner = expr.expression.accept(self);
        self.parenthesize("group", [inner])
    }

    fn visit_instance_of_expr(&mut self, expr: &InstanceOfExpr) -> String {
        let object = expr.object.accept(self);
        self.parenthesize("instanceof", [object, expr.ty.to_string()])
    }

    fn visit_lambda_expr(&mut self, expr: &LambdaExpr) -> String {
        let params = format!("({})", expr.params.join(" "));
        let body = expr.body.accept(self);
        self.parenthesize("lambda", [params, body])
    }

    fn visit_logical_expr(&mut self, expr: &LogicalExpr) -> String {
        let left = expr.left.accept(self);
        let right = expr.right.accept(self);
        self.parenthesize(&expr.operator, [left, right])
    }

    fn visit_new_expr(&mut self, expr: &NewExpr) -> String {
        let mut parts = vec![expr.class_name.clone()];
        parts.extend(self.exprs(&expr.args));
        self.parenthesize("new", parts)
    }

    fn visit_postfix_unary_expr(&mut self, expr: &PostfixUnaryExpr) -> String {
        let operand = expr.operand.accept(self);
        self.parenthesize("postfix", [expr.operator.clone(), operand])
    }

    fn visit_super_expr(&mut self, expr: &SuperExpr) -> String {
        let method = expr.method.accept(self);
        self.parenthesize("super", [method])
    }

    fn visit_this_expr(&mut self, _expr: &ThisExpr) -> String {
        "this".to_string()
    }

    fn visit_unary_expr(&mut self, expr: &UnaryExpr) -> String {
        let right = expr.right.accept(self);
        self.parenthesize(&expr.operator, [right])
    }

    fn visit_variable_expr(&mut self, expr: &VariableExpr) -> String {
        match &expr.declared_type {
            Some(ty) => format!("{}: {}", expr.name.name, ty),
            None => expr.name.name.clone(),
        }
    }

    fn visit_member_expr(&mut self, expr: &MemberExpr) -> String {
        let object = expr.object.accept(self);
        self.parenthesize(".", [object, expr.property.name.clone()])
    }

    fn visit_identifier(&mut self, expr: &Identifier) -> String {
        expr.name.clone()
    }
}

impl StmtVisitor for AstPrinter {
    type Output = String;

    fn visit_block_stmt(&mut self, stmt: &BlockStmt) -> String {
        let statements = self.stmts(&stmt.statements);
        self.parenthesize("block", statements)
    }

    fn visit_break_stmt(&mut self, _stmt: &BreakStmt) -> String {
        "(break)".to_string()
    }

    fn visit_continue_stmt(&mut self, _stmt: &ContinueStmt) -> String {
        "(continue)".to_string()
    }

    fn visit_expression_stmt(&mut self, stmt: &ExpressionStmt) -> String {
        let expression = stmt.expression.accept(self);
        self.parenthesize(";", [expression])
    }

    fn visit_return_stmt(&mut self, stmt: &ReturnStmt) -> String {
        let value: Vec<String> = stmt.value.iter().map(|v| v.accept(self)).collect();
        self.parenthesize("return", value)
    }

    fn visit_throw_stmt(&mut self, stmt: &ThrowStmt) -> String {
        let value = stmt.value.accept(self);
        self.parenthesize("throw", [value])
    }

    fn visit_try_stmt(&mut self, stmt: &TryStmt) -> String {
        let mut parts = vec![self.visit_block_stmt(&stmt.try_block)];
        if stmt.catch_variable.is_some() || stmt.catch_block.is_some() {
            let mut catch = Vec::new();
            if let Some(name) = &stmt.catch_variable {
                catch.push(name.clone());
            }
            if let Some(block) = &stmt.catch_block {
                catch.push(self.visit_block_stmt(block));
            }
            parts.push(self.parenthesize("catch", catch));
        }
        if let Some(block) = &stmt.finally_block {
            let finally = self.visit_block_stmt(block);
            parts.push(self.parenthesize("finally", [finally]));
        }
        self.parenthesize("try", parts)
    }

    fn visit_if_stmt(&mut self, stmt: &IfStmt) -> String {
        let mut parts = vec![stmt.condition.accept(self), self.visit_block_stmt(&stmt.then_block)];
        if let Some(else_branch) = &stmt.else_branch {
            let branch = else_branch.accept(self);
            parts.push(self.parenthesize("else", [branch]));
        }
        self.parenthesize("if", parts)
    }

    fn visit_while_stmt(&mut self, stmt: &WhileStmt) -> String {
        let condition = stmt.condition.accept(self);
        let body = self.visit_block_stmt(&stmt.body);
        self.parenthesize("while", [condition, body])
    }

    fn visit_for_stmt(&mut self, stmt: &ForStmt) -> String {
        let init = self.optional_stmt(stmt.init.as_deref());
        let condition = stmt
            .condition
            .as_ref()
            .map(|c| c.accept(self))
            .unwrap_or_else(|| "_".to_string());
        let post = self.optional_stmt(stmt.post.as_deref());
        let body = self.visit_block_stmt(&stmt.body);
        self.parenthesize("for", [init, condition, post, body])
    }

    fn visit_switch_case(&mut self, stmt: &SwitchCase) -> String {
        let mut parts = self.exprs(stmt.case_exprs());
        parts.push(self.visit_block_stmt(stmt.body()));
        self.parenthesize("case", parts)
    }

    fn visit_switch_stmt(&mut self, stmt: &SwitchStmt) -> String {
        let mut parts = vec![stmt.scrutinee.accept(self)];
        for case in &stmt.cases {
            parts.push(case.accept(self));
        }
        if let Some(block) = &stmt.default {
            let default = self.visit_block_stmt(block);
            parts.push(self.parenthesize("default", [default]));
        }
        self.parenthesize("switch", parts)
    }

    fn visit_val_stmt(&mut self, stmt: &ValStmt) -> String {
        let head = self.head(stmt.modifier, "val");
        self.binding(&head, &stmt.name, stmt.declared_type.as_ref(), stmt.initializer.as_ref())
    }

    fn visit_let_stmt(&mut self, stmt: &LetStmt) -> String {
        let head = self.head(stmt.modifier, "let");
        self.binding(&head, &stmt.name, stmt.declared_type.as_ref(), stmt.initializer.as_ref())
    }

    fn visit_global_stmt(&mut self, stmt: &GlobalStmt) -> String {
        self.binding("global", &stmt.name, stmt.declared_type.as_ref(), stmt.initializer.as_ref())
    }

    fn visit_function_stmt(&mut self, stmt: &FunctionStmt) -> String {
        let mut keyword = String::new();
        if stmt.is_override {
            keyword.push_str("override ");
        }
        if stmt.is_async {
            keyword.push_str("async ");
        }
        keyword.push_str("fun");
        let head = self.head(stmt.modifier, &keyword);

        let mut parts = vec![stmt.name.clone(), self.params(&stmt.parameters)];
        if let Some(ty) = &stmt.return_type {
            parts.push(format!("-> {}", ty));
        }
        parts.push(self.visit_block_stmt(&stmt.body));
        self.parenthesize(&head, parts)
    }

    fn visit_class_stmt(&mut self, stmt: &ClassStmt) -> String {
        let head = self.head(stmt.modifier, "class");
        let mut parts = vec![stmt.name.clone()];
        if let Some(superclass) = &stmt.superclass {
            parts.push(format!("extends {}", superclass));
        }
        parts.extend(self.stmts(&stmt.members));
        self.parenthesize(&head, parts)
    }

    fn visit_constructor_stmt(&mut self, stmt: &ConstructorStmt) -> String {
        let params = self.params(&stmt.parameters);
        let body = self.visit_block_stmt(&stmt.body);
        self.parenthesize("constructor", [params, body])
    }

    fn visit_interface_stmt(&mut self, stmt: &InterfaceStmt) -> String {
        let head = self.head(stmt.modifier, "interface");
        let mut parts = vec![stmt.name.clone()];
        parts.extend(self.stmts(&stmt.members));
        self.parenthesize(&head, parts)
    }

    fn visit_struct_stmt(&mut self, stmt: &StructStmt) -> String {
        let head = self.head(stmt.modifier, "struct");
        let mut parts = vec![stmt.name.clone()];
        parts.extend(self.stmts(&stmt.members));
        self.parenthesize(&head, parts)
    }

    fn visit_enum_stmt(&mut self, stmt: &EnumStmt) -> String {
        let head = self.head(stmt.modifier, "enum");
        let mut parts = vec![stmt.name.clone()];
        parts.extend(stmt.elements.iter().cloned());
        self.parenthesize(&head, parts)
    }

    fn visit_data_stmt(&mut self, stmt: &DataStmt) -> String {
        let head = self.head(stmt.modifier, "data");
        let fields = self.params(&stmt.fields);
        self.parenthesize(&head, [stmt.name.clone(), fields])
    }

    fn visit_import_stmt(&mut self, stmt: &ImportStmt) -> String {
        self.parenthesize("import", [stmt.module.clone()])
    }

    fn visit_export_stmt(&mut self, stmt: &ExportStmt) -> String {
        self.parenthesize("export", [stmt.exported_name.clone()])
    }
}
