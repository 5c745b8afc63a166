//! 类型定义
//! 
//! 声明和 instanceof 表达式使用的类型注解

use std::fmt;

/// 原始类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    /// 整数
    Int,
    /// 字符串
    String,
    /// 浮点数
    Float,
    /// 布尔值
    Bool,
    /// 任意类型
    Any,
}

impl PrimitiveType {
    /// 规范名称
    pub fn name(&self) -> &'static str {
        match self {
            PrimitiveType::Int => "Int",
            PrimitiveType::String => "String",
            PrimitiveType::Float => "Float",
            PrimitiveType::Bool => "Bool",
            PrimitiveType::Any => "Any",
        }
    }

    /// 从规范名称解析（大小写敏感）
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Int" => Some(PrimitiveType::Int),
            "String" => Some(PrimitiveType::String),
            "Float" => Some(PrimitiveType::Float),
            "Bool" => Some(PrimitiveType::Bool),
            "Any" => Some(PrimitiveType::Any),
            _ => None,
        }
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 类型表示
///
/// 只有原始类型和数组两种形式，数组独占其元素类型。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    /// 原始类型
    Primitive(PrimitiveType),
    /// 数组类型
    Array(Box<Type>),
}

impl Type {
    /// 数组类型名的前缀
    pub const ARRAY_MARKER: &'static str = "[]";

    /// 创建原始类型
    pub fn primitive(kind: PrimitiveType) -> Self {
        Type::Primitive(kind)
    }

    /// 创建数组类型
    pub fn array(element: Type) -> Self {
        Type::Array(Box::new(element))
    }

    /// 数组的元素类型，非数组返回 None
    pub fn element_type(&self) -> Option<&Type> {
        match self {
            Type::Array(element) => Some(element),
            Type::Primitive(_) => None,
        }
    }

    /// 规范名称，如 `Int`、`[][]String`
    pub fn type_name(&self) -> String {
        match self {
            Type::Primitive(kind) => kind.name().to_string(),
            Type::Array(element) => format!("{}{}", Self::ARRAY_MARKER, element.type_name()),
        }
    }
}

impl From<PrimitiveType> for Type {
    fn from(kind: PrimitiveType) -> Self {
        Type::Primitive(kind)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.type_name())
    }
}
