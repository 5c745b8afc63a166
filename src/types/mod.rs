//! 类型模块
//! 
//! 声明上的类型注解

pub mod types;

pub use types::{PrimitiveType, Type};
