//! 中文消息

use super::messages::*;

/// 获取中文消息
pub fn get(key: &str) -> &'static str {
    match key {
        // 词法错误
        ERR_LEX_UNTERMINATED_STRING => "未闭合的字符串字面量",
        ERR_LEX_UNTERMINATED_COMMENT => "未闭合的块注释",
        ERR_LEX_UNEXPECTED_CHAR => "意外的字符 '{}'",

        // 批量词法分析
        MSG_BATCH_WORKER_PANICKED => "词法分析工作线程崩溃",

        // 未知消息键
        _ => "未知的消息键",
    }
}
