//! 消息键定义

// 词法错误
pub const ERR_LEX_UNTERMINATED_STRING: &str = "ERR_LEX_UNTERMINATED_STRING";
pub const ERR_LEX_UNTERMINATED_COMMENT: &str = "ERR_LEX_UNTERMINATED_COMMENT";
pub const ERR_LEX_UNEXPECTED_CHAR: &str = "ERR_LEX_UNEXPECTED_CHAR";

// 批量词法分析
pub const MSG_BATCH_WORKER_PANICKED: &str = "MSG_BATCH_WORKER_PANICKED";
