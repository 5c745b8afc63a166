//! English messages

use super::messages::*;

/// Get English message
pub fn get(key: &str) -> &'static str {
    match key {
        // Lexical errors
        ERR_LEX_UNTERMINATED_STRING => "Unterminated string literal",
        ERR_LEX_UNTERMINATED_COMMENT => "Unterminated block comment",
        ERR_LEX_UNEXPECTED_CHAR => "Unexpected character '{}'",

        // Batch lexing
        MSG_BATCH_WORKER_PANICKED => "A lexer worker thread panicked",

        // Unknown message key
        _ => "Unknown message key",
    }
}
