//! 配置常量模块
//! 
//! 所有可配置的语言相关常量都在这里定义，便于后期修改

/// 语言名称
pub const LANG_NAME: &str = "Lumen";

/// 源码文件扩展名
pub const SOURCE_EXTENSION: &str = "lm";

/// 版本号
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 批量词法分析任务队列的默认容量
pub const DEFAULT_QUEUE_CAPACITY: usize = 64;

/// 判断文件名是否带有源码扩展名
pub fn is_source_file(file_name: &str) -> bool {
    file_name
        .rsplit_once('.')
        .map(|(stem, ext)| !stem.is_empty() && ext == SOURCE_EXTENSION)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_source_file() {
        assert!(is_source_file("main.lm"));
        assert!(is_source_file("lib/util.lm"));
        assert!(!is_source_file("main.rs"));
        assert!(!is_source_file(".lm"));
        assert!(!is_source_file("lm"));
    }
}
