//! 批量词法分析
//!
//! 在工作线程上并行扫描多个互不相关的源码单元。
//! 每个单元由独立的 [`Lexer`] 扫描，单元之间的错误互不影响。

use std::fmt;

use crossbeam_channel::bounded;
use crossbeam_utils::thread;
use parking_lot::Mutex;

use super::error::LexError;
use super::scanner::Lexer;
use super::token::Token;
use crate::config::DEFAULT_QUEUE_CAPACITY;
use crate::i18n::{format_message, messages, Locale};

/// 待扫描的源码单元
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    /// 单元名称（通常是文件名）
    pub name: String,
    /// 完整源码
    pub source: String,
}

impl SourceUnit {
    /// 创建新的源码单元
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }
}

/// 单个单元的扫描结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexOutcome {
    /// 单元名称
    pub name: String,
    /// Token 序列或第一个词法错误
    pub result: Result<Vec<Token>, LexError>,
}

/// 批量扫描配置
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// 工作线程数（0 表示使用 CPU 核心数）
    pub num_workers: usize,
    /// 任务队列容量
    pub queue_capacity: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            num_workers: 0,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }
}

/// 批量扫描错误
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchError {
    /// 工作线程异常退出
    WorkerPanicked,
}

impl BatchError {
    /// 按指定语言生成错误描述
    pub fn message(&self, locale: Locale) -> String {
        match self {
            BatchError::WorkerPanicked => {
                format_message(messages::MSG_BATCH_WORKER_PANICKED, locale, &[])
            }
        }
    }
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message(Locale::default()))
    }
}

impl std::error::Error for BatchError {}

/// 批量词法分析器
pub struct BatchLexer {
    config: BatchConfig,
}

impl BatchLexer {
    /// 创建批量词法分析器
    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }

    /// 实际使用的工作线程数，不超过单元数量
    fn worker_count(&self, units: usize) -> usize {
        let configured = if self.config.num_workers == 0 {
            num_cpus::get()
        } else {
            self.config.num_workers
        };
        configured.min(units).max(1)
    }

    /// 扫描所有单元，结果顺序与输入一致
    pub fn lex_all(&self, units: &[SourceUnit]) -> Result<Vec<LexOutcome>, BatchError> {
        if units.is_empty() {
            return Ok(Vec::new());
        }

        let workers = self.worker_count(units.len());
        let slots: Mutex<Vec<Option<Result<Vec<Token>, LexError>>>> =
            Mutex::new(vec![None; units.len()]);

        thread::scope(|scope| {
            let capacity = self.config.queue_capacity.max(1);
            let (sender, receiver) = bounded::<(usize, &SourceUnit)>(capacity);

            for _ in 0..workers {
                let receiver = receiver.clone();
                let slots = &slots;
                scope.spawn(move |_| {
                    for (index, unit) in receiver.iter() {
                        let result = Lexer::new(&unit.source).lex();
                        slots.lock()[index] = Some(result);
                    }
                });
            }
            drop(receiver);

            for job in units.iter().enumerate() {
                // 所有工作线程都已退出
                if sender.send(job).is_err() {
                    break;
                }
            }
        })
        .map_err(|_| BatchError::WorkerPanicked)?;

        units
            .iter()
            .zip(slots.into_inner())
            .map(|(unit, slot)| {
                slot.map(|result| LexOutcome {
                    name: unit.name.clone(),
                    result,
                })
                .ok_or(BatchError::WorkerPanicked)
            })
            .collect()
    }
}

impl Default for BatchLexer {
    fn default() -> Self {
        Self::new(BatchConfig::default())
    }
}
