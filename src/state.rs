//! 应用状态管理
//!
//! 定义在请求处理器之间共享的状态。

use std::sync::Arc;

use crate::services::{QuestionGenerator, QuestionValidator, TemplateCatalog};

/// 应用共享状态
///
/// 内部只有对只读模板目录的引用，跨请求共享无需加锁
#[derive(Clone)]
pub struct AppState {
    /// 问题生成器
    pub generator: QuestionGenerator,
    /// 问题校验器
    pub validator: QuestionValidator,
}

impl AppState {
    /// 创建新的应用状态
    pub fn new() -> Self {
        Self {
            generator: QuestionGenerator::new(),
            validator: QuestionValidator::new(),
        }
    }

    /// 模板目录
    pub fn catalog(&self) -> &'static TemplateCatalog {
        self.generator.catalog()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// 创建可共享的应用状态
pub fn create_shared_state() -> Arc<AppState> {
    Arc::new(AppState::new())
}
