//! 问题生成服务
//!
//! 从模板目录选取品类模板，按产品名/品牌名个性化，
//! 并根据产品描述追加一个上下文问题。

use crate::models::{BatchResultItem, ProductQuery};
use crate::services::catalog::{catalog, TemplateCatalog};

/// 未指定品类时使用的品类名（不在目录中，查找时会落到兜底品类）
pub const DEFAULT_CATEGORY: &str = "general";

/// 固定置信度
pub const CONFIDENCE: f64 = 0.85;

/// 每次选取的模板数量
const TEMPLATE_COUNT: usize = 3;

/// 描述长度超过该值才追加上下文问题
const MIN_CONTEXT_LENGTH: usize = 10;

/// 上下文问题中引用的描述字符数
const CONTEXT_PREVIEW_LENGTH: usize = 50;

/// 批量结果中缺少产品名时的占位
const UNKNOWN_PRODUCT: &str = "Unknown Product";

/// 单个产品的生成结果
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedQuestionSet {
    pub questions: Vec<String>,
    pub category: String,
    pub confidence: f64,
}

/// 问题生成器
#[derive(Debug, Clone, Copy)]
pub struct QuestionGenerator {
    catalog: &'static TemplateCatalog,
}

impl QuestionGenerator {
    /// 使用全局模板目录创建生成器
    pub fn new() -> Self {
        Self { catalog: catalog() }
    }

    /// 使用指定模板目录创建生成器
    #[cfg(test)]
    pub(crate) fn with_catalog(catalog: &'static TemplateCatalog) -> Self {
        Self { catalog }
    }

    /// 使用的模板目录
    pub fn catalog(&self) -> &'static TemplateCatalog {
        self.catalog
    }

    /// 解析实际使用的品类
    ///
    /// 空字符串与未提供等同。
    pub fn resolve_category(category: Option<&str>) -> &str {
        present(category).unwrap_or(DEFAULT_CATEGORY)
    }

    /// 生成问题列表（0 到 4 条）
    pub fn generate(
        &self,
        product_info: &str,
        category: Option<&str>,
        brand_name: Option<&str>,
        product_name: Option<&str>,
    ) -> Vec<String> {
        let category = Self::resolve_category(category);
        let templates = self.catalog.lookup(category);

        let mut questions: Vec<String> = templates
            .iter()
            .take(TEMPLATE_COUNT)
            .map(|template| personalize(template, brand_name, product_name))
            .collect();

        if let Some(question) = context_question(product_info) {
            questions.push(question);
        }

        questions
    }

    /// 为单个产品生成完整结果（含品类和置信度）
    pub fn generate_set(&self, query: &ProductQuery) -> GeneratedQuestionSet {
        let questions = self.generate(
            &query.product_info,
            query.category.as_deref(),
            query.brand_name.as_deref(),
            query.product_name.as_deref(),
        );

        GeneratedQuestionSet {
            questions,
            category: Self::resolve_category(query.category.as_deref()).to_string(),
            confidence: CONFIDENCE,
        }
    }

    /// 批量生成，结果顺序与输入一致
    pub fn generate_batch(&self, queries: &[ProductQuery]) -> Vec<BatchResultItem> {
        queries
            .iter()
            .map(|query| {
                let set = self.generate_set(query);
                BatchResultItem {
                    product: present(query.product_name.as_deref())
                        .unwrap_or(UNKNOWN_PRODUCT)
                        .to_string(),
                    questions: set.questions,
                    category: set.category,
                }
            })
            .collect()
    }
}

impl Default for QuestionGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// 过滤掉空字符串
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// 给模板加上产品/品牌前缀
///
/// 只有品牌名而没有产品名时不加前缀。
fn personalize(template: &str, brand_name: Option<&str>, product_name: Option<&str>) -> String {
    match (present(product_name), present(brand_name)) {
        (Some(product), Some(brand)) => format!("For {} by {}: {}", product, brand, template),
        (Some(product), None) => format!("For {}: {}", product, template),
        (None, _) => template.to_string(),
    }
}

/// 根据产品描述合成上下文问题
fn context_question(product_info: &str) -> Option<String> {
    if product_info.chars().count() <= MIN_CONTEXT_LENGTH {
        return None;
    }

    let preview: String = product_info.chars().take(CONTEXT_PREVIEW_LENGTH).collect();
    Some(format!(
        "Based on your description of '{}...', what additional details would help consumers make an informed decision?",
        preview
    ))
}
