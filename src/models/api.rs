//! REST API 请求/响应模型

use serde::{Deserialize, Serialize};

use crate::services::ValidationResult;

/// 产品查询（单个生成请求体，也是批量请求的元素）
#[derive(Debug, Clone, Deserialize)]
pub struct ProductQuery {
    pub product_info: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub brand_name: Option<String>,
    #[serde(default)]
    pub product_name: Option<String>,
}

/// 生成问题响应
#[derive(Debug, Serialize)]
pub struct QuestionResponse {
    pub questions: Vec<String>,
    pub category: String,
    pub confidence: f64,
}

/// 批量生成中的单个产品结果
#[derive(Debug, Clone, Serialize)]
pub struct BatchResultItem {
    pub product: String,
    pub questions: Vec<String>,
    pub category: String,
}

/// 批量生成响应
#[derive(Debug, Serialize)]
pub struct BatchQuestionResponse {
    pub results: Vec<BatchResultItem>,
}

/// 问题校验响应
#[derive(Debug, Serialize)]
pub struct ValidateQuestionsResponse {
    pub validated_questions: Vec<ValidationResult>,
}

/// 品类概要
#[derive(Debug, Serialize)]
pub struct CategorySummary {
    pub id: String,
    pub label: String,
    pub template_count: usize,
}

/// 品类列表响应
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<CategorySummary>,
    pub fallback: String,
}
