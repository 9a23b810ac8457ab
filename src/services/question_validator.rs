//! 问题质量校验
//!
//! 对任意问题文本按长度、问号、透明度关键词三项打分。

use serde::Serialize;

/// 最短长度（字符）
const MIN_LENGTH: usize = 10;

/// 最长长度（字符）
const MAX_LENGTH: usize = 200;

/// 检查项数量，用于归一化
const CHECK_COUNT: f64 = 3.0;

/// 透明度相关关键词
pub const TRANSPARENCY_KEYWORDS: &[&str] = &[
    "ingredients",
    "materials",
    "manufacturing",
    "sourcing",
    "certification",
    "testing",
    "safety",
    "environmental",
    "ethical",
    "sustainable",
    "health",
    "nutrition",
    "warranty",
];

pub const ISSUE_TOO_SHORT: &str = "Question too short";
pub const ISSUE_TOO_LONG: &str = "Question too long";
pub const ISSUE_MISSING_QUESTION_MARK: &str = "Missing question mark";

/// 单个问题的校验结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    pub question: String,
    /// 归一化分数，取值 0、1/3、2/3、1
    pub score: f64,
    pub issues: Vec<String>,
    /// 无任何问题时为 true
    pub valid: bool,
}

/// 问题校验器（无状态）
#[derive(Debug, Clone, Copy, Default)]
pub struct QuestionValidator;

impl QuestionValidator {
    pub fn new() -> Self {
        Self
    }

    /// 校验单个问题
    pub fn validate(&self, question: &str) -> ValidationResult {
        let mut points = 0u32;
        let mut issues = Vec::new();

        let length = question.chars().count();
        if length < MIN_LENGTH {
            issues.push(ISSUE_TOO_SHORT.to_string());
        } else if length > MAX_LENGTH {
            issues.push(ISSUE_TOO_LONG.to_string());
        } else {
            points += 1;
        }

        if question.trim().ends_with('?') {
            points += 1;
        } else {
            issues.push(ISSUE_MISSING_QUESTION_MARK.to_string());
        }

        // 缺少关键词只扣分，不记为问题
        if has_transparency_keyword(question) {
            points += 1;
        }

        ValidationResult {
            question: question.to_string(),
            score: f64::from(points) / CHECK_COUNT,
            valid: issues.is_empty(),
            issues,
        }
    }

    /// 批量校验，结果顺序与输入一致
    pub fn validate_all<S: AsRef<str>>(&self, questions: &[S]) -> Vec<ValidationResult> {
        questions.iter().map(|q| self.validate(q.as_ref())).collect()
    }
}

fn has_transparency_keyword(question: &str) -> bool {
    let lower = question.to_lowercase();
    TRANSPARENCY_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
}
