//! 问题生成与校验端点

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use std::sync::Arc;
use tracing::{debug, error, info};

use crate::error::{AppError, AppResult};
use crate::models::{
    BatchQuestionResponse, ProductQuery, QuestionResponse, ValidateQuestionsResponse,
};
use crate::services::QuestionGenerator;
use crate::state::AppState;

/// 日志中产品描述的最大预览长度
const LOG_PREVIEW_CHARS: usize = 80;

/// 请求体解析失败时统一返回 400
fn parse_body<T>(payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

/// 在阻塞线程池中执行核心逻辑，捕获其中的 panic
async fn run_isolated<T, F, E>(work: F, to_error: E) -> AppResult<T>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
    E: FnOnce(String) -> AppError,
{
    tokio::task::spawn_blocking(work).await.map_err(|e| {
        let err = to_error(e.to_string());
        error!("{}", err);
        err
    })
}

fn preview(text: &str) -> String {
    let mut out: String = text.chars().take(LOG_PREVIEW_CHARS).collect();
    if out.len() < text.len() {
        out.push_str("...");
    }
    out
}

/// 为单个产品生成问题
async fn generate_questions(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ProductQuery>, JsonRejection>,
) -> AppResult<Json<QuestionResponse>> {
    let query = parse_body(payload)?;
    info!("Generating questions for: {}", preview(&query.product_info));

    let catalog = state.catalog();
    let requested = QuestionGenerator::resolve_category(query.category.as_deref());
    if !catalog.contains(requested) {
        debug!(
            "品类 {} 不在模板目录中，使用兜底品类 {}",
            requested,
            catalog.fallback_key()
        );
    }

    let generator = state.generator;
    let set = run_isolated(move || generator.generate_set(&query), AppError::Generation).await?;

    info!(
        "生成完成: category={}, {} 个问题",
        set.category,
        set.questions.len()
    );

    Ok(Json(QuestionResponse {
        questions: set.questions,
        category: set.category,
        confidence: set.confidence,
    }))
}

/// 批量生成问题
async fn generate_batch_questions(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Vec<ProductQuery>>, JsonRejection>,
) -> AppResult<Json<BatchQuestionResponse>> {
    let queries = parse_body(payload)?;
    info!("批量生成: {} 个产品", queries.len());

    let generator = state.generator;
    let results = run_isolated(
        move || generator.generate_batch(&queries),
        AppError::BatchGeneration,
    )
    .await?;

    Ok(Json(BatchQuestionResponse { results }))
}

/// 校验问题质量
async fn validate_questions(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Vec<String>>, JsonRejection>,
) -> AppResult<Json<ValidateQuestionsResponse>> {
    let questions = parse_body(payload)?;

    let validator = state.validator;
    let validated_questions = run_isolated(
        move || validator.validate_all(&questions),
        AppError::Validation,
    )
    .await?;

    info!(
        "校验完成: {}/{} 个问题有效",
        validated_questions.iter().filter(|v| v.valid).count(),
        validated_questions.len()
    );

    Ok(Json(ValidateQuestionsResponse {
        validated_questions,
    }))
}

/// 创建问题相关路由
pub fn question_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/generate-questions", post(generate_questions))
        .route("/generate-batch-questions", post(generate_batch_questions))
        .route("/validate-questions", post(validate_questions))
}
