//! 品类列表端点

use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;

use crate::models::{CategoriesResponse, CategorySummary};
use crate::state::AppState;

/// 列出模板目录中的品类
async fn list_categories(State(state): State<Arc<AppState>>) -> Json<CategoriesResponse> {
    let catalog = state.catalog();
    let categories = catalog
        .categories()
        .iter()
        .map(|c| CategorySummary {
            id: c.id.to_string(),
            label: c.label.to_string(),
            template_count: c.templates.len(),
        })
        .collect();

    Json(CategoriesResponse {
        categories,
        fallback: catalog.fallback_key().to_string(),
    })
}

/// 创建品类路由
pub fn category_routes() -> Router<Arc<AppState>> {
    Router::new().route("/categories", get(list_categories))
}
