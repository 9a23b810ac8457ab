//! ClearChoice Insight AI Service
//!
//! 使用 axum 框架构建的问题生成服务：按品类模板为产品透明度流程生成追问，并对问题质量打分。

use anyhow::Context;
use axum::body::Body;
use axum::http::{HeaderValue, Request};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, info_span, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

mod api;
mod config;
mod error;
mod models;
mod services;
mod state;

use api::create_api_routes;
use config::{get_config, AppConfig};
use state::create_shared_state;

/// 按配置的来源白名单构建 CORS 层
fn build_cors(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter(|origin| {
            // 通配符与 allow_credentials 冲突
            if origin.as_str() == "*" {
                warn!("CORS 来源不支持通配符 *，已忽略");
                return false;
            }
            true
        })
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("忽略无效的 CORS 来源 {}: {}", origin, e);
                None
            }
        })
        .collect();

    // 携带凭据时不能使用通配符，改为镜像请求
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = get_config();

    // 初始化日志
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ClearChoice Insight AI Service...");
    info!("CORS 允许来源: {:?}", config.cors_origins);

    // 创建共享状态
    let state = create_shared_state();

    // 每个请求一个 span，带短请求 ID
    let trace = TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
        let request_id = Uuid::new_v4().simple().to_string();
        info_span!(
            "request",
            id = &request_id[..8],
            method = %request.method(),
            path = %request.uri().path(),
        )
    });

    // 构建路由
    let app = Router::new()
        .merge(create_api_routes(Arc::clone(&state)))
        .layer(build_cors(&config))
        .layer(trace);

    let addr = config.bind_addr()?;
    info!("Server listening on: {}", addr);

    // 启动服务器
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("无法绑定 {}", addr))?;
    axum::serve(listener, app).await.context("服务器异常退出")?;

    Ok(())
}
