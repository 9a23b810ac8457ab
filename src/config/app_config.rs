//! 应用配置管理
//!
//! 启动时按 默认值 → config.json → 环境变量 的顺序加载，之后只读。

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::AppError;

/// 获取配置文件路径
fn get_config_path() -> PathBuf {
    // 配置文件位于可执行文件同级目录
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("config.json")
}

/// 应用配置结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 允许跨域访问的来源
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    /// 日志过滤规则（RUST_LOG 优先）
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:3001".to_string(),
        "http://localhost:8080".to_string(),
    ]
}

fn default_log_filter() -> String {
    "insight_ai_service=info,tower_http=debug".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: default_cors_origins(),
            log_filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// 用环境变量覆盖配置
    fn apply_env<F>(mut self, var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = var("HOST") {
            self.host = host;
        }
        if let Some(port) = var("PORT").and_then(|p| p.trim().parse().ok()) {
            self.port = port;
        }
        if let Some(origins) = var("CORS_ORIGIN") {
            self.cors_origins = parse_origins(&origins);
        }
        self
    }

    /// 监听的 socket 地址
    pub fn bind_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("无效的监听地址 {}:{}: {}", self.host, self.port, e)))
    }
}

/// 解析逗号分隔的来源列表
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect()
}

/// 全局配置单例
static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    load_config_from_file()
        .unwrap_or_default()
        .apply_env(|key| std::env::var(key).ok())
});

/// 从文件加载配置
fn load_config_from_file() -> Option<AppConfig> {
    let path = get_config_path();
    if path.exists() {
        let content = fs::read_to_string(&path).ok()?;
        serde_json::from_str(&content).ok()
    } else {
        None
    }
}

/// 获取当前配置（克隆）
pub fn get_config() -> AppConfig {
    CONFIG.clone()
}
