// ==========================================
// 市场销售数据自动化系统 - 应用配置
// ==========================================
// 职责: 从 JSON 文件加载应用配置, 缺省时提供默认值
// 约束: 配置文件缺失不是错误; 配置文件损坏才是错误
// ==========================================

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// 配置层错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败: {path}: {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("配置文件解析失败: {path}: {source}")]
    ParseError {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

// ==========================================
// AppConfig - 应用配置
// ==========================================

/// 应用配置
///
/// 所有字段可缺省:
/// - db_path: 缺省时使用用户数据目录下的默认数据库
/// - locale: 缺省时使用 "en"
/// - item_names: 商品类型标签（仅用于欢迎信息展示, 不参与计算）
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub db_path: Option<String>,
    pub locale: Option<String>,
    pub item_names: Vec<String>,
}

impl AppConfig {
    /// 从指定路径加载配置
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.display().to_string(),
            source,
        })?;
        let config = serde_json::from_str(&raw).map_err(|source| ConfigError::ParseError {
            path: path.display().to_string(),
            source,
        })?;
        Ok(config)
    }

    /// 从默认路径加载配置; 文件不存在时返回默认配置
    ///
    /// 文件存在但损坏时仍然报错, 避免静默吞掉写错的配置。
    pub fn load_or_default() -> Result<Self, ConfigError> {
        let path = get_default_config_path();
        if !path.exists() {
            debug!(path = %path.display(), "配置文件不存在, 使用默认配置");
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    /// 解析实际使用的数据库路径
    pub fn resolve_db_path(&self) -> String {
        match &self.db_path {
            Some(path) if !path.trim().is_empty() => path.clone(),
            _ => get_default_db_path(),
        }
    }
}

/// 获取默认配置文件路径（用户配置目录下）
pub fn get_default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("market-sales-automation")
        .join("config.json")
}

/// 获取默认数据库路径
///
/// # 返回
/// - 环境变量 MARKET_SALES_DB_PATH 非空时优先生效（便于调试/测试/CI）
/// - 否则: 用户数据目录/market-sales-automation/market_sales.db
/// - 拿不到用户数据目录时回退为当前目录下的 ./market_sales.db
pub fn get_default_db_path() -> String {
    // 允许通过环境变量显式指定 DB 路径
    if let Ok(path) = std::env::var("MARKET_SALES_DB_PATH") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    let mut path = PathBuf::from("./market_sales.db");
    if let Some(data_dir) = dirs::data_dir() {
        path = data_dir.join("market-sales-automation");
        std::fs::create_dir_all(&path).ok();
        path = path.join("market_sales.db");
    }
    path.to_string_lossy().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.db_path.is_none());
        assert!(config.locale.is_none());
        assert!(config.item_names.is_empty());
    }

    #[test]
    fn test_parse_full_config() {
        let raw = r#"{
            "db_path": "/tmp/test.db",
            "locale": "zh-CN",
            "item_names": ["a", "b", "c", "d", "e", "f"]
        }"#;
        let config: AppConfig = serde_json::from_str(raw).unwrap();
        assert_eq!(config.db_path.as_deref(), Some("/tmp/test.db"));
        assert_eq!(config.locale.as_deref(), Some("zh-CN"));
        assert_eq!(config.item_names.len(), 6);
        assert_eq!(config.resolve_db_path(), "/tmp/test.db");
    }

    #[test]
    fn test_parse_partial_config() {
        // 字段均可缺省
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert!(config.db_path.is_none());
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let err = AppConfig::load(Path::new("/nonexistent/config.json")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }

    #[test]
    fn test_load_broken_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = AppConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }
}
