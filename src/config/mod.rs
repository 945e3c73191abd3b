// ==========================================
// 市场销售数据自动化系统 - 配置层
// ==========================================
// 职责: 应用配置加载（数据库路径、语言、商品类型标签）
// 存储: JSON 配置文件（可选, 缺省时全部走默认值）
// ==========================================

pub mod app_config;

// 重导出核心配置类型
pub use app_config::{get_default_config_path, get_default_db_path, AppConfig, ConfigError};
