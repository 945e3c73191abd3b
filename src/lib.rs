// ==========================================
// 市场销售数据自动化系统 - 核心库
// ==========================================
// 技术栈: Rust + SQLite
// 系统定位: 销售录入与库存决策支持
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 行类型与常量
pub mod domain;

// 输入采集层 - 操作员输入校验
pub mod input;

// 存储层 - 表格存储抽象与实现
pub mod repository;

// 引擎层 - 指标计算与流程编排
pub mod engine;

// 配置层 - 应用配置
pub mod config;

// 数据库基础设施（连接初始化/PRAGMA 统一）
pub mod db;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    ProjectedStockRow, SalesHistory, SalesRow, StockRow, SurplusRow, ITEM_TYPE_COUNT,
};

// 输入采集
pub use input::{validate, InputCollector, LineSource, StdinSource, ValidationError};

// 引擎
pub use engine::{MetricsEngine, RunReport, SalesRunOrchestrator};

// 存储
pub use repository::{SheetRepository, StoreError, StoreResult, TabularStore};

// 配置
pub use config::{get_default_db_path, AppConfig};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "市场销售数据自动化系统";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
