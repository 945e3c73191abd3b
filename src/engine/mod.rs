// ==========================================
// 市场销售数据自动化系统 - 引擎层
// ==========================================
// 职责: 实现指标计算与流程编排
// 红线: 引擎不拼 SQL, 不直接触碰存储细节
// ==========================================

pub mod metrics;
pub mod orchestrator;

// 重导出核心引擎
pub use metrics::{MetricsEngine, STOCK_HEADROOM_RATIO};
pub use orchestrator::{
    RunReport, SalesRunOrchestrator, HISTORY_WINDOW, SHEET_SALES, SHEET_STOCK, SHEET_SURPLUS,
};
