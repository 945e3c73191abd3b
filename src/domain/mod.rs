// ==========================================
// 市场销售数据自动化系统 - 领域模型层
// ==========================================
// 职责: 定义行类型与商品类型常量
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod row;

// 重导出核心类型
pub use row::{
    ProjectedStockRow, SalesHistory, SalesRow, StockRow, SurplusRow, ITEM_TYPE_COUNT,
};
