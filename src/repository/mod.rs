// ==========================================
// 市场销售数据自动化系统 - 存储层
// ==========================================
// 职责: 提供表格存储抽象与具体实现, 屏蔽存储细节
// 红线: Repository 不含业务逻辑
// 约束: 所有查询使用参数化或白名单, 防止 SQL 注入
// ==========================================

pub mod error;
pub mod sheet_repo;
pub mod store;

// 重导出核心类型
pub use error::{StoreError, StoreResult};
pub use sheet_repo::SheetRepository;
pub use store::TabularStore;
