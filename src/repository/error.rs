// ==========================================
// 市场销售数据自动化系统 - 存储层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 约束: 存储错误不在运行内恢复, 原样上抛终止本次运行
// ==========================================

use thiserror::Error;

/// 存储层错误类型
#[derive(Error, Debug)]
pub enum StoreError {
    // ===== 工作表访问错误 =====
    #[error("工作表不存在: {sheet}")]
    SheetNotFound { sheet: String },

    #[error("工作表为空: {sheet}")]
    EmptySheet { sheet: String },

    #[error("列序号越界: sheet={sheet}, column={column} (合法范围 1..=6)")]
    ColumnOutOfRange { sheet: String, column: usize },

    // ===== 数据形状错误 =====
    #[error("行长度错误: sheet={sheet}, 期望 {expected} 列, 实际 {actual} 列")]
    MalformedRow {
        sheet: String,
        expected: usize,
        actual: usize,
    },

    #[error("单元格无法解析为整数: sheet={sheet}, value='{value}'")]
    MalformedCell { sheet: String, value: String },

    // ===== 数据库错误 =====
    #[error("数据库连接失败: {0}")]
    ConnectionError(String),

    #[error("数据库锁获取失败: {0}")]
    LockError(String),

    #[error("数据库查询失败: {0}")]
    QueryError(String),

    // ===== 通用错误 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// 实现 From<rusqlite::Error>
impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(_, Some(msg)) => StoreError::QueryError(msg),
            _ => StoreError::QueryError(err.to_string()),
        }
    }
}

/// Result 类型别名
pub type StoreResult<T> = Result<T, StoreError>;
