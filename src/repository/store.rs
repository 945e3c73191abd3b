// ==========================================
// 市场销售数据自动化系统 - 表格存储接口
// ==========================================
// 职责: 抽象外部表格存储（托管表格服务）的最小能力
// 红线: 核心只依赖本接口, 不依赖任何具体存储实现
// ==========================================

use async_trait::async_trait;

use crate::repository::error::StoreResult;

/// 表格存储接口
///
/// 三张工作表（"sales" / "surplus" / "stock"）按 6 个固定商品类型
/// 的列位置对齐。单元格以字符串返回, 解析由调用方负责,
/// 与远程表格服务返回文本单元格的行为一致。
#[async_trait]
pub trait TabularStore: Send + Sync {
    /// 读取工作表全部行（按追加顺序）
    async fn read_all_rows(&self, sheet: &str) -> StoreResult<Vec<Vec<String>>>;

    /// 读取工作表单列（按追加顺序）
    ///
    /// # 参数
    /// - column: 列序号, 1 起始
    async fn read_column(&self, sheet: &str, column: usize) -> StoreResult<Vec<String>>;

    /// 向工作表追加一行
    ///
    /// 行要么完整写入要么不写入, 不存在部分写入的行。
    async fn append_row(&self, sheet: &str, row: &[i64]) -> StoreResult<()>;
}
