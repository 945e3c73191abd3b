// ==========================================
// 市场销售数据自动化系统 - 指标计算引擎
// ==========================================
// 职责: 盈余计算 + 推荐库存计算
// 红线: 纯函数, 无副作用, 调用之间不保留任何状态
// ==========================================

use crate::domain::{ProjectedStockRow, SalesHistory, SalesRow, StockRow, SurplusRow, ITEM_TYPE_COUNT};

/// 推荐库存上浮系数（销售均值 +10%）
pub const STOCK_HEADROOM_RATIO: f64 = 1.1;

// ==========================================
// MetricsEngine - 指标计算引擎
// ==========================================

/// 指标计算引擎
///
/// 两个纯运算, 输入只读:
/// - [`surplus`](MetricsEngine::surplus): 库存减销售的逐项差
/// - [`projected_stock`](MetricsEngine::projected_stock): 近期销售均值上浮 10%
pub struct MetricsEngine;

impl MetricsEngine {
    /// 创建新的指标计算引擎
    pub fn new() -> Self {
        Self
    }

    /// 计算盈余行: stock[i] - sales[i]
    ///
    /// 正数表示未售出的剩余（浪费）, 负数表示脱销后超出库存的需求。
    /// 两行等长由定长行类型保证。
    pub fn surplus(&self, stock: &StockRow, sales: &SalesRow) -> SurplusRow {
        let mut out = [0i64; ITEM_TYPE_COUNT];
        for i in 0..ITEM_TYPE_COUNT {
            out[i] = stock[i] - sales[i];
        }
        out
    }

    /// 计算推荐库存行
    ///
    /// 对每个商品类型: 按历史列的**实际条数**求算术均值
    /// （工作表早期可能不足 5 条）, 乘以 [`STOCK_HEADROOM_RATIO`],
    /// 再按"四舍五入、半数远离零"（`f64::round`）取整。
    ///
    /// 前置条件: 每列历史非空（由存储侧保证, 本引擎不作运行期校验）。
    pub fn projected_stock(&self, history: &SalesHistory) -> ProjectedStockRow {
        let mut out = [0i64; ITEM_TYPE_COUNT];
        for (i, column) in history.iter().enumerate() {
            debug_assert!(!column.is_empty(), "销售历史列不能为空");
            let sum: i64 = column.iter().sum();
            let average = sum as f64 / column.len() as f64;
            out[i] = (average * STOCK_HEADROOM_RATIO).round() as i64;
        }
        out
    }
}

// ==========================================
// 单元测试
// ==========================================
