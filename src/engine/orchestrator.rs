// ==========================================
// 市场销售数据自动化系统 - 流程编排器
// ==========================================
// 用途: 串联 采集 → 记录销售 → 盈余 → 记录盈余 → 取历史 → 推荐库存 → 记录库存
// 约束: 各步骤无条件顺序执行; 存储错误原样上抛, 不重试,
//       已写入的行不回滚（销售已写、盈余未写即终止属接受行为）
// ==========================================

use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::{
    ProjectedStockRow, SalesHistory, SalesRow, StockRow, SurplusRow, ITEM_TYPE_COUNT,
};
use crate::engine::metrics::MetricsEngine;
use crate::i18n;
use crate::input::{InputCollector, LineSource};
use crate::repository::{StoreError, StoreResult, TabularStore};

/// 销售工作表名
pub const SHEET_SALES: &str = "sales";
/// 盈余工作表名
pub const SHEET_SURPLUS: &str = "surplus";
/// 库存工作表名
pub const SHEET_STOCK: &str = "stock";

/// 推荐库存计算所取的销售历史窗口（每列最多取最近几条）
pub const HISTORY_WINDOW: usize = 5;

// ==========================================
// RunReport - 单次运行结果
// ==========================================

/// 单次运行写入三张工作表的行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub sales: SalesRow,
    pub surplus: SurplusRow,
    pub projected_stock: ProjectedStockRow,
}

// ==========================================
// SalesRunOrchestrator - 流程编排器
// ==========================================

/// 流程编排器
///
/// 持有存储句柄与指标引擎, 每次 [`run`](SalesRunOrchestrator::run)
/// 完成一轮完整的录入-计算-回写流程。
pub struct SalesRunOrchestrator<S: TabularStore> {
    store: Arc<S>,
    metrics: MetricsEngine,
}

impl<S: TabularStore> SalesRunOrchestrator<S> {
    /// 创建新的编排器实例
    ///
    /// # 参数
    /// - store: 表格存储句柄（进程级复用, 显式注入便于测试替换）
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            metrics: MetricsEngine::new(),
        }
    }

    /// 执行一轮完整流程
    ///
    /// # 参数
    /// - collector: 输入采集器（内部自带无上限重试）
    ///
    /// # 返回
    /// 本轮写入三张工作表的行; 任一存储错误直接上抛终止本轮。
    pub async fn run<R: LineSource>(
        &self,
        collector: &mut InputCollector<R>,
    ) -> Result<RunReport> {
        let run_id = Uuid::new_v4();
        info!(%run_id, "开始销售数据录入流程");

        // 步骤1: 采集销售数据（校验失败在采集器内重试, 不会到达存储）
        let sales = collector.collect()?;

        // 步骤2: 记录销售行
        self.record(SHEET_SALES, &sales).await?;

        // 步骤3: 计算盈余（最近库存行 - 本次销售行）
        println!("{}\n", i18n::t("run.calculating_surplus"));
        let stock = self.latest_stock().await?;
        let surplus = self.metrics.surplus(&stock, &sales);
        debug!(?stock, ?sales, ?surplus, "盈余计算完成");

        // 步骤4: 记录盈余行
        self.record(SHEET_SURPLUS, &surplus).await?;

        // 步骤5: 取各商品类型最近 5 条销售历史
        let history = self.fetch_sales_history().await?;

        // 步骤6: 计算推荐库存（均值 +10%）
        println!("{}\n", i18n::t("run.calculating_stock"));
        let projected_stock = self.metrics.projected_stock(&history);
        debug!(?projected_stock, "推荐库存计算完成");

        // 步骤7: 记录推荐库存行
        self.record(SHEET_STOCK, &projected_stock).await?;

        info!(%run_id, "销售数据录入流程完成");
        Ok(RunReport {
            sales,
            surplus,
            projected_stock,
        })
    }

    /// 向工作表追加一行并打印进度
    async fn record(&self, sheet: &str, row: &[i64; ITEM_TYPE_COUNT]) -> StoreResult<()> {
        println!("{}", i18n::t_with_args("run.updating", &[("sheet", sheet)]));
        self.store.append_row(sheet, row).await?;
        println!(
            "{}\n",
            i18n::t_with_args("run.updated", &[("sheet", &capitalize(sheet))])
        );
        info!(sheet, ?row, "工作表更新成功");
        Ok(())
    }

    /// 读取最近一次已知的库存行（"stock" 工作表最后一行）
    ///
    /// 空库存表属前置条件违反, 以存储错误终止本轮。
    async fn latest_stock(&self) -> StoreResult<StockRow> {
        let rows = self.store.read_all_rows(SHEET_STOCK).await?;
        let last = rows.last().ok_or_else(|| StoreError::EmptySheet {
            sheet: SHEET_STOCK.to_string(),
        })?;
        parse_row(SHEET_STOCK, last)
    }

    /// 取各商品类型最近 HISTORY_WINDOW 条销售记录
    ///
    /// 不足 HISTORY_WINDOW 条时取实际存在的条数。
    async fn fetch_sales_history(&self) -> StoreResult<SalesHistory> {
        let mut history: SalesHistory = Default::default();
        for (index, slot) in history.iter_mut().enumerate() {
            let column = self.store.read_column(SHEET_SALES, index + 1).await?;
            let tail = &column[column.len().saturating_sub(HISTORY_WINDOW)..];
            let mut values = Vec::with_capacity(tail.len());
            for cell in tail {
                values.push(parse_cell(SHEET_SALES, cell)?);
            }
            *slot = values;
        }
        Ok(history)
    }
}

/// 解析存储返回的一行字符串单元格
fn parse_row(sheet: &str, cells: &[String]) -> StoreResult<[i64; ITEM_TYPE_COUNT]> {
    if cells.len() != ITEM_TYPE_COUNT {
        return Err(StoreError::MalformedRow {
            sheet: sheet.to_string(),
            expected: ITEM_TYPE_COUNT,
            actual: cells.len(),
        });
    }
    let mut row = [0i64; ITEM_TYPE_COUNT];
    for (i, cell) in cells.iter().enumerate() {
        row[i] = parse_cell(sheet, cell)?;
    }
    Ok(row)
}

/// 解析单个字符串单元格为整数
fn parse_cell(sheet: &str, cell: &str) -> StoreResult<i64> {
    cell.trim()
        .parse()
        .map_err(|_| StoreError::MalformedCell {
            sheet: sheet.to_string(),
            value: cell.to_string(),
        })
}

/// 首字母大写（进度文案用, 如 "sales" → "Sales"）
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
