// ==========================================
// 流程编排器集成测试
// ==========================================
// 职责: 用内存存储验证 采集 → 计算 → 回写 的完整数据流
// 场景: 正常流程 / 输入重试 / 存储故障传播 / 历史窗口
// ==========================================


use std::sync::Arc;

use market_sales_automation::engine::SalesRunOrchestrator;
use market_sales_automation::input::InputCollector;
use market_sales_automation::repository::StoreError;

use test_helpers::{MemoryStore, ScriptedSource};

#[tokio::test]
async fn test_full_run_end_to_end() {
    let store = Arc::new(MemoryStore::new());
    store.seed("stock", &[[15, 15, 15, 15, 15, 15]]);
    // 已有 4 轮销售记录, 本轮追加后每列恰好 5 条
    store.seed(
        "sales",
        &[
            [10, 20, 30, 40, 50, 60],
            [10, 20, 30, 40, 50, 60],
            [10, 20, 30, 40, 50, 60],
            [10, 20, 30, 40, 50, 60],
        ],
    );

    let orchestrator = SalesRunOrchestrator::new(store.clone());
    // 先两次无效输入（非整数、数量不足）, 第三次合法
    let mut collector = InputCollector::new(ScriptedSource::new(&[
        "10,20,abc,40,50,60",
        "10,20,30,40,50",
        "10,20,30,40,50,60",
    ]));

    let report = orchestrator.run(&mut collector).await.unwrap();

    assert_eq!(report.sales, [10, 20, 30, 40, 50, 60]);
    assert_eq!(report.surplus, [5, -5, -15, -25, -35, -45]);
    // 每列 5 条相同值, 均值即该值, ×1.1 后取整
    assert_eq!(report.projected_stock, [11, 22, 33, 44, 55, 66]);

    // 三张表各追加了一行
    let sales_rows = store.rows("sales");
    assert_eq!(sales_rows.len(), 5);
    assert_eq!(sales_rows.last().unwrap(), &vec![10, 20, 30, 40, 50, 60]);
    assert_eq!(
        store.rows("surplus"),
        vec![vec![5, -5, -15, -25, -35, -45]]
    );
    let stock_rows = store.rows("stock");
    assert_eq!(stock_rows.len(), 2);
    assert_eq!(stock_rows.last().unwrap(), &vec![11, 22, 33, 44, 55, 66]);
}

#[tokio::test]
async fn test_invalid_input_never_reaches_store() {
    let store = Arc::new(MemoryStore::new());
    store.seed("stock", &[[5, 5, 5, 5, 5, 5]]);

    let orchestrator = SalesRunOrchestrator::new(store.clone());
    // 全部无效, 输入流耗尽 → I/O 错误, 存储保持原样
    let mut collector = InputCollector::new(ScriptedSource::new(&[
        "10,20,abc,40,50,60",
        "10,20,30,40,50",
    ]));

    let err = orchestrator.run(&mut collector).await.unwrap_err();
    assert!(err.downcast_ref::<std::io::Error>().is_some());
    assert!(store.rows("sales").is_empty());
    assert!(store.rows("surplus").is_empty());
}

#[tokio::test]
async fn test_store_failure_after_sales_leaves_later_sheets_stale() {
    // 盈余表追加故障: 销售已写入, 盈余与库存保持原样（接受行为, 不回滚）
    let store = Arc::new(MemoryStore::with_append_failure("surplus"));
    store.seed("stock", &[[15, 15, 15, 15, 15, 15]]);

    let orchestrator = SalesRunOrchestrator::new(store.clone());
    let mut collector = InputCollector::new(ScriptedSource::new(&["10,20,30,40,50,60"]));

    let err = orchestrator.run(&mut collector).await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<StoreError>(),
        Some(StoreError::QueryError(_))
    ));

    assert_eq!(store.rows("sales").len(), 1);
    assert!(store.rows("surplus").is_empty());
    assert_eq!(store.rows("stock").len(), 1);
}

#[tokio::test]
async fn test_empty_stock_sheet_is_fatal() {
    let store = Arc::new(MemoryStore::new());

    let orchestrator = SalesRunOrchestrator::new(store.clone());
    let mut collector = InputCollector::new(ScriptedSource::new(&["1,2,3,4,5,6"]));

    let err = orchestrator.run(&mut collector).await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<StoreError>(),
        Some(StoreError::EmptySheet { sheet }) if sheet == "stock"
    ));
    // 销售行在库存读取之前已写入, 保持不回滚
    assert_eq!(store.rows("sales").len(), 1);
}

#[tokio::test]
async fn test_short_history_divides_by_actual_count() {
    // 工作表早期: 本轮是第一条销售记录, 每列仅 1 条历史
    let store = Arc::new(MemoryStore::new());
    store.seed("stock", &[[0, 0, 0, 0, 0, 0]]);

    let orchestrator = SalesRunOrchestrator::new(store.clone());
    let mut collector = InputCollector::new(ScriptedSource::new(&["10,20,30,40,50,60"]));

    let report = orchestrator.run(&mut collector).await.unwrap();
    assert_eq!(report.projected_stock, [11, 22, 33, 44, 55, 66]);
}

#[tokio::test]
async fn test_history_window_keeps_only_last_five() {
    let store = Arc::new(MemoryStore::new());
    store.seed("stock", &[[0, 0, 0, 0, 0, 0]]);
    // 最旧一行为异常大值, 追加本轮后恰好被 5 条窗口挤出
    store.seed(
        "sales",
        &[
            [600, 600, 600, 600, 600, 600],
            [0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0],
        ],
    );

    let orchestrator = SalesRunOrchestrator::new(store.clone());
    let mut collector = InputCollector::new(ScriptedSource::new(&["10,20,30,40,50,60"]));

    let report = orchestrator.run(&mut collector).await.unwrap();
    // 各列均值 = 本轮值/5, ×1.1 取整
    assert_eq!(report.projected_stock, [2, 4, 7, 9, 11, 13]);
}
