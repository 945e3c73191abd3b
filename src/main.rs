// ==========================================
// 市场销售数据自动化系统 - CLI 主入口
// ==========================================
// 技术栈: Rust + SQLite
// 运行模式: 单操作员、单轮、顺序执行, 完成后退出
// ==========================================

use std::sync::Arc;

use market_sales_automation::config::AppConfig;
use market_sales_automation::engine::SalesRunOrchestrator;
use market_sales_automation::input::{InputCollector, StdinSource};
use market_sales_automation::repository::SheetRepository;
use market_sales_automation::{i18n, logging};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", market_sales_automation::APP_NAME);
    tracing::info!("系统版本: {}", market_sales_automation::VERSION);
    tracing::info!("==================================================");

    // 加载配置（文件缺失时走默认值, 文件损坏时报错退出）
    let config = AppConfig::load_or_default()?;
    if let Some(locale) = &config.locale {
        i18n::set_locale(locale);
    }

    // 欢迎信息
    println!("{}\n", i18n::t("app.welcome"));
    if !config.item_names.is_empty() {
        println!(
            "{}\n",
            i18n::t_with_args("app.items", &[("items", &config.item_names.join(", "))])
        );
    }

    // 打开存储（进程级单一句柄, 显式注入编排器）
    let db_path = config.resolve_db_path();
    tracing::info!("使用数据库: {}", db_path);
    let store = Arc::new(SheetRepository::new(&db_path)?);

    // 一轮完整流程; 存储错误不捕获, 直接以非零码退出
    let orchestrator = SalesRunOrchestrator::new(store);
    let mut collector = InputCollector::new(StdinSource);
    let report = orchestrator.run(&mut collector).await?;

    tracing::info!(
        sales = ?report.sales,
        surplus = ?report.surplus,
        projected_stock = ?report.projected_stock,
        "本轮运行结果"
    );
    Ok(())
}
