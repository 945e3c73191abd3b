// ==========================================
// 市场销售数据自动化系统 - 工作表仓储 (SQLite)
// ==========================================
// 职责: 用本地 SQLite 实现 TabularStore, 三张表对应三张工作表
// 红线: Repository 不含业务逻辑
// 约束: 工作表名走白名单, 列名由范围检查后拼接, 防止 SQL 注入
// ==========================================

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;
use rusqlite::{params, Connection};
use tracing::debug;

use crate::db::{configure_sqlite_connection, open_sqlite_connection};
use crate::domain::ITEM_TYPE_COUNT;
use crate::repository::error::{StoreError, StoreResult};
use crate::repository::store::TabularStore;

/// 合法的工作表名
const SHEET_TABLES: [&str; 3] = ["sales", "surplus", "stock"];

// ==========================================
// SheetRepository - 工作表仓储
// ==========================================

/// 工作表仓储
///
/// 每张工作表一张同名 SQLite 表, 列 c1..c6 存 6 个商品类型的整数值,
/// recorded_at 存追加时刻（UTC, RFC 3339）。行序即追加序（rowid 递增）。
pub struct SheetRepository {
    conn: Arc<Mutex<Connection>>,
}

impl SheetRepository {
    /// 打开（或创建）数据库并初始化工作表 schema
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    pub fn new(db_path: &str) -> StoreResult<Self> {
        let conn = open_sqlite_connection(db_path)
            .map_err(|e| StoreError::ConnectionError(e.to_string()))?;
        Self::init_schema(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 从已有连接创建仓储实例
    ///
    /// 说明：为保证连接行为一致, 会对传入连接再次应用统一 PRAGMA（幂等）。
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> StoreResult<Self> {
        {
            let guard = conn
                .lock()
                .map_err(|e| StoreError::LockError(e.to_string()))?;
            configure_sqlite_connection(&guard)?;
            Self::init_schema(&guard)?;
        }
        Ok(Self { conn })
    }

    /// 获取数据库连接
    fn get_conn(&self) -> StoreResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| StoreError::LockError(e.to_string()))
    }

    /// 初始化三张工作表
    fn init_schema(conn: &Connection) -> StoreResult<()> {
        for table in SHEET_TABLES {
            conn.execute_batch(&format!(
                r#"
                CREATE TABLE IF NOT EXISTS {table} (
                    row_id      INTEGER PRIMARY KEY AUTOINCREMENT,
                    c1          INTEGER NOT NULL,
                    c2          INTEGER NOT NULL,
                    c3          INTEGER NOT NULL,
                    c4          INTEGER NOT NULL,
                    c5          INTEGER NOT NULL,
                    c6          INTEGER NOT NULL,
                    recorded_at TEXT NOT NULL
                );
                "#
            ))?;
        }
        Ok(())
    }

    /// 工作表名白名单检查
    fn table_name(sheet: &str) -> StoreResult<&'static str> {
        SHEET_TABLES
            .iter()
            .find(|t| **t == sheet)
            .copied()
            .ok_or_else(|| StoreError::SheetNotFound {
                sheet: sheet.to_string(),
            })
    }
}

#[async_trait]
impl TabularStore for SheetRepository {
    async fn read_all_rows(&self, sheet: &str) -> StoreResult<Vec<Vec<String>>> {
        let table = Self::table_name(sheet)?;
        let conn = self.get_conn()?;

        let mut stmt = conn.prepare(&format!(
            "SELECT c1, c2, c3, c4, c5, c6 FROM {table} ORDER BY row_id"
        ))?;
        let rows = stmt
            .query_map([], |row| {
                let mut cells = Vec::with_capacity(ITEM_TYPE_COUNT);
                for i in 0..ITEM_TYPE_COUNT {
                    cells.push(row.get::<_, i64>(i)?.to_string());
                }
                Ok(cells)
            })?
            .collect::<Result<Vec<_>, _>>()?;

        debug!(sheet, rows = rows.len(), "读取工作表全部行");
        Ok(rows)
    }

    async fn read_column(&self, sheet: &str, column: usize) -> StoreResult<Vec<String>> {
        let table = Self::table_name(sheet)?;
        if column < 1 || column > ITEM_TYPE_COUNT {
            return Err(StoreError::ColumnOutOfRange {
                sheet: sheet.to_string(),
                column,
            });
        }
        let conn = self.get_conn()?;

        // 列名在范围检查之后拼接, 不接受任意输入
        let mut stmt =
            conn.prepare(&format!("SELECT c{column} FROM {table} ORDER BY row_id"))?;
        let values = stmt
            .query_map([], |row| Ok(row.get::<_, i64>(0)?.to_string()))?
            .collect::<Result<Vec<_>, _>>()?;

        debug!(sheet, column, entries = values.len(), "读取工作表单列");
        Ok(values)
    }

    async fn append_row(&self, sheet: &str, row: &[i64]) -> StoreResult<()> {
        let table = Self::table_name(sheet)?;
        if row.len() != ITEM_TYPE_COUNT {
            return Err(StoreError::MalformedRow {
                sheet: sheet.to_string(),
                expected: ITEM_TYPE_COUNT,
                actual: row.len(),
            });
        }
        let conn = self.get_conn()?;

        conn.execute(
            &format!(
                "INSERT INTO {table} (c1, c2, c3, c4, c5, c6, recorded_at) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)"
            ),
            params![
                row[0],
                row[1],
                row[2],
                row[3],
                row[4],
                row[5],
                Utc::now().to_rfc3339(),
            ],
        )?;

        debug!(sheet, ?row, "追加行成功");
        Ok(())
    }
}
