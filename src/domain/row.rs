// ==========================================
// 市场销售数据自动化系统 - 行类型定义
// ==========================================
// 职责: 定义三张工作表共用的定长行类型
// 约束: 所有行恰好 6 个元素, 按固定商品类型位置对齐
// ==========================================

/// 固定跟踪的商品类型数量
///
/// "sales"、"surplus"、"stock" 三张工作表的每一行
/// 都按同一组 6 个商品类型的位置对齐。
pub const ITEM_TYPE_COUNT: usize = 6;

/// 一次市集的销售行（每个商品类型的售出数量）
///
/// 由操作员输入经校验后产生, 产生后不可变。
pub type SalesRow = [i64; ITEM_TYPE_COUNT];

/// 最近一次已知的库存行（"stock" 工作表的最后一行）
pub type StockRow = [i64; ITEM_TYPE_COUNT];

/// 盈余行: stock[i] - sales[i]
///
/// 正数表示未售出的剩余（浪费）, 负数表示需求超出库存（脱销）。
pub type SurplusRow = [i64; ITEM_TYPE_COUNT];

/// 推荐库存行: 各商品类型近期销售均值上浮 10% 后取整
pub type ProjectedStockRow = [i64; ITEM_TYPE_COUNT];

/// 销售历史: 每个商品类型最近的销售记录列
///
/// 每列最多 5 条; 工作表早期可能不足 5 条,
/// 均值计算按实际条数为除数, 因此用 Vec 而非定长数组。
pub type SalesHistory = [Vec<i64>; ITEM_TYPE_COUNT];
