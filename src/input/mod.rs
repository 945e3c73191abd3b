// ==========================================
// 市场销售数据自动化系统 - 输入采集层
// ==========================================
// 职责: 采集并校验操作员输入的销售数据
// 红线: 校验失败只在本层内重试, 绝不向上层泄漏无效数据
// ==========================================

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::SalesRow;
use crate::i18n;

// ==========================================
// ValidationError - 输入校验错误
// ==========================================

/// 输入校验错误
///
/// 两种失败只在提示文案上有区别, 重试行为完全一致;
/// 本错误永远不会越过 [`InputCollector`] 向上传播。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// 某个 token 无法解析为十进制整数
    #[error("could not convert to integer: '{token}'")]
    NotInteger { token: String },

    /// token 数量不等于 6
    #[error("Exactly 6 values required, you provided {count}")]
    WrongCount { count: usize },
}

/// 校验一行拆分后的输入
///
/// 规则（顺序固定, 先整数解析后数量检查, 解析失败即短路）:
/// 1. 每个 token 必须能解析为十进制整数;
/// 2. token 数量必须恰好为 6。
///
/// token 两侧的空白在解析前剔除（"10, 20" 视为合法）。
pub fn validate(tokens: &[&str]) -> Result<SalesRow, ValidationError> {
    let mut values = Vec::with_capacity(tokens.len());
    for token in tokens {
        let token = token.trim();
        let value: i64 = token.parse().map_err(|_| ValidationError::NotInteger {
            token: token.to_string(),
        })?;
        values.push(value);
    }

    // 数量检查在全部解析成功之后进行
    let count = values.len();
    let row: SalesRow = values
        .try_into()
        .map_err(|_| ValidationError::WrongCount { count })?;
    Ok(row)
}

// ==========================================
// LineSource - 输入行来源
// ==========================================

/// 输入行来源
///
/// 抽象"读取下一行输入"的能力, 便于测试时注入脚本化输入,
/// 生产环境使用 [`StdinSource`]。
pub trait LineSource {
    /// 读取下一行（不含行尾换行符）
    ///
    /// # 返回
    /// - Ok(Some(line)): 读到一行
    /// - Ok(None): 输入流结束
    /// - Err: I/O 错误
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// 标准输入行来源
pub struct StdinSource;

impl LineSource for StdinSource {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        let bytes = io::stdin().lock().read_line(&mut buf)?;
        if bytes == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim_end_matches(['\r', '\n']).to_string()))
    }
}

// ==========================================
// InputCollector - 输入采集器
// ==========================================

/// 输入采集器
///
/// 反复提示并读取一行逗号分隔的销售数据, 直到校验通过。
/// 重试无上限（交互式设计）, 取消依赖操作员中断进程。
pub struct InputCollector<R: LineSource> {
    source: R,
}

impl<R: LineSource> InputCollector<R> {
    /// 创建新的输入采集器
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// 采集一行合法的销售数据
    ///
    /// # 返回
    /// - Ok(SalesRow): 校验通过的销售行
    /// - Err: 输入流关闭或 I/O 错误（校验失败不属于错误, 本层内重试）
    pub fn collect(&mut self) -> io::Result<SalesRow> {
        loop {
            println!("{}", i18n::t("input.instructions_line1"));
            println!("{}", i18n::t("input.instructions_line2"));
            println!("{}\n", i18n::t("input.example"));
            println!("{}", i18n::t("input.prompt"));
            io::stdout().flush()?;

            let line = match self.source.read_line()? {
                Some(line) => line,
                None => {
                    return Err(io::Error::new(
                        io::ErrorKind::UnexpectedEof,
                        "输入流已关闭, 未采集到合法的销售数据",
                    ))
                }
            };

            let tokens: Vec<&str> = line.split(',').collect();
            match validate(&tokens) {
                Ok(row) => {
                    debug!(?row, "销售数据校验通过");
                    println!("{}\n", i18n::t("input.valid"));
                    return Ok(row);
                }
                Err(reason) => {
                    warn!(%reason, raw = %line, "销售数据校验失败, 重新提示");
                    println!(
                        "{}\n",
                        i18n::t_with_args("input.invalid", &[("reason", &reason.to_string())])
                    );
                }
            }
        }
    }
}

// ==========================================
// 单元测试
// ==========================================
