// ==========================================
// 场地预订系统 - 引擎层错误类型
// ==========================================
// 全部为输入校验错误: 同步返回,不重试,不兜底
// 由调用方(表单)负责展示与恢复
// ==========================================

use crate::config::scheduler_config::ConfigError;
use crate::domain::types::UnknownFrequency;
use rust_decimal::Decimal;
use thiserror::Error;

/// 排期引擎错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedulerError {
    /// 次数越界或频率无法识别
    #[error("周期规则无效: {reason}")]
    InvalidRule { reason: String },

    /// 金额为负
    #[error("金额无效: {field}={value}")]
    InvalidAmount { field: String, value: Decimal },

    /// 金额过大,计算超出 Decimal 表示范围
    #[error("金额计算溢出: {field}")]
    AmountOverflow { field: String },

    /// 配置不合法
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// 日期解析失败或超出日历范围
    #[error("日期无效: {0}")]
    InvalidDate(String),
}

impl From<UnknownFrequency> for SchedulerError {
    fn from(err: UnknownFrequency) -> Self {
        SchedulerError::InvalidRule {
            reason: err.to_string(),
        }
    }
}

/// 引擎层 Result 类型别名
pub type SchedulerResult<T> = Result<T, SchedulerError>;
