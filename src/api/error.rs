// ==========================================
// 场地预订系统 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型，将引擎/外部服务错误转换为表单可展示的错误消息
// ==========================================

use crate::engine::error::SchedulerError;
use chrono::NaiveDate;
use thiserror::Error;

/// 外部预订服务错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("预订服务网络错误: {0}")]
    Network(String),

    #[error("预订服务拒绝请求: status={status}, message={message}")]
    Rejected { status: u16, message: String },
}

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 输入错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Scheduler(#[from] SchedulerError),

    // ==========================================
    // 业务规则错误
    // ==========================================
    #[error("场次与已占用时段冲突: {}", format_dates(.dates))]
    SlotUnavailable { dates: Vec<NaiveDate> },

    // ==========================================
    // 外部服务错误
    // ==========================================
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn format_dates(dates: &[NaiveDate]) -> String {
    dates
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl ApiError {
    /// 是否为用户输入问题（表单内联提示），否则走全局提示
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            ApiError::InvalidInput(_) | ApiError::Scheduler(_) | ApiError::SlotUnavailable { .. }
        )
    }
}

/// API层 Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
