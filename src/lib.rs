// ==========================================
// 场地预订系统 - 周期预订核心库
// ==========================================
// 职责: 周期预订的场次推算、计价、可用性过滤
// 预订持久化与支付由外部预订服务负责
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 排期与计价
pub mod engine;

// 配置层 - 引擎配置
pub mod config;

// 数据库基础设施（配置存储）
pub mod db;

// 日志系统
pub mod logging;

// API 层 - 表单边界与外部服务
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    BookingConfirmation, BookingOccurrence, BookingSubmission, Frequency, PriceQuote,
    RecurrenceRule, RecurrenceSummary, ServiceChargePolicy, TimeSlot,
};

// 引擎
pub use engine::{
    AvailabilityFilter, AvailabilityReport, RecurrenceScheduler, SchedulerError, SchedulerResult,
};

// 配置
pub use config::{ConfigManager, SchedulerConfig};

// API
pub use api::{ApiError, BookingApi, BookingForm, BookingGateway, BookingPreview, GatewayError};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "场地预订系统";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
