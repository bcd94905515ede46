// ==========================================
// 场地预订系统 - API 层
// ==========================================
// 职责: 表单边界,调用引擎并对接外部预订服务
// ==========================================

pub mod booking_api;
pub mod dto;
pub mod error;
pub mod gateway;

// 重导出
pub use booking_api::BookingApi;
pub use dto::{BookingForm, BookingPreview};
pub use error::{ApiError, ApiResult, GatewayError};
pub use gateway::BookingGateway;
