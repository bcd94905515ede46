// ==========================================
// 场地预订系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod booking;
pub mod pricing;
pub mod recurrence;
pub mod types;

// 重导出核心类型
pub use booking::{BookingConfirmation, BookingSubmission, TimeSlot};
pub use pricing::PriceQuote;
pub use recurrence::{BookingOccurrence, RecurrenceRule, RecurrenceSummary};
pub use types::{Frequency, ServiceChargePolicy, UnknownFrequency};
