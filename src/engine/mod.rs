// ==========================================
// 场地预订系统 - 引擎层
// ==========================================
// 职责: 周期排期、计价、可用性过滤
// 红线: 引擎为纯计算,不做 I/O
// ==========================================

pub mod availability;
pub mod error;
pub mod scheduler;

// 重导出核心引擎
pub use availability::{AvailabilityFilter, AvailabilityReport};
pub use error::{SchedulerError, SchedulerResult};
pub use scheduler::RecurrenceScheduler;
