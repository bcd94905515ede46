// ==========================================
// 场地预订系统 - 配置层
// ==========================================
// 职责: 排期引擎配置定义与加载
// 存储: config_kv 表
// ==========================================

pub mod config_manager;
pub mod scheduler_config;

// 重导出核心配置类型
pub use config_manager::{config_keys, ConfigManager};
pub use scheduler_config::{ConfigError, DiscountTable, SchedulerConfig};
