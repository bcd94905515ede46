// ==========================================
// 场地预订系统 - 周期排期引擎
// ==========================================
// 职责: 纯计算,无 I/O,无副作用
// 输入: 起始日期 + 周期规则 (+ 单场价格 + 附加服务)
// 输出: 场次日期序列 / 报价 / 周期摘要
// ==========================================
// 红线: 日期推算只在本引擎内实现一次,展示摘要复用同一推算
// ==========================================

mod core;
mod pricing;


pub use core::RecurrenceScheduler;
