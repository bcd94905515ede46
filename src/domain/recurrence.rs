// ==========================================
// 场地预订系统 - 周期规则领域模型
// ==========================================
// 职责: 周期规则、预订场次、周期摘要
// 红线: 场次由排期引擎生成后只读,不允许修改
// ==========================================

use crate::domain::types::Frequency;
use chrono::{NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 周期预订默认最少次数
pub const DEFAULT_MIN_OCCURRENCES: u32 = 2;

/// 周期预订默认最多次数
pub const DEFAULT_MAX_OCCURRENCES: u32 = 12;

// ==========================================
// RecurrenceRule - 周期规则
// ==========================================
// 生命周期: 表单配置时临时创建,立即交给排期引擎消费
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrenceRule {
    pub frequency: Frequency,  // 周期频率
    pub occurrence_count: u32, // 重复次数 (NONE 时忽略)
}

impl RecurrenceRule {
    /// 按原值创建规则（不做范围校验，由排期引擎校验）
    pub fn new(frequency: Frequency, occurrence_count: u32) -> Self {
        Self {
            frequency,
            occurrence_count,
        }
    }

    /// 单次预订
    pub fn single() -> Self {
        Self::new(Frequency::None, 1)
    }

    /// 表单侧规则：将次数钳制到 [min, max]
    ///
    /// NONE 固定为 1 次；min > max 时以 max 为准
    pub fn clamped(frequency: Frequency, requested: u32, min: u32, max: u32) -> Self {
        if !frequency.is_recurring() {
            return Self::single();
        }
        Self::new(frequency, requested.max(min).min(max))
    }

    /// 实际生成的场次数
    pub fn effective_count(&self) -> u32 {
        if self.frequency.is_recurring() {
            self.occurrence_count
        } else {
            1
        }
    }
}

// ==========================================
// BookingOccurrence - 预订场次
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BookingOccurrence {
    pub date: NaiveDate, // 场次日期
    pub time: NaiveTime, // 开始时间 (墙上时间)
}

// ==========================================
// RecurrenceSummary - 周期摘要 (展示用)
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrenceSummary {
    pub frequency: Frequency,
    pub weekday: Weekday,
    pub occurrence_count: u32,
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
}

/// 星期中文名
fn weekday_label(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "周一",
        Weekday::Tue => "周二",
        Weekday::Wed => "周三",
        Weekday::Thu => "周四",
        Weekday::Fri => "周五",
        Weekday::Sat => "周六",
        Weekday::Sun => "周日",
    }
}

impl fmt::Display for RecurrenceSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.frequency {
            Frequency::None => write!(
                f,
                "单次预订: {} ({})",
                self.first_date,
                weekday_label(self.weekday)
            ),
            Frequency::Monthly => write!(
                f,
                "每月{}日, 共{}次 ({} 至 {})",
                self.first_date.format("%d"),
                self.occurrence_count,
                self.first_date,
                self.last_date
            ),
            Frequency::Weekly | Frequency::Biweekly => write!(
                f,
                "{}{}, 共{}次 ({} 至 {})",
                self.frequency.label(),
                weekday_label(self.weekday),
                self.occurrence_count,
                self.first_date,
                self.last_date
            ),
        }
    }
}
