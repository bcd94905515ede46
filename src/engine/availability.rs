// ==========================================
// 场地预订系统 - 可用性过滤引擎
// ==========================================
// 职责: 将场次划分为可预订 / 与已占用时段冲突
// 输入: 场次列表 + 单场时长 + 场地已占用时段
// 输出: AvailabilityReport
// ==========================================
// 冲突判定: 半开区间重叠 a.start < b.end && b.start < a.end
// 首尾相接不算冲突
// ==========================================

use crate::domain::booking::TimeSlot;
use crate::domain::recurrence::BookingOccurrence;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::instrument;

// ==========================================
// AvailabilityReport - 可用性报告
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityReport {
    /// 可预订场次 (升序)
    pub available: Vec<BookingOccurrence>,

    /// 冲突场次 (升序)
    pub conflicts: Vec<BookingOccurrence>,
}

impl AvailabilityReport {
    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }

    /// 冲突日期列表
    pub fn conflict_dates(&self) -> Vec<NaiveDate> {
        self.conflicts.iter().map(|o| o.date).collect()
    }
}

// ==========================================
// AvailabilityFilter - 可用性过滤引擎
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct AvailabilityFilter {
    // 无状态引擎,不需要注入依赖
}

impl AvailabilityFilter {
    pub fn new() -> Self {
        Self {}
    }

    /// 检查场次可用性
    ///
    /// # 参数
    /// - `occurrences`: 待检查场次
    /// - `duration_minutes`: 单场时长（分钟）
    /// - `booked`: 场地已占用时段
    ///
    /// # 返回
    /// available / conflicts 两组,各自保持升序
    #[instrument(skip(self, occurrences, booked), fields(
        occurrences = occurrences.len(),
        booked = booked.len()
    ))]
    pub fn check(
        &self,
        occurrences: &[BookingOccurrence],
        duration_minutes: u32,
        booked: &[TimeSlot],
    ) -> AvailabilityReport {
        let mut report = AvailabilityReport::default();

        for occurrence in occurrences {
            let (start, end) = occurrence_window(occurrence, duration_minutes);
            let conflicted = booked
                .iter()
                .any(|slot| start < slot.end_at() && slot.start_at() < end);

            if conflicted {
                report.conflicts.push(*occurrence);
            } else {
                report.available.push(*occurrence);
            }
        }

        report.available.sort();
        report.conflicts.sort();

        if report.has_conflicts() {
            tracing::info!(
                conflicts = report.conflicts.len(),
                "存在与已占用时段冲突的场次"
            );
        }

        report
    }
}

/// 场次占用区间 [start, end)
fn occurrence_window(
    occurrence: &BookingOccurrence,
    duration_minutes: u32,
) -> (NaiveDateTime, NaiveDateTime) {
    let start = occurrence.date.and_time(occurrence.time);
    let end = start
        .checked_add_signed(Duration::minutes(i64::from(duration_minutes)))
        .unwrap_or(NaiveDateTime::MAX);
    (start, end)
}
