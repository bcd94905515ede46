// ==========================================
// 场地预订系统 - 预订领域模型
// ==========================================
// 职责: 已占用时段、预订提交载荷、预订确认
// 说明: 预订持久化与支付由外部预订服务负责
// ==========================================

use crate::domain::pricing::PriceQuote;
use crate::domain::recurrence::BookingOccurrence;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ==========================================
// TimeSlot - 已占用时段
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub date: NaiveDate,  // 日期
    pub start: NaiveTime, // 开始时间
    pub end: NaiveTime,   // 结束时间 (早于 start 视为跨零点)
}

impl TimeSlot {
    pub fn start_at(&self) -> NaiveDateTime {
        self.date.and_time(self.start)
    }

    /// 结束时刻；end <= start 时落在次日
    pub fn end_at(&self) -> NaiveDateTime {
        if self.end > self.start {
            self.date.and_time(self.end)
        } else {
            match self.date.succ_opt() {
                Some(next) => next.and_time(self.end),
                None => NaiveDateTime::MAX,
            }
        }
    }
}

// ==========================================
// BookingSubmission - 预订提交载荷
// ==========================================
// 交给外部预订服务,由其完成持久化并发起支付
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingSubmission {
    pub request_id: Uuid,                    // 请求ID (幂等键)
    pub field_id: String,                    // 场地ID
    pub duration_minutes: u32,               // 单场时长
    pub occurrences: Vec<BookingOccurrence>, // 场次列表 (升序)
    pub quote: PriceQuote,                   // 报价
}

// ==========================================
// BookingConfirmation - 预订确认
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingConfirmation {
    pub booking_id: String,  // 预订ID
    pub payment_url: String, // 支付跳转地址
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_crossing_midnight() {
        let slot = TimeSlot {
            date: NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
            start: NaiveTime::from_hms_opt(23, 0, 0).unwrap(),
            end: NaiveTime::from_hms_opt(1, 0, 0).unwrap(),
        };
        assert_eq!(
            slot.end_at(),
            NaiveDate::from_ymd_opt(2024, 5, 11)
                .unwrap()
                .and_hms_opt(1, 0, 0)
                .unwrap()
        );
    }
}
