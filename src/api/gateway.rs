// ==========================================
// 场地预订系统 - 外部预订服务接口
// ==========================================
// 实现者: 外部 HTTP 客户端（不在本仓库内）
// 红线: 只定义契约,不包含业务逻辑
// ==========================================

use crate::api::error::GatewayError;
use crate::domain::booking::{BookingConfirmation, BookingSubmission, TimeSlot};
use async_trait::async_trait;
use chrono::NaiveDate;

// ==========================================
// BookingGateway Trait
// ==========================================
#[async_trait]
pub trait BookingGateway: Send + Sync {
    /// 查询场地在 [from, to] 日期范围内的已占用时段
    async fn booked_slots(
        &self,
        field_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<TimeSlot>, GatewayError>;

    /// 提交预订
    ///
    /// # 返回
    /// - 预订ID + 支付跳转地址
    async fn create_booking(
        &self,
        submission: &BookingSubmission,
    ) -> Result<BookingConfirmation, GatewayError>;
}
