// ==========================================
// 场地预订系统 - 预订 API
// ==========================================
// 职责: 表单边界 → 排期引擎 → 外部预订服务
// 1. 解析日期/时间/频率，钳制次数
// 2. 生成预览（场次 + 报价 + 摘要）
// 3. 提交前校验可用性，再交给外部预订服务
// ==========================================

use crate::api::dto::{BookingForm, BookingPreview};
use crate::api::error::{ApiError, ApiResult};
use crate::api::gateway::BookingGateway;
use crate::domain::booking::{BookingConfirmation, BookingSubmission};
use crate::domain::types::Frequency;
use crate::engine::{AvailabilityFilter, RecurrenceScheduler, SchedulerError};
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

// ==========================================
// BookingApi - 预订 API
// ==========================================
pub struct BookingApi<G: BookingGateway> {
    gateway: Arc<G>,
    scheduler: RecurrenceScheduler,
    availability: AvailabilityFilter,
}

impl<G: BookingGateway> BookingApi<G> {
    /// 创建新的BookingApi实例
    pub fn new(gateway: Arc<G>, scheduler: RecurrenceScheduler) -> Self {
        Self {
            gateway,
            scheduler,
            availability: AvailabilityFilter::new(),
        }
    }

    pub fn scheduler(&self) -> &RecurrenceScheduler {
        &self.scheduler
    }

    /// 生成预订预览（纯计算，不访问外部服务）
    ///
    /// # 错误
    /// - ApiError::InvalidInput: 场地ID为空 / 时长为0
    /// - ApiError::Scheduler: 日期、时间、频率或金额无效
    #[instrument(skip(self, form), fields(field_id = %form.field_id, frequency = %form.frequency))]
    pub fn preview(&self, form: &BookingForm) -> ApiResult<BookingPreview> {
        if form.field_id.trim().is_empty() {
            return Err(ApiError::InvalidInput("场地ID不能为空".to_string()));
        }
        if form.duration_minutes == 0 {
            return Err(ApiError::InvalidInput("单场时长必须大于0".to_string()));
        }

        let start_date = RecurrenceScheduler::parse_start_date(&form.start_date)?;
        let start_time = RecurrenceScheduler::parse_start_time(&form.start_time)?;
        let frequency: Frequency = form.frequency.parse().map_err(SchedulerError::from)?;

        let rule = self.scheduler.clamp_rule(frequency, form.occurrence_count);
        if frequency.is_recurring() && rule.occurrence_count != form.occurrence_count {
            tracing::info!(
                requested = form.occurrence_count,
                clamped = rule.occurrence_count,
                "周期次数超出范围，已钳制"
            );
        }

        let occurrences = self
            .scheduler
            .compute_occurrences(start_date, start_time, &rule)?;
        let quote = self.scheduler.compute_total_price(
            form.base_amount,
            &rule,
            &form.additional_services,
        )?;
        let summary = self.scheduler.summarize(start_date, &rule)?;
        let summary_text = summary.to_string();

        Ok(BookingPreview {
            rule,
            occurrences,
            quote,
            summary,
            summary_text,
        })
    }

    /// 提交预订
    ///
    /// # 流程
    /// 1. 生成预览
    /// 2. 查询场地已占用时段（从首场前一天起），存在冲突则拒绝（不调用 create_booking）
    /// 3. 提交给外部预订服务，返回预订ID与支付跳转地址
    #[instrument(skip(self, form), fields(field_id = %form.field_id))]
    pub async fn submit(&self, form: &BookingForm) -> ApiResult<BookingConfirmation> {
        let preview = self.preview(form)?;

        let (first, last) = match (preview.occurrences.first(), preview.occurrences.last()) {
            (Some(first), Some(last)) => (first.date, last.date),
            _ => return Err(ApiError::InvalidInput("没有可提交的场次".to_string())),
        };

        // 前一天的跨午夜时段可能占用首场
        let from = first.pred_opt().unwrap_or(first);
        let booked = self
            .gateway
            .booked_slots(&form.field_id, from, last)
            .await?;

        let report = self
            .availability
            .check(&preview.occurrences, form.duration_minutes, &booked);
        if report.has_conflicts() {
            return Err(ApiError::SlotUnavailable {
                dates: report.conflict_dates(),
            });
        }

        let submission = BookingSubmission {
            request_id: Uuid::new_v4(),
            field_id: form.field_id.clone(),
            duration_minutes: form.duration_minutes,
            occurrences: preview.occurrences,
            quote: preview.quote,
        };

        let confirmation = self.gateway.create_booking(&submission).await?;
        tracing::info!(
            booking_id = %confirmation.booking_id,
            request_id = %submission.request_id,
            occurrences = submission.occurrences.len(),
            total = %submission.quote.total_amount,
            "预订提交成功"
        );

        Ok(confirmation)
    }
}
