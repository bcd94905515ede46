use crate::config::scheduler_config::{ConfigError, SchedulerConfig};
use crate::domain::recurrence::{BookingOccurrence, RecurrenceRule, RecurrenceSummary};
use crate::domain::types::Frequency;
use crate::engine::error::{SchedulerError, SchedulerResult};
use chrono::{Datelike, Days, Months, NaiveDate, NaiveTime};
use tracing::instrument;

/// 表单日期格式 (ISO-8601)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// 表单时间格式
pub const TIME_FORMAT: &str = "%H:%M";

// ==========================================
// RecurrenceScheduler - 周期排期引擎
// ==========================================
// 无共享可变状态,可跨线程共享
#[derive(Debug, Clone, Default)]
pub struct RecurrenceScheduler {
    config: SchedulerConfig,
}

impl RecurrenceScheduler {
    /// 校验配置后创建引擎
    ///
    /// 折扣超过 100 或次数范围倒置时返回 ConfigError
    pub fn new(config: SchedulerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    // ==========================================
    // 输入边界
    // ==========================================

    /// 解析表单起始日期 (YYYY-MM-DD)
    pub fn parse_start_date(raw: &str) -> SchedulerResult<NaiveDate> {
        NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
            .map_err(|e| SchedulerError::InvalidDate(format!("{} ({})", raw, e)))
    }

    /// 解析表单开始时间 (HH:MM)
    pub fn parse_start_time(raw: &str) -> SchedulerResult<NaiveTime> {
        NaiveTime::parse_from_str(raw.trim(), TIME_FORMAT)
            .map_err(|e| SchedulerError::InvalidDate(format!("时间格式错误: {} ({})", raw, e)))
    }

    /// 表单侧钳制: 将请求次数钳制到配置范围
    pub fn clamp_rule(&self, frequency: Frequency, requested: u32) -> RecurrenceRule {
        RecurrenceRule::clamped(
            frequency,
            requested,
            self.config.min_occurrences,
            self.config.max_occurrences,
        )
    }

    /// 校验周期规则
    ///
    /// # 规则
    /// - NONE: 不校验次数
    /// - 其他: occurrence_count ∈ [min_occurrences, max_occurrences]
    pub fn validate_rule(&self, rule: &RecurrenceRule) -> SchedulerResult<()> {
        if !rule.frequency.is_recurring() {
            return Ok(());
        }

        if !self.config.allows_count(rule.occurrence_count) {
            return Err(SchedulerError::InvalidRule {
                reason: format!(
                    "frequency={} 的次数 {} 超出范围 [{}, {}]",
                    rule.frequency,
                    rule.occurrence_count,
                    self.config.min_occurrences,
                    self.config.max_occurrences
                ),
            });
        }

        Ok(())
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 计算场次日期序列
    ///
    /// # 规则
    /// - NONE → [start_date]
    /// - WEEKLY → 每次 +7 天
    /// - BIWEEKLY → 每次 +14 天
    /// - MONTHLY → 第 i 次 = start_date + i 个日历月
    ///
    /// # 月末溢出
    /// MONTHLY 以起始日期为锚点逐次计算,目标月没有该日时取当月最后一天,
    /// 之后的月份恢复原日: 2024-01-31 → 02-29 → 03-31 → 04-30 …
    ///
    /// # 返回
    /// 完整物化的升序序列,长度为 rule.effective_count()
    #[instrument(skip(self), fields(frequency = %rule.frequency, count = rule.occurrence_count))]
    pub fn compute_occurrence_dates(
        &self,
        start_date: NaiveDate,
        rule: &RecurrenceRule,
    ) -> SchedulerResult<Vec<NaiveDate>> {
        self.validate_rule(rule)?;

        let count = rule.effective_count();
        let mut dates = Vec::with_capacity(count as usize);

        for index in 0..count {
            let date = nth_occurrence(start_date, rule.frequency, index).ok_or_else(|| {
                SchedulerError::InvalidDate(format!(
                    "第{}次场次超出日历范围: start={}, frequency={}",
                    index + 1,
                    start_date,
                    rule.frequency
                ))
            })?;
            dates.push(date);
        }

        debug_assert!(dates.windows(2).all(|w| w[0] < w[1]));
        tracing::debug!(first = %start_date, generated = dates.len(), "场次日期计算完成");

        Ok(dates)
    }

    /// 计算场次（日期 + 开始时间）
    pub fn compute_occurrences(
        &self,
        start_date: NaiveDate,
        time: NaiveTime,
        rule: &RecurrenceRule,
    ) -> SchedulerResult<Vec<BookingOccurrence>> {
        let dates = self.compute_occurrence_dates(start_date, rule)?;
        Ok(dates
            .into_iter()
            .map(|date| BookingOccurrence { date, time })
            .collect())
    }

    /// 生成周期摘要（展示文案来源）
    pub fn summarize(
        &self,
        start_date: NaiveDate,
        rule: &RecurrenceRule,
    ) -> SchedulerResult<RecurrenceSummary> {
        let dates = self.compute_occurrence_dates(start_date, rule)?;
        let last_date = dates.last().copied().unwrap_or(start_date);

        Ok(RecurrenceSummary {
            frequency: rule.frequency,
            weekday: start_date.weekday(),
            occurrence_count: dates.len() as u32,
            first_date: start_date,
            last_date,
        })
    }
}

/// 第 index 次场次日期（index 从 0 开始）
fn nth_occurrence(start_date: NaiveDate, frequency: Frequency, index: u32) -> Option<NaiveDate> {
    match frequency {
        Frequency::None => Some(start_date),
        Frequency::Monthly => start_date.checked_add_months(Months::new(index)),
        Frequency::Weekly | Frequency::Biweekly => {
            let step = frequency.step_days()?;
            start_date.checked_add_days(Days::new(step * u64::from(index)))
        }
    }
}
