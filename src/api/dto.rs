// ==========================================
// 场地预订系统 - API 数据传输对象
// ==========================================

use crate::domain::pricing::PriceQuote;
use crate::domain::recurrence::{BookingOccurrence, RecurrenceRule, RecurrenceSummary};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 预订表单（原始输入）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingForm {
    /// 场地ID
    pub field_id: String,

    /// 起始日期 (YYYY-MM-DD，日期选择器输出)
    pub start_date: String,

    /// 开始时间 (HH:MM)
    pub start_time: String,

    /// 单场时长（分钟）
    pub duration_minutes: u32,

    /// 周期频率 (NONE/WEEKLY/BIWEEKLY/MONTHLY)，空值视为 NONE
    #[serde(default)]
    pub frequency: String,

    /// 请求次数（提交前按配置范围钳制）
    #[serde(default)]
    pub occurrence_count: u32,

    /// 单场原价
    pub base_amount: Decimal,

    /// 附加服务金额
    #[serde(default)]
    pub additional_services: Vec<Decimal>,
}

/// 预订预览
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingPreview {
    /// 钳制后的周期规则
    pub rule: RecurrenceRule,

    /// 场次列表 (升序)
    pub occurrences: Vec<BookingOccurrence>,

    /// 报价
    pub quote: PriceQuote,

    /// 周期摘要
    pub summary: RecurrenceSummary,

    /// 摘要文案
    pub summary_text: String,
}
