// ==========================================
// 场地预订系统 - 报价领域模型
// ==========================================
// 金额统一使用 Decimal,只对最终总价取整
// ==========================================

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 金额保留小数位
pub const CURRENCY_SCALE: u32 = 2;

// ==========================================
// PriceQuote - 报价
// ==========================================
// total_amount = round2(per_occurrence_amount * occurrence_count + services_amount)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub base_amount: Decimal,           // 单场原价
    pub discount_percent: u32,          // 折扣百分比 (0-100)
    pub occurrence_count: u32,          // 场次数
    pub per_occurrence_amount: Decimal, // 单场折后价 (未取整)
    pub services_amount: Decimal,       // 附加服务合计
    pub total_amount: Decimal,          // 总价 (2 位小数)
}

impl PriceQuote {
    /// 相对原价节省的金额（已取整）
    pub fn savings(&self) -> Decimal {
        let undiscounted = self.base_amount * Decimal::from(self.occurrence_count);
        let discounted = self.per_occurrence_amount * Decimal::from(self.occurrence_count);
        (undiscounted - discounted).round_dp(CURRENCY_SCALE)
    }
}
