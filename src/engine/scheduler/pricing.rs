use super::core::RecurrenceScheduler;
use crate::config::scheduler_config::ConfigError;
use crate::domain::pricing::{PriceQuote, CURRENCY_SCALE};
use crate::domain::recurrence::RecurrenceRule;
use crate::domain::types::ServiceChargePolicy;
use crate::engine::error::{SchedulerError, SchedulerResult};
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::instrument;

impl RecurrenceScheduler {
    // ==========================================
    // 计价
    // ==========================================

    /// 计算总价
    ///
    /// 公式:
    /// - per_occurrence = base_amount * (100 - discount_pct) / 100
    /// - total = per_occurrence * count + services
    /// - services 按计费口径: ONCE 整单一次; PER_OCCURRENCE 乘以场次数
    ///
    /// 中间值不取整,只对 total_amount 取 2 位小数(四舍五入)
    ///
    /// # 错误
    /// - base_amount < 0 或任一附加服务金额 < 0 → InvalidAmount
    /// - 周期规则不合法 → InvalidRule
    /// - 金额过大超出 Decimal 表示范围 → AmountOverflow
    #[instrument(skip(self, additional_service_amounts), fields(
        frequency = %rule.frequency,
        count = rule.occurrence_count,
        services = additional_service_amounts.len()
    ))]
    pub fn compute_total_price(
        &self,
        base_amount: Decimal,
        rule: &RecurrenceRule,
        additional_service_amounts: &[Decimal],
    ) -> SchedulerResult<PriceQuote> {
        if base_amount < Decimal::ZERO {
            return Err(SchedulerError::InvalidAmount {
                field: "base_amount".to_string(),
                value: base_amount,
            });
        }

        if let Some((index, amount)) = additional_service_amounts
            .iter()
            .enumerate()
            .find(|(_, a)| **a < Decimal::ZERO)
        {
            return Err(SchedulerError::InvalidAmount {
                field: format!("additional_service_amounts[{}]", index),
                value: *amount,
            });
        }

        self.validate_rule(rule)?;

        let discount_percent = self.config().discounts.percent_for(rule.frequency);
        let occurrence_count = rule.effective_count();
        let count = Decimal::from(occurrence_count);

        let discount_factor = 100u32.checked_sub(discount_percent).ok_or(
            ConfigError::InvalidDiscount {
                frequency: rule.frequency,
                pct: discount_percent,
            },
        )?;

        let per_occurrence_amount = base_amount
            .checked_mul(Decimal::from(discount_factor))
            .and_then(|v| v.checked_div(Decimal::ONE_HUNDRED))
            .ok_or_else(|| overflow("per_occurrence_amount"))?;

        let services_sum = additional_service_amounts
            .iter()
            .try_fold(Decimal::ZERO, |acc, a| acc.checked_add(*a))
            .ok_or_else(|| overflow("services_amount"))?;
        let services_amount = match self.config().service_charge_policy {
            ServiceChargePolicy::Once => services_sum,
            ServiceChargePolicy::PerOccurrence => services_sum
                .checked_mul(count)
                .ok_or_else(|| overflow("services_amount"))?,
        };

        let total_amount = per_occurrence_amount
            .checked_mul(count)
            .and_then(|v| v.checked_add(services_amount))
            .ok_or_else(|| overflow("total_amount"))?
            .round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero);

        tracing::debug!(
            discount_percent,
            total = %total_amount,
            "报价计算完成"
        );

        Ok(PriceQuote {
            base_amount,
            discount_percent,
            occurrence_count,
            per_occurrence_amount,
            services_amount,
            total_amount,
        })
    }
}

fn overflow(field: &str) -> SchedulerError {
    SchedulerError::AmountOverflow {
        field: field.to_string(),
    }
}
