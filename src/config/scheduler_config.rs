// ==========================================
// 场地预订系统 - 排期引擎配置
// ==========================================
// 构造时显式传入,不使用全局可变状态
// ==========================================

use crate::domain::recurrence::{DEFAULT_MAX_OCCURRENCES, DEFAULT_MIN_OCCURRENCES};
use crate::domain::types::{Frequency, ServiceChargePolicy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 配置校验错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("折扣百分比超出范围: frequency={frequency}, pct={pct}")]
    InvalidDiscount { frequency: Frequency, pct: u32 },

    #[error("周期次数范围无效: min={min}, max={max}")]
    InvalidBounds { min: u32, max: u32 },
}

// ==========================================
// DiscountTable - 折扣档位
// ==========================================
// 精确匹配频率,不做插值
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountTable {
    pub none_pct: u32,
    pub weekly_pct: u32,
    pub biweekly_pct: u32,
    pub monthly_pct: u32,
}

impl Default for DiscountTable {
    fn default() -> Self {
        Self {
            none_pct: 0,
            weekly_pct: 10,
            biweekly_pct: 15,
            monthly_pct: 20,
        }
    }
}

impl DiscountTable {
    /// 查询频率对应的折扣百分比
    pub fn percent_for(&self, frequency: Frequency) -> u32 {
        match frequency {
            Frequency::None => self.none_pct,
            Frequency::Weekly => self.weekly_pct,
            Frequency::Biweekly => self.biweekly_pct,
            Frequency::Monthly => self.monthly_pct,
        }
    }

    fn entries(&self) -> [(Frequency, u32); 4] {
        [
            (Frequency::None, self.none_pct),
            (Frequency::Weekly, self.weekly_pct),
            (Frequency::Biweekly, self.biweekly_pct),
            (Frequency::Monthly, self.monthly_pct),
        ]
    }
}

// ==========================================
// SchedulerConfig - 排期引擎配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// 周期预订最少次数
    #[serde(default = "default_min_occurrences")]
    pub min_occurrences: u32,

    /// 周期预订最多次数
    #[serde(default = "default_max_occurrences")]
    pub max_occurrences: u32,

    /// 折扣档位
    #[serde(default)]
    pub discounts: DiscountTable,

    /// 附加服务计费口径（默认整单一次）
    #[serde(default)]
    pub service_charge_policy: ServiceChargePolicy,
}

fn default_min_occurrences() -> u32 {
    DEFAULT_MIN_OCCURRENCES
}

fn default_max_occurrences() -> u32 {
    DEFAULT_MAX_OCCURRENCES
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            min_occurrences: DEFAULT_MIN_OCCURRENCES,
            max_occurrences: DEFAULT_MAX_OCCURRENCES,
            discounts: DiscountTable::default(),
            service_charge_policy: ServiceChargePolicy::default(),
        }
    }
}

impl SchedulerConfig {
    /// 校验配置
    ///
    /// # 规则
    /// - 折扣百分比 ∈ [0, 100]
    /// - 1 ≤ min_occurrences ≤ max_occurrences
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (frequency, pct) in self.discounts.entries() {
            if pct > 100 {
                return Err(ConfigError::InvalidDiscount { frequency, pct });
            }
        }

        if self.min_occurrences == 0 || self.min_occurrences > self.max_occurrences {
            return Err(ConfigError::InvalidBounds {
                min: self.min_occurrences,
                max: self.max_occurrences,
            });
        }

        Ok(())
    }

    /// 次数是否在允许范围内
    pub fn allows_count(&self, count: u32) -> bool {
        (self.min_occurrences..=self.max_occurrences).contains(&count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SchedulerConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.allows_count(2));
        assert!(config.allows_count(12));
        assert!(!config.allows_count(1));
        assert!(!config.allows_count(13));
    }

    #[test]
    fn test_default_discount_tiers() {
        let table = DiscountTable::default();
        assert_eq!(table.percent_for(Frequency::None), 0);
        assert_eq!(table.percent_for(Frequency::Weekly), 10);
        assert_eq!(table.percent_for(Frequency::Biweekly), 15);
        assert_eq!(table.percent_for(Frequency::Monthly), 20);
    }

    #[test]
    fn test_validate_rejects_discount_over_100() {
        let mut config = SchedulerConfig::default();
        config.discounts.monthly_pct = 120;
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidDiscount {
                frequency: Frequency::Monthly,
                pct: 120
            })
        );
    }

    #[test]
    fn test_validate_rejects_inverted_bounds() {
        let config = SchedulerConfig {
            min_occurrences: 8,
            max_occurrences: 4,
            ..SchedulerConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidBounds { min: 8, max: 4 })
        ));
    }

    #[test]
    fn test_deserialize_partial_json_uses_defaults() {
        let config: SchedulerConfig =
            serde_json::from_str(r#"{"max_occurrences": 8}"#).unwrap();
        assert_eq!(config.min_occurrences, 2);
        assert_eq!(config.max_occurrences, 8);
        assert_eq!(config.discounts, DiscountTable::default());
        assert_eq!(config.service_charge_policy, ServiceChargePolicy::Once);
    }
}
