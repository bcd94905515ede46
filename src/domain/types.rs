// ==========================================
// 场地预订系统 - 领域类型定义
// ==========================================
// 周期频率 + 附加服务计费口径
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// ==========================================
// 周期频率 (Frequency)
// ==========================================
// 序列化格式: SCREAMING_SNAKE_CASE (与预订接口一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Frequency {
    None,     // 单次预订
    Weekly,   // 每周
    Biweekly, // 每两周
    Monthly,  // 每月 (日历月)
}

impl Frequency {
    /// 是否为周期预订
    pub fn is_recurring(&self) -> bool {
        !matches!(self, Frequency::None)
    }

    /// 固定天数步长（MONTHLY 按日历月推进，不适用）
    pub fn step_days(&self) -> Option<u64> {
        match self {
            Frequency::Weekly => Some(7),
            Frequency::Biweekly => Some(14),
            Frequency::None | Frequency::Monthly => None,
        }
    }

    /// 展示文案
    pub fn label(&self) -> &'static str {
        match self {
            Frequency::None => "单次",
            Frequency::Weekly => "每周",
            Frequency::Biweekly => "每两周",
            Frequency::Monthly => "每月",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::None => "NONE",
            Frequency::Weekly => "WEEKLY",
            Frequency::Biweekly => "BIWEEKLY",
            Frequency::Monthly => "MONTHLY",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 无法识别的频率取值
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("无法识别的周期频率: {0}")]
pub struct UnknownFrequency(pub String);

impl FromStr for Frequency {
    type Err = UnknownFrequency;

    /// 大小写不敏感；空字符串视为单次预订（表单未选择周期）
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "" | "NONE" => Ok(Frequency::None),
            "WEEKLY" => Ok(Frequency::Weekly),
            "BIWEEKLY" => Ok(Frequency::Biweekly),
            "MONTHLY" => Ok(Frequency::Monthly),
            _ => Err(UnknownFrequency(s.to_string())),
        }
    }
}

// ==========================================
// 附加服务计费口径 (Service Charge Policy)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceChargePolicy {
    #[default]
    Once,          // 整单收取一次
    PerOccurrence, // 每次预订各收一次
}

impl ServiceChargePolicy {
    /// 从配置字符串解析，无法识别时返回 None
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "ONCE" => Some(ServiceChargePolicy::Once),
            "PER_OCCURRENCE" => Some(ServiceChargePolicy::PerOccurrence),
            _ => None,
        }
    }

    pub fn to_db_str(&self) -> &'static str {
        match self {
            ServiceChargePolicy::Once => "ONCE",
            ServiceChargePolicy::PerOccurrence => "PER_OCCURRENCE",
        }
    }
}

impl fmt::Display for ServiceChargePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_db_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_parse_case_insensitive() {
        assert_eq!("weekly".parse::<Frequency>(), Ok(Frequency::Weekly));
        assert_eq!(" BiWeekly ".parse::<Frequency>(), Ok(Frequency::Biweekly));
        assert_eq!("MONTHLY".parse::<Frequency>(), Ok(Frequency::Monthly));
        assert_eq!("".parse::<Frequency>(), Ok(Frequency::None));
    }

    #[test]
    fn test_frequency_parse_unknown() {
        let err = "DAILY".parse::<Frequency>().unwrap_err();
        assert_eq!(err, UnknownFrequency("DAILY".to_string()));
    }

    #[test]
    fn test_frequency_serde_format() {
        let json = serde_json::to_string(&Frequency::Biweekly).unwrap();
        assert_eq!(json, "\"BIWEEKLY\"");
        let back: Frequency = serde_json::from_str("\"MONTHLY\"").unwrap();
        assert_eq!(back, Frequency::Monthly);
    }

    #[test]
    fn test_service_charge_policy_parse() {
        assert_eq!(ServiceChargePolicy::parse("once"), Some(ServiceChargePolicy::Once));
        assert_eq!(
            ServiceChargePolicy::parse("PER_OCCURRENCE"),
            Some(ServiceChargePolicy::PerOccurrence)
        );
        assert_eq!(ServiceChargePolicy::parse("twice"), None);
    }
}
