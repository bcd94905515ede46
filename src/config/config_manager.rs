// ==========================================
// 场地预订系统 - 配置管理器
// ==========================================
// 职责: 从 config_kv 表加载排期引擎配置
// 存储: config_kv 表 (key-value + scope)
// ==========================================

use crate::config::scheduler_config::{DiscountTable, SchedulerConfig};
use crate::db::{ensure_config_schema, open_sqlite_connection};
use crate::domain::types::ServiceChargePolicy;
use rusqlite::{params, Connection};
use std::error::Error;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager {
    conn: Arc<Mutex<Connection>>,
}

impl ConfigManager {
    /// 创建新的 ConfigManager 实例
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    pub fn new(db_path: &str) -> Result<Self, Box<dyn Error>> {
        let conn = open_sqlite_connection(db_path)?;
        ensure_config_schema(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 从已有连接创建 ConfigManager
    ///
    /// 会对传入连接设置 busy_timeout 并建表（幂等）
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Result<Self, Box<dyn Error>> {
        {
            let conn_guard = conn.lock().map_err(|e| format!("锁获取失败: {}", e))?;
            crate::db::configure_sqlite_connection(&conn_guard)?;
            ensure_config_schema(&conn_guard)?;
        }

        Ok(Self { conn })
    }

    /// 从 config_kv 表读取配置值（scope_id='global'）
    ///
    /// # 返回
    /// - Some(String): 配置值
    /// - None: 配置不存在
    pub fn get_global_config_value(&self, key: &str) -> Result<Option<String>, Box<dyn Error>> {
        let conn = self.conn.lock().map_err(|e| format!("锁获取失败: {}", e))?;

        let result = conn.query_row(
            "SELECT value FROM config_kv WHERE scope_id = 'global' AND key = ?1",
            params![key],
            |row| row.get::<_, String>(0),
        );

        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(Box::new(e)),
        }
    }

    /// 写入 global 配置值（UPSERT）
    pub fn set_global_config_value(&self, key: &str, value: &str) -> Result<(), Box<dyn Error>> {
        let conn = self.conn.lock().map_err(|e| format!("锁获取失败: {}", e))?;

        conn.execute(
            "INSERT INTO config_kv (scope_id, key, value) VALUES ('global', ?1, ?2)
             ON CONFLICT(scope_id, key) DO UPDATE SET value = ?2, updated_at = datetime('now')",
            params![key, value],
        )?;

        Ok(())
    }

    /// 读取数值配置；缺失返回默认值，格式错误记录告警后返回默认值
    fn get_parsed_or_default<T>(&self, key: &str, default: T) -> Result<T, Box<dyn Error>>
    where
        T: FromStr + Copy + std::fmt::Display,
    {
        let raw = match self.get_global_config_value(key)? {
            Some(v) => v,
            None => return Ok(default),
        };

        match raw.trim().parse::<T>() {
            Ok(v) => Ok(v),
            Err(_) => {
                tracing::warn!(
                    config_key = key,
                    raw_value = %raw,
                    default = %default,
                    "配置格式错误，使用默认值"
                );
                Ok(default)
            }
        }
    }

    // ===== 排期引擎配置 =====

    /// 加载排期引擎配置
    ///
    /// # 说明
    /// - 未配置的键使用 SchedulerConfig::default()
    /// - 加载结果整体不合法（如 min > max）时回退到默认配置
    pub fn load_scheduler_config(&self) -> Result<SchedulerConfig, Box<dyn Error>> {
        let defaults = SchedulerConfig::default();

        let discounts = DiscountTable {
            none_pct: self
                .get_parsed_or_default(config_keys::DISCOUNT_PCT_NONE, defaults.discounts.none_pct)?,
            weekly_pct: self.get_parsed_or_default(
                config_keys::DISCOUNT_PCT_WEEKLY,
                defaults.discounts.weekly_pct,
            )?,
            biweekly_pct: self.get_parsed_or_default(
                config_keys::DISCOUNT_PCT_BIWEEKLY,
                defaults.discounts.biweekly_pct,
            )?,
            monthly_pct: self.get_parsed_or_default(
                config_keys::DISCOUNT_PCT_MONTHLY,
                defaults.discounts.monthly_pct,
            )?,
        };

        let service_charge_policy = match self.get_global_config_value(config_keys::SERVICE_CHARGE_POLICY)? {
            Some(raw) => ServiceChargePolicy::parse(&raw).unwrap_or_else(|| {
                tracing::warn!(
                    config_key = config_keys::SERVICE_CHARGE_POLICY,
                    raw_value = %raw,
                    "附加服务计费口径无法识别，使用默认值 ONCE"
                );
                defaults.service_charge_policy
            }),
            None => defaults.service_charge_policy,
        };

        let config = SchedulerConfig {
            min_occurrences: self
                .get_parsed_or_default(config_keys::MIN_OCCURRENCES, defaults.min_occurrences)?,
            max_occurrences: self
                .get_parsed_or_default(config_keys::MAX_OCCURRENCES, defaults.max_occurrences)?,
            discounts,
            service_charge_policy,
        };

        if let Err(e) = config.validate() {
            tracing::warn!("排期配置校验失败: {}, 使用默认配置", e);
            return Ok(defaults);
        }

        tracing::debug!(?config, "排期配置加载完成");
        Ok(config)
    }
}

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    // 周期次数范围
    pub const MIN_OCCURRENCES: &str = "recurrence_min_occurrences";
    pub const MAX_OCCURRENCES: &str = "recurrence_max_occurrences";

    // 折扣档位
    pub const DISCOUNT_PCT_NONE: &str = "discount_pct_none";
    pub const DISCOUNT_PCT_WEEKLY: &str = "discount_pct_weekly";
    pub const DISCOUNT_PCT_BIWEEKLY: &str = "discount_pct_biweekly";
    pub const DISCOUNT_PCT_MONTHLY: &str = "discount_pct_monthly";

    // 附加服务计费口径 (ONCE / PER_OCCURRENCE)
    pub const SERVICE_CHARGE_POLICY: &str = "service_charge_policy";
}
