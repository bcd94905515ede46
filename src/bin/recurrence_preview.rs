// Small dev utility: print the occurrence dates, quote and summary for a recurrence rule.
//
// Usage:
//   cargo run --bin recurrence_preview -- <start_date> <frequency> <count> <base_amount> [service_amount ...]
//
// Example:
//   cargo run --bin recurrence_preview -- 2024-01-31 MONTHLY 12 1000 150
//
// Scheduler config is read from the SQLite db in FACILITY_BOOKING_DB_PATH when set,
// otherwise built-in defaults are used. The count is clamped like the booking form does.

use anyhow::{anyhow, bail, Context};
use facility_booking::config::{ConfigManager, SchedulerConfig};
use facility_booking::{logging, Frequency, RecurrenceScheduler};
use rust_decimal::Decimal;
use serde_json::json;
use std::str::FromStr;

const DB_PATH_ENV: &str = "FACILITY_BOOKING_DB_PATH";

fn load_config() -> anyhow::Result<SchedulerConfig> {
    match std::env::var(DB_PATH_ENV) {
        Ok(path) if !path.trim().is_empty() => {
            let manager = ConfigManager::new(path.trim())
                .map_err(|e| anyhow!("打开配置库失败 {}: {}", path, e))?;
            manager
                .load_scheduler_config()
                .map_err(|e| anyhow!("加载排期配置失败: {}", e))
        }
        _ => Ok(SchedulerConfig::default()),
    }
}

fn main() -> anyhow::Result<()> {
    logging::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 4 {
        bail!("usage: recurrence_preview <start_date> <frequency> <count> <base_amount> [service_amount ...]");
    }

    let start_date = RecurrenceScheduler::parse_start_date(&args[0])?;
    let frequency = Frequency::from_str(&args[1])?;
    let count: u32 = args[2]
        .parse()
        .with_context(|| format!("count 不是整数: {}", args[2]))?;
    let base_amount = Decimal::from_str(&args[3])
        .with_context(|| format!("base_amount 不是金额: {}", args[3]))?;
    let services = args[4..]
        .iter()
        .map(|s| Decimal::from_str(s).with_context(|| format!("service_amount 不是金额: {}", s)))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let scheduler = RecurrenceScheduler::new(load_config()?)?;
    let rule = scheduler.clamp_rule(frequency, count);

    let dates = scheduler.compute_occurrence_dates(start_date, &rule)?;
    let quote = scheduler.compute_total_price(base_amount, &rule, &services)?;
    let summary = scheduler.summarize(start_date, &rule)?;

    let output = json!({
        "rule": rule,
        "dates": dates,
        "quote": quote,
        "summary": summary.to_string(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
