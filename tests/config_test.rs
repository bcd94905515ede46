// ==========================================
// ConfigManager 集成测试
// ==========================================
// 测试目标: 验证排期配置从 config_kv 加载的正确性
// ==========================================


use facility_booking::config::{config_keys, ConfigManager, SchedulerConfig};
use facility_booking::domain::{Frequency, RecurrenceRule, ServiceChargePolicy};
use facility_booking::RecurrenceScheduler;
use rust_decimal::Decimal;
use test_helpers::{create_test_db, date, insert_config, open_test_connection};

#[test]
fn test_config_manager_creation() {
    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");

    let config_manager = ConfigManager::new(&db_path);
    assert!(
        config_manager.is_ok(),
        "ConfigManager should be created successfully"
    );
}

#[test]
fn test_empty_config_uses_defaults() {
    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let config_manager = ConfigManager::new(&db_path).expect("Failed to create ConfigManager");

    let config = config_manager
        .load_scheduler_config()
        .expect("Should load scheduler config");
    assert_eq!(config, SchedulerConfig::default());
}

#[test]
fn test_config_overrides_defaults() {
    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let conn = open_test_connection(&db_path).expect("Failed to open db");
    insert_config(&conn, config_keys::MAX_OCCURRENCES, "8").unwrap();
    insert_config(&conn, config_keys::DISCOUNT_PCT_WEEKLY, "12").unwrap();
    insert_config(&conn, config_keys::SERVICE_CHARGE_POLICY, "per_occurrence").unwrap();

    let config_manager = ConfigManager::new(&db_path).expect("Failed to create ConfigManager");
    let config = config_manager.load_scheduler_config().unwrap();

    assert_eq!(config.min_occurrences, 2);
    assert_eq!(config.max_occurrences, 8);
    assert_eq!(config.discounts.weekly_pct, 12);
    assert_eq!(config.discounts.monthly_pct, 20);
    assert_eq!(config.service_charge_policy, ServiceChargePolicy::PerOccurrence);

    // 加载的配置直接驱动引擎
    let scheduler = RecurrenceScheduler::new(config).unwrap();
    let quote = scheduler
        .compute_total_price(
            Decimal::from(1000),
            &RecurrenceRule::new(Frequency::Weekly, 2),
            &[Decimal::from(10)],
        )
        .unwrap();
    // 1000 * 0.88 * 2 + 10 * 2
    assert_eq!(quote.total_amount, Decimal::from(1780));

    let rule = RecurrenceRule::new(Frequency::Weekly, 9);
    assert!(scheduler
        .compute_occurrence_dates(date(2024, 1, 1), &rule)
        .is_err());
}

#[test]
fn test_malformed_values_fall_back() {
    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let conn = open_test_connection(&db_path).expect("Failed to open db");
    insert_config(&conn, config_keys::DISCOUNT_PCT_MONTHLY, "twenty").unwrap();
    insert_config(&conn, config_keys::SERVICE_CHARGE_POLICY, "sometimes").unwrap();

    let config_manager = ConfigManager::new(&db_path).expect("Failed to create ConfigManager");
    let config = config_manager.load_scheduler_config().unwrap();

    assert_eq!(config.discounts.monthly_pct, 20);
    assert_eq!(config.service_charge_policy, ServiceChargePolicy::Once);
}

#[test]
fn test_invalid_combination_falls_back_to_defaults() {
    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let config_manager = ConfigManager::new(&db_path).expect("Failed to create ConfigManager");

    config_manager
        .set_global_config_value(config_keys::MIN_OCCURRENCES, "10")
        .unwrap();
    config_manager
        .set_global_config_value(config_keys::MAX_OCCURRENCES, "4")
        .unwrap();

    let config = config_manager.load_scheduler_config().unwrap();
    assert_eq!(config, SchedulerConfig::default());
}

#[test]
fn test_set_global_config_value_upserts() {
    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let config_manager = ConfigManager::new(&db_path).expect("Failed to create ConfigManager");

    config_manager
        .set_global_config_value(config_keys::DISCOUNT_PCT_BIWEEKLY, "18")
        .unwrap();
    config_manager
        .set_global_config_value(config_keys::DISCOUNT_PCT_BIWEEKLY, "16")
        .unwrap();

    assert_eq!(
        config_manager
            .get_global_config_value(config_keys::DISCOUNT_PCT_BIWEEKLY)
            .unwrap(),
        Some("16".to_string())
    );
    assert_eq!(
        config_manager.load_scheduler_config().unwrap().discounts.biweekly_pct,
        16
    );
}

#[test]
fn test_scheduler_rejects_unvalidated_config() {
    let mut over_discount = SchedulerConfig::default();
    over_discount.discounts.weekly_pct = 120;
    assert!(RecurrenceScheduler::new(over_discount).is_err());

    let inverted = SchedulerConfig {
        min_occurrences: 8,
        max_occurrences: 4,
        ..SchedulerConfig::default()
    };
    assert!(RecurrenceScheduler::new(inverted).is_err());
}
