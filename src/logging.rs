// ==========================================
// 场地预订系统 - 日志
// ==========================================
// 预订提交与次数钳制走 info，引擎计算细节走 debug
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// JSON 输出开关环境变量
pub const LOG_JSON_ENV: &str = "FACILITY_BOOKING_LOG_JSON";

fn is_true(v: &str) -> bool {
    matches!(
        v.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "y" | "on"
    )
}

/// 初始化日志系统
///
/// # 环境变量
/// - RUST_LOG: 日志级别过滤器（默认: info）
///   例如: RUST_LOG=debug 或 RUST_LOG=facility_booking=trace
/// - FACILITY_BOOKING_LOG_JSON=1: 输出 JSON 格式
///
/// # 示例
/// ```no_run
/// use facility_booking::logging;
/// logging::init();
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let json = std::env::var(LOG_JSON_ENV)
        .map(|v| is_true(&v))
        .unwrap_or(false);

    if json {
        fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_line_number(true)
            .init();
    } else {
        fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(false)
            .with_line_number(true)
            .init();
    }
}

/// 测试用日志: debug 级别写入测试输出，可重复调用
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_true() {
        assert!(is_true("1"));
        assert!(is_true(" ON "));
        assert!(!is_true("0"));
        assert!(!is_true(""));
    }

    #[test]
    fn test_init_test_is_idempotent() {
        init_test();
        init_test();
        tracing::debug!("logging ready");
    }
}
