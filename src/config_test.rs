use std::sync::{Mutex, MutexGuard};

use super::*;

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn lock_env() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// # Safety
/// Callers must hold [`lock_env`] so no other test touches the environment.
unsafe fn clear_console_env() {
    unsafe {
        std::env::remove_var("CONSOLE_API_BASE_URL");
        std::env::remove_var("CONSOLE_DEFAULT_TIME_RANGE");
        std::env::remove_var("CONSOLE_ZERO_COUNT_POLICY");
    }
}

#[test]
fn from_env_defaults() {
    let _env = lock_env();
    unsafe { clear_console_env() };

    let cfg = ConsoleConfig::from_env().unwrap();
    assert_eq!(cfg, ConsoleConfig::default());
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(cfg.default_time_range, TimeRangePreset::Past30Minutes);
    assert_eq!(cfg.zero_count_policy, ZeroCountPolicy::Reject);
}

#[test]
fn from_env_parses_overrides() {
    let _env = lock_env();
    unsafe {
        clear_console_env();
        std::env::set_var("CONSOLE_API_BASE_URL", "https://api.example.test/v4/lke/clusters/");
        std::env::set_var("CONSOLE_DEFAULT_TIME_RANGE", "past_7_days");
        std::env::set_var("CONSOLE_ZERO_COUNT_POLICY", "allow");
    }

    let cfg = ConsoleConfig::from_env().unwrap();
    assert_eq!(cfg.api_base_url, "https://api.example.test/v4/lke/clusters");
    assert_eq!(cfg.default_time_range, TimeRangePreset::Past7Days);
    assert_eq!(cfg.zero_count_policy, ZeroCountPolicy::Allow);

    unsafe { clear_console_env() };
}

#[test]
fn from_env_unknown_time_range_errors() {
    let _env = lock_env();
    unsafe {
        clear_console_env();
        std::env::set_var("CONSOLE_DEFAULT_TIME_RANGE", "past_decade");
    }

    let err = ConsoleConfig::from_env().unwrap_err();
    assert_eq!(err, ConfigError::UnknownValue { var: "CONSOLE_DEFAULT_TIME_RANGE", value: "past_decade".to_owned() });

    unsafe { clear_console_env() };
}

#[test]
fn from_env_unknown_policy_errors() {
    let _env = lock_env();
    unsafe {
        clear_console_env();
        std::env::set_var("CONSOLE_ZERO_COUNT_POLICY", "drop");
    }

    let err = ConsoleConfig::from_env().unwrap_err().to_string();
    assert!(err.contains("CONSOLE_ZERO_COUNT_POLICY"));

    unsafe { clear_console_env() };
}
