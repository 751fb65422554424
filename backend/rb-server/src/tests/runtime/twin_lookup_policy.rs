use crate::TwinLookupPolicy;

use rb_config::TwinLookupConfig;

use std::time::Duration;

use googletest::assert_that;
use googletest::prelude::{eq, none, some};

#[test]
fn given_fixed_policy_when_next_delay_then_unchanged() {
    let policy = TwinLookupPolicy::fixed(Duration::from_millis(250));

    assert_eq!(
        policy.next_delay(Duration::from_millis(250)),
        Duration::from_millis(250)
    );
}

#[test]
fn given_backoff_when_next_delay_then_grows_until_capped() {
    let policy = TwinLookupPolicy {
        backoff_multiplier: 2.0,
        max_interval: Duration::from_secs(1),
        ..TwinLookupPolicy::fixed(Duration::from_millis(300))
    };

    let second = policy.next_delay(policy.interval);
    let third = policy.next_delay(second);
    let fourth = policy.next_delay(third);

    assert_eq!(second, Duration::from_millis(600));
    assert_eq!(third, Duration::from_secs(1));
    assert_eq!(fourth, Duration::from_secs(1));
}

#[test]
fn given_jitter_when_sleep_for_then_within_half_to_one_and_a_half() {
    let policy = TwinLookupPolicy {
        jitter: true,
        ..TwinLookupPolicy::fixed(Duration::from_millis(100))
    };

    for _ in 0..50 {
        let wait = policy.sleep_for(Duration::from_millis(100));
        assert!(wait >= Duration::from_millis(50));
        assert!(wait <= Duration::from_millis(150));
    }
}

#[test]
fn given_default_config_when_converted_then_fixed_five_seconds_unbounded() {
    let policy = TwinLookupPolicy::from(&TwinLookupConfig::default());

    assert_eq!(policy.interval, Duration::from_secs(5));
    assert_eq!(policy.backoff_multiplier, 1.0);
    assert_that!(policy.max_attempts, none());
    assert_that!(policy.timeout, none());
    assert!(!policy.jitter);
}

#[test]
fn given_limits_in_config_when_converted_then_carried_over() {
    let config = TwinLookupConfig {
        interval_ms: 200,
        backoff_multiplier: 1.5,
        max_interval_secs: 2,
        max_attempts: 8,
        timeout_secs: 30,
        jitter: true,
    };

    let policy = TwinLookupPolicy::from(&config);

    assert_eq!(policy.interval, Duration::from_millis(200));
    assert_eq!(policy.max_interval, Duration::from_secs(2));
    assert_that!(policy.max_attempts, some(eq(8)));
    assert_that!(policy.timeout, some(eq(Duration::from_secs(30))));
    assert!(policy.jitter);
}
