use crate::Config;
use crate::tests::{EnvGuard, setup_bare_config_dir, setup_config_dir};

use std::time::Duration;

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};
use serial_test::serial;

#[test]
#[serial]
fn given_missing_subdomain_when_validate_then_error() {
    // Given
    let _env = setup_bare_config_dir();
    let _secret = EnvGuard::set("RB_AUTH_SIGNING_SECRET", "secret");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_subdomain_with_domain_suffix_when_validate_then_error() {
    // Given
    let _env = setup_config_dir();
    let _subdomain = EnvGuard::set("RB_PLATFORM_ACCOUNT_SUBDOMAIN", "acme.monday.com");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_non_http_api_url_when_validate_then_error() {
    // Given
    let _env = setup_config_dir();
    let _url = EnvGuard::set("RB_PLATFORM_API_URL", "ftp://api.example.com");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_request_timeout_zero_when_validate_then_error() {
    // Given
    let _env = setup_config_dir();
    let _timeout = EnvGuard::set("RB_PLATFORM_REQUEST_TIMEOUT_SECS", "0");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_empty_api_version_when_load_then_header_disabled() {
    // Given
    let _env = setup_config_dir();
    let _version = EnvGuard::set("RB_PLATFORM_API_VERSION", "");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.platform.api_version(), eq(None));
    assert_that!(config.validate(), ok(anything()));
}

#[test]
#[serial]
fn given_default_platform_when_loaded_then_timeout_is_thirty_seconds() {
    // Given
    let _env = setup_config_dir();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_eq!(config.platform.request_timeout(), Duration::from_secs(30));
    assert_that!(config.platform.api_version(), eq(Some("2024-10")));
}
