use crate::MondayClient;

use rb_config::PlatformConfig;

fn platform(api_version: &str) -> PlatformConfig {
    PlatformConfig {
        api_url: "https://api.example.com/v2".to_string(),
        api_version: api_version.to_string(),
        account_subdomain: "acme".to_string(),
        request_timeout_secs: 5,
    }
}

#[test]
fn given_platform_config_when_client_created_then_url_stored() {
    let client = MondayClient::new(&platform("2024-10")).unwrap();

    assert_eq!(client.api_url, "https://api.example.com/v2");
    assert_eq!(client.api_version.as_deref(), Some("2024-10"));
}

#[test]
fn given_blank_api_version_when_client_created_then_header_disabled() {
    let client = MondayClient::new(&platform("  ")).unwrap();

    assert!(client.api_version.is_none());
}
