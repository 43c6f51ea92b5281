use api_base::application::config::{Config, HttpClientConfig};
use std::env;
use std::time::Duration;

#[test]
fn test_http_client_config_defaults() {
    let config = HttpClientConfig::default();
    assert_eq!(config.request_timeout, None);
    assert!(!config.add_square_brackets_to_form_data_array_keys);
    assert_eq!(config.effective_timeout(), Duration::from_millis(59_000));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::new()
        .with_request_timeout(Duration::from_secs(2))
        .with_square_brackets(true);
    assert_eq!(config.effective_timeout(), Duration::from_secs(2));
    assert!(config.add_square_brackets_to_form_data_array_keys);
}

#[test]
fn test_http_client_config_display_is_json() {
    let config = HttpClientConfig::new().with_square_brackets(true);
    let rendered = config.to_string();
    assert!(rendered.contains("\"add_square_brackets_to_form_data_array_keys\":true"));
}

#[test]
fn test_config_from_env() {
    unsafe {
        env::set_var("API_BASE_PATH", "https://api.example.com/v2");
        env::set_var("API_REQUEST_TIMEOUT_MS", "1500");
        env::set_var("API_FORM_ARRAY_BRACKETS", "true");
        env::set_var("APP_ENV", "production");
    }

    let config = Config::new();

    assert_eq!(config.base_path, "https://api.example.com/v2");
    assert_eq!(config.http.request_timeout, Some(Duration::from_millis(1500)));
    assert!(config.http.add_square_brackets_to_form_data_array_keys);
    assert!(config.include_credentials);

    unsafe {
        env::set_var("APP_ENV", "staging");
        env::remove_var("API_REQUEST_TIMEOUT_MS");
    }

    let config = Config::new();
    assert!(!config.include_credentials);
    assert_eq!(config.http.request_timeout, None);

    unsafe {
        env::remove_var("API_BASE_PATH");
        env::remove_var("API_FORM_ARRAY_BRACKETS");
        env::remove_var("APP_ENV");
    }
}
