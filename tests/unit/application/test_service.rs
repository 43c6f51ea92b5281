use api_base::prelude::*;
use std::time::Duration;

struct PetsApi {
    http: HttpClient,
}

impl PetsApi {
    fn new(transport: Arc<Transport>, config: HttpClientConfig) -> Self {
        Self {
            http: HttpClient::new(transport, config),
        }
    }
}

#[test]
fn test_transport_matches_base_path_and_timeout() {
    for (base_path, timeout) in [
        ("https://api.example.com", Some(Duration::from_secs(10))),
        ("http://localhost:8080/v1/", None),
    ] {
        let config = HttpClientConfig {
            request_timeout: timeout,
            add_square_brackets_to_form_data_array_keys: false,
        };
        let api = create_service(PetsApi::new, base_path, None, Some(config), false).unwrap();
        let transport = api.http.transport();

        assert_eq!(transport.base_url(), base_path);
        assert_eq!(
            transport.timeout(),
            Some(timeout.unwrap_or(Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS)))
        );
    }
}

#[test]
fn test_single_interceptor_with_or_without_provider() {
    let provider: Arc<dyn AuthProvider> = Arc::new(|| {});
    let with = create_service(Api::new, "http://localhost", Some(provider), None, false).unwrap();
    let without = create_service(Api::new, "http://localhost", None, None, false).unwrap();
    assert_eq!(with.http.transport().interceptor_count(), 1);
    assert_eq!(without.http.transport().interceptor_count(), 1);
}

#[test]
fn test_credentials_flag_is_explicit() {
    let on = create_service(Api::new, "http://localhost", None, None, true).unwrap();
    let off = create_service(Api::new, "http://localhost", None, None, false).unwrap();
    assert!(on.http.transport().with_credentials());
    assert!(!off.http.transport().with_credentials());
}

#[test]
fn test_factory_default_headers() {
    let api = ServiceFactory::new("http://localhost")
        .default_header(
            HeaderName::from_static("x-client"),
            HeaderValue::from_static("web"),
        )
        .build(Api::new)
        .unwrap();
    assert_eq!(api.http.transport().default_headers()["x-client"], "web");
}

#[test]
fn test_service_from_config() {
    let config = Config {
        base_path: "https://api.example.com".to_string(),
        http: HttpClientConfig::new().with_square_brackets(true),
        include_credentials: true,
    };
    let api = create_service_from_config(Api::new, &config, None).unwrap();
    assert_eq!(api.http.transport().base_url(), "https://api.example.com");
    assert!(api.http.transport().with_credentials());
    assert!(api.http.config().add_square_brackets_to_form_data_array_keys);
}
