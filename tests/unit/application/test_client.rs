use api_base::prelude::*;
use std::time::Duration;

fn client(config: HttpClientConfig) -> HttpClient {
    let transport = Transport::builder("https://api.example.com")
        .timeout(Duration::from_secs(30))
        .default_header(HeaderName::from_static("x"), HeaderValue::from_static("1"))
        .build()
        .expect("transport should build");
    HttpClient::new(Arc::new(transport), config)
}

#[test]
fn test_call_headers_overlay_default_headers() {
    let http = client(HttpClientConfig::default());
    let options = RequestParams::new()
        .try_header("X", "2")
        .unwrap()
        .try_header("Y", "3")
        .unwrap()
        .options;

    let merged = http.merge_request_params(options);

    assert_eq!(merged.headers.len(), 2);
    assert_eq!(merged.headers["x"], "2");
    assert_eq!(merged.headers["y"], "3");
}

#[test]
fn test_default_headers_survive_without_call_headers() {
    let http = client(HttpClientConfig::default());
    let merged = http.merge_request_params(RequestOptions::default());
    assert_eq!(merged.headers["x"], "1");
    assert_eq!(merged.timeout, Some(Duration::from_secs(30)));
}

#[test]
fn test_build_request_for_form_data_body() {
    let http = client(HttpClientConfig::default());
    let request = http.build_request(
        RequestParams::new()
            .with_method(Method::POST)
            .with_path("/upload")
            .with_content_type(ContentType::FormData)
            .with_body(json!({"a": [1, 2], "b": "x", "c": {"d": 1}})),
    );

    assert_eq!(request.method, Method::POST);
    assert_eq!(request.url, "/upload");
    assert!(request.headers.get("content-type").is_none());
    let Some(RequestBody::Multipart(form)) = request.body else {
        panic!("body should be multipart");
    };
    let entries: Vec<(&str, Option<&str>)> = form
        .entries()
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_text()))
        .collect();
    assert_eq!(
        entries,
        vec![
            ("a", Some("1")),
            ("a", Some("2")),
            ("b", Some("x")),
            ("c", Some(r#"{"d":1}"#)),
        ]
    );
}

#[test]
fn test_build_request_uses_bracket_option() {
    let http = client(HttpClientConfig::default().with_square_brackets(true));
    let request = http.build_request(
        RequestParams::new()
            .with_content_type(ContentType::FormData)
            .with_body(json!({"a": [1, 2]})),
    );
    let Some(RequestBody::Multipart(form)) = request.body else {
        panic!("body should be multipart");
    };
    assert_eq!(form.get_all("a[]").len(), 2);
    assert!(form.get_all("a").is_empty());
}

#[test]
fn test_json_body_is_not_stringified() {
    let http = client(HttpClientConfig::default());
    let request = http.build_request(
        RequestParams::new()
            .with_content_type(ContentType::Json)
            .with_body(json!({"name": "rex"})),
    );
    assert_eq!(request.headers["content-type"], "application/json");
    assert!(matches!(request.body, Some(RequestBody::Json(ref v)) if v["name"] == "rex"));
}

#[test]
fn test_url_encoded_content_type_is_set() {
    let http = client(HttpClientConfig::default());
    let request = http.build_request(
        RequestParams::new()
            .with_content_type(ContentType::UrlEncoded)
            .with_body(json!({"q": "dog"})),
    );
    assert_eq!(
        request.headers["content-type"],
        "application/x-www-form-urlencoded"
    );
}

#[test]
fn test_missing_fields_take_defaults() {
    let http = client(HttpClientConfig::default());
    let request = http.build_request(RequestParams::new().with_path("pets"));
    assert_eq!(request.method, Method::GET);
    assert_eq!(request.format, ResponseFormat::Json);
    assert!(request.body.is_none());
    assert!(request.query.is_none());
    assert_eq!(request.headers["x"], "1");
}
