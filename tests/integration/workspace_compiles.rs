//! Integration test to verify the workspace compiles correctly.

#[test]
fn domain_crate_compiles() {
    // Verify domain types are accessible
    let _result = riptide_domain::ApiResult::<i32, String>::success(1);
    let _params = riptide_domain::RequestParams::new("/health");
    let _message = riptide_domain::HttpMessage::error("test");
}

#[test]
fn application_crate_compiles() {
    // Verify application types are accessible
    let _error = riptide_application::DecodeError::invalid("test");
}

#[test]
fn infrastructure_crate_compiles() {
    // Verify infrastructure adapters are accessible
    let config = riptide_infrastructure::ClientConfig::new("https://example.com");
    let _client = riptide_infrastructure::ReqwestHttpClient::new(config);
}
