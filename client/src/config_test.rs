use super::*;

#[test]
fn default_base_path_is_api() {
    assert_eq!(ApiConfig::default().base_path, "/api");
}

#[test]
fn new_accepts_custom_base() {
    let cfg = ApiConfig::new("https://example.test/v1");
    assert_eq!(cfg.base_path, "https://example.test/v1");
}

#[test]
fn from_context_falls_back_to_default_without_owner() {
    assert_eq!(ApiConfig::from_context(), ApiConfig::default());
}
