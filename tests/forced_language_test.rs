// The config is global, so forcing a language lives in its own test binary
// where it cannot leak into the other integration tests.
use cryptoglot::config::Config;
use cryptoglot::perform_analysis;
use cryptoglot::storage::Language;

#[test]
fn test_forced_language_overrides_detection() {
    let config = Config {
        language: Some(Language::Italian),
        ..Config::default()
    };
    let records = perform_analysis("hello how are you\nKhoor", config);
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.language == Language::Italian));
    assert_eq!(records[0].substitution.language, "Italian");
}
