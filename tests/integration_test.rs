use cryptoglot::config::Config;
use cryptoglot::decoders::crack_results::CandidateKey;
use cryptoglot::perform_analysis;
use cryptoglot::storage::Language;

#[test]
fn test_caesar_english_and_italian_lines() {
    let config = Config::default();
    let records = perform_analysis("Khoor, krz duh brx?\nFldr, vrqr lr", config);
    assert_eq!(records.len(), 2);

    assert_eq!(records[0].language, Language::English);
    assert_eq!(records[0].caesar.top[0].key, CandidateKey::Shift(3));
    assert_eq!(records[0].caesar.top[0].text, "Hello, how are you?");

    assert_eq!(records[1].language, Language::Italian);
    assert_eq!(records[1].caesar.top[0].key, CandidateKey::Shift(3));
    assert_eq!(records[1].caesar.top[0].text, "Ciao, sono io");
}

#[test]
fn test_vigenere_curated_key() {
    let records = perform_analysis("Dscwr im wclabu, srs oip bki?", Config::default());
    let best = &records[0].vigenere[0];
    assert_eq!(best.key, CandidateKey::Keyword("WORLD".to_string()));
    assert_eq!(best.text, "Hello my friend, how are you?");
}

#[test]
fn test_vigenere_italian_key() {
    let records = perform_analysis("Eiso, eoee utsi", Config::default());
    assert_eq!(records[0].language, Language::Italian);
    assert_eq!(
        records[0].vigenere[0].key,
        CandidateKey::Keyword("CASA".to_string())
    );
    assert_eq!(records[0].vigenere[0].text, "Ciao, come stai");
}

#[test]
fn test_base64_block() {
    let records = perform_analysis("aGVsbG8gd29ybGQ=", Config::default());
    assert!(records[0].base64.success);
    assert_eq!(records[0].base64.result, "hello world");
}

#[test]
fn test_blocks_keep_input_order() {
    let records = perform_analysis(
        "Wkh txlfn eurzq ira!!  Fldr, vrqr lr\n\n   \naGVsbG8=",
        Config::default(),
    );
    let texts: Vec<&str> = records.iter().map(|r| r.text.as_str()).collect();
    assert_eq!(texts, vec!["Wkh txlfn eurzq ira", "Fldr, vrqr lr", "aGVsbG8="]);
    assert_eq!(records[0].caesar.top[0].text, "The quick brown fox");
}

#[test]
fn test_no_panic_if_empty_string() {
    assert!(perform_analysis("", Config::default()).is_empty());
}

#[test]
fn test_records_serialize_to_json() {
    let records = perform_analysis("Khoor", Config::default());
    let json = serde_json::to_value(&records).unwrap();
    assert_eq!(json[0]["language"], "en");
    assert_eq!(json[0]["caesar"]["all"].as_array().unwrap().len(), 26);
}
