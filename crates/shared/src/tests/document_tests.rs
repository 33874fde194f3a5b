use std::{
    env, fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};

use crate::{load_or_default, LoadError, Profile, ProfileSource, Section};

const FULL_DOCUMENT: &str = r#"{
    "name": "Ada Example",
    "email": "ada@example.org",
    "phone": "555-0100",
    "about": ["Builds ", "things."],
    "skills": [["rust.svg", "Rust"], ["linux.svg", "Linux"]],
    "summary": ["Engineer.\n"],
    "experience": ["Acme\n", "Globex\n"],
    "education": ["BSc\n"]
}"#;

fn temp_dir(label: &str) -> PathBuf {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let dir = env::temp_dir().join(format!("purism_cv_{label}_{suffix}"));
    fs::create_dir_all(&dir).expect("temp dir");
    dir
}

#[test]
fn parses_complete_document() {
    let profile = Profile::from_json_str(FULL_DOCUMENT).expect("profile");
    assert_eq!(profile.name, "Ada Example");
    assert_eq!(profile.about_text(), "Builds things.");
    assert_eq!(profile.skills.len(), 2);
    assert_eq!(profile.skills[1].icon, "linux.svg");
    assert_eq!(profile.skills[1].label, "Linux");
    assert_eq!(profile.section_text(Section::Experience), "Acme\nGlobex\n");
}

#[test]
fn missing_key_is_a_parse_error() {
    let err = Profile::from_json_str(r#"{"name": "Only Name"}"#).expect_err("incomplete");
    assert!(matches!(err, LoadError::Parse(_)));
}

#[test]
fn skill_entries_must_be_pairs() {
    let doc = FULL_DOCUMENT.replace(r#"["rust.svg", "Rust"]"#, r#"["rust.svg"]"#);
    assert!(Profile::from_json_str(&doc).is_err());
}

#[test]
fn load_reads_document_from_disk() {
    let dir = temp_dir("load_ok");
    let path = dir.join("profile.json");
    fs::write(&path, FULL_DOCUMENT).expect("write");

    let loaded = load_or_default(&path);
    assert_eq!(loaded.source, ProfileSource::Document(path.clone()));
    assert!(!loaded.is_fallback());
    assert_eq!(loaded.profile.email, "ada@example.org");

    fs::remove_dir_all(dir).expect("cleanup");
}

#[test]
fn missing_document_falls_back_to_builtin_default() {
    let dir = temp_dir("load_missing");
    let path = dir.join("profile.json");

    let err = Profile::load(&path).expect_err("missing file");
    assert!(matches!(err, LoadError::Read { .. }));

    let loaded = load_or_default(&path);
    assert!(loaded.is_fallback());
    assert_eq!(loaded.profile, Profile::builtin_default());

    fs::remove_dir_all(dir).expect("cleanup");
}

#[test]
fn malformed_document_falls_back_without_merging() {
    let dir = temp_dir("load_malformed");
    let path = dir.join("profile.json");
    // Valid name, broken tail: nothing from it may leak into the fallback.
    fs::write(&path, r#"{"name": "Partial Person", "email": "#).expect("write");

    let loaded = load_or_default(&path);
    assert!(loaded.is_fallback());
    assert_eq!(loaded.profile, Profile::builtin_default());
    assert_eq!(loaded.profile.name, "First Last");

    fs::remove_dir_all(dir).expect("cleanup");
}

#[test]
fn builtin_default_round_trips_through_json() {
    let default = Profile::builtin_default();
    let raw = serde_json::to_string(&default).expect("serialize");
    assert_eq!(Profile::from_json_str(&raw).expect("parse"), default);
}

#[test]
fn bundled_sample_document_parses() {
    let raw = include_str!("../../../../data/profile.json");
    let profile = Profile::from_json_str(raw).expect("sample profile");
    assert_eq!(profile.skills.len(), 3);
    assert_eq!(profile.section_text(Section::Experience), "A\nB\n\n");
    assert!(!profile.summary.is_empty());
}
