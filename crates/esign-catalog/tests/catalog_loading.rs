//! Loading catalogs from disk

use esign_catalog::{CatalogError, PlanCatalog};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::io::Write;

fn write_temp(suffix: &str, body: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(body.as_bytes()).unwrap();
    file
}

#[test]
fn load_by_extension() {
    let toml = write_temp(
        ".toml",
        "[[plans]]\nid = \"a\"\nname = \"1. A\"\npriceDisplay = \"$1\"\n",
    );
    let yaml = write_temp(".yml", "plans:\n  - id: b\n    name: '1. B'\n    priceDisplay: '$2'\n");
    let json = write_temp(
        ".json",
        r#"{"plans":[{"id":"c","name":"1. C","priceDisplay":"$3"}]}"#,
    );

    assert_eq!(PlanCatalog::load(toml.path()).unwrap().name_of("a"), Some("1. A"));
    assert_eq!(PlanCatalog::load(yaml.path()).unwrap().name_of("b"), Some("1. B"));
    assert_eq!(PlanCatalog::load(json.path()).unwrap().name_of("c"), Some("1. C"));
}

#[test]
fn load_rejects_unknown_extension() {
    let file = write_temp(".ini", "plans=");
    let err = PlanCatalog::load(file.path()).unwrap_err();
    assert!(matches!(err, CatalogError::UnsupportedFormat(ext) if ext == "ini"));
}

#[test]
fn load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = PlanCatalog::load(dir.path().join("plans.toml")).unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }));
}

#[test]
fn load_checks_extension_before_reading() {
    let dir = tempfile::tempdir().unwrap();
    let err = PlanCatalog::load(dir.path().join("plans.ini")).unwrap_err();
    assert!(matches!(err, CatalogError::UnsupportedFormat(ext) if ext == "ini"));
}

#[test]
fn load_rejects_duplicates() {
    let file = write_temp(
        ".json",
        r#"{"plans":[
            {"id":"a","name":"1. A","priceDisplay":"$1"},
            {"id":"a","name":"2. A","priceDisplay":"$2"}
        ]}"#,
    );
    assert!(matches!(
        PlanCatalog::load(file.path()),
        Err(CatalogError::DuplicatePlanId(_))
    ));
}

#[test]
fn builtin_round_trips_through_json() {
    let builtin = PlanCatalog::builtin();
    let plans: Vec<_> = builtin.iter().cloned().collect();
    let text = serde_json::json!({ "plans": plans }).to_string();

    let reloaded = PlanCatalog::from_json_str(&text).unwrap();
    let before: Vec<_> = builtin.iter().collect();
    let after: Vec<_> = reloaded.iter().collect();
    assert_eq!(before, after);
}

proptest! {
    #[test]
    fn prop_positions_follow_input_order(ids in proptest::collection::hash_set("[a-z]{1,8}", 1..12)) {
        let ids: Vec<String> = ids.into_iter().collect();
        let plans = ids
            .iter()
            .map(|id| esign_catalog::PlanOption::new(id.clone(), id.to_uppercase(), "$0"))
            .collect();
        let catalog = PlanCatalog::from_plans(plans).unwrap();

        for (idx, id) in ids.iter().enumerate() {
            prop_assert_eq!(catalog.position(id), Some(idx + 1));
        }
    }
}
