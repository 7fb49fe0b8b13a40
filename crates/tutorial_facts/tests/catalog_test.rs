//! Tests for loading animal catalogs from TOML.

use std::fs;
use tempfile::TempDir;

use tutorial_facts::{Catalog, DEFAULT_HEADING};

const SEA_LIFE: &str = r#"
title = "Sea life"
show_background = false

[animals.octopus]
image = "/images/octopus.jpg"
facts = ["Octopuses have three hearts!", "Octopuses have blue blood!"]

[animals.crab]
image = "/images/crab.jpg"
facts = ["Crabs walk sideways!"]
"#;

#[test]
fn test_from_toml_str() {
    let catalog = Catalog::from_toml_str(SEA_LIFE).expect("Parse failed");
    assert_eq!(catalog.heading(), "Sea life");
    assert!(!*catalog.show_background());
    assert_eq!(catalog.names(), ["crab", "octopus"]);
    assert_eq!(catalog.animal("octopus").unwrap().facts().len(), 2);
}

#[test]
fn test_defaults_apply() {
    let catalog = Catalog::from_toml_str(
        r#"
[animals.crab]
image = "/images/crab.jpg"
facts = ["Crabs walk sideways!"]
"#,
    )
    .expect("Parse failed");
    assert_eq!(catalog.heading(), DEFAULT_HEADING);
    assert!(*catalog.show_background());
}

#[test]
fn test_from_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("animals.toml");
    fs::write(&path, SEA_LIFE).expect("Failed to write TOML");

    let catalog = Catalog::from_file(&path).expect("Load failed");
    assert_eq!(catalog.names().len(), 2);
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let err = Catalog::from_file(dir.path().join("missing.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read catalog file"));
}

#[test]
fn test_rejects_empty_catalog() {
    let err = Catalog::from_toml_str("[animals]\n").unwrap_err();
    assert!(err.message.contains("no animals"));
}

#[test]
fn test_rejects_animal_without_facts() {
    let err = Catalog::from_toml_str(
        r#"
[animals.ghost]
image = "/images/ghost.jpg"
facts = []
"#,
    )
    .unwrap_err();
    assert!(err.message.contains("ghost"));
}

#[test]
fn test_rejects_invalid_toml() {
    let err = Catalog::from_toml_str("this is not valid toml !!!@@@").unwrap_err();
    assert!(err.message.contains("Failed to parse catalog"));
}
