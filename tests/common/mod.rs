// Shared test helpers for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

/// Writes `<root>/<locale>/<namespace>.json` for every entry.
pub fn write_resources(root: &Path, resources: &[(&str, &str, &str)]) {
    for (locale, namespace, content) in resources {
        let locale_dir = root.join(locale);
        fs::create_dir_all(&locale_dir).expect("Failed to create locale directory");
        fs::write(locale_dir.join(format!("{}.json", namespace)), content)
            .expect("Failed to write resource file");
    }
}

/// A small, symmetric two-locale catalog.
pub fn setup_locales_dir() -> TempDir {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    write_resources(
        temp_dir.path(),
        &[
            ("de", "common", r#"{"hello": "Hallo", "bye": "Tschüss"}"#),
            ("de", "menu", r#"{"open": "Öffnen"}"#),
            ("en", "common", r#"{"hello": "Hello", "bye": "Bye", "only_en": "English only"}"#),
            ("en", "menu", r#"{"open": "Open"}"#),
        ],
    );
    temp_dir
}

/// The same catalog with the German `menu` namespace missing.
pub fn setup_asymmetric_locales_dir() -> TempDir {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    write_resources(
        temp_dir.path(),
        &[
            ("de", "common", r#"{"hello": "Hallo"}"#),
            ("en", "common", r#"{"hello": "Hello"}"#),
            ("en", "menu", r#"{"open": "Open"}"#),
        ],
    );
    temp_dir
}

/// A catalog whose German `common` file is not valid JSON.
pub fn setup_malformed_locales_dir() -> TempDir {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    write_resources(
        temp_dir.path(),
        &[
            ("de", "common", r#"{"hello": "Hallo",}"#),
            ("en", "common", r#"{"hello": "Hello"}"#),
        ],
    );
    temp_dir
}
