//! # Catalog Module Unit Tests / Catalog 模块单元测试
//!
//! Tests for the embedded catalog and for loading catalogs from directories.
//!
//! 测试内嵌目录以及从目录加载目录。

mod common;

use locale_switch::core::catalog::{embedded_locales, embedded_namespaces, ResourceCatalog};
use locale_switch::core::error::CatalogError;
use std::collections::BTreeSet;

const NAMESPACES: [&str; 5] = [
    "dataPointScreen",
    "navigation",
    "notifications",
    "privacyScreen",
    "projectScreen",
];

#[cfg(test)]
mod embedded_catalog_tests {
    use super::*;

    #[test]
    fn test_embedded_locales() {
        let catalog = ResourceCatalog::embedded().unwrap();
        let locales: Vec<&str> = catalog.locales().collect();
        assert_eq!(locales, vec!["de", "en"]);
        assert_eq!(embedded_locales(), &["de", "en"]);
    }

    #[test]
    fn test_namespace_symmetry() {
        let catalog = ResourceCatalog::embedded().unwrap();
        let expected: BTreeSet<&str> = NAMESPACES.into_iter().collect();

        for locale in ["de", "en"] {
            let namespaces: BTreeSet<&str> = catalog.namespaces(locale).into_iter().collect();
            assert_eq!(namespaces, expected, "namespaces of '{}'", locale);
        }
        assert_eq!(embedded_namespaces(), &NAMESPACES);
        assert!(catalog.validate_symmetry().is_ok());
    }

    #[test]
    fn test_keys_may_differ_between_locales() {
        let catalog = ResourceCatalog::embedded().unwrap();
        assert_eq!(catalog.text("en", "navigation", "feedback", None), Some("Send feedback"));
        assert_eq!(catalog.text("de", "navigation", "feedback", None), None);
        assert_eq!(
            catalog.text("de", "projectScreen", "archivedProjects", None),
            Some("Archivierte Projekte")
        );
        assert_eq!(catalog.text("en", "projectScreen", "archivedProjects", None), None);
    }

    #[test]
    fn test_empty_values_are_kept() {
        let catalog = ResourceCatalog::embedded().unwrap();
        assert_eq!(catalog.text("de", "privacyScreen", "optionalNotice", None), Some(""));
    }

    #[test]
    fn test_unknown_locale_has_no_namespaces() {
        let catalog = ResourceCatalog::embedded().unwrap();
        assert!(!catalog.has_locale("es"));
        assert!(catalog.namespaces("es").is_empty());
        assert!(catalog.table("es", "navigation").is_none());
    }
}

#[cfg(test)]
mod load_dir_tests {
    use super::*;

    #[test]
    fn test_load_symmetric_dir() {
        let temp_dir = common::setup_locales_dir();
        let catalog = ResourceCatalog::load_dir(temp_dir.path()).unwrap();

        assert_eq!(catalog.locales().collect::<Vec<_>>(), vec!["de", "en"]);
        assert_eq!(catalog.namespaces("de"), vec!["common", "menu"]);
        assert_eq!(catalog.text("de", "menu", "open", None), Some("Öffnen"));
        assert_eq!(catalog.key_count("en", "common"), 3);
    }

    #[test]
    fn test_load_asymmetric_dir_fails() {
        let temp_dir = common::setup_asymmetric_locales_dir();
        match ResourceCatalog::load_dir(temp_dir.path()) {
            Err(CatalogError::MissingResource { locale, namespace }) => {
                assert_eq!(locale, "de");
                assert_eq!(namespace, "menu");
            }
            other => panic!("expected MissingResource, got {:?}", other),
        }
    }

    #[test]
    fn test_load_malformed_dir_fails() {
        let temp_dir = common::setup_malformed_locales_dir();
        let err = ResourceCatalog::load_dir(temp_dir.path()).unwrap_err();
        assert!(matches!(err, CatalogError::Malformed { .. }));
        assert!(err.to_string().contains("de/common.json"));
    }

    #[test]
    fn test_load_empty_dir_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let err = ResourceCatalog::load_dir(temp_dir.path()).unwrap_err();
        assert!(matches!(err, CatalogError::Empty(_)));
    }

    #[test]
    fn test_load_nonexistent_dir_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let missing = temp_dir.path().join("does-not-exist");
        let err = ResourceCatalog::load_dir(&missing).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn test_non_json_files_are_ignored() {
        let temp_dir = common::setup_locales_dir();
        std::fs::write(temp_dir.path().join("de").join("README.txt"), "notes").unwrap();
        std::fs::write(temp_dir.path().join("LICENSE"), "text").unwrap();

        let catalog = ResourceCatalog::load_dir(temp_dir.path()).unwrap();
        assert_eq!(catalog.namespaces("de"), vec!["common", "menu"]);
    }

    #[test]
    fn test_number_values_are_malformed() {
        let temp_dir = tempfile::tempdir().unwrap();
        common::write_resources(temp_dir.path(), &[("en", "common", r#"{"count": 3}"#)]);
        let err = ResourceCatalog::load_dir(temp_dir.path()).unwrap_err();
        assert!(matches!(err, CatalogError::Malformed { .. }));
    }
}
