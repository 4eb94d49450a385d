//! # Global Engine Tests / 全局引擎测试
//!
//! The global engine is process-wide, so the switching scenario runs as a
//! single sequential test in its own test binary.
//!
//! 全局引擎是进程级的，因此切换场景在独立的测试二进制中作为单个顺序测试运行。

use locale_switch::{change_language, i18n, locales, system_language, EngineOptions, I18n, ResourceCatalog};

#[test]
fn test_global_engine_lifecycle() {
    let first = i18n().unwrap();
    let second = i18n().unwrap();
    assert!(std::ptr::eq(first, second));

    // Initial language is the detected system language, or the fallback.
    let expected = if system_language().is_empty() {
        "en"
    } else {
        system_language()
    };
    assert_eq!(first.language(), expected);

    let catalog = locales().unwrap();
    assert_eq!(catalog.locales().collect::<Vec<_>>(), vec!["de", "en"]);

    change_language(Some("de"));
    assert_eq!(first.language(), "de");
    assert_eq!(first.t("navigation", "privacy"), "Datenschutz");

    change_language(None);
    assert_eq!(first.language(), "de");

    change_language(Some("de"));
    assert_eq!(first.language(), "de");

    change_language(Some("es"));
    assert_eq!(first.language(), "es");
    assert_eq!(first.t("navigation", "privacy"), "Privacy");

    // A second engine cannot replace the existing one.
    let replacement = I18n::new(ResourceCatalog::embedded().unwrap(), EngineOptions::default());
    assert!(locale_switch::global::install(replacement).is_err());
}
