//! # Global Engine / 全局引擎
//!
//! The process-wide default engine, built on first use from the embedded
//! catalog and the default [`EngineOptions`]. Applications that prefer to
//! pass an [`I18n`] handle through their own context can ignore this module,
//! or [`install`] a handle of their own before anything else touches it.
//!
//! 进程级的默认引擎，首次使用时由内嵌目录和默认 [`EngineOptions`] 构建。
//! 希望通过自己的上下文传递 [`I18n`] 句柄的应用可以忽略此模块，
//! 或在首次使用前通过 [`install`] 安装自己的句柄。

use crate::core::catalog::ResourceCatalog;
use crate::core::config::EngineOptions;
use crate::core::detect::{detect_system_language, FixedLocale, SystemLocale};
use crate::core::engine::I18n;
use crate::core::error::CatalogError;
use once_cell::sync::{Lazy, OnceCell};

static ENGINE: OnceCell<I18n> = OnceCell::new();

static SYSTEM_LANGUAGE: Lazy<String> =
    Lazy::new(|| detect_system_language(&SystemLocale).unwrap_or_default());

/// The primary language subtag of the platform locale, detected once per
/// process. Empty when the platform reports no locale.
pub fn system_language() -> &'static str {
    &SYSTEM_LANGUAGE
}

/// Returns the global engine, building it on first call.
///
/// Construction happens exactly once; later calls return the same handle.
pub fn i18n() -> Result<&'static I18n, CatalogError> {
    ENGINE.get_or_try_init(|| {
        let catalog = ResourceCatalog::embedded()?;
        Ok(I18n::init(
            catalog,
            EngineOptions::default(),
            &FixedLocale::new(system_language()),
        ))
    })
}

/// Installs `i18n` as the global engine.
///
/// Fails, handing the engine back, if a global engine already exists.
pub fn install(i18n: I18n) -> Result<(), I18n> {
    ENGINE.set(i18n)
}

/// The catalog behind the global engine.
pub fn locales() -> Result<&'static ResourceCatalog, CatalogError> {
    Ok(i18n()?.catalog())
}

/// Switches the language of the global engine. See [`I18n::change_language`].
pub fn change_language(next: Option<&str>) {
    match i18n() {
        Ok(i18n) => i18n.change_language(next),
        Err(e) => tracing::error!(error = %e, "translation engine unavailable"),
    }
}
