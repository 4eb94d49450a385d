//! # Locale Switch Library / Locale Switch 库
//!
//! Translation catalogs embedded at build time, system language detection and
//! a translation engine whose active language can be switched at runtime.
//!
//! 构建时嵌入的翻译目录、系统语言检测，以及可在运行时切换当前语言的翻译引擎。
//!
//! ## Modules / 模块
//!
//! - `core` - Catalog, detection, configuration and the translation engine
//! - `global` - The process-wide default engine
//! - `infra` - Infrastructure services such as logging
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 目录、检测、配置和翻译引擎
//! - `global` - 进程级默认引擎
//! - `infra` - 日志等基础设施服务
//! - `cli` - 命令行接口和命令
//!
//! ## Example / 示例
//!
//! ```
//! use locale_switch::core::detect::FixedLocale;
//! use locale_switch::{EngineOptions, I18n, ResourceCatalog};
//!
//! let catalog = ResourceCatalog::embedded().unwrap();
//! let i18n = I18n::init(catalog, EngineOptions::default(), &FixedLocale::new("de-AT"));
//! assert_eq!(i18n.language(), "de");
//! assert_eq!(i18n.t("navigation", "back"), "Zurück");
//!
//! i18n.change_language(Some("en"));
//! assert_eq!(i18n.t_key("navigation:back"), "Back");
//! ```

pub mod cli;
pub mod core;
pub mod global;
pub mod infra;

// Re-export commonly used items
pub use crate::core::catalog::ResourceCatalog;
pub use crate::core::config::EngineOptions;
pub use crate::core::engine::{I18n, Translator};
pub use global::{change_language, i18n, locales, system_language};
