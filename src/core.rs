//! # Core Module / 核心模块
//!
//! This module contains the core functionality of Locale Switch:
//! the resource catalog, system language detection, engine configuration
//! and the translation engine itself.
//!
//! 此模块包含 Locale Switch 的核心功能：
//! 资源目录、系统语言检测、引擎配置以及翻译引擎本身。

pub mod catalog;
pub mod config;
pub mod detect;
pub mod engine;
pub mod error;
pub mod interpolate;

// Re-exports
pub use catalog::ResourceCatalog;
pub use config::EngineOptions;
pub use engine::I18n;
