//! # Detect Command Module / 检测命令模块
//!
//! Prints the platform locale, the system language derived from it, and
//! whether the embedded catalog has an entry for that language.
//!
//! 打印平台区域设置、由其推导出的系统语言，以及内嵌目录是否包含该语言。

use anyhow::Result;
use colored::*;

use super::load_catalog;
use crate::core::config::EngineOptions;
use crate::core::detect::{detect_system_language, FixedLocale, LocaleProvider, SystemLocale};

/// Executes the detect command.
///
/// # Arguments
/// * `locale` - Platform locale override; the operating system is queried when `None`
pub fn execute(locale: Option<String>) -> Result<()> {
    let provider: Box<dyn LocaleProvider> = match locale {
        Some(locale) => Box::new(FixedLocale(locale)),
        None => Box::new(SystemLocale),
    };

    let platform_locale = provider.locale();
    let language = detect_system_language(&*provider).filter(|l| !l.is_empty());

    println!("Platform locale: {}", platform_locale.as_deref().unwrap_or("<unknown>"));
    println!("System language: {}", language.as_deref().unwrap_or("<unknown>"));

    let catalog = load_catalog(None)?;
    match language {
        Some(language) if catalog.has_locale(&language) => {
            println!("{}", "Catalog entry: yes".green());
        }
        _ => {
            let fallback = EngineOptions::default().fallback_language;
            println!(
                "{}",
                format!("Catalog entry: no, lookups use the fallback language '{}'", fallback).yellow()
            );
        }
    }
    Ok(())
}
