//! # Check Command Module / 检查命令模块
//!
//! Validates a catalog: every resource parses as a JSON object and every
//! locale defines the same namespaces.
//!
//! 校验目录：每个资源都能解析为 JSON 对象，且每个语言定义了相同的命名空间。

use anyhow::Result;
use colored::*;
use std::path::PathBuf;

use super::load_catalog;

/// Executes the check command.
///
/// # Arguments
/// * `dir` - Locales directory to validate; the embedded catalog when `None`
///
/// # Returns
/// An error describing the first problem found
pub fn execute(dir: Option<PathBuf>) -> Result<()> {
    let catalog = load_catalog(dir.as_ref())?;

    let locales: Vec<&str> = catalog.locales().collect();
    let namespaces = locales
        .first()
        .map(|locale| catalog.namespaces(locale))
        .unwrap_or_default();

    println!(
        "{}",
        format!(
            "Catalog OK: {} locale(s), {} namespace(s)",
            locales.len(),
            namespaces.len()
        )
        .green()
    );
    println!("Locales: {}", locales.join(", "));
    println!("Namespaces: {}", namespaces.join(", "));
    Ok(())
}
