//! # List Command Module / 列表命令模块
//!
//! Prints every (locale, namespace) pair with its number of keys.
//!
//! 打印每个（语言，命名空间）对及其键的数量。

use anyhow::Result;
use colored::*;
use std::path::PathBuf;

use super::load_catalog;

pub fn execute(dir: Option<PathBuf>) -> Result<()> {
    let catalog = load_catalog(dir.as_ref())?;

    for locale in catalog.locales() {
        println!("{}", locale.bold());
        for namespace in catalog.namespaces(locale) {
            println!("  {:<20} {:>4} keys", namespace, catalog.key_count(locale, namespace));
        }
    }
    Ok(())
}
