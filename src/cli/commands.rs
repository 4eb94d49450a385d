//! # Commands Module / 命令模块
//!
//! Implementations of the `locale-switch` subcommands.
//!
//! `locale-switch` 子命令的实现。

pub mod check;
pub mod detect;
pub mod list;
pub mod lookup;

use crate::core::catalog::ResourceCatalog;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Loads the catalog from `dir`, or the embedded catalog when `dir` is `None`.
///
/// # Arguments
/// * `dir` - Optional locales directory laid out as `<locale>/<namespace>.json`
///
/// # Returns
/// The assembled catalog, with the source named in any error
pub(crate) fn load_catalog(dir: Option<&PathBuf>) -> Result<ResourceCatalog> {
    match dir {
        Some(dir) => ResourceCatalog::load_dir(dir)
            .with_context(|| format!("Failed to load catalog from {}", dir.display())),
        None => ResourceCatalog::embedded().context("Failed to load the embedded catalog"),
    }
}
