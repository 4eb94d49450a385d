//! # Lookup Command Module / 查找命令模块
//!
//! Resolves a single key the way the application would, including language
//! fallback and interpolation.
//!
//! 以应用程序相同的方式解析单个键，包括语言回退和插值。

use anyhow::{bail, Context, Result};
use std::path::PathBuf;

use super::load_catalog;
use crate::core::config::EngineOptions;
use crate::core::detect::{FixedLocale, LocaleProvider, SystemLocale};
use crate::core::engine::I18n;
use crate::core::interpolate::OwnedArgs;

/// Arguments of the lookup command.
#[derive(Debug, Clone, Default)]
pub struct LookupArgs {
    /// `namespace:key`, or a plain key when `namespace` is set.
    pub key: String,
    /// Active language; overrides the options file and detection.
    pub language: Option<String>,
    pub namespace: Option<String>,
    /// Engine options file (TOML).
    pub config: Option<PathBuf>,
    /// `name=value` interpolation pairs.
    pub values: Vec<String>,
    /// Platform locale override.
    pub locale: Option<String>,
    /// Locales directory; embedded catalog when `None`.
    pub dir: Option<PathBuf>,
}

/// Resolves the key and returns the translated text.
pub fn resolve(args: &LookupArgs) -> Result<String> {
    let mut options = match &args.config {
        Some(path) => EngineOptions::load(path)
            .with_context(|| format!("Failed to load options from {}", path.display()))?,
        None => EngineOptions::default(),
    };
    if let Some(language) = &args.language {
        options.language = Some(language.clone());
    }

    let mut values = OwnedArgs::default();
    for pair in &args.values {
        match OwnedArgs::parse_pair(pair) {
            Some(value) => values.0.push(value),
            None => bail!("Invalid --set value '{}', expected NAME=VALUE", pair),
        }
    }

    let catalog = load_catalog(args.dir.as_ref())?;
    let provider: Box<dyn LocaleProvider> = match &args.locale {
        Some(locale) => Box::new(FixedLocale::new(locale.clone())),
        None => Box::new(SystemLocale),
    };
    let i18n = I18n::init(catalog, options, &*provider);
    tracing::debug!(
        language = %i18n.language(),
        resolved = ?i18n.resolved_language(),
        values = %values,
        "resolving key"
    );

    let interpolation = values.as_args();
    let text = match &args.namespace {
        Some(namespace) => i18n.t_with(namespace, &args.key, &interpolation),
        None => i18n.t_key_with(&args.key, &interpolation),
    };
    Ok(text)
}

/// Executes the lookup command, printing the translation on stdout.
pub fn execute(args: LookupArgs) -> Result<()> {
    println!("{}", resolve(&args)?);
    Ok(())
}
