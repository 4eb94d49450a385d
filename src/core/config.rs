//! # Engine Configuration / 引擎配置
//!
//! Options recognised by the translation engine. The defaults reproduce the
//! application's fixed configuration, so `EngineOptions::default()` is what the
//! global engine uses. Options can also be loaded from a TOML file:
//!
//! 翻译引擎识别的选项。默认值即应用程序的固定配置，全局引擎使用
//! `EngineOptions::default()`。也可以从 TOML 文件加载选项：
//!
//! ```toml
//! fallback_language = "en"
//! return_empty_string = true
//! escape_value = false
//! # language = "de"
//! # key_separator = "."
//! ```

use crate::core::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration of an [`I18n`](crate::core::engine::I18n) engine.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct EngineOptions {
    /// When a key is missing everywhere, return `""` instead of the key.
    /// Empty catalog values are accepted as translations.
    ///
    /// 当键在所有语言中都缺失时返回 `""` 而不是键本身。目录中的空值被视为有效翻译。
    pub return_empty_string: bool,
    /// Language consulted after the active language.
    /// 在当前语言之后查询的回退语言。
    pub fallback_language: String,
    /// Initial active language. `None` means the detected system language.
    /// 初始语言。`None` 表示使用检测到的系统语言。
    pub language: Option<String>,
    /// Separator addressing nested tables. `None` keeps keys flat.
    /// 用于访问嵌套表的分隔符。`None` 表示键是扁平的。
    pub key_separator: Option<char>,
    /// Separator between namespace and key in `"ns:key"` strings.
    pub namespace_separator: Option<char>,
    /// Namespace used for keys that carry none.
    pub default_namespace: String,
    /// HTML-escape interpolated values.
    pub escape_value: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            return_empty_string: true,
            fallback_language: default_fallback_language(),
            language: None,
            key_separator: None,
            namespace_separator: Some(':'),
            default_namespace: "translation".to_string(),
            escape_value: false,
        }
    }
}

fn default_fallback_language() -> String {
    "en".to_string()
}

impl EngineOptions {
    /// Parses options from TOML text. Absent fields keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Reads and parses a TOML options file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_fallback_language(mut self, language: impl Into<String>) -> Self {
        self.fallback_language = language.into();
        self
    }

    pub fn with_key_separator(mut self, separator: Option<char>) -> Self {
        self.key_separator = separator;
        self
    }

    pub fn with_escape_value(mut self, escape: bool) -> Self {
        self.escape_value = escape;
        self
    }

    pub fn with_return_empty_string(mut self, enabled: bool) -> Self {
        self.return_empty_string = enabled;
        self
    }
}
