//! # Resource Catalog Module / 资源目录模块
//!
//! This module holds the translation resources of the application: a nested
//! mapping from locale code to namespace to translation table. A catalog is
//! assembled once, either from the resources embedded at build time or from a
//! directory with the layout `<locale>/<namespace>.json`, and is never mutated
//! afterwards.
//!
//! 此模块保存应用程序的翻译资源：从语言代码到命名空间再到翻译表的嵌套映射。
//! 目录只组装一次，来源可以是构建时嵌入的资源，也可以是布局为
//! `<locale>/<namespace>.json` 的目录，之后不再修改。

use crate::core::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

/// A single resource file compiled into the binary by `build.rs`.
/// 由 `build.rs` 编译进二进制文件的单个资源文件。
pub(crate) struct EmbeddedResource {
    pub locale: &'static str,
    pub namespace: &'static str,
    pub source: &'static str,
}

mod embedded {
    use super::EmbeddedResource;
    include!(concat!(env!("OUT_DIR"), "/embedded_catalog.rs"));
}

/// A value inside a translation table.
///
/// Resource files may nest objects; a nested object is only reachable through
/// a key separator (see [`EngineOptions::key_separator`](crate::core::config::EngineOptions)).
///
/// 翻译表中的值。资源文件可以嵌套对象；嵌套对象只能通过键分隔符访问。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TranslationValue {
    /// A translated string. Empty strings are valid translations.
    /// 翻译后的字符串。空字符串也是有效的翻译。
    Text(String),
    /// A nested table.
    /// 嵌套表。
    Table(TranslationTable),
}

impl TranslationValue {
    /// The text of a `Text` value, `None` for nested tables.
    /// `Text` 值的文本；嵌套表返回 `None`。
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TranslationValue::Text(text) => Some(text),
            TranslationValue::Table(_) => None,
        }
    }
}

/// Key/value table of one namespace in one locale.
pub type TranslationTable = BTreeMap<String, TranslationValue>;

/// The immutable, fully assembled set of translation resources.
///
/// Invariant: every locale defines the same set of namespaces. Both
/// constructors enforce it, so a `ResourceCatalog` value is always symmetric.
///
/// 不可变的、完整组装的翻译资源集合。
/// 不变量：每个语言都定义了相同的命名空间集合。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResourceCatalog {
    locales: BTreeMap<String, BTreeMap<String, TranslationTable>>,
}

impl ResourceCatalog {
    /// Builds the catalog from the resources embedded at compile time.
    ///
    /// The build script has already checked every file, so this only fails if
    /// the embedded data were tampered with.
    ///
    /// 从编译时嵌入的资源构建目录。
    pub fn embedded() -> Result<Self, CatalogError> {
        let mut builder = Self::builder();
        for resource in embedded::EMBEDDED_RESOURCES {
            builder = builder.json(resource.locale, resource.namespace, resource.source)?;
        }
        builder.build()
    }

    /// Loads a catalog from a directory laid out as `<locale>/<namespace>.json`.
    ///
    /// # Arguments / 参数
    /// * `dir` - Root directory containing one sub-directory per locale / 每个语言对应一个子目录的根目录
    ///
    /// # Returns / 返回值
    /// The assembled catalog, or the first I/O, parse or symmetry error encountered.
    /// 组装好的目录，或遇到的第一个 I/O、解析或对称性错误。
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let dir = dir.as_ref();
        let io_err = |path: &Path| {
            let path = path.to_path_buf();
            move |source| CatalogError::Io { path, source }
        };

        let mut builder = Self::builder();
        let mut found_locale = false;
        for entry in fs::read_dir(dir).map_err(io_err(dir))? {
            let locale_dir = entry.map_err(io_err(dir))?.path();
            if !locale_dir.is_dir() {
                continue;
            }
            let Some(locale) = locale_dir.file_name().and_then(|s| s.to_str()) else {
                continue;
            };
            found_locale = true;
            builder = builder.locale(locale);

            for file in fs::read_dir(&locale_dir).map_err(io_err(&locale_dir))? {
                let path = file.map_err(io_err(&locale_dir))?.path();
                if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                    continue;
                }
                let Some(namespace) = path.file_stem().and_then(|s| s.to_str()) else {
                    continue;
                };
                let source = fs::read_to_string(&path).map_err(io_err(&path))?;
                builder = builder.json(locale, namespace, &source)?;
            }
        }

        if !found_locale {
            return Err(CatalogError::Empty(dir.to_path_buf()));
        }
        builder.build()
    }

    /// Starts an empty [`CatalogBuilder`].
    /// 创建一个空的 [`CatalogBuilder`]。
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Iterates the locale codes in sorted order.
    /// 按排序顺序遍历语言代码。
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    /// Whether the catalog defines `locale`.
    /// 目录是否定义了 `locale`。
    pub fn has_locale(&self, locale: &str) -> bool {
        self.locales.contains_key(locale)
    }

    /// Namespaces defined for `locale`, sorted. Empty for unknown locales.
    pub fn namespaces(&self, locale: &str) -> Vec<&str> {
        self.locales
            .get(locale)
            .map(|namespaces| namespaces.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// The table of one namespace in one locale.
    /// 某个语言中某个命名空间的翻译表。
    pub fn table(&self, locale: &str, namespace: &str) -> Option<&TranslationTable> {
        self.locales.get(locale)?.get(namespace)
    }

    /// Looks up a raw entry.
    ///
    /// With `key_separator` set to `None` the key is a flat, opaque string.
    /// With a separator, the key is first tried literally and then as a path
    /// into nested tables.
    ///
    /// 查找原始条目。`key_separator` 为 `None` 时，键是扁平的不透明字符串；
    /// 设置分隔符时，先按字面查找，再作为嵌套表路径查找。
    pub fn entry(
        &self,
        locale: &str,
        namespace: &str,
        key: &str,
        key_separator: Option<char>,
    ) -> Option<&TranslationValue> {
        let table = self.table(locale, namespace)?;
        if let Some(value) = table.get(key) {
            return Some(value);
        }
        let separator = key_separator?;

        let mut segments = key.split(separator);
        let mut current = table.get(segments.next()?)?;
        for segment in segments {
            match current {
                TranslationValue::Table(nested) => current = nested.get(segment)?,
                TranslationValue::Text(_) => return None,
            }
        }
        Some(current)
    }

    /// Looks up a text entry, ignoring nested tables.
    pub fn text(
        &self,
        locale: &str,
        namespace: &str,
        key: &str,
        key_separator: Option<char>,
    ) -> Option<&str> {
        self.entry(locale, namespace, key, key_separator)?.as_text()
    }

    /// Counts the text leaves of one namespace, nested tables included.
    pub fn key_count(&self, locale: &str, namespace: &str) -> usize {
        fn count(table: &TranslationTable) -> usize {
            table
                .values()
                .map(|value| match value {
                    TranslationValue::Text(_) => 1,
                    TranslationValue::Table(nested) => count(nested),
                })
                .sum()
        }
        self.table(locale, namespace).map(count).unwrap_or(0)
    }

    /// Checks the namespace-symmetry invariant.
    ///
    /// Reports the first (locale, namespace) pair that some other locale
    /// defines but this one lacks.
    pub fn validate_symmetry(&self) -> Result<(), CatalogError> {
        let all: BTreeSet<&String> = self.locales.values().flat_map(|ns| ns.keys()).collect();
        for (locale, namespaces) in &self.locales {
            if let Some(missing) = all.iter().find(|ns| !namespaces.contains_key(ns.as_str())) {
                return Err(CatalogError::MissingResource {
                    locale: locale.clone(),
                    namespace: (*missing).clone(),
                });
            }
        }
        Ok(())
    }
}

/// Sorted list of the locales compiled into the crate.
pub fn embedded_locales() -> &'static [&'static str] {
    embedded::EMBEDDED_LOCALES
}

/// Sorted list of the namespaces compiled into the crate.
pub fn embedded_namespaces() -> &'static [&'static str] {
    embedded::EMBEDDED_NAMESPACES
}

/// Incremental constructor for [`ResourceCatalog`].
///
/// [`build`](CatalogBuilder::build) validates namespace symmetry.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    locales: BTreeMap<String, BTreeMap<String, TranslationTable>>,
}

impl CatalogBuilder {
    /// Registers a locale without any namespace yet.
    pub fn locale(mut self, locale: &str) -> Self {
        self.locales.entry(locale.to_string()).or_default();
        self
    }

    /// Adds (or replaces) the table of one namespace.
    pub fn table(mut self, locale: &str, namespace: &str, table: TranslationTable) -> Self {
        self.locales
            .entry(locale.to_string())
            .or_default()
            .insert(namespace.to_string(), table);
        self
    }

    /// Parses `source` as a JSON object and adds it as a namespace table.
    pub fn json(self, locale: &str, namespace: &str, source: &str) -> Result<Self, CatalogError> {
        let origin = format!("{}/{}.json", locale, namespace);
        let value: serde_json::Value =
            serde_json::from_str(source).map_err(|source| CatalogError::Malformed {
                origin: origin.clone(),
                source,
            })?;
        if !value.is_object() {
            return Err(CatalogError::NotAnObject { origin });
        }
        let table: TranslationTable = serde_json::from_value(value)
            .map_err(|source| CatalogError::Malformed { origin, source })?;
        Ok(self.table(locale, namespace, table))
    }

    pub fn build(self) -> Result<ResourceCatalog, CatalogError> {
        let catalog = ResourceCatalog {
            locales: self.locales,
        };
        catalog.validate_symmetry()?;
        Ok(catalog)
    }
}
