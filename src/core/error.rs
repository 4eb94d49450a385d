//! # Error Types / 错误类型
//!
//! Errors raised while assembling catalogs or loading configuration.
//! Lookups and language switches never fail, so they have no error type.
//!
//! 组装翻译目录或加载配置时产生的错误。
//! 查找和语言切换永远不会失败，因此没有对应的错误类型。

use std::path::PathBuf;

/// Failures while building a [`ResourceCatalog`](crate::core::catalog::ResourceCatalog).
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed resource {origin}: {source}")]
    Malformed {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("resource {origin} must contain a JSON object at its root")]
    NotAnObject { origin: String },
    #[error("missing resource for locale '{locale}', namespace '{namespace}'")]
    MissingResource { locale: String, namespace: String },
    #[error("no locales found in {0}")]
    Empty(PathBuf),
}

/// Failures while loading [`EngineOptions`](crate::core::config::EngineOptions).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Parse(#[from] toml::de::Error),
}
