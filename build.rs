//! # Build Script for Embedded Catalogs / 内嵌翻译目录构建脚本
//!
//! This build script embeds every translation file under `locales/` into the
//! crate. Files are laid out as `locales/<locale>/<namespace>.json`. Each file
//! is parsed once here so that a malformed or missing resource fails the build
//! instead of the application start.
//!
//! 此构建脚本将 `locales/` 下的所有翻译文件嵌入到 crate 中。
//! 文件布局为 `locales/<locale>/<namespace>.json`。每个文件都会在此处解析一次，
//! 因此格式错误或缺失的资源会导致构建失败，而不是应用启动失败。
//!
//! ## Generated Code / 生成的代码
//!
//! - `EMBEDDED_RESOURCES`: one `EmbeddedResource` per (locale, namespace) pair
//! - `EMBEDDED_LOCALES` and `EMBEDDED_NAMESPACES`: sorted name lists
//!
//! - `EMBEDDED_RESOURCES`：每个（语言，命名空间）对应一个 `EmbeddedResource`
//! - `EMBEDDED_LOCALES` 与 `EMBEDDED_NAMESPACES`：排序后的名称列表

use std::collections::{BTreeMap, BTreeSet};
use std::env;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

/// Collects the JSON files of one locale directory, keyed by namespace.
///
/// 收集单个语言目录下的 JSON 文件，以命名空间为键。
fn namespace_files(locale_dir: &Path) -> std::io::Result<BTreeMap<String, PathBuf>> {
    let mut files = BTreeMap::new();
    for entry in fs::read_dir(locale_dir)? {
        let path = entry?.path();
        if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
            continue;
        }
        if let Some(namespace) = path.file_stem().and_then(|s| s.to_str()) {
            files.insert(namespace.to_string(), path.clone());
        }
    }
    Ok(files)
}

/// Parses a resource file and checks that its root is a JSON object.
/// 解析资源文件并检查其根节点是否为 JSON 对象。
fn validate_resource(path: &Path) {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
    let value: serde_json::Value = serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse {}: {}", path.display(), e));
    if !value.is_object() {
        panic!("{} must contain a JSON object at its root", path.display());
    }
}

fn main() -> std::io::Result<()> {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set");
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set");
    let dest_path = Path::new(&out_dir).join("embedded_catalog.rs");
    let locales_dir = Path::new(&manifest_dir).join("locales");

    // 1. 每个子目录即一个语言
    let mut catalog: BTreeMap<String, BTreeMap<String, PathBuf>> = BTreeMap::new();
    for entry in fs::read_dir(&locales_dir)? {
        let path = entry?.path();
        if !path.is_dir() {
            continue;
        }
        let Some(locale) = path.file_name().and_then(|s| s.to_str()) else {
            continue;
        };
        catalog.insert(locale.to_string(), namespace_files(&path)?);
    }

    if catalog.is_empty() {
        panic!("No locale directories found in {}", locales_dir.display());
    }

    // 2. 所有语言必须定义相同的命名空间集合
    let all_namespaces: BTreeSet<&String> = catalog.values().flat_map(|files| files.keys()).collect();
    for (locale, files) in &catalog {
        let missing: Vec<&str> = all_namespaces
            .iter()
            .filter(|ns| !files.contains_key(ns.as_str()))
            .map(|ns| ns.as_str())
            .collect();
        if !missing.is_empty() {
            panic!(
                "Locale '{}' is missing namespace file(s): {}",
                locale,
                missing.join(", ")
            );
        }
    }

    // 3. 生成代码
    let mut final_code = String::new();
    writeln!(&mut final_code, "pub(crate) static EMBEDDED_RESOURCES: &[EmbeddedResource] = &[").unwrap();
    for (locale, files) in &catalog {
        for (namespace, path) in files {
            validate_resource(path);
            writeln!(
                &mut final_code,
                "    EmbeddedResource {{ locale: {:?}, namespace: {:?}, source: include_str!({:?}) }},",
                locale,
                namespace,
                path.to_string_lossy()
            )
            .unwrap();
        }
    }
    writeln!(&mut final_code, "];\n").unwrap();

    let locale_list: Vec<String> = catalog.keys().map(|l| format!("{:?}", l)).collect();
    writeln!(
        &mut final_code,
        "pub(crate) static EMBEDDED_LOCALES: &[&str] = &[{}];",
        locale_list.join(", ")
    )
    .unwrap();

    let namespace_list: Vec<String> = all_namespaces.iter().map(|ns| format!("{:?}", ns)).collect();
    writeln!(
        &mut final_code,
        "pub(crate) static EMBEDDED_NAMESPACES: &[&str] = &[{}];",
        namespace_list.join(", ")
    )
    .unwrap();

    fs::write(&dest_path, final_code)?;
    println!("cargo:rerun-if-changed=locales/");

    Ok(())
}
