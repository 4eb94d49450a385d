//! # Interpolation / 插值
//!
//! Replaces `{{name}}` placeholders in translated strings with caller-supplied
//! values, optionally HTML-escaping them.
//!
//! 将翻译字符串中的 `{{name}}` 占位符替换为调用方提供的值，可选择进行 HTML 转义。

use std::fmt::{self, Display};

const PREFIX: &str = "{{";
const SUFFIX: &str = "}}";

/// Named interpolation arguments, e.g. `&[("project", &"Birds")]`.
pub type Args<'a> = [(&'a str, &'a dyn Display)];

/// Escapes the characters `& < > " ' /` for HTML output.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            '/' => escaped.push_str("&#x2F;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Substitutes every `{{name}}` in `template`.
///
/// Whitespace around the name is ignored. A placeholder without a matching
/// argument becomes the empty string. An unterminated `{{` is copied verbatim.
///
/// 替换 `template` 中的每个 `{{name}}`。名称两侧的空白会被忽略。
/// 没有对应参数的占位符替换为空字符串；未闭合的 `{{` 原样保留。
pub fn interpolate(template: &str, args: &Args<'_>, escape: bool) -> String {
    if !template.contains(PREFIX) {
        return template.to_string();
    }

    let mut result = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find(PREFIX) {
        result.push_str(&rest[..start]);
        let after_prefix = &rest[start + PREFIX.len()..];
        let Some(end) = after_prefix.find(SUFFIX) else {
            result.push_str(&rest[start..]);
            return result;
        };

        let name = after_prefix[..end].trim();
        match args.iter().find(|(arg, _)| *arg == name) {
            Some((_, value)) => {
                let value = value.to_string();
                if escape {
                    result.push_str(&escape_html(&value));
                } else {
                    result.push_str(&value);
                }
            }
            None => tracing::warn!(placeholder = name, "missing interpolation value"),
        }
        rest = &after_prefix[end + SUFFIX.len()..];
    }
    result.push_str(rest);
    result
}

/// Owned argument list, handy when values are collected at runtime
/// (for example from `--set key=value` on the command line).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnedArgs(pub Vec<(String, String)>);

impl OwnedArgs {
    /// Parses `key=value`. Returns `None` when there is no `=`.
    pub fn parse_pair(pair: &str) -> Option<(String, String)> {
        let (key, value) = pair.split_once('=')?;
        Some((key.trim().to_string(), value.to_string()))
    }

    pub fn as_args(&self) -> Vec<(&str, &dyn Display)> {
        self.0
            .iter()
            .map(|(key, value)| (key.as_str(), value as &dyn Display))
            .collect()
    }
}

impl fmt::Display for OwnedArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs: Vec<String> = self.0.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
        write!(f, "{}", pairs.join(", "))
    }
}
