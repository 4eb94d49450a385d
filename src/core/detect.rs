//! # System Language Detection / 系统语言检测
//!
//! Derives the short language code (`"en"` from `"en-US"`) from the locale the
//! platform reports. The platform query sits behind [`LocaleProvider`] so it
//! can be replaced in tests.
//!
//! 从平台报告的区域设置中推导短语言代码（例如从 `"en-US"` 得到 `"en"`）。
//! 平台查询位于 [`LocaleProvider`] 之后，以便在测试中替换。

/// Source of the platform locale identifier.
/// 平台区域设置标识符的来源。
pub trait LocaleProvider {
    /// The raw locale identifier, e.g. `"de-AT"`, or `None` if the platform
    /// reports nothing.
    fn locale(&self) -> Option<String>;
}

/// Queries the operating system through `sys-locale`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLocale;

impl LocaleProvider for SystemLocale {
    fn locale(&self) -> Option<String> {
        sys_locale::get_locale()
    }
}

/// A locale fixed up front. Used by tests and by `--locale` on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedLocale(pub String);

impl FixedLocale {
    pub fn new(locale: impl Into<String>) -> Self {
        Self(locale.into())
    }
}

impl LocaleProvider for FixedLocale {
    fn locale(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// Returns the primary language subtag of a locale identifier.
///
/// Splits on the first `-` and keeps the first segment. A string without a
/// separator is returned whole. No case normalisation is performed.
///
/// 返回区域设置标识符的主语言子标签。在第一个 `-` 处分割并保留第一段；
/// 没有分隔符的字符串将原样返回。不进行大小写规范化。
///
/// # Examples / 示例
/// ```
/// use locale_switch::core::detect::primary_language;
/// assert_eq!(primary_language("en-US"), "en");
/// assert_eq!(primary_language("fr"), "fr");
/// ```
pub fn primary_language(locale: &str) -> &str {
    locale.split('-').next().unwrap_or(locale)
}

/// Detects the system language through `provider`.
///
/// Returns `None` only when the platform reports no locale at all; the engine
/// then starts in its fallback language.
pub fn detect_system_language(provider: &dyn LocaleProvider) -> Option<String> {
    let locale = provider.locale()?;
    let language = primary_language(&locale).to_string();
    tracing::debug!(platform_locale = %locale, %language, "detected system language");
    Some(language)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoLocale;

    impl LocaleProvider for NoLocale {
        fn locale(&self) -> Option<String> {
            None
        }
    }

    #[test]
    fn test_primary_language_keeps_case() {
        assert_eq!(primary_language("EN-us"), "EN");
    }

    #[test]
    fn test_primary_language_splits_on_first_hyphen_only() {
        assert_eq!(primary_language("zh-Hans-CN"), "zh");
        assert_eq!(primary_language("-US"), "");
        assert_eq!(primary_language(""), "");
    }

    #[test]
    fn test_detect_without_platform_locale() {
        assert_eq!(detect_system_language(&NoLocale), None);
    }

    #[test]
    fn test_detect_with_fixed_locale() {
        let provider = FixedLocale::new("de-AT");
        assert_eq!(detect_system_language(&provider).as_deref(), Some("de"));
    }
}
