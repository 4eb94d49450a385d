//! # Translation Engine / 翻译引擎
//!
//! The engine binds a [`ResourceCatalog`] to an active language. It resolves
//! keys through a language chain (active language, its primary subtag, then the
//! fallback language), substitutes placeholders, and exposes the single
//! mutator of the active language: [`I18n::change_language`].
//!
//! `I18n` is a cheap, clonable handle. Hand one clone to whatever context
//! container the application uses; every clone observes the same language.
//!
//! 引擎将 [`ResourceCatalog`] 绑定到当前语言。它通过语言链（当前语言、其主子标签、
//! 回退语言）解析键、替换占位符，并提供修改当前语言的唯一入口：
//! [`I18n::change_language`]。
//!
//! `I18n` 是一个廉价的可克隆句柄。所有克隆共享同一个当前语言。

use crate::core::catalog::ResourceCatalog;
use crate::core::config::EngineOptions;
use crate::core::detect::{detect_system_language, primary_language, LocaleProvider, SystemLocale};
use crate::core::interpolate::{interpolate, Args};
use std::collections::VecDeque;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

/// Callback invoked with the new language code after an effective switch.
pub type LanguageListener = Arc<dyn Fn(&str) + Send + Sync>;

/// Handle returned by [`I18n::on_language_changed`], used to unregister.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

struct Inner {
    catalog: Arc<ResourceCatalog>,
    options: EngineOptions,
    language: RwLock<String>,
    listeners: RwLock<Vec<(ListenerId, LanguageListener)>>,
    next_listener: AtomicU64,
    dispatch: Mutex<Dispatch>,
}

/// Switches waiting to be delivered to listeners, in the order they were applied.
///
/// 等待通知监听器的语言切换，按应用顺序排列。
#[derive(Default)]
struct Dispatch {
    pending: VecDeque<String>,
    running: bool,
}

/// A configured translation engine.
///
/// 已配置的翻译引擎。
#[derive(Clone)]
pub struct I18n {
    inner: Arc<Inner>,
}

impl fmt::Debug for I18n {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("I18n")
            .field("language", &self.language())
            .field("locales", &self.inner.catalog.locales().collect::<Vec<_>>())
            .field("options", &self.inner.options)
            .finish()
    }
}

impl I18n {
    /// Creates an engine whose initial language comes from the operating system
    /// unless `options.language` is set.
    pub fn new(catalog: impl Into<Arc<ResourceCatalog>>, options: EngineOptions) -> Self {
        Self::init(catalog, options, &SystemLocale)
    }

    /// Creates an engine, detecting the system language through `provider`.
    ///
    /// The initial language is, in order: `options.language`, the detected
    /// system language, the fallback language. A detected language without a
    /// catalog entry is still used; lookups then degrade to the fallback.
    ///
    /// 创建引擎，通过 `provider` 检测系统语言。初始语言依次为：
    /// `options.language`、检测到的系统语言、回退语言。
    pub fn init(
        catalog: impl Into<Arc<ResourceCatalog>>,
        options: EngineOptions,
        provider: &dyn LocaleProvider,
    ) -> Self {
        let catalog = catalog.into();
        let language = options
            .language
            .clone()
            .or_else(|| detect_system_language(provider))
            .filter(|language| !language.is_empty())
            .unwrap_or_else(|| options.fallback_language.clone());

        tracing::info!(
            %language,
            fallback = %options.fallback_language,
            locales = ?catalog.locales().collect::<Vec<_>>(),
            "translation engine initialized"
        );

        Self {
            inner: Arc::new(Inner {
                catalog,
                options,
                language: RwLock::new(language),
                listeners: RwLock::new(Vec::new()),
                next_listener: AtomicU64::new(0),
                dispatch: Mutex::new(Dispatch::default()),
            }),
        }
    }

    /// The catalog this engine resolves keys against.
    /// 引擎用于解析键的目录。
    pub fn catalog(&self) -> &ResourceCatalog {
        &self.inner.catalog
    }

    /// The options the engine was initialized with.
    /// 引擎初始化时使用的选项。
    pub fn options(&self) -> &EngineOptions {
        &self.inner.options
    }

    /// The active language marker.
    pub fn language(&self) -> String {
        self.inner
            .language
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Switches the active language.
    ///
    /// `None`, an empty code, or the code that is already active leave the
    /// engine untouched and notify nobody. Any other code becomes active, even
    /// when the catalog has no entry for it.
    ///
    /// Listeners see switches in the order they were applied, so the last
    /// notified code is always the active one. When another thread is already
    /// notifying, the switch is queued and delivered by that thread. Listeners
    /// run without any engine lock held and may switch languages or
    /// (un)register listeners themselves.
    ///
    /// 切换当前语言。`None`、空代码或与当前语言相同的代码不会产生任何效果；
    /// 其他任何代码都会成为当前语言，即使目录中没有对应条目。
    /// 监听器按切换的应用顺序收到通知，最后通知的代码始终是当前语言。
    pub fn change_language(&self, next: Option<&str>) {
        let Some(next) = next.filter(|code| !code.is_empty()) else {
            return;
        };

        {
            let mut current = self
                .inner
                .language
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            if *current == next {
                return;
            }
            let previous = std::mem::replace(&mut *current, next.to_string());
            tracing::debug!(from = %previous, to = next, "language changed");
            if !self.inner.catalog.has_locale(next) {
                tracing::debug!(language = next, "no catalog entry, lookups use the fallback chain");
            }

            // Queued while the language lock is held: queue order is apply order.
            let mut dispatch = self.lock_dispatch();
            dispatch.pending.push_back(next.to_string());
            if dispatch.running {
                return;
            }
            dispatch.running = true;
        }

        self.drain_notifications();
    }

    fn lock_dispatch(&self) -> std::sync::MutexGuard<'_, Dispatch> {
        self.inner
            .dispatch
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn drain_notifications(&self) {
        loop {
            let language = {
                let mut dispatch = self.lock_dispatch();
                match dispatch.pending.pop_front() {
                    Some(language) => language,
                    None => {
                        dispatch.running = false;
                        return;
                    }
                }
            };

            let listeners: Vec<LanguageListener> = self
                .inner
                .listeners
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .iter()
                .map(|(_, listener)| Arc::clone(listener))
                .collect();
            for listener in listeners {
                listener(&language);
            }
        }
    }

    /// Registers a callback for effective language switches.
    pub fn on_language_changed<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        let id = ListenerId(self.inner.next_listener.fetch_add(1, Ordering::Relaxed));
        self.inner
            .listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::new(listener)));
        id
    }

    /// Unregisters a callback. Returns `false` if it was not registered.
    pub fn remove_listener(&self, id: ListenerId) -> bool {
        let mut listeners = self
            .inner
            .listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let before = listeners.len();
        listeners.retain(|(registered, _)| *registered != id);
        listeners.len() != before
    }

    /// Languages consulted for a lookup, most specific first.
    ///
    /// `"de-CH"` with fallback `"en"` gives `["de-CH", "de", "en"]`.
    pub fn languages(&self) -> Vec<String> {
        language_chain(&self.language(), &self.inner.options.fallback_language)
    }

    /// The first language of the chain that the catalog defines.
    pub fn resolved_language(&self) -> Option<String> {
        self.languages()
            .into_iter()
            .find(|language| self.inner.catalog.has_locale(language))
    }

    /// Translates `key` in `namespace`.
    pub fn t(&self, namespace: &str, key: &str) -> String {
        self.t_with(namespace, key, &[])
    }

    /// Translates `key` in `namespace` and fills `{{name}}` placeholders.
    pub fn t_with(&self, namespace: &str, key: &str, args: &Args<'_>) -> String {
        match self.resolve(namespace, key) {
            Some(template) => interpolate(&template, args, self.inner.options.escape_value),
            None => {
                tracing::trace!(namespace, key, "missing translation");
                self.missing(key)
            }
        }
    }

    /// Translates a `"namespace:key"` string. Without a namespace the
    /// default namespace is used.
    pub fn t_key(&self, key: &str) -> String {
        self.t_key_with(key, &[])
    }

    /// Translates a `"namespace:key"` string and fills `{{name}}` placeholders.
    /// 翻译 `"namespace:key"` 字符串并填充 `{{name}}` 占位符。
    pub fn t_key_with(&self, key: &str, args: &Args<'_>) -> String {
        let (namespace, key) = self.split_namespace(key);
        self.t_with(namespace, key, args)
    }

    /// Whether any language of the chain has a usable value for `key`.
    pub fn exists(&self, namespace: &str, key: &str) -> bool {
        self.resolve(namespace, key).is_some()
    }

    /// A translator bound to one namespace.
    pub fn fixed_t(&self, namespace: impl Into<String>) -> Translator {
        Translator {
            i18n: self.clone(),
            namespace: namespace.into(),
        }
    }

    fn resolve(&self, namespace: &str, key: &str) -> Option<String> {
        let options = &self.inner.options;
        for language in self.languages() {
            let Some(text) = self
                .inner
                .catalog
                .text(&language, namespace, key, options.key_separator)
            else {
                continue;
            };
            if text.is_empty() && !options.return_empty_string {
                continue;
            }
            return Some(text.to_string());
        }
        None
    }

    fn missing(&self, key: &str) -> String {
        if self.inner.options.return_empty_string {
            String::new()
        } else {
            key.to_string()
        }
    }

    fn split_namespace<'k>(&'k self, key: &'k str) -> (&'k str, &'k str) {
        let default = self.inner.options.default_namespace.as_str();
        match self.inner.options.namespace_separator {
            Some(separator) => key.split_once(separator).unwrap_or((default, key)),
            None => (default, key),
        }
    }
}

/// Builds the lookup chain for `language` with `fallback` last.
///
/// 为 `language` 构建查找链，`fallback` 位于最后。
pub fn language_chain(language: &str, fallback: &str) -> Vec<String> {
    let mut chain: Vec<String> = Vec::with_capacity(3);
    for candidate in [language, primary_language(language), fallback] {
        if !candidate.is_empty() && !chain.iter().any(|c| c == candidate) {
            chain.push(candidate.to_string());
        }
    }
    chain
}

/// Namespace-bound view of an engine, the counterpart of a per-screen
/// translation hook.
#[derive(Debug, Clone)]
pub struct Translator {
    i18n: I18n,
    namespace: String,
}

impl Translator {
    /// The namespace every lookup of this translator uses.
    /// 此翻译器所有查找使用的命名空间。
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Translates `key` in the bound namespace.
    /// 在绑定的命名空间中翻译 `key`。
    pub fn t(&self, key: &str) -> String {
        self.i18n.t(&self.namespace, key)
    }

    /// Translates `key` in the bound namespace and fills placeholders.
    /// 在绑定的命名空间中翻译 `key` 并填充占位符。
    pub fn t_with(&self, key: &str, args: &Args<'_>) -> String {
        self.i18n.t_with(&self.namespace, key, args)
    }

    /// Whether `key` resolves in the bound namespace.
    /// `key` 是否能在绑定的命名空间中解析。
    pub fn exists(&self, key: &str) -> bool {
        self.i18n.exists(&self.namespace, key)
    }

    /// The active language of the underlying engine.
    /// 底层引擎的当前语言。
    pub fn language(&self) -> String {
        self.i18n.language()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_chain_deduplicates() {
        assert_eq!(language_chain("de-CH", "en"), vec!["de-CH", "de", "en"]);
        assert_eq!(language_chain("de", "en"), vec!["de", "en"]);
        assert_eq!(language_chain("en-GB", "en"), vec!["en-GB", "en"]);
        assert_eq!(language_chain("en", "en"), vec!["en"]);
    }

    #[test]
    fn test_remove_listener() {
        let i18n = I18n::init(
            ResourceCatalog::default(),
            EngineOptions::default().with_language("en"),
            &SystemLocale,
        );
        let id = i18n.on_language_changed(|_| {});
        assert!(i18n.remove_listener(id));
        assert!(!i18n.remove_listener(id));
    }

    #[test]
    fn test_split_namespace_uses_default() {
        let i18n = I18n::init(
            ResourceCatalog::default(),
            EngineOptions::default().with_language("en"),
            &SystemLocale,
        );
        assert_eq!(i18n.split_namespace("navigation:back"), ("navigation", "back"));
        assert_eq!(i18n.split_namespace("back"), ("translation", "back"));
    }
}
