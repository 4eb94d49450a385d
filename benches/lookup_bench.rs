use criterion::{criterion_group, criterion_main, Criterion};
use locale_switch::core::detect::FixedLocale;
use locale_switch::{EngineOptions, I18n, ResourceCatalog};
use std::hint::black_box;

fn bench_lookup(c: &mut Criterion) {
    let catalog = ResourceCatalog::embedded().unwrap();
    let i18n = I18n::init(catalog, EngineOptions::default(), &FixedLocale::new("de-AT"));

    c.bench_function("t_active_language", |b| {
        b.iter(|| i18n.t(black_box("navigation"), black_box("projects")));
    });

    c.bench_function("t_fallback_language", |b| {
        b.iter(|| i18n.t(black_box("navigation"), black_box("feedback")));
    });

    c.bench_function("t_with_interpolation", |b| {
        b.iter(|| {
            i18n.t_key_with(
                black_box("notifications:reminderBody"),
                &[("project", &"Birds")],
            )
        });
    });
}

fn bench_change_language(c: &mut Criterion) {
    let catalog = ResourceCatalog::embedded().unwrap();
    let i18n = I18n::init(catalog, EngineOptions::default(), &FixedLocale::new("en-US"));

    c.bench_function("change_language_toggle", |b| {
        let mut german = false;
        b.iter(|| {
            german = !german;
            i18n.change_language(Some(if german { "de" } else { "en" }));
        });
    });
}

criterion_group!(benches, bench_lookup, bench_change_language);
criterion_main!(benches);
