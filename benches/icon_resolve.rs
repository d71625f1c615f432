// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use material_icons::{CacheConfig, IconRasterCache, IconStyle, Rasterizer, ResvgRasterizer};
use std::hint::black_box;

const ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" height="24" viewBox="0 0 24 24" width="24"><path d="M0 0h24v24H0z" fill="none"/><path d="M19 6.41L17.59 5 12 10.59 6.41 5 5 6.41 10.59 12 5 17.59 6.41 19 12 13.41 17.59 19 19 17.59 13.41 12z"/></svg>"#;

fn icon_resolve_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("icon_resolve");

    let store = tempfile::tempdir().expect("failed to create temp dir");
    let outlined = store.path().join("outlined");
    std::fs::create_dir_all(&outlined).expect("failed to create style dir");
    std::fs::write(outlined.join("close.svg"), ICON).expect("failed to write icon");

    group.bench_function("rasterize_close_48px", |b| {
        b.iter(|| {
            let _ = black_box(ResvgRasterizer.rasterize(ICON.as_bytes(), 48, 48).unwrap());
        });
    });

    let cache = IconRasterCache::new(store.path(), CacheConfig::default());
    cache
        .resolve("close", 48, "#000000", IconStyle::Outlined)
        .unwrap();

    group.bench_function("cached_resolve_close_48px", |b| {
        b.iter(|| {
            let _ = black_box(
                cache
                    .resolve("close", 48, "#000000", IconStyle::Outlined)
                    .unwrap(),
            );
        });
    });

    group.finish();
}

criterion_group!(benches, icon_resolve_benchmark);
criterion_main!(benches);
