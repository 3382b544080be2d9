use criterion::{Criterion, criterion_group, criterion_main};
use tagform_engine::{Options, Renderer, build_document, resolve};
mod common;

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    group.sample_size(10);

    let deep = resolve(&common::generate_deep_tree(500)).unwrap();
    group.bench_function("deep_500", |b| {
        b.iter(|| {
            let mut out = Vec::new();
            Renderer::new()
                .render(std::hint::black_box(&deep), &mut out)
                .unwrap();
            std::hint::black_box(out);
        });
    });

    let wide = resolve(&common::generate_wide_tree(5_000)).unwrap();
    group.bench_function("wide_5000", |b| {
        b.iter(|| {
            let mut out = Vec::new();
            Renderer::new()
                .render(std::hint::black_box(&wide), &mut out)
                .unwrap();
            std::hint::black_box(out);
        });
    });

    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    group.sample_size(10);

    let source = common::generate_wide_description(1_000);
    group.bench_function("build_document_1000_sections", |b| {
        b.iter(|| {
            let document =
                build_document(std::hint::black_box(&source), &Options::default()).unwrap();
            std::hint::black_box(document);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_render, bench_pipeline);
criterion_main!(benches);
