use criterion::{Criterion, criterion_group, criterion_main};
use sagebrush_engine::{build_content_blocks, list_section_titles};
mod common;

fn bench_block_building(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let content = common::generate_post_body(100);
    group.bench_function("build_content_blocks", |b| {
        b.iter(|| {
            let blocks = build_content_blocks(std::hint::black_box(&content));
            std::hint::black_box(blocks);
        });
    });

    group.bench_function("list_section_titles", |b| {
        b.iter(|| {
            let titles = list_section_titles(std::hint::black_box(&content));
            std::hint::black_box(titles);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_block_building);
criterion_main!(benches);
