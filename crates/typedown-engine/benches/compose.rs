use criterion::{Criterion, criterion_group, criterion_main};
use typedown_engine::{ActiveRegion, compose, parse_document};
use xi_rope::Rope;

fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold** and *italic* and `code`.\n\n- Bullet point\n  - Nested item\n- [ ] Open task\n- [x] Done task\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n| a | b |\n| - | - |\n| 1 | 2 |\n\n";
    base.repeat(size)
}

fn bench_decoration_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose");
    group.sample_size(10);

    let content = generate_markdown_content(100);
    let rope = Rope::from(content.as_str());

    group.bench_function("parse_document", |b| {
        b.iter(|| {
            let doc = parse_document(std::hint::black_box(&rope));
            std::hint::black_box(doc);
        });
    });

    group.bench_function("compose_no_active_line", |b| {
        let region = ActiveRegion::none();
        b.iter(|| {
            let decorations = compose(std::hint::black_box(&rope), &region);
            std::hint::black_box(decorations);
        });
    });

    group.bench_function("compose_with_active_line", |b| {
        let region = ActiveRegion {
            start_line: 5,
            end_line: 5,
        };
        b.iter(|| {
            let decorations = compose(std::hint::black_box(&rope), &region);
            std::hint::black_box(decorations);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_decoration_pipeline);
criterion_main!(benches);
