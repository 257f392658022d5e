use criterion::{Criterion, criterion_group, criterion_main};
use macro_markup_engine::{editor, persisted, scan_events};

fn generate_content(macros: usize) -> String {
    let mut out = String::new();
    for i in 0..macros {
        out.push_str("Some paragraph of plain text that carries no tags at all. ");
        out.push_str(&format!(
            "<?UMBRACO_MACRO macroAlias=\"macro{i}\" page=\"{i}\" /> trailing text.\n"
        ));
    }
    out
}

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");
    group.sample_size(10);

    let content = generate_content(500);
    group.bench_function("scan_events", |b| {
        b.iter(|| {
            let events = scan_events(std::hint::black_box(&content)).unwrap();
            std::hint::black_box(events);
        });
    });

    group.finish();
}

fn bench_codecs(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");
    group.sample_size(10);

    let content = generate_content(500);
    let attrs = vec![("data-load-content".to_string(), "false".to_string())];
    group.bench_function("to_editor_markup", |b| {
        b.iter(|| {
            let markup = persisted::to_editor_markup(std::hint::black_box(&content), &attrs);
            std::hint::black_box(markup);
        });
    });

    let editor_markup = persisted::to_editor_markup(&content, &attrs);
    group.bench_function("to_persisted", |b| {
        b.iter(|| {
            let persisted = editor::to_persisted(std::hint::black_box(&editor_markup));
            std::hint::black_box(persisted);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_scan, bench_codecs);
criterion_main!(benches);
