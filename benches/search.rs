use std::hint::black_box;

use brain_system::{ConversationStore, Selection, UploadFile, compose, ingest_batch, search};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

fn build_store(size: usize) -> ConversationStore {
    let topics = ["PT 등록 논의", "관리자페이지 작업", "마케팅 아이디어", "API refactor", "가스비 납부"];
    let uploads = (0..size).map(|i| {
        let topic = topics[i % topics.len()];
        UploadFile::new(
            format!("gemini-{}.txt", i),
            format!("{} {} with additional context for matching", topic, i),
        )
    });

    let mut store = ConversationStore::new();
    store.append(ingest_batch(uploads).records);
    store
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for size in [1_000, 10_000, 50_000].iter() {
        let store = build_store(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| search(&store, black_box("관리자")).len());
        });
    }

    group.finish();
}

fn bench_compose(c: &mut Criterion) {
    let store = build_store(1_000);
    let results = search(&store, "pt");

    let mut selection = Selection::new();
    for record in results.iter().take(50) {
        selection.toggle(record.id());
    }

    c.bench_function("compose_50_selected", |b| {
        b.iter(|| {
            let selected = selection.resolve(&results);
            compose(black_box(&selected), "위 내용을 정리해줘")
        });
    });
}

criterion_group!(benches, bench_search, bench_compose);
criterion_main!(benches);
