use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ragbuddy::rag::{Document, Retriever};

fn synthetic_corpus(size: usize) -> Vec<Document> {
    (0..size)
        .map(|i| {
            let text = format!(
                "document {} covers topic{} and topic{} with shared vocabulary for ranking",
                i,
                i % 17,
                i % 31
            );
            Document::new(format!("doc{}.txt", i), text)
        })
        .collect()
}

fn bench_retrieve(c: &mut Criterion) {
    let documents = synthetic_corpus(5_000);
    let retriever = Retriever::new();

    c.bench_function("retrieve_top3_5k_docs", |b| {
        b.iter(|| retriever.retrieve(black_box("topic3 shared ranking"), &documents, 3))
    });
}

criterion_group!(benches, bench_retrieve);
criterion_main!(benches);
