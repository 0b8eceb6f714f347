use criterion::{criterion_group, criterion_main, Criterion};
use lse_core::index::scan_text;
use lse_core::tokenizer::{keywords, NoiseWords};
use lse_core::InvertedIndex;

const TEXT: &str = "The quick brown fox jumps over the lazy dog. Dogs, foxes and cats! \
Did the fox really jump?! Nobody knows; nobody cares: the end.";

fn bench_keywords(c: &mut Criterion) {
    let noise = NoiseWords::parse("the\nand\nover");
    let text = TEXT.repeat(64);
    c.bench_function("keywords_text", |b| b.iter(|| keywords(&text, &noise).count()));
}

fn bench_search(c: &mut Criterion) {
    let noise = NoiseWords::new();
    let mut index = InvertedIndex::new();
    for i in 0..500 {
        let text = format!("{} {}", "fox ".repeat(i % 37), "dog ".repeat(i % 23));
        index.merge_keywords(scan_text(&format!("doc{i}.txt"), &text, &noise));
    }
    c.bench_function("search_top5", |b| b.iter(|| index.search("fox", "dog")));
}

criterion_group!(benches, bench_keywords, bench_search);
criterion_main!(benches);
