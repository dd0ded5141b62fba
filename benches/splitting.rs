//! Benchmarks for document splitting strategies.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use docsplit::{Document, DocumentSplitter, SplitConfig, SplitUnit};

/// Prose with sentence, line, and passage structure, built from short
/// report-style paragraphs repeated up to `size` bytes.
fn sample_text(size: usize) -> String {
    let paragraphs = [
        "The survey covered twelve sites along the river delta. \
         Samples were collected at dawn and again at dusk.\n",
        "Water temperature varied by less than two degrees. \
         Sediment composition told a different story entirely.\n\n",
        "Upstream readings showed elevated mineral content. \
         No such pattern appeared below the confluence. \
         Further sampling is planned for the spring.\n\n",
    ];
    let mut text = String::with_capacity(size + 256);
    for paragraph in paragraphs.iter().cycle() {
        if text.len() >= size {
            break;
        }
        text.push_str(paragraph);
    }
    text.truncate(size);
    text
}

fn splitter(unit: SplitUnit, length: usize, overlap: usize) -> DocumentSplitter {
    DocumentSplitter::new(SplitConfig {
        split_by: unit,
        split_length: length,
        split_overlap: overlap,
        ..SplitConfig::default()
    })
    .unwrap()
}

fn bench_word_splitting(c: &mut Criterion) {
    let mut group = c.benchmark_group("split_by_word");

    for size in [1_000, 10_000, 100_000] {
        let text = sample_text(size);
        let plain = splitter(SplitUnit::Word, 200, 0);
        let overlapping = splitter(SplitUnit::Word, 200, 40);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("word", size), &text, |b, text| {
            b.iter(|| plain.run(black_box(&[Document::new(text.as_str())])))
        });
        group.bench_with_input(BenchmarkId::new("word_overlap", size), &text, |b, text| {
            b.iter(|| overlapping.run(black_box(&[Document::new(text.as_str())])))
        });
    }

    group.finish();
}

fn bench_sentence_splitting(c: &mut Criterion) {
    let mut group = c.benchmark_group("split_by_sentence");

    for size in [1_000, 10_000, 100_000] {
        let text = sample_text(size);
        let s = splitter(SplitUnit::Sentence, 3, 0);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("sentence", size), &text, |b, text| {
            b.iter(|| s.run(black_box(&[Document::new(text.as_str())])))
        });
    }

    group.finish();
}

fn bench_passage_splitting(c: &mut Criterion) {
    let mut group = c.benchmark_group("split_by_passage");

    for size in [1_000, 10_000, 100_000] {
        let text = sample_text(size);
        let s = splitter(SplitUnit::Passage, 2, 0);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("passage", size), &text, |b, text| {
            b.iter(|| s.run(black_box(&[Document::new(text.as_str())])))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_word_splitting,
    bench_sentence_splitting,
    bench_passage_splitting
);
criterion_main!(benches);
