use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use pdfquery_core::model::{BoxQuery, Containment, Content, Document};

const PAGE_WIDTH: f64 = 612.0;
const PAGE_HEIGHT: f64 = 792.0;

#[derive(Clone)]
struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    fn gen_f64(&mut self, min: f64, max: f64) -> f64 {
        let n = self.next_u64() as f64 / u64::MAX as f64;
        min + (max - min) * n
    }
}

/// Text runs in three columns plus a ruled grid split into fragments.
fn generate_document(seed: u64, pages: usize, runs_per_page: usize) -> Document {
    let mut rng = XorShift64::new(seed);
    let mut doc = Document::new();
    for _ in 0..pages {
        let page = doc
            .add_page(PAGE_WIDTH, PAGE_HEIGHT)
            .expect("valid page size");
        for i in 0..runs_per_page {
            let col = (i % 3) as f64;
            let row = (i / 3) as f64;
            let x = 36.0 + col * 180.0 + rng.gen_f64(0.0, 4.0);
            let y = 740.0 - row * 14.0 - rng.gen_f64(0.0, 2.0);
            page.add_element(x, y, x + 120.0, y + 10.0, format!("run {i}"));
        }
        for row in 0..20 {
            let y = 36.0 + row as f64 * 36.0;
            for seg in 0..10 {
                let x = 36.0 + seg as f64 * 54.0;
                page.add_element(x, y, x + 54.0, y, Content::HorizontalLine);
            }
        }
    }
    doc
}

fn bench_everything(c: &mut Criterion) {
    let mut group = c.benchmark_group("document_everything");
    for pages in [1usize, 10, 50] {
        let mut doc = generate_document(0x5eed, pages, 150);
        doc.sort();
        group.bench_with_input(BenchmarkId::from_parameter(pages), &doc, |b, doc| {
            b.iter(|| black_box(doc.everything().count()))
        });
    }
    group.finish();
}

fn bench_defrag(c: &mut Criterion) {
    let doc = generate_document(0xdef7a9, 1, 150);
    c.bench_function("page_defrag_lines", |b| {
        b.iter_batched(
            || doc.clone(),
            |mut doc| {
                let page = doc.page_mut(0).expect("page exists");
                black_box(page.defrag_lines())
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_box_query(c: &mut Criterion) {
    let mut doc = generate_document(0xb0c5, 10, 150);
    doc.sort();
    let query = BoxQuery::new(0.0, 0.0, PAGE_WIDTH / 2.0, PAGE_HEIGHT / 2.0)
        .expect("valid box")
        .with_fuzzy_border(1.0);
    c.bench_function("element_set_inside", |b| {
        b.iter(|| {
            black_box(
                doc.everything()
                    .text()
                    .inside(&query, Containment::Whole)
                    .count(),
            )
        })
    });
}

criterion_group!(benches, bench_everything, bench_defrag, bench_box_query);
criterion_main!(benches);
