// benches/extract.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};
use scraper::Html;

use degree_facts::{
    config::options::GradePattern,
    specs::{FactExtractor, FallbackExtractor, ImperialExtractor},
};

fn sample_page() -> String {
    let mut filler = String::new();
    for i in 0..200 {
        filler.push_str(&format!("<div class=\"card\"><p>Module {i}: lectures, labs and seminars.</p></div>"));
    }
    format!(
        r#"<html><head><title>University of Somewhere</title></head><body>
        <h1>BSc Mathematics with Statistics</h1>{filler}
        <section id="course-requirements">Our typical offer is A*AA including Mathematics. Contextual offers apply.</section>
        <div id="course-entry-1"><ul><li>A* in Mathematics</li><li>A in Further Mathematics</li></ul></div>
        </body></html>"#
    )
}

fn bench_extract(c: &mut Criterion) {
    let html = sample_page();
    let doc = Html::parse_document(&html);
    let fallback = FallbackExtractor::new(GradePattern::Flexible).expect("selectors compile");
    let imperial = ImperialExtractor::new().expect("selectors compile");

    c.bench_function("parse_document", |b| {
        b.iter(|| black_box(Html::parse_document(black_box(&html))))
    });

    c.bench_function("fallback_extract", |b| {
        b.iter(|| black_box(fallback.extract(black_box(&doc))))
    });

    c.bench_function("imperial_extract", |b| {
        b.iter(|| black_box(imperial.extract(black_box(&doc))))
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
