use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use xmlbuild::{Document, Element};

fn sample_document() -> Document {
    let mut doc = Document::new("catalog");
    for shelf in 0..10 {
        doc.root.with_element("shelf", |shelf_el| {
            shelf_el.attr("row", shelf.to_string());
            for book in 0..20 {
                shelf_el.with_element("book", |book_el| {
                    book_el.attr("id", format!("{shelf}-{book}"));
                    book_el.with_element("title", |title| {
                        title.text("Trees & Graphs");
                    });
                    book_el.comment("inventory checked");
                    book_el.cdata("raw <notes> live here");
                });
            }
        });
    }
    doc
}

fn bench_build(c: &mut Criterion) {
    c.bench_function("xmlbuild_build_tree", |b| b.iter(sample_document));
}

fn bench_render_compact(c: &mut Criterion) {
    let doc = sample_document();
    c.bench_function("xmlbuild_render_compact", |b| {
        b.iter(|| black_box(&doc).to_xml())
    });
}

fn bench_render_indented(c: &mut Criterion) {
    let doc = sample_document();
    c.bench_function("xmlbuild_render_indented", |b| {
        b.iter(|| black_box(&doc).to_xml_indented(2))
    });
}

criterion_group!(benches, bench_build, bench_render_compact, bench_render_indented);
criterion_main!(benches);
