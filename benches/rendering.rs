//! Benchmarks for document rendering.
//!
//! Run with: cargo bench

use criterion::{Criterion, criterion_group, criterion_main};
use serde_json::json;

use socsignals::document::stats;
use socsignals::{Document, HtmlConfig, generate_slug, render_document, render_html};

const PARAGRAPH: &str = "Attackers chained <b>two</b> bugs to reach \
    <i>remote code execution</i> on exposed appliances.";

const TITLE: &str = "Critical RCE in Widely-Deployed VPN Appliance: What You Need to Know (2024)";

/// Build a document shaped like a long research article.
fn sample_document(sections: usize) -> Document {
    let mut blocks = Vec::new();
    for i in 0..sections {
        blocks.push(json!({
            "type": "header",
            "data": {"level": 2, "text": format!("Section {i}")}
        }));
        blocks.push(json!({
            "type": "paragraph",
            "data": {"text": PARAGRAPH}
        }));
        blocks.push(json!({
            "type": "list",
            "data": {"style": "ordered", "items": ["Isolate", "Patch", "Monitor"]}
        }));
        blocks.push(json!({
            "type": "code",
            "data": {"code": "curl -s https://example.com/ioc.txt | grep -v '^#'"}
        }));
    }
    Document::from_value(json!({ "blocks": blocks }))
}

fn bench_render_nodes(c: &mut Criterion) {
    let doc = sample_document(100);
    c.bench_function("render_document", |b| {
        b.iter(|| render_document(Some(&doc)));
    });
}

fn bench_render_html(c: &mut Criterion) {
    let doc = sample_document(100);
    let config = HtmlConfig::default();
    c.bench_function("render_html", |b| {
        b.iter(|| render_html(Some(&doc), &config));
    });
}

fn bench_parse(c: &mut Criterion) {
    let json = serde_json::to_string(&sample_document(100)).unwrap();
    c.bench_function("parse_document", |b| {
        b.iter(|| Document::parse(&json).unwrap());
    });
}

fn bench_word_count(c: &mut Criterion) {
    let doc = sample_document(100);
    c.bench_function("word_count", |b| {
        b.iter(|| stats::word_count(&doc));
    });
}

fn bench_slug(c: &mut Criterion) {
    c.bench_function("generate_slug", |b| {
        b.iter(|| generate_slug(TITLE));
    });
}

criterion_group!(
    benches,
    bench_render_nodes,
    bench_render_html,
    bench_parse,
    bench_word_count,
    bench_slug
);
criterion_main!(benches);
