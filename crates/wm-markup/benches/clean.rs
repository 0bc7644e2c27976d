//! Benchmarks for the markup cleaning pipelines.

#![allow(clippy::format_push_string)] // Benchmark setup code, performance not critical

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use wm_markup::{ArticleCleaner, resolve_emphasis, strip_to_plain_text};

/// Generate article-shaped markup with the usual construct mix.
fn generate_article(sections: usize, paragraphs_per_section: usize) -> String {
    let mut markup = String::with_capacity(sections * paragraphs_per_section * 200);
    markup.push_str("{{Infobox thing\n| kind = generated\n}}\n\n");

    for i in 0..sections {
        markup.push_str(&format!("== Section {i} ==\n\n"));
        for j in 0..paragraphs_per_section {
            markup.push_str(&format!(
                "Paragraph {j} links to [[Target {i}|a target]] and [[Other {j}]], \
                 cites facts<ref>source {j}</ref> and marks ''italic'' and \
                 '''bold''' text.<!-- note -->\n\n"
            ));
        }
        markup.push_str("* a list item\n* [[Another link]]\n\n");
    }
    markup.push_str("== See also ==\n* [[Elsewhere]]\n");
    markup
}

fn bench_plain_text(c: &mut Criterion) {
    let markup = generate_article(10, 4);
    let mut group = c.benchmark_group("plain_text");
    group.throughput(Throughput::Bytes(markup.len() as u64));
    group.bench_function("delete", |b| {
        b.iter(|| strip_to_plain_text(&markup, None));
    });
    group.bench_function("filler", |b| {
        b.iter(|| strip_to_plain_text(&markup, Some(' ')));
    });
    group.finish();
}

fn bench_article_cleaner(c: &mut Criterion) {
    let markup = generate_article(10, 4);
    let cleaner = ArticleCleaner::default();
    c.bench_function("links_only", |b| {
        b.iter(|| cleaner.links_only(&markup));
    });
}

fn bench_emphasis(c: &mut Criterion) {
    let markup = generate_article(10, 4);
    c.bench_function("resolve_emphasis", |b| {
        b.iter(|| resolve_emphasis(&markup));
    });
}

criterion_group!(benches, bench_plain_text, bench_article_cleaner, bench_emphasis);
criterion_main!(benches);
