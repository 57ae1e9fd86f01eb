//! Benchmarks for preview composition.
//!
//! Run with: cargo bench

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use webforge_preview::compose;
use webforge_project::{Language, Project, ProjectFile};

/// Builds a project whose HTML body holds `sections` markup sections.
fn generate_project(sections: usize) -> Project {
    let body: String = (0..sections)
        .map(|i| format!("<section id=\"s{i}\"><h2>Section {i}</h2><p>Sample copy.</p></section>\n"))
        .collect();
    let html = format!("<!DOCTYPE html><html><head></head><body>{body}</body></html>");
    let css: String = (0..sections)
        .map(|i| format!("#s{i} {{ padding: {i}px; }}\n"))
        .collect();
    let js: String = (0..sections)
        .map(|i| format!("console.log('section {i}');\n"))
        .collect();

    let mut project = Project::new("bench");
    project
        .insert_file(ProjectFile::new("index.html", Language::Html, html))
        .unwrap();
    project
        .insert_file(ProjectFile::new("style.css", Language::Css, css))
        .unwrap();
    project
        .insert_file(ProjectFile::new("script.js", Language::Javascript, js))
        .unwrap();
    project
}

/// Benchmarks full composition at increasing project sizes.
fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose");

    for size in [10, 100, 1000, 10000].iter() {
        let project = generate_project(*size);

        group.bench_with_input(BenchmarkId::new("sections", size), &project, |b, project| {
            b.iter(|| {
                let doc = compose(black_box(project));
                black_box(doc)
            })
        });
    }

    group.finish();
}

/// Benchmarks composition when the head has to be synthesized.
fn bench_compose_head_synthesis(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose_head_synthesis");

    let mut project = Project::new("bench");
    let body: String = (0..1000).map(|i| format!("<p>line {i}</p>")).collect();
    project
        .insert_file(ProjectFile::new(
            "index.html",
            Language::Html,
            format!("<!DOCTYPE html>{body}"),
        ))
        .unwrap();
    project
        .insert_file(ProjectFile::new("style.css", Language::Css, "p { margin: 0; }"))
        .unwrap();

    group.bench_function("headless_document", |b| {
        b.iter(|| {
            let doc = compose(black_box(&project));
            black_box(doc)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_compose, bench_compose_head_synthesis);

criterion_main!(benches);
