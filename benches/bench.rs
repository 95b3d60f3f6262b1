// Criterion benchmarks for the site logic

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use studio_return::core::{
    email::compose_contact_email,
    filters::CategoryFilter,
    grid::{compute_line_positions, GridLayout, Rect},
};
use studio_return::models::{Category, ContactSubmission, WorkItem};

fn create_item(id: usize) -> WorkItem {
    WorkItem {
        slug: format!("item-{}", id),
        title: format!("Item {}", id),
        description: "Brand identity and website design.".to_string(),
        category: if id % 3 == 0 { Category::Labs } else { Category::ClientWork },
        link: None,
    }
}

fn create_thumbs(rows: usize, columns: usize) -> Vec<Rect> {
    (0..rows * columns)
        .map(|i| {
            let row = (i / columns) as f64;
            let col = (i % columns) as f64;
            Rect::new(100.0 + row * 400.0, 400.0 + row * 400.0, col * 600.0, col * 600.0 + 560.0)
        })
        .collect()
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("category_filter");

    for item_count in [4, 50, 500].iter() {
        let items: Vec<WorkItem> = (0..*item_count).map(create_item).collect();
        let mut filter = CategoryFilter::new();
        filter.toggle(Category::Labs);

        group.bench_with_input(BenchmarkId::new("apply", item_count), item_count, |b, _| {
            b.iter(|| filter.apply(black_box(&items)).len());
        });
    }

    group.finish();
}

fn bench_grid_lines(c: &mut Criterion) {
    let section = Rect::new(0.0, 10_000.0, 0.0, 1200.0);
    let mut group = c.benchmark_group("grid_lines");

    for rows in [2, 10, 50].iter() {
        let layout = GridLayout { columns: 2, rows: *rows };
        let thumbs = create_thumbs(*rows, 2);

        group.bench_with_input(BenchmarkId::new("compute", rows), rows, |b, _| {
            b.iter(|| compute_line_positions(black_box(layout), black_box(&section), black_box(&thumbs)));
        });
    }

    group.finish();
}

fn bench_compose_email(c: &mut Criterion) {
    let submission = ContactSubmission {
        name: "Jane".to_string(),
        email: "jane@x.com".to_string(),
        message: "We'd love a <new> brand & website.\n".repeat(20),
    };

    c.bench_function("compose_contact_email", |b| {
        b.iter(|| compose_contact_email(black_box(&submission), "Form <form@s.co>", "hello@s.co"));
    });
}

criterion_group!(benches, bench_filter, bench_grid_lines, bench_compose_email);

criterion_main!(benches);
